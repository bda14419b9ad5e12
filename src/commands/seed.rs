//! `seed create`: fresh BIP-39 mnemonics from OS randomness.

use std::io::Write;

use bip39::Mnemonic;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::cli::MnemonicLength;
use crate::core::errors::{EthwError, Result};
use crate::output::seed::SeedRecord;
use crate::output::{self, OutputFormat};

pub fn create(
    password: &str,
    words: MnemonicLength,
    count: u32,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut entropy = Zeroizing::new(vec![0u8; words.entropy_bytes()]);
        OsRng.fill_bytes(entropy.as_mut_slice());
        let mnemonic = Mnemonic::from_entropy(&entropy)
            .map_err(|e| EthwError::Crypto(format!("mnemonic generation failed: {e}")))?;
        let seed = Zeroizing::new(mnemonic.to_seed(password).to_vec());
        records.push(SeedRecord { mnemonic: mnemonic.to_string(), seed: hex::encode(&*seed) });
    }
    output::seed::write(out, &records, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(password: &str, words: MnemonicLength, count: u32) -> Vec<serde_json::Value> {
        let mut buf = Vec::new();
        create(password, words, count, OutputFormat::Json, &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn generates_requested_count_and_length() {
        let records = generate("", MnemonicLength::Words12, 3);
        assert_eq!(records.len(), 3);
        for record in &records {
            let mnemonic = record["mnemonic"].as_str().unwrap();
            assert_eq!(mnemonic.split_whitespace().count(), 12);
            assert!(Mnemonic::parse(mnemonic).is_ok());
            // 64-byte BIP-39 seed, hex-encoded.
            assert_eq!(record["seed"].as_str().unwrap().len(), 128);
        }
    }

    #[test]
    fn twenty_four_word_mnemonics() {
        let records = generate("", MnemonicLength::Words24, 1);
        assert_eq!(records[0]["mnemonic"].as_str().unwrap().split_whitespace().count(), 24);
    }

    #[test]
    fn mnemonics_are_unique() {
        let records = generate("", MnemonicLength::Words12, 2);
        assert_ne!(records[0]["mnemonic"], records[1]["mnemonic"]);
    }

    #[test]
    fn password_changes_derived_seed() {
        // Generated mnemonics differ, so compare derivation of one fixed mnemonic.
        let mnemonic = Mnemonic::parse(
            "legal winner thank year wave sausage worth useful legal winner thank yellow",
        )
        .unwrap();
        assert_ne!(mnemonic.to_seed(""), mnemonic.to_seed("TREZOR"));
    }
}
