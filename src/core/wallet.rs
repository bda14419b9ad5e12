//! Wallet derivation from seed material.
//!
//! Default strategy keeps parity with the original tool: the private key is
//! the Keccak-256 digest of the seed material. HD derivation along a BIP-44
//! path is used when an explicit `path=` is supplied.

use bip39::Mnemonic;
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use serde::Serialize;
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

use crate::core::derivation;
use crate::core::errors::{EthwError, Result};

/// A derived Ethereum keypair, in memory only for one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Wallet {
    pub alias: String,
    /// EIP-55 checksummed address, `0x`-prefixed.
    pub address: String,
    /// 32-byte private key, hex without prefix.
    pub private_key: String,
    /// Uncompressed SEC1 public key (65 bytes), hex without prefix.
    pub public_key: String,
}

impl Wallet {
    /// Derive a wallet from raw seed material: private key = Keccak-256(seed).
    pub fn from_seed(seed: &[u8], alias: &str) -> Result<Self> {
        let digest = Zeroizing::new(Keccak256::digest(seed).to_vec());
        let key = SigningKey::from_slice(&digest).map_err(|e| {
            EthwError::Crypto(format!("seed digest is not a valid private key: {e}"))
        })?;
        Ok(Self::from_signing_key(&key, alias))
    }

    /// Derive a wallet from a BIP-39 mnemonic along a BIP-44 path.
    pub fn from_mnemonic_path(mnemonic: &str, path: &str, alias: &str) -> Result<Self> {
        let mnemonic = Mnemonic::parse(mnemonic).map_err(|_| EthwError::InvalidMnemonic)?;
        let seed = Zeroizing::new(mnemonic.to_seed("").to_vec());
        let key = derivation::derive_key(&seed, path)?;
        Ok(Self::from_signing_key(&key, alias))
    }

    /// Reconstruct a wallet from a hex private key (with or without `0x`).
    pub fn from_private_key_hex(private_key: &str, alias: &str) -> Result<Self> {
        let stripped = private_key.trim().trim_start_matches("0x");
        let bytes = Zeroizing::new(
            hex::decode(stripped)
                .map_err(|e| EthwError::Crypto(format!("invalid private key hex: {e}")))?,
        );
        let key = SigningKey::from_slice(&bytes)
            .map_err(|e| EthwError::Crypto(format!("invalid private key: {e}")))?;
        Ok(Self::from_signing_key(&key, alias))
    }

    pub(crate) fn from_signing_key(key: &SigningKey, alias: &str) -> Self {
        let point = key.verifying_key().to_encoded_point(false);
        let public_key = point.as_bytes();
        // Address = last 20 bytes of Keccak-256 over the 64-byte point body.
        let digest = Keccak256::digest(&public_key[1..]);
        Self {
            alias: alias.to_owned(),
            address: checksum_address(&digest[12..]),
            private_key: hex::encode(key.to_bytes()),
            public_key: hex::encode(public_key),
        }
    }
}

/// EIP-55 checksummed rendering of a 20-byte address.
pub fn checksum_address(bytes: &[u8]) -> String {
    let lower = hex::encode(bytes);
    let hash = hex::encode(Keccak256::digest(lower.as_bytes()));

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (ch, hash_ch) in lower.chars().zip(hash.chars()) {
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if hash_ch.to_digit(16).unwrap_or(0) >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn from_seed_shapes() {
        let wallet = Wallet::from_seed(b"testseed", "testalias").unwrap();
        assert_eq!(wallet.alias, "testalias");
        assert_eq!(wallet.address.len(), 42);
        assert!(wallet.address.starts_with("0x"));
        assert_eq!(wallet.private_key.len(), 64);
        assert_eq!(wallet.public_key.len(), 130);
        assert!(wallet.public_key.starts_with("04"));
    }

    #[test]
    fn from_seed_is_deterministic() {
        let a = Wallet::from_seed(b"testseed", "").unwrap();
        let b = Wallet::from_seed(b"testseed", "").unwrap();
        let c = Wallet::from_seed(b"otherseed", "").unwrap();
        assert_eq!(a.address, b.address);
        assert_ne!(a.address, c.address);
    }

    #[test]
    fn bip44_derivation_matches_known_vector() {
        // Standard test mnemonic, m/44'/60'/0'/0/0.
        let wallet = Wallet::from_mnemonic_path(MNEMONIC, "m/44'/60'/0'/0/0", "").unwrap();
        assert_eq!(wallet.address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    }

    #[test]
    fn bip44_indices_diverge() {
        let a = Wallet::from_mnemonic_path(MNEMONIC, "m/44'/60'/0'/0/0", "").unwrap();
        let b = Wallet::from_mnemonic_path(MNEMONIC, "m/44'/60'/0'/0/1", "").unwrap();
        assert_ne!(a.address, b.address);
    }

    #[test]
    fn invalid_mnemonic_rejected() {
        let err = Wallet::from_mnemonic_path("not a mnemonic at all", "m/44'/60'/0'/0/0", "")
            .unwrap_err();
        assert!(matches!(err, EthwError::InvalidMnemonic));
    }

    #[test]
    fn private_key_round_trips() {
        let original = Wallet::from_seed(b"roundtrip", "a").unwrap();
        let restored = Wallet::from_private_key_hex(&original.private_key, "b").unwrap();
        assert_eq!(original.address, restored.address);
        assert_eq!(original.public_key, restored.public_key);
    }

    #[test]
    fn eip55_checksum_vectors() {
        // Vectors from the EIP-55 specification.
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let raw = hex::decode(expected.trim_start_matches("0x").to_lowercase()).unwrap();
            assert_eq!(checksum_address(&raw), expected);
        }
    }

    #[test]
    fn serializes_expected_fields() {
        let wallet = Wallet::from_seed(b"json", "w1").unwrap();
        let value = serde_json::to_value(&wallet).unwrap();
        assert_eq!(value["alias"], "w1");
        assert!(value["address"].as_str().unwrap().starts_with("0x"));
        assert!(value.get("private_key").is_some());
        assert!(value.get("public_key").is_some());
    }
}
