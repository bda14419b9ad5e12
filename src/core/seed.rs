//! Flag-string parsing for seed material.
//!
//! Wallet seeds arrive as `seed=<material>[;alias=<name>]`; keystore entries
//! as `seed=<mnemonic>[;password=<pw>][;path=<bip44 path>]`. Both are parsed
//! with regular expressions and whitespace-trimmed.

use std::str::FromStr;

use bip39::Mnemonic;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::errors::EthwError;

static SEED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:seed=([^;]*);?)(?:alias=([^;]*);?)?").expect("static regex"));

static WALLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:seed=([^;]*))(?:;password=([^;]*))?(?:;path=([^;]*))?").expect("static regex")
});

/// A `seed=...;alias=...` argument for `wallet create`.
///
/// The seed may be a BIP-39 mnemonic or arbitrary raw material; validation is
/// deferred to [`SeedArg::material`] so raw seeds stay usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedArg {
    pub seed: String,
    pub alias: Option<String>,
}

impl FromStr for SeedArg {
    type Err = EthwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = SEED_RE.captures(s).ok_or(EthwError::InvalidSeedFormat)?;
        let seed = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if seed.is_empty() {
            debug!("no seed captured from argument");
            return Err(EthwError::InvalidSeedFormat);
        }
        let alias = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|a| !a.is_empty())
            .map(str::to_owned);
        Ok(Self { seed: seed.to_owned(), alias })
    }
}

impl SeedArg {
    /// Expand the seed string into raw seed material.
    ///
    /// Valid BIP-39 mnemonics go through the standard seed derivation with an
    /// empty passphrase; anything else is taken as literal bytes.
    pub fn material(&self) -> Zeroizing<Vec<u8>> {
        match Mnemonic::parse(&self.seed) {
            Ok(mnemonic) => Zeroizing::new(mnemonic.to_seed("").to_vec()),
            Err(_) => Zeroizing::new(self.seed.as_bytes().to_vec()),
        }
    }
}

/// A `seed=...;password=...;path=...` argument for `keystore create`.
///
/// Unlike [`SeedArg`], the seed must be a checksum-valid BIP-39 mnemonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeystoreArg {
    pub mnemonic: String,
    pub password: String,
    pub path: Option<String>,
}

impl FromStr for KeystoreArg {
    type Err = EthwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = WALLET_RE.captures(s).ok_or(EthwError::InvalidSeedFormat)?;
        let mnemonic = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if mnemonic.is_empty() {
            return Err(EthwError::InvalidSeedFormat);
        }
        if Mnemonic::parse(mnemonic).is_err() {
            debug!("seed captured but mnemonic validation failed");
            return Err(EthwError::InvalidMnemonic);
        }
        let password = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default().to_owned();
        let path = caps
            .get(3)
            .map(|m| m.as_str().trim())
            .filter(|p| !p.is_empty())
            .map(str::to_owned);
        Ok(Self { mnemonic: mnemonic.to_owned(), password, path })
    }
}

impl KeystoreArg {
    /// BIP-39 seed for the mnemonic, empty passphrase.
    pub fn seed(&self) -> Result<Zeroizing<Vec<u8>>, EthwError> {
        let mnemonic = Mnemonic::parse(&self.mnemonic).map_err(|_| EthwError::InvalidMnemonic)?;
        Ok(Zeroizing::new(mnemonic.to_seed("").to_vec()))
    }
}
