//! BIP-32 child-key derivation along conventional `m/44'/60'/0'/0/0` paths.
//!
//! The heavy lifting (HMAC-SHA512 trees, scalar arithmetic) lives in
//! `coins-bip32`; this module only parses path notation and walks the tree.

use coins_bip32::xkeys::{Parent, XPriv};
use k256::ecdsa::SigningKey;

use crate::core::errors::{EthwError, Result};

/// Default Ethereum derivation path.
pub const ETHEREUM_PATH: &str = "m/44'/60'/0'/0/0";

const HARDENED: u32 = 0x8000_0000;

/// Parse `m/44'/60'/0'/0/0` notation into child indices.
///
/// `'` or `h` (case-insensitive) marks a hardened component.
pub fn parse_path(path: &str) -> Result<Vec<u32>> {
    let mut components = path.trim().split('/');
    if !matches!(components.next(), Some("m") | Some("M")) {
        return Err(EthwError::KeyDerivation(format!("path must start with m/: {path}")));
    }

    let mut indices = Vec::new();
    for component in components {
        let (raw, hardened) = match component.strip_suffix(['\'', 'h', 'H']) {
            Some(raw) => (raw, true),
            None => (component, false),
        };
        let index: u32 = raw
            .parse()
            .map_err(|_| EthwError::KeyDerivation(format!("invalid path component: {component}")))?;
        if index >= HARDENED {
            return Err(EthwError::KeyDerivation(format!("index out of range: {component}")));
        }
        indices.push(if hardened { index | HARDENED } else { index });
    }

    if indices.is_empty() {
        return Err(EthwError::KeyDerivation(format!("empty derivation path: {path}")));
    }
    Ok(indices)
}

/// Derive the signing key at `path` from a BIP-39 seed.
pub fn derive_key(seed: &[u8], path: &str) -> Result<SigningKey> {
    let mut xprv = XPriv::root_from_seed(seed, None)
        .map_err(|e| EthwError::KeyDerivation(format!("bip32 root: {e}")))?;
    for index in parse_path(path)? {
        xprv = xprv
            .derive_child(index)
            .map_err(|e| EthwError::KeyDerivation(format!("bip32 child {index}: {e}")))?;
    }
    let key: &SigningKey = xprv.as_ref();
    Ok(key.clone())
}
