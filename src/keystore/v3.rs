//! Web3 Secret Storage (version 3) key files.
//!
//! scrypt derives a 32-byte key from the password; the first half encrypts
//! the private key with AES-128-CTR, the second half feeds the Keccak-256
//! MAC over the ciphertext. All primitives come from RustCrypto crates.

use aes::cipher::{KeyIvInit, StreamCipher};
use rand::rngs::OsRng;
use rand::RngCore;
use scrypt::{scrypt, Params as ScryptParams};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::core::errors::{EthwError, Result};

type Aes128Ctr = ctr::Ctr64BE<aes::Aes128>;

const DKLEN: u32 = 32;

/// scrypt work parameters for key-file encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScryptConfig {
    pub log_n: u8,
    pub r: u32,
    pub p: u32,
}

impl ScryptConfig {
    /// go-ethereum standard parameters: N=2^18, r=8, p=1.
    pub const STANDARD: Self = Self { log_n: 18, r: 8, p: 1 };

    /// Light parameters (N=2^12, r=8, p=6) for tests and throwaway keystores.
    pub const LIGHT: Self = Self { log_n: 12, r: 8, p: 6 };

    fn n(&self) -> u32 {
        1 << self.log_n
    }
}

/// On-disk key-file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeystoreV3 {
    pub version: u32,
    pub id: String,
    /// Lowercase hex address without `0x` prefix.
    pub address: String,
    pub crypto: CryptoSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CryptoSection {
    pub cipher: String,
    pub ciphertext: String,
    pub cipherparams: CipherParams,
    pub kdf: String,
    pub kdfparams: KdfParams,
    pub mac: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CipherParams {
    pub iv: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KdfParams {
    pub dklen: u32,
    pub n: u32,
    pub r: u32,
    pub p: u32,
    pub salt: String,
}

/// Encrypt a 32-byte private key under `password`.
pub fn encrypt(
    private_key: &[u8],
    password: &str,
    address: &str,
    config: ScryptConfig,
) -> Result<KeystoreV3> {
    if private_key.len() != 32 {
        return Err(EthwError::Crypto("private key must be 32 bytes".into()));
    }

    let mut salt = [0u8; 32];
    let mut iv = [0u8; 16];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut iv);

    let derived = derive_cipher_key(password, &salt, config.log_n, config.r, config.p)?;

    let mut ciphertext = private_key.to_vec();
    let mut cipher = Aes128Ctr::new(derived[..16].into(), iv.as_slice().into());
    cipher.apply_keystream(&mut ciphertext);

    Ok(KeystoreV3 {
        version: 3,
        id: Uuid::new_v4().to_string(),
        address: address.trim_start_matches("0x").to_lowercase(),
        crypto: CryptoSection {
            cipher: "aes-128-ctr".to_string(),
            ciphertext: hex::encode(&ciphertext),
            cipherparams: CipherParams { iv: hex::encode(iv) },
            kdf: "scrypt".to_string(),
            kdfparams: KdfParams {
                dklen: DKLEN,
                n: config.n(),
                r: config.r,
                p: config.p,
                salt: hex::encode(salt),
            },
            mac: hex::encode(mac(&derived[16..], &ciphertext)),
        },
    })
}

/// Decrypt a key file, verifying the password through the MAC.
pub fn decrypt(keystore: &KeystoreV3, password: &str) -> Result<Zeroizing<Vec<u8>>> {
    if keystore.version != 3 {
        return Err(EthwError::Keystore(format!(
            "unsupported keystore version: {}",
            keystore.version
        )));
    }
    if keystore.crypto.kdf != "scrypt" {
        return Err(EthwError::Keystore(format!("unsupported kdf: {}", keystore.crypto.kdf)));
    }

    let params = &keystore.crypto.kdfparams;
    if params.dklen != DKLEN {
        return Err(EthwError::Keystore(format!("unsupported kdf dklen: {}", params.dklen)));
    }
    if !params.n.is_power_of_two() || params.n < 2 {
        return Err(EthwError::Keystore(format!("invalid scrypt n: {}", params.n)));
    }
    let log_n = params.n.trailing_zeros() as u8;

    let salt = decode_field(&params.salt, "salt")?;
    let iv = decode_field(&keystore.crypto.cipherparams.iv, "iv")?;
    let ciphertext = decode_field(&keystore.crypto.ciphertext, "ciphertext")?;
    let expected_mac = decode_field(&keystore.crypto.mac, "mac")?;

    let derived = derive_cipher_key(password, &salt, log_n, params.r, params.p)?;
    if mac(&derived[16..], &ciphertext) != expected_mac.as_slice() {
        return Err(EthwError::Keystore("invalid password or corrupted key file".into()));
    }

    let mut plaintext = Zeroizing::new(ciphertext);
    let mut cipher = Aes128Ctr::new(derived[..16].into(), iv.as_slice().into());
    cipher.apply_keystream(&mut plaintext);
    Ok(plaintext)
}

fn derive_cipher_key(
    password: &str,
    salt: &[u8],
    log_n: u8,
    r: u32,
    p: u32,
) -> Result<Zeroizing<[u8; 32]>> {
    let params = ScryptParams::new(log_n, r, p, DKLEN as usize)
        .map_err(|e| EthwError::Crypto(format!("invalid scrypt params: {e}")))?;
    let mut derived = Zeroizing::new([0u8; 32]);
    scrypt(password.as_bytes(), salt, &params, &mut derived[..])
        .map_err(|e| EthwError::Crypto(format!("scrypt failed: {e}")))?;
    Ok(derived)
}

fn mac(mac_key: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    let mut hasher = Keccak256::new();
    hasher.update(mac_key);
    hasher.update(ciphertext);
    hasher.finalize().to_vec()
}

fn decode_field(value: &str, field: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|e| EthwError::Keystore(format!("invalid {field} hex: {e}")))
}
