//! Encrypted on-disk keystore: a directory of version-3 Web3 key files.
//!
//! Files follow the go-ethereum naming convention
//! `UTC--<timestamp>--<address>` so collisions are detected by address.
//! The directory is only ever enumerated on demand; nothing is cached.

pub mod v3;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::core::errors::{EthwError, Result};
use crate::core::wallet::{checksum_address, Wallet};
use v3::{KeystoreV3, ScryptConfig};

/// An account discovered in the keystore directory.
#[derive(Debug, Clone, Serialize)]
pub struct KeystoreAccount {
    /// EIP-55 checksummed address.
    pub address: String,
    /// Path of the key file backing the account.
    pub path: PathBuf,
}

/// A keystore directory and the scrypt parameters used for new imports.
pub struct Keystore {
    dir: PathBuf,
    scrypt: ScryptConfig,
}

impl Keystore {
    /// Open a keystore at `dir` with standard scrypt parameters. The
    /// directory is created lazily on first import.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), scrypt: ScryptConfig::STANDARD }
    }

    /// Open a keystore with explicit scrypt parameters.
    pub fn with_scrypt(dir: impl Into<PathBuf>, scrypt: ScryptConfig) -> Self {
        Self { dir: dir.into(), scrypt }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Import a hex private key, encrypting it under `password`.
    ///
    /// Refuses to import an address that already has a key file unless
    /// `overwrite` is set, in which case the old file is deleted first.
    pub fn import_private_key(
        &self,
        private_key: &str,
        password: &str,
        overwrite: bool,
    ) -> Result<KeystoreAccount> {
        let wallet = Wallet::from_private_key_hex(private_key, "")?;

        if self.has_address(&wallet.address)? {
            if !overwrite {
                return Err(EthwError::Keystore(format!(
                    "address {} already exists",
                    wallet.address
                )));
            }
            self.delete_account(&wallet.address)?;
        }

        let key_bytes = Zeroizing::new(
            hex::decode(&wallet.private_key)
                .map_err(|e| EthwError::Crypto(format!("invalid private key hex: {e}")))?,
        );
        let key_file = v3::encrypt(&key_bytes, password, &wallet.address, self.scrypt)?;

        self.ensure_dir()?;
        let path = self.dir.join(key_file_name(&key_file.address));
        fs::write(&path, serde_json::to_vec(&key_file)?)?;
        restrict_permissions(&path);

        info!(address = %wallet.address, path = %path.display(), "imported key into keystore");
        Ok(KeystoreAccount { address: wallet.address, path })
    }

    /// Enumerate all key files in the directory, sorted by file name.
    ///
    /// Files that are not parseable key files are skipped with a warning.
    pub fn accounts(&self) -> Result<Vec<KeystoreAccount>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        entries.sort();

        let mut accounts = Vec::with_capacity(entries.len());
        for path in entries {
            match read_key_file(&path) {
                Ok(key_file) => match hex::decode(&key_file.address) {
                    Ok(raw) => {
                        accounts.push(KeystoreAccount { address: checksum_address(&raw), path });
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "skipping key file with invalid address");
                    }
                },
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unparseable key file");
                }
            }
        }
        Ok(accounts)
    }

    /// Whether a key file for `address` exists.
    pub fn has_address(&self, address: &str) -> Result<bool> {
        let needle = normalize(address);
        Ok(self.accounts()?.iter().any(|account| normalize(&account.address) == needle))
    }

    /// Delete the key file for `address` without requiring its password.
    pub fn delete_account(&self, address: &str) -> Result<()> {
        let needle = normalize(address);
        for account in self.accounts()? {
            if normalize(&account.address) == needle {
                fs::remove_file(&account.path)?;
                info!(address = %account.address, "deleted key file");
                return Ok(());
            }
        }
        Err(EthwError::Keystore(format!("address {address} does not exist")))
    }

    /// Decrypt the private key for `address`, verifying `password`.
    pub fn decrypt(&self, address: &str, password: &str) -> Result<Zeroizing<Vec<u8>>> {
        let needle = normalize(address);
        for account in self.accounts()? {
            if normalize(&account.address) == needle {
                let key_file = read_key_file(&account.path)?;
                return v3::decrypt(&key_file, password);
            }
        }
        Err(EthwError::Keystore(format!("address {address} does not exist")))
    }

    fn ensure_dir(&self) -> Result<()> {
        if self.dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(&self.dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700));
        }
        Ok(())
    }
}

fn read_key_file(path: &Path) -> Result<KeystoreV3> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

fn key_file_name(address: &str) -> String {
    format!("UTC--{}--{}", Utc::now().format("%Y-%m-%dT%H-%M-%S%.9fZ"), address)
}

fn normalize(address: &str) -> String {
    address.trim_start_matches("0x").to_lowercase()
}

fn restrict_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
            warn!(path = %path.display(), error = %e, "failed to restrict key file permissions");
        }
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
}
