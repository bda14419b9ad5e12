//! `keystore create` and `keystore list`.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::core::errors::Result;
use crate::core::seed::KeystoreArg;
use crate::core::wallet::Wallet;
use crate::keystore::v3::ScryptConfig;
use crate::keystore::Keystore;
use crate::output::{self, OutputFormat};

pub fn create(
    entries: &[KeystoreArg],
    dir: &Path,
    overwrite: bool,
    light_kdf: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    if overwrite && dir.exists() {
        info!(dir = %dir.display(), "removing existing keystore directory");
        fs::remove_dir_all(dir)?;
    }

    let keystore = if light_kdf {
        Keystore::with_scrypt(dir, ScryptConfig::LIGHT)
    } else {
        Keystore::new(dir)
    };

    for (i, entry) in entries.iter().enumerate() {
        let wallet = match entry.path.as_deref() {
            Some(path) => Wallet::from_mnemonic_path(&entry.mnemonic, path, "")?,
            None => Wallet::from_seed(&entry.seed()?, "")?,
        };
        info!(index = i + 1, address = %wallet.address, "creating wallet in keystore");
        keystore.import_private_key(&wallet.private_key, &entry.password, false)?;
    }

    let accounts = keystore.accounts()?;
    output::keystore::write_create(out, &accounts, format)
}

pub fn list(dir: &Path, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let keystore = Keystore::new(dir);
    let accounts = keystore.accounts()?;
    output::keystore::write_list(out, &accounts, format)
}
