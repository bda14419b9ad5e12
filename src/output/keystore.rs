//! Keystore renderers: account creation detail and plain address listings.

use std::io::Write;

use serde_json::json;

use crate::core::errors::Result;
use crate::keystore::KeystoreAccount;
use crate::output::{new_table, OutputFormat};

/// Render accounts after `keystore create`: address plus key-file path.
pub fn write_create(
    out: &mut impl Write,
    accounts: &[KeystoreAccount],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Account Creation Details:")?;
            for account in accounts {
                writeln!(
                    out,
                    "Address: {}\nKeystore Path: {}\n",
                    account.address,
                    account.path.display()
                )?;
            }
            Ok(())
        }
        OutputFormat::Table => {
            let mut table = new_table();
            table.set_header(["#", "Address", "Keystore Path"]);
            for (i, account) in accounts.iter().enumerate() {
                table.add_row([
                    (i + 1).to_string(),
                    account.address.clone(),
                    account.path.display().to_string(),
                ]);
            }
            writeln!(out, "{table}")?;
            Ok(())
        }
        OutputFormat::Json => {
            let entries: Vec<_> = accounts
                .iter()
                .map(|account| {
                    json!({
                        "address": account.address,
                        "keystore_path": account.path.display().to_string(),
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string(&entries)?)?;
            Ok(())
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["Address", "Keystore Path"])?;
            for account in accounts {
                writer
                    .write_record([account.address.clone(), account.path.display().to_string()])?;
            }
            writer.flush()?;
            Ok(())
        }
    }
}

/// Render accounts for `keystore list`: addresses only.
pub fn write_list(
    out: &mut impl Write,
    accounts: &[KeystoreAccount],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if accounts.is_empty() {
                writeln!(out, "No accounts found.")?;
                return Ok(());
            }
            writeln!(out, "List of Wallets:")?;
            for (i, account) in accounts.iter().enumerate() {
                writeln!(out, "Wallet {}: {}", i + 1, account.address)?;
            }
            Ok(())
        }
        OutputFormat::Table => {
            let mut table = new_table();
            table.set_header(["#", "Address"]);
            for (i, account) in accounts.iter().enumerate() {
                table.add_row([(i + 1).to_string(), account.address.clone()]);
            }
            writeln!(out, "{table}")?;
            Ok(())
        }
        OutputFormat::Json => {
            let addresses: Vec<_> = accounts.iter().map(|a| a.address.clone()).collect();
            writeln!(out, "{}", serde_json::to_string(&json!({ "accounts": addresses }))?)?;
            Ok(())
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["Index", "Address"])?;
            for (i, account) in accounts.iter().enumerate() {
                writer.write_record([(i + 1).to_string(), account.address.clone()])?;
            }
            writer.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> Vec<KeystoreAccount> {
        vec![KeystoreAccount {
            address: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".into(),
            path: PathBuf::from("/tmp/keystore/UTC--stamp--5aaeb6"),
        }]
    }

    #[test]
    fn create_text_includes_path() {
        let mut buf = Vec::new();
        write_create(&mut buf, &sample(), OutputFormat::Text).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.starts_with("Account Creation Details:"));
        assert!(rendered.contains("Keystore Path: /tmp/keystore/"));
    }

    #[test]
    fn create_json_uses_keystore_path_key() {
        let mut buf = Vec::new();
        write_create(&mut buf, &sample(), OutputFormat::Json).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&buf).unwrap();
        assert!(parsed[0]["keystore_path"].as_str().unwrap().contains("UTC--"));
    }

    #[test]
    fn list_text_empty_state() {
        let mut buf = Vec::new();
        write_list(&mut buf, &[], OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No accounts found.\n");
    }

    #[test]
    fn list_json_wraps_accounts() {
        let mut buf = Vec::new();
        write_list(&mut buf, &sample(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["accounts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn list_csv_header() {
        let mut buf = Vec::new();
        write_list(&mut buf, &sample(), OutputFormat::Csv).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("Index,Address\n"));
    }
}
