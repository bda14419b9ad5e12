//! Wallet renderers: `# / Alias / Address / Private Key / Public Key`.

use std::io::Write;

use crate::core::errors::Result;
use crate::core::wallet::Wallet;
use crate::output::{new_table, OutputFormat};

pub fn write(out: &mut impl Write, wallets: &[Wallet], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, wallets),
        OutputFormat::Table => write_table(out, wallets),
        OutputFormat::Json => write_json(out, wallets),
        OutputFormat::Csv => write_csv(out, wallets),
    }
}

fn write_text(out: &mut impl Write, wallets: &[Wallet]) -> Result<()> {
    if wallets.is_empty() {
        writeln!(out, "No wallets created")?;
        return Ok(());
    }

    writeln!(out, "Wallets Information:")?;
    for (i, wallet) in wallets.iter().enumerate() {
        writeln!(out, "  Wallet #{}:", i + 1)?;
        writeln!(out, "    Alias: {}", wallet.alias)?;
        writeln!(out, "    Address: {}", wallet.address)?;
        writeln!(out, "    Private Key: {}", wallet.private_key)?;
        writeln!(out, "    Public Key: {}\n", wallet.public_key)?;
    }
    Ok(())
}

fn write_table(out: &mut impl Write, wallets: &[Wallet]) -> Result<()> {
    let mut table = new_table();
    table.set_header(["#", "Alias", "Address", "Private Key", "Public Key"]);
    for (i, wallet) in wallets.iter().enumerate() {
        table.add_row([
            (i + 1).to_string(),
            wallet.alias.clone(),
            wallet.address.clone(),
            wallet.private_key.clone(),
            wallet.public_key.clone(),
        ]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}

fn write_json(out: &mut impl Write, wallets: &[Wallet]) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string(wallets)?)?;
    Ok(())
}

fn write_csv(out: &mut impl Write, wallets: &[Wallet]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["#", "Alias", "Address", "Private Key", "Public Key"])?;
    for (i, wallet) in wallets.iter().enumerate() {
        writer.write_record([
            (i + 1).to_string(),
            wallet.alias.clone(),
            wallet.address.clone(),
            wallet.private_key.clone(),
            wallet.public_key.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
