//! Seed renderers: `# / Mnemonic / Seed` (seed hex-encoded).

use std::io::Write;

use serde::Serialize;

use crate::core::errors::Result;
use crate::output::{new_table, OutputFormat};

/// A freshly generated mnemonic and its BIP-39 seed (hex).
#[derive(Debug, Clone, Serialize)]
pub struct SeedRecord {
    pub mnemonic: String,
    pub seed: String,
}

pub fn write(out: &mut impl Write, records: &[SeedRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, records),
        OutputFormat::Table => write_table(out, records),
        OutputFormat::Json => write_json(out, records),
        OutputFormat::Csv => write_csv(out, records),
    }
}

fn write_text(out: &mut impl Write, records: &[SeedRecord]) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "No mnemonics found.")?;
        return Ok(());
    }

    writeln!(out, "Seed Information:")?;
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "  Entry #{}", i + 1)?;
        writeln!(out, "  Seed: {}\n", record.seed)?;
        writeln!(out, "  Mnemonic: {}", record.mnemonic)?;
    }
    Ok(())
}

fn write_table(out: &mut impl Write, records: &[SeedRecord]) -> Result<()> {
    let mut table = new_table();
    table.set_header(["#", "Mnemonic", "Seed"]);
    for (i, record) in records.iter().enumerate() {
        table.add_row([(i + 1).to_string(), record.mnemonic.clone(), record.seed.clone()]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}

fn write_json(out: &mut impl Write, records: &[SeedRecord]) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string(records)?)?;
    Ok(())
}

fn write_csv(out: &mut impl Write, records: &[SeedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["#", "Mnemonic", "Seed"])?;
    for (i, record) in records.iter().enumerate() {
        writer.write_record([(i + 1).to_string(), record.mnemonic.clone(), record.seed.clone()])?;
    }
    writer.flush()?;
    Ok(())
}
