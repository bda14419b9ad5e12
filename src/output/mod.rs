//! Interchangeable text/table/JSON/CSV renderers for command results.

pub mod keystore;
pub mod seed;
pub mod wallet;

use clap::ValueEnum;

/// Rendering format selected by `--output-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
    Csv,
}

pub(crate) fn new_table() -> comfy_table::Table {
    let mut table = comfy_table::Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table
}
