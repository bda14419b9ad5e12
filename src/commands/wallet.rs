//! `wallet create`: derive wallets from CLI seed strings and optional config.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, error};

use crate::core::errors::{EthwError, Result};
use crate::core::seed::SeedArg;
use crate::core::wallet::Wallet;
use crate::output::{self, OutputFormat};

#[derive(Debug, Deserialize)]
struct SeedConfig {
    #[serde(default)]
    seeds: Vec<String>,
}

pub fn create(
    seeds: &[SeedArg],
    config: Option<&Path>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut entries = seeds.to_vec();
    if let Some(path) = config {
        entries.extend(load_config_seeds(path)?);
    }
    debug!(count = entries.len(), "processing seed entries");

    let mut wallets = Vec::with_capacity(entries.len());
    let mut failed = 0usize;
    for (i, entry) in entries.iter().enumerate() {
        let material = entry.material();
        let alias = entry.alias.clone().unwrap_or_else(|| format!("Wallet {}", i + 1));
        match Wallet::from_seed(&material, &alias) {
            Ok(wallet) => wallets.push(wallet),
            Err(e) => {
                error!(entry = i + 1, error = %e, "error generating wallet for seed");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(EthwError::SeedProcessing(failed));
    }
    output::wallet::write(out, &wallets, format)
}

fn load_config_seeds(path: &Path) -> Result<Vec<SeedArg>> {
    let text = fs::read_to_string(path)
        .map_err(|e| EthwError::Config(format!("cannot read {}: {e}", path.display())))?;
    let config: SeedConfig =
        toml::from_str(&text).map_err(|e| EthwError::Config(format!("invalid TOML: {e}")))?;
    config.seeds.iter().map(|s| s.parse()).collect()
}
