use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ethw::cli::{Cli, Commands, KeystoreCommands, LogFormat, LogLevel, SeedCommands, WalletCommands};
use ethw::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_format)?;

    let format = cli.output_format;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Wallet(WalletCommands::Create { seeds, config }) => {
            commands::wallet::create(&seeds, config.as_deref(), format, &mut stdout)?;
        }
        Commands::Keystore(KeystoreCommands::Create {
            wallets,
            keystore_dir,
            overwrite,
            light_kdf,
        }) => {
            commands::keystore::create(
                &wallets,
                &keystore_dir,
                overwrite,
                light_kdf,
                format,
                &mut stdout,
            )?;
        }
        Commands::Keystore(KeystoreCommands::List { keystore_dir }) => {
            commands::keystore::list(&keystore_dir, format, &mut stdout)?;
        }
        Commands::Seed(SeedCommands::Create { seed_password, words, num_seeds }) => {
            commands::seed::create(&seed_password, words, num_seeds, format, &mut stdout)?;
        }
    }

    Ok(())
}

fn init_logging(level: LogLevel, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?,
        LogFormat::Json => builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?,
    }
    Ok(())
}
