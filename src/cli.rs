//! Command-line surface for `ethw`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::errors::EthwError;
use crate::core::seed::{KeystoreArg, SeedArg};
use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "ethw",
    about = "Create and manage deterministic Ethereum wallets",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Format for command results
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Log verbosity (RUST_LOG overrides when set)
    #[arg(long, value_enum, global = true, env = "LOG_LEVEL", default_value_t = LogLevel::Error)]
    pub log_level: LogLevel,

    /// Log encoding on stderr
    #[arg(long, value_enum, global = true, env = "LOG_FORMAT", default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage Ethereum wallets
    #[command(subcommand)]
    Wallet(WalletCommands),
    /// Manage Ethereum keystores
    #[command(subcommand)]
    Keystore(KeystoreCommands),
    /// Manage cryptographic seeds for Ethereum wallets
    #[command(subcommand)]
    Seed(SeedCommands),
}

#[derive(Debug, Subcommand)]
pub enum WalletCommands {
    /// Create new Ethereum wallets from seeds or BIP-39 mnemonics
    Create {
        /// Seed entries of the form `seed=<material>[;alias=<name>]`
        #[arg(value_parser = parse_seed_arg)]
        seeds: Vec<SeedArg>,

        /// TOML file with a `seeds = ["..."]` array of additional entries
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum KeystoreCommands {
    /// Derive wallets and import them into an encrypted keystore
    Create {
        /// Entries of the form `seed=<mnemonic>[;password=<pw>][;path=<bip44 path>]`
        #[arg(required = true, value_parser = parse_keystore_arg)]
        wallets: Vec<KeystoreArg>,

        /// Directory to save the keystore files
        #[arg(long, default_value = "./keystore")]
        keystore_dir: PathBuf,

        /// Remove any existing keystore directory before creating
        #[arg(long)]
        overwrite: bool,

        /// Use light scrypt parameters (fast, weak; testing only)
        #[arg(long, hide = true)]
        light_kdf: bool,
    },
    /// List all wallets from the keystore
    List {
        /// Directory where the keystore is located
        #[arg(long, default_value = "./keystore")]
        keystore_dir: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum SeedCommands {
    /// Create new BIP-39 seeds
    Create {
        /// Passphrase mixed into the derived seed
        #[arg(short = 'p', long, default_value = "")]
        seed_password: String,

        /// Number of words in each mnemonic
        #[arg(short, long, value_enum, default_value_t = MnemonicLength::Words12)]
        words: MnemonicLength,

        /// Number of seeds to generate
        #[arg(short, long, default_value_t = 1)]
        num_seeds: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MnemonicLength {
    #[value(name = "12")]
    Words12,
    #[value(name = "24")]
    Words24,
}

impl MnemonicLength {
    pub fn entropy_bytes(self) -> usize {
        match self {
            Self::Words12 => 16,
            Self::Words24 => 32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

fn parse_seed_arg(s: &str) -> Result<SeedArg, EthwError> {
    s.parse()
}

fn parse_keystore_arg(s: &str) -> Result<KeystoreArg, EthwError> {
    s.parse()
}
