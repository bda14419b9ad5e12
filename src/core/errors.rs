use thiserror::Error;

/// Error type for wallet, seed, and keystore operations.
#[derive(Debug, Error)]
pub enum EthwError {
    /// Seed flag string did not match the `seed=...;alias=...` grammar.
    #[error("invalid seed format")]
    InvalidSeedFormat,
    /// Seed material failed BIP-39 word-list/checksum validation.
    #[error("invalid mnemonic format")]
    InvalidMnemonic,
    /// BIP-32 path parsing or child derivation errors.
    #[error("key derivation error: {0}")]
    KeyDerivation(String),
    /// Key material or cipher errors.
    #[error("crypto error: {0}")]
    Crypto(String),
    /// Keystore directory and key-file errors.
    #[error("keystore error: {0}")]
    Keystore(String),
    /// Seed config file errors.
    #[error("configuration error: {0}")]
    Config(String),
    /// One or more seed entries failed during batch processing.
    #[error("there were errors processing seeds ({0} failed)")]
    SeedProcessing(usize),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EthwError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(EthwError::InvalidSeedFormat.to_string(), "invalid seed format");
        assert_eq!(EthwError::InvalidMnemonic.to_string(), "invalid mnemonic format");
        assert_eq!(
            EthwError::Keystore("address already exists".into()).to_string(),
            "keystore error: address already exists"
        );
    }

    #[test]
    fn io_error_converts() {
        let err: EthwError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, EthwError::Io(_)));
    }
}
