pub mod derivation;
pub mod errors;
pub mod seed;
pub mod wallet;

pub use errors::EthwError;
pub use wallet::Wallet;
