pub mod keystore;
pub mod seed;
pub mod wallet;
