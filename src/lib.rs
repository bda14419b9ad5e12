//! Deterministic Ethereum wallet derivation from seeds and BIP-39 mnemonics,
//! with optional import into a Web3 Secret Storage (v3) keystore directory.
//!
//! All elliptic-curve, BIP-39/32, and scrypt operations delegate to audited
//! crates (`k256`, `bip39`, `coins-bip32`, `scrypt`); this crate only parses
//! flag strings, wires the derivations together, and renders output.

pub mod cli;
pub mod commands;
pub mod core;
pub mod keystore;
pub mod output;
