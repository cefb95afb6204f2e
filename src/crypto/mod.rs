//! Cryptographic operations for Ethereum wallet generation.
//!
//! This module provides:
//! - Secure random key generation using secp256k1
//! - Ethereum address derivation using Keccak-256
//! - EIP-55 checksummed address rendering

mod address;
mod keypair;

pub use address::Address;
pub use keypair::Keypair;
