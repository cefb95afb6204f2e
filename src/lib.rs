//! # eth_walletgen
//!
//! Ethereum wallet generator with a terminal UI, testnet faucet directory,
//! and liveness endpoint.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation and address derivation
//! - `wallet`: Transient wallet values and private key masking
//! - `controller`: Wallet display state machine
//! - `faucets`: Static testnet faucet directory
//! - `tui`: Interactive terminal front end
//! - `server`: Liveness HTTP endpoint
//! - `config`: Command-line interface

pub mod config;
pub mod controller;
pub mod crypto;
pub mod faucets;
pub mod server;
pub mod tui;
pub mod wallet;

pub use config::{Cli, Commands};
pub use controller::{CopiedField, WalletController};
pub use crypto::{Address, Keypair};
pub use faucets::{Faucet, FAUCETS};
pub use wallet::{mask_private_key, WalletData};
