//! Command-line interface definition and validation.

use clap::{Args, Parser, Subcommand};

/// Ethereum Wallet Generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive terminal UI (default)
    Tui,
    /// Generate wallets and print them to stdout
    Generate(GenerateArgs),
    /// Run the liveness HTTP endpoint
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of wallets to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Emit JSON instead of human-readable output
    #[arg(long, default_value = "false")]
    pub json: bool,
}

/// Upper bound on one-shot generation; anything bigger is a mistake, not a
/// wallet request.
const MAX_GENERATE_COUNT: usize = 1000;

impl GenerateArgs {
    /// Validates the arguments.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount("count must be at least 1".into()));
        }
        if self.count > MAX_GENERATE_COUNT {
            return Err(ConfigError::InvalidCount(format!(
                "count cannot exceed {MAX_GENERATE_COUNT}"
            )));
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short = 'p', long, default_value = "3000")]
    pub port: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid count: {0}")]
    InvalidCount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args(count: usize) -> GenerateArgs {
        GenerateArgs { count, json: false }
    }

    #[test]
    fn default_count_is_valid() {
        assert!(make_args(1).validate().is_ok());
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(make_args(0).validate().is_err());
    }

    #[test]
    fn oversized_count_is_rejected() {
        assert!(make_args(1001).validate().is_err());
        assert!(make_args(1000).validate().is_ok());
    }
}
