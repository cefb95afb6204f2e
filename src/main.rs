//! Ethereum Wallet Generator CLI
//!
//! Usage:
//!   eth_walletgen                # Interactive terminal UI
//!   eth_walletgen generate -n 3  # Print three fresh wallets
//!   eth_walletgen serve -p 3000  # Run the liveness endpoint

use std::process;

use clap::Parser;

use eth_walletgen::config::{Cli, Commands, GenerateArgs};
use eth_walletgen::{server, tui, WalletData, FAUCETS};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => tui::run_tui().await,
        Commands::Generate(args) => {
            init_tracing();
            if let Err(e) = args.validate() {
                eprintln!("Configuration error: {}", e);
                process::exit(1);
            }
            run_generate(&args)
        }
        Commands::Serve(args) => {
            init_tracing();
            server::serve(&args.host, args.port).await
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eth_walletgen=info".into()),
        )
        .init();
}

fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let wallets: Vec<WalletData> = (0..args.count).map(|_| WalletData::generate()).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&wallets)?);
        return Ok(());
    }

    for (i, wallet) in wallets.iter().enumerate() {
        print_wallet(wallet, i + 1);
    }

    println!("--- Testnet Faucets ---");
    for faucet in FAUCETS {
        println!("{:<20} {:<18} {}", faucet.name, faucet.network, faucet.url);
    }

    Ok(())
}

fn print_wallet(wallet: &WalletData, index: usize) {
    println!("=== Wallet #{} ===", index);
    println!("Address:     {}", wallet.address);
    println!("Private Key: {}", wallet.private_key);
    println!();
}
