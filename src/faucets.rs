//! Static directory of testnet faucets.
//!
//! Display data only. The application never talks to these services; users
//! paste their generated address into one to receive test ETH.

use serde::Serialize;

/// A third-party faucet dispensing free test-network tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faucet {
    pub name: &'static str,
    pub url: &'static str,
    pub network: &'static str,
}

/// The faucet directory, in display order.
pub const FAUCETS: &[Faucet] = &[
    Faucet {
        name: "Sepolia",
        url: "https://sepoliafaucet.com",
        network: "Sepolia Testnet",
    },
    Faucet {
        name: "Alchemy Sepolia",
        url: "https://www.alchemy.com/faucets/ethereum-sepolia",
        network: "Sepolia Testnet",
    },
    Faucet {
        name: "Infura Sepolia",
        url: "https://www.infura.io/faucet/sepolia",
        network: "Sepolia Testnet",
    },
    Faucet {
        name: "Holesky",
        url: "https://holesky-faucet.pk910.de/",
        network: "Holesky Testnet",
    },
    Faucet {
        name: "Google Cloud Faucet",
        url: "https://cloud.google.com/application/web3/faucet/ethereum",
        network: "Multiple Testnets",
    },
];
