//! Transient wallet values and private key masking.

use serde::Serialize;

use crate::crypto::Keypair;

/// Number of characters kept in clear at each end of a masked key.
const MASK_VISIBLE: usize = 10;
/// Width of the mask run replacing the middle of the key.
const MASK_WIDTH: usize = 40;
/// The mask character.
const MASK_CHAR: &str = "\u{2022}";

/// A freshly generated wallet: checksummed address and 0x-prefixed private
/// key, both as display-ready strings.
///
/// Created only from a [`Keypair`]; replaced wholesale on regeneration and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletData {
    pub address: String,
    pub private_key: String,
}

impl WalletData {
    /// Generates a new wallet from a fresh random keypair.
    pub fn generate() -> Self {
        Keypair::generate().into()
    }

    /// Returns the private key with its middle masked out.
    pub fn masked_private_key(&self) -> String {
        mask_private_key(&self.private_key)
    }

    /// Returns an abbreviated address (`0x1234…abcd`) for hint text.
    pub fn short_address(&self) -> String {
        let chars: Vec<char> = self.address.chars().collect();
        if chars.len() <= 10 {
            return self.address.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}\u{2026}{tail}")
    }
}

impl From<Keypair> for WalletData {
    fn from(keypair: Keypair) -> Self {
        Self {
            address: keypair.address().to_checksum(),
            private_key: keypair.private_key_hex_prefixed(),
        }
    }
}

/// Masks a private key for display: the first and last 10 characters stay in
/// clear, the middle is replaced by a fixed run of 40 mask characters.
///
/// Keys are the fixed 66-char `0x` + 64 hex form. Inputs too short to keep
/// both ends in clear are masked entirely rather than echoed.
pub fn mask_private_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 2 * MASK_VISIBLE {
        return MASK_CHAR.repeat(MASK_WIDTH);
    }

    let head: String = chars[..MASK_VISIBLE].iter().collect();
    let tail: String = chars[chars.len() - MASK_VISIBLE..].iter().collect();
    format!("{head}{}{tail}", MASK_CHAR.repeat(MASK_WIDTH))
}
