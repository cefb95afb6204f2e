//! Ethereum keypair generation.

use secp256k1::{PublicKey, SecretKey, SECP256K1};

use super::Address;

/// A secp256k1 keypair with its derived Ethereum address.
#[derive(Debug, Clone)]
pub struct Keypair {
    secret_key: SecretKey,
    address: Address,
}

impl Keypair {
    /// Generates a new random keypair.
    ///
    /// Uses a cryptographically secure random number generator. The address
    /// is derived immediately so the pair is always internally consistent.
    pub fn generate() -> Self {
        let (secret_key, public_key) = SECP256K1.generate_keypair(&mut rand::thread_rng());
        Self {
            secret_key,
            address: Address::from_public_key(&public_key),
        }
    }

    /// Rebuilds a keypair from raw secret key bytes.
    ///
    /// Address derivation is deterministic, so this reproduces exactly the
    /// keypair the bytes came from.
    ///
    /// # Panics
    /// Panics if the bytes are not a valid secp256k1 scalar.
    pub fn from_secret_key(secret_bytes: [u8; 32]) -> Self {
        let secret_key = SecretKey::from_slice(&secret_bytes).expect("invalid secret key");
        let public_key = PublicKey::from_secret_key(SECP256K1, &secret_key);
        Self {
            secret_key,
            address: Address::from_public_key(&public_key),
        }
    }

    /// Returns the private key as a hex string (without 0x prefix).
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.secret_key.secret_bytes())
    }

    /// Returns the private key as a 0x-prefixed hex string, the form wallets
    /// display and import.
    pub fn private_key_hex_prefixed(&self) -> String {
        format!("0x{}", self.private_key_hex())
    }

    /// Returns the raw private key bytes.
    pub fn private_key_bytes(&self) -> [u8; 32] {
        self.secret_key.secret_bytes()
    }

    /// Returns the derived Ethereum address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keypair_has_expected_shape() {
        let keypair = Keypair::generate();
        assert_eq!(keypair.private_key_bytes().len(), 32);
        assert_eq!(keypair.private_key_hex().len(), 64);
        assert!(keypair.private_key_hex_prefixed().starts_with("0x"));
        assert_eq!(keypair.address().as_bytes().len(), 20);
    }

    #[test]
    fn address_derivation_is_deterministic() {
        let keypair = Keypair::generate();
        let rebuilt = Keypair::from_secret_key(keypair.private_key_bytes());
        assert_eq!(keypair.address(), rebuilt.address());
    }

    #[test]
    fn known_key_vectors() {
        // Addresses for private keys 1 and 2 are well-known.
        let mut one = [0u8; 32];
        one[31] = 0x01;
        assert_eq!(
            Keypair::from_secret_key(one).address().to_hex(),
            "7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );

        let mut two = [0u8; 32];
        two[31] = 0x02;
        assert_eq!(
            Keypair::from_secret_key(two).address().to_checksum(),
            "0x2B5AD5c4795c026514f8317c7a215E218DcCD6cF"
        );
    }
}
