//! Ethereum address representation and rendering.

use std::fmt;

use secp256k1::PublicKey;
use tiny_keccak::{Hasher, Keccak};

/// An Ethereum address (20 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Derives the address for a secp256k1 public key.
    ///
    /// Keccak-256 over the uncompressed point without its 0x04 tag byte,
    /// keeping the low 20 bytes of the digest.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let encoded = public_key.serialize_uncompressed();

        let mut hasher = Keccak::v256();
        hasher.update(&encoded[1..]);
        let mut digest = [0u8; 32];
        hasher.finalize(&mut digest);

        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest[12..]);
        Self(bytes)
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the address with 0x prefix.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", self.to_hex())
    }

    /// Returns the address with EIP-55 checksum casing.
    ///
    /// A hex digit is uppercased when the corresponding nibble of the
    /// Keccak-256 digest of the lowercase hex address is >= 8.
    pub fn to_checksum(&self) -> String {
        let hex_addr = self.to_hex();

        let mut hasher = Keccak::v256();
        hasher.update(hex_addr.as_bytes());
        let mut digest = [0u8; 32];
        hasher.finalize(&mut digest);

        let mut out = String::with_capacity(42);
        out.push_str("0x");

        for (i, c) in hex_addr.bytes().enumerate() {
            let nibble = if i % 2 == 0 {
                digest[i / 2] >> 4
            } else {
                digest[i / 2] & 0x0f
            };

            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase() as char);
            } else {
                out.push(c as char);
            }
        }

        out
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(hex_str: &str) -> Address {
        Address::from_bytes(hex::decode(hex_str).unwrap().try_into().unwrap())
    }

    #[test]
    fn checksum_matches_eip55_vectors() {
        assert_eq!(
            addr("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").to_checksum(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
        assert_eq!(
            addr("fb6916095ca1df60bb79ce92ce3ea74c37c5d359").to_checksum(),
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
        );
    }

    #[test]
    fn hex_renderings() {
        let addr = Address::from_bytes([0u8; 20]);
        assert_eq!(addr.to_hex(), "0000000000000000000000000000000000000000");
        assert_eq!(
            addr.to_hex_prefixed(),
            "0x0000000000000000000000000000000000000000"
        );
    }
}
