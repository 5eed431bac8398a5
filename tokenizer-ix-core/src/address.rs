//! Opaque 32-byte account address.
//!
//! The builders never interpret addresses: PDAs, associated token accounts
//! and sysvars are all resolved by the caller and passed in as plain bytes.

use std::fmt;
use std::str::FromStr;

use base58::{FromBase58, ToBase58};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A 32-byte public key.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, BorshSerialize, BorshDeserialize,
)]
pub struct Address([u8; 32]);

impl Address {
    pub const LEN: usize = 32;

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering, without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 32] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

/// Failure to parse an [`Address`] from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAddressError {
    #[error("'{0}' is neither base58 nor hex")]
    InvalidEncoding(String),

    #[error("expected 32 bytes, got {0}")]
    WrongLength(usize),
}

impl FromStr for Address {
    type Err = ParseAddressError;

    /// Accepts base58 (the usual rendering) or hex with an optional `0x` prefix.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let prefixed = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"));

        let bytes = match prefixed {
            Some(digits) => hex_decode(digits)?,
            None => match input.from_base58() {
                Ok(bytes) if bytes.len() == Self::LEN => bytes,
                // 64 hex chars are also valid base58 alphabet most of the time
                _ => hex_decode(input)?,
            },
        };

        let bytes: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| ParseAddressError::WrongLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

fn hex_decode(input: &str) -> Result<Vec<u8>, ParseAddressError> {
    hex::decode(input).map_err(|_| ParseAddressError::InvalidEncoding(input.to_string()))
}
