// crates/cnw-core/src/identity.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CollectionError;

/// A 20-byte account identity.
///
/// Callers, recipients, and the collection owner are all addresses. Every
/// privileged operation takes the caller's address explicitly and checks it
/// against the stored owner; there is no ambient "current sender".
///
/// Rendered as `0x`-prefixed lowercase hex, which is also its serde form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address. Never a valid owner or token recipient.
    pub const ZERO: Address = Address([0u8; 20]);

    /// Build an address whose every byte is `byte`. Handy for fixtures.
    pub const fn repeat_byte(byte: u8) -> Self {
        Address([byte; 20])
    }

    /// Parse a hex address, with or without the `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, CollectionError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.len() != 40 {
            return Err(CollectionError::InvalidAddress(format!(
                "expected 40 hex digits, got {} in {:?}",
                digits.len(),
                s
            )));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Address(bytes))
    }

    /// True for the zero address.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Reject the zero address.
    pub fn require_nonzero(self, role: &str) -> Result<Self, CollectionError> {
        if self.is_zero() {
            return Err(CollectionError::InvalidAddress(format!(
                "{} cannot be the zero address",
                role
            )));
        }
        Ok(self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
