//! Core type definitions for the notary anchor service

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 32-byte transaction hash as reported by the signer/ledger
pub type TxHash = alloy::primitives::B256;

/// Content digest of a document: SHA-256 over the full file bytes.
///
/// Two byte-identical files always produce the same digest; any single-bit
/// difference produces a different digest with overwhelming probability.
/// Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; 32]);

impl Digest {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse a digest from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex_str = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(hex_str).ok()?;
        let arr: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(arr))
    }

    /// Lowercase hex with a `0x` prefix, the wire representation.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| format!("invalid digest: {s}"))
    }
}

impl Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).ok_or_else(|| serde::de::Error::custom("expected 32-byte hex digest"))
    }
}

impl From<Digest> for alloy::primitives::FixedBytes<32> {
    fn from(d: Digest) -> Self {
        alloy::primitives::FixedBytes(d.0)
    }
}

impl From<alloy::primitives::FixedBytes<32>> for Digest {
    fn from(b: alloy::primitives::FixedBytes<32>) -> Self {
        Self(b.0)
    }
}

/// Serde module for u64 quantities as 0x-prefixed hex strings
///
/// Wallet providers expect transaction quantities (gas, nonce) in the hex
/// quantity form rather than JSON numbers.
pub mod u64_hex_0x {
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{value:#x}"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let hex_str = s.strip_prefix("0x").unwrap_or(&s);
        u64::from_str_radix(hex_str, 16).map_err(serde::de::Error::custom)
    }
}

/// Serde module for U256 quantities as 0x-prefixed hex strings
pub mod u256_hex_0x {
    use alloy::primitives::U256;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{value:#x}"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        U256::from_str_radix(s.strip_prefix("0x").unwrap_or(&s), 16)
            .map_err(serde::de::Error::custom)
    }
}
