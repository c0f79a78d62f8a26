//! Unsigned ledger transactions produced by the transaction builder

use alloy::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use super::types::{u256_hex_0x, u64_hex_0x};

/// An unsigned ledger transaction that anchors a document digest.
///
/// Constructed fresh for every registration request and handed to the
/// external signer for authorization; never persisted or reused — the nonce
/// is read at build time and a stale one invalidates the transaction.
///
/// Serializes with 0x-hex quantities and camelCase field names so a browser
/// wallet can pass it to `eth_sendTransaction` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTransaction {
    /// Requester address authorizing the registration
    pub from: Address,
    /// The configured notarization registry contract, never user-supplied
    pub to: Address,
    /// ABI-encoded `register(bytes32)` call embedding the digest
    pub data: Bytes,
    /// Estimated execution cost for the fixed-size payload write
    #[serde(with = "u64_hex_0x")]
    pub gas: u64,
    /// Fee rate at build time
    #[serde(with = "u256_hex_0x")]
    pub gas_price: U256,
    /// Requester's pending sequence number at build time
    #[serde(with = "u64_hex_0x")]
    pub nonce: u64,
    /// Always zero: this transaction carries data, never funds
    #[serde(with = "u256_hex_0x")]
    pub value: U256,
}
