//! Confirmed ledger records and verification results

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use super::types::{Digest, TxHash};

/// A confirmed registration of a digest on the ledger.
///
/// The ledger is append-only, so a confirmed record is permanent and
/// immutable. Multiple transactions may embed the same digest; the record
/// index resolves them to a single canonical earliest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Content digest embedded in the registration transaction
    pub digest: Digest,
    /// Address that authorized the registration
    pub registrant: Address,
    /// Ledger confirmation time, unix seconds
    pub timestamp: u64,
    /// Hash of the confirmed registration transaction
    pub tx_hash: TxHash,
    /// Block the transaction was confirmed in
    pub block_number: u64,
    /// Position within the block, for deterministic tie-breaking
    pub log_index: u64,
}

impl LedgerRecord {
    /// Ledger-confirmed ordering key: block order, then in-block order.
    ///
    /// Never derived from locally observed submission time — submission
    /// order is not a reliable total order across concurrent clients.
    pub fn confirmed_order(&self) -> (u64, u64) {
        (self.block_number, self.log_index)
    }
}

/// Outcome of verifying a document against the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    /// A confirmed registration exists; `record` is the canonical earliest one.
    Found {
        digest: Digest,
        record: LedgerRecord,
    },
    /// No confirmed registration for this digest.
    ///
    /// This does not distinguish "never registered" from "registration
    /// submitted but not yet confirmed" — the result reflects ledger state
    /// at query time.
    NotFound { digest: Digest },
}

impl VerificationResult {
    pub fn is_found(&self) -> bool {
        matches!(self, VerificationResult::Found { .. })
    }

    /// The digest that was looked up, regardless of outcome.
    pub fn digest(&self) -> &Digest {
        match self {
            VerificationResult::Found { digest, .. } => digest,
            VerificationResult::NotFound { digest } => digest,
        }
    }
}
