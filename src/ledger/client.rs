//! Ledger client seam

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{Digest, LedgerRecord};
use crate::error::Result;

/// Read-only access to ledger state needed to build transactions and look up
/// confirmed registrations.
///
/// Invariant: no method mutates ledger state. Submission happens only through
/// the external signer.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// The requester's next sequence number, including pending transactions.
    ///
    /// Read-then-use: the nonce is not reserved, so two concurrent builds
    /// for the same address may observe the same value and race at
    /// submission.
    async fn pending_nonce(&self, address: Address) -> Result<u64>;

    /// Current fee rate.
    async fn gas_price(&self) -> Result<U256>;

    /// Estimate execution cost for a call carrying `data` from `from` to the
    /// registry. Fails with `Estimation` when the ledger is unreachable or
    /// the node cannot estimate.
    async fn estimate_gas(&self, from: Address, data: Vec<u8>) -> Result<u64>;

    /// All confirmed registrations of `digest`, in no particular order.
    ///
    /// Only confirmed (mined) registrations appear; pending submissions are
    /// invisible to this query.
    async fn find_registrations(&self, digest: Digest) -> Result<Vec<LedgerRecord>>;
}
