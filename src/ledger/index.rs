//! Ledger record index
//!
//! Read path over the ledger keyed by digest. The ledger may hold several
//! confirmed transactions embedding the same digest; this index resolves
//! them to a single canonical record — the earliest by ledger-confirmed
//! ordering (block number, then in-block log index).

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Digest, LedgerRecord};
use crate::error::Result;

use super::client::LedgerClient;

/// Resolves a digest to its canonical earliest confirmed registration.
#[derive(Clone)]
pub struct RecordIndex {
    ledger: Arc<dyn LedgerClient>,
}

impl RecordIndex {
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self { ledger }
    }

    /// Look up the canonical record for `digest`.
    ///
    /// `None` means no confirmed registration exists — never-registered and
    /// pending-confirmation are indistinguishable here, since only confirmed
    /// transactions reach the ledger's log.
    pub async fn lookup(&self, digest: Digest) -> Result<Option<LedgerRecord>> {
        let records = self.ledger.find_registrations(digest).await?;

        let canonical = records
            .into_iter()
            .min_by_key(LedgerRecord::confirmed_order);

        if let Some(record) = &canonical {
            debug!(
                digest = %digest,
                block = record.block_number,
                tx = %record.tx_hash,
                "resolved canonical registration"
            );
        }

        Ok(canonical)
    }
}
