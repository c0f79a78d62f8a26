//! Verification resolver
//!
//! Recomputes a document's digest through the same engine registration uses
//! and resolves it against the ledger record index. Byte-exact provenance
//! only: a single changed byte yields a different digest and therefore
//! `NotFound`, which is correct behavior, not a false negative.

use std::io::Read;
use std::time::Duration;

use tokio::time::timeout;
use tracing::info;

use crate::crypto::digest_reader;
use crate::domain::VerificationResult;
use crate::error::{NotaryError, Result};
use crate::ledger::RecordIndex;

/// Resolves documents to their earliest confirmed registration, if any.
#[derive(Clone)]
pub struct VerificationResolver {
    index: RecordIndex,
    timeout: Duration,
}

impl VerificationResolver {
    pub fn new(index: RecordIndex, timeout: Duration) -> Self {
        Self { index, timeout }
    }

    /// Verify a document against the ledger.
    ///
    /// `Found` carries the canonical earliest confirmed record regardless of
    /// how many duplicate registrations exist. `NotFound` reflects ledger
    /// state at query time and does not distinguish "never registered" from
    /// "registration pending confirmation". Verification is read-only: no
    /// state changes on either outcome.
    pub async fn verify<R: Read>(&self, source: R) -> Result<VerificationResult> {
        let digest = digest_reader(source)?;

        let record = timeout(self.timeout, self.index.lookup(digest))
            .await
            .map_err(|_| NotaryError::Timeout(self.timeout))??;

        match record {
            Some(record) => {
                info!(digest = %digest, timestamp = record.timestamp, "document verified");
                Ok(VerificationResult::Found { digest, record })
            }
            None => {
                info!(digest = %digest, "no confirmed registration");
                Ok(VerificationResult::NotFound { digest })
            }
        }
    }
}
