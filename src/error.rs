//! Error types for the notary anchor service

use std::time::Duration;

use alloy::primitives::Address;
use thiserror::Error;

/// Errors that can occur while registering or verifying a document
#[derive(Error, Debug)]
pub enum NotaryError {
    /// Requester address is not a syntactically valid ledger address
    #[error("invalid requester address: {0}")]
    InvalidAddress(String),

    /// The document source could not be read
    #[error("failed to read document content: {0}")]
    Read(#[from] std::io::Error),

    /// The ledger client could not produce a gas estimate
    #[error("gas estimation failed: {0}")]
    Estimation(String),

    /// The signer explicitly declined the transaction; terminal, never retried
    #[error("signer rejected the transaction")]
    UserRejected,

    /// A ledger or signer call exceeded the configured deadline; retryable
    #[error("ledger operation timed out after {0:?}")]
    Timeout(Duration),

    /// Nonce or gas race detected at submission; retryable by rebuilding
    #[error("submission conflict: {0}")]
    SubmissionConflict(String),

    /// The signer session no longer holds the address the request was built for
    #[error("signer session no longer matches requester {0}")]
    StaleSession(Address),

    /// Transport or RPC failure talking to the ledger
    #[error("ledger client error: {0}")]
    Ledger(String),
}

/// Result type for notary operations
pub type Result<T> = std::result::Result<T, NotaryError>;
