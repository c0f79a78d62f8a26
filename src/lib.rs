//! Notary Anchor Library
//!
//! Document notarization over an append-only ledger: a file's SHA-256
//! digest is embedded in a ledger transaction the requester signs with
//! their own wallet, and any file can later be verified by recomputing its
//! digest and resolving the earliest confirmed registration on the ledger.
//!
//! ## Modules
//!
//! - [`domain`] - Core domain types (digests, records, transactions, lifecycle)
//! - [`crypto`] - Content digest engine shared by registration and verification
//! - [`ledger`] - Registry contract bindings, ledger client seam, record index
//! - [`tx`] - Unsigned transaction builder
//! - [`register`] - Registration coordinator and its state machine
//! - [`verify`] - Verification resolver
//! - [`signer`] - External wallet signer seam and account session
//! - [`metrics`] - Observability counters
//! - [`api`] - REST API routes
//! - [`server`] - Configuration and HTTP bootstrap

pub mod api;
pub mod crypto;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod metrics;
pub mod register;
pub mod server;
pub mod signer;
pub mod tx;
pub mod verify;

// Re-export commonly used types
pub use domain::{
    Digest, LedgerRecord, PreparedRegistration, RegistrationPhase, RegistrationReceipt, TxHash,
    UnsignedTransaction, VerificationResult,
};

pub use error::{NotaryError, Result};
pub use ledger::{EthLedgerClient, LedgerClient, RecordIndex};
pub use register::{parse_address, RegistrationCoordinator};
pub use signer::{connect, session, SessionHandle, SignerSession, WalletSigner};
pub use tx::TransactionBuilder;
pub use verify::VerificationResolver;
