//! Domain models for the notary anchor service
//!
//! Core types for content digests, ledger records, unsigned transactions,
//! and the registration lifecycle.

mod record;
mod registration;
mod transaction;
mod types;

pub use record::*;
pub use registration::*;
pub use transaction::*;
pub use types::*;
