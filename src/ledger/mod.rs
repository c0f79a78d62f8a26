//! Ledger access for the notary anchor service
//!
//! The registry contract bindings, the [`LedgerClient`] seam over the chain
//! RPC, the alloy-backed production client, and the record index that
//! resolves a digest to its canonical earliest confirmed registration.

mod client;
mod contract;
mod eth;
mod index;

pub use client::*;
pub use contract::*;
pub use eth::*;
pub use index::*;
