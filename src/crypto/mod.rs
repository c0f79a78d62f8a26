//! Cryptographic utilities for the notary anchor service
//!
//! Provides the content digest engine shared by registration and
//! verification. Any divergence between the two paths would break the
//! system, so both go through this single implementation.

mod digest;

pub use digest::*;
