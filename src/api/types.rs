//! Shared request and response types for REST API handlers

use serde::{Deserialize, Serialize};

use crate::domain::{LedgerRecord, UnsignedTransaction};

/// Response for `POST /upload`: the unsigned registration transaction the
/// caller's wallet must sign and submit.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub tx: UnsignedTransaction,
}

/// Response for a successful `POST /verify`
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Confirmation time of the earliest registration, unix seconds
    pub timestamp: u64,
    /// Hex digest of the verified file
    pub file_hash: String,
}

/// Negative response body for `POST /verify`
#[derive(Debug, Serialize, Deserialize)]
pub struct NotRegisteredResponse {
    pub message: String,
}

/// Response for `GET /records/{digest}`
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResponse {
    pub record: LedgerRecord,
}

/// Response for `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub ledger: LedgerTarget,
}

/// The ledger endpoint and registry this service is anchored to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerTarget {
    pub rpc_url: String,
    pub registry_address: String,
    pub chain_id: u64,
}
