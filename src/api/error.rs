//! Structured API error responses with error codes
//!
//! The wire body keeps the `{"error": "..."}` shape clients of this service
//! expect; the machine-readable code travels in the `x-error-code` header.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::NotaryError;

/// Stable error codes for API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Requester address malformed or failed checksum
    InvalidAddress,
    /// Uploaded document could not be read
    ReadError,
    /// Ledger unreachable or gas estimation failed
    EstimationError,
    /// Signer declined the transaction
    UserRejected,
    /// Ledger or signer call exceeded the deadline
    Timeout,
    /// Nonce or gas race at submission
    SubmissionConflict,
    /// Signer session changed mid-request
    StaleSession,
    /// No confirmed registration for the digest
    NotRegistered,
    /// Required multipart field missing or malformed request
    InvalidRequestBody,
    /// Ledger transport failure
    LedgerError,
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    /// HTTP status for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidAddress => StatusCode::BAD_REQUEST,
            ErrorCode::ReadError => StatusCode::BAD_REQUEST,
            ErrorCode::EstimationError => StatusCode::BAD_GATEWAY,
            ErrorCode::UserRejected => StatusCode::CONFLICT,
            ErrorCode::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ErrorCode::SubmissionConflict => StatusCode::CONFLICT,
            ErrorCode::StaleSession => StatusCode::CONFLICT,
            ErrorCode::NotRegistered => StatusCode::NOT_FOUND,
            ErrorCode::InvalidRequestBody => StatusCode::BAD_REQUEST,
            ErrorCode::LedgerError => StatusCode::BAD_GATEWAY,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCode::InvalidAddress => "INVALID_ADDRESS",
            ErrorCode::ReadError => "READ_ERROR",
            ErrorCode::EstimationError => "ESTIMATION_ERROR",
            ErrorCode::UserRejected => "USER_REJECTED",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::SubmissionConflict => "SUBMISSION_CONFLICT",
            ErrorCode::StaleSession => "STALE_SESSION",
            ErrorCode::NotRegistered => "NOT_REGISTERED",
            ErrorCode::InvalidRequestBody => "INVALID_REQUEST_BODY",
            ErrorCode::LedgerError => "LEDGER_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{s}")
    }
}

/// API error carrying a code and a human-readable message.
///
/// Serializes as `{"error": message}` with the code in the `x-error-code`
/// response header.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequestBody, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.http_status();
        let code_str = self.code.to_string();
        let body = serde_json::json!({ "error": self.message });

        let mut response = (status, Json(body)).into_response();
        if let Ok(value) = axum::http::HeaderValue::from_str(&code_str) {
            response.headers_mut().insert(
                axum::http::HeaderName::from_static("x-error-code"),
                value,
            );
        }
        response
    }
}

impl From<NotaryError> for ApiError {
    fn from(err: NotaryError) -> Self {
        let code = match &err {
            NotaryError::InvalidAddress(_) => ErrorCode::InvalidAddress,
            NotaryError::Read(_) => ErrorCode::ReadError,
            NotaryError::Estimation(_) => ErrorCode::EstimationError,
            NotaryError::UserRejected => ErrorCode::UserRejected,
            NotaryError::Timeout(_) => ErrorCode::Timeout,
            NotaryError::SubmissionConflict(_) => ErrorCode::SubmissionConflict,
            NotaryError::StaleSession(_) => ErrorCode::StaleSession,
            NotaryError::Ledger(_) => ErrorCode::LedgerError,
        };
        ApiError::new(code, err.to_string())
    }
}
