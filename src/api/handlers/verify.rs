//! Document verification handler

use std::io::Cursor;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{NotRegisteredResponse, VerifyResponse};
use crate::domain::VerificationResult;
use crate::metrics::counters;
use crate::server::AppState;

/// POST /verify — recompute the document digest and look up its earliest
/// confirmed registration.
///
/// 200 with `{timestamp, file_hash}` when a confirmed record exists; 404
/// with `{message}` otherwise. A 404 does not distinguish "never
/// registered" from "registration not yet confirmed".
pub async fn verify_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut file: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_body(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        if name.as_deref() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::invalid_body(format!("failed to read file: {e}")))?;
            file = Some(bytes.to_vec());
        }
    }

    let file = file.ok_or_else(|| ApiError::invalid_body("missing 'file' field"))?;

    let result = match state.resolver.verify(Cursor::new(file)).await {
        Ok(result) => result,
        Err(err) => {
            state
                .metrics
                .inc_counter(counters::VERIFICATIONS_FAILED)
                .await;
            return Err(ApiError::from(err));
        }
    };

    match result {
        VerificationResult::Found { digest, record } => {
            state
                .metrics
                .inc_counter(counters::VERIFICATIONS_FOUND)
                .await;
            Ok(Json(VerifyResponse {
                timestamp: record.timestamp,
                file_hash: digest.to_hex(),
            })
            .into_response())
        }
        VerificationResult::NotFound { .. } => {
            state
                .metrics
                .inc_counter(counters::VERIFICATIONS_NOT_FOUND)
                .await;
            let body = NotRegisteredResponse {
                message: "No confirmed registration found for this document".to_string(),
            };
            Ok((StatusCode::NOT_FOUND, Json(body)).into_response())
        }
    }
}
