//! Document registration handler

use std::io::Cursor;

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::warn;

use crate::api::error::ApiError;
use crate::api::types::UploadResponse;
use crate::metrics::counters;
use crate::server::AppState;

/// POST /upload — compute the document digest and return the unsigned
/// registration transaction for the caller's wallet to sign.
///
/// Multipart fields: `file` (document content) and `sender` (requester
/// address). The file content is never persisted; only its digest leaves
/// this handler.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<Vec<u8>> = None;
    let mut sender: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_body(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::invalid_body(format!("failed to read file: {e}")))?;
                file = Some(bytes.to_vec());
            }
            Some("sender") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::invalid_body(format!("failed to read sender: {e}")))?;
                sender = Some(text);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ApiError::invalid_body("missing 'file' field"))?;
    let sender = sender.ok_or_else(|| ApiError::invalid_body("missing 'sender' field"))?;

    let prepared = state
        .coordinator
        .prepare(Cursor::new(file), &sender)
        .await
        .map_err(|e| {
            warn!(error = %e, "registration preparation failed");
            ApiError::from(e)
        });

    match prepared {
        Ok(prepared) => {
            state.metrics.inc_counter(counters::UPLOADS_PREPARED).await;
            Ok(Json(UploadResponse { tx: prepared.tx }))
        }
        Err(err) => {
            state.metrics.inc_counter(counters::UPLOADS_FAILED).await;
            Err(err)
        }
    }
}
