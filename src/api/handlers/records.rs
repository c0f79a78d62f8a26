//! Registration record lookup handler

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::{ApiError, ErrorCode};
use crate::api::types::RecordResponse;
use crate::domain::Digest;
use crate::metrics::counters;
use crate::server::AppState;

/// GET /records/{digest} — canonical earliest confirmed registration for a
/// digest, queried directly by hex digest instead of re-uploading the file.
pub async fn get_record(
    State(state): State<AppState>,
    Path(digest): Path<String>,
) -> Result<Json<RecordResponse>, ApiError> {
    let digest = Digest::from_hex(&digest)
        .ok_or_else(|| ApiError::invalid_body("expected a 32-byte hex digest"))?;

    state.metrics.inc_counter(counters::RECORD_LOOKUPS).await;

    let record = state.index.lookup(digest).await.map_err(ApiError::from)?;

    match record {
        Some(record) => Ok(Json(RecordResponse { record })),
        None => Err(ApiError::new(
            ErrorCode::NotRegistered,
            format!("no confirmed registration for {digest}"),
        )),
    }
}
