//! Health and service statistics handlers

use axum::extract::State;
use axum::Json;

use crate::api::types::HealthResponse;
use crate::server::AppState;

/// GET /health — basic liveness plus the ledger target this service is
/// anchored to.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "notary-anchor",
        version: env!("CARGO_PKG_VERSION"),
        ledger: state.ledger_target.clone(),
    })
}

/// GET /stats — counter snapshot and uptime.
pub async fn stats(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.metrics.snapshot().await)
}
