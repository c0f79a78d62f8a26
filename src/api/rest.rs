//! REST API routes for the notary anchor service.

use axum::routing::{get, post};
use axum::Router;

use crate::api::handlers::{get_record, health, stats, upload_document, verify_document};
use crate::server::AppState;

/// Build the service router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_document))
        .route("/verify", post(verify_document))
        .route("/records/:digest", get(get_record))
        .route("/health", get(health))
        .route("/stats", get(stats))
}
