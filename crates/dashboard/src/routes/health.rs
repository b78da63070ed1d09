//! Health check handlers.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the data file can be loaded; a file that does not exist yet
/// counts as ready because it is created on first use.
/// Returns 503 Service Unavailable if the file exists but cannot be read.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.repository().load_or_empty().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Data file is not readable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
