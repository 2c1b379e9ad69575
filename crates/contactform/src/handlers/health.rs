//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (runs a trivial storage query)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does not touch storage.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when storage answers, 503 otherwise.
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.submission_repo.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "ready": true }))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "ready": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
