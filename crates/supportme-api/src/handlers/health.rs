//! Liveness handlers for service monitoring.
//!
//! Both endpoints are pure liveness: they never touch the store and
//! succeed whenever the process is up, regardless of store availability.

use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::{debug, instrument};

/// Root status endpoint.
///
/// Returns the fixed banner payload the original deployment exposed at
/// `/`.
#[instrument(name = "api_status")]
pub async fn api_status() -> impl IntoResponse {
    debug!("Serving API status");

    Json(serde_json::json!({ "status": "SupportME API is running" }))
}

/// Plain-text liveness endpoint for orchestration probes.
#[instrument(name = "healthz")]
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
