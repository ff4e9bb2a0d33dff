//! HTTP request handlers for the SupportME API.
//!
//! Handlers are grouped by functionality:
//! - `health` - Liveness endpoints
//! - `tickets` - Ticket listing
//! - `tenant_info` - Plan badge and masked site identifier resolution
//!
//! # Error Handling
//!
//! All read paths apply one policy: a store failure of any kind (transport
//! error, no matching row, more than one matching row) is logged
//! server-side with the underlying message and answered with
//! `500 {"error": "Internal Server Error"}`. Callers never see internal
//! error text. No validation category exists; path identifiers flow to the
//! store uninterpreted.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub mod health;
pub mod tenant_info;
pub mod tickets;

// Re-export handlers for convenient access
pub use health::{api_status, healthz};
pub use tenant_info::{customer_info, tenant_info};
pub use tickets::list_tickets;

/// Error body returned to callers on any store failure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Fixed, non-revealing error description.
    pub error: &'static str,
}

/// Builds the uniform internal-failure response.
pub(crate) fn internal_error_response() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: "Internal Server Error" }))
        .into_response()
}
