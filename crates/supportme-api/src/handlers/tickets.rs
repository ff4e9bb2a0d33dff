//! Ticket listing handler.
//!
//! One read path: all ticket rows whose tenant foreign key equals the path
//! identifier, projected to the fixed column subset. Zero rows is a normal
//! empty listing.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use supportme_core::{TenantId, Ticket};
use tracing::{error, instrument};

use crate::{handlers::internal_error_response, store::SupportStore};

/// Envelope for the ticket listing response.
#[derive(Debug, Serialize)]
pub struct TicketsResponse {
    /// Matching tickets in store order.
    pub tickets: Vec<Ticket>,
}

/// Lists all tickets for a tenant.
///
/// The path identifier is accepted for both tenant ids and the customer
/// ids of earlier deployments; both name the same foreign key.
#[instrument(name = "list_tickets", skip(store), fields(tenant_id = %id))]
pub async fn list_tickets(
    Path(id): Path<String>,
    State(store): State<Arc<dyn SupportStore>>,
) -> Response {
    match store.list_tickets(TenantId(id)).await {
        Ok(tickets) => (StatusCode::OK, Json(TicketsResponse { tickets })).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to fetch tickets");
            internal_error_response()
        },
    }
}
