//! Tenant metadata handlers.
//!
//! Both info endpoints share one resolution path: a single-row tenant
//! fetch followed by the pure badge/masking derivation. They differ only
//! in which fields of the derived profile they project and under which
//! names, a leftover of successive deployments of the same endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use supportme_core::{error::Result, TenantId, TenantProfile};
use tracing::{error, instrument};

use crate::{handlers::internal_error_response, store::SupportStore};

/// Response body for `/customer-info/{id}`.
#[derive(Debug, Serialize)]
pub struct CustomerInfoResponse {
    /// Account number from the store.
    pub customer_number: i64,
    /// Plan name, unchanged even when outside the known enumeration.
    pub plan: String,
    /// Badge URL for the plan, null for unknown plans.
    pub badge_url: Option<&'static str>,
}

impl From<TenantProfile> for CustomerInfoResponse {
    fn from(profile: TenantProfile) -> Self {
        Self {
            customer_number: profile.customer_number,
            plan: profile.plan,
            badge_url: profile.badge_url,
        }
    }
}

/// Response body for `/tenant-info/{tenant_id}`.
///
/// `tenant_number` carries the same underlying value as
/// `customer_number`; the field was renamed between deployments and both
/// shapes remain part of the surface.
#[derive(Debug, Serialize)]
pub struct TenantInfoResponse {
    /// Account number from the store.
    pub tenant_number: i64,
    /// Opaque site identifier as stored.
    pub wix_site_id: Option<String>,
    /// Masked site identifier, null when the site id is absent or empty.
    pub masked_id: Option<String>,
    /// Plan name, unchanged even when outside the known enumeration.
    pub plan: String,
    /// Badge URL for the plan, null for unknown plans.
    pub badge_url: Option<&'static str>,
}

impl From<TenantProfile> for TenantInfoResponse {
    fn from(profile: TenantProfile) -> Self {
        Self {
            tenant_number: profile.customer_number,
            wix_site_id: profile.wix_site_id,
            masked_id: profile.masked_id,
            plan: profile.plan,
            badge_url: profile.badge_url,
        }
    }
}

/// Fetches the tenant row and derives the composed profile.
async fn resolve_profile(store: &Arc<dyn SupportStore>, id: String) -> Result<TenantProfile> {
    let tenant = store.fetch_tenant(TenantId(id)).await?;
    Ok(TenantProfile::derive(&tenant))
}

/// Returns plan and badge information for a customer.
#[instrument(name = "customer_info", skip(store), fields(tenant_id = %id))]
pub async fn customer_info(
    Path(id): Path<String>,
    State(store): State<Arc<dyn SupportStore>>,
) -> Response {
    match resolve_profile(&store, id).await {
        Ok(profile) => {
            (StatusCode::OK, Json(CustomerInfoResponse::from(profile))).into_response()
        },
        Err(e) => {
            error!(error = %e, "Failed to resolve customer info");
            internal_error_response()
        },
    }
}

/// Returns plan, badge, and masked site identifier for a tenant.
#[instrument(name = "tenant_info", skip(store), fields(tenant_id = %id))]
pub async fn tenant_info(
    Path(id): Path<String>,
    State(store): State<Arc<dyn SupportStore>>,
) -> Response {
    match resolve_profile(&store, id).await {
        Ok(profile) => (StatusCode::OK, Json(TenantInfoResponse::from(profile))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to resolve tenant info");
            internal_error_response()
        },
    }
}
