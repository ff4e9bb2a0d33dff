//! Plan badge lookup and site identifier masking.
//!
//! The only derivation logic in the service. Both operations are pure and
//! run per request; nothing here touches the store.

use serde::Serialize;

use crate::models::{Plan, Tenant};

/// Number of trailing characters of a site identifier that are safe to show.
const MASKED_SUFFIX_LEN: usize = 12;

impl Plan {
    /// Badge image URL for this plan.
    ///
    /// The table is exhaustive over the enumeration; unknown plan strings
    /// never reach it (see [`badge_url_for`]).
    pub const fn badge_url(self) -> &'static str {
        match self {
            Self::Starter => "https://static.supportme.app/badges/starter.png",
            Self::Pro => "https://static.supportme.app/badges/pro.png",
            Self::Premier => "https://static.supportme.app/badges/premier.png",
            Self::Ultimate => "https://static.supportme.app/badges/ultimate.png",
            Self::Developer => "https://static.supportme.app/badges/developer.png",
        }
    }
}

/// Resolves a stored plan name to its badge URL.
///
/// Returns `None` for any value outside the closed enumeration, including
/// the empty string. Unknown plans are not an error.
pub fn badge_url_for(plan: &str) -> Option<&'static str> {
    Plan::parse(plan).map(Plan::badge_url)
}

/// Masks a site identifier down to its displayable suffix.
///
/// Keeps the last [`MASKED_SUFFIX_LEN`] characters; identifiers shorter
/// than that are returned whole. Operates on character boundaries, so a
/// non-ASCII identifier cannot split a code point.
pub fn mask_site_id(site_id: &str) -> &str {
    match site_id.char_indices().rev().nth(MASKED_SUFFIX_LEN - 1) {
        Some((idx, _)) => &site_id[idx..],
        None => site_id,
    }
}

/// Composed tenant record returned by the info endpoints.
///
/// Derived per request from a [`Tenant`] row; holds the original fields
/// plus the two computed values.
#[derive(Debug, Clone, Serialize)]
pub struct TenantProfile {
    /// Account number, unchanged from the store.
    pub customer_number: i64,

    /// Plan name, unchanged from the store even when unknown.
    pub plan: String,

    /// Opaque site identifier, unchanged from the store.
    pub wix_site_id: Option<String>,

    /// Masked site identifier, null when the site id is absent or empty.
    pub masked_id: Option<String>,

    /// Badge URL for the plan, null for plans outside the enumeration.
    pub badge_url: Option<&'static str>,
}

impl TenantProfile {
    /// Derives the composed record from a tenant row.
    pub fn derive(tenant: &Tenant) -> Self {
        let masked_id = tenant
            .wix_site_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| mask_site_id(id).to_string());

        Self {
            customer_number: tenant.customer_number,
            plan: tenant.plan.clone(),
            wix_site_id: tenant.wix_site_id.clone(),
            masked_id,
            badge_url: badge_url_for(&tenant.plan),
        }
    }
}
