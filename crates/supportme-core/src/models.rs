//! Domain models for the read-only support API.
//!
//! Everything here is a projection of rows owned by the external store.
//! This service never writes, so the models carry no mutation logic, only
//! the identifiers and fields the HTTP surface exposes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Strongly-typed tenant identifier.
///
/// Wraps the opaque identifier string taken from the request path. The
/// value is passed through to the store uninterpreted; a malformed
/// identifier simply matches no rows there. Earlier deployments called the
/// same value a customer id, so both route families share this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(pub String);

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TenantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TenantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A support ticket row, projected to the fields the API returns.
///
/// The `tenant_id` foreign key is used only as a query filter and is never
/// part of the projection.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ticket {
    /// Sequential ticket number assigned by the store.
    pub ticket_number: i64,

    /// Name of the person who opened the ticket.
    pub name: String,

    /// Free-form issue category label.
    pub issue_category: String,

    /// Priority label as stored (not an enumeration this service owns).
    pub priority: String,

    /// Status label as stored.
    pub status: String,

    /// When the ticket was opened.
    pub created_at: DateTime<Utc>,

    /// When the ticket was last modified.
    pub updated_at: DateTime<Utc>,
}

/// A tenant record, projected to the fields the badge resolver needs.
///
/// `plan` stays a plain string: rows may carry values outside the closed
/// [`Plan`] enumeration, and those must flow through to the response with a
/// null badge rather than fail to decode.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tenant {
    /// Account number shown to support staff.
    pub customer_number: i64,

    /// Subscription plan name.
    pub plan: String,

    /// Opaque external site identifier, absent for tenants without a site.
    pub wix_site_id: Option<String>,
}

/// Closed enumeration of subscription plans with a badge.
///
/// The store's `plan` column is free text; this enum is the set of values
/// the badge table covers. Anything else resolves to no badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Entry tier.
    Starter,
    /// Paid tier.
    Pro,
    /// Mid business tier.
    Premier,
    /// Top business tier.
    Ultimate,
    /// Internal developer accounts.
    Developer,
}

impl Plan {
    /// All known plans, in tier order.
    pub const ALL: [Self; 5] =
        [Self::Starter, Self::Pro, Self::Premier, Self::Ultimate, Self::Developer];

    /// Parses a stored plan name, returning `None` for unknown values.
    pub fn parse(plan: &str) -> Option<Self> {
        match plan {
            "starter" => Some(Self::Starter),
            "pro" => Some(Self::Pro),
            "premier" => Some(Self::Premier),
            "ultimate" => Some(Self::Ultimate),
            "developer" => Some(Self::Developer),
            _ => None,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Starter => write!(f, "starter"),
            Self::Pro => write!(f, "pro"),
            Self::Premier => write!(f, "premier"),
            Self::Ultimate => write!(f, "ultimate"),
            Self::Developer => write!(f, "developer"),
        }
    }
}
