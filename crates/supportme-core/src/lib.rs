//! Core domain models and storage layer.
//!
//! Provides the read-only domain types for support tickets and tenant
//! records, the pure badge/masking derivation, and the error taxonomy
//! shared by the rest of the service. All other crates depend on these
//! foundational types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod badge;
pub mod error;
pub mod models;
pub mod storage;

pub use badge::{badge_url_for, mask_site_id, TenantProfile};
pub use error::{CoreError, Result};
pub use models::{Plan, Tenant, TenantId, Ticket};
