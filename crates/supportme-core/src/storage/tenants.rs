//! Repository for tenant record reads.
//!
//! The badge resolver needs exactly one row per identifier. The repository
//! enforces that contract itself rather than trusting a `LIMIT 1`: zero
//! rows and multiple rows are both distinct failures, never a
//! silently-wrong single row.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    error::{CoreError, Result},
    models::{Tenant, TenantId},
};

/// Repository for tenant queries.
pub struct Repository {
    pool: Arc<PgPool>,
}

impl Repository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Fetches the single tenant row matching the identifier.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no row matches, `MultipleRows` when more
    /// than one does, and `Database` for any transport failure.
    pub async fn fetch_profile(&self, tenant_id: &TenantId) -> Result<Tenant> {
        let mut rows = sqlx::query_as::<_, Tenant>(
            r"
            SELECT customer_number, plan, wix_site_id
            FROM tenants
            WHERE id = $1
            ",
        )
        .bind(&tenant_id.0)
        .fetch_all(&*self.pool)
        .await?
        .into_iter();

        match (rows.next(), rows.next()) {
            (Some(tenant), None) => Ok(tenant),
            (None, _) => Err(CoreError::NotFound(format!("tenant {tenant_id} not found"))),
            (Some(_), Some(_)) => {
                Err(CoreError::MultipleRows(format!("tenant {tenant_id} matched multiple rows")))
            },
        }
    }

    /// Lists the distinct plan values currently present in the store.
    ///
    /// Used once at startup to check the stored values against the badge
    /// enumeration.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn distinct_plans(&self) -> Result<Vec<String>> {
        let plans = sqlx::query_scalar::<_, String>(
            r"
            SELECT DISTINCT plan FROM tenants
            ",
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(plans)
    }
}
