//! Repository for support ticket reads.
//!
//! Tickets are owned entirely by the external store; this repository only
//! projects them, filtered by the owning tenant.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    error::Result,
    models::{TenantId, Ticket},
};

/// Repository for ticket queries.
pub struct Repository {
    pool: Arc<PgPool>,
}

impl Repository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Finds all tickets belonging to a tenant.
    ///
    /// Zero matching rows is a normal result, not an error. Row order is
    /// whatever the store returns; no sort is imposed.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn find_by_tenant(&self, tenant_id: &TenantId) -> Result<Vec<Ticket>> {
        let tickets = sqlx::query_as::<_, Ticket>(
            r"
            SELECT ticket_number, name, issue_category, priority, status,
                   created_at, updated_at
            FROM tickets
            WHERE tenant_id = $1
            ",
        )
        .bind(&tenant_id.0)
        .fetch_all(&*self.pool)
        .await?;

        Ok(tickets)
    }
}
