//! Database access layer implementing the repository pattern.
//!
//! The repositories translate between domain models and the external
//! store's schema. All queries in the service go through this module;
//! direct SQL elsewhere is forbidden to keep the read surface auditable.
//!
//! The store itself is external and opaque: this layer only reads, and it
//! delegates every consistency guarantee to the managed database.

use std::sync::Arc;

use sqlx::PgPool;

pub mod tenants;
pub mod tickets;

/// Container for all repository instances providing unified database access.
///
/// Entry point for every query the service issues. All repositories share
/// one connection pool created at process start.
#[derive(Clone)]
pub struct Storage {
    /// Repository for support ticket reads.
    pub tickets: Arc<tickets::Repository>,

    /// Repository for tenant record reads.
    pub tenants: Arc<tenants::Repository>,
}

impl Storage {
    /// Creates a new storage instance with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        let pool = Arc::new(pool);

        Self {
            tickets: Arc::new(tickets::Repository::new(pool.clone())),
            tenants: Arc::new(tenants::Repository::new(pool)),
        }
    }
}
