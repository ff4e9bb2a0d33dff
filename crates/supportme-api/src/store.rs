//! Store abstraction for the HTTP handlers.
//!
//! Provides a trait over the two read operations the API needs, so the
//! external store is an injected dependency rather than a process-wide
//! client handle. Production wraps the repository layer over `PgPool`;
//! tests substitute the in-memory mock for deterministic behavior without
//! a database.

use std::{future::Future, pin::Pin, sync::Arc};

use supportme_core::{error::Result, storage::Storage, Tenant, TenantId, Ticket};

/// Read operations required by the HTTP surface.
///
/// Mirrors the external collaborator contract: equality-filtered column
/// selection returning zero-or-more rows, and the same constrained to
/// exactly one row.
pub trait SupportStore: Send + Sync + 'static {
    /// Lists all tickets belonging to a tenant.
    ///
    /// Zero matching rows is a success with an empty list.
    fn list_tickets(
        &self,
        tenant_id: TenantId,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Ticket>>> + Send + '_>>;

    /// Fetches the single tenant row matching the identifier.
    ///
    /// Fails on zero rows and on more than one row.
    fn fetch_tenant(
        &self,
        tenant_id: TenantId,
    ) -> Pin<Box<dyn Future<Output = Result<Tenant>> + Send + '_>>;
}

/// Production store implementation over PostgreSQL.
///
/// Wraps the concrete `supportme_core::storage::Storage` so all queries go
/// through the repository layer.
pub struct PostgresSupportStore {
    storage: Arc<Storage>,
}

impl PostgresSupportStore {
    /// Creates a new PostgreSQL store adapter.
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl SupportStore for PostgresSupportStore {
    fn list_tickets(
        &self,
        tenant_id: TenantId,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Ticket>>> + Send + '_>> {
        let storage = self.storage.clone();
        Box::pin(async move { storage.tickets.find_by_tenant(&tenant_id).await })
    }

    fn fetch_tenant(
        &self,
        tenant_id: TenantId,
    ) -> Pin<Box<dyn Future<Output = Result<Tenant>> + Send + '_>> {
        let storage = self.storage.clone();
        Box::pin(async move { storage.tenants.fetch_profile(&tenant_id).await })
    }
}

pub mod mock {
    //! Mock store implementation for testing.
    //!
    //! In-memory tables keyed by tenant identifier, with failure injection
    //! for exercising the error path. A tenant identifier may be mapped to
    //! several rows to reproduce the multiple-row failure of the
    //! single-row fetch.

    use std::{collections::HashMap, future::Future, pin::Pin, sync::Arc};

    use supportme_core::{
        error::{CoreError, Result},
        Tenant, TenantId, Ticket,
    };
    use tokio::sync::RwLock;

    use super::SupportStore;

    /// Mock store backed by in-memory maps.
    #[derive(Default)]
    pub struct MockSupportStore {
        tickets: Arc<RwLock<HashMap<String, Vec<Ticket>>>>,
        tenants: Arc<RwLock<HashMap<String, Vec<Tenant>>>>,
        next_error: Arc<RwLock<Option<String>>>,
    }

    impl MockSupportStore {
        /// Creates a new mock store with empty tables.
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds a ticket row for a tenant.
        pub async fn add_ticket(&self, tenant_id: &str, ticket: Ticket) {
            self.tickets.write().await.entry(tenant_id.to_string()).or_default().push(ticket);
        }

        /// Adds a tenant row.
        ///
        /// Calling this twice with the same identifier produces the
        /// multiple-row condition on fetch.
        pub async fn add_tenant(&self, tenant_id: &str, tenant: Tenant) {
            self.tenants.write().await.entry(tenant_id.to_string()).or_default().push(tenant);
        }

        /// Injects a store failure for the next operation.
        pub async fn inject_error(&self, error: impl Into<String>) {
            *self.next_error.write().await = Some(error.into());
        }

        async fn take_error(&self) -> Option<CoreError> {
            self.next_error.write().await.take().map(CoreError::Database)
        }
    }

    impl SupportStore for MockSupportStore {
        fn list_tickets(
            &self,
            tenant_id: TenantId,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<Ticket>>> + Send + '_>> {
            Box::pin(async move {
                if let Some(err) = self.take_error().await {
                    return Err(err);
                }

                Ok(self.tickets.read().await.get(&tenant_id.0).cloned().unwrap_or_default())
            })
        }

        fn fetch_tenant(
            &self,
            tenant_id: TenantId,
        ) -> Pin<Box<dyn Future<Output = Result<Tenant>> + Send + '_>> {
            Box::pin(async move {
                if let Some(err) = self.take_error().await {
                    return Err(err);
                }

                let tenants = self.tenants.read().await;
                match tenants.get(&tenant_id.0).map(Vec::as_slice) {
                    None | Some([]) => {
                        Err(CoreError::NotFound(format!("tenant {tenant_id} not found")))
                    },
                    Some([tenant]) => Ok(tenant.clone()),
                    Some(_) => Err(CoreError::MultipleRows(format!(
                        "tenant {tenant_id} matched multiple rows"
                    ))),
                }
            })
        }
    }
}
