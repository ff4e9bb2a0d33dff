//! SupportME read-only support API.
//!
//! Main entry point for the SupportME server. Wires the store client,
//! checks the plan catalog, and serves the HTTP surface until shutdown.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use supportme_api::{start_server, Config, PostgresSupportStore, SupportStore};
use supportme_core::{storage::Storage, Plan};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting SupportME API");

    let config = Config::load()?;
    info!(
        database_url = %config.database_url_masked(),
        host = %config.host,
        port = config.port,
        max_connections = config.database_max_connections,
        "Configuration loaded"
    );

    // Lazy pool: the store is not contacted at startup, so an unreachable
    // store surfaces on the first request rather than preventing boot.
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_lazy(&config.database_url)
        .context("Invalid DATABASE_URL")?;

    let storage = Arc::new(Storage::new(pool.clone()));

    verify_plan_catalog(&storage).await;

    let store: Arc<dyn SupportStore> = Arc::new(PostgresSupportStore::new(storage));
    let addr = config.parse_server_addr()?;
    let request_timeout = Duration::from_secs(config.request_timeout);

    start_server(store, addr, request_timeout).await.context("Server failed")?;

    pool.close().await;
    info!("Database connections closed");

    info!("SupportME shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,supportme=debug,tower_http=debug"))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true).with_file(true).with_line_number(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

/// Warns about plan values in the store that fall outside the badge table.
///
/// The badge mapping is a closed enumeration; rows carrying other values
/// resolve to a null badge at request time. A store failure here is only a
/// warning, startup proceeds either way.
async fn verify_plan_catalog(storage: &Storage) {
    match storage.tenants.distinct_plans().await {
        Ok(plans) => {
            for plan in plans.iter().filter(|plan| Plan::parse(plan).is_none()) {
                warn!(plan = %plan, "Tenant plan has no badge mapping");
            }
        },
        Err(e) => {
            warn!(error = %e, "Could not verify plan catalog against the store");
        },
    }
}
