//! # printbilld: printbill daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Seed the catalog with the services listed in the configuration
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use printbill_adapter_http_axum::state::AppState;
use printbill_adapter_storage_sqlite_sqlx::SqliteServiceRepository;
use printbill_app::ports::ServiceRepository;
use printbill_app::services::service_catalog::ServiceCatalog;
use printbill_domain::error::PrintBillError;

use crate::config::{Config, ServiceSeed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = printbill_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    // Services
    let service_catalog = Arc::new(ServiceCatalog::new(SqliteServiceRepository::new(
        db.pool().clone(),
    )));
    seed_services(&service_catalog, &config.services).await?;

    // HTTP
    let app = printbill_adapter_http_axum::router::build(AppState::from_arc(service_catalog));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "printbilld listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("printbilld stopped");
    Ok(())
}

async fn seed_services<R: ServiceRepository>(
    catalog: &ServiceCatalog<R>,
    seeds: &[ServiceSeed],
) -> Result<(), PrintBillError> {
    for seed in seeds {
        if catalog.ensure_service(seed.to_service()?).await? {
            tracing::info!(service_id = %seed.id, name = %seed.name, "seeded service");
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
