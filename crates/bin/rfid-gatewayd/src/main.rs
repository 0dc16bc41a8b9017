//! # rfid-gatewayd — RFID zone gateway daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (`.env`, env vars, optional config file)
//! - Initialize structured logging
//! - Build the lazily-connected `PostgreSQL` pool and probe it once
//! - Construct the storage adapters and inject them into application services
//! - Build the axum router, bind to a TCP port and serve
//!
//! Requests are served on a single-threaded event loop; handlers interleave at
//! their database await points.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use rfid_gateway_adapter_http_axum::router;
use rfid_gateway_adapter_http_axum::state::AppState;
use rfid_gateway_adapter_storage_postgres_sqlx::{
    Database, PgMovementProcedure, PgOccupancyRepository,
};
use rfid_gateway_app::services::movement_service::MovementService;
use rfid_gateway_app::services::occupancy_service::OccupancyService;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = Config::load()?;
    init_tracing(&config.logging);

    // Database
    let connection = config.connection_config();
    if connection.uses_default_password() {
        tracing::warn!("DB_PASS is not set, using the development default password");
    }
    tracing::info!(
        host = %connection.host,
        port = connection.port,
        database = %connection.database,
        user = %connection.user,
        "configured database connection"
    );
    let db = connection.build();
    tokio::spawn(probe_database(db.clone()));
    let pool = db.pool().clone();

    // Services
    let occupancy_service = OccupancyService::new(PgOccupancyRepository::new(pool.clone()));
    let movement_service = MovementService::new(PgMovementProcedure::new(pool));

    // HTTP
    let app = router::build(AppState::new(occupancy_service, movement_service));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        bind = %config.bind_addr(),
        "server running on http://localhost:{}",
        config.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// One-off connectivity check. Never fatal: the gateway keeps serving and
/// requests report database failures on their own.
async fn probe_database(db: Database) {
    match db.ping().await {
        Ok(now) => tracing::info!(server_time = %now, "database connected"),
        Err(err) => tracing::warn!(error = ?err, "database connection check failed"),
    }
}
