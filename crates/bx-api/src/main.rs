//! Beltimpex search API — belt catalog REST server.
//!
//! Resolves free-text belt queries through a three-tier pipeline
//! (grammar parse, token rescue, LLM extraction) and searches warehouse
//! stock in PostgreSQL.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bx_api::config::ApiConfig;
use bx_api::state::AppState;
use bx_api::{extract, routes};
use bx_catalog::PgCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "bx-api starting");

    let config = ApiConfig::from_env();
    let oracle = extract::from_config(&config.oracle)?;

    // Connect to PostgreSQL if DATABASE_URL is set, otherwise serve the
    // in-memory sample catalog.
    let state = if let Some(database_url) = &config.database_url {
        tracing::info!("connecting to PostgreSQL");
        let catalog = PgCatalog::connect(database_url).await?;
        AppState::new(Arc::new(catalog), oracle)
    } else {
        tracing::warn!("DATABASE_URL not set — using in-memory sample catalog");
        let mut state = AppState::with_sample_data();
        state.oracle = oracle;
        state
    };

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
