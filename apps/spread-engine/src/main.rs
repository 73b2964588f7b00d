//! Spread Engine Binary
//!
//! Loads the quote table and serves the optimization API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin spread-engine
//! ```
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `QUOTES_CSV`: path to the ingested option-chain CSV (default: quotes.csv)
//! - `DEFAULT_QUANTITY`: contracts per leg when omitted (default: 100)
//! - `DEFAULT_FEES_TOTAL`: flat fees per spread when omitted (default: 44.00)
//! - `DEFAULT_MIN_RISK_REWARD`: quality gate when omitted (default: 1.0)
//! - `RUST_LOG`: log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use spread_engine::{AppState, Settings, create_router, load_quotes};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting Spread Engine");

    let settings = Settings::from_env().context("failed to parse settings")?;
    tracing::info!(
        http_port = settings.http_port,
        quotes_csv = %settings.quotes_csv.display(),
        default_quantity = settings.defaults.quantity,
        "configuration loaded"
    );

    let table = load_quotes(&settings.quotes_csv)
        .with_context(|| format!("failed to load quotes from {}", settings.quotes_csv.display()))?;
    if table.is_empty() {
        tracing::warn!("quote table is empty; every optimization request will fail");
    }

    let state = AppState {
        table: Arc::new(table),
        defaults: settings.defaults,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Console tracing with `RUST_LOG` support.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Resolves when ctrl-c is received.
async fn shutdown_signal() {
    if let Err(error) = signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
