//! `studysphere-api` — server binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Build the Axum router and start the HTTP server.

use anyhow::Result;
use tracing::info;

use studysphere_api::config::Config;
use studysphere_api::server::{router, state::AppState};
use studysphere_api::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cfg.port,
        production = cfg.is_production(),
        "studysphere-api starting"
    );

    // -----------------------------------------------------------------------
    // 3. HTTP server
    // -----------------------------------------------------------------------
    let port = cfg.port;
    let state = AppState::new(cfg);
    let app = router::build(state);

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], port).into();
    info!(url = %format!("http://localhost:{port}"), "listening");

    // A bind failure is fatal: no retry, no fallback port.
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
