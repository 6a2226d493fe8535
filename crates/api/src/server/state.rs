//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::Config;

/// Application state shared across all request handlers.
///
/// The configuration is `Arc`-wrapped so that Axum can clone the state for
/// each request without copying it.
#[derive(Clone)]
pub struct AppState {
    /// Immutable process configuration, resolved once at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new [`AppState`] from the resolved configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    /// Creates a default [`AppState`] in non-production mode, suitable for tests.
    fn default() -> Self {
        Self::new(Config {
            port: 5000,
            node_env: "development".into(),
            log_level: "info".into(),
        })
    }
}
