//! Configuration loading and validation for the StudySphere API server.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any required variable is missing or invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TCP port the HTTP server listens on. **Required.**
    pub port: u16,

    /// Deployment environment. Exactly `"production"` suppresses diagnostic
    /// traces in error responses; any other value is treated as non-production.
    #[serde(default = "default_node_env")]
    pub node_env: String,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_node_env() -> String {
    "development".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Returns `true` when the server runs in production mode.
    ///
    /// The match is exact: `"Production"`, `"prod"`, and friends are all
    /// non-production.
    pub fn is_production(&self) -> bool {
        self.node_env == "production"
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be a non-zero TCP port");
        }
        if self.node_env.trim().is_empty() {
            anyhow::bail!("NODE_ENV must not be empty when set");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            port: 5000,
            node_env: default_node_env(),
            log_level: default_log_level(),
        }
    }

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_node_env(), "development");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_accepts_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let cfg = Config {
            port: 0,
            ..base_config()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_node_env() {
        let cfg = Config {
            node_env: "  ".into(),
            ..base_config()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn production_mode_is_exact_match() {
        let mut cfg = base_config();
        cfg.node_env = "production".into();
        assert!(cfg.is_production());

        cfg.node_env = "Production".into();
        assert!(!cfg.is_production());

        cfg.node_env = "development".into();
        assert!(!cfg.is_production());
    }
}
