//! Session configuration.
//!
//! Loaded from `ECOGROW_*` environment variables with fallback to defaults.
//!
//! | Variable                   | Default | Meaning                          |
//! |----------------------------|---------|----------------------------------|
//! | `ECOGROW_LOG`              | `info`  | tracing filter (RUST_LOG wins)   |
//! | `ECOGROW_LOG_TARGETS`      | `false` | print module targets in logs     |
//! | `ECOGROW_CURRENCY_SYMBOL`  | `Rs.`   | prefix for rendered prices       |

use serde::{Deserialize, Serialize};
use std::env;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Default tracing filter directive
    pub log_filter: String,

    /// Include event targets in log output
    pub log_targets: bool,

    /// Currency prefix used when rendering prices
    pub currency_symbol: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            log_filter: "info".to_string(),
            log_targets: false,
            currency_symbol: "Rs.".to_string(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SessionConfig::default();

        let log_filter = lookup("ECOGROW_LOG").unwrap_or(defaults.log_filter);

        let log_targets = match lookup("ECOGROW_LOG_TARGETS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ECOGROW_LOG_TARGETS".to_string()))?,
            None => defaults.log_targets,
        };

        let currency_symbol = lookup("ECOGROW_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol);
        if currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "ECOGROW_CURRENCY_SYMBOL".to_string(),
            ));
        }

        Ok(SessionConfig {
            log_filter,
            log_targets,
            currency_symbol,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
