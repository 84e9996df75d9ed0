//! Environment-based configuration.
//!
//! Settings load from environment variables with sensible defaults; CLI flags
//! take precedence over all of these.
//!
//! - `STACKSTART_LOG_LEVEL`: logging level - default: "info"
//! - `STACKSTART_TEMPLATES_DIR`: template root override
//! - `STACKSTART_PLUGIN_TIMEOUT`: per-plugin install timeout in seconds - default: 60

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_PLUGIN_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct StackstartConfig {
    pub log_level: String,
    pub templates_dir: Option<PathBuf>,
    /// Bound on each external plugin install before it is force-terminated.
    pub plugin_timeout: Duration,
}

impl Default for StackstartConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            templates_dir: None,
            plugin_timeout: Duration::from_secs(DEFAULT_PLUGIN_TIMEOUT_SECS),
        }
    }
}

impl StackstartConfig {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_level =
            env::var("STACKSTART_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let templates_dir = env::var("STACKSTART_TEMPLATES_DIR").ok().map(PathBuf::from);

        let plugin_timeout = match env::var("STACKSTART_PLUGIN_TIMEOUT") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::ParseError {
                    field: "STACKSTART_PLUGIN_TIMEOUT".to_string(),
                    error: e.to_string(),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_PLUGIN_TIMEOUT_SECS),
        };

        Ok(Self {
            log_level,
            templates_dir,
            plugin_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StackstartConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.plugin_timeout, Duration::from_secs(60));
        assert!(config.templates_dir.is_none());
    }
}
