//! Structured logging setup.
//!
//! Initialization and configuration for the `tracing` ecosystem: stderr
//! console output by default, optional JSON for machine consumption, level
//! from configuration or `RUST_LOG`. Initialization is idempotent.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Controls level, format, and metadata of emitted logs.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display.
    pub level: Level,
    /// Use JSON output instead of pretty console lines.
    pub use_json: bool,
    /// Include the module target (e.g. stackstart::detect) in logs.
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Parse a level name, defaulting to INFO on anything unrecognized.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Resolve the level from CLI flags. An explicit `--log-level` wins, then
/// `-v`/`-q`, then `STACKSTART_LOG_LEVEL`, then INFO.
pub fn resolve_level(explicit: Option<&str>, verbose: bool, quiet: bool) -> Level {
    match explicit {
        Some(level_str) => parse_level(level_str),
        None if verbose => Level::DEBUG,
        None if quiet => Level::ERROR,
        None => parse_level(
            &env::var("STACKSTART_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        ),
    }
}

/// Initialize the global subscriber. Safe to call multiple times; only the
/// first call takes effect.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if env::var("RUST_LOG").is_err() {
            filter = filter.add_directive(
                format!("stackstart={}", config.level)
                    .parse()
                    .expect("static directive"),
            );
        }

        let registry = tracing_subscriber::registry().with(filter);
        if config.use_json {
            registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level("bogus"), Level::INFO);
    }

    #[test]
    fn test_resolve_level_flag_precedence() {
        assert_eq!(resolve_level(Some("warn"), true, false), Level::WARN);
        assert_eq!(resolve_level(None, true, false), Level::DEBUG);
        assert_eq!(resolve_level(None, false, true), Level::ERROR);
    }
}
