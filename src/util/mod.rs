//! Utility modules: logging setup and installer filesystem helpers.

pub mod fs;
pub mod logging;

pub use logging::{init_logging, resolve_level, LoggingConfig};
