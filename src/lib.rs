//! stackstart - stack-aware bootstrapper for AI assistant configuration
//!
//! This library inspects a project directory's manifest and lockfiles, infers
//! the technology stack, and renders a tailored assistant configuration
//! (rules, command definitions, a generated `CLAUDE.md`) into place.
//!
//! # Core Concepts
//!
//! - **Evidence**: observable filesystem/manifest facts collected from a
//!   project directory ([`detect::ProjectEvidence`])
//! - **Classification**: a pure, total mapping from evidence to a ranked
//!   [`detect::StackDetection`] via priority-ordered rule tables
//! - **Templates**: a fixed catalog of placeholder documents rendered against
//!   a wizard data record
//!
//! # Example Usage
//!
//! ```no_run
//! use stackstart::detect::detect_stack;
//! use stackstart::template;
//! use std::path::Path;
//!
//! let detection = detect_stack(Path::new("."));
//! let recommended = template::recommend(&detection);
//! println!("{} -> {}", detection.project_name, recommended.key());
//! ```
//!
//! # Project Structure
//!
//! - [`detect`]: evidence collection and the stack classifier
//! - [`stack`]: strongly-typed stack attribute identifiers
//! - [`template`]: template catalog, store, and renderer
//! - [`wizard`]: the wizard data record and modes
//! - [`install`]: the installer pipeline and plugin registry

// Public modules
pub mod cli;
pub mod config;
pub mod detect;
pub mod install;
pub mod stack;
pub mod template;
pub mod util;
pub mod wizard;

// Re-export key types for convenient access
pub use config::{ConfigError, StackstartConfig};
pub use detect::{classify, detect_stack, ProjectEvidence, StackDetection};
pub use template::{recommend, render, TemplateError, TemplateId, TemplateStore};
pub use util::{init_logging, resolve_level, LoggingConfig};
pub use wizard::{WizardData, WizardMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
