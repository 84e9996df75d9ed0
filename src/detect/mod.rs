//! Stack detection.
//!
//! Split into an impure evidence reader and a pure classifier:
//!
//! 1. [`evidence::ProjectEvidence::collect`] reads manifest, lockfile, and
//!    config presence from a project directory (total, never errors);
//! 2. [`classifier::classify`] maps the bundle through priority-ordered rule
//!    tables ([`rules`]) into a [`StackDetection`] with a confidence score.
//!
//! Detection never fails: absent or malformed evidence degrades to the
//! zero-confidence default record.

pub mod classifier;
pub mod evidence;
pub mod rules;
pub mod types;

pub use classifier::classify;
pub use evidence::ProjectEvidence;
pub use types::{RawEvidence, StackDetection, DEFAULT_PROJECT_NAME};

use std::path::Path;

/// Convenience entry point: collect evidence from `root` and classify it.
pub fn detect_stack(root: &Path) -> StackDetection {
    classify(&ProjectEvidence::collect(root))
}
