//! On-disk template store.
//!
//! Templates ship as plain documents under a `templates/` root. The root is
//! resolved from `STACKSTART_TEMPLATES_DIR`, then next to the executable,
//! then the crate manifest directory for development runs.

use super::{get, TemplateId, CATALOG};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Subdirectory holding the generated-document templates.
const CLAUDE_MD_DIR: &str = "claude-md";

/// Static fallback document copied verbatim when rendering fails.
const FALLBACK_FILE: &str = "project-CLAUDE.md";

/// Template resolution and rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Identifier outside the catalog. Fatal to the render call; callers
    /// fall back to the static default document instead of aborting.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// The catalog references a document that is not on disk.
    #[error("template source file not found: {0}")]
    MissingSourceFile(PathBuf),

    #[error("failed to read template {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only view over the template root directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Locate the template root: env override, executable-relative, then the
    /// crate manifest dir. Falls back to `./templates` if nothing resolves;
    /// missing files surface later as `MissingSourceFile`.
    pub fn discover() -> Self {
        if let Ok(dir) = env::var("STACKSTART_TEMPLATES_DIR") {
            return Self::new(PathBuf::from(dir));
        }

        if let Ok(exe) = env::current_exe() {
            if let Some(parent) = exe.parent() {
                let candidate = parent.join("templates");
                if candidate.is_dir() {
                    return Self::new(candidate);
                }
            }
        }

        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates");
        if manifest_dir.is_dir() {
            return Self::new(manifest_dir);
        }

        Self::new(PathBuf::from("templates"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a catalog template's backing document.
    pub fn document_path(&self, id: &TemplateId) -> Result<PathBuf, TemplateError> {
        let spec = get(id).ok_or_else(|| TemplateError::UnknownTemplate(id.key().to_string()))?;
        Ok(self.root.join(CLAUDE_MD_DIR).join(spec.file))
    }

    /// Raw template text for a catalog id.
    pub fn read(&self, id: &TemplateId) -> Result<String, TemplateError> {
        let path = self.document_path(id)?;
        if !path.is_file() {
            return Err(TemplateError::MissingSourceFile(path));
        }
        fs::read_to_string(&path).map_err(|source| TemplateError::Io { path, source })
    }

    /// The static default document, used as the render-failure fallback.
    pub fn fallback_document(&self) -> Result<String, TemplateError> {
        let path = self.root.join(FALLBACK_FILE);
        if !path.is_file() {
            return Err(TemplateError::MissingSourceFile(path));
        }
        fs::read_to_string(&path).map_err(|source| TemplateError::Io { path, source })
    }

    /// Path of an auxiliary asset (settings files, rules, commands) under the
    /// template root.
    pub fn asset_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Verify every catalog entry has its backing document; returns the
    /// missing file names.
    pub fn validate(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for spec in CATALOG {
            let path = self.root.join(CLAUDE_MD_DIR).join(spec.file);
            if !path.is_file() {
                debug!(file = spec.file, "catalog template missing");
                missing.push(spec.file.to_string());
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_store() -> TemplateStore {
        TemplateStore::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"))
    }

    #[test]
    fn test_shipped_catalog_is_complete() {
        assert!(dev_store().validate().is_empty());
    }

    #[test]
    fn test_unknown_template_errors() {
        let err = dev_store()
            .read(&TemplateId::Custom("no-such".to_string()))
            .unwrap_err();
        assert!(matches!(err, TemplateError::UnknownTemplate(_)));
    }

    #[test]
    fn test_missing_source_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TemplateStore::new(dir.path().to_path_buf());
        let err = store.read(&TemplateId::Minimal).unwrap_err();
        assert!(matches!(err, TemplateError::MissingSourceFile(_)));
        assert_eq!(store.validate().len(), CATALOG.len());
    }
}
