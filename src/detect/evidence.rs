//! Filesystem evidence collection.
//!
//! Reads manifest, lockfile, and config presence from a project directory.
//! Every read degrades gracefully: a missing or malformed file contributes no
//! evidence, it never raises. Classification over the collected bundle is
//! pure, so this module is the only place the detector touches the disk.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Marker files whose presence is recorded as boolean evidence.
const MARKER_FILES: &[&str] = &[
    "tsconfig.json",
    "pnpm-lock.yaml",
    "yarn.lock",
    "bun.lockb",
    "pyproject.toml",
    "requirements.txt",
    "setup.py",
    "Pipfile",
    "poetry.lock",
    "uv.lock",
];

/// The subset of package.json the detector cares about.
#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    name: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

/// Evidence bundle collected from a project directory.
#[derive(Debug, Clone, Default)]
pub struct ProjectEvidence {
    /// Name from the package.json `name` field, or a Python manifest fallback.
    pub project_name: Option<String>,
    /// True when a package.json was present and parsed.
    pub has_manifest: bool,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    /// Marker file names found in the project root, in `MARKER_FILES` order.
    pub files: Vec<String>,
    /// Lower-cased contents of requirements.txt, empty if absent or unreadable.
    pub requirements_text: String,
    /// Lower-cased contents of pyproject.toml, empty if absent or unreadable.
    pub pyproject_text: String,
}

impl ProjectEvidence {
    /// Collect evidence from `root`. Total: never fails, worst case is an
    /// empty bundle.
    pub fn collect(root: &Path) -> Self {
        let mut evidence = Self::default();

        match fs::read_to_string(root.join("package.json")) {
            Ok(content) => match serde_json::from_str::<PackageManifest>(&content) {
                Ok(manifest) => {
                    evidence.has_manifest = true;
                    evidence.project_name = manifest.name;
                    evidence.dependencies = manifest.dependencies;
                    evidence.dev_dependencies = manifest.dev_dependencies;
                }
                Err(e) => {
                    debug!(error = %e, "malformed package.json, continuing with defaults");
                }
            },
            Err(_) => {
                debug!("no package.json found");
            }
        }

        for marker in MARKER_FILES {
            if root.join(marker).exists() {
                evidence.files.push((*marker).to_string());
            }
        }

        if evidence.has_file("requirements.txt") {
            evidence.requirements_text = fs::read_to_string(root.join("requirements.txt"))
                .map(|s| s.to_lowercase())
                .unwrap_or_default();
        }
        if evidence.has_file("pyproject.toml") {
            evidence.pyproject_text = fs::read_to_string(root.join("pyproject.toml"))
                .map(|s| s.to_lowercase())
                .unwrap_or_default();
        }

        if evidence.project_name.is_none() {
            evidence.project_name = pyproject_name(&evidence.pyproject_text);
        }

        evidence
    }

    /// True when `name` appears in dependencies or devDependencies.
    pub fn has_dep(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// True when the marker file was observed in the project root.
    pub fn has_file(&self, name: &str) -> bool {
        self.files.iter().any(|f| f == name)
    }

    /// Concatenated lower-cased Python config text used for substring search.
    pub fn python_config_text(&self) -> String {
        let mut text = self.requirements_text.clone();
        text.push(' ');
        text.push_str(&self.pyproject_text);
        text
    }
}

/// Recover a project name from pyproject.toml (`[project].name`, then
/// `[tool.poetry].name`). Lenient: any parse failure yields None.
fn pyproject_name(pyproject_text: &str) -> Option<String> {
    let parsed: toml::Value = toml::from_str(pyproject_text).ok()?;
    parsed
        .get("project")
        .and_then(|p| p.get("name"))
        .or_else(|| {
            parsed
                .get("tool")
                .and_then(|t| t.get("poetry"))
                .and_then(|p| p.get("name"))
        })
        .and_then(|n| n.as_str())
        .map(String::from)
}
