//! Wizard data record and modes.
//!
//! The interactive question flow is an external collaborator; this module
//! owns the record it produces. `WizardData` is a flat, all-optional record
//! threaded through the installer by value, and the quick/full/expert modes
//! are just three field subsets applied to the same shape. Non-interactive
//! runs build the record straight from a detection plus CLI overrides.

use crate::detect::StackDetection;
use serde::{Deserialize, Serialize};

/// Wizard depth. Each mode consults a growing subset of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum WizardMode {
    /// Just the essentials (name + description).
    Quick,
    /// All main sections with stack confirmation.
    #[default]
    Full,
    /// Full control with custom patterns and key files.
    Expert,
}

impl WizardMode {
    /// Field names this mode consults, in question order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Quick => &["projectName", "description"],
            Self::Full => &[
                "projectName",
                "description",
                "repoUrl",
                "confirmStack",
                "deployTarget",
            ],
            Self::Expert => &[
                "projectName",
                "description",
                "repoUrl",
                "confirmStack",
                "deployTarget",
                "customPatterns",
                "keyFiles",
                "externalApis",
            ],
        }
    }
}

/// Flat data record consumed by the template renderer. Every field is
/// optional; the renderer substitutes a documented default for absences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardData {
    pub project_name: Option<String>,
    pub description: Option<String>,
    /// Display name of the framework (e.g. "Next.js"), not the id key.
    pub framework: Option<String>,
    pub typescript: bool,
    pub language: Option<String>,
    pub package_manager: Option<String>,
    pub test_framework: Option<String>,
    pub database: Option<String>,
    pub styling: Option<String>,
    pub auth: Option<String>,
    pub repo_url: Option<String>,
    pub deploy_target: Option<String>,
    pub custom_patterns: Option<String>,
    pub key_files: Option<String>,
    pub external_apis: Option<String>,
}

/// Answer overrides supplied on the command line for non-interactive runs.
#[derive(Debug, Clone, Default)]
pub struct WizardOverrides {
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub deploy_target: Option<String>,
    pub custom_patterns: Option<String>,
    pub key_files: Option<String>,
    pub external_apis: Option<String>,
}

impl WizardData {
    /// Build the record from a detection alone (the `--yes` path).
    pub fn from_detection(detection: &StackDetection) -> Self {
        let framework_name = detection.framework.as_ref().map(|f| f.name().to_string());
        Self {
            project_name: Some(detection.project_name.clone()),
            description: Some(format!(
                "A {} project",
                framework_name.as_deref().unwrap_or("software")
            )),
            framework: framework_name,
            typescript: detection.typescript,
            language: Some(detection.language.name().to_string()),
            package_manager: Some(detection.package_manager.key().to_string()),
            test_framework: detection.test_framework.as_ref().map(|t| t.name().to_string()),
            database: detection.database.as_ref().map(|d| d.name().to_string()),
            styling: detection.styling.as_ref().map(|s| s.name().to_string()),
            auth: detection.auth.as_ref().map(|a| a.name().to_string()),
            ..Default::default()
        }
    }

    /// Apply CLI overrides, honouring the mode's field subset: quick mode
    /// ignores everything past the description, full mode ignores the
    /// expert-only fields.
    pub fn apply_overrides(mut self, mode: WizardMode, overrides: &WizardOverrides) -> Self {
        if let Some(description) = &overrides.description {
            self.description = Some(description.clone());
        }
        if mode == WizardMode::Quick {
            return self;
        }
        if let Some(repo_url) = &overrides.repo_url {
            self.repo_url = Some(repo_url.clone());
        }
        if let Some(deploy_target) = &overrides.deploy_target {
            self.deploy_target = Some(deploy_target.clone());
        }
        if mode == WizardMode::Full {
            return self;
        }
        if let Some(custom_patterns) = &overrides.custom_patterns {
            self.custom_patterns = Some(custom_patterns.clone());
        }
        if let Some(key_files) = &overrides.key_files {
            self.key_files = Some(key_files.clone());
        }
        if let Some(external_apis) = &overrides.external_apis {
            self.external_apis = Some(external_apis.clone());
        }
        self
    }
}
