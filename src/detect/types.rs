use crate::stack::{
    AuthId, DatabaseId, FrameworkId, LanguageId, PackageManagerId, StylingId, TestFrameworkId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default project name used when no manifest provides one.
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// Raw evidence retained on the detection record for audit and debugging.
///
/// Downstream consumers never branch on this beyond classification itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvidence {
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub files: Vec<String>,
}

/// Result of classifying a project directory.
///
/// Created once per run by the classifier and passed by value to the template
/// selector, wizard data layer, and installer. No shared mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackDetection {
    pub project_name: String,
    pub framework: Option<FrameworkId>,
    pub typescript: bool,
    pub package_manager: PackageManagerId,
    pub test_framework: Option<TestFrameworkId>,
    pub database: Option<DatabaseId>,
    pub styling: Option<StylingId>,
    pub auth: Option<AuthId>,
    pub language: LanguageId,
    /// Heuristic score in 0..=100 reflecting how much evidence fired.
    pub confidence: u8,
    pub raw: RawEvidence,
}

impl Default for StackDetection {
    /// The zero-evidence record: npm JavaScript project with no attributes.
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            framework: None,
            typescript: false,
            package_manager: PackageManagerId::Npm,
            test_framework: None,
            database: None,
            styling: None,
            auth: None,
            language: LanguageId::Javascript,
            confidence: 0,
            raw: RawEvidence::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_detection_record() {
        let d = StackDetection::default();
        assert_eq!(d.project_name, "my-project");
        assert_eq!(d.confidence, 0);
        assert_eq!(d.language, LanguageId::Javascript);
        assert_eq!(d.package_manager, PackageManagerId::Npm);
        assert!(d.framework.is_none());
    }

    #[test]
    fn test_detection_serializes_camel_case_keys() {
        let json = serde_json::to_value(StackDetection::default()).unwrap();
        assert_eq!(json["projectName"], "my-project");
        assert_eq!(json["packageManager"], "npm");
        assert!(json["framework"].is_null());
    }
}
