//! The stack classifier.
//!
//! `classify` is a pure, total function from an evidence bundle to a
//! [`StackDetection`]: no I/O, no side effects, deterministic. All disk reads
//! happen in [`super::evidence`], which is what keeps this unit-testable in
//! isolation. No input shape is an error; the worst case is the
//! zero-confidence default record.

use crate::detect::evidence::ProjectEvidence;
use crate::detect::rules::{
    first_match, AUTH_RULES, DATABASE_RULES, FRAMEWORK_RULES, LOCKFILE_RULES,
    PYTHON_FRAMEWORK_RULES, PYTHON_MARKER_FILES, STYLING_RULES, TEST_FRAMEWORK_RULES,
};
use crate::detect::types::{RawEvidence, StackDetection, DEFAULT_PROJECT_NAME};
use crate::stack::{FrameworkId, LanguageId, PackageManagerId};
use tracing::debug;

// Per-signal confidence weights. The sum is clamped at 100.
const WEIGHT_MANIFEST: u32 = 30;
const WEIGHT_TYPESCRIPT: u32 = 10;
const WEIGHT_PACKAGE_MANAGER: u32 = 10;
const WEIGHT_FRAMEWORK: u32 = 20;
const WEIGHT_TEST_FRAMEWORK: u32 = 10;
const WEIGHT_DATABASE: u32 = 10;
const WEIGHT_STYLING: u32 = 5;
const WEIGHT_AUTH: u32 = 5;
const WEIGHT_PYTHON: u32 = 30;

/// Classify collected evidence into a stack detection record.
pub fn classify(evidence: &ProjectEvidence) -> StackDetection {
    let mut detection = StackDetection::default();
    let mut confidence: u32 = 0;

    if let Some(name) = &evidence.project_name {
        detection.project_name = name.clone();
    } else {
        detection.project_name = DEFAULT_PROJECT_NAME.to_string();
    }
    if evidence.has_manifest {
        confidence += WEIGHT_MANIFEST;
    }

    detection.raw = RawEvidence {
        dependencies: evidence.dependencies.clone(),
        dev_dependencies: evidence.dev_dependencies.clone(),
        files: evidence.files.clone(),
    };

    detection.typescript =
        evidence.has_file("tsconfig.json") || evidence.has_dep("typescript");
    if detection.typescript {
        detection.language = LanguageId::Typescript;
        confidence += WEIGHT_TYPESCRIPT;
    }

    // Lockfile priority order; the default still counts as a detection.
    detection.package_manager = detect_package_manager(evidence);
    confidence += WEIGHT_PACKAGE_MANAGER;

    detection.framework = detect_framework(evidence);
    if detection.framework.is_some() {
        confidence += WEIGHT_FRAMEWORK;
    }

    detection.test_framework = first_match(TEST_FRAMEWORK_RULES, evidence);
    if detection.test_framework.is_some() {
        confidence += WEIGHT_TEST_FRAMEWORK;
    }

    detection.database = first_match(DATABASE_RULES, evidence);
    if detection.database.is_some() {
        confidence += WEIGHT_DATABASE;
    }

    detection.styling = first_match(STYLING_RULES, evidence);
    if detection.styling.is_some() {
        confidence += WEIGHT_STYLING;
    }

    detection.auth = first_match(AUTH_RULES, evidence);
    if detection.auth.is_some() {
        confidence += WEIGHT_AUTH;
    }

    // Python fallback, only when no JavaScript framework matched. The Python
    // package manager intentionally overwrites the lockfile-derived result.
    if detection.framework.is_none() {
        if let Some(python) = detect_python(evidence) {
            detection.language = LanguageId::Python;
            detection.framework = python.framework;
            detection.package_manager = python.package_manager;
            confidence += WEIGHT_PYTHON;
        }
    }

    detection.confidence = confidence.min(100) as u8;
    debug!(
        framework = ?detection.framework,
        language = %detection.language,
        confidence = detection.confidence,
        "classified stack"
    );
    detection
}

fn detect_package_manager(evidence: &ProjectEvidence) -> PackageManagerId {
    LOCKFILE_RULES
        .iter()
        .find(|(marker, _)| evidence.has_file(marker))
        .map(|(_, pm)| pm.clone())
        .unwrap_or(PackageManagerId::Npm)
}

fn detect_framework(evidence: &ProjectEvidence) -> Option<FrameworkId> {
    for (matcher, id) in FRAMEWORK_RULES {
        if !matcher.matches(evidence) {
            continue;
        }
        // React splits on bundler evidence; everything else maps directly.
        if *id == FrameworkId::React {
            return Some(refine_react(evidence));
        }
        return Some(id.clone());
    }
    None
}

fn refine_react(evidence: &ProjectEvidence) -> FrameworkId {
    if evidence.has_dep("vite") {
        FrameworkId::ReactVite
    } else if evidence.has_dep("react-scripts") {
        FrameworkId::ReactCra
    } else {
        FrameworkId::React
    }
}

struct PythonDetection {
    framework: Option<FrameworkId>,
    package_manager: PackageManagerId,
}

/// Python project detection. Requires at least one Python manifest marker;
/// a lone uv.lock is not enough to consider Python at all.
fn detect_python(evidence: &ProjectEvidence) -> Option<PythonDetection> {
    let is_python = PYTHON_MARKER_FILES.iter().any(|f| evidence.has_file(f));
    if !is_python {
        return None;
    }

    let package_manager = if evidence.has_file("poetry.lock") {
        PackageManagerId::Poetry
    } else if evidence.has_file("Pipfile") {
        PackageManagerId::Pipenv
    } else if evidence.has_file("uv.lock") {
        PackageManagerId::Uv
    } else {
        PackageManagerId::Pip
    };

    let text = evidence.python_config_text();
    let framework = PYTHON_FRAMEWORK_RULES
        .iter()
        .find(|(needle, _)| text.contains(needle))
        .map(|(_, id)| id.clone());

    Some(PythonDetection {
        framework,
        package_manager,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::rules::DepMatcher;
    use crate::stack::{AuthId, DatabaseId, StylingId, TestFrameworkId};
    use std::collections::BTreeMap;
    use yare::parameterized;

    fn evidence_with_deps(deps: &[(&str, &str)]) -> ProjectEvidence {
        let mut dependencies = BTreeMap::new();
        for (name, version) in deps {
            dependencies.insert((*name).to_string(), (*version).to_string());
        }
        ProjectEvidence {
            project_name: Some("fixture".to_string()),
            has_manifest: true,
            dependencies,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_evidence_yields_default_record() {
        let detection = classify(&ProjectEvidence::default());
        assert_eq!(detection.project_name, "my-project");
        assert_eq!(detection.framework, None);
        assert_eq!(detection.language, LanguageId::Javascript);
        assert_eq!(detection.package_manager, PackageManagerId::Npm);
        // Only the unconditional package manager weight fires.
        assert_eq!(detection.confidence, WEIGHT_PACKAGE_MANAGER as u8);
    }

    #[parameterized(
        nextjs = { &[("next", "14.0.0")], FrameworkId::Nextjs },
        nuxt = { &[("nuxt", "3.0.0")], FrameworkId::Nuxt },
        vue = { &[("vue", "3.4.0")], FrameworkId::Vue },
        express = { &[("express", "4.18.0")], FrameworkId::Express },
        fastify = { &[("fastify", "4.0.0")], FrameworkId::Fastify },
        nestjs = { &[("@nestjs/core", "10.0.0")], FrameworkId::Nestjs },
        hono = { &[("hono", "4.0.0")], FrameworkId::Hono },
        sveltekit = { &[("@sveltejs/kit", "2.0.0")], FrameworkId::Sveltekit },
        svelte = { &[("svelte", "4.0.0")], FrameworkId::Svelte },
        astro = { &[("astro", "4.0.0")], FrameworkId::Astro },
        remix = { &[("@remix-run/react", "2.0.0")], FrameworkId::Remix },
    )]
    fn test_framework_rules(deps: &[(&str, &str)], expected: FrameworkId) {
        let detection = classify(&evidence_with_deps(deps));
        assert_eq!(detection.framework, Some(expected));
    }

    #[test]
    fn test_nextjs_wins_over_react() {
        let detection =
            classify(&evidence_with_deps(&[("next", "14.0.0"), ("react", "18.0.0")]));
        assert_eq!(detection.framework, Some(FrameworkId::Nextjs));
    }

    #[test]
    fn test_react_vite_split() {
        let detection =
            classify(&evidence_with_deps(&[("react", "18.0.0"), ("vite", "5.0.0")]));
        assert_eq!(detection.framework, Some(FrameworkId::ReactVite));
    }

    #[test]
    fn test_react_cra_split() {
        let detection = classify(&evidence_with_deps(&[
            ("react", "18.0.0"),
            ("react-scripts", "5.0.0"),
        ]));
        assert_eq!(detection.framework, Some(FrameworkId::ReactCra));
    }

    #[test]
    fn test_plain_react() {
        let detection = classify(&evidence_with_deps(&[("react", "18.0.0")]));
        assert_eq!(detection.framework, Some(FrameworkId::React));
    }

    #[test]
    fn test_firebase_auth_requires_both_sdks() {
        let both = classify(&evidence_with_deps(&[
            ("firebase", "10.0.0"),
            ("firebase-admin", "12.0.0"),
        ]));
        assert_eq!(both.auth, Some(AuthId::FirebaseAuth));

        let client_only = classify(&evidence_with_deps(&[("firebase", "10.0.0")]));
        assert_ne!(client_only.auth, Some(AuthId::FirebaseAuth));

        let admin_only = classify(&evidence_with_deps(&[("firebase-admin", "12.0.0")]));
        assert_ne!(admin_only.auth, Some(AuthId::FirebaseAuth));
    }

    #[test]
    fn test_prisma_wins_over_pg() {
        let detection = classify(&evidence_with_deps(&[
            ("@prisma/client", "5.0.0"),
            ("pg", "8.0.0"),
        ]));
        assert_eq!(detection.database, Some(DatabaseId::Prisma));
    }

    #[test]
    fn test_vitest_wins_over_jest() {
        let detection =
            classify(&evidence_with_deps(&[("vitest", "1.0.0"), ("jest", "29.0.0")]));
        assert_eq!(detection.test_framework, Some(TestFrameworkId::Vitest));
    }

    #[test]
    fn test_typescript_from_dependency() {
        let detection = classify(&evidence_with_deps(&[("typescript", "5.0.0")]));
        assert!(detection.typescript);
        assert_eq!(detection.language, LanguageId::Typescript);
    }

    #[test]
    fn test_lockfile_priority_pnpm_first() {
        let mut evidence = evidence_with_deps(&[]);
        evidence.files = vec!["pnpm-lock.yaml".to_string(), "yarn.lock".to_string()];
        let detection = classify(&evidence);
        assert_eq!(detection.package_manager, PackageManagerId::Pnpm);
    }

    #[test]
    fn test_python_substring_priority() {
        let mut evidence = ProjectEvidence::default();
        evidence.files = vec!["requirements.txt".to_string()];
        evidence.requirements_text = "fastapi\ndjango".to_string();
        let detection = classify(&evidence);
        assert_eq!(detection.framework, Some(FrameworkId::Fastapi));
        assert_eq!(detection.language, LanguageId::Python);
    }

    #[test]
    fn test_lone_uv_lock_is_not_python() {
        let mut evidence = ProjectEvidence::default();
        evidence.files = vec!["uv.lock".to_string()];
        let detection = classify(&evidence);
        assert_eq!(detection.language, LanguageId::Javascript);
        assert_eq!(detection.package_manager, PackageManagerId::Npm);
    }

    #[test]
    fn test_python_package_manager_overwrites_lockfile_result() {
        let mut evidence = ProjectEvidence::default();
        // yarn.lock present, but the Python path re-derives poetry.
        evidence.files = vec![
            "yarn.lock".to_string(),
            "pyproject.toml".to_string(),
            "poetry.lock".to_string(),
        ];
        let detection = classify(&evidence);
        assert_eq!(detection.package_manager, PackageManagerId::Poetry);
    }

    #[parameterized(
        pipenv = { &["Pipfile"], PackageManagerId::Pipenv },
        uv = { &["pyproject.toml", "uv.lock"], PackageManagerId::Uv },
        pip = { &["requirements.txt"], PackageManagerId::Pip },
    )]
    fn test_python_package_managers(files: &[&str], expected: PackageManagerId) {
        let mut evidence = ProjectEvidence::default();
        evidence.files = files.iter().map(|f| f.to_string()).collect();
        let detection = classify(&evidence);
        assert_eq!(detection.package_manager, expected);
    }

    #[test]
    fn test_python_skipped_when_js_framework_matched() {
        let mut evidence = evidence_with_deps(&[("express", "4.18.0")]);
        evidence.files = vec!["requirements.txt".to_string()];
        evidence.requirements_text = "flask".to_string();
        let detection = classify(&evidence);
        assert_eq!(detection.framework, Some(FrameworkId::Express));
        assert_ne!(detection.language, LanguageId::Python);
    }

    #[test]
    fn test_confidence_clamped_at_100() {
        let mut evidence = evidence_with_deps(&[
            ("next", "14.0.0"),
            ("typescript", "5.0.0"),
            ("vitest", "1.0.0"),
            ("@prisma/client", "5.0.0"),
            ("tailwindcss", "3.0.0"),
            ("next-auth", "4.0.0"),
        ]);
        evidence.files = vec!["tsconfig.json".to_string(), "pnpm-lock.yaml".to_string()];
        let detection = classify(&evidence);
        // 30+10+10+20+10+10+5+5 = 100 exactly; never above.
        assert_eq!(detection.confidence, 100);
    }

    #[test]
    fn test_styling_table_order() {
        let detection = classify(&evidence_with_deps(&[
            ("tailwindcss", "3.0.0"),
            ("sass", "1.0.0"),
        ]));
        assert_eq!(detection.styling, Some(StylingId::Tailwind));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let evidence = evidence_with_deps(&[("next", "14.0.0"), ("vitest", "1.0.0")]);
        let a = classify(&evidence);
        let b = classify(&evidence);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_dep_matcher_all_semantics() {
        let evidence = evidence_with_deps(&[("firebase", "10.0.0")]);
        let matcher = DepMatcher::All(&["firebase", "firebase-admin"]);
        assert!(!matcher.matches(&evidence));
    }
}
