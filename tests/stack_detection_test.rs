//! End-to-end detection over real fixture directories.

use stackstart::detect::detect_stack;
use stackstart::stack::{
    AuthId, DatabaseId, FrameworkId, LanguageId, PackageManagerId, StylingId, TestFrameworkId,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_nextjs_typescript_project() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "package.json",
        r#"{
            "name": "storefront",
            "dependencies": {
                "next": "14.1.0",
                "react": "18.2.0",
                "next-auth": "4.24.0",
                "@prisma/client": "5.8.0",
                "tailwindcss": "3.4.0"
            },
            "devDependencies": {
                "typescript": "5.3.0",
                "vitest": "1.2.0"
            }
        }"#,
    );
    write(dir.path(), "tsconfig.json", "{}");
    write(dir.path(), "pnpm-lock.yaml", "lockfileVersion: '6.0'");

    let detection = detect_stack(dir.path());
    assert_eq!(detection.project_name, "storefront");
    assert_eq!(detection.framework, Some(FrameworkId::Nextjs));
    assert!(detection.typescript);
    assert_eq!(detection.language, LanguageId::Typescript);
    assert_eq!(detection.package_manager, PackageManagerId::Pnpm);
    assert_eq!(detection.test_framework, Some(TestFrameworkId::Vitest));
    assert_eq!(detection.database, Some(DatabaseId::Prisma));
    assert_eq!(detection.styling, Some(StylingId::Tailwind));
    assert_eq!(detection.auth, Some(AuthId::NextAuth));
    assert_eq!(detection.confidence, 100);
}

#[test]
fn test_react_vite_project() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "package.json",
        r#"{
            "name": "dashboard",
            "dependencies": { "react": "18.2.0", "react-dom": "18.2.0" },
            "devDependencies": { "vite": "5.0.0" }
        }"#,
    );

    let detection = detect_stack(dir.path());
    assert_eq!(detection.framework, Some(FrameworkId::ReactVite));
    assert_eq!(detection.package_manager, PackageManagerId::Npm);
    // manifest 30 + package manager 10 + framework 20
    assert_eq!(detection.confidence, 60);
}

#[test]
fn test_empty_directory_yields_zero_evidence_defaults() {
    let dir = TempDir::new().unwrap();
    let detection = detect_stack(dir.path());
    assert_eq!(detection.project_name, "my-project");
    assert_eq!(detection.framework, None);
    assert_eq!(detection.language, LanguageId::Javascript);
    assert_eq!(detection.package_manager, PackageManagerId::Npm);
    assert!(detection.confidence <= 10);
}

#[test]
fn test_malformed_package_json_degrades_silently() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "package.json", "{ this is not json");
    let detection = detect_stack(dir.path());
    assert_eq!(detection.project_name, "my-project");
    assert_eq!(detection.framework, None);
}

#[test]
fn test_fastapi_poetry_project() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "pyproject.toml",
        "[tool.poetry]\nname = \"api-service\"\n\n[tool.poetry.dependencies]\nfastapi = \"^0.110\"\n",
    );
    write(dir.path(), "poetry.lock", "");

    let detection = detect_stack(dir.path());
    assert_eq!(detection.language, LanguageId::Python);
    assert_eq!(detection.framework, Some(FrameworkId::Fastapi));
    assert_eq!(detection.package_manager, PackageManagerId::Poetry);
    assert_eq!(detection.project_name, "api-service");
}

#[test]
fn test_requirements_substring_priority() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "requirements.txt", "fastapi\ndjango\n");
    let detection = detect_stack(dir.path());
    assert_eq!(detection.framework, Some(FrameworkId::Fastapi));
    assert_eq!(detection.package_manager, PackageManagerId::Pip);
}

#[test]
fn test_lone_uv_lock_is_not_a_python_project() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "uv.lock", "");
    let detection = detect_stack(dir.path());
    assert_eq!(detection.language, LanguageId::Javascript);
    assert_eq!(detection.framework, None);
}

#[test]
fn test_uv_project_with_pyproject() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "pyproject.toml", "[project]\nname = \"svc\"\ndependencies = [\"flask\"]\n");
    write(dir.path(), "uv.lock", "");
    let detection = detect_stack(dir.path());
    assert_eq!(detection.package_manager, PackageManagerId::Uv);
    assert_eq!(detection.framework, Some(FrameworkId::Flask));
}

#[test]
fn test_detection_serializes_to_contract_keys() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "package.json",
        r#"{"name":"api","dependencies":{"express":"4.18.0","pg":"8.11.0"}}"#,
    );
    let detection = detect_stack(dir.path());
    let json = serde_json::to_value(&detection).unwrap();
    assert_eq!(json["framework"], "express");
    assert_eq!(json["database"], "postgresql");
    assert_eq!(json["packageManager"], "npm");
}
