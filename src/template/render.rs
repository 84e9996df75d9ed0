//! Template rendering.
//!
//! A single non-recursive pass replaces every `{{token}}` occurrence from a
//! fixed closed list with the wizard record's value or a documented default.
//! Delimiters are matched as literal text, so regex metacharacters in user
//! data can never corrupt substitution, and substituted values are not
//! rescanned: a description containing the literal `{{date}}` passes through
//! unexpanded.

use super::store::{TemplateError, TemplateStore};
use super::TemplateId;
use crate::wizard::WizardData;

/// Render a catalog template against wizard data.
pub fn render(
    store: &TemplateStore,
    id: &TemplateId,
    data: &WizardData,
) -> Result<String, TemplateError> {
    let template = store.read(id)?;
    Ok(substitute(&template, &placeholder_values(data)))
}

/// The closed placeholder list with per-field defaults. `date` is always the
/// current calendar date regardless of input.
fn placeholder_values(data: &WizardData) -> Vec<(&'static str, String)> {
    let or = |field: &Option<String>, default: &str| {
        field.clone().unwrap_or_else(|| default.to_string())
    };
    let language = if data.typescript {
        "TypeScript".to_string()
    } else {
        or(&data.language, "JavaScript")
    };
    let package_manager = or(&data.package_manager, "npm");

    vec![
        ("projectName", or(&data.project_name, "my-project")),
        ("description", or(&data.description, "Project description")),
        ("repoUrl", or(&data.repo_url, "https://github.com/user/repo")),
        ("framework", or(&data.framework, "Not specified")),
        ("language", language),
        ("packageManager", package_manager.clone()),
        ("pm", package_manager),
        ("testFramework", or(&data.test_framework, "Not configured")),
        ("database", or(&data.database, "Not configured")),
        ("styling", or(&data.styling, "CSS")),
        ("auth", or(&data.auth, "Not configured")),
        ("deployTarget", or(&data.deploy_target, "Not specified")),
        ("date", chrono::Local::now().format("%Y-%m-%d").to_string()),
        ("customPatterns", or(&data.custom_patterns, "")),
        ("keyFiles", or(&data.key_files, "")),
        ("externalApis", or(&data.external_apis, "")),
    ]
}

/// Left-to-right literal scan. Tokens outside the closed list are emitted
/// unchanged, and replacement values are never rescanned.
fn substitute(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        match after_open.find("}}") {
            Some(close) => {
                let token = &after_open[..close];
                match values.iter().find(|(name, _)| *name == token) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(token);
                        out.push_str("}}");
                    }
                }
                rest = &after_open[close + 2..];
            }
            None => {
                // Unterminated delimiter, keep the remainder verbatim.
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
