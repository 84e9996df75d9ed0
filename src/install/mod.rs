//! Installer: sequences detection, wizard data, rendering, and file writes.
//!
//! The flow mirrors a strict sequential pipeline: detect the stack, build the
//! wizard record, pick a template, then perform filesystem writes. Rendering
//! failures (unknown template, missing source file) downgrade to copying the
//! static default document; they never abort the install. All writes honour
//! dry-run mode and are reported through [`InstallReport`].

pub mod plugins;

use crate::detect::{detect_stack, StackDetection};
use crate::template::{self, render, TemplateId, TemplateStore};
use crate::util::fs::{copy_file, ensure_dir, update_gitignore, write_file, GitignoreResult};
use crate::wizard::{WizardData, WizardMode, WizardOverrides};
use anyhow::{Context, Result};
use plugins::{install_plugins, PluginResults};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Command files copied into `.claude/commands/rpi/`.
const COMMAND_FILES: &[&str] = &["research.md", "plan.md", "implement.md"];

/// Rule files copied into `.claude/rules/`.
const RULE_FILES: &[&str] = &[
    "vibe-coding.md",
    "micro-tasks.md",
    "commits.md",
    "nextjs.md",
    "context.md",
];

/// What to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallScope {
    Global,
    Project,
    Both,
}

impl InstallScope {
    pub fn includes_global(&self) -> bool {
        matches!(self, Self::Global | Self::Both)
    }

    pub fn includes_project(&self) -> bool {
        matches!(self, Self::Project | Self::Both)
    }
}

/// Installer inputs, resolved from CLI flags before the run starts.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub scope: InstallScope,
    pub project_path: PathBuf,
    pub dry_run: bool,
    /// Overwrite an existing CLAUDE.md.
    pub force: bool,
    /// Explicit template choice; None uses the recommendation.
    pub template: Option<TemplateId>,
    pub mode: WizardMode,
    pub skip_detection: bool,
    pub skip_plugins: bool,
    pub overrides: WizardOverrides,
    /// Plugin ids to install, already validated against the registry.
    pub plugins: Vec<String>,
    pub plugin_timeout: Duration,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            scope: InstallScope::Project,
            project_path: PathBuf::from("."),
            dry_run: false,
            force: false,
            template: None,
            mode: WizardMode::Full,
            skip_detection: false,
            skip_plugins: false,
            overrides: WizardOverrides::default(),
            plugins: Vec::new(),
            plugin_timeout: Duration::from_secs(60),
        }
    }
}

/// Outcome of generating CLAUDE.md.
#[derive(Debug, Clone)]
pub struct ClaudeMdOutcome {
    pub template: TemplateId,
    /// True when rendering failed and the static default was copied instead.
    pub used_fallback: bool,
    /// False when an existing file was left untouched.
    pub written: bool,
}

/// Everything the installer did (or, in dry-run mode, would do).
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    pub dry_run: bool,
    pub global_settings: Option<PathBuf>,
    pub project_path: Option<PathBuf>,
    pub detection: Option<StackDetection>,
    pub claude_md: Option<ClaudeMdOutcome>,
    pub copied_files: Vec<String>,
    pub gitignore: Option<GitignoreResult>,
    pub plugins: PluginResults,
}

/// Run the installer end to end.
pub async fn run(options: InstallOptions, store: &TemplateStore) -> Result<InstallReport> {
    let mut report = InstallReport {
        dry_run: options.dry_run,
        ..Default::default()
    };

    if options.scope.includes_global() {
        report.global_settings = Some(install_global_config(store, options.dry_run)?);
    }

    if options.scope.includes_project() {
        let detection = if options.skip_detection {
            StackDetection::default()
        } else {
            detect_stack(&options.project_path)
        };

        let template_id = options
            .template
            .clone()
            .unwrap_or_else(|| template::recommend(&detection));

        let data =
            WizardData::from_detection(&detection).apply_overrides(options.mode, &options.overrides);

        install_project_setup(&options, store, &template_id, &data, &mut report)?;
        report.detection = Some(detection);
        report.project_path = Some(options.project_path.clone());
    }

    if !options.plugins.is_empty() && !options.skip_plugins && !options.dry_run {
        report.plugins = install_plugins(&options.plugins, options.plugin_timeout).await;
        for failed in &report.plugins.failed {
            warn!(plugin = failed.as_str(), "plugin failed to install");
        }
    }

    Ok(report)
}

/// Copy the global settings template to `~/.claude/settings.json`.
fn install_global_config(store: &TemplateStore, dry_run: bool) -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    let claude_dir = home.join(".claude");
    let dest = claude_dir.join("settings.json");
    let src = store.asset_path("global-settings.json");

    anyhow::ensure!(
        src.is_file(),
        "global settings template not found: {}",
        src.display()
    );

    ensure_dir(&claude_dir, dry_run)?;
    copy_file(&src, &dest, dry_run)?;
    info!(path = %dest.display(), dry_run, "installed global settings");
    Ok(dest)
}

fn install_project_setup(
    options: &InstallOptions,
    store: &TemplateStore,
    template_id: &TemplateId,
    data: &WizardData,
    report: &mut InstallReport,
) -> Result<()> {
    let root = &options.project_path;
    let dry_run = options.dry_run;
    let claude_dir = root.join(".claude");

    ensure_dir(&claude_dir.join("commands").join("rpi"), dry_run)?;
    ensure_dir(&claude_dir.join("rules"), dry_run)?;
    ensure_dir(&root.join("rpi").join("plans"), dry_run)?;

    let settings_src = store.asset_path("project-settings.json");
    let settings_dest = claude_dir.join("settings.json");
    if settings_src.is_file() && (options.force || !settings_dest.exists()) {
        copy_file(&settings_src, &settings_dest, dry_run)?;
        report.copied_files.push(".claude/settings.json".to_string());
    }

    for file in COMMAND_FILES {
        let src = store.asset_path(&format!("commands/rpi/{}", file));
        if src.is_file() {
            copy_file(&src, &claude_dir.join("commands").join("rpi").join(file), dry_run)?;
            report
                .copied_files
                .push(format!(".claude/commands/rpi/{}", file));
        }
    }

    for file in RULE_FILES {
        let src = store.asset_path(&format!("rules/{}", file));
        if src.is_file() {
            copy_file(&src, &claude_dir.join("rules").join(file), dry_run)?;
            report.copied_files.push(format!(".claude/rules/{}", file));
        }
    }

    report.claude_md = Some(generate_claude_md(
        options, store, template_id, data, dry_run,
    )?);

    report.gitignore = Some(update_gitignore(root, dry_run)?);
    info!(path = %root.display(), dry_run, "project setup complete");
    Ok(())
}

/// Render CLAUDE.md, falling back to the static default document when the
/// template cannot be rendered. An existing file is kept unless forced.
fn generate_claude_md(
    options: &InstallOptions,
    store: &TemplateStore,
    template_id: &TemplateId,
    data: &WizardData,
    dry_run: bool,
) -> Result<ClaudeMdOutcome> {
    let dest = options.project_path.join("CLAUDE.md");

    if dest.exists() && !options.force {
        info!("CLAUDE.md already present, leaving it untouched");
        return Ok(ClaudeMdOutcome {
            template: template_id.clone(),
            used_fallback: false,
            written: false,
        });
    }

    match render(store, template_id, data) {
        Ok(content) => {
            write_file(&dest, &content, dry_run)?;
            Ok(ClaudeMdOutcome {
                template: template_id.clone(),
                used_fallback: false,
                written: true,
            })
        }
        Err(e) => {
            warn!(error = %e, "template rendering failed, copying static default");
            let fallback = store
                .fallback_document()
                .context("static fallback document unavailable")?;
            write_file(&dest, &fallback, dry_run)?;
            Ok(ClaudeMdOutcome {
                template: template_id.clone(),
                used_fallback: true,
                written: true,
            })
        }
    }
}
