//! Command handlers. Each returns a process exit code.

use crate::cli::commands::{DetectArgs, InitArgs, TemplatesArgs};
use crate::cli::output::{OutputFormat, OutputFormatter};
use crate::config::StackstartConfig;
use crate::detect::detect_stack;
use crate::install::plugins::APPROVED_PLUGINS;
use crate::install::{self, InstallOptions, InstallReport, InstallScope};
use crate::template::TemplateStore;
use crate::wizard::WizardOverrides;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;

pub fn handle_detect(args: &DetectArgs, quiet: bool) -> i32 {
    match run_detect(args, quiet) {
        Ok(()) => 0,
        Err(e) => {
            error!(error = %e, "detect failed");
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn run_detect(args: &DetectArgs, quiet: bool) -> Result<()> {
    let root = resolve_path(args.project_path.clone())?;
    let detection = detect_stack(&root);

    let formatter = OutputFormatter::new(OutputFormat::from(args.format));
    let rendered = formatter.format_detection(&detection)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            if !quiet {
                println!("Wrote detection result to {}", path.display());
            }
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

pub fn handle_templates(args: &TemplatesArgs) -> i32 {
    match run_templates(args) {
        Ok(()) => 0,
        Err(e) => {
            error!(error = %e, "templates failed");
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn run_templates(args: &TemplatesArgs) -> Result<()> {
    // Recommendation marker reflects the current directory's stack.
    let detection = env::current_dir().ok().map(|cwd| detect_stack(&cwd));
    let formatter = OutputFormatter::new(OutputFormat::from(args.format));
    println!("{}", formatter.format_templates(detection.as_ref())?);
    Ok(())
}

pub async fn handle_init(args: &InitArgs, quiet: bool) -> i32 {
    match run_init(args, quiet).await {
        Ok(()) => 0,
        Err(e) => {
            error!(error = %e, "init failed");
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

async fn run_init(args: &InitArgs, quiet: bool) -> Result<()> {
    let config = StackstartConfig::from_env()?;

    for plugin in &args.plugin {
        anyhow::ensure!(
            APPROVED_PLUGINS.iter().any(|p| p.id == plugin),
            "unknown plugin '{}'; run with no --plugin flag to skip plugins",
            plugin
        );
    }

    let scope = if args.global_only {
        InstallScope::Global
    } else if args.project_only {
        InstallScope::Project
    } else {
        InstallScope::Both
    };

    let options = InstallOptions {
        scope,
        project_path: resolve_path(args.project_path.clone())?,
        dry_run: args.dry_run,
        force: args.force,
        template: args.template.clone(),
        mode: args.mode,
        skip_detection: args.skip_detection,
        skip_plugins: args.skip_plugins,
        overrides: WizardOverrides {
            description: args.description.clone(),
            repo_url: args.repo_url.clone(),
            deploy_target: args.deploy_target.clone(),
            custom_patterns: args.custom_patterns.clone(),
            key_files: args.key_files.clone(),
            external_apis: args.external_apis.clone(),
        },
        plugins: args.plugin.clone(),
        plugin_timeout: config.plugin_timeout,
    };

    let store = match config.templates_dir {
        Some(dir) => TemplateStore::new(dir),
        None => TemplateStore::discover(),
    };

    let spinner = make_spinner(quiet, if args.dry_run {
        "Planning installation (dry run)..."
    } else {
        "Installing assistant configuration..."
    });

    let report = install::run(options, &store).await?;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if !quiet {
        print_report(&report);
    }
    Ok(())
}

fn make_spinner(quiet: bool, message: &'static str) -> Option<ProgressBar> {
    if quiet || !atty::is(atty::Stream::Stdout) {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

fn resolve_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => Ok(env::current_dir()?),
    }
}

fn print_report(report: &InstallReport) {
    if report.dry_run {
        println!("\nDry run complete. No files were modified.\n");
    } else {
        println!("\nInstallation complete.\n");
    }

    if let Some(path) = &report.global_settings {
        println!("  global settings: {}", path.display());
    }
    for file in &report.copied_files {
        println!("  copied: {}", file);
    }
    if let Some(outcome) = &report.claude_md {
        if outcome.written {
            let note = if outcome.used_fallback {
                " (static fallback)"
            } else {
                ""
            };
            println!("  CLAUDE.md ({} template){}", outcome.template.key(), note);
        } else {
            println!("  CLAUDE.md left untouched (use --force to overwrite)");
        }
    }
    if let Some(gitignore) = &report.gitignore {
        if gitignore.updated {
            println!("  .gitignore updated");
        }
    }
    for plugin in &report.plugins.installed {
        println!("  plugin installed: {}", plugin);
    }
    for plugin in &report.plugins.failed {
        println!("  plugin FAILED: {}", plugin);
    }

    if let Some(project) = &report.project_path {
        println!("\nNext steps:");
        println!("  1. Review and customize {}/CLAUDE.md", project.display());
        println!("  2. Start your assistant in the project directory");
        println!("  3. Try the workflow commands: /research, /plan, /implement");
    }
    println!();
}
