use crate::template::TemplateId;
use crate::wizard::WizardMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stack-aware bootstrapper for AI coding assistant project configuration
#[derive(Parser, Debug)]
#[command(
    name = "stackstart",
    about = "Stack-aware bootstrapper for AI coding assistant project configuration",
    version,
    author,
    long_about = "stackstart inspects a project's manifest and lockfiles, infers the \
                  technology stack, and installs a tailored assistant configuration: \
                  rules, command definitions, and a generated CLAUDE.md."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect the technology stack of a project",
        long_about = "Inspects manifest and lockfiles to classify framework, language, \
                      package manager, testing, database, styling, and auth.\n\n\
                      Examples:\n  \
                      stackstart detect\n  \
                      stackstart detect /path/to/project\n  \
                      stackstart detect --format json"
    )]
    Detect(DetectArgs),

    #[command(about = "List available configuration templates")]
    Templates(TemplatesArgs),

    #[command(
        about = "Install assistant configuration into a project",
        long_about = "Runs detection, picks a template, renders CLAUDE.md, and copies \
                      rules and command definitions into place.\n\n\
                      Examples:\n  \
                      stackstart init\n  \
                      stackstart init --dry-run\n  \
                      stackstart init --template nextjs --mode expert\n  \
                      stackstart init --global-only"
    )]
    Init(InitArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct TemplatesArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    #[arg(
        value_name = "PATH",
        help = "Project directory (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(long, help = "Install only the global config (~/.claude/settings.json)")]
    pub global_only: bool,

    #[arg(
        long,
        conflicts_with = "global_only",
        help = "Install only the project setup"
    )]
    pub project_only: bool,

    #[arg(long, help = "Show what would be installed without writing files")]
    pub dry_run: bool,

    #[arg(long, help = "Overwrite existing CLAUDE.md and settings")]
    pub force: bool,

    #[arg(
        short = 't',
        long,
        value_parser = parse_template_id,
        help = "Use a specific template (nextjs, express, react, python, minimal)"
    )]
    pub template: Option<TemplateId>,

    #[arg(
        short = 'm',
        long,
        value_enum,
        default_value = "full",
        help = "Wizard mode controlling which fields are configured"
    )]
    pub mode: WizardMode,

    #[arg(long, help = "Skip stack auto-detection, use defaults")]
    pub skip_detection: bool,

    #[arg(long, help = "Skip plugin installation")]
    pub skip_plugins: bool,

    #[arg(
        long,
        value_name = "ID",
        help = "Plugin to install (repeatable, must be an approved plugin)"
    )]
    pub plugin: Vec<String>,

    #[arg(long, value_name = "TEXT", help = "Project description")]
    pub description: Option<String>,

    #[arg(long, value_name = "URL", help = "Repository URL")]
    pub repo_url: Option<String>,

    #[arg(long, value_name = "TARGET", help = "Deployment target")]
    pub deploy_target: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Custom patterns section (expert mode)")]
    pub custom_patterns: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Key files section (expert mode)")]
    pub key_files: Option<String>,

    #[arg(long, value_name = "TEXT", help = "External APIs section (expert mode)")]
    pub external_apis: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Human,
    Json,
    Yaml,
}

fn parse_template_id(s: &str) -> Result<TemplateId, String> {
    TemplateId::from_key(s).ok_or_else(|| {
        format!(
            "unknown template '{}' (valid: nextjs, express, react, python, minimal)",
            s
        )
    })
}
