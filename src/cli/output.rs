//! Output formatting for detection results and the template catalog.
//!
//! Supports JSON (machine-readable), YAML, and a human summary. ANSI color
//! is applied only when stdout is a terminal.

use crate::detect::StackDetection;
use crate::template::{recommend, TemplateId, CATALOG};
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

impl From<crate::cli::commands::OutputFormatArg> for OutputFormat {
    fn from(arg: crate::cli::commands::OutputFormatArg) -> Self {
        match arg {
            crate::cli::commands::OutputFormatArg::Human => Self::Human,
            crate::cli::commands::OutputFormatArg::Json => Self::Json,
            crate::cli::commands::OutputFormatArg::Yaml => Self::Yaml,
        }
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
    color: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: atty::is(atty::Stream::Stdout),
        }
    }

    #[cfg(test)]
    fn plain(format: OutputFormat) -> Self {
        Self {
            format,
            color: false,
        }
    }

    pub fn format_detection(&self, detection: &StackDetection) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(detection).context("failed to serialize detection")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(detection).context("failed to serialize detection")
            }
            OutputFormat::Human => Ok(self.format_detection_human(detection)),
        }
    }

    pub fn format_templates(&self, detection: Option<&StackDetection>) -> Result<String> {
        let recommended = detection.map(recommend);
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = CATALOG
                    .iter()
                    .map(|spec| {
                        serde_json::json!({
                            "id": spec.id.key(),
                            "name": spec.id.name(),
                            "description": spec.description,
                            "frameworks": spec.frameworks.iter().map(|f| f.key()).collect::<Vec<_>>(),
                            "recommended": Some(&spec.id) == recommended.as_ref(),
                        })
                    })
                    .collect();
                serde_json::to_string_pretty(&entries).context("failed to serialize templates")
            }
            OutputFormat::Yaml => {
                let entries: Vec<serde_json::Value> = CATALOG
                    .iter()
                    .map(|spec| {
                        serde_json::json!({
                            "id": spec.id.key(),
                            "name": spec.id.name(),
                            "description": spec.description,
                        })
                    })
                    .collect();
                serde_yaml::to_string(&entries).context("failed to serialize templates")
            }
            OutputFormat::Human => Ok(self.format_templates_human(recommended.as_ref())),
        }
    }

    fn format_detection_human(&self, detection: &StackDetection) -> String {
        let mut out = String::new();
        out.push_str(&self.header("Stack Detection"));

        let mut items: Vec<(&str, String)> = vec![
            ("Project", detection.project_name.clone()),
            (
                "Framework",
                detection
                    .framework
                    .as_ref()
                    .map(|f| f.name().to_string())
                    .unwrap_or_else(|| "Not detected".to_string()),
            ),
            (
                "Language",
                if detection.typescript {
                    "TypeScript".to_string()
                } else {
                    detection.language.name().to_string()
                },
            ),
            ("Package Manager", detection.package_manager.name().to_string()),
        ];
        if let Some(test) = &detection.test_framework {
            items.push(("Testing", test.name().to_string()));
        }
        if let Some(db) = &detection.database {
            items.push(("Database", db.name().to_string()));
        }
        if let Some(styling) = &detection.styling {
            items.push(("Styling", styling.name().to_string()));
        }
        if let Some(auth) = &detection.auth {
            items.push(("Auth", auth.name().to_string()));
        }

        for (label, value) in items {
            out.push_str(&format!("  {:<18} {}\n", format!("{}:", label), value));
        }

        out.push('\n');
        out.push_str(&format!(
            "  Confidence: {}\n",
            self.confidence_colored(detection.confidence)
        ));
        out
    }

    fn format_templates_human(&self, recommended: Option<&TemplateId>) -> String {
        let mut out = String::new();
        out.push_str(&self.header("Available Templates"));

        for spec in CATALOG {
            let badge = if Some(&spec.id) == recommended {
                " (recommended)"
            } else {
                ""
            };
            out.push_str(&format!("  {}{}\n", spec.id.name(), badge));
            out.push_str(&format!("    {}\n", spec.description));
            if !spec.frameworks.is_empty() {
                let keys: Vec<&str> = spec.frameworks.iter().map(|f| f.key()).collect();
                out.push_str(&format!("    Frameworks: {}\n", keys.join(", ")));
            }
            out.push('\n');
        }
        out
    }

    fn header(&self, title: &str) -> String {
        format!("\n{}\n{}\n\n", title, "─".repeat(title.len()))
    }

    fn confidence_colored(&self, confidence: u8) -> String {
        let value = format!("{}%", confidence);
        if !self.color {
            return value;
        }
        let code = if confidence >= 70 {
            "32" // green
        } else if confidence >= 40 {
            "33" // yellow
        } else {
            "31" // red
        };
        format!("\x1b[{}m{}\x1b[0m", code, value)
    }
}
