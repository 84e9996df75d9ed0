//! Approved plugin registry and external installer.
//!
//! The registry is a fixed table of vetted plugins. Installation shells out
//! to the external plugin manager, one subprocess at a time, each bounded by
//! a timeout; a timed-out or failing install is recorded and reported, never
//! fatal to the run.

use crate::detect::StackDetection;
use crate::stack::FrameworkId;
use crate::wizard::WizardMode;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// One entry in the approved plugin table.
#[derive(Debug, Clone)]
pub struct PluginSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub author: &'static str,
    pub downloads: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Framework keys this plugin is recommended for, plus the markers
    /// "all" (always) and "expert" (expert mode only).
    pub recommended_for: &'static [&'static str],
}

/// Approved plugins: official plugins or 5k+ downloads.
pub const APPROVED_PLUGINS: &[PluginSpec] = &[
    PluginSpec {
        id: "@anthropics/claude-code-plugins/frontend-design",
        name: "Frontend Design",
        author: "@anthropics",
        downloads: "65k+",
        description: "Production-grade UI components and design systems",
        tags: &["frontend", "ui", "design", "react", "nextjs"],
        recommended_for: &["nextjs", "react", "react-vite", "react-cra", "vue", "svelte"],
    },
    PluginSpec {
        id: "@anthropics/claude-code-plugins/feature-dev",
        name: "Feature Development",
        author: "@anthropics",
        downloads: "65k+",
        description: "Complete workflow for feature implementation",
        tags: &["workflow", "development", "planning"],
        recommended_for: &["all"],
    },
    PluginSpec {
        id: "@anthropics/claude-code-plugins/code-review",
        name: "Code Review",
        author: "@anthropics",
        downloads: "65k+",
        description: "Automated code review and quality checks",
        tags: &["review", "quality", "best-practices"],
        recommended_for: &["all"],
    },
    PluginSpec {
        id: "@EveryInc/every-marketplace/compound-engineering",
        name: "Compound Engineering",
        author: "@EveryInc",
        downloads: "8.9k",
        description: "29 specialized agents for advanced development workflows",
        tags: &["agents", "advanced", "workflow"],
        recommended_for: &["expert"],
    },
];

/// Frontend frameworks for which frontend-tagged plugins are recommended.
const FRONTEND_FRAMEWORKS: &[FrameworkId] = &[
    FrameworkId::Nextjs,
    FrameworkId::React,
    FrameworkId::ReactVite,
    FrameworkId::ReactCra,
    FrameworkId::Vue,
    FrameworkId::Nuxt,
    FrameworkId::Svelte,
    FrameworkId::Sveltekit,
    FrameworkId::Astro,
];

/// Pair each approved plugin with its recommendation flag for the detection.
pub fn recommended_plugins(
    detection: &StackDetection,
    mode: WizardMode,
) -> Vec<(&'static PluginSpec, bool)> {
    APPROVED_PLUGINS
        .iter()
        .map(|plugin| {
            let mut recommended = plugin.recommended_for.contains(&"all");

            if plugin.recommended_for.contains(&"expert") && mode == WizardMode::Expert {
                recommended = true;
            }
            if let Some(framework) = &detection.framework {
                if plugin.recommended_for.contains(&framework.key()) {
                    recommended = true;
                }
                if plugin.tags.contains(&"frontend") && FRONTEND_FRAMEWORKS.contains(framework) {
                    recommended = true;
                }
            }

            (plugin, recommended)
        })
        .collect()
}

/// Outcome of a batch of plugin installs.
#[derive(Debug, Clone, Default)]
pub struct PluginResults {
    pub installed: Vec<String>,
    pub failed: Vec<String>,
}

/// Install plugins sequentially via `npx claude-plugins install <id>`, each
/// bounded by `timeout`. The subprocess is force-terminated on expiry.
pub async fn install_plugins(plugin_ids: &[String], timeout: Duration) -> PluginResults {
    let mut results = PluginResults::default();

    for id in plugin_ids {
        if install_plugin(id, timeout).await {
            results.installed.push(id.clone());
        } else {
            results.failed.push(id.clone());
        }
    }

    results
}

async fn install_plugin(plugin_id: &str, timeout: Duration) -> bool {
    debug!(plugin = plugin_id, "installing plugin");

    let spawned = Command::new("npx")
        .args(["claude-plugins", "install", plugin_id])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => {
            warn!(plugin = plugin_id, error = %e, "failed to spawn plugin installer");
            return false;
        }
    };

    match tokio::time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) if status.success() => true,
        Ok(Ok(status)) => {
            warn!(plugin = plugin_id, ?status, "plugin install failed");
            false
        }
        Ok(Err(e)) => {
            warn!(plugin = plugin_id, error = %e, "plugin install errored");
            false
        }
        Err(_) => {
            warn!(plugin = plugin_id, "plugin install timed out, terminating");
            let _ = child.kill().await;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection_with(framework: Option<FrameworkId>) -> StackDetection {
        StackDetection {
            framework,
            ..Default::default()
        }
    }

    #[test]
    fn test_all_marker_always_recommended() {
        let recs = recommended_plugins(&detection_with(None), WizardMode::Quick);
        let feature_dev = recs
            .iter()
            .find(|(p, _)| p.name == "Feature Development")
            .unwrap();
        assert!(feature_dev.1);
    }

    #[test]
    fn test_frontend_plugin_recommended_for_nextjs() {
        let recs = recommended_plugins(
            &detection_with(Some(FrameworkId::Nextjs)),
            WizardMode::Full,
        );
        let frontend = recs
            .iter()
            .find(|(p, _)| p.name == "Frontend Design")
            .unwrap();
        assert!(frontend.1);
    }

    #[test]
    fn test_frontend_plugin_not_recommended_for_backend() {
        let recs = recommended_plugins(
            &detection_with(Some(FrameworkId::Express)),
            WizardMode::Full,
        );
        let frontend = recs
            .iter()
            .find(|(p, _)| p.name == "Frontend Design")
            .unwrap();
        assert!(!frontend.1);
    }

    #[test]
    fn test_expert_only_plugin() {
        let full = recommended_plugins(&detection_with(None), WizardMode::Full);
        let expert = recommended_plugins(&detection_with(None), WizardMode::Expert);
        let find = |recs: &Vec<(&'static PluginSpec, bool)>| {
            recs.iter()
                .find(|(p, _)| p.name == "Compound Engineering")
                .unwrap()
                .1
        };
        assert!(!find(&full));
        assert!(find(&expert));
    }
}
