//! Template catalog and recommendation.
//!
//! A fixed, closed catalog of five document templates keyed by stable string
//! identifiers (`nextjs | express | react | python | minimal`). The keys are
//! a versioned contract: extend the catalog by appending entries, never by
//! renaming existing ones, so that any persisted reference to a template id
//! keeps resolving.

pub mod render;
pub mod store;

pub use render::render;
pub use store::{TemplateError, TemplateStore};

use crate::detect::StackDetection;
use crate::stack::{FrameworkId, LanguageId};

crate::define_id_enum! {
    /// Catalog template identifier
    TemplateId {
        Nextjs => "nextjs" : "Next.js",
        Express => "express" : "Express/Node.js API",
        React => "react" : "React SPA",
        Python => "python" : "Python",
        Minimal => "minimal" : "Minimal",
    }
}

/// One catalog entry: a template id, its description, the frameworks it
/// serves, and the backing document file.
#[derive(Debug, Clone)]
pub struct TemplateSpec {
    pub id: TemplateId,
    pub description: &'static str,
    pub frameworks: &'static [FrameworkId],
    pub file: &'static str,
}

/// The catalog. Declaration order is the recommendation priority.
pub const CATALOG: &[TemplateSpec] = &[
    TemplateSpec {
        id: TemplateId::Nextjs,
        description: "Next.js 14+ with App Router, Server Components, and modern patterns",
        frameworks: &[FrameworkId::Nextjs],
        file: "nextjs.md",
    },
    TemplateSpec {
        id: TemplateId::Express,
        description: "Node.js backend with routes, controllers, services layers",
        frameworks: &[
            FrameworkId::Express,
            FrameworkId::Fastify,
            FrameworkId::Hono,
            FrameworkId::Nestjs,
        ],
        file: "express.md",
    },
    TemplateSpec {
        id: TemplateId::React,
        description: "React SPA with Vite, state management, and component patterns",
        frameworks: &[
            FrameworkId::React,
            FrameworkId::ReactVite,
            FrameworkId::ReactCra,
        ],
        file: "react.md",
    },
    TemplateSpec {
        id: TemplateId::Python,
        description: "FastAPI/Django/Flask with type hints and best practices",
        frameworks: &[
            FrameworkId::Fastapi,
            FrameworkId::Django,
            FrameworkId::Flask,
            FrameworkId::Starlette,
        ],
        file: "python.md",
    },
    TemplateSpec {
        id: TemplateId::Minimal,
        description: "Universal minimal template for any project type",
        frameworks: &[],
        file: "minimal.md",
    },
];

/// Look up a catalog entry by id.
pub fn get(id: &TemplateId) -> Option<&'static TemplateSpec> {
    CATALOG.iter().find(|spec| spec.id == *id)
}

/// Recommend a template for a detection: first catalog entry (in declared
/// order) whose framework set contains the detected framework, then the
/// Python template for Python projects, then minimal. Pure and idempotent.
/// This is also the default offered to the user, so the two never diverge.
pub fn recommend(detection: &StackDetection) -> TemplateId {
    if let Some(framework) = &detection.framework {
        for spec in CATALOG {
            if spec.frameworks.contains(framework) {
                return spec.id.clone();
            }
        }
    }
    if detection.language == LanguageId::Python {
        return TemplateId::Python;
    }
    TemplateId::Minimal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_entries_with_unique_keys() {
        assert_eq!(CATALOG.len(), 5);
        for spec in CATALOG {
            assert_eq!(
                CATALOG.iter().filter(|s| s.id == spec.id).count(),
                1,
                "duplicate catalog id {}",
                spec.id.key()
            );
        }
    }

    #[test]
    fn test_recommend_nextjs() {
        let detection = StackDetection {
            framework: Some(FrameworkId::Nextjs),
            ..Default::default()
        };
        assert_eq!(recommend(&detection), TemplateId::Nextjs);
    }

    #[test]
    fn test_recommend_backend_family() {
        for fw in [
            FrameworkId::Express,
            FrameworkId::Fastify,
            FrameworkId::Hono,
            FrameworkId::Nestjs,
        ] {
            let detection = StackDetection {
                framework: Some(fw),
                ..Default::default()
            };
            assert_eq!(recommend(&detection), TemplateId::Express);
        }
    }

    #[test]
    fn test_recommend_covers_every_catalog_framework() {
        for spec in CATALOG {
            for framework in spec.frameworks {
                let detection = StackDetection {
                    framework: Some(framework.clone()),
                    ..Default::default()
                };
                assert_eq!(
                    recommend(&detection),
                    spec.id,
                    "framework {} should select the {} template",
                    framework.key(),
                    spec.id.key()
                );
            }
        }
    }

    #[test]
    fn test_uncataloged_framework_falls_to_minimal() {
        for framework in [
            FrameworkId::Vue,
            FrameworkId::Nuxt,
            FrameworkId::Svelte,
            FrameworkId::Sveltekit,
            FrameworkId::Astro,
            FrameworkId::Remix,
        ] {
            let detection = StackDetection {
                framework: Some(framework.clone()),
                ..Default::default()
            };
            assert_eq!(
                recommend(&detection),
                TemplateId::Minimal,
                "{} has no catalog entry",
                framework.key()
            );
        }
    }

    #[test]
    fn test_recommend_python_by_language() {
        let detection = StackDetection {
            framework: Some(FrameworkId::Tornado),
            language: LanguageId::Python,
            ..Default::default()
        };
        // Tornado is not in the python catalog set; the language fallback fires.
        assert_eq!(recommend(&detection), TemplateId::Python);
    }

    #[test]
    fn test_recommend_minimal_fallback() {
        assert_eq!(recommend(&StackDetection::default()), TemplateId::Minimal);
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let detection = StackDetection {
            framework: Some(FrameworkId::ReactVite),
            ..Default::default()
        };
        assert_eq!(recommend(&detection), recommend(&detection));
    }
}
