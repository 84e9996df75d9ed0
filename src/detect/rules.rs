//! Declarative detection rule tables.
//!
//! Each attribute family is an ordered list of (matcher, label) pairs
//! evaluated against the merged dependency map; the first match wins, so
//! priority lives in declaration order rather than nested conditionals.
//! Next.js precedes React, Prisma precedes the bare `pg` driver, and so on.

use crate::detect::evidence::ProjectEvidence;
use crate::stack::{AuthId, DatabaseId, FrameworkId, PackageManagerId, StylingId, TestFrameworkId};

/// Predicate over the merged dependency map.
#[derive(Debug, Clone, Copy)]
pub enum DepMatcher {
    /// Matches when any of the named packages is a dependency.
    Any(&'static [&'static str]),
    /// Matches only when every named package is a dependency.
    All(&'static [&'static str]),
}

impl DepMatcher {
    pub fn matches(&self, evidence: &ProjectEvidence) -> bool {
        match self {
            Self::Any(names) => names.iter().any(|n| evidence.has_dep(n)),
            Self::All(names) => names.iter().all(|n| evidence.has_dep(n)),
        }
    }
}

/// Framework decision list. The `React` entry is refined by
/// [`super::classifier`] into react-vite / react-cra / react.
pub const FRAMEWORK_RULES: &[(DepMatcher, FrameworkId)] = &[
    (DepMatcher::Any(&["next"]), FrameworkId::Nextjs),
    (DepMatcher::Any(&["nuxt"]), FrameworkId::Nuxt),
    (DepMatcher::Any(&["vue"]), FrameworkId::Vue),
    (DepMatcher::Any(&["react"]), FrameworkId::React),
    (DepMatcher::Any(&["express"]), FrameworkId::Express),
    (DepMatcher::Any(&["fastify"]), FrameworkId::Fastify),
    (DepMatcher::Any(&["@nestjs/core"]), FrameworkId::Nestjs),
    (DepMatcher::Any(&["hono"]), FrameworkId::Hono),
    (DepMatcher::Any(&["@sveltejs/kit"]), FrameworkId::Sveltekit),
    (DepMatcher::Any(&["svelte"]), FrameworkId::Svelte),
    (DepMatcher::Any(&["astro"]), FrameworkId::Astro),
    (DepMatcher::Any(&["@remix-run/react"]), FrameworkId::Remix),
];

pub const TEST_FRAMEWORK_RULES: &[(DepMatcher, TestFrameworkId)] = &[
    (DepMatcher::Any(&["vitest"]), TestFrameworkId::Vitest),
    (DepMatcher::Any(&["jest"]), TestFrameworkId::Jest),
    (DepMatcher::Any(&["@playwright/test"]), TestFrameworkId::Playwright),
    (DepMatcher::Any(&["cypress"]), TestFrameworkId::Cypress),
    (DepMatcher::Any(&["mocha"]), TestFrameworkId::Mocha),
    (DepMatcher::Any(&["ava"]), TestFrameworkId::Ava),
];

pub const DATABASE_RULES: &[(DepMatcher, DatabaseId)] = &[
    (DepMatcher::Any(&["@prisma/client", "prisma"]), DatabaseId::Prisma),
    (DepMatcher::Any(&["mongoose"]), DatabaseId::Mongoose),
    (DepMatcher::Any(&["drizzle-orm"]), DatabaseId::Drizzle),
    (DepMatcher::Any(&["sequelize"]), DatabaseId::Sequelize),
    (DepMatcher::Any(&["typeorm"]), DatabaseId::Typeorm),
    (DepMatcher::Any(&["@supabase/supabase-js"]), DatabaseId::Supabase),
    (DepMatcher::Any(&["firebase", "firebase-admin"]), DatabaseId::Firebase),
    (DepMatcher::Any(&["pg"]), DatabaseId::Postgresql),
    (DepMatcher::Any(&["mysql2", "mysql"]), DatabaseId::Mysql),
];

pub const STYLING_RULES: &[(DepMatcher, StylingId)] = &[
    (DepMatcher::Any(&["tailwindcss"]), StylingId::Tailwind),
    (DepMatcher::Any(&["styled-components"]), StylingId::StyledComponents),
    (
        DepMatcher::Any(&["@emotion/react", "@emotion/styled"]),
        StylingId::Emotion,
    ),
    (DepMatcher::Any(&["sass", "node-sass"]), StylingId::Sass),
    (DepMatcher::Any(&["@chakra-ui/react"]), StylingId::Chakra),
    (DepMatcher::Any(&["@mantine/core"]), StylingId::Mantine),
    (DepMatcher::Any(&["@mui/material"]), StylingId::Mui),
];

/// Auth rules. Firebase Auth deliberately requires both the client and admin
/// SDKs together; either one alone is not enough evidence.
pub const AUTH_RULES: &[(DepMatcher, AuthId)] = &[
    (DepMatcher::Any(&["next-auth", "@auth/core"]), AuthId::NextAuth),
    (
        DepMatcher::Any(&["@clerk/nextjs", "@clerk/clerk-react"]),
        AuthId::Clerk,
    ),
    (
        DepMatcher::Any(&[
            "@supabase/auth-helpers-nextjs",
            "@supabase/auth-helpers-react",
        ]),
        AuthId::SupabaseAuth,
    ),
    (DepMatcher::Any(&["passport"]), AuthId::Passport),
    (
        DepMatcher::All(&["firebase-admin", "firebase"]),
        AuthId::FirebaseAuth,
    ),
    (
        DepMatcher::Any(&["@auth0/nextjs-auth0", "@auth0/auth0-react"]),
        AuthId::Auth0,
    ),
];

/// JavaScript lockfile priority: first present marker wins, npm is the
/// default when none is found.
pub const LOCKFILE_RULES: &[(&str, PackageManagerId)] = &[
    ("pnpm-lock.yaml", PackageManagerId::Pnpm),
    ("yarn.lock", PackageManagerId::Yarn),
    ("bun.lockb", PackageManagerId::Bun),
];

/// Python frameworks by priority-ordered substring match over the combined
/// requirements.txt + pyproject.toml text.
pub const PYTHON_FRAMEWORK_RULES: &[(&str, FrameworkId)] = &[
    ("fastapi", FrameworkId::Fastapi),
    ("django", FrameworkId::Django),
    ("flask", FrameworkId::Flask),
    ("starlette", FrameworkId::Starlette),
    ("tornado", FrameworkId::Tornado),
];

/// Files any one of which qualifies a directory as a Python project.
/// A lone uv.lock does not qualify.
pub const PYTHON_MARKER_FILES: &[&str] = &[
    "pyproject.toml",
    "requirements.txt",
    "setup.py",
    "Pipfile",
];

/// Evaluate an ordered rule table, returning the first matching label.
pub fn first_match<T: Clone>(
    rules: &[(DepMatcher, T)],
    evidence: &ProjectEvidence,
) -> Option<T> {
    rules
        .iter()
        .find(|(matcher, _)| matcher.matches(evidence))
        .map(|(_, label)| label.clone())
}
