//! Filesystem helpers for the installer.
//!
//! Every mutating helper takes a `dry_run` flag and reports what it did (or
//! would have done) through a small result struct, so the installer can show
//! an accurate plan without touching the disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Gitignore entry added for assistant-local settings.
const GITIGNORE_ENTRY: &str = ".claude/settings.local.json";

#[derive(Debug, Clone)]
pub struct DirResult {
    pub created: bool,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct GitignoreResult {
    pub updated: bool,
    pub created: bool,
}

/// Ensure a directory exists, creating parents as needed.
pub fn ensure_dir(path: &Path, dry_run: bool) -> Result<DirResult> {
    if path.is_dir() {
        return Ok(DirResult {
            created: false,
            path: path.to_path_buf(),
        });
    }
    if !dry_run {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory {}", path.display()))?;
    }
    Ok(DirResult {
        created: true,
        path: path.to_path_buf(),
    })
}

/// Copy a file, creating the destination directory first.
pub fn copy_file(src: &Path, dest: &Path, dry_run: bool) -> Result<()> {
    if let Some(parent) = dest.parent() {
        ensure_dir(parent, dry_run)?;
    }
    if !dry_run {
        fs::copy(src, dest).with_context(|| {
            format!("failed to copy {} to {}", src.display(), dest.display())
        })?;
    }
    Ok(())
}

/// Write text content, creating the destination directory first.
pub fn write_file(dest: &Path, content: &str, dry_run: bool) -> Result<()> {
    if let Some(parent) = dest.parent() {
        ensure_dir(parent, dry_run)?;
    }
    if !dry_run {
        fs::write(dest, content)
            .with_context(|| format!("failed to write {}", dest.display()))?;
    }
    Ok(())
}

/// Append the assistant-local settings entry to the project's .gitignore.
/// Idempotent: an existing entry is left alone.
pub fn update_gitignore(project_path: &Path, dry_run: bool) -> Result<GitignoreResult> {
    let gitignore = project_path.join(".gitignore");

    if !gitignore.exists() {
        if !dry_run {
            fs::write(
                &gitignore,
                format!("# Assistant local settings\n{}\n", GITIGNORE_ENTRY),
            )
            .context("failed to create .gitignore")?;
        }
        return Ok(GitignoreResult {
            updated: true,
            created: true,
        });
    }

    let content = fs::read_to_string(&gitignore).context("failed to read .gitignore")?;
    if content.contains(GITIGNORE_ENTRY) {
        return Ok(GitignoreResult {
            updated: false,
            created: false,
        });
    }

    if !dry_run {
        let appended = format!(
            "{}\n# Assistant local settings\n{}\n",
            content.trim_end_matches('\n'),
            GITIGNORE_ENTRY
        );
        fs::write(&gitignore, appended).context("failed to update .gitignore")?;
    }
    Ok(GitignoreResult {
        updated: true,
        created: false,
    })
}
