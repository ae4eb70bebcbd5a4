// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use kb_core::Database;

use crate::config::{get_db_path, init_work_dir, write_gitignore};
use crate::error::{Error, Result};
use crate::id::validate_prefix;

pub fn run(prefix: Option<String>, path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let work_dir = run_impl(&target_path, prefix)?;
    println!("Initialized board at {}", work_dir.display());
    Ok(())
}

/// Internal implementation that accepts the target path for testing.
pub(crate) fn run_impl(target_path: &Path, prefix: Option<String>) -> Result<PathBuf> {
    let prefix = match prefix {
        Some(p) => p,
        None => derive_prefix_from_path(target_path)?,
    };
    if !validate_prefix(&prefix) {
        return Err(Error::InvalidPrefix);
    }

    let work_dir = init_work_dir(target_path, &prefix)?;
    Database::open(&get_db_path(&work_dir))?;
    write_gitignore(&work_dir)?;

    tracing::info!(prefix = %prefix, path = %work_dir.display(), "initialized board");
    Ok(work_dir)
}

/// Derive a prefix from the directory name: lowercase ASCII alphanumerics only.
fn derive_prefix_from_path(path: &Path) -> Result<String> {
    let dir_name = path
        .canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .or_else(|| path.file_name())
        .and_then(|n| n.to_str())
        .map(String::from)
        .ok_or(Error::InvalidPrefix)?;

    let prefix: String = dir_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if validate_prefix(&prefix) {
        Ok(prefix)
    } else {
        Err(Error::InvalidPrefix)
    }
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
