// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.kanban/config.toml` and includes:
//! - `prefix`: The project-specific prefix for story keys (e.g., "kb" → "KB-12")
//! - `[board]`: the status vocabulary, bucket map and types of work

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use kb_core::BoardConfig;

use crate::error::{Error, Result};
use crate::id::validate_prefix;

pub const WORK_DIR_NAME: &str = ".kanban";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "board.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.kanban/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Project-specific prefix for story ids and keys.
    pub prefix: String,
    /// Board vocabulary. Missing tables fall back to the default board.
    #[serde(default)]
    pub board: BoardConfig,
}

impl Config {
    /// Creates a new config with the given prefix and the default board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if prefix is not 2+ lowercase alphanumeric with at least one letter.
    pub fn new(prefix: String) -> Result<Self> {
        if !validate_prefix(&prefix) {
            return Err(Error::InvalidPrefix);
        }
        Ok(Config {
            prefix,
            board: BoardConfig::default(),
        })
    }

    /// Loads configuration from the given `.kanban/` directory.
    ///
    /// The board table is validated; tolerated gaps are reported when a
    /// session is opened over it.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config = Self::parse(&content)?;
        config.board.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Parses a config file body without validating the board.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Saves configuration to the given `.kanban/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .kanban directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Find the .kanban directory by walking up from `start`
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path inside a work directory
pub fn get_db_path(work_dir: &Path) -> PathBuf {
    work_dir.join(DB_FILE_NAME)
}

/// Initialize a new .kanban directory at the given path
pub fn init_work_dir(path: &Path, prefix: &str) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    let config = Config::new(prefix.to_string())?;
    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

/// Write a .gitignore file that keeps the database out of version control.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let gitignore_path = work_dir.join(GITIGNORE_FILE_NAME);
    let content = format!("# Local board database\n{DB_FILE_NAME}\n{DB_FILE_NAME}-wal\n{DB_FILE_NAME}-shm\n");
    fs::write(&gitignore_path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
