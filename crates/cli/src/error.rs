// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the kbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
/// Engine and store errors pass through unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'kb init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("invalid prefix: must be 2+ lowercase alphanumeric with at least one letter")]
    InvalidPrefix,

    #[error("invalid date: '{0}'\n  hint: dates are written as YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown attribute '{attr}'\n  hint: valid attributes are: {valid}")]
    InvalidAttribute { attr: String, valid: &'static str },

    #[error("epic {0} is archived\n  hint: archived epics cannot take new stories")]
    EpicArchived(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] kb_core::Error),
}

/// A specialized Result type for kbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
