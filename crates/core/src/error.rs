// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for kb-core operations.

use thiserror::Error;

/// All possible errors that can occur in kb-core operations.
///
/// Data-quality problems (unmapped statuses, orphan epic references) are
/// not errors; they are reported as [`crate::board::Diagnostic`] values.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bucket: '{0}'\n  hint: no status in the status order maps to this bucket")]
    InvalidBucket(String),

    #[error("story not found: {0}")]
    StoryNotFound(String),

    #[error("epic not found: {0}")]
    EpicNotFound(String),

    #[error("ambiguous id '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    #[error("invalid status: '{status}'\n  hint: valid statuses are: {valid}")]
    InvalidStatus { status: String, valid: String },

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high")]
    InvalidPriority(String),

    #[error("invalid due filter: '{0}'\n  hint: valid filters are: all, today, next-week")]
    InvalidDueFilter(String),

    #[error("unknown type of work: '{0}'\n  hint: add it first with 'kb types add {0}'")]
    UnknownTypeOfWork(String),

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("{field} is too long ({actual} characters, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("invalid board config: {0}")]
    InvalidConfig(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for kb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
