// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board configuration: the status vocabulary and its bucket layout.
//!
//! The CLI loads this from the `[board]` table of `.kanban/config.toml`;
//! the engine only ever reads it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::bucket::BucketMap;
use crate::error::{Error, Result};

/// A tolerated configuration gap, surfaced to the user as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A status in `status_order` has no bucket; its stories use the default bucket.
    UnmappedStatus(String),
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnmappedStatus(status) => write!(
                f,
                "status '{status}' has no bucket; its stories will appear in the default bucket"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Valid statuses, in board order.
    pub status_order: Vec<String>,
    /// The status that marks a story complete.
    pub done_status: String,
    /// Status given to new stories.
    pub default_status: String,
    /// Bucket for stories whose status has no mapping.
    pub default_bucket: String,
    /// Known types of work. Grows at runtime via [`BoardConfig::add_type_of_work`].
    #[serde(default)]
    pub type_of_work_options: Vec<String>,
    /// Status to bucket table.
    pub bucket_map: BucketMap,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let statuses = ["todo", "in-progress", "done"];
        BoardConfig {
            status_order: statuses.iter().map(|s| s.to_string()).collect(),
            bucket_map: statuses.iter().map(|s| (*s, *s)).collect(),
            done_status: "done".to_string(),
            default_status: "todo".to_string(),
            default_bucket: "todo".to_string(),
            type_of_work_options: ["feature", "bug", "chore"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl BoardConfig {
    /// Check structural validity and report tolerated gaps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the status order is empty, lists a
    /// status twice, or does not contain the done and default statuses.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>> {
        if self.status_order.is_empty() {
            return Err(Error::InvalidConfig(
                "status_order must list at least one status".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for status in &self.status_order {
            if status.trim().is_empty() {
                return Err(Error::InvalidConfig(
                    "status_order contains an empty status".to_string(),
                ));
            }
            if !seen.insert(status.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "status '{status}' is listed twice in status_order"
                )));
            }
        }
        if !self.has_status(&self.done_status) {
            return Err(Error::InvalidConfig(format!(
                "done_status '{}' is not in status_order",
                self.done_status
            )));
        }
        if !self.has_status(&self.default_status) {
            return Err(Error::InvalidConfig(format!(
                "default_status '{}' is not in status_order",
                self.default_status
            )));
        }
        if self.default_bucket.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "default_bucket must not be empty".to_string(),
            ));
        }

        Ok(self
            .bucket_map
            .unmapped(&self.status_order)
            .into_iter()
            .map(|s| ConfigWarning::UnmappedStatus(s.to_string()))
            .collect())
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status_order.iter().any(|s| s == status)
    }

    pub fn has_type_of_work(&self, name: &str) -> bool {
        self.type_of_work_options.iter().any(|t| t == name)
    }

    /// Distinct buckets reachable from `status_order`, in first-occurrence order.
    pub fn buckets(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.status_order
            .iter()
            .map(|s| {
                self.bucket_map
                    .bucket_for(s)
                    .unwrap_or(self.default_bucket.as_str())
            })
            .filter(|b| seen.insert(*b))
            .collect()
    }

    /// Comma-separated status vocabulary, for error hints.
    pub fn status_list(&self) -> String {
        self.status_order.join(", ")
    }

    /// Register a new type of work.
    ///
    /// Returns `Ok(false)` when the type is already known.
    pub fn add_type_of_work(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::FieldRequired {
                field: "Type of work",
            });
        }
        if self.has_type_of_work(name) {
            return Ok(false);
        }
        self.type_of_work_options.push(name.to_string());
        Ok(true)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
