// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core story types for the kanban board.
//!
//! This module contains the fundamental data types: Story, Epic, Priority,
//! Comment and Attachment. Statuses and types of work are free-form strings
//! drawn from the configured vocabulary, not enums.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Relative urgency of a story.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" | "med" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// A comment left on a story. Opaque to the board engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A file or link attached to a story. Opaque to the board engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}

/// The primary entity shown on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Unique, stable identifier.
    pub id: String,
    /// Human-facing key (e.g. `KB-12`).
    pub key: String,
    /// Short description of the work.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning epic. May point at an epic that no longer exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Workflow status, one of the configured statuses.
    pub status: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_of_work: Option<String>,
    /// Sorted, deduplicated due dates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub due_dates: Vec<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    /// Set iff `status` equals the configured done status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Story {
    /// Creates a new story with the given status and no optional fields.
    pub fn new(
        id: String,
        key: String,
        title: String,
        status: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Story {
            id,
            key,
            title,
            description: None,
            epic_id: None,
            assignee: None,
            status,
            priority: Priority::default(),
            type_of_work: None,
            due_dates: Vec::new(),
            start_date: None,
            created_at,
            completed_at: None,
            deleted: false,
            deleted_at: None,
            comments: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// Sets the due dates, sorting and deduplicating them (builder pattern).
    pub fn with_due_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.due_dates = normalize_due_dates(dates);
        self
    }

    /// Sets the type of work (builder pattern).
    pub fn with_type_of_work(mut self, type_of_work: impl Into<String>) -> Self {
        self.type_of_work = Some(type_of_work.into());
        self
    }

    /// Sets the epic reference (builder pattern).
    pub fn with_epic(mut self, epic_id: impl Into<String>) -> Self {
        self.epic_id = Some(epic_id.into());
        self
    }

    /// Returns true if this story has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

/// Sort and deduplicate due dates into the canonical ordered-set form.
pub fn normalize_due_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// A grouping of stories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Epic {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display color; also used as an identity signal when grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl Epic {
    /// Creates a new, unstarred, unarchived epic.
    pub fn new(id: String, key: String, name: String, created_at: DateTime<Utc>) -> Self {
        Epic {
            id,
            key,
            name,
            description: None,
            color: None,
            starred: false,
            archived: false,
            created_at,
        }
    }
}

#[cfg(test)]
#[path = "story_tests.rs"]
mod tests;
