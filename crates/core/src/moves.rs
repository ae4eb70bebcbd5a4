// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drag-and-drop move planning.
//!
//! A move drops a story on a bucket. The coordinator turns that into a
//! [`StoryUpdate`]: the concrete status for the bucket plus the derived
//! completion timestamp. It never touches the store; callers apply the
//! update.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::bucket::{classify, BucketMap};
use crate::config::BoardConfig;
use crate::error::{Error, Result};
use crate::story::{Priority, Story};

/// Update instruction for an optional field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Change<T> {
    Keep,
    Set(T),
    Clear,
}

impl<T: Clone + PartialEq> Change<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Change::Keep)
    }

    /// Build a change from an optional new value: `Some` sets, `None` clears.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Change::Set(v),
            None => Change::Clear,
        }
    }

    /// Collapse to [`Change::Keep`] when the change would not alter `current`.
    pub fn against(self, current: &Option<T>) -> Self {
        match (&self, current) {
            (Change::Set(new), Some(old)) if new == old => Change::Keep,
            (Change::Clear, None) => Change::Keep,
            _ => self,
        }
    }

    pub fn apply(&self, target: &mut Option<T>) {
        match self {
            Change::Keep => {}
            Change::Set(v) => *target = Some(v.clone()),
            Change::Clear => *target = None,
        }
    }
}

/// Immutable description of the field changes to make to one story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryUpdate {
    pub story_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Change::is_keep")]
    pub completed_at: Change<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Change::is_keep")]
    pub description: Change<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Change::is_keep")]
    pub type_of_work: Change<String>,
    #[serde(skip_serializing_if = "Change::is_keep")]
    pub assignee: Change<String>,
    #[serde(skip_serializing_if = "Change::is_keep")]
    pub epic_id: Change<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_dates: Option<Vec<NaiveDate>>,
    #[serde(skip_serializing_if = "Change::is_keep")]
    pub start_date: Change<NaiveDate>,
}

impl StoryUpdate {
    /// An update for `story_id` that changes nothing.
    pub fn none(story_id: impl Into<String>) -> Self {
        StoryUpdate {
            story_id: story_id.into(),
            status: None,
            completed_at: Change::Keep,
            title: None,
            description: Change::Keep,
            priority: None,
            type_of_work: Change::Keep,
            assignee: Change::Keep,
            epic_id: Change::Keep,
            due_dates: None,
            start_date: Change::Keep,
        }
    }

    /// Returns true if applying this update would change no field.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.completed_at.is_keep()
            && self.title.is_none()
            && self.description.is_keep()
            && self.priority.is_none()
            && self.type_of_work.is_keep()
            && self.assignee.is_keep()
            && self.epic_id.is_keep()
            && self.due_dates.is_none()
            && self.start_date.is_keep()
    }

    /// Names of the fields this update changes, in declaration order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.status.is_some() {
            fields.push("status");
        }
        if !self.completed_at.is_keep() {
            fields.push("completed_at");
        }
        if self.title.is_some() {
            fields.push("title");
        }
        if !self.description.is_keep() {
            fields.push("description");
        }
        if self.priority.is_some() {
            fields.push("priority");
        }
        if !self.type_of_work.is_keep() {
            fields.push("type_of_work");
        }
        if !self.assignee.is_keep() {
            fields.push("assignee");
        }
        if !self.epic_id.is_keep() {
            fields.push("epic_id");
        }
        if self.due_dates.is_some() {
            fields.push("due_dates");
        }
        if !self.start_date.is_keep() {
            fields.push("start_date");
        }
        fields
    }

    /// Apply this update to a story in place.
    pub fn apply_to(&self, story: &mut Story) {
        if let Some(status) = &self.status {
            story.status = status.clone();
        }
        self.completed_at.apply(&mut story.completed_at);
        if let Some(title) = &self.title {
            story.title = title.clone();
        }
        self.description.apply(&mut story.description);
        if let Some(priority) = self.priority {
            story.priority = priority;
        }
        self.type_of_work.apply(&mut story.type_of_work);
        self.assignee.apply(&mut story.assignee);
        self.epic_id.apply(&mut story.epic_id);
        if let Some(dates) = &self.due_dates {
            story.due_dates = dates.clone();
        }
        self.start_date.apply(&mut story.start_date);
    }
}

/// Derived completion timestamp for a status change.
///
/// Entering `done_status` stamps `now` unless a completion time already
/// exists. Any other status clears it.
pub fn completion_change(
    old_status: &str,
    new_status: &str,
    completed_at: Option<DateTime<Utc>>,
    done_status: &str,
    now: DateTime<Utc>,
) -> Change<DateTime<Utc>> {
    if old_status == new_status {
        return Change::Keep;
    }
    if new_status == done_status {
        return match completed_at {
            Some(_) => Change::Keep,
            None => Change::Set(now),
        };
    }
    match completed_at {
        Some(_) => Change::Clear,
        None => Change::Keep,
    }
}

/// First status in `status_order` whose bucket is `target_bucket`.
pub fn resolve_status<'a>(
    target_bucket: &str,
    bucket_map: &BucketMap,
    status_order: &'a [String],
) -> Option<&'a str> {
    status_order
        .iter()
        .find(|status| bucket_map.bucket_for(status) == Some(target_bucket))
        .map(String::as_str)
}

/// Plan the update for dropping `story` on `target_bucket`.
///
/// Dropping a story on the bucket it already occupies yields an empty
/// update, even when several statuses share that bucket.
///
/// # Errors
///
/// Returns [`Error::InvalidBucket`] if no status in the configured order
/// maps to `target_bucket`. No update must be applied in that case.
pub fn plan_move(
    story: &Story,
    target_bucket: &str,
    config: &BoardConfig,
    now: DateTime<Utc>,
) -> Result<StoryUpdate> {
    let current_bucket = classify(story, &config.bucket_map, &config.default_bucket);
    if current_bucket == target_bucket {
        return Ok(StoryUpdate::none(&story.id));
    }

    let resolved = resolve_status(target_bucket, &config.bucket_map, &config.status_order)
        .ok_or_else(|| Error::InvalidBucket(target_bucket.to_string()))?;

    let mut update = StoryUpdate::none(&story.id);
    if resolved != story.status {
        update.status = Some(resolved.to_string());
        update.completed_at = completion_change(
            &story.status,
            resolved,
            story.completed_at,
            &config.done_status,
            now,
        );
    }
    Ok(update)
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod tests;
