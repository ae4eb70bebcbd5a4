// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Detail-panel edits.
//!
//! The editor validates a requested edit against the board config and
//! produces the same [`StoryUpdate`] descriptor the move coordinator does.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::BoardConfig;
use crate::error::{Error, Result};
use crate::moves::{completion_change, Change, StoryUpdate};
use crate::story::{normalize_due_dates, Priority, Story};

pub const MAX_TITLE_LENGTH: usize = 500;
pub const MAX_DESCRIPTION_LENGTH: usize = 1_000_000;

/// A requested edit. Unset fields are left alone.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryEdit {
    pub title: Option<String>,
    pub description: Change<String>,
    pub status: Option<String>,
    pub priority: Option<Priority>,
    pub type_of_work: Change<String>,
    pub assignee: Change<String>,
    pub epic_id: Change<String>,
    pub due_dates: Option<Vec<NaiveDate>>,
    pub start_date: Change<NaiveDate>,
}

impl Default for StoryEdit {
    fn default() -> Self {
        StoryEdit {
            title: None,
            description: Change::Keep,
            status: None,
            priority: None,
            type_of_work: Change::Keep,
            assignee: Change::Keep,
            epic_id: Change::Keep,
            due_dates: None,
            start_date: Change::Keep,
        }
    }
}

impl StoryEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Change::from_option(description);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn type_of_work(mut self, type_of_work: Option<String>) -> Self {
        self.type_of_work = Change::from_option(type_of_work);
        self
    }

    pub fn assignee(mut self, assignee: Option<String>) -> Self {
        self.assignee = Change::from_option(assignee);
        self
    }

    pub fn epic(mut self, epic_id: Option<String>) -> Self {
        self.epic_id = Change::from_option(epic_id);
        self
    }

    pub fn due_dates(mut self, dates: Vec<NaiveDate>) -> Self {
        self.due_dates = Some(dates);
        self
    }

    pub fn start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.start_date = Change::from_option(date);
        self
    }
}

/// Validate and trim a title.
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldRequired { field: "Title" });
    }
    let len = trimmed.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(Error::FieldTooLong {
            field: "Title",
            actual: len,
            max: MAX_TITLE_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Trim a free-text optional field; blank counts as cleared.
fn trim_optional(change: Change<String>) -> Change<String> {
    match change {
        Change::Set(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Change::Clear
            } else {
                Change::Set(trimmed.to_string())
            }
        }
        other => other,
    }
}

/// Check a status against the configured vocabulary.
pub fn validate_status(status: &str, config: &BoardConfig) -> Result<()> {
    if config.has_status(status) {
        Ok(())
    } else {
        Err(Error::InvalidStatus {
            status: status.to_string(),
            valid: config.status_list(),
        })
    }
}

/// Plan the update for a detail-panel edit.
///
/// Fields that already hold the requested value are dropped from the
/// update. A status change derives `completed_at` the same way a move does.
///
/// # Errors
///
/// Returns [`Error::FieldRequired`] or [`Error::FieldTooLong`] for a bad
/// title, [`Error::InvalidStatus`] for a status outside the vocabulary, and
/// [`Error::UnknownTypeOfWork`] for an unregistered type of work.
pub fn plan_edit(
    story: &Story,
    edit: StoryEdit,
    config: &BoardConfig,
    now: DateTime<Utc>,
) -> Result<StoryUpdate> {
    let mut update = StoryUpdate::none(&story.id);

    if let Some(title) = edit.title {
        let title = validate_title(&title)?;
        if title != story.title {
            update.title = Some(title);
        }
    }

    let description = trim_optional(edit.description);
    if let Change::Set(text) = &description {
        if text.len() > MAX_DESCRIPTION_LENGTH {
            return Err(Error::FieldTooLong {
                field: "Description",
                actual: text.len(),
                max: MAX_DESCRIPTION_LENGTH,
            });
        }
    }
    update.description = description.against(&story.description);

    if let Some(status) = edit.status {
        validate_status(&status, config)?;
        if status != story.status {
            update.completed_at = completion_change(
                &story.status,
                &status,
                story.completed_at,
                &config.done_status,
                now,
            );
            update.status = Some(status);
        }
    }

    if let Some(priority) = edit.priority {
        if priority != story.priority {
            update.priority = Some(priority);
        }
    }

    let type_of_work = trim_optional(edit.type_of_work);
    if let Change::Set(name) = &type_of_work {
        if !config.has_type_of_work(name) {
            return Err(Error::UnknownTypeOfWork(name.clone()));
        }
    }
    update.type_of_work = type_of_work.against(&story.type_of_work);

    update.assignee = trim_optional(edit.assignee).against(&story.assignee);
    update.epic_id = trim_optional(edit.epic_id).against(&story.epic_id);

    if let Some(dates) = edit.due_dates {
        let dates = normalize_due_dates(dates);
        if dates != story.due_dates {
            update.due_dates = Some(dates);
        }
    }

    update.start_date = edit.start_date.against(&story.start_date);

    Ok(update)
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
