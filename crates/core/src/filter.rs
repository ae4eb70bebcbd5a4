// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Story filtering for board projection.
//!
//! Three independent predicates are ANDed together:
//!
//! - status: passes when the status set is empty or contains the story's status
//! - type of work: passes when the type set is empty or contains the story's type
//! - due date: `all`, `today`, or `next-week`
//!
//! Soft-deleted stories are removed before any predicate runs. That step is
//! not a filter the user can turn off.
//!
//! Dates are compared as calendar days. The caller supplies `today`, so the
//! engine never reads the wall clock or the local time zone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::story::Story;

/// Number of days after `today` covered by [`DueFilter::NextWeek`].
pub const NEXT_WEEK_DAYS: i64 = 7;

/// Due-date window selection. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueFilter {
    #[default]
    All,
    /// Due on `today`.
    Today,
    /// Due from `today + 1` through `today + 7`, both inclusive.
    NextWeek,
}

impl DueFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            DueFilter::All => "all",
            DueFilter::Today => "today",
            DueFilter::NextWeek => "next-week",
        }
    }
}

impl fmt::Display for DueFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DueFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(DueFilter::All),
            "today" => Ok(DueFilter::Today),
            "next-week" | "next_week" | "week" => Ok(DueFilter::NextWeek),
            _ => Err(Error::InvalidDueFilter(s.to_string())),
        }
    }
}

/// The active board filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Allowed statuses. Empty means every status passes.
    #[serde(default)]
    pub statuses: BTreeSet<String>,
    /// Allowed types of work. Empty means every story passes.
    #[serde(default)]
    pub types_of_work: BTreeSet<String>,
    #[serde(default)]
    pub due: DueFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statuses = statuses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_types_of_work<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types_of_work = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_due(mut self, due: DueFilter) -> Self {
        self.due = due;
        self
    }

    /// Returns true when no filter is active.
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.types_of_work.is_empty() && self.due == DueFilter::All
    }

    /// Human-readable list of the active filters, for display.
    pub fn describe(&self) -> Vec<String> {
        let mut applied = Vec::new();
        if !self.statuses.is_empty() {
            applied.push(format!("status: {}", join(&self.statuses)));
        }
        if !self.types_of_work.is_empty() {
            applied.push(format!("type: {}", join(&self.types_of_work)));
        }
        if self.due != DueFilter::All {
            applied.push(format!("due: {}", self.due));
        }
        applied
    }
}

fn join(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Hard precondition: soft-deleted stories are never visible.
pub fn is_visible(story: &Story) -> bool {
    !story.is_deleted()
}

pub fn matches_status(story: &Story, statuses: &BTreeSet<String>) -> bool {
    statuses.is_empty() || statuses.contains(&story.status)
}

/// A story without a type of work passes only when `types` is empty.
pub fn matches_type_of_work(story: &Story, types: &BTreeSet<String>) -> bool {
    if types.is_empty() {
        return true;
    }
    story
        .type_of_work
        .as_ref()
        .is_some_and(|t| types.contains(t))
}

pub fn matches_due(story: &Story, due: DueFilter, today: NaiveDate) -> bool {
    match due {
        DueFilter::All => true,
        DueFilter::Today => story.due_dates.iter().any(|d| *d == today),
        DueFilter::NextWeek => story.due_dates.iter().any(|d| {
            let offset = d.signed_duration_since(today).num_days();
            (1..=NEXT_WEEK_DAYS).contains(&offset)
        }),
    }
}

/// Check a single story against the visibility precondition and all filters.
pub fn matches(story: &Story, state: &FilterState, today: NaiveDate) -> bool {
    is_visible(story)
        && matches_status(story, &state.statuses)
        && matches_type_of_work(story, &state.types_of_work)
        && matches_due(story, state.due, today)
}

/// Reduce a story collection to the visible, filter-passing subset.
///
/// Source order is preserved. The result is bucket-agnostic and can be
/// partitioned afterwards.
pub fn filter_stories<'a>(
    stories: &'a [Story],
    state: &FilterState,
    today: NaiveDate,
) -> Vec<&'a Story> {
    stories
        .iter()
        .filter(|story| matches(story, state, today))
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
