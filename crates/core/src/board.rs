// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board projection.
//!
//! [`project`] filters the story collection once, then partitions the
//! survivors into buckets. The projection is recomputed from scratch on
//! every change; nothing here caches state between calls.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::bucket::{classify, BucketMap};
use crate::filter::{filter_stories, FilterState};
use crate::story::{Epic, Story};

/// One board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub bucket: String,
    /// Story ids in source order.
    pub story_ids: Vec<String>,
}

/// Ordered columns of visible story ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn column(&self, bucket: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.bucket == bucket)
    }

    /// Bucket ids in display order.
    pub fn buckets(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.bucket.as_str()).collect()
    }

    pub fn bucket_of(&self, story_id: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.story_ids.iter().any(|id| id == story_id))
            .map(|c| c.bucket.as_str())
    }

    pub fn contains(&self, story_id: &str) -> bool {
        self.bucket_of(story_id).is_some()
    }

    pub fn story_count(&self) -> usize {
        self.columns.iter().map(|c| c.story_ids.len()).sum()
    }
}

/// A tolerated data-quality observation made while projecting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The story's status has no bucket; it was placed in the default bucket.
    UnmappedStatus { story_id: String, status: String },
    /// The story references an epic that does not exist.
    OrphanEpicReference { story_id: String, epic_id: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnmappedStatus { story_id, status } => {
                write!(f, "{story_id}: status '{status}' has no bucket")
            }
            Diagnostic::OrphanEpicReference { story_id, epic_id } => {
                write!(f, "{story_id}: epic '{epic_id}' does not exist")
            }
        }
    }
}

/// The result of projecting stories onto the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub board: Board,
    pub diagnostics: Vec<Diagnostic>,
}

/// Project stories onto board columns.
///
/// Columns follow `status_order` reduced to buckets, each bucket placed at
/// its first status. Buckets that receive stories but are not reachable
/// from `status_order` are appended in order of first story. Within a
/// column, stories keep their source order.
pub fn project(
    stories: &[Story],
    epics: &[Epic],
    bucket_map: &BucketMap,
    status_order: &[String],
    default_bucket: &str,
    filter: &FilterState,
    today: NaiveDate,
) -> Projection {
    let mut columns: Vec<Column> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for status in status_order {
        let bucket = bucket_map.bucket_for(status).unwrap_or(default_bucket);
        if !index.contains_key(bucket) {
            index.insert(bucket, columns.len());
            columns.push(Column {
                bucket: bucket.to_string(),
                story_ids: Vec::new(),
            });
        }
    }

    let epic_ids: HashSet<&str> = epics.iter().map(|e| e.id.as_str()).collect();
    let mut diagnostics = Vec::new();

    for story in filter_stories(stories, filter, today) {
        if !bucket_map.contains_status(&story.status) {
            diagnostics.push(Diagnostic::UnmappedStatus {
                story_id: story.id.clone(),
                status: story.status.clone(),
            });
        }
        if let Some(epic_id) = &story.epic_id {
            if !epic_ids.contains(epic_id.as_str()) {
                diagnostics.push(Diagnostic::OrphanEpicReference {
                    story_id: story.id.clone(),
                    epic_id: epic_id.clone(),
                });
            }
        }

        let bucket = classify(story, bucket_map, default_bucket);
        let slot = match index.get(bucket) {
            Some(&slot) => slot,
            None => {
                index.insert(bucket, columns.len());
                columns.push(Column {
                    bucket: bucket.to_string(),
                    story_ids: Vec::new(),
                });
                columns.len() - 1
            }
        };
        columns[slot].story_ids.push(story.id.clone());
    }

    Projection {
        board: Board { columns },
        diagnostics,
    }
}

/// Stories of one column sharing an epic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpicGroup {
    /// `None` for stories with no epic or a missing one.
    pub epic_id: Option<String>,
    pub story_ids: Vec<String>,
}

/// Group a column's stories by epic.
///
/// Groups appear in order of their first story. Stories without an epic,
/// or whose epic does not exist, go to a trailing "no epic" group.
pub fn group_by_epic(column: &Column, stories: &[Story], epics: &[Epic]) -> Vec<EpicGroup> {
    let by_id: HashMap<&str, &Story> = stories.iter().map(|s| (s.id.as_str(), s)).collect();
    let epic_ids: HashSet<&str> = epics.iter().map(|e| e.id.as_str()).collect();

    let mut groups: Vec<EpicGroup> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut ungrouped = Vec::new();

    for id in &column.story_ids {
        let epic = by_id
            .get(id.as_str())
            .and_then(|s| s.epic_id.as_deref())
            .filter(|e| epic_ids.contains(e));
        match epic {
            Some(epic_id) => {
                let slot = *slots.entry(epic_id).or_insert_with(|| {
                    groups.push(EpicGroup {
                        epic_id: Some(epic_id.to_string()),
                        story_ids: Vec::new(),
                    });
                    groups.len() - 1
                });
                groups[slot].story_ids.push(id.clone());
            }
            None => ungrouped.push(id.clone()),
        }
    }

    if !ungrouped.is_empty() {
        groups.push(EpicGroup {
            epic_id: None,
            story_ids: ungrouped,
        });
    }
    groups
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
