// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) export and import of board contents.
//!
//! Each line holds one [`BoardRecord`]. Epics are written before stories
//! so an import never sees a story before the epic it references.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::BoardConfig;
use crate::error::{Error, Result};
use crate::store::StoryStore;
use crate::story::{Epic, Story};

/// One line of an export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardRecord {
    Epic(Epic),
    Story(Story),
}

/// Counts from an import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub epics: usize,
    pub stories: usize,
    /// Records whose id already existed in the store.
    pub skipped: usize,
    /// Imported stories whose `completed_at` disagreed with their status.
    pub repaired: usize,
}

/// Appends a record to a JSONL file with fsync for durability.
pub fn append<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let json = serde_json::to_string(record)?;
    writeln!(file, "{json}")?;
    file.sync_all()?;

    Ok(())
}

/// Reads all records from a JSONL file.
///
/// Skips blank lines and returns an empty vec if the file doesn't exist.
/// A malformed line is reported with its line number.
pub fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: T = serde_json::from_str(&line)
            .map_err(|e| Error::CorruptedData(format!("line {}: {}", index + 1, e)))?;
        records.push(record);
    }

    Ok(records)
}

/// Writes all records to a JSONL file, replacing existing content.
pub fn write_all<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut file = File::create(path)?;

    for record in records {
        let json = serde_json::to_string(record)?;
        writeln!(file, "{json}")?;
    }
    file.sync_all()?;

    Ok(())
}

/// Write every epic and story (soft-deleted ones included) to `path`.
///
/// Returns the number of records written.
pub fn export_board<S: StoryStore + ?Sized>(store: &S, path: &Path) -> Result<usize> {
    let records: Vec<BoardRecord> = store
        .list_epics()?
        .into_iter()
        .map(BoardRecord::Epic)
        .chain(store.list_stories()?.into_iter().map(BoardRecord::Story))
        .collect();
    write_all(path, &records)?;
    Ok(records.len())
}

/// Load records from `path` into the store.
///
/// Ids already present are skipped, so importing the same file twice
/// leaves the store unchanged the second time. Every story status must be
/// in the configured status order, otherwise nothing is imported. An
/// imported story's `completed_at` is stamped with `now` or cleared so
/// that it is set exactly when the status is the done status.
pub fn import_board<S: StoryStore + ?Sized>(
    store: &mut S,
    path: &Path,
    config: &BoardConfig,
    now: DateTime<Utc>,
) -> Result<ImportSummary> {
    if !path.exists() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        )));
    }

    let records: Vec<BoardRecord> = read_all(path)?;
    for record in &records {
        if let BoardRecord::Story(story) = record {
            if !config.has_status(&story.status) {
                return Err(Error::CorruptedData(format!(
                    "story {}: status '{}' is not one of: {}",
                    story.id,
                    story.status,
                    config.status_list()
                )));
            }
        }
    }

    let mut summary = ImportSummary::default();
    for record in records {
        match record {
            BoardRecord::Epic(epic) => match store.get_epic(&epic.id) {
                Ok(_) => summary.skipped += 1,
                Err(Error::EpicNotFound(_)) => {
                    store.create_epic(&epic)?;
                    summary.epics += 1;
                }
                Err(e) => return Err(e),
            },
            BoardRecord::Story(mut story) => match store.get_story(&story.id) {
                Ok(_) => summary.skipped += 1,
                Err(Error::StoryNotFound(_)) => {
                    if reconcile_completion(&mut story, &config.done_status, now) {
                        summary.repaired += 1;
                    }
                    store.create_story(&story)?;
                    summary.stories += 1;
                }
                Err(e) => return Err(e),
            },
        }
    }

    Ok(summary)
}

/// Make `completed_at` agree with the story's status. Returns true if it changed.
fn reconcile_completion(story: &mut Story, done_status: &str, now: DateTime<Utc>) -> bool {
    let is_done = story.status == done_status;
    match (is_done, story.completed_at) {
        (true, None) => story.completed_at = Some(now),
        (false, Some(_)) => story.completed_at = None,
        _ => return false,
    }
    true
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
