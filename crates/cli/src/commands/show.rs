// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use kb_core::{classify, Database, Epic, Story, StoryStore};

use super::open_db;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_story_details;
use crate::error::Result;

#[derive(Serialize)]
struct StoryDetails<'a> {
    #[serde(flatten)]
    story: &'a Story,
    bucket: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    epic: Option<&'a Epic>,
}

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (db, config, _) = open_db()?;
    println!("{}", run_impl(&db, &config, id, output)?);
    Ok(())
}

/// Internal implementation that accepts db/config for testing.
///
/// Deleted stories can still be shown by id.
pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    id: &str,
    output: OutputFormat,
) -> Result<String> {
    let story = db.get_story(&db.resolve_story_id(id)?)?;
    let epic = match story.epic_id.as_deref() {
        Some(epic_id) => db.get_epic(epic_id).ok(),
        None => None,
    };
    let bucket = classify(&story, &config.board.bucket_map, &config.board.default_bucket);

    match output {
        OutputFormat::Text => Ok(format_story_details(&story, bucket, epic.as_ref())),
        OutputFormat::Json => Ok(serde_json::to_string(&StoryDetails {
            story: &story,
            bucket,
            epic: epic.as_ref(),
        })?),
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
