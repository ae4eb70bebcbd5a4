// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use kb_core::{Database, StoryStore, StoryUpdate};

use super::{open_db, session};
use crate::config::Config;
use crate::error::Result;

pub fn run(id: &str, bucket: &str) -> Result<()> {
    let (mut db, config, _) = open_db()?;
    let (key, update) = run_impl(&mut db, &config, id, bucket, Utc::now())?;
    match &update.status {
        Some(status) => println!("Moved {} to {} (status: {})", key, bucket, status),
        None => println!("{} is already in {}", key, bucket),
    }
    Ok(())
}

/// Internal implementation that accepts db/config for testing.
///
/// Returns the story key and the applied update.
pub(crate) fn run_impl(
    db: &mut Database,
    config: &Config,
    id: &str,
    bucket: &str,
    now: DateTime<Utc>,
) -> Result<(String, StoryUpdate)> {
    let resolved_id = db.resolve_story_id(id)?;
    let key = db.get_story(&resolved_id)?.key;
    let mut session = session(db, config)?;
    let update = session.on_move_story(&resolved_id, bucket, now)?;
    Ok((key, update))
}

#[cfg(test)]
#[path = "move_story_tests.rs"]
mod tests;
