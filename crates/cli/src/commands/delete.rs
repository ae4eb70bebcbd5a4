// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use kb_core::{Database, StoryStore};

use super::{open_db, session};
use crate::config::Config;
use crate::error::Result;

pub fn run(id: &str) -> Result<()> {
    let (mut db, config, _) = open_db()?;
    let key = run_impl(&mut db, &config, id, Utc::now())?;
    println!("Deleted {}", key);
    Ok(())
}

/// Internal implementation that accepts db/config for testing.
///
/// Deleting twice keeps the first deletion time.
pub(crate) fn run_impl(
    db: &mut Database,
    config: &Config,
    id: &str,
    now: DateTime<Utc>,
) -> Result<String> {
    let resolved_id = db.resolve_story_id(id)?;
    let key = db.get_story(&resolved_id)?.key;
    let mut session = session(db, config)?;
    session.delete_story(&resolved_id, now)?;
    tracing::info!(story = %resolved_id, "deleted story");
    Ok(key)
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
