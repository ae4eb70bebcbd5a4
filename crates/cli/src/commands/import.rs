// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use chrono::{DateTime, Utc};
use kb_core::jsonl::{self, ImportSummary};
use kb_core::Database;

use super::open_db;
use crate::config::Config;
use crate::error::Result;

pub fn run(path: &str) -> Result<()> {
    let (mut db, config, _) = open_db()?;
    let summary = run_impl(&mut db, &config, Path::new(path), Utc::now())?;
    println!(
        "Imported {} epics and {} stories ({} skipped)",
        summary.epics, summary.stories, summary.skipped
    );
    if summary.repaired > 0 {
        println!(
            "Fixed completion time on {} stories to match their status",
            summary.repaired
        );
    }
    Ok(())
}

/// Internal implementation that accepts db/config for testing.
pub(crate) fn run_impl(
    db: &mut Database,
    config: &Config,
    path: &Path,
    now: DateTime<Utc>,
) -> Result<ImportSummary> {
    let summary = jsonl::import_board(db, path, &config.board, now)?;
    if summary.repaired > 0 {
        tracing::warn!(stories = summary.repaired, "repaired completion times on import");
    }
    tracing::info!(
        epics = summary.epics,
        stories = summary.stories,
        skipped = summary.skipped,
        "imported board"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
