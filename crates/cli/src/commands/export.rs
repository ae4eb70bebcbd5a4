// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use kb_core::{jsonl, Database};

use super::open_db;
use crate::error::Result;

pub fn run(path: &str) -> Result<()> {
    let (db, _, _) = open_db()?;
    let written = run_impl(&db, Path::new(path))?;
    println!("Exported {} records to {}", written, path);
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, path: &Path) -> Result<usize> {
    let written = jsonl::export_board(db, path)?;
    tracing::info!(records = written, path = %path.display(), "exported board");
    Ok(written)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
