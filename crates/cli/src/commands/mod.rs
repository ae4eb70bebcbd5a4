// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod board;
pub mod delete;
pub mod edit;
pub mod epic;
pub mod export;
pub mod import;
pub mod init;
pub mod move_story;
pub mod new;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod types;

use std::path::PathBuf;

use chrono::NaiveDate;
use kb_core::{BoardSession, Database};

use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::Result;

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir);
    let db = Database::open(&db_path)?;
    Ok((db, config, work_dir))
}

/// Start a board session over a borrowed database.
pub(crate) fn session<'a>(
    db: &'a mut Database,
    config: &Config,
) -> Result<BoardSession<&'a mut Database>> {
    Ok(BoardSession::new(db, config.board.clone())?)
}

/// Today's date in local time, read once per command.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
