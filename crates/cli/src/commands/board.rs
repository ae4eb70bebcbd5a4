// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use kb_core::{group_by_epic, Database, Diagnostic, EpicGroup, FilterState, Story, StoryStore};

use super::{open_db, session, today};
use crate::cli::{FilterArgs, OutputFormat};
use crate::colors::Palette;
use crate::config::Config;
use crate::display::format_board;
use crate::error::Result;

#[derive(Serialize)]
struct BoardJson<'a> {
    columns: Vec<ColumnJson<'a>>,
    diagnostics: &'a [Diagnostic],
}

#[derive(Serialize)]
struct ColumnJson<'a> {
    bucket: &'a str,
    stories: Vec<&'a Story>,
    #[serde(skip_serializing_if = "Option::is_none")]
    epics: Option<Vec<EpicGroup>>,
}

pub fn run(filters: FilterArgs, by_epic: bool, output: OutputFormat) -> Result<()> {
    let (mut db, config, _) = open_db()?;
    let rendered = run_impl(
        &mut db,
        &config,
        filters.to_filter_state(),
        by_epic,
        output,
        today(),
        &Palette::detect(),
    )?;
    println!("{rendered}");
    Ok(())
}

/// Internal implementation that accepts db/config for testing.
pub(crate) fn run_impl(
    db: &mut Database,
    config: &Config,
    filters: FilterState,
    by_epic: bool,
    output: OutputFormat,
    today: NaiveDate,
    palette: &Palette,
) -> Result<String> {
    let mut session = session(db, config)?;
    if !filters.is_empty() {
        tracing::debug!(filters = ?filters.describe(), "board filters");
    }
    session.set_filters(filters);
    let projection = session.project(today)?;
    let stories = session.store().list_stories()?;
    let epics = session.store().list_epics()?;

    match output {
        OutputFormat::Text => Ok(format_board(&projection, &stories, &epics, by_epic, palette)),
        OutputFormat::Json => {
            let by_id: HashMap<&str, &Story> =
                stories.iter().map(|s| (s.id.as_str(), s)).collect();
            let columns = projection
                .board
                .columns
                .iter()
                .map(|column| ColumnJson {
                    bucket: &column.bucket,
                    stories: column
                        .story_ids
                        .iter()
                        .filter_map(|id| by_id.get(id.as_str()).copied())
                        .collect(),
                    epics: by_epic.then(|| group_by_epic(column, &stories, &epics)),
                })
                .collect();
            let json = BoardJson {
                columns,
                diagnostics: &projection.diagnostics,
            };
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
