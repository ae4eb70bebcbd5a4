// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use kb_core::editor::plan_edit;
use kb_core::{Database, Priority, Story, StoryEdit, StoryStore};

use super::open_db;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::id::{generate_unique_id, story_key};
use crate::validate::{parse_date_list, parse_optional_date, split_values, validate_assignee};

/// Raw `kb new` arguments.
#[derive(Debug, Clone, Default)]
pub struct NewStory {
    pub title: String,
    pub status: Option<String>,
    pub type_of_work: Option<String>,
    pub epic: Option<String>,
    pub assignee: Option<String>,
    pub priority: Option<Priority>,
    pub due: Vec<String>,
    pub start: Option<String>,
    pub description: Option<String>,
}

pub fn run(args: NewStory, output: OutputFormat) -> Result<()> {
    let (mut db, config, _) = open_db()?;
    let story = run_impl(&mut db, &config, args, Utc::now())?;

    match output {
        OutputFormat::Text => println!("Created {} {}: {}", story.key, story.id, story.title),
        OutputFormat::Json => println!("{}", serde_json::to_string(&story)?),
    }
    Ok(())
}

/// Internal implementation that accepts db/config for testing.
///
/// Every field goes through the same validation as `kb edit`.
pub(crate) fn run_impl(
    db: &mut Database,
    config: &Config,
    args: NewStory,
    now: DateTime<Utc>,
) -> Result<Story> {
    let board = &config.board;
    let id = generate_unique_id(&config.prefix, &args.title, &now, |id| {
        db.story_exists(id).unwrap_or(false)
    });
    let (story_count, _) = db.counts()?;
    let key = story_key(&config.prefix, story_count + 1);

    let mut story = Story::new(id, key, String::new(), board.default_status.clone(), now);

    let mut edit = StoryEdit::new().title(args.title);
    if let Some(status) = args.status {
        edit = edit.status(status);
    }
    if let Some(priority) = args.priority {
        edit = edit.priority(priority);
    }
    if let Some(assignee) = &args.assignee {
        validate_assignee(assignee)?;
    }
    edit = edit
        .description(args.description)
        .type_of_work(args.type_of_work)
        .assignee(args.assignee)
        .epic(args.epic.map(|e| resolve_target_epic(db, &e)).transpose()?);

    let mut due_dates = Vec::new();
    for value in split_values(&args.due) {
        due_dates.extend(parse_date_list(&value)?);
    }
    edit = edit.due_dates(due_dates);
    if let Some(start) = args.start {
        edit = edit.start_date(parse_optional_date(&start)?);
    }

    // A fresh story in the default status: a done default still sets completed_at.
    if story.status == board.done_status {
        story.completed_at = Some(now);
    }
    let update = plan_edit(&story, edit, board, now)?;
    update.apply_to(&mut story);

    db.create_story(&story)?;
    tracing::debug!(story = %story.id, status = %story.status, "created story");
    Ok(story)
}

/// Resolve an epic reference for a new assignment; archived epics are refused.
pub(crate) fn resolve_target_epic(db: &Database, reference: &str) -> Result<String> {
    let epic_id = db.resolve_epic_id(reference)?;
    let epic = db.get_epic(&epic_id)?;
    if epic.archived {
        return Err(Error::EpicArchived(epic.key));
    }
    Ok(epic_id)
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
