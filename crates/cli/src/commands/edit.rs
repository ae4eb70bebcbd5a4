// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use kb_core::{Database, Priority, StoryEdit, StoryStore, StoryUpdate};

use super::new::resolve_target_epic;
use super::{open_db, session};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::validate::{parse_date_list, parse_optional, parse_optional_date, validate_assignee};

const VALID_ATTRIBUTES: &str = "title, description, status, priority, type, assignee, epic, due, start";

pub fn run(id: &str, attr: &str, value: &str) -> Result<()> {
    let (mut db, config, _) = open_db()?;
    let (key, update) = run_impl(&mut db, &config, id, attr, value, Utc::now())?;
    if update.is_empty() {
        println!("No change to {}", key);
    } else {
        println!("Updated {} of {}", update.changed_fields().join(", "), key);
    }
    Ok(())
}

/// Translate one `attr value` pair into an edit.
pub(crate) fn parse_edit(db: &Database, attr: &str, value: &str) -> Result<StoryEdit> {
    let edit = StoryEdit::new();
    let edit = match attr {
        "title" => edit.title(value),
        "description" => edit.description(parse_optional(value)),
        "status" => edit.status(value.trim()),
        "priority" => edit.priority(value.parse::<Priority>()?),
        "type" => edit.type_of_work(parse_optional(value)),
        "assignee" => {
            validate_assignee(value)?;
            edit.assignee(parse_optional(value))
        }
        "epic" => match parse_optional(value) {
            Some(reference) => edit.epic(Some(resolve_target_epic(db, reference.trim())?)),
            None => edit.epic(None),
        },
        "due" => edit.due_dates(parse_date_list(value)?),
        "start" => edit.start_date(parse_optional_date(value)?),
        _ => {
            return Err(Error::InvalidAttribute {
                attr: attr.to_string(),
                valid: VALID_ATTRIBUTES,
            })
        }
    };
    Ok(edit)
}

/// Internal implementation that accepts db/config for testing.
///
/// Returns the story key and the applied update.
pub(crate) fn run_impl(
    db: &mut Database,
    config: &Config,
    id: &str,
    attr: &str,
    value: &str,
    now: DateTime<Utc>,
) -> Result<(String, StoryUpdate)> {
    let resolved_id = db.resolve_story_id(id)?;
    let key = db.get_story(&resolved_id)?.key;
    let edit = parse_edit(db, attr, value)?;

    let mut session = session(db, config)?;
    let update = session.on_edit_story(&resolved_id, edit, now)?;
    if !update.is_empty() {
        tracing::debug!(story = %resolved_id, fields = ?update.changed_fields(), "edited story");
    }
    Ok((key, update))
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
