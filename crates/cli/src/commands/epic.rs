// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use kb_core::editor::validate_title;
use kb_core::{Database, Epic, StoryStore};

use super::open_db;
use crate::cli::EpicCommand;
use crate::config::Config;
use crate::display::format_epic_line;
use crate::error::Result;
use crate::id::{epic_key, epic_prefix, generate_unique_id};
use crate::validate::parse_optional;

pub fn run(command: EpicCommand) -> Result<()> {
    let (mut db, config, _) = open_db()?;
    match command {
        EpicCommand::New {
            name,
            color,
            description,
        } => {
            let epic = create(&mut db, &config, &name, color, description, Utc::now())?;
            println!("Created epic {} {}: {}", epic.key, epic.id, epic.name);
        }
        EpicCommand::List { all } => {
            for line in list(&db, all)? {
                println!("{line}");
            }
        }
        EpicCommand::Star { id } => {
            let epic = toggle_star(&mut db, &id)?;
            let verb = if epic.starred { "Starred" } else { "Unstarred" };
            println!("{} {}", verb, epic.key);
        }
        EpicCommand::Archive { id } => {
            let epic = archive(&mut db, &id)?;
            println!("Archived {}", epic.key);
        }
    }
    Ok(())
}

pub(crate) fn create(
    db: &mut Database,
    config: &Config,
    name: &str,
    color: Option<String>,
    description: Option<String>,
    now: DateTime<Utc>,
) -> Result<Epic> {
    let name = validate_title(name)?;
    let id = generate_unique_id(&epic_prefix(&config.prefix), &name, &now, |id| {
        db.get_epic(id).is_ok()
    });
    let (_, epic_count) = db.counts()?;

    let mut epic = Epic::new(id, epic_key(&config.prefix, epic_count + 1), name, now);
    epic.color = color.as_deref().and_then(parse_optional);
    epic.description = description.as_deref().and_then(parse_optional);
    db.create_epic(&epic)?;
    Ok(epic)
}

/// Epic lines with live story counts; archived epics only with `all`.
pub(crate) fn list(db: &Database, all: bool) -> Result<Vec<String>> {
    let stories = db.list_stories()?;
    let lines = db
        .list_epics()?
        .iter()
        .filter(|epic| all || !epic.archived)
        .map(|epic| {
            let count = stories
                .iter()
                .filter(|s| !s.deleted && s.epic_id.as_deref() == Some(epic.id.as_str()))
                .count();
            format_epic_line(epic, count)
        })
        .collect();
    Ok(lines)
}

pub(crate) fn toggle_star(db: &mut Database, reference: &str) -> Result<Epic> {
    let mut epic = db.get_epic(&db.resolve_epic_id(reference)?)?;
    epic.starred = !epic.starred;
    db.update_epic(&epic)?;
    Ok(epic)
}

/// Archive an epic. Its stories keep their reference.
pub(crate) fn archive(db: &mut Database, reference: &str) -> Result<Epic> {
    let mut epic = db.get_epic(&db.resolve_epic_id(reference)?)?;
    if !epic.archived {
        epic.archived = true;
        db.update_epic(&epic)?;
    }
    Ok(epic)
}

#[cfg(test)]
#[path = "epic_tests.rs"]
mod tests;
