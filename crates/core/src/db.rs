// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed story store.
//!
//! The [`Database`] struct implements [`StoryStore`] for stories and
//! epics. Due dates, comments and attachments are stored as JSON text.
//! Insertion order is kept through the `seq` column.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{Error, Result};
use crate::moves::StoryUpdate;
use crate::store::StoryStore;
use crate::story::{Epic, Story};

/// SQL schema for the board database.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS epics (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    key TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT,
    color TEXT,
    starred INTEGER NOT NULL DEFAULT 0,
    archived INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

-- epic_id is not a foreign key: stories may outlive their epic
CREATE TABLE IF NOT EXISTS stories (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    key TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT,
    epic_id TEXT,
    assignee TEXT,
    status TEXT NOT NULL,
    priority TEXT NOT NULL DEFAULT 'medium',
    type_of_work TEXT,
    due_dates TEXT NOT NULL DEFAULT '[]',
    created_at TEXT NOT NULL,
    completed_at TEXT,
    deleted INTEGER NOT NULL DEFAULT 0,
    deleted_at TEXT,
    comments TEXT NOT NULL DEFAULT '[]'
);

CREATE INDEX IF NOT EXISTS idx_stories_status ON stories(status);
CREATE INDEX IF NOT EXISTS idx_stories_epic ON stories(epic_id);
"#;

const STORY_COLUMNS: &str = "id, key, title, description, epic_id, assignee, status, priority,
     type_of_work, due_dates, start_date, created_at, completed_at, deleted, deleted_at,
     comments, attachments";

const EPIC_COLUMNS: &str =
    "id, key, name, description, color, starred, archived, created_at";

fn conversion_error(message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(Error::CorruptedData(message)),
    )
}

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value
        .parse()
        .map_err(|_| conversion_error(format!("invalid value '{value}' in column '{column}'")))
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(format!("invalid timestamp '{value}' in column '{column}'")))
}

fn parse_timestamp_opt(
    value: Option<String>,
    column: &str,
) -> std::result::Result<Option<DateTime<Utc>>, rusqlite::Error> {
    value.map(|v| parse_timestamp(&v, column)).transpose()
}

fn parse_date_opt(
    value: Option<String>,
    column: &str,
) -> std::result::Result<Option<NaiveDate>, rusqlite::Error> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                .map_err(|_| conversion_error(format!("invalid date '{v}' in column '{column}'")))
        })
        .transpose()
}

fn parse_json<T: DeserializeOwned>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    serde_json::from_str(value)
        .map_err(|_| conversion_error(format!("invalid JSON in column '{column}'")))
}

fn story_from_row(row: &Row<'_>) -> std::result::Result<Story, rusqlite::Error> {
    let priority: String = row.get(7)?;
    let due_dates: String = row.get(9)?;
    let start_date: Option<String> = row.get(10)?;
    let created_at: String = row.get(11)?;
    let completed_at: Option<String> = row.get(12)?;
    let deleted_at: Option<String> = row.get(14)?;
    let comments: String = row.get(15)?;
    let attachments: String = row.get(16)?;

    Ok(Story {
        id: row.get(0)?,
        key: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        epic_id: row.get(4)?,
        assignee: row.get(5)?,
        status: row.get(6)?,
        priority: parse_db(&priority, "priority")?,
        type_of_work: row.get(8)?,
        due_dates: parse_json(&due_dates, "due_dates")?,
        start_date: parse_date_opt(start_date, "start_date")?,
        created_at: parse_timestamp(&created_at, "created_at")?,
        completed_at: parse_timestamp_opt(completed_at, "completed_at")?,
        deleted: row.get(13)?,
        deleted_at: parse_timestamp_opt(deleted_at, "deleted_at")?,
        comments: parse_json(&comments, "comments")?,
        attachments: parse_json(&attachments, "attachments")?,
    })
}

fn epic_from_row(row: &Row<'_>) -> std::result::Result<Epic, rusqlite::Error> {
    let created_at: String = row.get(7)?;
    Ok(Epic {
        id: row.get(0)?,
        key: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        color: row.get(4)?,
        starred: row.get(5)?,
        archived: row.get(6)?,
        created_at: parse_timestamp(&created_at, "created_at")?,
    })
}

/// Run schema creation and all migrations on a database connection.
///
/// Migrations are idempotent and upgrade databases created before a
/// column existed.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    migrate_add_column(conn, "stories", "start_date", "TEXT")?;
    migrate_add_column(conn, "stories", "attachments", "TEXT NOT NULL DEFAULT '[]'")?;
    Ok(())
}

/// Migration helper: add a column if the table does not have it yet.
fn migrate_add_column(conn: &Connection, table: &str, column: &str, decl: &str) -> Result<()> {
    let has_column: bool = conn
        .query_row(
            &format!("SELECT COUNT(*) > 0 FROM pragma_table_info('{table}') WHERE name = ?1"),
            [column],
            |row| row.get(0),
        )
        .unwrap_or(false);

    if !has_column {
        conn.execute(&format!("ALTER TABLE {table} ADD COLUMN {column} {decl}"), [])?;
    }
    Ok(())
}

/// SQLite database connection with story store operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Number of stories and epics, for key generation.
    pub fn counts(&self) -> Result<(i64, i64)> {
        let stories: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM stories", [], |row| row.get(0))?;
        let epics: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM epics", [], |row| row.get(0))?;
        Ok((stories, epics))
    }

    pub fn story_exists(&self, id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM stories WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

impl StoryStore for Database {
    fn list_stories(&self) -> Result<Vec<Story>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {STORY_COLUMNS} FROM stories ORDER BY seq"))?;
        let stories = stmt
            .query_map([], story_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(stories)
    }

    fn get_story(&self, id: &str) -> Result<Story> {
        let story = self
            .conn
            .query_row(
                &format!("SELECT {STORY_COLUMNS} FROM stories WHERE id = ?1"),
                params![id],
                story_from_row,
            )
            .optional()?;
        story.ok_or_else(|| Error::StoryNotFound(id.to_string()))
    }

    fn create_story(&mut self, story: &Story) -> Result<()> {
        self.conn.execute(
            &format!(
                "INSERT INTO stories ({STORY_COLUMNS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)"
            ),
            params![
                story.id,
                story.key,
                story.title,
                story.description,
                story.epic_id,
                story.assignee,
                story.status,
                story.priority.as_str(),
                story.type_of_work,
                serde_json::to_string(&story.due_dates)?,
                story.start_date.map(|d| d.to_string()),
                story.created_at.to_rfc3339(),
                story.completed_at.map(|t| t.to_rfc3339()),
                story.deleted,
                story.deleted_at.map(|t| t.to_rfc3339()),
                serde_json::to_string(&story.comments)?,
                serde_json::to_string(&story.attachments)?,
            ],
        )?;
        Ok(())
    }

    /// Read, update and write back the story inside one transaction.
    fn apply_update(&mut self, update: &StoryUpdate) -> Result<Story> {
        let tx = self.conn.transaction()?;
        let mut story = tx
            .query_row(
                &format!("SELECT {STORY_COLUMNS} FROM stories WHERE id = ?1"),
                params![update.story_id],
                story_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::StoryNotFound(update.story_id.clone()))?;

        update.apply_to(&mut story);

        tx.execute(
            "UPDATE stories SET title = ?1, description = ?2, epic_id = ?3, assignee = ?4,
             status = ?5, priority = ?6, type_of_work = ?7, due_dates = ?8, start_date = ?9,
             completed_at = ?10 WHERE id = ?11",
            params![
                story.title,
                story.description,
                story.epic_id,
                story.assignee,
                story.status,
                story.priority.as_str(),
                story.type_of_work,
                serde_json::to_string(&story.due_dates)?,
                story.start_date.map(|d| d.to_string()),
                story.completed_at.map(|t| t.to_rfc3339()),
                story.id,
            ],
        )?;
        tx.commit()?;
        Ok(story)
    }

    fn soft_delete(&mut self, id: &str, at: DateTime<Utc>) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE stories SET deleted = 1, deleted_at = COALESCE(deleted_at, ?1) WHERE id = ?2",
            params![at.to_rfc3339(), id],
        )?;
        if affected == 0 {
            return Err(Error::StoryNotFound(id.to_string()));
        }
        Ok(())
    }

    fn list_epics(&self) -> Result<Vec<Epic>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {EPIC_COLUMNS} FROM epics ORDER BY seq"))?;
        let epics = stmt
            .query_map([], epic_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(epics)
    }

    fn get_epic(&self, id: &str) -> Result<Epic> {
        let epic = self
            .conn
            .query_row(
                &format!("SELECT {EPIC_COLUMNS} FROM epics WHERE id = ?1"),
                params![id],
                epic_from_row,
            )
            .optional()?;
        epic.ok_or_else(|| Error::EpicNotFound(id.to_string()))
    }

    fn create_epic(&mut self, epic: &Epic) -> Result<()> {
        self.conn.execute(
            &format!("INSERT INTO epics ({EPIC_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
            params![
                epic.id,
                epic.key,
                epic.name,
                epic.description,
                epic.color,
                epic.starred,
                epic.archived,
                epic.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn update_epic(&mut self, epic: &Epic) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE epics SET key = ?1, name = ?2, description = ?3, color = ?4,
             starred = ?5, archived = ?6 WHERE id = ?7",
            params![
                epic.key,
                epic.name,
                epic.description,
                epic.color,
                epic.starred,
                epic.archived,
                epic.id,
            ],
        )?;
        if affected == 0 {
            return Err(Error::EpicNotFound(epic.id.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
