// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kbrs - A local kanban board library.
//!
//! This crate provides the command layer for the `kb` CLI tool. Stories and
//! epics live in a SQLite database under `.kanban/`; the board itself is
//! projected on every read by [`kb_core`].
//!
//! # Initialization
//!
//! ```rust,ignore
//! use kbrs::{init_work_dir, find_work_dir, get_db_path, Config};
//! use kb_core::Database;
//!
//! // Initialize a new board
//! let work_dir = init_work_dir(Path::new("."), "proj")?;
//!
//! // Later, find and open an existing board
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod logging;
mod validate;

pub mod config;
pub mod error;
pub mod id;

pub use cli::{Cli, Command, EpicCommand, FilterArgs, OutputFormat, TypesCommand};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use commands::new::NewStory;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { prefix, path } => commands::init::run(prefix, path),
        Command::New {
            title,
            status,
            type_of_work,
            epic,
            assignee,
            priority,
            due,
            start,
            description,
            output,
        } => commands::new::run(
            NewStory {
                title,
                status,
                type_of_work,
                epic,
                assignee,
                priority,
                due,
                start,
                description,
            },
            output,
        ),
        Command::Epic(cmd) => commands::epic::run(cmd),
        Command::Board {
            filters,
            by_epic,
            output,
        } => commands::board::run(filters, by_epic, output),
        Command::Move { id, bucket } => commands::move_story::run(&id, &bucket),
        Command::Show { id, output } => commands::show::run(&id, output),
        Command::Edit { id, attr, value } => commands::edit::run(&id, &attr, &value),
        Command::Delete { id } => commands::delete::run(&id),
        Command::Types(cmd) => commands::types::run(cmd),
        Command::Export { path } => commands::export::run(&path),
        Command::Import { path } => commands::import::run(&path),
    }
}

/// Apply global flags, then run the command.
pub fn run_cli(cli: Cli) -> Result<()> {
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("cannot change to directory '{}': {}", dir, e),
            ))
        })?;
    }
    run(cli.command)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
