// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kb-core: board organization engine for the kb kanban tracker
//!
//! This crate provides the story model, the bucket classifier, the filter
//! engine, the board projector and the move coordinator, along with the
//! store contract and its SQLite implementation used by the kb CLI.

pub mod board;
pub mod bucket;
pub mod config;
pub mod db;
pub mod editor;
pub mod error;
pub mod filter;
pub mod jsonl;
pub mod moves;
pub mod selection;
pub mod session;
pub mod store;
pub mod story;

pub use board::{group_by_epic, project, Board, Column, Diagnostic, EpicGroup, Projection};
pub use bucket::{classify, BucketMap};
pub use config::{BoardConfig, ConfigWarning};
pub use db::Database;
pub use editor::{plan_edit, StoryEdit};
pub use error::{Error, Result};
pub use filter::{filter_stories, DueFilter, FilterState};
pub use moves::{plan_move, Change, StoryUpdate};
pub use selection::Selection;
pub use session::BoardSession;
pub use store::{MemoryStore, StoryStore};
pub use story::{Attachment, Comment, Epic, Priority, Story};
