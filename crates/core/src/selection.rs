// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The single story selection shared by the board and the detail panel.

use crate::board::Board;
use crate::error::{Error, Result};
use crate::store::StoryStore;

/// At most one selected story.
///
/// The selected story need not be on the board: a filter change can hide
/// it while the detail panel keeps showing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection; `None` clears it.
    pub fn select(&mut self, story_id: Option<&str>) {
        self.selected = story_id.map(String::from);
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_on_board(&self, board: &Board) -> bool {
        self.selected.as_deref().is_some_and(|id| board.contains(id))
    }

    /// Clear the selection if the story is gone or soft-deleted.
    ///
    /// Returns true when the selection was cleared.
    pub fn retain_if_exists<S: StoryStore + ?Sized>(&mut self, store: &S) -> Result<bool> {
        let Some(id) = self.selected.as_deref() else {
            return Ok(false);
        };
        let live = match store.get_story(id) {
            Ok(story) => !story.deleted,
            Err(Error::StoryNotFound(_)) => false,
            Err(e) => return Err(e),
        };
        if !live {
            self.selected = None;
        }
        Ok(!live)
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
