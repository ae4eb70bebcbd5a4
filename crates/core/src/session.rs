// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A board session: the caller side of the engine.
//!
//! The session owns a store handle, the board config, the active filters,
//! and the selection. UI events come in as method calls; every read is a fresh
//! projection over the store's current contents.

use chrono::{DateTime, NaiveDate, Utc};

use crate::board::{project, Projection};
use crate::config::BoardConfig;
use crate::editor::{plan_edit, StoryEdit};
use crate::error::{Error, Result};
use crate::filter::FilterState;
use crate::moves::{plan_move, StoryUpdate};
use crate::selection::Selection;
use crate::store::StoryStore;
use crate::story::Story;

pub struct BoardSession<S: StoryStore> {
    store: S,
    config: BoardConfig,
    filters: FilterState,
    selection: Selection,
}

impl<S: StoryStore> BoardSession<S> {
    /// Start a session, logging any tolerated configuration gaps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the config fails validation.
    pub fn new(store: S, config: BoardConfig) -> Result<Self> {
        for warning in config.validate()? {
            tracing::warn!("board config: {}", warning);
        }
        Ok(BoardSession {
            store,
            config,
            filters: FilterState::default(),
            selection: Selection::default(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    /// Recompute the board from the store's current contents.
    pub fn project(&self, today: NaiveDate) -> Result<Projection> {
        let stories = self.store.list_stories()?;
        let epics = self.store.list_epics()?;
        let projection = project(
            &stories,
            &epics,
            &self.config.bucket_map,
            &self.config.status_order,
            &self.config.default_bucket,
            &self.filters,
            today,
        );
        for diagnostic in &projection.diagnostics {
            tracing::warn!("{}", diagnostic);
        }
        tracing::debug!(
            columns = projection.board.columns.len(),
            stories = projection.board.story_count(),
            "projected board"
        );
        Ok(projection)
    }

    /// Handle a drop of `story_id` on `target_bucket`.
    ///
    /// An empty update is returned without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBucket`] when the bucket has no status; nothing
    /// is applied. A soft-deleted story is [`Error::StoryNotFound`]. Store
    /// errors are propagated.
    pub fn on_move_story(
        &mut self,
        story_id: &str,
        target_bucket: &str,
        now: DateTime<Utc>,
    ) -> Result<StoryUpdate> {
        let story = self.live_story(story_id, "move")?;
        let update = match plan_move(&story, target_bucket, &self.config, now) {
            Ok(update) => update,
            Err(e @ Error::InvalidBucket(_)) => {
                tracing::warn!("move of {} rejected: {}", story_id, e);
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        if !update.is_empty() {
            self.store.apply_update(&update)?;
            tracing::debug!(
                story = story_id,
                bucket = target_bucket,
                fields = ?update.changed_fields(),
                "moved story"
            );
        }
        Ok(update)
    }

    /// Handle a detail-panel edit of `story_id`.
    ///
    /// # Errors
    ///
    /// Soft-deleted stories are reported as [`Error::StoryNotFound`].
    pub fn on_edit_story(
        &mut self,
        story_id: &str,
        edit: StoryEdit,
        now: DateTime<Utc>,
    ) -> Result<StoryUpdate> {
        let story = self.live_story(story_id, "edit")?;
        let update = plan_edit(&story, edit, &self.config, now)?;
        if !update.is_empty() {
            self.store.apply_update(&update)?;
        }
        Ok(update)
    }

    /// Fetch a story that is still on the board.
    fn live_story(&self, story_id: &str, action: &str) -> Result<Story> {
        let story = self.store.get_story(story_id)?;
        if story.is_deleted() {
            tracing::warn!("{} of {} rejected: story is deleted", action, story_id);
            return Err(Error::StoryNotFound(story_id.to_string()));
        }
        Ok(story)
    }

    pub fn on_select_story(&mut self, story_id: Option<&str>) {
        self.selection.select(story_id);
    }

    /// Soft-delete a story, dropping it from the selection if selected.
    pub fn delete_story(&mut self, story_id: &str, now: DateTime<Utc>) -> Result<()> {
        self.store.soft_delete(story_id, now)?;
        self.selection.retain_if_exists(&self.store)?;
        Ok(())
    }

    /// Register a new type of work for the rest of the session.
    pub fn add_type_of_work(&mut self, name: &str) -> Result<bool> {
        self.config.add_type_of_work(name)
    }

    /// End the session, returning the store and the (possibly grown) config.
    pub fn into_parts(self) -> (S, BoardConfig) {
        (self.store, self.config)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
