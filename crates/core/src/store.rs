// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The story store contract and an in-memory implementation.
//!
//! The store is the single owner of mutable story data. The board engine
//! reads snapshots from it and hands back [`StoryUpdate`] descriptors.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::moves::StoryUpdate;
use crate::story::{Epic, Story};

/// CRUD access to stories and epics.
pub trait StoryStore {
    /// All stories, including soft-deleted ones, in source order.
    fn list_stories(&self) -> Result<Vec<Story>>;

    fn get_story(&self, id: &str) -> Result<Story>;

    fn create_story(&mut self, story: &Story) -> Result<()>;

    /// Apply an update atomically and return the updated story.
    fn apply_update(&mut self, update: &StoryUpdate) -> Result<Story>;

    /// Mark a story deleted. Deleting twice keeps the first timestamp.
    fn soft_delete(&mut self, id: &str, at: DateTime<Utc>) -> Result<()>;

    fn list_epics(&self) -> Result<Vec<Epic>>;

    fn get_epic(&self, id: &str) -> Result<Epic>;

    fn create_epic(&mut self, epic: &Epic) -> Result<()>;

    /// Replace an existing epic's fields.
    fn update_epic(&mut self, epic: &Epic) -> Result<()>;

    /// Resolve a full id or a unique id prefix to a story id.
    fn resolve_story_id(&self, prefix: &str) -> Result<String> {
        let stories = self.list_stories()?;
        resolve_prefix(prefix, stories.iter().map(|s| s.id.as_str()))
            .ok_or_else(|| Error::StoryNotFound(prefix.to_string()))?
    }

    /// Resolve a full id or a unique id prefix to an epic id.
    fn resolve_epic_id(&self, prefix: &str) -> Result<String> {
        let epics = self.list_epics()?;
        resolve_prefix(prefix, epics.iter().map(|e| e.id.as_str()))
            .ok_or_else(|| Error::EpicNotFound(prefix.to_string()))?
    }
}

impl<S: StoryStore + ?Sized> StoryStore for &mut S {
    fn list_stories(&self) -> Result<Vec<Story>> {
        (**self).list_stories()
    }

    fn get_story(&self, id: &str) -> Result<Story> {
        (**self).get_story(id)
    }

    fn create_story(&mut self, story: &Story) -> Result<()> {
        (**self).create_story(story)
    }

    fn apply_update(&mut self, update: &StoryUpdate) -> Result<Story> {
        (**self).apply_update(update)
    }

    fn soft_delete(&mut self, id: &str, at: DateTime<Utc>) -> Result<()> {
        (**self).soft_delete(id, at)
    }

    fn list_epics(&self) -> Result<Vec<Epic>> {
        (**self).list_epics()
    }

    fn get_epic(&self, id: &str) -> Result<Epic> {
        (**self).get_epic(id)
    }

    fn create_epic(&mut self, epic: &Epic) -> Result<()> {
        (**self).create_epic(epic)
    }

    fn update_epic(&mut self, epic: &Epic) -> Result<()> {
        (**self).update_epic(epic)
    }
}

/// Exact match wins; otherwise the prefix must be unique.
///
/// Returns `None` when nothing matches.
fn resolve_prefix<'a, I>(prefix: &str, ids: I) -> Option<Result<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut matches = Vec::new();
    for id in ids {
        if id == prefix {
            return Some(Ok(id.to_string()));
        }
        if id.starts_with(prefix) {
            matches.push(id.to_string());
        }
    }
    match matches.len() {
        0 => None,
        1 => matches.pop().map(Ok),
        _ => Some(Err(Error::AmbiguousId {
            prefix: prefix.to_string(),
            matches,
        })),
    }
}

/// Vec-backed store that keeps insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    stories: Vec<Story>,
    epics: Vec<Epic>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stories(stories: Vec<Story>) -> Self {
        MemoryStore {
            stories,
            epics: Vec::new(),
        }
    }

    fn story_mut(&mut self, id: &str) -> Result<&mut Story> {
        self.stories
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::StoryNotFound(id.to_string()))
    }
}

impl StoryStore for MemoryStore {
    fn list_stories(&self) -> Result<Vec<Story>> {
        Ok(self.stories.clone())
    }

    fn get_story(&self, id: &str) -> Result<Story> {
        self.stories
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| Error::StoryNotFound(id.to_string()))
    }

    fn create_story(&mut self, story: &Story) -> Result<()> {
        if self.stories.iter().any(|s| s.id == story.id) {
            return Err(Error::CorruptedData(format!(
                "duplicate story id: {}",
                story.id
            )));
        }
        self.stories.push(story.clone());
        Ok(())
    }

    fn apply_update(&mut self, update: &StoryUpdate) -> Result<Story> {
        let story = self.story_mut(&update.story_id)?;
        update.apply_to(story);
        Ok(story.clone())
    }

    fn soft_delete(&mut self, id: &str, at: DateTime<Utc>) -> Result<()> {
        let story = self.story_mut(id)?;
        if !story.deleted {
            story.deleted = true;
            story.deleted_at = Some(at);
        }
        Ok(())
    }

    fn list_epics(&self) -> Result<Vec<Epic>> {
        Ok(self.epics.clone())
    }

    fn get_epic(&self, id: &str) -> Result<Epic> {
        self.epics
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| Error::EpicNotFound(id.to_string()))
    }

    fn create_epic(&mut self, epic: &Epic) -> Result<()> {
        if self.epics.iter().any(|e| e.id == epic.id) {
            return Err(Error::CorruptedData(format!(
                "duplicate epic id: {}",
                epic.id
            )));
        }
        self.epics.push(epic.clone());
        Ok(())
    }

    fn update_epic(&mut self, epic: &Epic) -> Result<()> {
        let existing = self
            .epics
            .iter_mut()
            .find(|e| e.id == epic.id)
            .ok_or_else(|| Error::EpicNotFound(epic.id.clone()))?;
        *existing = epic.clone();
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
