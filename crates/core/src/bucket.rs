// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status to bucket classification.
//!
//! A bucket is a board column. Several statuses may share one bucket; the
//! table is plain data loaded from configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::story::Story;

/// Mapping of status string to bucket id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketMap(BTreeMap<String, String>);

impl BucketMap {
    pub fn new() -> Self {
        BucketMap(BTreeMap::new())
    }

    /// Adds or replaces the bucket for a status (builder pattern).
    pub fn with(mut self, status: impl Into<String>, bucket: impl Into<String>) -> Self {
        self.insert(status, bucket);
        self
    }

    pub fn insert(&mut self, status: impl Into<String>, bucket: impl Into<String>) {
        self.0.insert(status.into(), bucket.into());
    }

    /// Returns the bucket mapped to `status`, if any.
    pub fn bucket_for(&self, status: &str) -> Option<&str> {
        self.0.get(status).map(String::as_str)
    }

    pub fn contains_status(&self, status: &str) -> bool {
        self.0.contains_key(status)
    }

    /// Returns the statuses from `statuses` that have no bucket.
    pub fn unmapped<'a, I>(&self, statuses: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a String>,
    {
        statuses
            .into_iter()
            .filter(|s| !self.contains_status(s))
            .map(String::as_str)
            .collect()
    }
}

impl<S: Into<String>, B: Into<String>> FromIterator<(S, B)> for BucketMap {
    fn from_iter<T: IntoIterator<Item = (S, B)>>(iter: T) -> Self {
        BucketMap(
            iter.into_iter()
                .map(|(s, b)| (s.into(), b.into()))
                .collect(),
        )
    }
}

/// Classify a story into its bucket.
///
/// Statuses missing from `bucket_map` land in `default_bucket`. This never
/// fails; callers that care about the gap check [`BucketMap::bucket_for`].
pub fn classify<'a>(story: &Story, bucket_map: &'a BucketMap, default_bucket: &'a str) -> &'a str {
    bucket_map
        .bucket_for(&story.status)
        .unwrap_or(default_bucket)
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;
