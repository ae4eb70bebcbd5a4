// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Utc;
use yare::parameterized;

fn story_with_status(status: &str) -> Story {
    Story::new(
        "kb-1".into(),
        "KB-1".into(),
        "Story".into(),
        status.into(),
        Utc::now(),
    )
}

fn shared_map() -> BucketMap {
    BucketMap::new()
        .with("todo", "todo")
        .with("blocked", "todo")
        .with("in-progress", "doing")
        .with("review", "doing")
        .with("done", "done")
}

#[parameterized(
    todo = { "todo", "todo" },
    blocked_shares_todo = { "blocked", "todo" },
    in_progress = { "in-progress", "doing" },
    review_shares_doing = { "review", "doing" },
    done = { "done", "done" },
)]
fn classify_mapped_status(status: &str, expected: &str) {
    let map = shared_map();
    assert_eq!(classify(&story_with_status(status), &map, "inbox"), expected);
}

#[parameterized(
    unknown = { "archived" },
    empty = { "" },
    case_differs = { "TODO" },
)]
fn classify_unmapped_status_falls_back(status: &str) {
    let map = shared_map();
    assert_eq!(classify(&story_with_status(status), &map, "inbox"), "inbox");
}

#[test]
fn classify_with_empty_map_always_defaults() {
    let map = BucketMap::new();
    assert_eq!(classify(&story_with_status("todo"), &map, "todo"), "todo");
    assert_eq!(classify(&story_with_status("done"), &map, "todo"), "todo");
}

#[test]
fn unmapped_reports_only_missing_statuses() {
    let map = shared_map();
    let statuses: Vec<String> = ["todo", "qa", "done", "shipped"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(map.unmapped(&statuses), vec!["qa", "shipped"]);
}

#[test]
fn bucket_map_from_iter_and_toml_shape() {
    let map: BucketMap = [("todo", "todo"), ("done", "done")].into_iter().collect();
    assert_eq!(map.bucket_for("done"), Some("done"));

    let parsed: BucketMap = serde_json::from_str(r#"{"todo":"todo","done":"done"}"#).unwrap();
    assert_eq!(parsed, map);
}
