// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::{fixture_time, TestContext};
use kb_core::Story;

#[test]
fn test_create_epic() {
    let mut ctx = TestContext::new();
    let epic = create(
        &mut ctx.db,
        &ctx.config,
        " Launch ",
        Some("#ff8800".into()),
        Some("none".into()),
        fixture_time(),
    )
    .unwrap();

    assert!(epic.id.starts_with("kb-ep-"));
    assert_eq!(epic.key, "KB-E1");
    assert_eq!(epic.name, "Launch");
    assert_eq!(epic.color.as_deref(), Some("#ff8800"));
    assert!(epic.description.is_none());
    assert_eq!(ctx.db.get_epic(&epic.id).unwrap(), epic);
}

#[test]
fn test_create_epic_rejects_blank_name() {
    let mut ctx = TestContext::new();
    assert!(create(&mut ctx.db, &ctx.config, "  ", None, None, fixture_time()).is_err());
}

#[test]
fn test_list_counts_live_stories_and_hides_archived() {
    let mut ctx = TestContext::new();
    ctx.create_epic("kb-ep-a", "Alpha").create_epic("kb-ep-b", "Beta");
    let mut deleted = Story::new(
        "kb-3".into(),
        "KB-3".into(),
        "Gone".into(),
        "todo".into(),
        fixture_time(),
    )
    .with_epic("kb-ep-a");
    deleted.deleted = true;
    ctx.insert_story(
        Story::new(
            "kb-1".into(),
            "KB-1".into(),
            "One".into(),
            "todo".into(),
            fixture_time(),
        )
        .with_epic("kb-ep-a"),
    )
    .insert_story(deleted);

    archive(&mut ctx.db, "kb-ep-b").unwrap();

    let lines = list(&ctx.db, false).unwrap();
    assert_eq!(lines, vec!["KB-EP-A kb-ep-a: Alpha [1 stories]"]);
    assert_eq!(list(&ctx.db, true).unwrap().len(), 2);
}

#[test]
fn test_toggle_star() {
    let mut ctx = TestContext::new();
    ctx.create_epic("kb-ep-a", "Alpha");

    assert!(toggle_star(&mut ctx.db, "kb-ep").unwrap().starred);
    assert!(!toggle_star(&mut ctx.db, "kb-ep-a").unwrap().starred);
}

#[test]
fn test_archive_is_idempotent_and_keeps_references() {
    let mut ctx = TestContext::new();
    ctx.create_epic("kb-ep-a", "Alpha");
    ctx.insert_story(
        Story::new(
            "kb-1".into(),
            "KB-1".into(),
            "One".into(),
            "todo".into(),
            fixture_time(),
        )
        .with_epic("kb-ep-a"),
    );

    assert!(archive(&mut ctx.db, "kb-ep-a").unwrap().archived);
    assert!(archive(&mut ctx.db, "kb-ep-a").unwrap().archived);
    assert_eq!(ctx.story("kb-1").epic_id.as_deref(), Some("kb-ep-a"));
}

#[test]
fn test_unknown_epic_fails() {
    let mut ctx = TestContext::new();
    assert!(toggle_star(&mut ctx.db, "kb-ep-x").is_err());
}
