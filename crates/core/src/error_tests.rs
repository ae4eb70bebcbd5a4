// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    invalid_bucket = { Error::InvalidBucket("review".into()), "review" },
    story_not_found = { Error::StoryNotFound("kb-123".into()), "kb-123" },
    epic_not_found = { Error::EpicNotFound("ep-9".into()), "ep-9" },
    unknown_type = { Error::UnknownTypeOfWork("spike".into()), "kb types add spike" },
    field_required = { Error::FieldRequired { field: "Title" }, "Title is required" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_invalid_status_lists_vocabulary() {
    let err = Error::InvalidStatus {
        status: "blocked".into(),
        valid: "todo, in-progress, done".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("blocked"));
    assert!(msg.contains("todo, in-progress, done"));
}

#[test]
fn error_ambiguous_id_lists_matches() {
    let err = Error::AmbiguousId {
        prefix: "kb-1".into(),
        matches: vec!["kb-1a".into(), "kb-1b".into()],
    };
    assert!(err.to_string().contains("kb-1a, kb-1b"));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
