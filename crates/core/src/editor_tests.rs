// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 15, 30, 0).unwrap()
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

fn make_story() -> Story {
    let mut story = Story::new(
        "kb-1".into(),
        "KB-1".into(),
        "Original".into(),
        "todo".into(),
        Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap(),
    );
    story.assignee = Some("alice".into());
    story
}

fn config() -> BoardConfig {
    BoardConfig::default()
}

#[parameterized(
    empty = { "" },
    spaces = { "   " },
    newline = { "\n\t" },
)]
fn blank_title_is_required(title: &str) {
    let err = plan_edit(&make_story(), StoryEdit::new().title(title), &config(), now()).unwrap_err();
    assert!(matches!(err, Error::FieldRequired { field: "Title" }));
}

#[test]
fn overlong_title_is_rejected() {
    let title = "x".repeat(MAX_TITLE_LENGTH + 1);
    let err = plan_edit(&make_story(), StoryEdit::new().title(title), &config(), now()).unwrap_err();
    assert!(matches!(err, Error::FieldTooLong { field: "Title", .. }));
}

#[test]
fn title_is_trimmed() {
    let update = plan_edit(
        &make_story(),
        StoryEdit::new().title("  Renamed  "),
        &config(),
        now(),
    )
    .unwrap();
    assert_eq!(update.title.as_deref(), Some("Renamed"));
}

#[test]
fn unchanged_fields_collapse_to_empty_update() {
    let edit = StoryEdit::new()
        .title("Original")
        .status("todo")
        .priority(Priority::Medium)
        .assignee(Some("alice".into()))
        .epic(None)
        .due_dates(Vec::new());
    let update = plan_edit(&make_story(), edit, &config(), now()).unwrap();
    assert!(update.is_empty(), "{update:?}");
}

#[test]
fn status_outside_vocabulary_is_rejected() {
    let err = plan_edit(
        &make_story(),
        StoryEdit::new().status("blocked"),
        &config(),
        now(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("todo, in-progress, done"));
}

#[test]
fn status_to_done_stamps_completion() {
    let update = plan_edit(&make_story(), StoryEdit::new().status("done"), &config(), now()).unwrap();
    assert_eq!(update.status.as_deref(), Some("done"));
    assert_eq!(update.completed_at, Change::Set(now()));
}

#[test]
fn status_away_from_done_clears_completion() {
    let mut story = make_story();
    story.status = "done".into();
    story.completed_at = Some(now());

    let update = plan_edit(&story, StoryEdit::new().status("todo"), &config(), now()).unwrap();
    assert_eq!(update.completed_at, Change::Clear);
}

#[test]
fn unknown_type_of_work_is_rejected_until_added() {
    let mut config = config();
    let edit = StoryEdit::new().type_of_work(Some("spike".into()));

    let err = plan_edit(&make_story(), edit.clone(), &config, now()).unwrap_err();
    assert!(matches!(err, Error::UnknownTypeOfWork(ref t) if t == "spike"));

    config.add_type_of_work("spike").unwrap();
    let update = plan_edit(&make_story(), edit, &config, now()).unwrap();
    assert_eq!(update.type_of_work, Change::Set("spike".into()));
}

#[test]
fn blank_optional_text_clears_field() {
    let update = plan_edit(
        &make_story(),
        StoryEdit::new().assignee(Some("  ".into())),
        &config(),
        now(),
    )
    .unwrap();
    assert_eq!(update.assignee, Change::Clear);
}

#[test]
fn due_dates_are_normalized_before_compare() {
    let mut story = make_story();
    story.due_dates = vec![date(3), date(9)];

    let same = plan_edit(
        &story,
        StoryEdit::new().due_dates(vec![date(9), date(3), date(9)]),
        &config(),
        now(),
    )
    .unwrap();
    assert!(same.due_dates.is_none());

    let changed = plan_edit(
        &story,
        StoryEdit::new().due_dates(vec![date(20), date(3)]),
        &config(),
        now(),
    )
    .unwrap();
    assert_eq!(changed.due_dates, Some(vec![date(3), date(20)]));
}

#[test]
fn start_date_can_be_set_and_cleared() {
    let mut story = make_story();
    let update = plan_edit(
        &story,
        StoryEdit::new().start_date(Some(date(5))),
        &config(),
        now(),
    )
    .unwrap();
    update.apply_to(&mut story);
    assert_eq!(story.start_date, Some(date(5)));

    let update = plan_edit(&story, StoryEdit::new().start_date(None), &config(), now()).unwrap();
    assert_eq!(update.start_date, Change::Clear);
}

#[test]
fn edit_applies_through_update() {
    let mut story = make_story();
    let update = plan_edit(
        &story,
        StoryEdit::new()
            .description(Some("More context".into()))
            .priority(Priority::High)
            .epic(Some("ep-1".into())),
        &config(),
        now(),
    )
    .unwrap();
    update.apply_to(&mut story);

    assert_eq!(story.description.as_deref(), Some("More context"));
    assert_eq!(story.priority, Priority::High);
    assert_eq!(story.epic_id.as_deref(), Some("ep-1"));
}
