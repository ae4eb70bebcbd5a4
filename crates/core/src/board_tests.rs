// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::filter::{matches, DueFilter};
use chrono::{Duration, TimeZone, Utc};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

fn make_story(id: &str, status: &str) -> Story {
    Story::new(
        id.into(),
        id.to_uppercase(),
        format!("Story {id}"),
        status.into(),
        Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap(),
    )
}

fn make_epic(id: &str) -> Epic {
    Epic::new(
        id.into(),
        id.to_uppercase(),
        format!("Epic {id}"),
        Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap(),
    )
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn one_to_one() -> (BucketMap, Vec<String>) {
    (
        BucketMap::new()
            .with("todo", "todo")
            .with("in-progress", "in-progress")
            .with("done", "done"),
        strings(&["todo", "in-progress", "done"]),
    )
}

fn project_all(stories: &[Story], filter: &FilterState) -> Projection {
    let (map, order) = one_to_one();
    project(stories, &[], &map, &order, "todo", filter, today())
}

/// A mixed collection: several statuses, types, due dates, one deleted story.
fn fixture() -> Vec<Story> {
    let statuses = ["todo", "in-progress", "done", "todo", "legacy"];
    let types = [Some("bug"), None, Some("feature"), Some("chore")];
    (0..40)
        .map(|i| {
            let mut story = make_story(&format!("kb-{i:02}"), statuses[i % statuses.len()]);
            story.type_of_work = types[i % types.len()].map(String::from);
            if i % 3 != 0 {
                story.due_dates = vec![today() + Duration::days((i % 10) as i64 - 1)];
            }
            story.deleted = i % 7 == 0;
            story
        })
        .collect()
}

fn filter_states() -> Vec<FilterState> {
    let mut states = Vec::new();
    for statuses in [vec![], vec!["todo"], vec!["done", "legacy"]] {
        for types in [vec![], vec!["bug"], vec!["feature", "chore"]] {
            for due in [DueFilter::All, DueFilter::Today, DueFilter::NextWeek] {
                states.push(
                    FilterState::new()
                        .with_statuses(statuses.clone())
                        .with_types_of_work(types.clone())
                        .with_due(due),
                );
            }
        }
    }
    states
}

// ─────────────────────────────────────────────────────────────────────────────
// Column order
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn columns_follow_status_order() {
    let projection = project_all(&[], &FilterState::new());
    assert_eq!(
        projection.board.buckets(),
        vec!["todo", "in-progress", "done"]
    );
    assert_eq!(projection.board.story_count(), 0);
}

#[test]
fn shared_buckets_appear_once_at_first_status() {
    let map = BucketMap::new()
        .with("backlog", "todo")
        .with("review", "doing")
        .with("todo", "todo")
        .with("in-progress", "doing")
        .with("done", "done");
    let order = strings(&["review", "backlog", "in-progress", "todo", "done"]);

    let projection = project(&[], &[], &map, &order, "todo", &FilterState::new(), today());
    assert_eq!(projection.board.buckets(), vec!["doing", "todo", "done"]);
}

#[test]
fn unmapped_status_lands_in_default_bucket_with_diagnostic() {
    let stories = vec![make_story("a", "legacy"), make_story("b", "todo")];
    let projection = project_all(&stories, &FilterState::new());

    assert_eq!(
        projection.board.column("todo").unwrap().story_ids,
        strings(&["a", "b"])
    );
    assert_eq!(
        projection.diagnostics,
        vec![Diagnostic::UnmappedStatus {
            story_id: "a".into(),
            status: "legacy".into(),
        }]
    );
}

#[test]
fn default_bucket_outside_order_is_appended() {
    let (map, order) = one_to_one();
    let stories = vec![
        make_story("a", "done"),
        make_story("b", "legacy"),
        make_story("c", "todo"),
    ];

    let projection = project(&stories, &[], &map, &order, "inbox", &FilterState::new(), today());
    assert_eq!(
        projection.board.buckets(),
        vec!["todo", "in-progress", "done", "inbox"]
    );
    assert_eq!(projection.board.bucket_of("b"), Some("inbox"));
}

#[test]
fn mapped_status_missing_from_order_gets_its_own_column() {
    let (map, order) = one_to_one();
    let map = map.with("review", "review");
    let stories = vec![make_story("a", "review")];

    let projection = project(&stories, &[], &map, &order, "todo", &FilterState::new(), today());
    assert_eq!(projection.board.bucket_of("a"), Some("review"));
    assert!(projection.diagnostics.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties over a mixed fixture and every filter combination
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn deleted_stories_never_projected() {
    let stories = fixture();
    for state in filter_states() {
        let projection = project_all(&stories, &state);
        for story in stories.iter().filter(|s| s.deleted) {
            assert!(
                !projection.board.contains(&story.id),
                "{} visible under {:?}",
                story.id,
                state
            );
        }
    }
}

#[test]
fn projected_ids_equal_filter_passing_set_exactly_once() {
    let stories = fixture();
    for state in filter_states() {
        let projection = project_all(&stories, &state);
        let mut projected: Vec<&str> = projection
            .board
            .columns
            .iter()
            .flat_map(|c| c.story_ids.iter().map(String::as_str))
            .collect();
        projected.sort_unstable();

        let mut expected: Vec<&str> = stories
            .iter()
            .filter(|s| matches(s, &state, today()))
            .map(|s| s.id.as_str())
            .collect();
        expected.sort_unstable();

        assert_eq!(projected, expected, "under {state:?}");
    }
}

#[test]
fn order_within_bucket_matches_source_order() {
    let stories = fixture();
    let position: HashMap<&str, usize> = stories
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.as_str(), i))
        .collect();

    for state in filter_states() {
        let projection = project_all(&stories, &state);
        for column in &projection.board.columns {
            let positions: Vec<usize> = column
                .story_ids
                .iter()
                .map(|id| position[id.as_str()])
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "column {} out of order under {:?}",
                column.bucket,
                state
            );
        }
    }
}

#[test]
fn no_filters_include_every_live_story_once() {
    let stories = fixture();
    let projection = project_all(&stories, &FilterState::new());
    let live = stories.iter().filter(|s| !s.deleted).count();

    assert_eq!(projection.board.story_count(), live);
}

#[test]
fn reverse_sorted_source_keeps_reverse_order() {
    let stories = vec![
        make_story("c", "todo"),
        make_story("b", "todo"),
        make_story("a", "todo"),
    ];
    let projection = project_all(&stories, &FilterState::new());
    assert_eq!(
        projection.board.column("todo").unwrap().story_ids,
        strings(&["c", "b", "a"])
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Epics
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn orphan_epic_is_projected_with_diagnostic() {
    let stories = vec![
        make_story("a", "todo").with_epic("ep-1"),
        make_story("b", "todo").with_epic("ep-gone"),
    ];
    let (map, order) = one_to_one();
    let projection = project(
        &stories,
        &[make_epic("ep-1")],
        &map,
        &order,
        "todo",
        &FilterState::new(),
        today(),
    );

    assert!(projection.board.contains("b"));
    assert_eq!(
        projection.diagnostics,
        vec![Diagnostic::OrphanEpicReference {
            story_id: "b".into(),
            epic_id: "ep-gone".into(),
        }]
    );
}

#[test]
fn filtered_out_stories_produce_no_diagnostics() {
    let mut story = make_story("a", "legacy").with_epic("ep-gone");
    story.deleted = true;
    let projection = project_all(&[story], &FilterState::new());
    assert!(projection.diagnostics.is_empty());
}

#[test]
fn group_by_epic_orders_groups_and_trails_no_epic() {
    let stories = vec![
        make_story("a", "todo"),
        make_story("b", "todo").with_epic("ep-2"),
        make_story("c", "todo").with_epic("ep-1"),
        make_story("d", "todo").with_epic("ep-gone"),
        make_story("e", "todo").with_epic("ep-2"),
    ];
    let epics = vec![make_epic("ep-1"), make_epic("ep-2")];
    let projection = project_all(&stories, &FilterState::new());
    let column = projection.board.column("todo").unwrap();

    let groups = group_by_epic(column, &stories, &epics);
    assert_eq!(
        groups,
        vec![
            EpicGroup {
                epic_id: Some("ep-2".into()),
                story_ids: strings(&["b", "e"]),
            },
            EpicGroup {
                epic_id: Some("ep-1".into()),
                story_ids: strings(&["c"]),
            },
            EpicGroup {
                epic_id: None,
                story_ids: strings(&["a", "d"]),
            },
        ]
    );
}

#[test]
fn group_by_epic_on_empty_column() {
    let column = Column {
        bucket: "todo".into(),
        story_ids: Vec::new(),
    };
    assert!(group_by_epic(&column, &[], &[]).is_empty());
}
