// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

const REVIEW_CONFIG: &str = r#"prefix = "test"

[board]
status_order = ["todo", "in-progress", "review", "done"]
done_status = "done"
default_status = "todo"
default_bucket = "todo"
type_of_work_options = ["feature", "bug"]

[board.bucket_map]
todo = "todo"
in-progress = "doing"
review = "doing"
done = "done"
"#;

fn board(temp: &TempDir, args: &[&str]) -> String {
    let output = kb()
        .arg("board")
        .args(args)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn empty_board_shows_every_column() {
    let temp = init_temp();
    let out = board(&temp, &[]);
    assert!(out.contains("todo (0)"));
    assert!(out.contains("in-progress (0)"));
    assert!(out.contains("done (0)"));
    assert!(out.contains("(empty)"));
}

#[test]
fn columns_follow_status_order() {
    let temp = init_temp();
    create_story(&temp, "Last", &["-s", "done"]);
    create_story(&temp, "First", &[]);

    let out = board(&temp, &[]);
    let todo = out.find("todo (1)").unwrap();
    let progress = out.find("in-progress (0)").unwrap();
    let done = out.find("done (1)").unwrap();
    assert!(todo < progress && progress < done, "{out}");
}

#[test]
fn several_statuses_share_a_column() {
    let temp = init_temp();
    std::fs::write(temp.path().join(".kanban/config.toml"), REVIEW_CONFIG).unwrap();
    create_story(&temp, "Coding", &["-s", "in-progress"]);
    create_story(&temp, "Reviewing", &["-s", "review"]);

    let out = board(&temp, &[]);
    assert!(out.contains("doing (2)"), "{out}");
    assert!(!out.contains("review ("), "{out}");
}

#[test]
fn status_filter_limits_stories() {
    let temp = init_temp();
    create_story(&temp, "Open work", &[]);
    create_story(&temp, "Finished work", &["-s", "done"]);

    let out = board(&temp, &["-s", "done"]);
    assert!(out.contains("Finished work"));
    assert!(!out.contains("Open work"));
    // Columns stay even when filtered empty.
    assert!(out.contains("todo (0)"));
}

#[test]
fn type_filter_and_due_filter_combine() {
    let temp = init_temp();
    let today = chrono::Local::now().date_naive();
    let today_str = today.format("%Y-%m-%d").to_string();
    create_story(&temp, "Urgent bug", &["-t", "bug", "--due", &today_str]);
    create_story(&temp, "Later bug", &["-t", "bug", "--due", "2099-01-01"]);
    create_story(&temp, "Urgent chore", &["-t", "chore", "--due", &today_str]);

    let out = board(&temp, &["-t", "bug", "--due", "today"]);
    assert!(out.contains("Urgent bug"), "{out}");
    assert!(!out.contains("Later bug"), "{out}");
    assert!(!out.contains("Urgent chore"), "{out}");
}

#[test]
fn unknown_due_filter_is_rejected() {
    let temp = init_temp();
    kb().args(["board", "--due", "yesterday"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid due filter"));
}

#[test]
fn by_epic_groups_stories() {
    let temp = init_temp();
    let epic = create_epic(&temp, "Launch");
    create_story(&temp, "In epic", &["-e", &epic]);
    create_story(&temp, "Loose", &[]);

    let out = board(&temp, &["--by-epic"]);
    assert!(out.contains("  Launch:"), "{out}");
    assert!(out.contains("  No epic:"), "{out}");
    assert!(out.contains("    TEST-1 In epic"), "{out}");
}

#[test]
fn json_output_lists_columns() {
    let temp = init_temp();
    create_story(&temp, "One", &[]);

    let out = board(&temp, &["-o", "json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let columns = value["columns"].as_array().unwrap();
    assert_eq!(columns[0]["bucket"], "todo");
    assert_eq!(columns[0]["stories"][0]["title"], "One");
    assert!(value["diagnostics"].as_array().unwrap().is_empty());
}

#[test]
fn unmapped_status_lands_in_default_bucket_with_warning() {
    let temp = init_temp();
    std::fs::write(
        temp.path().join(".kanban/config.toml"),
        REVIEW_CONFIG.replace("review = \"doing\"\n", ""),
    )
    .unwrap();
    create_story(&temp, "Awaiting review", &["-s", "review"]);

    kb().arg("board")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("todo (1)"))
        .stderr(predicate::str::contains("review"));
}
