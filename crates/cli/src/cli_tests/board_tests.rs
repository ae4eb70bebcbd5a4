// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use clap::Parser;
use kb_core::DueFilter;

fn parse_board(args: &[&str]) -> (FilterArgs, bool, OutputFormat) {
    let mut argv = vec!["kb", "board"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Board {
            filters,
            by_epic,
            output,
        } => (filters, by_epic, output),
        _ => unreachable!("parsed a different command"),
    }
}

#[test]
fn board_defaults() {
    let (filters, by_epic, output) = parse_board(&[]);
    assert!(filters.status.is_empty());
    assert!(filters.type_of_work.is_empty());
    assert_eq!(filters.due, DueFilter::All);
    assert!(!by_epic);
    assert_eq!(output, OutputFormat::Text);
    assert!(filters.to_filter_state().is_empty());
}

#[test]
fn board_filters_collect_into_sets() {
    let (filters, _, _) = parse_board(&["-s", "todo,done", "-s", "todo", "-t", "bug"]);
    let state = filters.to_filter_state();
    assert_eq!(state.statuses.len(), 2);
    assert!(state.statuses.contains("done"));
    assert!(state.types_of_work.contains("bug"));
}

#[test]
fn board_due_filter_values() {
    assert_eq!(parse_board(&["--due", "today"]).0.due, DueFilter::Today);
    assert_eq!(parse_board(&["--due", "next-week"]).0.due, DueFilter::NextWeek);
    assert!(Cli::try_parse_from(["kb", "board", "--due", "someday"]).is_err());
}

#[test]
fn board_by_epic_and_json() {
    let (_, by_epic, output) = parse_board(&["--by-epic", "-o", "json"]);
    assert!(by_epic);
    assert_eq!(output, OutputFormat::Json);
}

#[test]
fn move_takes_id_and_bucket() {
    let cli = Cli::try_parse_from(["kb", "move", "kb-1a", "done"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Move { ref id, ref bucket } if id == "kb-1a" && bucket == "done"
    ));
    assert!(Cli::try_parse_from(["kb", "move", "kb-1a"]).is_err());
}
