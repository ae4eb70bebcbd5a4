// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[parameterized(
    empty = { "" },
    blank = { "   " },
    none_lower = { "none" },
    none_upper = { "NONE" },
)]
fn test_clear_values(value: &str) {
    assert!(is_clear_value(value));
    assert!(parse_optional(value).is_none());
    assert!(parse_optional_date(value).unwrap().is_none());
    assert!(parse_date_list(value).unwrap().is_empty());
}

#[test]
fn test_parse_optional_keeps_value() {
    assert_eq!(parse_optional("sam").as_deref(), Some("sam"));
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2026-10-14").unwrap(), date(2026, 10, 14));
    assert_eq!(parse_date(" 2026-10-14 ").unwrap(), date(2026, 10, 14));
}

#[parameterized(
    slashes = { "2026/10/14" },
    no_day = { "2026-10" },
    impossible = { "2026-02-30" },
    words = { "tomorrow" },
)]
fn test_parse_date_rejects(value: &str) {
    assert!(matches!(parse_date(value), Err(Error::InvalidDate(_))));
}

#[test]
fn test_parse_date_list() {
    let dates = parse_date_list("2026-10-20, 2026-10-15").unwrap();
    assert_eq!(dates, vec![date(2026, 10, 20), date(2026, 10, 15)]);
    assert!(parse_date_list("2026-10-20,soon").is_err());
}

#[test]
fn test_split_values() {
    let args = vec!["todo,done".to_string(), " review ".to_string(), ",".to_string()];
    assert_eq!(split_values(&args), vec!["todo", "done", "review"]);
}

#[test]
fn test_validate_assignee() {
    assert!(validate_assignee("sam").is_ok());
    assert!(validate_assignee(&"x".repeat(MAX_ASSIGNEE_LENGTH + 1)).is_err());
}
