// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing and validation of raw command-line values.

use chrono::NaiveDate;

use crate::error::{Error, Result};

pub const MAX_ASSIGNEE_LENGTH: usize = 100;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns true when a value asks for an optional field to be cleared.
pub fn is_clear_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none")
}

/// `None` for a clear value, otherwise the value as given.
pub fn parse_optional(value: &str) -> Option<String> {
    if is_clear_value(value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

pub fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>> {
    if is_clear_value(value) {
        return Ok(None);
    }
    parse_date(value).map(Some)
}

/// Parse a comma-separated list of dates; a clear value yields no dates.
pub fn parse_date_list(value: &str) -> Result<Vec<NaiveDate>> {
    if is_clear_value(value) {
        return Ok(Vec::new());
    }
    split_values(&[value.to_string()])
        .iter()
        .map(|d| parse_date(d))
        .collect()
}

/// Flatten repeated and comma-separated arguments into trimmed values.
pub fn split_values(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

/// Validate that an assignee is within length limits
pub fn validate_assignee(assignee: &str) -> Result<()> {
    let trimmed = assignee.trim();
    if trimmed.len() > MAX_ASSIGNEE_LENGTH {
        return Err(kb_core::Error::FieldTooLong {
            field: "Assignee",
            actual: trimmed.len(),
            max: MAX_ASSIGNEE_LENGTH,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
