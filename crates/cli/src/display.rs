// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for boards, stories and epics.

use std::collections::HashMap;

use kb_core::{group_by_epic, Column, Epic, Projection, Story};

use crate::colors::Palette;

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Wrap text at word boundaries if it's a single line.
///
/// Multi-line content is returned as-is to preserve user formatting.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in content.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines.join("\n")
}

/// Format a single story line for board output.
///
/// `KB-3 Fix login [bug] (high) @sam due 2026-10-20`
pub fn format_story_line(story: &Story, palette: &Palette) -> String {
    let mut line = format!("{} {}", palette.literal(&story.key), story.title);
    let mut details = Vec::new();
    if let Some(kind) = &story.type_of_work {
        details.push(format!("[{kind}]"));
    }
    if story.priority != kb_core::Priority::Medium {
        details.push(format!("({})", story.priority));
    }
    if let Some(assignee) = &story.assignee {
        details.push(format!("@{assignee}"));
    }
    if let Some(next) = story.due_dates.first() {
        details.push(format!("due {next}"));
    }
    if !details.is_empty() {
        line.push(' ');
        line.push_str(&palette.context(&details.join(" ")));
    }
    line
}

fn format_column_header(column: &Column, palette: &Palette) -> String {
    format!(
        "{} {}",
        palette.header(&column.bucket),
        palette.context(&format!("({})", column.story_ids.len()))
    )
}

/// Render a projected board: one block per column, optionally grouped by epic.
pub fn format_board(
    projection: &Projection,
    stories: &[Story],
    epics: &[Epic],
    by_epic: bool,
    palette: &Palette,
) -> String {
    let by_id: HashMap<&str, &Story> = stories.iter().map(|s| (s.id.as_str(), s)).collect();
    let epic_names: HashMap<&str, &str> =
        epics.iter().map(|e| (e.id.as_str(), e.name.as_str())).collect();
    let mut output = Vec::new();

    for (i, column) in projection.board.columns.iter().enumerate() {
        if i > 0 {
            output.push(String::new());
        }
        output.push(format_column_header(column, palette));

        if column.story_ids.is_empty() {
            output.push(format!("  {}", palette.context("(empty)")));
            continue;
        }

        if by_epic {
            for group in group_by_epic(column, stories, epics) {
                let name = group
                    .epic_id
                    .as_deref()
                    .and_then(|id| epic_names.get(id).copied())
                    .unwrap_or("No epic");
                output.push(format!("  {name}:"));
                for id in &group.story_ids {
                    if let Some(story) = by_id.get(id.as_str()) {
                        output.push(format!("    {}", format_story_line(story, palette)));
                    }
                }
            }
        } else {
            for id in &column.story_ids {
                if let Some(story) = by_id.get(id.as_str()) {
                    output.push(format!("  {}", format_story_line(story, palette)));
                }
            }
        }
    }

    output.join("\n")
}

/// Format story details for the show command.
pub fn format_story_details(story: &Story, bucket: &str, epic: Option<&Epic>) -> String {
    let mut output = Vec::new();

    output.push(format!("[{}] {}", story.key, story.id));
    output.push(format!("Title: {}", story.title));
    output.push(format!("Status: {} (bucket: {})", story.status, bucket));
    output.push(format!("Priority: {}", story.priority));
    if let Some(kind) = &story.type_of_work {
        output.push(format!("Type: {}", kind));
    }
    if let Some(assignee) = &story.assignee {
        output.push(format!("Assignee: {}", assignee));
    }
    match (&story.epic_id, epic) {
        (Some(_), Some(epic)) => output.push(format!("Epic: {} ({})", epic.name, epic.key)),
        (Some(id), None) => output.push(format!("Epic: {} (missing)", id)),
        (None, _) => {}
    }
    if let Some(start) = story.start_date {
        output.push(format!("Start: {}", start));
    }
    if !story.due_dates.is_empty() {
        let dates: Vec<String> = story.due_dates.iter().map(|d| d.to_string()).collect();
        output.push(format!("Due: {}", dates.join(", ")));
    }
    output.push(format!(
        "Created: {}",
        story.created_at.format("%Y-%m-%d %H:%M")
    ));
    if let Some(completed) = story.completed_at {
        output.push(format!("Completed: {}", completed.format("%Y-%m-%d %H:%M")));
    }
    if story.deleted {
        output.push("Deleted: yes".to_string());
    }

    if let Some(description) = &story.description {
        output.push(String::new());
        output.push("Description:".to_string());
        for line in wrap_text(description, WRAP_WIDTH).lines() {
            output.push(format!("    {}", line));
        }
    }

    if !story.comments.is_empty() {
        output.push(String::new());
        output.push("Comments:".to_string());
        for comment in &story.comments {
            let author = comment.author.as_deref().unwrap_or("anonymous");
            output.push(format!(
                "  {} {}",
                comment.created_at.format("%Y-%m-%d %H:%M"),
                author
            ));
            for line in wrap_text(&comment.body, WRAP_WIDTH).lines() {
                output.push(format!("    {}", line));
            }
        }
    }

    if !story.attachments.is_empty() {
        output.push(String::new());
        output.push("Attachments:".to_string());
        for attachment in &story.attachments {
            output.push(format!("  {} {}", attachment.name, attachment.url));
        }
    }

    output.join("\n")
}

/// Format an epic line for `kb epic list`.
pub fn format_epic_line(epic: &Epic, story_count: usize) -> String {
    let mut flags = String::new();
    if epic.starred {
        flags.push_str(" *");
    }
    if epic.archived {
        flags.push_str(" (archived)");
    }
    format!(
        "{} {}: {} [{} stories]{}",
        epic.key, epic.id, epic.name, story_count, flags
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
