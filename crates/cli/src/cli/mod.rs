// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use kb_core::Priority;

pub use args::FilterArgs;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    s.parse().map_err(|e: kb_core::Error| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "kb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A local kanban board for stories and epics")]
#[command(
    long_about = "A local kanban board for stories and epics.\n\n\
    Stories move between columns; each column collects one or more statuses."
)]
pub struct Cli {
    /// Run as if kb was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a board in the current directory
    #[command(after_help = "\
Examples:
  kb init                    Use the directory name as prefix
  kb init --prefix web       Use an explicit prefix
  kb init --path ../other    Initialize another directory")]
    Init {
        /// Prefix for story ids and keys (2+ lowercase alphanumeric)
        #[arg(long)]
        prefix: Option<String>,

        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Create a new story
    #[command(after_help = "\
Examples:
  kb new \"Fix login\"                       Story in the default status
  kb new \"Crash on save\" -t bug --priority high
  kb new \"Launch post\" -e kb-ep-1a2b --due 2026-11-02
  kb new \"Spike\" -s in-progress -a sam      Start work right away")]
    New {
        /// Story title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Initial status (defaults to the configured default status)
        #[arg(long, short = 's')]
        status: Option<String>,

        /// Type of work (must be registered with `kb types add`)
        #[arg(long = "type", short = 't')]
        type_of_work: Option<String>,

        /// Epic id or unique id prefix
        #[arg(long, short = 'e')]
        epic: Option<String>,

        /// Assign the story to someone
        #[arg(long, short = 'a')]
        assignee: Option<String>,

        /// Priority: low, medium, high
        #[arg(long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// Due date YYYY-MM-DD (comma-separated or repeated)
        #[arg(long)]
        due: Vec<String>,

        /// Start date YYYY-MM-DD
        #[arg(long)]
        start: Option<String>,

        /// Longer description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Manage epics
    #[command(subcommand)]
    Epic(EpicCommand),

    /// Show the board
    #[command(after_help = "\
Examples:
  kb board                         All visible stories
  kb board -s todo,in-progress     Only these statuses
  kb board -t bug --due today      Bugs due today
  kb board --by-epic               Group each column by epic
  kb board -o json                 Columns as JSON")]
    Board {
        #[command(flatten)]
        filters: FilterArgs,

        /// Group stories within each column by epic
        #[arg(long)]
        by_epic: bool,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Move a story to another column
    #[command(after_help = "\
Examples:
  kb move kb-1a2b done      Drop the story on the done column")]
    Move {
        /// Story id or unique id prefix
        id: String,

        /// Target bucket (column)
        bucket: String,
    },

    /// Show story details
    Show {
        /// Story id or unique id prefix
        id: String,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Edit a story attribute
    #[command(after_help = "\
Attributes:
  title, description, status, priority, type, assignee, epic, due, start

Examples:
  kb edit kb-1a2b title \"Fix login flow\"
  kb edit kb-1a2b due 2026-11-01,2026-11-15
  kb edit kb-1a2b assignee none             Clear the assignee")]
    Edit {
        /// Story id or unique id prefix
        id: String,

        /// Attribute to edit
        attr: String,

        /// New value (`none` clears optional attributes)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Delete a story (it stays in the database, hidden from the board)
    Delete {
        /// Story id or unique id prefix
        id: String,
    },

    /// Manage types of work
    #[command(subcommand)]
    Types(TypesCommand),

    /// Export stories and epics to a JSONL file
    Export {
        /// Destination file
        path: String,
    },

    /// Import stories and epics from a JSONL file
    Import {
        /// Source file
        path: String,
    },
}

/// Epic management commands.
#[derive(Subcommand)]
pub enum EpicCommand {
    /// Create an epic
    New {
        /// Epic name
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Display color (e.g. "#ff8800")
        #[arg(long)]
        color: Option<String>,

        /// Longer description
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// List epics
    List {
        /// Include archived epics
        #[arg(long)]
        all: bool,
    },

    /// Toggle the star on an epic
    Star {
        /// Epic id or unique id prefix
        id: String,
    },

    /// Archive an epic
    Archive {
        /// Epic id or unique id prefix
        id: String,
    },
}

/// Type of work commands.
#[derive(Subcommand)]
pub enum TypesCommand {
    /// List registered types of work
    List,

    /// Register a new type of work
    Add {
        /// Type name
        #[arg(value_parser = non_empty_string)]
        name: String,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
