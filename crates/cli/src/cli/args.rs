// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;
use kb_core::{DueFilter, FilterState};

use crate::validate::split_values;

/// Board filter arguments. Values within one flag are OR'd.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Show only these statuses (comma-separated or repeated)
    #[arg(long, short = 's')]
    pub status: Vec<String>,

    /// Show only these types of work (comma-separated or repeated)
    #[arg(long = "type", short = 't')]
    pub type_of_work: Vec<String>,

    /// Due date window: all, today, next-week
    #[arg(long, default_value = "all", value_parser = parse_due_filter)]
    pub due: DueFilter,
}

impl FilterArgs {
    /// Build the engine filter state.
    pub fn to_filter_state(&self) -> FilterState {
        FilterState::new()
            .with_statuses(split_values(&self.status))
            .with_types_of_work(split_values(&self.type_of_work))
            .with_due(self.due)
    }
}

fn parse_due_filter(s: &str) -> Result<DueFilter, String> {
    s.parse().map_err(|e: kb_core::Error| e.to_string())
}
