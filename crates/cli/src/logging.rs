// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging for the `kb` binary.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter used when `KB_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `KB_LOG`, falling back to [`DEFAULT_FILTER`]
/// when the variable is unset or does not parse.
pub fn filter() -> EnvFilter {
    env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber. Calling it twice is harmless.
pub fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
