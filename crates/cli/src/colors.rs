// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for board output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Column headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Keys and ids: light grey
    pub const LITERAL: u8 = 250;
    /// Secondary details: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

/// Wraps text in terminal colors when enabled, passes it through otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    /// Palette for stdout, honoring `NO_COLOR`/`COLOR`.
    pub fn detect() -> Self {
        Palette::new(should_colorize())
    }

    fn paint(&self, code: u8, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", fg256(code), text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(codes::HEADER, text)
    }

    pub fn literal(&self, text: &str) -> String {
        self.paint(codes::LITERAL, text)
    }

    pub fn context(&self, text: &str) -> String {
        self.paint(codes::CONTEXT, text)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
