// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn kb() -> Command {
    let mut cmd = cargo_bin_cmd!("kb");
    cmd.env_remove("KB_LOG").env("NO_COLOR", "1");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    kb().arg("init")
        .arg("--prefix")
        .arg("test")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to create a story and return its ID
pub fn create_story(temp: &TempDir, title: &str, extra: &[&str]) -> String {
    let output = kb()
        .arg("new")
        .arg(title)
        .args(extra)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);

    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .find(|s| s.starts_with("test-"))
        .unwrap()
        .trim_end_matches(':')
        .to_string()
}

/// Helper to create an epic and return its ID
pub fn create_epic(temp: &TempDir, name: &str) -> String {
    let output = kb()
        .args(["epic", "new", name])
        .current_dir(temp.path())
        .output()
        .unwrap();

    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .find(|s| s.starts_with("test-ep-"))
        .unwrap()
        .trim_end_matches(':')
        .to_string()
}

/// Run `kb show <id> -o json` and parse the result.
pub fn show_json(temp: &TempDir, id: &str) -> serde_json::Value {
    let output = kb()
        .args(["show", id, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}
