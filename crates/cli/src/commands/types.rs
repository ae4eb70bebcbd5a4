// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::TypesCommand;
use crate::config::{find_work_dir, Config};
use crate::error::Result;

pub fn run(cmd: TypesCommand) -> Result<()> {
    let work_dir = find_work_dir()?;
    let mut config = Config::load(&work_dir)?;
    match cmd {
        TypesCommand::List => {
            for name in list(&config) {
                println!("{}", name);
            }
        }
        TypesCommand::Add { name } => {
            if add(&mut config, &work_dir, &name)? {
                println!("Added type of work '{}'", name.trim());
            } else {
                println!("Type of work '{}' already exists", name.trim());
            }
        }
    }
    Ok(())
}

pub(crate) fn list(config: &Config) -> &[String] {
    &config.board.type_of_work_options
}

/// Register a type of work and persist the config when it grew.
pub(crate) fn add(config: &mut Config, work_dir: &Path, name: &str) -> Result<bool> {
    let added = config.board.add_type_of_work(name)?;
    if added {
        config.save(work_dir)?;
        tracing::info!(name = name.trim(), "registered type of work");
    }
    Ok(added)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
