//! Command implementations for overlay-lint.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod paths;
mod show;

#[cfg(test)]
mod tests;

use crate::cli::Command;
use crate::config::Config;
use crate::error::{LintError, Result};
use std::path::Path;

pub use check::{DocumentOutcome, cmd_check, expand_inputs, render_json, run_check};
pub use paths::{DirectiveRow, cmd_paths, list_directives};
pub use show::{cmd_show, render_document};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => cmd_check(args),
        Command::Paths(args) => cmd_paths(args),
        Command::Show(args) => cmd_show(args),
    }
}

/// Load the config for a command run from `--config` or the working directory.
fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().map_err(|e| {
        LintError::UserError(format!("failed to determine current directory: {}", e))
    })?;
    Config::discover(explicit, &cwd)
}
