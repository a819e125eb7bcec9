//! CLI argument parsing for overlay-lint.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// overlay-lint: validate overlay directives in run-configuration YAML.
///
/// Checks that no mapping repeats a key and that at most one
/// `<variable>_changes` / `add_<variable>` overlay can be reached for any
/// combination of `choose_` switch values.
#[derive(Parser, Debug)]
#[command(name = "overlay-lint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for overlay-lint.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate documents.
    ///
    /// Each path is a base path (extensions are probed) or a directory
    /// (walked for YAML files).
    Check(CheckArgs),

    /// List the overlay directives found in a document.
    Paths(PathsArgs),

    /// Load, validate and print a document with its provenance.
    Show(ShowArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Documents or directories to check.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Config file (default: .overlay-lint.yaml in the current directory).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Stop at the first failing document.
    #[arg(long)]
    pub fail_fast: bool,
}

/// Arguments for the `paths` command.
#[derive(Parser, Debug)]
pub struct PathsArgs {
    /// Document to inspect (extensions are probed).
    pub path: PathBuf,

    /// Config file (default: .overlay-lint.yaml in the current directory).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Document to print (extensions are probed).
    pub path: PathBuf,

    /// Config file (default: .overlay-lint.yaml in the current directory).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_with_flags() {
        let cli = Cli::try_parse_from([
            "overlay-lint",
            "-v",
            "check",
            "configs/echam",
            "configs/fesom",
            "--json",
            "--fail-fast",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.paths.len(), 2);
                assert!(args.json);
                assert!(args.fail_fast);
                assert!(args.config.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_check_requires_a_path() {
        assert!(Cli::try_parse_from(["overlay-lint", "check"]).is_err());
    }

    #[test]
    fn test_parse_show_with_config() {
        let cli =
            Cli::try_parse_from(["overlay-lint", "show", "echam", "--config", "lint.yaml"]).unwrap();
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.path, PathBuf::from("echam"));
                assert_eq!(args.config, Some(PathBuf::from("lint.yaml")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
