//! overlay-lint: validate overlay directives in run-configuration YAML.
//!
//! This is the main entry point for the `overlay-lint` CLI. It parses
//! arguments, sets up logging, dispatches to the command handler, and maps
//! errors to exit codes.

use overlay_lint::cli::Cli;
use overlay_lint::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose, cli.log_json);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
