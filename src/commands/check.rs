//! Implementation of the `overlay-lint check` command.
//!
//! Every input is validated independently: a failing document is reported
//! and the run moves on to the next one unless `fail_fast` is set.
//!
//! # Exit Codes
//!
//! - 0: All documents passed
//! - 1: User error (bad config, unreadable directory)
//! - 2: A document failed validation (syntax, duplicate key, overlay conflict)
//! - 3: A document was not found under any extension
//!
//! With several failures the exit code is that of the first one.

use super::resolve_config;
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{LintError, Result};
use crate::loader::{collect_documents, load_document};
use crate::overlay::{DiagnosticSink, TracingSink};
use chrono::Utc;
use serde_json::{Value, json};
use std::path::PathBuf;

/// Result of validating one input.
#[derive(Debug)]
pub struct DocumentOutcome {
    /// The resolved file, or the input path when it could not be resolved.
    pub file: PathBuf,
    /// Why the document failed, if it did.
    pub error: Option<LintError>,
}

impl DocumentOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Execute the `overlay-lint check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let mut config = resolve_config(args.config.as_deref())?;
    if args.fail_fast {
        config.fail_fast = true;
    }

    let inputs = expand_inputs(&args.paths, &config)?;
    let outcomes = run_check(&inputs, &config, &mut TracingSink);

    if args.json {
        let report = render_json(&outcomes);
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| LintError::UserError(format!("failed to serialize report: {}", e)))?;
        println!("{}", text);
    } else {
        print_outcomes(&outcomes);
    }

    summarize(&outcomes)
}

/// Replace directories by the YAML documents found under them.
pub fn expand_inputs(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let exclude = config.exclude_set()?;
    let mut inputs = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = collect_documents(path, &exclude)?;
            tracing::debug!(dir = %path.display(), count = found.len(), "collected documents");
            inputs.extend(found);
        } else {
            inputs.push(path.clone());
        }
    }

    Ok(inputs)
}

/// Validate each input in order.
pub fn run_check(
    inputs: &[PathBuf],
    config: &Config,
    sink: &mut dyn DiagnosticSink,
) -> Vec<DocumentOutcome> {
    let mut outcomes = Vec::with_capacity(inputs.len());

    for input in inputs {
        let outcome = match load_document(input, config, sink) {
            Ok(doc) => DocumentOutcome {
                file: doc.path,
                error: None,
            },
            Err(err) => {
                tracing::debug!(file = %input.display(), kind = err.kind(), "document failed");
                DocumentOutcome {
                    file: input.clone(),
                    error: Some(err),
                }
            }
        };

        let stop = config.fail_fast && !outcome.passed();
        outcomes.push(outcome);
        if stop {
            break;
        }
    }

    outcomes
}

/// The JSON form of a check run.
pub fn render_json(outcomes: &[DocumentOutcome]) -> Value {
    let documents: Vec<Value> = outcomes
        .iter()
        .map(|outcome| match &outcome.error {
            None => json!({
                "file": outcome.file.display().to_string(),
                "status": "ok",
            }),
            Some(err) => json!({
                "file": outcome.file.display().to_string(),
                "status": "failed",
                "kind": err.kind(),
                "message": err.to_string(),
            }),
        })
        .collect();

    json!({
        "checked_at": Utc::now().to_rfc3339(),
        "documents": documents,
    })
}

fn print_outcomes(outcomes: &[DocumentOutcome]) {
    for outcome in outcomes {
        match &outcome.error {
            None => println!("ok {}", outcome.file.display()),
            Some(err) => {
                eprintln!("FAILED {}", outcome.file.display());
                eprintln!("{}", err);
                eprintln!();
            }
        }
    }
}

fn summarize(outcomes: &[DocumentOutcome]) -> Result<()> {
    let failed: Vec<&LintError> = outcomes.iter().filter_map(|o| o.error.as_ref()).collect();

    match failed.first() {
        None => Ok(()),
        Some(first) => Err(LintError::CheckFailed {
            failed: failed.len(),
            total: outcomes.len(),
            exit_code: first.exit_code(),
        }),
    }
}
