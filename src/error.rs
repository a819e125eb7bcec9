//! Error types for overlay-lint.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code, and
//! every message is meant to be shown to the user as-is.

use crate::exit_codes;
use crate::loader::{DuplicateKeyError, SyntaxError};
use crate::overlay::{MalformedPathError, OverlayConflictError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for overlay-lint operations.
#[derive(Error, Debug)]
pub enum LintError {
    /// Invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// No extension variant of a base path exists.
    #[error("All file extensions tried and none worked for {}", .base.display())]
    FileNotFound { base: PathBuf, tried: Vec<PathBuf> },

    /// A resolved file or directory could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text is not well-formed YAML.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A mapping repeats a key.
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),

    /// Two overlay directives can be reached together.
    #[error(transparent)]
    OverlayConflict(#[from] OverlayConflictError),

    /// Internal invariant broken while splitting a key path.
    #[error(transparent)]
    MalformedPath(#[from] MalformedPathError),

    /// Summary of a `check` run in which some documents failed.
    #[error("{failed} of {total} documents failed validation")]
    CheckFailed {
        failed: usize,
        total: usize,
        exit_code: i32,
    },
}

impl LintError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintError::UserError(_) | LintError::Io { .. } => exit_codes::USER_ERROR,
            LintError::FileNotFound { .. } => exit_codes::NOT_FOUND,
            LintError::Syntax(_) | LintError::DuplicateKey(_) | LintError::OverlayConflict(_) => {
                exit_codes::VALIDATION_FAILURE
            }
            LintError::MalformedPath(_) => exit_codes::INTERNAL,
            LintError::CheckFailed { exit_code, .. } => *exit_code,
        }
    }

    /// Short machine-readable category name.
    pub fn kind(&self) -> &'static str {
        match self {
            LintError::UserError(_) => "user_error",
            LintError::FileNotFound { .. } => "file_not_found",
            LintError::Io { .. } => "io",
            LintError::Syntax(_) => "syntax",
            LintError::DuplicateKey(_) => "duplicate_key",
            LintError::OverlayConflict(_) => "overlay_conflict",
            LintError::MalformedPath(_) => "malformed_path",
            LintError::CheckFailed { .. } => "check_failed",
        }
    }

    /// Attach the source file to errors that report one.
    pub fn with_file(self, path: &Path) -> Self {
        let file = Some(path.to_path_buf());
        match self {
            LintError::Syntax(err) => LintError::Syntax(SyntaxError { file, ..err }),
            LintError::DuplicateKey(err) => {
                LintError::DuplicateKey(DuplicateKeyError { file, ..err })
            }
            LintError::OverlayConflict(err) => {
                LintError::OverlayConflict(OverlayConflictError { file, ..err })
            }
            other => other,
        }
    }
}

/// Result type alias for overlay-lint operations.
pub type Result<T> = std::result::Result<T, LintError>;
