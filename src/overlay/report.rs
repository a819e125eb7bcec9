//! Conflict reports and their user-facing rendering.

use super::family::OverlayFamily;
use super::finder::FoundKey;
use crate::loader::display_file;
use crate::tree::KeyPath;
use std::fmt;
use std::path::PathBuf;

/// Which overlay rule a group broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// More than one instance outside every `choose_` block.
    MultipleUnconditional,
    /// One instance outside every `choose_` block and others inside.
    UnconditionalWithConditional { general: FoundKey },
    /// Two instances under the same case of the same `choose_` block.
    SameCase { choose: KeyPath, case: String },
    /// Two instances under `choose_` blocks that do not enclose each other.
    UnrelatedChoose { first: KeyPath, second: KeyPath },
}

/// A broken overlay rule: family, target and the offending directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictReport {
    pub family: OverlayFamily,
    pub target: String,
    pub kind: ConflictKind,
    pub paths: Vec<FoundKey>,
}

/// Overlay directives on one target can be reached together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayConflictError {
    pub file: Option<PathBuf>,
    pub report: ConflictReport,
}

impl OverlayConflictError {
    pub fn new(report: ConflictReport) -> Self {
        Self { file: None, report }
    }
}

impl fmt::Display for OverlayConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = &self.report;
        let family = report.family;
        let file = display_file(&self.file);

        write!(f, "Overlay conflict (``{}``): ", family)?;
        match &report.kind {
            ConflictKind::MultipleUnconditional => {
                write!(
                    f,
                    "More than one ``{}`` out of a ``choose_`` in {}:",
                    report.target, file
                )?;
            }
            ConflictKind::UnconditionalWithConditional { general } => {
                write!(
                    f,
                    "The general ``{}`` (line {}) and ``{}`` in ``choose_`` are not compatible in {}:",
                    general.path, general.position.line, report.target, file
                )?;
            }
            ConflictKind::SameCase { choose, case } => {
                write!(
                    f,
                    "The following ``{}`` can be accessed simultaneously in {} \
                     (both under case ``{}`` of ``{}``):",
                    report.target, file, case, choose
                )?;
            }
            ConflictKind::UnrelatedChoose { first, second } => {
                write!(
                    f,
                    "The following ``{}`` can be accessed simultaneously in {} \
                     (``{}`` and ``{}`` are unrelated switches, so their cases \
                     cannot be proven exclusive):",
                    report.target, file, first, second
                )?;
            }
        }

        for found in &report.paths {
            write!(f, "\n    - {} (line {})", found.path, found.position.line)?;
        }

        write!(f, "\n\n{}", family.rules_note())
    }
}

impl std::error::Error for OverlayConflictError {}
