//! Diagnostic sinks for the analyzer.
//!
//! The analyzer reports what it looked at through a [`DiagnosticSink`]
//! handed in by the caller instead of a process-wide logger.

use super::family::OverlayFamily;
use crate::tree::KeyPath;

/// Something the analyzer observed while checking a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A top-level component was selected for checking.
    ComponentSelected { component: String },
    /// An overlay group was examined.
    GroupChecked {
        family: OverlayFamily,
        target: String,
        unconditional: usize,
        conditional: usize,
    },
    /// Two conditional directives were proven mutually exclusive.
    PairExclusive {
        first: KeyPath,
        second: KeyPath,
        choose: KeyPath,
    },
}

/// Receiver of analyzer diagnostics.
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in memory.
impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::ComponentSelected { component } => {
                tracing::debug!(%component, "checking component");
            }
            Diagnostic::GroupChecked {
                family,
                target,
                unconditional,
                conditional,
            } => {
                tracing::debug!(%family, %target, unconditional, conditional, "overlay group checked");
            }
            Diagnostic::PairExclusive {
                first,
                second,
                choose,
            } => {
                tracing::debug!(%first, %second, %choose, "overlay pair is mutually exclusive");
            }
        }
    }
}
