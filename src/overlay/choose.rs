//! Locating the innermost `choose_` block on a key path.

use crate::tree::KeyPath;
use std::fmt;

/// Substring that marks a conditional block.
pub const CHOOSE_MARKER: &str = "choose_";

/// A path split around its innermost `choose_` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooseSplit {
    /// Segments up to and including the `choose_` key.
    pub prefix: KeyPath,
    /// The case label directly under it.
    pub case: String,
}

impl ChooseSplit {
    /// The case this path takes at the `choose_` block ending `shared`.
    ///
    /// `shared` must be a prefix of `self.prefix`.
    fn case_at(&self, shared: &KeyPath) -> &str {
        if self.prefix.len() == shared.len() {
            &self.case
        } else {
            &self.prefix.segments()[shared.len()]
        }
    }
}

/// How two conditional directives relate through their `choose_` blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusivity<'a> {
    /// Different cases of the same switch: never both reached.
    Exclusive { choose: &'a KeyPath },
    /// The same case of the same switch: reached together.
    SameCase { choose: &'a KeyPath, case: &'a str },
    /// Neither block encloses the other.
    Unrelated,
}

/// Compare two splits at the innermost `choose_` level they share.
pub fn compare_splits<'a>(a: &'a ChooseSplit, b: &'a ChooseSplit) -> Exclusivity<'a> {
    let shared = if b.prefix.starts_with(&a.prefix) {
        &a.prefix
    } else if a.prefix.starts_with(&b.prefix) {
        &b.prefix
    } else {
        return Exclusivity::Unrelated;
    };

    let case = a.case_at(shared);
    if case == b.case_at(shared) {
        Exclusivity::SameCase {
            choose: shared,
            case,
        }
    } else {
        Exclusivity::Exclusive { choose: shared }
    }
}

/// Index of the last `choose_` segment that has a case segment after it.
///
/// The final segment is the directive itself and never opens a block.
pub fn last_choose_index(path: &KeyPath) -> Option<usize> {
    let segments = path.segments();
    let candidates = segments.len().saturating_sub(1);
    segments[..candidates]
        .iter()
        .rposition(|segment| segment.contains(CHOOSE_MARKER))
}

/// True if the path passes through any `choose_` block.
pub fn is_conditional(path: &KeyPath) -> bool {
    last_choose_index(path).is_some()
}

/// Split `path` into the prefix ending at its last `choose_` block and
/// the case below it.
///
/// Fails when the path is not inside any `choose_` block; callers filter
/// those out first.
pub fn find_last_choose(path: &KeyPath) -> Result<ChooseSplit, MalformedPathError> {
    let index = last_choose_index(path).ok_or_else(|| MalformedPathError {
        path: path.clone(),
    })?;
    let segments = path.segments();

    Ok(ChooseSplit {
        prefix: KeyPath::new(segments[..=index].iter().cloned()),
        case: segments[index + 1].clone(),
    })
}

/// A path reached the choose locator without any `choose_` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedPathError {
    pub path: KeyPath,
}

impl fmt::Display for MalformedPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "internal error: ``{}`` is not inside a ``{}`` block",
            self.path, CHOOSE_MARKER
        )
    }
}

impl std::error::Error for MalformedPathError {}
