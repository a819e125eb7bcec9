//! Overlay-conflict validation.
//!
//! Configuration fragments overlay variables through two directive
//! families, `<variable>_changes` and `add_<variable>`, which may be placed
//! inside `choose_<switch>` blocks. Switch values are unknown at this point,
//! so this module proves from key paths alone that no two directives of a
//! family on the same target can be active together.

mod analyzer;
mod choose;
mod diagnostics;
mod family;
mod finder;
mod report;


// Re-export public API
pub use analyzer::{MAIN_COMPONENT, check_document, check_group, check_tree, group_by_target};
pub use choose::{
    CHOOSE_MARKER, ChooseSplit, Exclusivity, MalformedPathError, compare_splits,
    find_last_choose, is_conditional, last_choose_index,
};
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use family::OverlayFamily;
pub use finder::{FoundKey, find_family, find_keys, find_paths};
pub use report::{ConflictKind, ConflictReport, OverlayConflictError};
