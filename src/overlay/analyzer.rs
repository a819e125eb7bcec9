//! Overlay-conflict analysis.
//!
//! For every overlay family and target, decide whether at most one
//! directive can ever be reached:
//! - Rule O1: at most one `_changes` directive outside every `choose_` block
//! - Rule O2: an unconditional directive excludes conditional ones (both families)
//! - Rule O3: conditional `_changes` directives must sit under different
//!   cases of a shared `choose_` block
//!
//! `add_` directives merge additively, so O3 is not applied to them. The
//! first broken rule aborts the check.

use super::choose::{Exclusivity, compare_splits, find_last_choose, is_conditional};
use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::family::OverlayFamily;
use super::finder::{FoundKey, find_family};
use super::report::{ConflictKind, ConflictReport, OverlayConflictError};
use crate::error::Result;
use crate::tree::Node;
use std::collections::BTreeMap;

/// Component name used when a document is checked as a whole.
pub const MAIN_COMPONENT: &str = "main";

/// Check a whole document.
///
/// When the root mapping has `component_key` (a coupled setup), each
/// top-level mapping is checked as an independent component. Otherwise
/// the root is one component, whatever its shape.
pub fn check_document(
    root: &Node,
    component_key: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<()> {
    let Some(mapping) = root.as_mapping().filter(|m| m.contains(component_key)) else {
        sink.record(Diagnostic::ComponentSelected {
            component: MAIN_COMPONENT.to_string(),
        });
        return check_tree(root, sink);
    };

    for entry in mapping.entries() {
        if entry.value.as_mapping().is_none() {
            continue;
        }
        sink.record(Diagnostic::ComponentSelected {
            component: entry.key.text.clone(),
        });
        check_tree(&entry.value, sink)?;
    }

    Ok(())
}

/// Check one component: `_changes` groups first, then `add_` groups, each
/// in target-name order.
pub fn check_tree(tree: &Node, sink: &mut dyn DiagnosticSink) -> Result<()> {
    for family in OverlayFamily::ALL {
        for (target, group) in group_by_target(find_family(tree, family)) {
            check_group(family, &target, &group, sink)?;
        }
    }
    Ok(())
}

/// Group directives by the key they are written as, keeping document
/// order inside each group.
pub fn group_by_target(found: Vec<FoundKey>) -> BTreeMap<String, Vec<FoundKey>> {
    let mut groups: BTreeMap<String, Vec<FoundKey>> = BTreeMap::new();
    for key in found {
        groups.entry(key.target().to_string()).or_default().push(key);
    }
    groups
}

/// Apply the overlay rules to every directive sharing one target.
pub fn check_group(
    family: OverlayFamily,
    target: &str,
    group: &[FoundKey],
    sink: &mut dyn DiagnosticSink,
) -> Result<()> {
    let (unconditional, conditional): (Vec<&FoundKey>, Vec<&FoundKey>) =
        group.iter().partition(|found| !is_conditional(&found.path));

    sink.record(Diagnostic::GroupChecked {
        family,
        target: target.to_string(),
        unconditional: unconditional.len(),
        conditional: conditional.len(),
    });

    // O1
    if family == OverlayFamily::Changes && unconditional.len() > 1 {
        return Err(conflict(
            family,
            target,
            ConflictKind::MultipleUnconditional,
            &unconditional,
        ));
    }

    // O2
    if let [general] = unconditional.as_slice()
        && !conditional.is_empty()
    {
        return Err(conflict(
            family,
            target,
            ConflictKind::UnconditionalWithConditional {
                general: (*general).clone(),
            },
            &conditional,
        ));
    }

    if family == OverlayFamily::Add {
        return Ok(());
    }

    // O3
    check_exclusive_pairs(family, target, &conditional, sink)
}

fn check_exclusive_pairs(
    family: OverlayFamily,
    target: &str,
    conditional: &[&FoundKey],
    sink: &mut dyn DiagnosticSink,
) -> Result<()> {
    let splits = conditional
        .iter()
        .map(|found| find_last_choose(&found.path).map(|split| (*found, split)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for (i, (first, first_split)) in splits.iter().enumerate() {
        for (second, second_split) in &splits[i + 1..] {
            let kind = match compare_splits(first_split, second_split) {
                Exclusivity::Exclusive { choose } => {
                    sink.record(Diagnostic::PairExclusive {
                        first: first.path.clone(),
                        second: second.path.clone(),
                        choose: choose.clone(),
                    });
                    continue;
                }
                Exclusivity::SameCase { choose, case } => ConflictKind::SameCase {
                    choose: choose.clone(),
                    case: case.to_string(),
                },
                Exclusivity::Unrelated => ConflictKind::UnrelatedChoose {
                    first: first_split.prefix.clone(),
                    second: second_split.prefix.clone(),
                },
            };
            return Err(conflict(family, target, kind, &[*first, *second]));
        }
    }

    Ok(())
}

fn conflict(
    family: OverlayFamily,
    target: &str,
    kind: ConflictKind,
    paths: &[&FoundKey],
) -> crate::error::LintError {
    OverlayConflictError::new(ConflictReport {
        family,
        target: target.to_string(),
        kind,
        paths: paths.iter().map(|found| (*found).clone()).collect(),
    })
    .into()
}
