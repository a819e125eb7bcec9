//! Depth-first search for mapping keys by name.

use super::family::OverlayFamily;
use crate::tree::{KeyPath, Node, Position};

/// A matching key: its full path and where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundKey {
    pub path: KeyPath,
    pub position: Position,
}

impl FoundKey {
    /// The overlay target: the directive key itself.
    pub fn target(&self) -> &str {
        self.path.last().unwrap_or_default()
    }
}

/// Collect every key whose name contains `include` and not `exclude`, in
/// document order.
///
/// Matching does not stop the descent, so directives nested under other
/// directives are found too. Sequence items add no path segment.
pub fn find_keys(tree: &Node, include: &str, exclude: Option<&str>) -> Vec<FoundKey> {
    let mut found = Vec::new();
    let matches =
        |name: &str| name.contains(include) && !exclude.is_some_and(|ex| name.contains(ex));
    walk(tree, &KeyPath::root(), &matches, &mut found);
    found
}

/// Like [`find_keys`] but returns only the paths.
pub fn find_paths(tree: &Node, include: &str, exclude: Option<&str>) -> Vec<KeyPath> {
    find_keys(tree, include, exclude)
        .into_iter()
        .map(|found| found.path)
        .collect()
}

/// Every directive of `family` in `tree`.
pub fn find_family(tree: &Node, family: OverlayFamily) -> Vec<FoundKey> {
    let mut found = Vec::new();
    walk(tree, &KeyPath::root(), &|name| family.matches(name), &mut found);
    found
}

fn walk(
    node: &Node,
    current: &KeyPath,
    matches: &dyn Fn(&str) -> bool,
    found: &mut Vec<FoundKey>,
) {
    match node {
        Node::Mapping(mapping) => {
            for entry in mapping.entries() {
                let path = current.child(entry.key.text.as_str());
                if matches(entry.key.text.as_str()) {
                    found.push(FoundKey {
                        path: path.clone(),
                        position: entry.key.position,
                    });
                }
                walk(&entry.value, &path, matches, found);
            }
        }
        Node::Sequence(items) => {
            for item in items {
                walk(item, current, matches, found);
            }
        }
        Node::Scalar(_) => {}
    }
}
