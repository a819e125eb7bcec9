//! Overlay families and the key names that belong to them.

use std::fmt;

/// One of the two overlay directive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OverlayFamily {
    /// `<variable>_changes`: replaces `<variable>`.
    Changes,
    /// `add_<variable>`: merges additively into `<variable>`.
    Add,
}

impl OverlayFamily {
    /// Families in the order they are checked.
    pub const ALL: [OverlayFamily; 2] = [OverlayFamily::Changes, OverlayFamily::Add];

    /// Substring a key must contain to belong to the family.
    pub fn include(self) -> &'static str {
        match self {
            OverlayFamily::Changes => "_changes",
            OverlayFamily::Add => "add_",
        }
    }

    /// Substring that disqualifies a key. `add_<var>_changes` is an `add_`.
    pub fn exclude(self) -> Option<&'static str> {
        match self {
            OverlayFamily::Changes => Some("add_"),
            OverlayFamily::Add => None,
        }
    }

    /// Whether a key name belongs to the family.
    pub fn matches(self, key: &str) -> bool {
        key.contains(self.include()) && !self.exclude().is_some_and(|ex| key.contains(ex))
    }

    /// The fixed note appended to every conflict in this family.
    pub fn rules_note(self) -> &'static str {
        match self {
            OverlayFamily::Changes => {
                "Note that if there are more than one ``_changes`` in the file, they need \
                 to be placed inside different cases of the same ``choose_`` and these \
                 options need to be compatible (only one ``_changes`` can be reached at a \
                 time).\nUse ``add_<variable>_changes`` if you want to add/overwrite \
                 variables inside the main ``_changes``."
            }
            OverlayFamily::Add => {
                "Note that multiple ``add_<variable>`` in a single file are compatible as \
                 long as they are included inside ``choose_`` blocks. An \
                 ``add_<variable>`` out of a ``choose_`` block and the same \
                 ``add_<variable>`` inside of a ``choose_`` block are considered \
                 incompatible. If the general ``add_<variable>`` should be added as a \
                 default, please include it to ``<variable>`` instead."
            }
        }
    }
}

impl fmt::Display for OverlayFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.include())
    }
}
