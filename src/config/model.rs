//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for overlay-lint.
///
/// This struct represents the contents of `.overlay-lint.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Loading
    // =========================================================================
    /// Suffixes appended to a base path, tried in order.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Top-level key that records where a validated document was loaded from.
    #[serde(default = "default_provenance_key")]
    pub provenance_key: String,

    // =========================================================================
    // Validation
    // =========================================================================
    /// Top-level key that marks a coupled setup; its presence makes every
    /// top-level mapping an independently checked component.
    #[serde(default = "default_component_key")]
    pub component_key: String,

    /// Glob patterns excluded when walking directories.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Stop a `check` run at the first failing document.
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            provenance_key: default_provenance_key(),
            component_key: default_component_key(),
            exclude: Vec::new(),
            fail_fast: false,
        }
    }
}
