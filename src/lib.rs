//! overlay-lint: duplicate-key and overlay-conflict validation for
//! conditional run-configuration YAML.
//!
//! Configuration fragments may override a variable with a
//! `<variable>_changes` block or extend it with `add_<variable>`, and may
//! place either inside `choose_<switch>` blocks. Before such a document is
//! handed to a resolver this crate proves that:
//! - no mapping defines the same key twice
//! - at most one overlay of each family on each variable can be reached
//!   for any combination of switch values
//!
//! ```
//! use overlay_lint::loader::parse;
//! use overlay_lint::overlay::check_document;
//!
//! let doc = parse("choose_mode:\n  a:\n    x_changes: {}\n  b:\n    x_changes: {}\n")?;
//! check_document(&doc, "general", &mut Vec::new())?;
//! # Ok::<(), overlay_lint::error::LintError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod loader;
pub mod logging;
pub mod overlay;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_support;
