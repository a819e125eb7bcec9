//! Document loading.
//!
//! Turns raw text into a [`Node`](crate::tree::Node) tree while refusing
//! any mapping that defines a key twice, and wraps that with the on-disk
//! concerns around it:
//! - extension probing (`""`, `.yml`, `.yaml`, `.YML`, `.YAML` by default)
//! - tab-aware syntax errors
//! - overlay validation of the parsed tree
//! - provenance annotation of validated documents

mod builder;
mod discover;
mod document;
mod errors;


// Re-export public API
pub use builder::parse;
pub use discover::{collect_documents, resolve_document};
pub use document::{
    Document, LOADED_FROM_FILE, annotate_provenance, load_document, load_str, parse_document,
};
pub(crate) use errors::display_file;
pub use errors::{DuplicateKeyError, SyntaxError, SyntaxErrorKind, TabLine, find_tab_lines};
