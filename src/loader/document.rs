//! Full document loading: resolve, read, parse, validate, annotate.

use super::builder::parse;
use super::discover::resolve_document;
use crate::config::Config;
use crate::error::{LintError, Result};
use crate::overlay::{DiagnosticSink, check_document};
use crate::tree::{Mapping, Node, Scalar};
use std::path::{Path, PathBuf};

/// Key under the provenance mapping that records the resolved file.
pub const LOADED_FROM_FILE: &str = "loaded_from_file";

/// A validated document and the file it came from.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub root: Node,
}

/// Parse and validate `source` as if it had been read from `path`.
///
/// Errors carry `path` so their messages are self-contained.
pub fn load_str(
    source: &str,
    path: &Path,
    config: &Config,
    sink: &mut dyn DiagnosticSink,
) -> Result<Node> {
    let root = parse(source).map_err(|e| e.with_file(path))?;
    check_document(&root, &config.component_key, sink).map_err(|e| e.with_file(path))?;
    Ok(root)
}

/// Load the document at `base`, probing the configured extensions.
///
/// On success the root mapping gains a `<provenance_key>` entry recording
/// the resolved path. Provenance is added after validation and is never
/// itself checked.
pub fn load_document(
    base: &Path,
    config: &Config,
    sink: &mut dyn DiagnosticSink,
) -> Result<Document> {
    let (path, source) = read_document(base, config)?;

    let mut root = load_str(&source, &path, config, sink)?;
    annotate_provenance(&mut root, &config.provenance_key, &path);

    Ok(Document { path, root })
}

/// Resolve and parse the document at `base` without overlay validation or
/// provenance. Duplicate keys and malformed text are still rejected.
pub fn parse_document(base: &Path, config: &Config) -> Result<Document> {
    let (path, source) = read_document(base, config)?;
    let root = parse(&source).map_err(|e| e.with_file(&path))?;
    Ok(Document { path, root })
}

fn read_document(base: &Path, config: &Config) -> Result<(PathBuf, String)> {
    let path = resolve_document(base, &config.extensions)?;

    let source = std::fs::read_to_string(&path).map_err(|source| LintError::Io {
        path: path.clone(),
        source,
    })?;

    Ok((path, source))
}

/// Record `path` under `key` in the root mapping. Non-mapping roots are
/// left untouched.
pub fn annotate_provenance(root: &mut Node, key: &str, path: &Path) {
    let Some(mapping) = root.as_mapping_mut() else {
        return;
    };

    let mut info = Mapping::new();
    info.set(
        LOADED_FROM_FILE,
        Node::Scalar(Scalar::String(path.display().to_string())),
    );
    mapping.set(key, Node::Mapping(info));
}
