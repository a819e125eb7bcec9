//! Locating documents on disk.

use crate::error::{LintError, Result};
use globset::GlobSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions recognised when walking a directory for documents.
const YAML_EXTENSIONS: &[&str] = &["yml", "yaml", "YML", "YAML"];

/// Resolve `base` to an existing file by appending each extension in order.
///
/// The first candidate that is a regular file wins. When none is, the error
/// lists every candidate tried.
pub fn resolve_document(base: &Path, extensions: &[String]) -> Result<PathBuf> {
    let mut tried = Vec::with_capacity(extensions.len());

    for extension in extensions {
        let mut candidate = OsString::from(base.as_os_str());
        candidate.push(extension);
        let candidate = PathBuf::from(candidate);

        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "resolved document");
            return Ok(candidate);
        }

        tracing::debug!(
            path = %candidate.display(),
            "file not found with this extension, trying another extension pattern"
        );
        tried.push(candidate);
    }

    Err(LintError::FileNotFound {
        base: base.to_path_buf(),
        tried,
    })
}

/// Recursively collect YAML documents under `dir`, sorted by path.
///
/// Paths matching `exclude` (tested relative to `dir`) are skipped, and
/// excluded directories are not descended into.
pub fn collect_documents(dir: &Path, exclude: &GlobSet) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(dir, dir, exclude, &mut found)?;
    found.sort();
    Ok(found)
}

fn walk(root: &Path, dir: &Path, exclude: &GlobSet, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|source| LintError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| LintError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let relative = path.strip_prefix(root).unwrap_or(&path);
        if exclude.is_match(relative) {
            tracing::debug!(path = %path.display(), "excluded");
            continue;
        }

        if path.is_dir() {
            walk(root, &path, exclude, found)?;
        } else if has_yaml_extension(&path) {
            found.push(path);
        }
    }

    Ok(())
}

fn has_yaml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext))
}
