//! Loader error payloads: malformed text and duplicated keys.

use crate::tree::Position;
use std::fmt;
use std::path::PathBuf;

/// A line of the source that contains at least one tab character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLine {
    /// 1-based line number.
    pub line: usize,
    /// The line with every tab replaced by `____`.
    pub text: String,
}

/// Why the raw text could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// The text contains tabs; every offending line is listed.
    Tabs { lines: Vec<TabLine> },
    /// Any other scanner or structure error.
    Scanner { message: String, position: Position },
}

/// The document is not well-formed YAML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub file: Option<PathBuf>,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    /// Build the error for a scanner failure, preferring a tab report when
    /// the source contains tabs.
    pub fn from_scan(source: &str, message: impl Into<String>, position: Position) -> Self {
        let lines = find_tab_lines(source);
        let kind = if lines.is_empty() {
            SyntaxErrorKind::Scanner {
                message: message.into(),
                position,
            }
        } else {
            SyntaxErrorKind::Tabs { lines }
        };
        Self { file: None, kind }
    }
}

/// Every line of `source` containing a tab, with tabs made visible.
pub fn find_tab_lines(source: &str) -> Vec<TabLine> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains('\t'))
        .map(|(n, line)| TabLine {
            line: n + 1,
            text: line.replace('\t', "____"),
        })
        .collect()
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = display_file(&self.file);
        match &self.kind {
            SyntaxErrorKind::Tabs { lines } => {
                writeln!(f, "Your file {} has tabs, please use ONLY spaces!", file)?;
                write!(f, "Tabs are in following lines:")?;
                for tab in lines {
                    write!(f, "\n{}:{}", tab.line, tab.text)?;
                }
                Ok(())
            }
            SyntaxErrorKind::Scanner { message, position } => {
                write!(
                    f,
                    "Your file {} has syntax issues ({}): {}",
                    file, position, message
                )
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// A mapping defines the same key twice at one nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError {
    pub file: Option<PathBuf>,
    /// The key as written at its second occurrence.
    pub key: String,
    /// Where the second occurrence starts.
    pub position: Position,
    /// Where the first occurrence starts.
    pub first: Position,
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duplicated variables: key ``{}`` is duplicated in {}, {} (first defined at {})",
            self.key,
            display_file(&self.file),
            self.position,
            self.first
        )
    }
}

impl std::error::Error for DuplicateKeyError {}

pub(crate) fn display_file(file: &Option<PathBuf>) -> String {
    match file {
        Some(path) => path.display().to_string(),
        None => "<input>".to_string(),
    }
}
