//! Node, mapping and scalar types.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// Source position of a key (1-based line and column).
///
/// Keys synthesized after loading (such as provenance metadata) carry
/// line 0, column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A resolved scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Resolve an unquoted scalar the way a YAML core-schema loader would.
    pub fn resolve_plain(text: &str) -> Self {
        match text {
            "" | "~" | "null" | "Null" | "NULL" => return Scalar::Null,
            "true" | "True" | "TRUE" => return Scalar::Bool(true),
            "false" | "False" | "FALSE" => return Scalar::Bool(false),
            ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => {
                return Scalar::Float(f64::INFINITY);
            }
            "-.inf" | "-.Inf" | "-.INF" => return Scalar::Float(f64::NEG_INFINITY),
            ".nan" | ".NaN" | ".NAN" => return Scalar::Float(f64::NAN),
            _ => {}
        }

        if let Some(value) = parse_integer(text) {
            return Scalar::Integer(value);
        }

        if looks_numeric(text)
            && let Ok(value) = text.parse::<f64>()
        {
            return Scalar::Float(value);
        }

        Scalar::String(text.to_string())
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    if let Some(hex) = text.strip_prefix("0x") {
        return i64::from_str_radix(hex, 16).ok();
    }
    if let Some(oct) = text.strip_prefix("0o") {
        return i64::from_str_radix(oct, 8).ok();
    }
    text.parse::<i64>().ok()
}

// `str::parse::<f64>` also accepts words like "inf" and "infinity", which
// YAML treats as plain strings.
fn looks_numeric(text: &str) -> bool {
    let digits = text.trim_start_matches(['+', '-']);
    digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::String(s) => write!(f, "{}", s),
        }
    }
}

/// A mapping key: its source text, resolved value and position.
///
/// Uniqueness is decided on `value`, so `1` and `"1"` are different keys
/// while `true` and `True` are the same one. Paths use `text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub text: String,
    pub value: Scalar,
    pub position: Position,
}

impl Key {
    pub fn new(text: impl Into<String>, value: Scalar, position: Position) -> Self {
        Self {
            text: text.into(),
            value,
            position,
        }
    }

    /// A string key that was not read from any source file.
    pub fn synthetic(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: Scalar::String(text.clone()),
            text,
            position: Position::default(),
        }
    }
}

/// One key/value pair of a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: Key,
    pub value: Node,
}

/// An ordered mapping with unique keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: Vec<Entry>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing key equal to `value`, if any.
    pub fn find_key(&self, value: &Scalar) -> Option<&Key> {
        self.entries
            .iter()
            .map(|entry| &entry.key)
            .find(|key| key.value == *value)
    }

    /// Append an entry. A key that is already present is handed back
    /// unchanged instead of being inserted.
    pub fn insert(&mut self, key: Key, value: Node) -> Result<(), Key> {
        if self.find_key(&key.value).is_some() {
            return Err(key);
        }
        self.entries.push(Entry { key, value });
        Ok(())
    }

    /// Insert or replace the value stored under a string key.
    pub fn set(&mut self, key: &str, value: Node) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key.text == key) {
            entry.value = value;
        } else {
            self.entries.push(Entry {
                key: Key::synthetic(key),
                value,
            });
        }
    }

    /// Look up a value by the key's source text.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|entry| entry.key.text == key)
            .map(|entry| &entry.value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Mapping(Mapping),
    Sequence(Vec<Node>),
    Scalar(Scalar),
}

impl Node {
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Convenience accessor for string scalars.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Integer(i) => serializer.serialize_i64(*i),
            Scalar::Float(x) => serializer.serialize_f64(*x),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key.value, &entry.value)?;
        }
        map.end()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Mapping(mapping) => mapping.serialize(serializer),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}
