//! Event receiver that assembles a [`Node`] tree and rejects duplicate keys.

use super::errors::{DuplicateKeyError, SyntaxError};
use crate::error::{LintError, Result};
use crate::tree::{Key, Mapping, Node, Position, Scalar};
use std::collections::HashMap;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Parse `source` into a tree, failing on malformed text or duplicate keys.
///
/// Only the first document of a stream is loaded. An empty document loads
/// as an empty mapping.
pub fn parse(source: &str) -> Result<Node> {
    let mut parser = Parser::new_from_str(source);
    let mut builder = TreeBuilder::default();

    if let Err(err) = parser.load(&mut builder, false) {
        let marker = err.marker();
        return Err(SyntaxError::from_scan(source, err.info(), position_of(marker)).into());
    }

    builder.finish(source)
}

fn position_of(marker: &Marker) -> Position {
    Position::new(marker.line(), marker.col() + 1)
}

/// A collection that is still receiving children.
enum Frame {
    Sequence {
        anchor: usize,
        items: Vec<Node>,
    },
    Mapping {
        anchor: usize,
        mapping: Mapping,
        pending_key: Option<Key>,
    },
}

/// What stopped the build. The receiver cannot return errors, so the first
/// one is parked here and every later event is ignored.
enum BuildFailure {
    Duplicate {
        key: String,
        position: Position,
        first: Position,
    },
    ComplexKey {
        position: Position,
    },
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    anchors: HashMap<usize, Node>,
    root: Option<Node>,
    failure: Option<BuildFailure>,
}

impl TreeBuilder {
    fn finish(self, source: &str) -> Result<Node> {
        match self.failure {
            Some(BuildFailure::Duplicate {
                key,
                position,
                first,
            }) => Err(LintError::DuplicateKey(DuplicateKeyError {
                file: None,
                key,
                position,
                first,
            })),
            Some(BuildFailure::ComplexKey { position }) => Err(SyntaxError::from_scan(
                source,
                "mapping keys must be scalars",
                position,
            )
            .into()),
            None => Ok(self.root.unwrap_or_else(|| Node::Mapping(Mapping::new()))),
        }
    }

    /// True when the innermost open collection is a mapping waiting for a key.
    fn awaiting_key(&self) -> bool {
        matches!(
            self.stack.last(),
            Some(Frame::Mapping {
                pending_key: None,
                ..
            })
        )
    }

    /// Record `key` as the pending key of the innermost mapping, unless the
    /// mapping already holds an equal key.
    fn accept_key(&mut self, key: Key) {
        let Some(Frame::Mapping {
            mapping,
            pending_key,
            ..
        }) = self.stack.last_mut()
        else {
            return;
        };

        if let Some(existing) = mapping.find_key(&key.value) {
            self.failure = Some(BuildFailure::Duplicate {
                key: key.text,
                position: key.position,
                first: existing.position,
            });
            return;
        }

        *pending_key = Some(key);
    }

    /// Attach a finished value to its parent, or make it the root.
    fn complete(&mut self, node: Node, anchor: usize) {
        if anchor != 0 {
            self.anchors.insert(anchor, node.clone());
        }

        match self.stack.last_mut() {
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping {
                mapping,
                pending_key,
                ..
            }) => {
                if let Some(key) = pending_key.take()
                    && let Err(key) = mapping.insert(key, node)
                {
                    let first = mapping
                        .find_key(&key.value)
                        .map(|k| k.position)
                        .unwrap_or_default();
                    self.failure = Some(BuildFailure::Duplicate {
                        key: key.text,
                        position: key.position,
                        first,
                    });
                }
            }
        }
    }

    fn on_scalar(&mut self, text: String, style: TScalarStyle, anchor: usize, marker: Marker) {
        let value = match style {
            TScalarStyle::Plain => Scalar::resolve_plain(&text),
            _ => Scalar::String(text.clone()),
        };

        if self.awaiting_key() {
            if anchor != 0 {
                self.anchors.insert(anchor, Node::Scalar(value.clone()));
            }
            self.accept_key(Key::new(text, value, position_of(&marker)));
        } else {
            self.complete(Node::Scalar(value), anchor);
        }
    }

    fn on_alias(&mut self, id: usize, marker: Marker) {
        let node = self
            .anchors
            .get(&id)
            .cloned()
            .unwrap_or(Node::Scalar(Scalar::Null));

        if self.awaiting_key() {
            match node {
                Node::Scalar(value) => {
                    let text = value.to_string();
                    self.accept_key(Key::new(text, value, position_of(&marker)));
                }
                _ => {
                    self.failure = Some(BuildFailure::ComplexKey {
                        position: position_of(&marker),
                    });
                }
            }
        } else {
            self.complete(node, 0);
        }
    }

    fn open(&mut self, frame: Frame, marker: Marker) {
        if self.awaiting_key() {
            self.failure = Some(BuildFailure::ComplexKey {
                position: position_of(&marker),
            });
            return;
        }
        self.stack.push(frame);
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        if self.failure.is_some() {
            return;
        }

        match ev {
            Event::Scalar(text, style, anchor, _tag) => self.on_scalar(text, style, anchor, marker),
            Event::Alias(id) => self.on_alias(id, marker),
            Event::SequenceStart(anchor, _tag) => self.open(
                Frame::Sequence {
                    anchor,
                    items: Vec::new(),
                },
                marker,
            ),
            Event::MappingStart(anchor, _tag) => self.open(
                Frame::Mapping {
                    anchor,
                    mapping: Mapping::new(),
                    pending_key: None,
                },
                marker,
            ),
            Event::SequenceEnd | Event::MappingEnd => match self.stack.pop() {
                Some(Frame::Sequence { anchor, items }) => {
                    self.complete(Node::Sequence(items), anchor);
                }
                Some(Frame::Mapping {
                    anchor, mapping, ..
                }) => self.complete(Node::Mapping(mapping), anchor),
                None => {}
            },
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}
        }
    }
}
