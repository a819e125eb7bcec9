//! Document tree model.
//!
//! A loaded configuration document is a tree of [`Node`]s: mappings,
//! sequences and scalars. Every mapping key remembers where it was written
//! in the source so later stages can point users at the offending line.
//!
//! Keys inside one [`Mapping`] are unique; the loader enforces this while
//! the tree is being built, and [`Mapping::insert`] refuses to break it.

mod node;
mod path;

#[cfg(test)]
mod tests;

// Re-export public API
pub use node::{Entry, Key, Mapping, Node, Position, Scalar};
pub use path::KeyPath;
