//! Route tables built from plain literals.
//!
//! The route compiler emits these as a `static`, so a program dispatches
//! against a fully built trie without inserting a single route at startup.

mod snapshot;

pub use snapshot::{StaticEdge, StaticNode, StaticParam, StaticTable};
