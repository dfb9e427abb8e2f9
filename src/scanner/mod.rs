//! Single-pass scanner for the restricted declaration grammar.
//!
//! The scanner recognizes a fixed vocabulary (`namespace`, `struct`, the
//! primitive type spellings, and `std::vector<T>`) and skips everything
//! else, attaching nodes to the tree as a side effect of the scan.

mod cursor;
mod keywords;
mod scan;

use crate::error::Diagnostic;
use crate::tree::SchemaTree;

/// Scan `text` and build the schema tree.
///
/// Total over all inputs: the scan runs to input exhaustion and always
/// returns a tree, however malformed the text. Input outside the recognized
/// vocabulary is treated as filler.
pub fn parse(text: &str) -> SchemaTree {
    parse_with_diagnostics(text).0
}

/// Like [`parse`], but also returns the diagnostics collected during the
/// scan (unresolved array element types, unbalanced closing braces).
pub fn parse_with_diagnostics(text: &str) -> (SchemaTree, Vec<Diagnostic>) {
    scan::Scanner::new(text).run()
}
