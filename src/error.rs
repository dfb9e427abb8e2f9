/// Diagnostics collected while scanning a declaration set.
///
/// The scan itself is total and never aborts; these describe places where
/// the input left the tree incomplete or structurally odd. They are only
/// surfaced by [`crate::scanner::parse_with_diagnostics`] — the plain parse
/// entry point keeps the silent best-effort contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// An array field's element type named neither a primitive nor any
    /// previously scanned declaration; the array node was left without an
    /// element child.
    #[error("line {line}: array field '{field}' references unknown element type '{element}'")]
    UnresolvedElementType {
        element: String,
        field: String,
        line: usize,
    },

    /// A `}` with no open block. The brace is ignored and scanning
    /// continues.
    #[error("line {line}: unbalanced '}}' with no open block")]
    UnbalancedClose { line: usize },
}
