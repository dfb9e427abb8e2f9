//! Declscan: builds a typed schema tree from a restricted subset of C++
//! declarations.
//!
//! The scanner reads namespaces, structs, primitive fields (`bool`,
//! `double`, the fixed-width integer types, `std::string`) and
//! `std::vector<T>` array fields, and ignores everything else in the input.
//! The result is a tree of [`tree::Node`]s in declaration order, usable for
//! code generation, serialization planning, or documentation. An array of a
//! previously declared struct embeds a deep, independently owned copy of
//! that struct's subtree.
//!
//! # Quick Start
//!
//! ```rust
//! use declscan::{parse, render, NodeKind, SchemaTree};
//!
//! let tree = parse(r#"
//!     namespace demo
//!     {
//!         struct Point
//!         {
//!             double x;
//!             double y;
//!         };
//!     }
//! "#);
//!
//! let ns = tree.node(SchemaTree::ROOT).children[0];
//! assert_eq!(tree.node(ns).kind, NodeKind::Namespace);
//! assert_eq!(
//!     render(&tree),
//!     "namespace demo\n  struct Point\n    double x\n    double y\n"
//! );
//! ```

pub mod error;
pub mod render;
pub mod scanner;
pub mod tree;

pub use error::Diagnostic;
pub use render::render;
pub use scanner::{parse, parse_with_diagnostics};
pub use tree::{Node, NodeId, NodeKind, SchemaTree};
