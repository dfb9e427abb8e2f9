use super::cursor::Cursor;
use super::keywords;
use crate::error::Diagnostic;
use crate::tree::{NodeId, NodeKind, SchemaTree};

/// Single-pass stateful scanner over one declaration text.
///
/// Children attach to `current`; `scope_stack` records the block depth at
/// which each open namespace/struct started, so the `}` that returns the
/// depth to that value pops `current` back to its parent.
pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    tree: SchemaTree,
    current: NodeId,
    depth: i32,
    scope_stack: Vec<i32>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(text),
            tree: SchemaTree::new(),
            current: SchemaTree::ROOT,
            depth: 0,
            scope_stack: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn run(mut self) -> (SchemaTree, Vec<Diagnostic>) {
        while let Some(b) = self.cursor.peek() {
            match b {
                b'{' => {
                    self.cursor.bump();
                    self.depth += 1;
                }
                b'}' => {
                    self.cursor.bump();
                    self.close_block();
                }
                _ if b.is_ascii_whitespace() => {
                    self.cursor.bump();
                }
                _ => self.dispatch(),
            }
        }
        (self.tree, self.diagnostics)
    }

    /// Try the fixed vocabulary at the cursor. Anything that matches no
    /// keyword is expected filler and advances by one byte.
    fn dispatch(&mut self) {
        if self.cursor.eat_word(keywords::NAMESPACE) {
            self.open_scope(NodeKind::Namespace);
            return;
        }
        if self.cursor.eat_word(keywords::STRUCT) {
            self.open_scope(NodeKind::Struct);
            return;
        }
        if self.cursor.eat_before(keywords::VECTOR, b'<') {
            self.scan_array();
            return;
        }
        for &(literal, kind) in keywords::PRIMITIVES {
            if self.cursor.eat_word(literal) {
                let name = self.cursor.read_name();
                self.tree.add_child(self.current, name, kind);
                return;
            }
        }
        self.cursor.bump();
    }

    fn open_scope(&mut self, kind: NodeKind) {
        let name = self.cursor.read_name();
        self.current = self.tree.add_child(self.current, name, kind);
        self.scope_stack.push(self.depth);
    }

    fn close_block(&mut self) {
        self.depth -= 1;
        if self.scope_stack.last() == Some(&self.depth) {
            self.scope_stack.pop();
            if let Some(parent) = self.tree.node(self.current).parent {
                self.current = parent;
            }
        } else if self.depth < 0 {
            // Unmatched close: ignored structurally, reported.
            self.diagnostics.push(Diagnostic::UnbalancedClose {
                line: self.cursor.line(),
            });
        }
    }

    /// `std::vector` with the cursor on `<`: read the element type name and
    /// the field name, attach the array, then resolve the element.
    ///
    /// Resolution order: primitive table first, then the first earlier
    /// declaration found from the root, deep-cloned so the array owns an
    /// independent copy. An element that resolves to neither leaves the
    /// array childless and records a diagnostic.
    fn scan_array(&mut self) {
        let line = self.cursor.line();
        self.cursor.bump();
        let element = self.cursor.read_name();
        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(b'>') {
            self.cursor.bump();
        }
        let name = self.cursor.read_name();

        let array = self.tree.add_child(self.current, name, NodeKind::Array);
        if let Some(kind) = keywords::primitive(&element) {
            self.tree.add_child(array, String::new(), kind);
        } else if let Some(declared) = self.tree.find(SchemaTree::ROOT, &element) {
            self.tree.clone_subtree(declared, array);
        } else {
            self.diagnostics.push(Diagnostic::UnresolvedElementType {
                element,
                field: self.tree.node(array).name.clone(),
                line,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> (SchemaTree, Vec<Diagnostic>) {
        Scanner::new(text).run()
    }

    fn kinds_of(tree: &SchemaTree, id: NodeId) -> Vec<NodeKind> {
        tree.node(id)
            .children
            .iter()
            .map(|&c| tree.node(c).kind)
            .collect()
    }

    #[test]
    fn test_empty_input_yields_root_only() {
        let (tree, diags) = scan("");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(SchemaTree::ROOT).kind, NodeKind::Root);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_nested_scopes_pop_correctly() {
        let (tree, diags) = scan("namespace A { namespace B { struct C { bool x; }; } }");
        assert!(diags.is_empty());

        let a = tree.node(SchemaTree::ROOT).children[0];
        assert_eq!(tree.node(a).kind, NodeKind::Namespace);
        assert_eq!(tree.node(a).name, "A");
        assert_eq!(tree.node(a).parent, Some(SchemaTree::ROOT));

        let b = tree.node(a).children[0];
        assert_eq!(tree.node(b).name, "B");
        let c = tree.node(b).children[0];
        assert_eq!(tree.node(c).kind, NodeKind::Struct);
        assert_eq!(tree.node(c).name, "C");
        let x = tree.node(c).children[0];
        assert_eq!(tree.node(x).kind, NodeKind::Bool);
        assert_eq!(tree.node(x).name, "x");

        // All scopes closed: the root has exactly one child.
        assert_eq!(tree.node(SchemaTree::ROOT).children.len(), 1);
    }

    #[test]
    fn test_all_primitive_fields() {
        let (tree, _) = scan(
            "struct P { bool a; double b; int8_t c; int16_t d; int32_t e; int64_t f; \
             uint8_t g; uint16_t h; uint32_t i; uint64_t j; std::string k; };",
        );
        let p = tree.node(SchemaTree::ROOT).children[0];
        assert_eq!(
            kinds_of(&tree, p),
            vec![
                NodeKind::Bool,
                NodeKind::Double,
                NodeKind::Int8,
                NodeKind::Int16,
                NodeKind::Int32,
                NodeKind::Int64,
                NodeKind::UInt8,
                NodeKind::UInt16,
                NodeKind::UInt32,
                NodeKind::UInt64,
                NodeKind::String,
            ]
        );
    }

    #[test]
    fn test_array_of_primitive() {
        let (tree, diags) = scan("struct S { std::vector<double> a; };");
        assert!(diags.is_empty());
        let s = tree.node(SchemaTree::ROOT).children[0];
        let a = tree.node(s).children[0];
        assert_eq!(tree.node(a).kind, NodeKind::Array);
        assert_eq!(tree.node(a).name, "a");
        assert_eq!(tree.node(a).children.len(), 1);
        let elem = tree.node(a).children[0];
        assert_eq!(tree.node(elem).kind, NodeKind::Double);
        assert!(tree.node(elem).name.is_empty());
    }

    #[test]
    fn test_array_of_declared_struct_is_cloned() {
        let (tree, diags) = scan(
            "struct Data { bool ok; int32_t n; }; \
             struct List { std::vector<Data> items; };",
        );
        assert!(diags.is_empty());

        let data = tree.node(SchemaTree::ROOT).children[0];
        let list = tree.node(SchemaTree::ROOT).children[1];
        let items = tree.node(list).children[0];
        assert_eq!(tree.node(items).kind, NodeKind::Array);
        assert_eq!(tree.node(items).children.len(), 1);

        let copy = tree.node(items).children[0];
        assert_ne!(copy, data);
        assert_eq!(tree.node(copy).kind, NodeKind::Struct);
        assert_eq!(tree.node(copy).name, "Data");
        assert_eq!(tree.node(copy).parent, Some(items));
        assert_eq!(kinds_of(&tree, copy), kinds_of(&tree, data));
    }

    #[test]
    fn test_array_forward_reference_is_unresolved() {
        let (tree, diags) = scan(
            "struct List { std::vector<Data> items; }; \
             struct Data { bool ok; };",
        );
        let list = tree.node(SchemaTree::ROOT).children[0];
        let items = tree.node(list).children[0];
        assert!(tree.node(items).children.is_empty());
        assert_eq!(
            diags,
            vec![Diagnostic::UnresolvedElementType {
                element: "Data".to_string(),
                field: "items".to_string(),
                line: 1,
            }]
        );
    }

    #[test]
    fn test_array_of_unknown_type_keeps_scanning() {
        let (tree, diags) = scan("struct S { std::vector<Mystery> m; bool tail; };");
        let s = tree.node(SchemaTree::ROOT).children[0];
        assert_eq!(
            kinds_of(&tree, s),
            vec![NodeKind::Array, NodeKind::Bool]
        );
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_unbalanced_close_is_ignored_and_reported() {
        let (tree, diags) = scan("} namespace A { bool x; }");
        assert_eq!(
            diags,
            vec![Diagnostic::UnbalancedClose { line: 1 }]
        );
        // The stray brace does not disturb later scope matching.
        let a = tree.node(SchemaTree::ROOT).children[0];
        assert_eq!(tree.node(a).name, "A");
        assert_eq!(kinds_of(&tree, a), vec![NodeKind::Bool]);
    }

    #[test]
    fn test_plain_braces_are_not_unbalanced() {
        let (_, diags) = scan("{ { } }");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_filler_text_is_skipped() {
        let (tree, diags) = scan(
            "#pragma once\n\
             #include <cstdint>\n\
             namespace n {\n\
             struct S {\n\
             public:\n\
             float nope;\n\
             int plain;\n\
             bool yes;\n\
             };\n\
             }\n",
        );
        assert!(diags.is_empty());
        let n = tree.node(SchemaTree::ROOT).children[0];
        let s = tree.node(n).children[0];
        // Only the recognized vocabulary produces nodes.
        assert_eq!(kinds_of(&tree, s), vec![NodeKind::Bool]);
    }

    #[test]
    fn test_keyword_prefix_of_identifier_is_not_a_field() {
        let (tree, _) = scan("struct S { boolean x; doubled y; bool z; };");
        let s = tree.node(SchemaTree::ROOT).children[0];
        let names: Vec<&str> = tree
            .node(s)
            .children
            .iter()
            .map(|&c| tree.node(c).name.as_str())
            .collect();
        assert_eq!(names, vec!["z"]);
    }

    #[test]
    fn test_diagnostic_lines() {
        let (_, diags) = scan("namespace A {\n  std::vector<Nope> v;\n}\n}\n");
        assert_eq!(
            diags,
            vec![
                Diagnostic::UnresolvedElementType {
                    element: "Nope".to_string(),
                    field: "v".to_string(),
                    line: 2,
                },
                Diagnostic::UnbalancedClose { line: 4 },
            ]
        );
    }

    #[test]
    fn test_self_referential_array_stays_finite() {
        // The element name resolves to the array node itself (it is the
        // first match in pre-order), which at resolution time has no
        // children; the clone is a single empty node.
        let (tree, diags) = scan("struct S { std::vector<xs> xs; };");
        assert!(diags.is_empty());
        let s = tree.node(SchemaTree::ROOT).children[0];
        let xs = tree.node(s).children[0];
        assert_eq!(tree.node(xs).kind, NodeKind::Array);
        assert_eq!(tree.node(xs).children.len(), 1);
        let copy = tree.node(xs).children[0];
        assert_eq!(tree.node(copy).kind, NodeKind::Array);
        assert!(tree.node(copy).children.is_empty());
    }
}
