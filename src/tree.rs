//! The schema tree: an arena of typed nodes built by the scanner.

/// The kind tag of a schema tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Root,
    Namespace,
    Struct,
    Bool,
    Double,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    String,
    Array,
}

impl NodeKind {
    /// The fixed label used when rendering a node of this kind.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Root => "{root}",
            NodeKind::Namespace => "namespace",
            NodeKind::Struct => "struct",
            NodeKind::Bool => "bool",
            NodeKind::Double => "double",
            NodeKind::Int8 => "int8",
            NodeKind::Int16 => "int16",
            NodeKind::Int32 => "int32",
            NodeKind::Int64 => "int64",
            NodeKind::UInt8 => "uint8",
            NodeKind::UInt16 => "uint16",
            NodeKind::UInt32 => "uint32",
            NodeKind::UInt64 => "uint64",
            NodeKind::String => "string",
            NodeKind::Array => "array",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Handle to a node in a [`SchemaTree`]. Indexes the tree's arena; parent
/// back-references are stored as `NodeId` so ownership only flows root to
/// children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

/// One node of the schema tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Declared identifier. Empty for the root and for the element slot of
    /// an array node.
    pub name: String,
    pub kind: NodeKind,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    /// Children in declaration order.
    pub children: Vec<NodeId>,
}

/// The tree built from a scanned declaration set.
///
/// Nodes live in a flat arena addressed by [`NodeId`]; slot 0 is always the
/// synthetic root.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaTree {
    nodes: Vec<Node>,
}

impl SchemaTree {
    /// Handle to the synthetic root node.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a tree holding only the root.
    pub fn new() -> Self {
        SchemaTree {
            nodes: vec![Node {
                name: String::new(),
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a new child of `parent` and return its handle.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Deep-copy `source` and its whole subtree under `new_parent`.
    ///
    /// Every node of the copy is freshly allocated with its back-reference
    /// rewired, so mutating either side never affects the other. Used to
    /// embed an independent copy of a struct declaration as an array's
    /// element type.
    ///
    /// The copy is built detached and attached to `new_parent` only once it
    /// is complete; a `new_parent` inside the source subtree therefore gets
    /// a copy of that subtree as it was before the call.
    pub fn clone_subtree(&mut self, source: NodeId, new_parent: NodeId) -> NodeId {
        let copy = self.clone_detached(source, new_parent);
        self.nodes[new_parent.0].children.push(copy);
        copy
    }

    fn clone_detached(&mut self, source: NodeId, parent: NodeId) -> NodeId {
        let (name, kind, children) = {
            let node = &self.nodes[source.0];
            (node.name.clone(), node.kind, node.children.clone())
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        for child in children {
            let copied = self.clone_detached(child, id);
            self.nodes[id.0].children.push(copied);
        }
        id
    }

    /// Find the first descendant of `from` named `name`, in pre-order.
    ///
    /// The search covers the whole subtree regardless of namespace scoping,
    /// and the start node itself is not a candidate. With duplicate names
    /// the earliest declaration in document order wins, even across scopes.
    pub fn find(&self, from: NodeId, name: &str) -> Option<NodeId> {
        for &child in &self.nodes[from.0].children {
            if self.nodes[child.0].name == name {
                return Some(child);
            }
            if let Some(hit) = self.find(child, name) {
                return Some(hit);
            }
        }
        None
    }
}

impl Default for SchemaTree {
    fn default() -> Self {
        Self::new()
    }
}
