//! Node and edge handles for the in-memory graph.
//!
//! Handles are cheap to clone: a [`Node`] is an id plus a shared label, an
//! [`Edge`] is two node handles and a weight. They carry no reference to the
//! graph that created them, so passing a handle to a different graph is a
//! caller error that the store does not detect.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier of a node, unique for the lifetime of its graph.
///
/// Ids are assigned by a per-graph counter starting at 1 and are never
/// reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the id as a dense array index.
    // Reason: ids come from a counter bounded by the number of nodes that fit in memory.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A node of the graph.
///
/// The label is bound at creation and never changes. Unlabeled nodes have
/// no label and can't be found by [`crate::GraphStore::node_by_label`].
///
/// # Example
///
/// ```rust
/// use graphkit_core::{Graph, GraphStore};
///
/// let graph = Graph::new();
/// let node = graph.new_node("Alice").unwrap();
/// assert_eq!(node.id().as_u64(), 1);
/// assert_eq!(node.label(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    id: NodeId,
    label: Option<Arc<str>>,
}

impl Node {
    pub(crate) fn new(id: NodeId, label: Option<Arc<str>>) -> Self {
        Self { id, label }
    }

    /// Returns the node id.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the node label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}:{}", self.id, label),
            None => write!(f, "{}", self.id),
        }
    }
}

/// A directed, weighted edge.
///
/// A graph holds at most one edge per ordered `(source, target)` pair; a
/// bidirectional connection is two independent edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: Node,
    target: Node,
    weight: f32,
}

impl Edge {
    pub(crate) fn new(source: Node, target: Node, weight: f32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the source node.
    #[must_use]
    pub fn source(&self) -> &Node {
        &self.source
    }

    /// Returns the target node.
    #[must_use]
    pub fn target(&self) -> &Node {
        &self.target
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> f32 {
        self.weight
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -> {})", self.source, self.target)
    }
}
