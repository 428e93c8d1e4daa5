//! Thread-safe in-memory graph store.
//!
//! [`GraphStore`] is the capability set every algorithm in this crate works
//! against; [`Graph`] is its implementation. Nodes live in an
//! insertion-ordered list with a label index, edges in two adjacency indices
//! (`outgoing[source][target]` and `incoming[target][source]`) that are
//! updated together under one write lock.
//!
//! Reads take the shared lock and copy out what they need, so visitor
//! callbacks never run while the lock is held and may call back into the
//! store. Mutating the graph while an iteration or algorithm is in flight is
//! not supported: the iteration sees the snapshot taken when it started.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::config::GraphConfig;
use crate::error::{Error, Result};

use super::traversal::breadth_first;
use super::types::{Edge, Node, NodeId};

/// Adjacency of one node, keyed by the node on the other end.
type Adjacency = IndexMap<NodeId, Edge, FxBuildHasher>;

/// Mutation and query contract of a directed graph.
///
/// All methods take `&self`; implementations synchronize internally.
pub trait GraphStore: Send + Sync {
    /// Creates a node with the next id.
    ///
    /// An empty label creates an unlabeled node.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateLabel` if `label` is non-empty and already
    /// bound; the graph is left unchanged.
    fn new_node(&self, label: &str) -> Result<Node>;

    /// Looks up a node by label. The empty label never matches.
    fn node_by_label(&self, label: &str) -> Option<Node>;

    /// Inserts the directed edge `source -> target`, overwriting the weight
    /// of an existing edge between the same ordered pair.
    fn add_edge(&self, source: &Node, target: &Node, weight: f32) -> Edge;

    /// Adds `a -> b` and `b -> a` as two separate insertions.
    ///
    /// The pair is not atomic: a concurrent reader may see one direction
    /// without the other.
    fn add_bi_edge(&self, a: &Node, b: &Node, weight: f32) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Returns true iff the directed edge `a -> b` exists.
    fn has_edge_between(&self, a: &Node, b: &Node) -> bool;

    /// Returns a snapshot of all nodes in creation order.
    fn nodes(&self) -> Vec<Node>;

    /// Returns a snapshot of the outgoing edges of `node`.
    fn out_edges(&self, node: &Node) -> Vec<Edge>;

    /// Returns a snapshot of the out-neighbours of `node`.
    fn neighbours(&self, node: &Node) -> Vec<Node> {
        self.out_edges(node)
            .into_iter()
            .map(|edge| edge.target().clone())
            .collect()
    }

    /// Calls `visit` for each node in creation order until it returns false.
    fn node_iter<F>(&self, mut visit: F)
    where
        F: FnMut(&Node) -> bool,
        Self: Sized,
    {
        for node in &self.nodes() {
            if !visit(node) {
                break;
            }
        }
    }

    /// Calls `visit` for each outgoing edge of `node` until it returns false.
    fn edge_iter<F>(&self, node: &Node, mut visit: F)
    where
        F: FnMut(&Edge) -> bool,
        Self: Sized,
    {
        for edge in &self.out_edges(node) {
            if !visit(edge) {
                break;
            }
        }
    }

    /// Calls `visit` for each out-neighbour of `node` until it returns false.
    fn neighbour_iter<F>(&self, node: &Node, mut visit: F)
    where
        F: FnMut(&Node) -> bool,
        Self: Sized,
    {
        for edge in &self.out_edges(node) {
            if !visit(edge.target()) {
                break;
            }
        }
    }

    /// Number of edges leaving `node`.
    fn out_degree(&self, node: &Node) -> usize;

    /// Number of edges entering `node`.
    fn in_degree(&self, node: &Node) -> usize;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of directed edges.
    fn edge_count(&self) -> usize;

    /// Highest id handed out so far, which equals the number of nodes ever
    /// created.
    fn max_node_id(&self) -> u64;

    /// Returns true iff a breadth-first walk from the first node reaches
    /// every node. The empty graph is not connected.
    fn is_connected(&self) -> bool
    where
        Self: Sized,
    {
        let Some(start) = self.nodes().into_iter().next() else {
            return false;
        };
        breadth_first(self, &start, |_| true) == self.node_count()
    }
}

#[derive(Debug, Default)]
struct GraphInner {
    /// All nodes in creation order.
    nodes: Vec<Node>,
    /// Label index (labeled nodes only).
    by_label: FxHashMap<Arc<str>, Node>,
    /// Outgoing edges: source -> target -> edge.
    outgoing: FxHashMap<NodeId, Adjacency>,
    /// Incoming edges: target -> source -> edge.
    incoming: FxHashMap<NodeId, Adjacency>,
    /// Last id handed out.
    last_id: u64,
}

/// In-memory directed graph guarded by a reader/writer lock.
///
/// # Example
///
/// ```rust
/// use graphkit_core::{Graph, GraphStore};
///
/// let graph = Graph::new();
/// let a = graph.new_node("a").unwrap();
/// let b = graph.new_node("b").unwrap();
/// graph.add_bi_edge(&a, &b, 1.0);
///
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.has_edge_between(&b, &a));
/// assert!(graph.is_connected());
/// ```
#[derive(Debug, Default)]
pub struct Graph {
    inner: RwLock<GraphInner>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `node_capacity` nodes.
    #[must_use]
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            inner: RwLock::new(GraphInner {
                nodes: Vec::with_capacity(node_capacity),
                by_label: FxHashMap::default(),
                outgoing: FxHashMap::with_capacity_and_hasher(node_capacity, FxBuildHasher),
                incoming: FxHashMap::with_capacity_and_hasher(node_capacity, FxBuildHasher),
                last_id: 0,
            }),
        }
    }

    /// Creates an empty graph sized from configuration.
    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::with_capacity(config.node_capacity)
    }

    /// Returns the weight of the edge `source -> target`, if present.
    #[must_use]
    pub fn edge_weight(&self, source: &Node, target: &Node) -> Option<f32> {
        let inner = self.inner.read();
        inner
            .outgoing
            .get(&source.id())
            .and_then(|adj| adj.get(&target.id()))
            .map(Edge::weight)
    }

    /// Returns a snapshot of the incoming edges of `node`.
    #[must_use]
    pub fn in_edges(&self, node: &Node) -> Vec<Edge> {
        let inner = self.inner.read();
        inner
            .incoming
            .get(&node.id())
            .map(|adj| adj.values().cloned().collect())
            .unwrap_or_default()
    }
}

impl GraphStore for Graph {
    fn new_node(&self, label: &str) -> Result<Node> {
        let mut inner = self.inner.write();

        let label: Option<Arc<str>> = if label.is_empty() {
            None
        } else {
            if inner.by_label.contains_key(label) {
                tracing::debug!(label, "Rejected node with duplicate label");
                return Err(Error::DuplicateLabel(label.to_string()));
            }
            Some(Arc::from(label))
        };

        inner.last_id += 1;
        let id = NodeId::new(inner.last_id);
        let node = Node::new(id, label.clone());

        inner.nodes.push(node.clone());
        inner.outgoing.entry(id).or_default();
        if let Some(label) = label {
            inner.by_label.insert(label, node.clone());
        }

        tracing::trace!(id = id.as_u64(), label = node.label(), "Node created");
        Ok(node)
    }

    fn node_by_label(&self, label: &str) -> Option<Node> {
        if label.is_empty() {
            return None;
        }
        self.inner.read().by_label.get(label).cloned()
    }

    fn add_edge(&self, source: &Node, target: &Node, weight: f32) -> Edge {
        let edge = Edge::new(source.clone(), target.clone(), weight);
        let mut inner = self.inner.write();

        inner
            .outgoing
            .entry(source.id())
            .or_default()
            .insert(target.id(), edge.clone());
        inner
            .incoming
            .entry(target.id())
            .or_default()
            .insert(source.id(), edge.clone());

        tracing::trace!(
            source = source.id().as_u64(),
            target = target.id().as_u64(),
            weight,
            "Edge added"
        );
        edge
    }

    fn has_edge_between(&self, a: &Node, b: &Node) -> bool {
        self.inner
            .read()
            .outgoing
            .get(&a.id())
            .is_some_and(|adj| adj.contains_key(&b.id()))
    }

    fn nodes(&self) -> Vec<Node> {
        self.inner.read().nodes.clone()
    }

    fn out_edges(&self, node: &Node) -> Vec<Edge> {
        self.inner
            .read()
            .outgoing
            .get(&node.id())
            .map(|adj| adj.values().cloned().collect())
            .unwrap_or_default()
    }

    fn out_degree(&self, node: &Node) -> usize {
        self.inner
            .read()
            .outgoing
            .get(&node.id())
            .map_or(0, IndexMap::len)
    }

    fn in_degree(&self, node: &Node) -> usize {
        self.inner
            .read()
            .incoming
            .get(&node.id())
            .map_or(0, IndexMap::len)
    }

    fn node_count(&self) -> usize {
        self.inner.read().nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.inner.read().outgoing.values().map(IndexMap::len).sum()
    }

    fn max_node_id(&self) -> u64 {
        self.inner.read().last_id
    }
}

/// Human-readable dump: one line per node listing its out-neighbours.
///
/// ```text
/// 1:a -> [2:b 3]
/// 2:b -> []
/// 3 -> []
/// ```
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        for node in &inner.nodes {
            write!(f, "{node} -> [")?;
            if let Some(adj) = inner.outgoing.get(&node.id()) {
                for (i, edge) in adj.values().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", edge.target())?;
                }
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}
