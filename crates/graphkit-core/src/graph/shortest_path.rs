//! Dijkstra's shortest path over non-negative edge weights.
//!
//! Uses a binary min-heap keyed by tentative distance with lazy deletion:
//! a node may have several heap entries, and entries whose distance is worse
//! than the best known one are skipped when popped. Every relaxed edge is
//! checked for a negative (or NaN) weight; the first one found aborts the
//! search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use super::store::GraphStore;
use super::types::{Edge, Node, NodeId};
use crate::error::{Error, Result};

/// A shortest path: edges in source-to-destination order plus total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    edges: Vec<Edge>,
    distance: f32,
}

impl Path {
    /// Edges from source to destination. Empty when source == destination.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of the edge weights along the path.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Number of edges in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true for the zero-length path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Nodes along the path, starting with the source.
    #[must_use]
    pub fn nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(self.edges.len() + 1);
        if let Some(first) = self.edges.first() {
            nodes.push(first.source().clone());
        }
        nodes.extend(self.edges.iter().map(|e| e.target().clone()));
        nodes
    }

    /// Consumes the path and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

#[derive(Debug)]
struct HeapEntry {
    node: Node,
    distance: f32,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, smallest distance must pop first.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.id().cmp(&self.node.id()))
    }
}

/// Finds the cheapest path from `from` to `to`.
///
/// # Errors
///
/// - `Error::NegativeWeight` if any relaxed edge has a negative or NaN
///   weight.
/// - `Error::PathNotFound` if `to` is unreachable from `from`.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::shortest_path;
/// use graphkit_core::{Graph, GraphStore};
///
/// let graph = Graph::new();
/// let a = graph.new_node("a").unwrap();
/// let b = graph.new_node("b").unwrap();
/// let c = graph.new_node("c").unwrap();
/// graph.add_edge(&a, &b, 1.0);
/// graph.add_edge(&b, &c, 1.0);
/// graph.add_edge(&a, &c, 5.0);
///
/// let path = shortest_path(&graph, &a, &c).unwrap();
/// assert_eq!(path.distance(), 2.0);
/// assert_eq!(path.nodes(), vec![a, b, c]);
/// ```
pub fn shortest_path<G: GraphStore>(graph: &G, from: &Node, to: &Node) -> Result<Path> {
    if from.id() == to.id() {
        return Ok(Path {
            edges: Vec::new(),
            distance: 0.0,
        });
    }

    let mut best: FxHashMap<NodeId, f32> = FxHashMap::default();
    let mut predecessor: FxHashMap<NodeId, Edge> = FxHashMap::default();
    let mut heap = BinaryHeap::new();

    best.insert(from.id(), 0.0);
    heap.push(HeapEntry {
        node: from.clone(),
        distance: 0.0,
    });

    while let Some(HeapEntry { node, distance }) = heap.pop() {
        if best.get(&node.id()).is_some_and(|&d| distance > d) {
            continue;
        }

        for edge in graph.out_edges(&node) {
            let weight = edge.weight();
            // NaN is rejected with the negative weights.
            if weight.is_nan() || weight < 0.0 {
                tracing::debug!(
                    from = edge.source().id().as_u64(),
                    to = edge.target().id().as_u64(),
                    weight,
                    "Dijkstra aborted on negative weight"
                );
                return Err(Error::NegativeWeight {
                    from: edge.source().id(),
                    to: edge.target().id(),
                    weight,
                });
            }

            let candidate = distance + weight;
            let target = edge.target().id();
            let improves = best.get(&target).is_none_or(|&d| candidate < d);
            if improves {
                best.insert(target, candidate);
                heap.push(HeapEntry {
                    node: edge.target().clone(),
                    distance: candidate,
                });
                predecessor.insert(target, edge);
            }
        }
    }

    let Some(&distance) = best.get(&to.id()) else {
        return Err(Error::PathNotFound {
            from: from.id(),
            to: to.id(),
        });
    };

    let mut edges = Vec::new();
    let mut current = to.id();
    while current != from.id() {
        let Some(edge) = predecessor.remove(&current) else {
            break;
        };
        current = edge.source().id();
        edges.push(edge);
    }
    edges.reverse();

    tracing::debug!(
        from = from.id().as_u64(),
        to = to.id().as_u64(),
        distance,
        hops = edges.len(),
        "Shortest path found"
    );
    Ok(Path { edges, distance })
}
