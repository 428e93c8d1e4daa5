//! Generic graph walk parameterised by a frontier.
//!
//! One algorithm covers both orders: with a [`Queue`] the walk is
//! breadth-first, with a [`Stack`] it is a stack-based depth-first walk.
//!
//! Nodes are marked visited when popped, not when pushed, so a node may sit
//! in the frontier several times; the extra entries are dropped on pop.
//! The stack walk pushes all children of a node at once and explores the
//! most recently pushed first. It reaches every node exactly once but does
//! not always match a recursive DFS order.

use super::store::GraphStore;
use super::types::{Node, NodeId};
use crate::frontier::{Frontier, Queue, Stack};

/// Dense visited marker indexed by node id.
#[derive(Debug)]
struct VisitedSet {
    marks: Vec<bool>,
}

impl VisitedSet {
    fn with_max_id(max_id: u64) -> Self {
        Self {
            marks: vec![false; NodeId::new(max_id).index() + 1],
        }
    }

    fn contains(&self, id: NodeId) -> bool {
        self.marks.get(id.index()).copied().unwrap_or(false)
    }

    /// Marks `id`; returns false if it was already marked.
    fn insert(&mut self, id: NodeId) -> bool {
        let idx = id.index();
        if idx >= self.marks.len() {
            tracing::warn!(
                id = id.as_u64(),
                size = self.marks.len(),
                "Node id beyond visited marker; graph mutated during traversal?"
            );
            self.marks.resize(idx + 1, false);
        }
        !std::mem::replace(&mut self.marks[idx], true)
    }
}

/// Lazy walk over the nodes reachable from a start node.
///
/// Yields each reachable node exactly once. Build a new `Walk` to restart.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::Walk;
/// use graphkit_core::{lang, GraphStore, Queue};
///
/// let graph = lang::parse_graph("a -> b c; b -> d").unwrap();
/// let a = graph.node_by_label("a").unwrap();
///
/// let labels: Vec<String> = Walk::new(&graph, Queue::new(), Some(a))
///     .map(|n| n.label().unwrap_or_default().to_string())
///     .collect();
/// assert_eq!(labels, ["a", "b", "c", "d"]);
/// ```
#[derive(Debug)]
pub struct Walk<'g, G, F> {
    graph: &'g G,
    frontier: F,
    visited: VisitedSet,
}

impl<'g, G, F> Walk<'g, G, F>
where
    G: GraphStore,
    F: Frontier<Node>,
{
    /// Seeds `frontier` with `start`. A `None` start yields nothing.
    pub fn new(graph: &'g G, frontier: F, start: Option<Node>) -> Self {
        frontier.push_some(start);
        Self {
            graph,
            frontier,
            visited: VisitedSet::with_max_id(graph.max_node_id()),
        }
    }
}

impl<G, F> Iterator for Walk<'_, G, F>
where
    G: GraphStore,
    F: Frontier<Node>,
{
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        loop {
            let node = self.frontier.pop()?;
            if !self.visited.insert(node.id()) {
                continue;
            }

            for edge in self.graph.out_edges(&node) {
                let target = edge.target();
                if !self.visited.contains(target.id()) {
                    self.frontier.push(target.clone());
                }
            }
            return Some(node);
        }
    }
}

/// Walks from `start` using `frontier`, calling `visit` for every node.
///
/// Stops as soon as `visit` returns false. Returns the number of nodes
/// passed to `visit`.
pub fn traverse<G, F, V>(graph: &G, frontier: F, start: Option<&Node>, mut visit: V) -> usize
where
    G: GraphStore,
    F: Frontier<Node>,
    V: FnMut(&Node) -> bool,
{
    let mut visited = 0;
    for node in Walk::new(graph, frontier, start.cloned()) {
        visited += 1;
        if !visit(&node) {
            break;
        }
    }
    visited
}

/// Breadth-first traversal from `start`.
///
/// Distance from `start` never decreases along the visit order.
pub fn breadth_first<G, V>(graph: &G, start: &Node, visit: V) -> usize
where
    G: GraphStore,
    V: FnMut(&Node) -> bool,
{
    traverse(graph, Queue::new(), Some(start), visit)
}

/// Stack-based depth-first traversal from `start`.
pub fn depth_first<G, V>(graph: &G, start: &Node, visit: V) -> usize
where
    G: GraphStore,
    V: FnMut(&Node) -> bool,
{
    traverse(graph, Stack::new(), Some(start), visit)
}

/// Lazy breadth-first walk from `start`.
pub fn bfs_iter<'g, G: GraphStore>(graph: &'g G, start: &Node) -> Walk<'g, G, Queue<Node>> {
    Walk::new(graph, Queue::new(), Some(start.clone()))
}

/// Lazy stack-based depth-first walk from `start`.
pub fn dfs_iter<'g, G: GraphStore>(graph: &'g G, start: &Node) -> Walk<'g, G, Stack<Node>> {
    Walk::new(graph, Stack::new(), Some(start.clone()))
}
