//! Local and global clustering coefficients.
//!
//! For a node `n` with out-neighbour set `N(n)`, every ordered pair `(u, v)`
//! of distinct members of `N(n)` is a triplet; it is also a triangle when an
//! edge joins `u` and `v` in either direction.
//!
//! ```text
//! C(n) = triangles / triplets        (0 when there are no triplets)
//! C(G) = mean of C(n) over all nodes (0 for the empty graph)
//! ```

// Reason: triangle/triplet counts are converted to f64 for the ratio only.
#![allow(clippy::cast_precision_loss)]

use super::store::GraphStore;
use super::types::Node;

/// Local clustering coefficient of `node`.
///
/// Returns 0 when `node` has fewer than two distinct out-neighbours.
pub fn clustering_coef_local<G: GraphStore>(graph: &G, node: &Node) -> f64 {
    let neighbours = graph.neighbours(node);
    let mut triplets = 0usize;
    let mut triangles = 0usize;

    for u in &neighbours {
        for v in &neighbours {
            if u.id() == v.id() {
                continue;
            }
            triplets += 1;
            if graph.has_edge_between(u, v) || graph.has_edge_between(v, u) {
                triangles += 1;
            }
        }
    }

    if triplets == 0 {
        return 0.0;
    }
    triangles as f64 / triplets as f64
}

/// Global clustering coefficient: the mean local coefficient over all nodes.
///
/// The empty graph has coefficient 0.
pub fn clustering_coef<G: GraphStore>(graph: &G) -> f64 {
    let nodes = graph.nodes();
    if nodes.is_empty() {
        return 0.0;
    }

    let sum: f64 = nodes
        .iter()
        .map(|node| clustering_coef_local(graph, node))
        .sum();
    sum / nodes.len() as f64
}
