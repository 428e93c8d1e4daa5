//! In-memory directed graph and the algorithms that run on it.
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::graph::{clustering_coef_local, depth_first, Graph, GraphStore};
//!
//! let graph = Graph::new();
//! let x = graph.new_node("x").unwrap();
//! let a = graph.new_node("a").unwrap();
//! let b = graph.new_node("b").unwrap();
//! graph.add_edge(&x, &a, 1.0);
//! graph.add_edge(&x, &b, 1.0);
//! graph.add_edge(&a, &b, 1.0);
//!
//! assert_eq!(depth_first(&graph, &x, |_| true), 3);
//! assert_eq!(clustering_coef_local(&graph, &x), 1.0);
//! ```

mod clustering;
mod shortest_path;
mod store;
pub mod traversal;
mod types;

#[cfg(test)]
mod store_tests;

pub use clustering::{clustering_coef, clustering_coef_local};
pub use shortest_path::{shortest_path, Path};
pub use store::{Graph, GraphStore};
pub use traversal::{bfs_iter, breadth_first, depth_first, dfs_iter, traverse, Walk};
pub use types::{Edge, Node, NodeId};
