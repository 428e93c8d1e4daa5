//! # GraphKit Core
//!
//! In-memory directed graph engine.
//!
//! `GraphKit` keeps a mutable node/edge store behind a reader/writer lock and
//! ships the analysis algorithms that run on top of it:
//!
//! - **Traversal**: one generic walk driven by a FIFO or LIFO frontier (BFS/DFS)
//! - **Shortest path**: Dijkstra over non-negative edge weights
//! - **Clustering**: local and global clustering coefficients
//! - **Generators**: Erdos-Renyi random graphs and circulant regular graphs
//! - **Text language**: build graphs from `a -> b c; b -- c` style scripts
//!
//! ## Quick Start
//!
//! ```rust
//! use graphkit_core::graph::{breadth_first, shortest_path};
//! use graphkit_core::{lang, GraphStore};
//!
//! let graph = lang::parse_graph("a -> b; b -> c").unwrap();
//! let a = graph.node_by_label("a").unwrap();
//! let c = graph.node_by_label("c").unwrap();
//!
//! assert_eq!(breadth_first(&graph, &a, |_| true), 3);
//!
//! let path = shortest_path(&graph, &a, &c).unwrap();
//! assert_eq!(path.distance(), 2.0);
//! assert_eq!(path.len(), 2);
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::float_cmp, clippy::cast_precision_loss))]

pub mod config;
pub mod error;
pub mod frontier;
#[cfg(test)]
mod frontier_tests;
pub mod generators;
pub mod graph;
pub mod lang;

pub use config::{GeneratorConfig, GraphConfig, GraphKitConfig, LangConfig};
pub use error::{Error, Result};
pub use frontier::{Frontier, Queue, Stack};
pub use generators::{new_random, new_random_bidir, new_regular, GraphGenerator};
pub use graph::{Edge, Graph, GraphStore, Node, NodeId, Path};
