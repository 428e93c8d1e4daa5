//! Error types for GraphKit.

use thiserror::Error;

use crate::graph::NodeId;
use crate::lang::ParseError;

/// GraphKit error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A node with this non-empty label already exists.
    #[error("Node with label '{0}' already exists")]
    DuplicateLabel(String),

    /// A generator (or other operation) received an out-of-range parameter.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dijkstra met a negative (or NaN) edge weight; no partial result is
    /// produced.
    #[error("Negative edge weight {weight} on edge {from} -> {to}: Dijkstra requires non-negative weights")]
    NegativeWeight {
        /// Source node of the offending edge.
        from: NodeId,
        /// Target node of the offending edge.
        to: NodeId,
        /// The negative weight.
        weight: f32,
    },

    /// The destination is unreachable from the source.
    #[error("Path not found from node {from} to node {to}")]
    PathNotFound {
        /// Source node.
        from: NodeId,
        /// Destination node.
        to: NodeId,
    },

    /// A builder operation was invoked without a graph to build into.
    #[error("Graph reference is empty")]
    EmptyGraphReference,

    /// Graph text language syntax error.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration could not be loaded or extracted.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for GraphKit operations.
pub type Result<T> = std::result::Result<T, Error>;
