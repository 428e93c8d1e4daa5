//! Random and regular graph generators.
//!
//! Generators build graphs through the public [`GraphStore`] mutation API
//! only. Randomness is injected: pass any [`rand::Rng`], or use
//! [`GraphGenerator`] which owns a seedable `StdRng` built from
//! [`GeneratorConfig`].
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::{GraphGenerator, GraphStore};
//!
//! let mut generator = GraphGenerator::seeded(7);
//! let graph = generator.random(10, 1.0).unwrap();
//! assert_eq!(graph.edge_count(), 90);
//!
//! let ring = graphkit_core::new_regular(6, 2).unwrap();
//! assert_eq!(ring.edge_count(), 12);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphStore, Node};

fn check_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "p should be in [0, 1] interval, got {p}"
        )))
    }
}

fn unlabeled_nodes(graph: &Graph, n: usize) -> Result<Vec<Node>> {
    (0..n).map(|_| graph.new_node("")).collect()
}

/// Samples each ordered pair `(i, j)`, `i != j`, with probability `p` and
/// hands included pairs to `connect`.
fn sample_pairs<R, F>(n: usize, p: f64, rng: &mut R, mut connect: F) -> Result<Graph>
where
    R: Rng + ?Sized,
    F: FnMut(&Graph, &Node, &Node),
{
    check_probability(p)?;

    let graph = Graph::with_capacity(n);
    let nodes = unlabeled_nodes(&graph, n)?;

    for (i, a) in nodes.iter().enumerate() {
        for (j, b) in nodes.iter().enumerate() {
            if i != j && rng.gen_bool(p) {
                connect(&graph, a, b);
            }
        }
    }
    Ok(graph)
}

/// Directed Erdos-Renyi graph: `n` unlabeled nodes, each ordered pair
/// joined with probability `p`. Edges have weight 0.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` unless `p` is in `[0, 1]`.
pub fn new_random<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<Graph> {
    new_random_weighted(n, p, 0.0, rng)
}

/// Like [`new_random`], but every included pair adds edges in both
/// directions.
///
/// This doubles a directed sample; it is not an independently sampled
/// undirected Erdos-Renyi graph.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` unless `p` is in `[0, 1]`.
pub fn new_random_bidir<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<Graph> {
    new_random_bidir_weighted(n, p, 0.0, rng)
}

fn new_random_weighted<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    weight: f32,
    rng: &mut R,
) -> Result<Graph> {
    let graph = sample_pairs(n, p, rng, |g, a, b| {
        g.add_edge(a, b, weight);
    })?;
    tracing::debug!(
        nodes = n,
        p,
        edges = graph.edge_count(),
        "Generated random graph"
    );
    Ok(graph)
}

fn new_random_bidir_weighted<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    weight: f32,
    rng: &mut R,
) -> Result<Graph> {
    let graph = sample_pairs(n, p, rng, |g, a, b| g.add_bi_edge(a, b, weight))?;
    tracing::debug!(
        nodes = n,
        p,
        edges = graph.edge_count(),
        "Generated bidirectional random graph"
    );
    Ok(graph)
}

/// Circulant regular graph: every node gets out-degree exactly `k`.
///
/// Nodes are arranged on a circle and each connects to its `k / 2` nearest
/// neighbours on either side; for odd `k` each node also connects to the
/// node opposite it (`(i + n / 2) mod n`). The result has `n * k` edges of
/// weight 0.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` unless `k < n`. `n = k = 0` yields the
/// empty graph.
pub fn new_regular(n: usize, k: usize) -> Result<Graph> {
    new_regular_weighted(n, k, 0.0)
}

fn new_regular_weighted(n: usize, k: usize, weight: f32) -> Result<Graph> {
    if n == 0 && k == 0 {
        return Ok(Graph::new());
    }
    if k >= n {
        return Err(Error::InvalidParameter(format!(
            "k should be less than n, got n = {n}, k = {k}"
        )));
    }

    let graph = Graph::with_capacity(n);
    let nodes = unlabeled_nodes(&graph, n)?;
    let half = k / 2;
    let odd = k % 2 == 1;

    for (i, node) in nodes.iter().enumerate() {
        for j in 1..=half {
            graph.add_edge(node, &nodes[(i + j) % n], weight);
            graph.add_edge(node, &nodes[(i + n - j) % n], weight);
        }
        if odd {
            graph.add_edge(node, &nodes[(i + n / 2) % n], weight);
        }
    }

    tracing::debug!(
        nodes = n,
        k,
        edges = graph.edge_count(),
        "Generated regular graph"
    );
    Ok(graph)
}

/// Generator front-end owning its RNG and edge weight.
///
/// Two generators built with the same seed produce identical graphs.
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    rng: StdRng,
    edge_weight: f32,
}

impl GraphGenerator {
    /// Builds a generator from configuration.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            edge_weight: config.edge_weight,
        }
    }

    /// Builds a generator with a fixed seed and weight-0 edges.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_config(&GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
    }

    /// See [`new_random`].
    pub fn random(&mut self, n: usize, p: f64) -> Result<Graph> {
        new_random_weighted(n, p, self.edge_weight, &mut self.rng)
    }

    /// See [`new_random_bidir`].
    pub fn random_bidir(&mut self, n: usize, p: f64) -> Result<Graph> {
        new_random_bidir_weighted(n, p, self.edge_weight, &mut self.rng)
    }

    /// See [`new_regular`].
    pub fn regular(&self, n: usize, k: usize) -> Result<Graph> {
        new_regular_weighted(n, k, self.edge_weight)
    }
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}
