//! Graph text language.
//!
//! A line-oriented syntax for building graphs, used heavily by tests:
//!
//! | Text             | Result                          |
//! |------------------|---------------------------------|
//! | `a b c`          | nodes a, b and c                |
//! | `a b -> c d`     | edges a->c, a->d, b->c and b->d |
//! | `a -- b`         | edges a->b and b->a             |
//! | `x -> y; y -> z` | `;` also ends a statement       |
//!
//! Labels are created on first mention and looked up afterwards, so in
//! `a b -> c d` the ids go a, c, d, b. Pairs with the same label on both
//! sides are skipped. Only `->` and `--` are valid
//! edge tokens.
//!
//! The builder works against the public [`GraphStore`] mutation API only.

mod error;

use pest::Parser as _;

use crate::config::LangConfig;
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphStore, Node};

pub use error::ParseError;

use parser::{GraphLangParser, Rule};

mod parser {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "lang/grammar.pest"]
    pub(super) struct GraphLangParser;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeKind {
    Directed,
    Bidirectional,
}

impl EdgeKind {
    fn parse(pair: &pest::iterators::Pair<'_, Rule>) -> std::result::Result<Self, ParseError> {
        match pair.as_str() {
            "->" => Ok(Self::Directed),
            "--" => Ok(Self::Bidirectional),
            other => {
                let (line, column) = pair.line_col();
                Err(ParseError::syntax(
                    line,
                    column,
                    format!("wrong edge syntax '{other}', expected '--' or '->'"),
                ))
            }
        }
    }
}

/// One parsed statement: a node list, optionally followed by an edge and a
/// second node list.
#[derive(Debug, Clone, PartialEq)]
struct Statement<'a> {
    sources: Vec<&'a str>,
    edge: Option<(EdgeKind, Vec<&'a str>)>,
}

fn parse_script(text: &str) -> std::result::Result<Vec<Statement<'_>>, ParseError> {
    let script = GraphLangParser::parse(Rule::script, text)
        .map_err(ParseError::from)?
        .next()
        .ok_or_else(|| ParseError::syntax(1, 1, "empty parse tree"))?;

    let mut statements = Vec::new();
    for pair in script.into_inner() {
        if pair.as_rule() != Rule::statement {
            continue;
        }

        let mut inner = pair.into_inner();
        let sources = inner.next().map(labels).unwrap_or_default();
        let edge = match (inner.next(), inner.next()) {
            (Some(op), Some(targets)) => Some((EdgeKind::parse(&op)?, labels(targets))),
            _ => None,
        };
        statements.push(Statement { sources, edge });
    }
    Ok(statements)
}

fn labels(pair: pest::iterators::Pair<'_, Rule>) -> Vec<&str> {
    pair.into_inner().map(|p| p.as_str()).collect()
}

/// Builds graphs from text.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphLang {
    edge_weight: f32,
}

impl Default for GraphLang {
    fn default() -> Self {
        Self::from_config(&LangConfig::default())
    }
}

impl GraphLang {
    /// Creates a builder giving every edge `edge_weight`.
    #[must_use]
    pub fn new(edge_weight: f32) -> Self {
        Self { edge_weight }
    }

    /// Creates a builder from configuration.
    #[must_use]
    pub fn from_config(config: &LangConfig) -> Self {
        Self::new(config.edge_weight)
    }

    /// Parses `text` and applies it to `graph`.
    ///
    /// The whole text is parsed before anything is written, so a syntax
    /// error leaves the graph untouched.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyGraphReference` if `graph` is `None`.
    /// - `Error::Parse` on a syntax error.
    /// - `Error::DuplicateLabel` only if another writer races on a label.
    pub fn populate<G: GraphStore>(&self, graph: Option<&G>, text: &str) -> Result<()> {
        let graph = graph.ok_or(Error::EmptyGraphReference)?;
        let statements = parse_script(text)?;

        for statement in &statements {
            let Some((kind, targets)) = &statement.edge else {
                for label in &statement.sources {
                    obtain(graph, label)?;
                }
                continue;
            };

            // Each source is obtained before its own targets.
            for source_label in &statement.sources {
                let source = obtain(graph, source_label)?;
                for target_label in targets {
                    if source_label == target_label {
                        continue;
                    }
                    let target = obtain(graph, target_label)?;
                    match kind {
                        EdgeKind::Directed => {
                            graph.add_edge(&source, &target, self.edge_weight);
                        }
                        EdgeKind::Bidirectional => {
                            graph.add_bi_edge(&source, &target, self.edge_weight);
                        }
                    }
                }
            }
        }

        tracing::debug!(
            statements = statements.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Graph populated from text"
        );
        Ok(())
    }

    /// Parses `text` into a new graph.
    pub fn parse_graph(&self, text: &str) -> Result<Graph> {
        let graph = Graph::new();
        self.populate(Some(&graph), text)?;
        Ok(graph)
    }
}

fn obtain<G: GraphStore>(graph: &G, label: &str) -> Result<Node> {
    match graph.node_by_label(label) {
        Some(node) => Ok(node),
        None => graph.new_node(label),
    }
}

/// Applies `text` to `graph` with the default edge weight (1.0).
///
/// # Errors
///
/// See [`GraphLang::populate`].
pub fn populate<G: GraphStore>(graph: Option<&G>, text: &str) -> Result<()> {
    GraphLang::default().populate(graph, text)
}

/// Parses `text` into a new graph with the default edge weight (1.0).
///
/// # Example
///
/// ```rust
/// use graphkit_core::{lang, GraphStore};
///
/// let graph = lang::parse_graph("a b -- c").unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 4);
/// ```
pub fn parse_graph(text: &str) -> Result<Graph> {
    GraphLang::default().parse_graph(text)
}
