//! Tests for the in-memory graph store.

use super::store::{Graph, GraphStore};
use super::types::Node;
use crate::config::GraphConfig;
use crate::error::Error;

fn build_test_graph() -> (Graph, Vec<Node>) {
    let graph = Graph::new();
    let nodes: Vec<Node> = ["a", "b", "c", "d"]
        .iter()
        .map(|label| graph.new_node(label).unwrap())
        .collect();
    graph.add_edge(&nodes[0], &nodes[1], 1.0);
    graph.add_edge(&nodes[0], &nodes[2], 2.0);
    graph.add_edge(&nodes[1], &nodes[2], 3.0);
    graph.add_edge(&nodes[2], &nodes[3], 4.0);
    (graph, nodes)
}

#[test]
fn test_new_node_assigns_dense_ids() {
    let graph = Graph::new();
    let a = graph.new_node("a").unwrap();
    let b = graph.new_node("").unwrap();
    let c = graph.new_node("c").unwrap();

    assert_eq!(a.id().as_u64(), 1);
    assert_eq!(b.id().as_u64(), 2);
    assert_eq!(c.id().as_u64(), 3);
    assert_eq!(graph.max_node_id(), 3);
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_duplicate_label_rejected_without_side_effects() {
    let graph = Graph::new();
    let a = graph.new_node("a").unwrap();

    let err = graph.new_node("a").unwrap_err();
    assert!(matches!(err, Error::DuplicateLabel(ref label) if label == "a"));
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.max_node_id(), 1);
    assert_eq!(graph.node_by_label("a"), Some(a));

    let b = graph.new_node("b").unwrap();
    assert_eq!(b.id().as_u64(), 2);
}

#[test]
fn test_unlabeled_nodes_are_never_found() {
    let graph = Graph::new();
    let first = graph.new_node("").unwrap();
    let second = graph.new_node("").unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(first.label(), None);
    assert_eq!(graph.node_by_label(""), None);
    assert_eq!(graph.node_by_label("missing"), None);
}

#[test]
fn test_add_edge_overwrites_weight() {
    let (graph, nodes) = build_test_graph();
    assert_eq!(graph.edge_count(), 4);

    let edge = graph.add_edge(&nodes[0], &nodes[1], 9.0);
    assert_eq!(edge.weight(), 9.0);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.edge_weight(&nodes[0], &nodes[1]), Some(9.0));
    assert_eq!(graph.in_edges(&nodes[1])[0].weight(), 9.0);
}

#[test]
fn test_overwrite_keeps_enumeration_position() {
    let (graph, nodes) = build_test_graph();
    graph.add_edge(&nodes[0], &nodes[1], 5.0);

    let targets: Vec<_> = graph.neighbours(&nodes[0]).iter().map(Node::id).collect();
    assert_eq!(targets, vec![nodes[1].id(), nodes[2].id()]);
}

#[test]
fn test_has_edge_between_is_directed() {
    let (graph, nodes) = build_test_graph();
    assert!(graph.has_edge_between(&nodes[0], &nodes[1]));
    assert!(!graph.has_edge_between(&nodes[1], &nodes[0]));
    assert!(!graph.has_edge_between(&nodes[3], &nodes[0]));
}

#[test]
fn test_add_bi_edge_creates_two_edges() {
    let graph = Graph::new();
    let a = graph.new_node("a").unwrap();
    let b = graph.new_node("b").unwrap();
    graph.add_bi_edge(&a, &b, 0.5);

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.has_edge_between(&a, &b));
    assert!(graph.has_edge_between(&b, &a));
}

#[test]
fn test_incoming_mirrors_outgoing() {
    let (graph, nodes) = build_test_graph();
    graph.add_bi_edge(&nodes[3], &nodes[0], 7.0);

    for node in graph.nodes() {
        for edge in graph.out_edges(&node) {
            let mirrored = graph
                .in_edges(edge.target())
                .into_iter()
                .find(|e| e.source().id() == node.id())
                .expect("incoming entry for every outgoing edge");
            assert_eq!(mirrored, edge);
        }
        for edge in graph.in_edges(&node) {
            assert!(graph.has_edge_between(edge.source(), &node));
        }
    }
}

#[test]
fn test_degree_sums_equal_edge_count() {
    let (graph, nodes) = build_test_graph();
    let out: usize = nodes.iter().map(|n| graph.out_degree(n)).sum();
    let inc: usize = nodes.iter().map(|n| graph.in_degree(n)).sum();

    assert_eq!(out, graph.edge_count());
    assert_eq!(inc, graph.edge_count());
    assert_eq!(graph.out_degree(&nodes[0]), 2);
    assert_eq!(graph.in_degree(&nodes[2]), 2);
    assert_eq!(graph.out_degree(&nodes[3]), 0);
}

#[test]
fn test_nodes_in_creation_order() {
    let (graph, nodes) = build_test_graph();
    assert_eq!(graph.nodes(), nodes);
}

#[test]
fn test_node_iter_stops_early() {
    let (graph, _) = build_test_graph();
    let mut seen = Vec::new();
    graph.node_iter(|node| {
        seen.push(node.label().unwrap().to_string());
        seen.len() < 2
    });
    assert_eq!(seen, ["a", "b"]);
}

#[test]
fn test_edge_and_neighbour_iter() {
    let (graph, nodes) = build_test_graph();

    let mut weights = Vec::new();
    graph.edge_iter(&nodes[0], |edge| {
        weights.push(edge.weight());
        true
    });
    assert_eq!(weights, [1.0, 2.0]);

    let mut count = 0;
    graph.neighbour_iter(&nodes[0], |_| {
        count += 1;
        false
    });
    assert_eq!(count, 1);
}

#[test]
fn test_callbacks_may_reenter_the_store() {
    let (graph, nodes) = build_test_graph();
    graph.node_iter(|node| {
        graph.add_edge(node, &nodes[3], 0.0);
        graph.node_count() > 0
    });
    graph.edge_iter(&nodes[0], |edge| {
        assert!(graph.has_edge_between(edge.source(), edge.target()));
        true
    });

    // node d now has a self loop
    assert!(graph.has_edge_between(&nodes[3], &nodes[3]));
    assert_eq!(graph.in_degree(&nodes[3]), 4);
}

#[test]
fn test_is_connected() {
    assert!(!Graph::new().is_connected());

    let (graph, _) = build_test_graph();
    assert!(graph.is_connected());

    graph.new_node("island").unwrap();
    assert!(!graph.is_connected());

    let single = Graph::new();
    single.new_node("").unwrap();
    assert!(single.is_connected());

    // reachability is directed and starts at the first node
    let (graph, nodes) = build_test_graph();
    let e = graph.new_node("e").unwrap();
    graph.add_edge(&e, &nodes[3], 1.0);
    assert!(!graph.is_connected());
    graph.add_edge(&nodes[0], &e, 1.0);
    assert!(graph.is_connected());
}

#[test]
fn test_display_lists_out_neighbours() {
    let graph = Graph::new();
    let a = graph.new_node("a").unwrap();
    let b = graph.new_node("b").unwrap();
    let c = graph.new_node("").unwrap();
    graph.add_edge(&a, &b, 1.0);
    graph.add_edge(&a, &c, 1.0);

    assert_eq!(graph.to_string(), "1:a -> [2:b 3]\n2:b -> []\n3 -> []\n");
    assert_eq!(Graph::new().to_string(), "");
}

#[test]
fn test_from_config() {
    let graph = Graph::from_config(&GraphConfig { node_capacity: 64 });
    assert_eq!(graph.node_count(), 0);
    graph.new_node("x").unwrap();
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_concurrent_writers() {
    let graph = Graph::new();
    let hub = graph.new_node("hub").unwrap();

    std::thread::scope(|scope| {
        for t in 0..8 {
            let graph = &graph;
            let hub = &hub;
            scope.spawn(move || {
                for i in 0..50 {
                    let node = graph.new_node(&format!("n{t}-{i}")).unwrap();
                    graph.add_bi_edge(hub, &node, 1.0);
                }
            });
        }
    });

    assert_eq!(graph.node_count(), 401);
    assert_eq!(graph.max_node_id(), 401);
    assert_eq!(graph.edge_count(), 800);
    assert_eq!(graph.out_degree(&hub), 400);
    assert_eq!(graph.in_degree(&hub), 400);
    assert!(graph.is_connected());
}

#[test]
fn test_concurrent_duplicate_labels_admit_one_winner() {
    let graph = Graph::new();
    let winners = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| graph.new_node("contested").is_ok()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count()
    });

    assert_eq!(winners, 1);
    assert_eq!(graph.node_count(), 1);
}
