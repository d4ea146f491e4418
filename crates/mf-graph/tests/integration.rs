//! Integration tests for mf-graph.

use mf_graph::{Capacity, Edge, FlowGraph, GraphError};
use proptest::prelude::*;

const EXAMPLE: &str = "
 A B 4
 A C 5
 B D 5
 C B 2
 C D 4
";

fn example_edges() -> Vec<(&'static str, &'static str, i32)> {
    vec![
        ("A", "B", 4),
        ("A", "C", 5),
        ("B", "D", 5),
        ("C", "B", 2),
        ("C", "D", 4),
    ]
}

#[test]
fn three_construction_paths_agree() {
    let from_text = FlowGraph::parse_text(EXAMPLE).unwrap();
    let from_adjacency = FlowGraph::from_adjacency([
        ("A", vec![("B", 4), ("C", 5)]),
        ("B", vec![("D", 5)]),
        ("C", vec![("B", 2), ("D", 4)]),
        ("D", vec![]),
    ]);
    let from_lists = FlowGraph::from_nodes_edges(["A", "B", "C", "D"], example_edges()).unwrap();

    assert_eq!(from_text, from_adjacency);
    assert_eq!(from_lists, from_adjacency);
    assert_eq!(from_text.nodes(), from_lists.nodes());
}

#[test]
fn lists_round_trip() {
    let graph = FlowGraph::from_nodes_edges(["A", "B", "C", "D"], example_edges()).unwrap();

    assert_eq!(graph.nodes(), ["A", "B", "C", "D"]);
    let edges: Vec<Edge> = graph.edges().collect();
    let expected: Vec<Edge> = example_edges()
        .into_iter()
        .map(|(o, d, c)| Edge::new(o, d, c))
        .collect();
    assert_eq!(edges, expected);
}

#[test]
fn isolated_listed_node_is_kept() {
    let graph = FlowGraph::from_nodes_edges(["A", "B", "C"], [("A", "B", 1)]).unwrap();
    let expected = FlowGraph::from_adjacency([("A", vec![("B", 1)]), ("B", vec![]), ("C", vec![])]);
    assert_eq!(graph, expected);
    assert_eq!(graph.sink(), Some("C"));
}

#[test]
fn duplicate_pair_builds_nothing() {
    let result = FlowGraph::from_nodes_edges(["A", "B", "C"], [("A", "B", 1), ("A", "B", 2)]);
    assert_eq!(
        result.unwrap_err(),
        GraphError::DuplicateEdge {
            origin: "A".into(),
            destination: "B".into()
        }
    );
}

#[test]
fn adjacency_matrix_with_self_loop() {
    let graph = FlowGraph::from_adjacency([
        ("A", vec![("B", 1), ("C", 2)]),
        ("B", vec![("A", 3), ("C", 4)]),
        ("C", vec![("C", 5)]),
    ]);
    let m = graph.adjacency_matrix();
    let rows: Vec<Vec<f64>> = (0..3)
        .map(|i| m.row(i).iter().copied().collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec![0.0, 1.0, 2.0],
            vec![3.0, 0.0, 4.0],
            vec![0.0, 0.0, 5.0],
        ]
    );
    assert!(graph.is_ordered());
}

#[test]
fn decimal_capacities_from_text() {
    let graph = FlowGraph::parse_text("S T 1.5\nS U 2\nU T 0.25").unwrap();
    assert_eq!(graph.capacity("S", "T"), Some(Capacity::Decimal(1.5)));
    assert_eq!(graph.capacity("U", "T").map(Capacity::value), Some(0.25));
    assert!(graph.validate().is_ok());
}

/// Random simple digraphs as (node count, edges with non-zero capacities).
fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..7).prop_flat_map(|n| {
        let pairs = prop::collection::btree_map((0..n, 0..n), 1u32..100, 0..(n * n));
        (Just(n), pairs.prop_map(|m| m.into_iter().map(|((o, d), c)| (o, d, c)).collect()))
    })
}

fn build((n, edges): &(usize, Vec<(usize, usize, u32)>)) -> FlowGraph {
    let names: Vec<String> = (0..*n).map(|i| format!("n{i}")).collect();
    FlowGraph::from_nodes_edges(
        names.clone(),
        edges
            .iter()
            .map(|&(o, d, c)| (names[o].clone(), names[d].clone(), c)),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn matrix_has_one_nonzero_per_edge(input in arb_graph()) {
        let graph = build(&input);
        let m = graph.adjacency_matrix();
        let nonzero = m.iter().filter(|&&v| v != 0.0).count();
        prop_assert_eq!(nonzero, input.1.len());
        for &(o, d, c) in &input.1 {
            prop_assert_eq!(m[(o, d)], f64::from(c));
        }
    }

    #[test]
    fn ordered_iff_not_symmetric(input in arb_graph()) {
        let graph = build(&input);
        let m = graph.adjacency_matrix();
        prop_assert_eq!(graph.is_ordered(), m != m.transpose());
    }

    #[test]
    fn symmetric_closure_is_not_ordered(input in arb_graph()) {
        let (n, edges) = input;
        let mut both = std::collections::BTreeMap::new();
        for (o, d, c) in edges {
            both.entry((o, d)).or_insert(c);
            both.entry((d, o)).or_insert(c);
        }
        // Force symmetric capacities.
        let sym: Vec<(usize, usize, u32)> = both
            .keys()
            .map(|&(o, d)| (o, d, both[&(o.min(d), o.max(d))]))
            .collect();
        let graph = build(&(n, sym));
        prop_assert!(!graph.is_ordered());
    }

    #[test]
    fn text_and_lists_agree(input in arb_graph()) {
        let graph = build(&input);
        let text: String = graph
            .edges()
            .map(|e| format!("{} {} {}\n", e.origin, e.destination, e.capacity))
            .collect();
        let reparsed = FlowGraph::parse_text(&text).unwrap();
        // Text cannot carry isolated nodes.
        let connected: Vec<&String> = graph
            .nodes()
            .iter()
            .filter(|n| reparsed.contains_node(n))
            .collect();
        prop_assert_eq!(reparsed.edge_count(), graph.edge_count());
        for e in graph.edges() {
            prop_assert_eq!(reparsed.capacity(&e.origin, &e.destination), Some(e.capacity));
        }
        prop_assert_eq!(reparsed.node_count(), connected.len());
    }
}
