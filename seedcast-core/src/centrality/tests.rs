//! Engine-level tests across all seven metrics.

use rstest::rstest;

use crate::generate::{BarabasiAlbert, HolmeKim};
use crate::graph::{Graph, NodeId};

use super::compute_centrality;

fn complete_graph(n: usize) -> Graph {
    let mut graph = Graph::with_node_count(n);
    for i in 0..n {
        for j in (i + 1)..n {
            graph
                .add_edge(NodeId::new(i), NodeId::new(j))
                .expect("endpoints exist");
        }
    }
    graph
}

#[test]
fn empty_graph_yields_an_empty_map() {
    let metrics = compute_centrality(&Graph::new());
    assert!(metrics.is_empty());
    assert!(metrics.get(NodeId::new(0)).is_none());
}

#[test]
fn singleton_yields_all_zero_metrics() {
    let metrics = compute_centrality(&Graph::with_node_count(1));
    let record = metrics.get(NodeId::new(0)).expect("one record");
    assert_eq!(record.degree_in, 0.0);
    assert_eq!(record.degree_out, 0.0);
    assert_eq!(record.degree_total, 0.0);
    assert_eq!(record.betweenness, 0.0);
    assert_eq!(record.closeness, 0.0);
    assert_eq!(record.eigenvector, 0.0);
    assert_eq!(record.pagerank, 0.0);
}

#[rstest]
#[case::k3(3)]
#[case::k5(5)]
fn complete_graphs_have_unit_degree_centrality(#[case] n: usize) {
    let metrics = compute_centrality(&complete_graph(n));
    for record in metrics.records() {
        assert!((record.degree_total - 1.0).abs() < 1e-12);
        // One orientation per pair: in and out split the total.
        assert!((record.degree_in + record.degree_out - record.degree_total).abs() < 1e-12);
        assert_eq!(record.betweenness, 0.0);
    }
}

#[test]
fn directed_line_matches_hand_computed_values() {
    let mut graph = Graph::with_node_count(3);
    graph.add_edge(NodeId::new(0), NodeId::new(1)).unwrap();
    graph.add_edge(NodeId::new(1), NodeId::new(2)).unwrap();
    let metrics = compute_centrality(&graph);

    let first = metrics.get(NodeId::new(0)).expect("record");
    let middle = metrics.get(NodeId::new(1)).expect("record");
    let last = metrics.get(NodeId::new(2)).expect("record");

    assert!((first.closeness - 2.0 / 3.0).abs() < 1e-12);
    assert!((middle.closeness - 0.5).abs() < 1e-12);
    assert_eq!(last.closeness, 0.0);

    assert!((middle.betweenness - 0.5).abs() < 1e-12);
    assert_eq!(first.betweenness, 0.0);

    assert!((first.degree_out - 0.5).abs() < 1e-12);
    assert!((middle.degree_total - 1.0).abs() < 1e-12);
    assert_eq!(first.degree_in, 0.0);
}

#[rstest]
#[case::pair(2, 1)]
#[case::small(10, 2)]
#[case::denser(40, 4)]
fn pagerank_sums_to_one_on_generated_graphs(#[case] nodes: usize, #[case] attachment: usize) {
    let graph = BarabasiAlbert::new(nodes, attachment)
        .expect("valid parameters")
        .generate();
    let metrics = compute_centrality(&graph);
    let sum: f64 = metrics.records().iter().map(|record| record.pagerank).sum();
    assert!((sum - 1.0).abs() < 1e-6, "pagerank sum drifted to {sum}");
}

#[test]
fn all_metrics_stay_within_the_unit_interval() {
    let graph = HolmeKim::new(40, 3, 0.7).expect("valid parameters").generate();
    let metrics = compute_centrality(&graph);
    assert_eq!(metrics.len(), 40);
    for record in metrics.records() {
        for (name, value) in [
            ("degree_in", record.degree_in),
            ("degree_out", record.degree_out),
            ("degree_total", record.degree_total),
            ("betweenness", record.betweenness),
            ("closeness", record.closeness),
            ("eigenvector", record.eigenvector),
            ("pagerank", record.pagerank),
        ] {
            assert!(
                (0.0..=1.0).contains(&value) && value.is_finite(),
                "{name} for node {} left [0, 1]: {value}",
                record.node
            );
        }
    }
}

#[test]
fn isolates_in_a_disconnected_graph_score_zero_without_failing() {
    let mut graph = Graph::with_node_count(5);
    graph.add_edge(NodeId::new(0), NodeId::new(1)).unwrap();
    graph.add_edge(NodeId::new(1), NodeId::new(2)).unwrap();
    let metrics = compute_centrality(&graph);
    let hermit = metrics.get(NodeId::new(4)).expect("record");
    assert_eq!(hermit.degree_total, 0.0);
    assert_eq!(hermit.closeness, 0.0);
    // Power iteration leaves isolates with a residual near the tolerance.
    assert!(hermit.eigenvector < 1e-4);
    // Teleport mass still reaches unlinked nodes.
    assert!(hermit.pagerank > 0.0);
}

#[test]
fn records_follow_node_insertion_order() {
    let graph = complete_graph(4);
    let metrics = compute_centrality(&graph);
    for (index, record) in metrics.records().iter().enumerate() {
        assert_eq!(record.node, NodeId::new(index));
    }
}
