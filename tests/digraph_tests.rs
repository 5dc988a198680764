use shortest_paths::graph::{Digraph, Graph};
use shortest_paths::Error;

#[test]
fn test_connect_inserts_edge_and_updates_counts() {
    let mut graph: Digraph<i64> = Digraph::new(3);

    let edge = graph.connect(0, 1, 7).unwrap();
    assert_eq!(edge.to, 1);
    assert_eq!(edge.weight, 7);

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.out_degree(0), 1);
    assert_eq!(graph.in_degree(1), 1);
    assert_eq!(graph.in_degree(0), 0);
}

#[test]
fn test_connect_rejects_invalid_vertices() {
    let mut graph: Digraph<i64> = Digraph::new(3);

    assert!(matches!(graph.connect(5, 0, 1), Err(Error::InvalidVertex(5))));
    assert!(matches!(graph.connect(0, 9, 1), Err(Error::InvalidVertex(9))));

    // The graph stays untouched after a rejected insertion.
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.out_degree(0), 0);
    assert_eq!(graph.in_degree(0), 0);
}

#[test]
fn test_adjacency_lists_stay_sorted_by_destination() {
    let mut graph: Digraph<i64> = Digraph::new(5);

    graph.connect(0, 3, 30).unwrap();
    graph.connect(0, 1, 10).unwrap();
    graph.connect(0, 4, 40).unwrap();
    graph.connect(0, 2, 20).unwrap();

    let destinations: Vec<usize> = graph.outgoing_edges(0).map(|(v, _)| v).collect();
    assert_eq!(destinations, vec![1, 2, 3, 4]);
}

#[test]
fn test_parallel_edges_persist_in_insertion_order() {
    let mut graph: Digraph<i64> = Digraph::new(3);

    graph.connect(0, 1, 5).unwrap();
    graph.connect(0, 2, 9).unwrap();
    graph.connect(0, 1, 3).unwrap();

    // Both 0 -> 1 edges survive; the newer one sits after the older one.
    assert_eq!(graph.edge_count(), 3);
    let edges: Vec<(usize, i64)> = graph.outgoing_edges(0).collect();
    assert_eq!(edges, vec![(1, 5), (1, 3), (2, 9)]);
    assert_eq!(graph.in_degree(1), 2);
}

#[test]
fn test_edge_count_matches_sum_of_out_degrees() {
    let mut graph: Digraph<i64> = Digraph::new(4);

    graph.connect(0, 1, 1).unwrap();
    graph.connect(1, 2, 2).unwrap();
    graph.connect(1, 3, 3).unwrap();
    graph.connect(3, 0, -4).unwrap();

    let total: usize = (0..4).map(|u| graph.out_degree(u)).sum();
    assert_eq!(graph.edge_count(), total);
}

#[test]
fn test_has_negative_edge() {
    let mut graph: Digraph<i64> = Digraph::new(3);
    graph.connect(0, 1, 2).unwrap();
    graph.connect(1, 2, 0).unwrap();
    assert!(!graph.has_negative_edge());

    graph.connect(2, 0, -1).unwrap();
    assert!(graph.has_negative_edge());
}
