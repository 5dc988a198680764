use shortest_paths::graph::Graph;
use shortest_paths::{io, CostMatrix, Error, FloydWarshall};

#[test]
fn test_read_digraph() {
    let input = "G 3 3\nE 0 1 1\nE 1 2 2\nE 0 2 5\n";
    let graph = io::read_digraph(input.as_bytes()).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);

    let edges: Vec<(usize, i64)> = graph.outgoing_edges(0).collect();
    assert_eq!(edges, vec![(1, 1), (2, 5)]);
}

#[test]
fn test_read_digraph_negative_weights_and_blank_lines() {
    let input = "\nG 2 2\n\nE 0 1 1\nE 1 0 -3\n";
    let graph = io::read_digraph(input.as_bytes()).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.has_negative_edge());
}

#[test]
fn test_read_digraph_rejects_bad_header() {
    let result = io::read_digraph("H 3 3\n".as_bytes());
    assert!(matches!(result, Err(Error::InvalidFormat(_))));

    let result = io::read_digraph("G 3\n".as_bytes());
    assert!(matches!(result, Err(Error::InvalidFormat(_))));
}

#[test]
fn test_read_digraph_rejects_bad_edge_line() {
    let result = io::read_digraph("G 2 1\nE 0 1\n".as_bytes());
    assert!(matches!(result, Err(Error::InvalidFormat(_))));

    let result = io::read_digraph("G 2 1\nE 0 x 1\n".as_bytes());
    assert!(matches!(result, Err(Error::InvalidFormat(_))));
}

#[test]
fn test_read_digraph_skips_out_of_range_edges() {
    // Edge to vertex 9 is reported and skipped; the rest is kept.
    let input = "G 2 2\nE 0 9 1\nE 0 1 3\n";
    let graph = io::read_digraph(input.as_bytes()).unwrap();

    assert_eq!(graph.edge_count(), 1);
    let edges: Vec<(usize, i64)> = graph.outgoing_edges(0).collect();
    assert_eq!(edges, vec![(1, 3)]);
}

#[test]
fn test_write_matrix_serializes_unreachable_as_inf() {
    let matrix = CostMatrix::from_rows(vec![
        vec![Some(0i64), Some(4), None],
        vec![None, Some(0), Some(-2)],
        vec![None, None, Some(0)],
    ]);

    let mut out = Vec::new();
    io::write_matrix(&matrix, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "3\n0 4 inf\ninf 0 -2\ninf inf 0\n");
}

#[test]
fn test_write_distances_single_row() {
    let distances = vec![Some(0i64), None, Some(7)];

    let mut out = Vec::new();
    io::write_distances(&distances, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "0 inf 7\n");
}

#[test]
fn test_parse_solve_serialize() {
    let input = "G 3 3\nE 0 1 1\nE 1 2 2\nE 0 2 5\n";
    let graph = io::read_digraph(input.as_bytes()).unwrap();

    let matrix = FloydWarshall::new().cost_matrix(&graph);

    let mut out = Vec::new();
    io::write_matrix(&matrix, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "3\n0 1 3\ninf 0 2\ninf inf 0\n"
    );
}
