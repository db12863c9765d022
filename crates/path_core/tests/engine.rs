use path_core::{compute, shortest_path, Graph, NodeName, PathError, Problem};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

fn names(result: &path_core::PathResult) -> Vec<&str> {
    result.path.iter().map(NodeName::as_str).collect()
}

#[test]
fn test_linear_path() {
    let result = compute(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D")]).unwrap();
    assert_eq!(names(&result), ["A", "B", "C", "D"]);
    assert_eq!(result.distance, 3);
}

#[test]
fn test_single_node_returns_trivial_path() {
    let no_edges: [(&str, &str); 0] = [];
    let result = compute(&["A"], &no_edges).unwrap();
    assert_eq!(names(&result), ["A"]);
    assert_eq!(result.distance, 0);
}

#[test]
fn test_cycle_terminates_with_correct_distance() {
    let result = compute(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]).unwrap();
    assert_eq!(result.to_string(), "A-B-C");
    assert_eq!(result.distance, 2);
}

#[test]
fn test_shortcut_beats_long_chain() {
    let result = compute(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("A", "E")],
    )
    .unwrap();
    assert_eq!(result.to_string(), "A-E");
    assert_eq!(result.distance, 1);
}

#[test]
fn test_longer_shortcut() {
    let problem = Problem::from_tokens(&[
        "6", "A", "B", "C", "D", "E", "F", "A-B", "B-C", "C-D", "D-E", "E-F", "A-F",
    ])
    .unwrap();
    assert_eq!(problem.solve().unwrap().to_string(), "A-F");
}

#[test]
fn test_disconnected_sink_is_unreachable() {
    let err = compute(&["A", "B", "C"], &[("A", "B")]).unwrap_err();
    assert_eq!(
        err,
        PathError::Unreachable {
            from: NodeName::from("A"),
            to: NodeName::from("C"),
        }
    );
    assert_eq!(err.to_string(), "No path found from A to C");
}

#[test]
fn test_edge_direction_matters() {
    let err = compute(&["A", "B"], &[("B", "A")]).unwrap_err();
    assert!(matches!(err, PathError::Unreachable { .. }));
}

#[test]
fn test_duplicate_names_rejected() {
    let err = compute(&["A", "A"], &[("A", "A")]).unwrap_err();
    assert_eq!(
        err,
        PathError::DuplicateNode {
            name: NodeName::from("A")
        }
    );
}

#[test]
fn test_unknown_edge_names_ignored() {
    let result = compute(&["A", "B"], &[("A", "Q"), ("Q", "B"), ("A", "B")]).unwrap();
    assert_eq!(result.to_string(), "A-B");
}

#[test]
fn test_unknown_edges_do_not_create_paths() {
    let err = compute(&["A", "B"], &[("A", "Q"), ("Q", "B")]).unwrap_err();
    assert!(matches!(err, PathError::Unreachable { .. }));
}

#[test]
fn test_repeated_calls_are_identical() {
    let nodes = ["S", "X", "Y", "Z", "T"];
    let edges = [("S", "Y"), ("S", "X"), ("X", "T"), ("Y", "T"), ("Z", "T")];
    let first = compute(&nodes, &edges).unwrap();
    let second = compute(&nodes, &edges).unwrap();
    assert_eq!(first, second);
    // X (index 1) is expanded before Y (index 2) even though S->Y came first.
    assert_eq!(first.to_string(), "S-X-T");
}

#[test]
fn test_prebuilt_graph_matches_compute() {
    let nodes = ["A", "B", "C"];
    let edges = [("A", "B"), ("B", "C")];
    let graph = Graph::build(&nodes, &edges).unwrap();
    assert_eq!(shortest_path(&graph), compute(&nodes, &edges));
}

// ---------------------------------------------------------------------------
// Brute-force cross-check
// ---------------------------------------------------------------------------

/// Plain BFS hop count from node 0 to node n-1 over an index edge list.
fn bfs_distance(n: usize, edges: &[(usize, usize)]) -> Option<usize> {
    let mut dist = vec![None; n];
    dist[0] = Some(0);
    let mut queue = VecDeque::from([0]);
    while let Some(u) = queue.pop_front() {
        let du: usize = dist[u].unwrap();
        for &(a, b) in edges {
            if a == u && dist[b].is_none() {
                dist[b] = Some(du + 1);
                queue.push_back(b);
            }
        }
    }
    dist[n - 1]
}

#[test]
fn test_random_graphs_match_bfs() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..300 {
        let n = rng.gen_range(1..12);
        let edge_count = rng.gen_range(0..n * 3);
        let index_edges: Vec<(usize, usize)> = (0..edge_count)
            .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
            .collect();

        let nodes: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
        let edges: Vec<(String, String)> = index_edges
            .iter()
            .map(|&(a, b)| (nodes[a].clone(), nodes[b].clone()))
            .collect();

        let expected = bfs_distance(n, &index_edges);
        match (compute(&nodes, &edges), expected) {
            (Ok(result), Some(d)) => {
                assert_eq!(result.distance, d, "nodes={nodes:?} edges={edges:?}");
                assert_eq!(result.path.len(), d + 1);
                assert_eq!(result.source().map(NodeName::as_str), Some(nodes[0].as_str()));
                assert_eq!(result.sink().map(NodeName::as_str), Some(nodes[n - 1].as_str()));
                // Every consecutive pair must be a real edge.
                for pair in result.path.windows(2) {
                    assert!(edges
                        .iter()
                        .any(|(a, b)| a == pair[0].as_str() && b == pair[1].as_str()));
                }
            }
            (Err(PathError::Unreachable { .. }), None) => {}
            (got, want) => panic!("mismatch: got {got:?}, bfs {want:?}, edges={edges:?}"),
        }
    }
}
