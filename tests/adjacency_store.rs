//! Adjacency store tests: mutation, enumeration, and the permissive contract.

use graph_engine::graph::{DirectedGraph, DirectedGraphBuilder, UndirectedGraph, UndirectedGraphBuilder};
use graph_engine::types::{GraphError, WeightedEdge};

fn sample_edges() -> Vec<(usize, usize, i64)> {
    vec![
        (0, 1, 10),
        (4, 0, 12),
        (1, 4, 15),
        (4, 3, 3),
        (3, 1, 5),
        (2, 1, 23),
        (3, 2, 7),
    ]
}

fn pairs(edges: &[&str]) -> Vec<(String, String)> {
    edges
        .iter()
        .map(|e| (e[0..1].to_string(), e[1..2].to_string()))
        .collect()
}

fn s(label: &str) -> String {
    label.to_string()
}

// ==================== Directed: vertices ====================

#[test]
fn test_add_vertex_grows_square_matrix() {
    let mut g = DirectedGraph::new();
    assert_eq!(g.vertex_count(), 0);
    for n in 1..=5 {
        assert_eq!(g.add_vertex(), n);
    }
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.matrix().len(), 5);
    for row in g.matrix() {
        assert_eq!(row.len(), 5);
        assert!(row.iter().all(|&w| w == 0));
    }
    assert_eq!(g.get_vertices(), vec![0, 1, 2, 3, 4]);
    assert!(g.get_edges().is_empty());
}

#[test]
fn test_add_vertex_keeps_existing_edges() {
    let mut g = DirectedGraph::from_edges([(0, 1, 4)]);
    g.add_vertex();
    assert_eq!(g.weight(0, 1), Some(4));
    assert_eq!(g.weight(0, 2), None);
    assert_eq!(g.weight(2, 0), None);
}

// ==================== Directed: edges ====================

#[test]
fn test_from_edges_sizes_by_max_endpoint() {
    let g = DirectedGraph::from_edges(sample_edges());
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.edge_count(), 7);
    assert_eq!(
        g.get_edges(),
        vec![
            WeightedEdge::new(0, 1, 10),
            WeightedEdge::new(1, 4, 15),
            WeightedEdge::new(2, 1, 23),
            WeightedEdge::new(3, 1, 5),
            WeightedEdge::new(3, 2, 7),
            WeightedEdge::new(4, 0, 12),
            WeightedEdge::new(4, 3, 3),
        ]
    );
}

#[test]
fn test_from_edges_counts_rejected_endpoints() {
    let mut edges = sample_edges();
    edges.push((5, 5, 0));
    let g = DirectedGraph::from_edges(edges);
    assert_eq!(g.vertex_count(), 6);
    assert_eq!(g.edge_count(), 7);
}

#[test]
fn test_from_empty_edge_list() {
    let g = DirectedGraph::from_edges(Vec::<WeightedEdge>::new());
    assert_eq!(g.vertex_count(), 0);
}

#[test]
fn test_add_edge_overwrites_weight() {
    let mut g = DirectedGraph::from_edges(sample_edges());
    assert!(g.add_edge(0, 1, 99));
    let matching: Vec<_> = g
        .get_edges()
        .into_iter()
        .filter(|e| e.source == 0 && e.target == 1)
        .collect();
    assert_eq!(matching, vec![WeightedEdge::new(0, 1, 99)]);
    assert_eq!(g.edge_count(), 7);
}

#[test]
fn test_invalid_directed_edges_are_no_ops() {
    let mut g = DirectedGraph::from_edges(sample_edges());
    let before = g.clone();

    assert!(!g.add_edge(2, 2, 5));
    assert!(!g.add_edge(0, 2, 0));
    assert!(!g.add_edge(0, 2, -4));
    assert!(!g.add_edge(0, 5, 1));
    assert!(!g.add_edge(7, 0, 1));

    assert_eq!(g, before);
}

#[test]
fn test_try_add_edge_reports_reason() {
    let mut g = DirectedGraph::from_edges(sample_edges());

    match g.try_add_edge(2, 2, 5).unwrap_err() {
        GraphError::SelfLoop(v) => assert_eq!(v, "2"),
        e => panic!("Expected SelfLoop error, got {:?}", e),
    }
    match g.try_add_edge(0, 2, 0).unwrap_err() {
        GraphError::NonPositiveWeight(w) => assert_eq!(w, 0),
        e => panic!("Expected NonPositiveWeight error, got {:?}", e),
    }
    match g.try_add_edge(0, 9, 1).unwrap_err() {
        GraphError::VertexOutOfRange { vertex, count } => {
            assert_eq!(vertex, 9);
            assert_eq!(count, 5);
        }
        e => panic!("Expected VertexOutOfRange error, got {:?}", e),
    }
    assert!(g.try_add_edge(0, 2, 8).is_ok());
}

#[test]
fn test_remove_edge() {
    let mut g = DirectedGraph::from_edges(sample_edges());
    assert!(g.remove_edge(3, 1));
    assert_eq!(g.weight(3, 1), None);
    assert_eq!(g.edge_count(), 6);

    // Already absent, and out of range.
    assert!(!g.remove_edge(3, 1));
    assert!(!g.remove_edge(0, 17));
    assert!(matches!(
        g.try_remove_edge(3, 1),
        Err(GraphError::EdgeNotFound { .. })
    ));
    assert_eq!(g.edge_count(), 6);
}

#[test]
fn test_directed_builder() {
    let g = DirectedGraphBuilder::new()
        .vertices(7)
        .edge(0, 1, 2)
        .edge(1, 1, 3)
        .edge(2, 0, -1)
        .build();
    assert_eq!(g.vertex_count(), 7);
    assert_eq!(g.get_edges(), vec![WeightedEdge::new(0, 1, 2)]);

    let g = DirectedGraphBuilder::new().edge(3, 8, 1).build();
    assert_eq!(g.vertex_count(), 9);
}

// ==================== Undirected: vertices ====================

#[test]
fn test_add_vertex_idempotent() {
    let mut g = UndirectedGraph::new();
    for v in ["A", "B", "C", "D", "E"] {
        assert!(g.add_vertex(s(v)));
    }
    assert!(!g.add_vertex(s("A")));
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.get_vertices(), vec![s("A"), s("B"), s("C"), s("D"), s("E")]);
    assert_eq!(g.neighbors(&s("A")), Some(&[][..]));
}

#[test]
fn test_remove_vertex_sweeps_neighbors() {
    let mut g = UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]));
    assert!(g.remove_vertex(&s("D")));
    assert!(!g.contains_vertex(&s("D")));
    assert_eq!(g.get_vertices(), vec![s("A"), s("B"), s("C"), s("E")]);
    assert_eq!(g.neighbors(&s("B")).unwrap(), &[s("A"), s("C")]);
    assert_eq!(g.neighbors(&s("C")).unwrap(), &[s("A"), s("B"), s("E")]);
    assert_eq!(g.neighbors(&s("E")).unwrap(), &[s("C")]);

    assert!(!g.remove_vertex(&s("DOES NOT EXIST")));
    assert!(matches!(
        g.try_remove_vertex(&s("D")),
        Err(GraphError::VertexNotFound(_))
    ));
}

#[test]
fn test_add_edge_then_remove_endpoint() {
    let mut g = UndirectedGraph::new();
    g.add_edge(s("u"), s("v"));
    g.remove_vertex(&s("u"));
    assert!(!g.get_vertices().contains(&s("u")));
    assert!(!g.neighbors(&s("v")).unwrap().contains(&s("u")));
}

// ==================== Undirected: edges ====================

#[test]
fn test_add_edge_creates_vertices_symmetrically() {
    let mut g = UndirectedGraph::new();
    assert!(g.add_edge(s("A"), s("B")));
    assert_eq!(g.neighbors(&s("A")).unwrap(), &[s("B")]);
    assert_eq!(g.neighbors(&s("B")).unwrap(), &[s("A")]);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_duplicate_and_self_loop_are_no_ops() {
    let mut g = UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]));
    let edges = g.get_edges();

    assert!(!g.add_edge(s("B"), s("C")));
    assert!(!g.add_edge(s("C"), s("B")));
    assert!(matches!(
        g.try_add_edge(s("B"), s("C")),
        Err(GraphError::DuplicateEdge { .. })
    ));
    assert_eq!(g.get_edges(), edges);

    let mut g: UndirectedGraph<String> = UndirectedGraph::new();
    assert!(!g.add_edge(s("C"), s("C")));
    assert!(matches!(
        g.try_add_edge(s("C"), s("C")),
        Err(GraphError::SelfLoop(_))
    ));
    assert_eq!(g.vertex_count(), 0);
}

#[test]
fn test_remove_edge_undirected() {
    let mut g = UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]));
    assert!(g.remove_edge(&s("A"), &s("B")));
    assert!(!g.remove_edge(&s("X"), &s("B")));
    assert!(!g.remove_edge(&s("A"), &s("B")));
    assert_eq!(g.neighbors(&s("A")).unwrap(), &[s("C")]);
    assert_eq!(g.neighbors(&s("B")).unwrap(), &[s("C"), s("D")]);
    assert_eq!(g.vertex_count(), 5);
}

#[test]
fn test_get_edges_reports_each_pair_once() {
    let g = UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE"]));
    assert_eq!(
        g.get_edges(),
        vec![
            (s("A"), s("B")),
            (s("A"), s("C")),
            (s("B"), s("C")),
            (s("B"), s("D")),
            (s("C"), s("D")),
            (s("C"), s("E")),
        ]
    );
    assert_eq!(g.get_vertices(), vec![s("A"), s("B"), s("C"), s("D"), s("E")]);

    let empty: UndirectedGraph<String> = UndirectedGraph::new();
    assert!(empty.get_edges().is_empty());
    assert!(empty.get_vertices().is_empty());
}

#[test]
fn test_integer_labels() {
    let g = UndirectedGraph::from_edges([(3, 1), (1, 2), (2, 3)]);
    assert_eq!(g.get_vertices(), vec![3, 1, 2]);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn test_undirected_builder() {
    let g = UndirectedGraphBuilder::new()
        .vertex("Z")
        .edge("A", "B")
        .edge("B", "B")
        .edge("B", "A")
        .build();
    assert_eq!(g.get_vertices(), vec!["Z", "A", "B"]);
    assert_eq!(g.get_edges(), vec![("A", "B")]);
}
