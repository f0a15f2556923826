//! CLI tests: loading graphs from inline lists and edge-list files.

use std::io::Write;

use graph_engine::cli::commands::{cmd_components, cmd_dijkstra, cmd_traverse};
use graph_engine::cli::demo::{SAMPLE_DIRECTED_EDGES, SAMPLE_UNDIRECTED_EDGES};
use graph_engine::cli::{load_graph, GraphKind, LoadedGraph};
use graph_engine::graph::TraversalOrder;
use graph_engine::types::GraphError;
use tempfile::NamedTempFile;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== Loading ====================

#[test]
fn test_load_inline_directed() {
    init_logger();
    let graph = load_graph(
        GraphKind::Directed,
        Some("0-1:10,4-0:12,1-4:15,4-3:3,3-1:5,2-1:23,3-2:7"),
        None,
    )
    .unwrap();
    match graph {
        LoadedGraph::Directed(g) => {
            assert_eq!(g, graph_engine::DirectedGraph::from_edges(SAMPLE_DIRECTED_EDGES));
            assert_eq!(g.dfs(0, None), vec![0, 1, 4, 3, 2]);
        }
        other => panic!("Expected directed graph, got {:?}", other.kind()),
    }
}

#[test]
fn test_load_inline_undirected() {
    init_logger();
    let graph = load_graph(
        GraphKind::Undirected,
        Some(SAMPLE_UNDIRECTED_EDGES.join(",").as_str()),
        None,
    )
    .unwrap();
    assert_eq!(graph.kind(), GraphKind::Undirected);
    let LoadedGraph::Undirected(g) = graph else {
        panic!("Expected undirected graph");
    };
    assert_eq!(g.count_connected_components(), 2);
    assert_eq!(g.vertex_count(), 9);
}

#[test]
fn test_load_from_file_and_inline() {
    init_logger();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# sample graph").unwrap();
    writeln!(file, "0-1:10, 4-0:12").unwrap();
    writeln!(file, "1-4:15").unwrap();
    writeln!(file).unwrap();

    let graph = load_graph(GraphKind::Directed, Some("4-3:3"), Some(file.path())).unwrap();
    let LoadedGraph::Directed(g) = graph else {
        panic!("Expected directed graph");
    };
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.weight(4, 3), Some(3));
}

#[test]
fn test_load_missing_file() {
    let result = load_graph(
        GraphKind::Directed,
        None,
        Some(std::path::Path::new("/nonexistent/edges.txt")),
    );
    assert!(matches!(result, Err(GraphError::Io(_))));
}

#[test]
fn test_load_malformed_entry() {
    let result = load_graph(GraphKind::Directed, Some("0-1:10,zero-one"), None);
    match result {
        Err(GraphError::Parse { entry, .. }) => assert_eq!(entry, "zero-one"),
        other => panic!("Expected Parse error, got {:?}", other.map(|g| g.kind())),
    }
}

#[test]
fn test_graph_kind_names() {
    assert_eq!(GraphKind::from_name("Directed"), Some(GraphKind::Directed));
    assert_eq!(GraphKind::from_name("u"), Some(GraphKind::Undirected));
    assert_eq!(GraphKind::from_name("bipartite"), None);
    assert_eq!(GraphKind::Undirected.name(), "undirected");
}

// ==================== Commands ====================

#[test]
fn test_variant_specific_commands_are_rejected() {
    let directed = load_graph(GraphKind::Directed, Some("0-1:1"), None).unwrap();
    let undirected = load_graph(GraphKind::Undirected, Some("AB"), None).unwrap();

    assert!(matches!(
        cmd_components(&directed, false),
        Err(GraphError::Unsupported { operation: "components", kind: "directed" })
    ));
    assert!(matches!(
        cmd_dijkstra(&undirected, 0, false),
        Err(GraphError::Unsupported { operation: "dijkstra", kind: "undirected" })
    ));
}

#[test]
fn test_dijkstra_command_checks_source() {
    let directed = load_graph(GraphKind::Directed, Some("0-1:1"), None).unwrap();
    assert!(cmd_dijkstra(&directed, 0, true).is_ok());
    assert!(matches!(
        cmd_dijkstra(&directed, 7, false),
        Err(GraphError::VertexOutOfRange { vertex: 7, count: 2 })
    ));
}

#[test]
fn test_traverse_command_parses_vertices() {
    let directed = load_graph(GraphKind::Directed, Some("0-1:1,1-2:1"), None).unwrap();
    assert!(cmd_traverse(&directed, TraversalOrder::DepthFirst, "0", Some("2"), false).is_ok());
    assert!(matches!(
        cmd_traverse(&directed, TraversalOrder::BreadthFirst, "A", None, false),
        Err(GraphError::Parse { .. })
    ));

    let undirected = load_graph(GraphKind::Undirected, Some("AB"), None).unwrap();
    assert!(cmd_traverse(&undirected, TraversalOrder::BreadthFirst, "A", None, true).is_ok());
}
