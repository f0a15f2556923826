//! CLI command implementations.

use std::path::Path;

use crate::graph::{DirectedGraph, TraversalOrder, UndirectedGraph};
use crate::types::{GraphError, GraphResult};

use super::parse::{parse_directed_edges, parse_indices, parse_labels, parse_undirected_edges};

/// Which graph variant a command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Adjacency-matrix graph over integer vertices.
    Directed,
    /// Adjacency-list graph over string labels.
    Undirected,
}

impl GraphKind {
    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Parse a graph kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" | "d" => Some(Self::Directed),
            "undirected" | "u" => Some(Self::Undirected),
            _ => None,
        }
    }
}

/// A graph built from command-line input.
#[derive(Debug, Clone)]
pub enum LoadedGraph {
    Directed(DirectedGraph),
    Undirected(UndirectedGraph<String>),
}

impl LoadedGraph {
    /// The variant of this graph.
    pub fn kind(&self) -> GraphKind {
        match self {
            Self::Directed(_) => GraphKind::Directed,
            Self::Undirected(_) => GraphKind::Undirected,
        }
    }
}

/// Build a graph from an inline edge list and/or an edge-list file.
///
/// Both sources may be given; their entries are concatenated, file first.
pub fn load_graph(
    kind: GraphKind,
    edges: Option<&str>,
    edges_file: Option<&Path>,
) -> GraphResult<LoadedGraph> {
    let mut input = String::new();
    if let Some(path) = edges_file {
        input.push_str(&std::fs::read_to_string(path)?);
        input.push('\n');
    }
    if let Some(edges) = edges {
        input.push_str(edges);
    }

    let graph = match kind {
        GraphKind::Directed => LoadedGraph::Directed(DirectedGraph::from_edges(
            parse_directed_edges(&input)?,
        )),
        GraphKind::Undirected => LoadedGraph::Undirected(UndirectedGraph::from_edges(
            parse_undirected_edges(&input)?,
        )),
    };
    log::debug!("loaded {} graph from {} bytes of input", kind.name(), input.len());
    Ok(graph)
}

/// Print the graph, its vertices and its edges.
pub fn cmd_show(graph: &LoadedGraph, json: bool) -> GraphResult<()> {
    match graph {
        LoadedGraph::Directed(g) => {
            if json {
                let info = serde_json::json!({
                    "kind": "directed",
                    "vertices": g.get_vertices(),
                    "edges": g.get_edges(),
                    "matrix": g.matrix(),
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&info).unwrap_or_default()
                );
            } else {
                print!("{}", g);
                println!("Vertices: {:?}", g.get_vertices());
                let edges: Vec<String> = g.get_edges().iter().map(ToString::to_string).collect();
                println!("Edges: [{}]", edges.join(", "));
            }
        }
        LoadedGraph::Undirected(g) => {
            if json {
                let info = serde_json::json!({
                    "kind": "undirected",
                    "vertices": g.get_vertices(),
                    "edges": g.get_edges(),
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&info).unwrap_or_default()
                );
            } else {
                println!("{}", g);
                println!("Vertices: {:?}", g.get_vertices());
                println!("Edges: {:?}", g.get_edges());
            }
        }
    }
    Ok(())
}

/// Check whether a vertex sequence is a valid path.
pub fn cmd_path(graph: &LoadedGraph, vertices: &str, json: bool) -> GraphResult<()> {
    let (path, valid) = match graph {
        LoadedGraph::Directed(g) => {
            let path = parse_indices(vertices)?;
            let valid = g.is_valid_path(&path);
            (serde_json::json!(path), valid)
        }
        LoadedGraph::Undirected(g) => {
            let path = parse_labels(vertices);
            let valid = g.is_valid_path(&path);
            (serde_json::json!(path), valid)
        }
    };

    if json {
        println!("{}", serde_json::json!({"path": path, "valid": valid}));
    } else {
        println!("{} {}", path, if valid { "valid" } else { "invalid" });
    }
    Ok(())
}

/// Run a DFS or BFS and print the visitation trace.
pub fn cmd_traverse(
    graph: &LoadedGraph,
    order: TraversalOrder,
    start: &str,
    end: Option<&str>,
    json: bool,
) -> GraphResult<()> {
    let trace = match graph {
        LoadedGraph::Directed(g) => {
            let start = single_index(start)?;
            let end = end.map(single_index).transpose()?;
            let trace = match order {
                TraversalOrder::DepthFirst => g.dfs(start, end),
                TraversalOrder::BreadthFirst => g.bfs(start, end),
            };
            serde_json::json!(trace)
        }
        LoadedGraph::Undirected(g) => {
            let start = start.trim().to_string();
            let end = end.map(|e| e.trim().to_string());
            let trace = match order {
                TraversalOrder::DepthFirst => g.dfs(&start, end.as_ref()),
                TraversalOrder::BreadthFirst => g.bfs(&start, end.as_ref()),
            };
            serde_json::json!(trace)
        }
    };

    if json {
        println!("{}", serde_json::json!({"order": order, "trace": trace}));
    } else {
        println!("{}: {}", order.name().to_uppercase(), trace);
    }
    Ok(())
}

/// Report whether the cycle check fires.
pub fn cmd_cycle(graph: &LoadedGraph, json: bool) -> GraphResult<()> {
    let has_cycle = match graph {
        LoadedGraph::Directed(g) => g.has_cycle(),
        LoadedGraph::Undirected(g) => g.has_cycle(),
    };

    if json {
        println!("{}", serde_json::json!({"has_cycle": has_cycle}));
    } else {
        println!("Has cycle: {}", has_cycle);
    }
    Ok(())
}

/// Print shortest distances (and paths) from `source`.
pub fn cmd_dijkstra(graph: &LoadedGraph, source: usize, json: bool) -> GraphResult<()> {
    let LoadedGraph::Directed(g) = graph else {
        return Err(unsupported("dijkstra", graph.kind()));
    };
    let paths = g.shortest_paths(source).ok_or(GraphError::VertexOutOfRange {
        vertex: source,
        count: g.vertex_count(),
    })?;

    if json {
        let targets: Vec<serde_json::Value> = (0..g.vertex_count())
            .map(|v| {
                serde_json::json!({
                    "vertex": v,
                    "distance": paths.distance(v),
                    "path": paths.path_to(v),
                })
            })
            .collect();
        let info = serde_json::json!({"source": source, "targets": targets});
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        let distances: Vec<String> = paths.distances().iter().map(ToString::to_string).collect();
        println!("Distances from {}: [{}]", source, distances.join(", "));
        for v in 0..g.vertex_count() {
            if let Some(path) = paths.path_to(v) {
                println!("  {} -> {}: {} via {:?}", source, v, paths.distance(v), path);
            } else {
                println!("  {} -> {}: unreachable", source, v);
            }
        }
    }
    Ok(())
}

/// Print the connected components.
pub fn cmd_components(graph: &LoadedGraph, json: bool) -> GraphResult<()> {
    let LoadedGraph::Undirected(g) = graph else {
        return Err(unsupported("components", graph.kind()));
    };
    let components = g.connected_components();

    if json {
        let info = serde_json::json!({
            "count": components.len(),
            "components": components,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Connected components: {}", components.len());
        for (i, component) in components.iter().enumerate() {
            println!("  [{}] {:?}", i, component);
        }
    }
    Ok(())
}

fn single_index(token: &str) -> GraphResult<usize> {
    match parse_indices(token)?.as_slice() {
        [vertex] => Ok(*vertex),
        _ => Err(GraphError::Parse {
            entry: token.to_string(),
            reason: "expected a single vertex index".to_string(),
        }),
    }
}

fn unsupported(operation: &'static str, kind: GraphKind) -> GraphError {
    GraphError::Unsupported {
        operation,
        kind: kind.name(),
    }
}
