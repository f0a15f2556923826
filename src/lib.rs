//! graph-engine: in-memory directed and undirected graphs.
//!
//! Two sibling graph types share one traversal engine: a matrix-backed
//! directed graph with positive integer weights and Dijkstra shortest paths,
//! and a list-backed undirected graph over arbitrary labels with connected
//! component counting. Both offer DFS, BFS, path validation and a cycle check
//! with deterministic smallest-neighbor-first ordering.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::ShortestPaths;
pub use graph::{
    Adjacency, DirectedGraph, DirectedGraphBuilder, Label, TraversalOrder, UndirectedGraph,
    UndirectedGraphBuilder,
};
pub use types::{Distance, GraphError, GraphResult, Weight, WeightedEdge, DEFAULT_WEIGHT};
