//! In-memory graph storage and traversal.

pub mod adjacency;
pub mod builder;
pub mod directed;
pub mod traversal;
pub mod undirected;

pub use adjacency::Adjacency;
pub use builder::{DirectedGraphBuilder, UndirectedGraphBuilder};
pub use directed::DirectedGraph;
pub use traversal::{bfs, dfs, has_cycle, is_valid_path, traverse, TraversalOrder};
pub use undirected::{Label, UndirectedGraph};
