//! Error types for the graph engine.

use thiserror::Error;

use super::Weight;

/// All reasons a graph operation can be rejected.
///
/// Mutations on the graphs are permissive by default and only report these
/// through their `try_*` variants.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index outside `[0, vertex_count)`.
    #[error("Vertex {vertex} out of range for graph with {count} vertices")]
    VertexOutOfRange { vertex: usize, count: usize },

    /// Vertex label not present in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// Self-loop not allowed.
    #[error("Self-loop not allowed on vertex {0}")]
    SelfLoop(String),

    /// Edge weights must be strictly positive.
    #[error("Edge weight must be positive, got {0}")]
    NonPositiveWeight(Weight),

    /// Undirected edge already present.
    #[error("Edge {from} -- {to} already exists")]
    DuplicateEdge { from: String, to: String },

    /// Edge to remove does not exist.
    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: String, to: String },

    /// Malformed entry in a literal edge or vertex list.
    #[error("Invalid entry {entry:?}: {reason}")]
    Parse { entry: String, reason: String },

    /// Operation not offered by this graph variant.
    #[error("{operation} is not supported on {kind} graphs")]
    Unsupported {
        operation: &'static str,
        kind: &'static str,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
