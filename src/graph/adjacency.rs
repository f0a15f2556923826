//! The read-only view every traversal algorithm is written against.

use std::fmt::Debug;
use std::hash::Hash;

/// Read access to a graph's vertices and edges.
///
/// Both the matrix-backed directed graph and the list-backed undirected graph
/// implement this, so the traversal algorithms exist once.
pub trait Adjacency {
    /// Vertex identity. `Ord` drives the smallest-neighbor-first tie-break.
    type Vertex: Clone + Eq + Hash + Ord + Debug;

    /// All vertices, in enumeration order.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Whether the vertex exists.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Vertices reachable over one edge, in storage order.
    /// Empty for unknown vertices.
    fn successors(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;

    /// Whether an edge leads from `from` to `to`.
    fn has_edge(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool;
}
