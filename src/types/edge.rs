//! The weighted edge record used by the directed graph.

use serde::Serialize;

use super::Weight;

/// A directed, weighted edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeightedEdge {
    /// Source vertex index.
    pub source: usize,
    /// Destination vertex index.
    pub target: usize,
    /// Edge weight. Edges stored in a graph always carry a positive weight.
    pub weight: Weight,
}

impl WeightedEdge {
    /// Create a new edge. No validation happens here; the graph decides
    /// whether to accept it.
    pub fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl From<(usize, usize, Weight)> for WeightedEdge {
    fn from((source, target, weight): (usize, usize, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

impl std::fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.target, self.weight)
    }
}
