//! Value types shared by both graph variants.

pub mod distance;
pub mod edge;
pub mod error;

pub use distance::Distance;
pub use edge::WeightedEdge;
pub use error::{GraphError, GraphResult};

/// Edge weight in the directed graph. Stored weights are always positive;
/// zero marks an absent edge in the adjacency matrix.
pub type Weight = i64;

/// Weight used when an edge is given without one.
pub const DEFAULT_WEIGHT: Weight = 1;
