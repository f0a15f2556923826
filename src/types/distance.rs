//! Shortest-path distances with an explicit infinity.

use std::fmt;

use serde::{Serialize, Serializer};

use super::Weight;

/// Tentative or final distance from a source vertex.
///
/// `Finite` always orders below `Infinite`, so the derived ordering can be
/// used directly for relaxation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// Reachable at this total weight.
    Finite(Weight),
    /// Not reachable from the source.
    Infinite,
}

impl Distance {
    /// Whether the vertex is reachable.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The total weight, if reachable.
    pub fn finite(self) -> Option<Weight> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Infinite => None,
        }
    }

    /// Extend this distance by one edge. Saturates rather than overflowing.
    pub fn extend(self, weight: Weight) -> Self {
        match self {
            Self::Finite(d) => Self::Finite(d.saturating_add(weight)),
            Self::Infinite => Self::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{}", d),
            Self::Infinite => write!(f, "inf"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(d) => serializer.serialize_i64(*d),
            Self::Infinite => serializer.serialize_none(),
        }
    }
}
