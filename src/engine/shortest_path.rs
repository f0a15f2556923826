//! Single-source shortest paths over the directed graph (Dijkstra).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{Adjacency, DirectedGraph};
use crate::types::{Distance, Weight};

/// Result of a single-source shortest-path run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// The source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distances indexed by vertex id.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Distance to `vertex`; `Infinite` for unknown vertices.
    pub fn distance(&self, vertex: usize) -> Distance {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    /// One shortest path from the source to `target`, both ends included.
    /// `None` if `target` is unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.distance(target).is_finite() {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Consume into the distance vector.
    pub fn into_distances(self) -> Vec<Distance> {
        self.distances
    }
}

impl DirectedGraph {
    /// Shortest distance from `src` to every vertex, indexed by vertex id.
    ///
    /// Unreachable vertices are [`Distance::Infinite`]. An unknown source
    /// yields an empty vector.
    pub fn dijkstra(&self, src: usize) -> Vec<Distance> {
        self.shortest_paths(src)
            .map(ShortestPaths::into_distances)
            .unwrap_or_default()
    }

    /// Distances plus predecessor links from `src`. `None` for an unknown
    /// source.
    pub fn shortest_paths(&self, src: usize) -> Option<ShortestPaths> {
        if !self.contains_vertex(&src) {
            log::debug!("dijkstra from unknown vertex {}", src);
            return None;
        }

        let n = self.vertex_count();
        let mut distances = vec![Distance::Infinite; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];
        let mut heap: BinaryHeap<Reverse<(Weight, usize)>> = BinaryHeap::new();

        distances[src] = Distance::Finite(0);
        heap.push(Reverse((0, src)));

        while let Some(Reverse((dist, u))) = heap.pop() {
            if finalized[u] {
                continue;
            }
            finalized[u] = true;

            for (v, &weight) in self.matrix()[u].iter().enumerate() {
                if weight <= 0 || finalized[v] {
                    continue;
                }
                let candidate = Distance::Finite(dist).extend(weight);
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    if let Distance::Finite(d) = candidate {
                        heap.push(Reverse((d, v)));
                    }
                }
            }
        }

        log::debug!(
            "dijkstra from {}: {} of {} vertices reachable",
            src,
            finalized.iter().filter(|&&f| f).count(),
            n
        );

        Some(ShortestPaths {
            source: src,
            distances,
            predecessors,
        })
    }
}
