//! Connected components of the undirected graph.

use std::collections::HashSet;

use crate::graph::{Label, UndirectedGraph};

impl<V: Label> UndirectedGraph<V> {
    /// Every connected component as its DFS visitation trace.
    ///
    /// Components are seeded from the first vertex (in enumeration order) not
    /// yet accounted for, so the output order is deterministic.
    pub fn connected_components(&self) -> Vec<Vec<V>> {
        let mut accounted: HashSet<V> = HashSet::new();
        let mut components = Vec::new();

        for seed in self.get_vertices() {
            if accounted.contains(&seed) {
                continue;
            }
            let reachable = self.dfs(&seed, None);
            accounted.extend(reachable.iter().cloned());
            components.push(reachable);
        }

        log::debug!(
            "{} connected components over {} vertices",
            components.len(),
            self.vertex_count()
        );
        components
    }

    /// Number of connected components. Zero for an empty graph.
    pub fn count_connected_components(&self) -> usize {
        self.connected_components().len()
    }
}
