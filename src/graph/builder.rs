//! Fluent API for building graph instances.

use crate::types::{Weight, WeightedEdge};

use super::{DirectedGraph, Label, UndirectedGraph};

/// Fluent builder for constructing a [`DirectedGraph`].
///
/// Edges are collected first and applied once the final vertex count is
/// known, so they may reference vertices that `vertices` has not yet declared.
#[derive(Debug, Default)]
pub struct DirectedGraphBuilder {
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
}

impl DirectedGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure at least `n` vertices exist, even without edges.
    pub fn vertices(&mut self, n: usize) -> &mut Self {
        self.vertex_count = self.vertex_count.max(n);
        self
    }

    /// Add an edge. Invalid edges are dropped on build.
    pub fn edge(&mut self, source: usize, target: usize, weight: Weight) -> &mut Self {
        self.vertex_count = self.vertex_count.max(source.max(target) + 1);
        self.edges.push(WeightedEdge::new(source, target, weight));
        self
    }

    /// Build the final graph.
    pub fn build(&self) -> DirectedGraph {
        let mut graph = DirectedGraph::new();
        graph.add_vertices(self.vertex_count);
        for edge in &self.edges {
            graph.add_edge(edge.source, edge.target, edge.weight);
        }
        graph
    }
}

/// Fluent builder for constructing an [`UndirectedGraph`].
#[derive(Debug)]
pub struct UndirectedGraphBuilder<V: Label> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Label> UndirectedGraphBuilder<V> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add an isolated vertex.
    pub fn vertex(&mut self, v: V) -> &mut Self {
        self.vertices.push(v);
        self
    }

    /// Add an edge. Self-loops and duplicates are dropped on build.
    pub fn edge(&mut self, u: V, v: V) -> &mut Self {
        self.edges.push((u, v));
        self
    }

    /// Build the final graph. Vertices declared with [`vertex`](Self::vertex)
    /// are inserted before any edge endpoints.
    pub fn build(&self) -> UndirectedGraph<V> {
        let mut graph = UndirectedGraph::new();
        for v in &self.vertices {
            graph.add_vertex(v.clone());
        }
        for (u, v) in &self.edges {
            graph.add_edge(u.clone(), v.clone());
        }
        graph
    }
}

impl<V: Label> Default for UndirectedGraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
