//! Directed weighted graph stored as a dense adjacency matrix.

use crate::types::{GraphError, GraphResult, Weight, WeightedEdge};

use super::traversal;
use super::Adjacency;

/// A directed graph over vertices `0..vertex_count` with positive integer
/// edge weights.
///
/// Cell `[src][dst]` of the matrix holds the weight of the edge `src -> dst`,
/// zero meaning no edge. Vertices are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Number of vertices; always equals the matrix side length.
    vertex_count: usize,
    /// Square adjacency matrix, one row per source vertex.
    matrix: Vec<Vec<Weight>>,
}

impl DirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a literal edge list.
    ///
    /// The vertex count is one more than the largest endpoint mentioned. Every
    /// edge then goes through [`add_edge`](Self::add_edge), so self-loops and
    /// non-positive weights are dropped while their endpoints still count.
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let edges: Vec<WeightedEdge> = edges.into_iter().map(Into::into).collect();
        let mut graph = Self::new();

        if let Some(max) = edges.iter().map(|e| e.source.max(e.target)).max() {
            graph.add_vertices(max + 1);
        }
        for edge in edges {
            graph.add_edge(edge.source, edge.target, edge.weight);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges (nonzero cells).
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|&&w| w > 0).count())
            .sum()
    }

    /// The raw adjacency matrix.
    pub fn matrix(&self) -> &[Vec<Weight>] {
        &self.matrix
    }

    /// Weight of the edge `src -> dst`, if present.
    pub fn weight(&self, src: usize, dst: usize) -> Option<Weight> {
        self.matrix
            .get(src)
            .and_then(|row| row.get(dst))
            .copied()
            .filter(|&w| w > 0)
    }

    /// Append a vertex, growing the matrix by one row and one column.
    /// Returns the new vertex count.
    pub fn add_vertex(&mut self) -> usize {
        self.vertex_count += 1;
        for row in &mut self.matrix {
            row.push(0);
        }
        self.matrix.push(vec![0; self.vertex_count]);
        self.vertex_count
    }

    /// Append `n` vertices. Returns the new vertex count.
    pub fn add_vertices(&mut self, n: usize) -> usize {
        for _ in 0..n {
            self.add_vertex();
        }
        self.vertex_count
    }

    /// Add or overwrite the edge `src -> dst`.
    ///
    /// Out-of-range endpoints, self-loops and non-positive weights leave the
    /// graph untouched. Returns whether the edge was written.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: Weight) -> bool {
        match self.try_add_edge(src, dst, weight) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("add_edge({}, {}, {}) ignored: {}", src, dst, weight, e);
                false
            }
        }
    }

    /// Strict form of [`add_edge`](Self::add_edge).
    pub fn try_add_edge(&mut self, src: usize, dst: usize, weight: Weight) -> GraphResult<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        if src == dst {
            return Err(GraphError::SelfLoop(src.to_string()));
        }
        if weight <= 0 {
            return Err(GraphError::NonPositiveWeight(weight));
        }
        self.matrix[src][dst] = weight;
        Ok(())
    }

    /// Remove the edge `src -> dst` if it exists. Returns whether it did.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> bool {
        match self.try_remove_edge(src, dst) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("remove_edge({}, {}) ignored: {}", src, dst, e);
                false
            }
        }
    }

    /// Strict form of [`remove_edge`](Self::remove_edge).
    pub fn try_remove_edge(&mut self, src: usize, dst: usize) -> GraphResult<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        if self.matrix[src][dst] <= 0 {
            return Err(GraphError::EdgeNotFound {
                from: src.to_string(),
                to: dst.to_string(),
            });
        }
        self.matrix[src][dst] = 0;
        Ok(())
    }

    /// All vertices, `0..vertex_count`.
    pub fn get_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count).collect()
    }

    /// All edges, scanning the matrix row by row.
    pub fn get_edges(&self) -> Vec<WeightedEdge> {
        let mut edges = Vec::new();
        for (src, row) in self.matrix.iter().enumerate() {
            for (dst, &weight) in row.iter().enumerate() {
                if weight > 0 {
                    edges.push(WeightedEdge::new(src, dst, weight));
                }
            }
        }
        edges
    }

    /// Whether every consecutive pair in `path` is joined by an edge.
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        traversal::is_valid_path(self, path)
    }

    /// Depth-first visitation trace from `start`, stopping early at `end`.
    pub fn dfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        traversal::dfs(self, &start, end.as_ref())
    }

    /// Breadth-first visitation trace from `start`, stopping early at `end`.
    pub fn bfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        traversal::bfs(self, &start, end.as_ref())
    }

    /// Single-start cycle check. See [`traversal::has_cycle`].
    pub fn has_cycle(&self) -> bool {
        traversal::has_cycle(self)
    }

    fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                count: self.vertex_count,
            })
        }
    }
}

impl Adjacency for DirectedGraph {
    type Vertex = usize;

    fn vertices(&self) -> Vec<usize> {
        self.get_vertices()
    }

    fn contains_vertex(&self, vertex: &usize) -> bool {
        *vertex < self.vertex_count
    }

    fn successors(&self, vertex: &usize) -> Vec<usize> {
        match self.matrix.get(*vertex) {
            Some(row) => row
                .iter()
                .enumerate()
                .filter(|(_, &w)| w > 0)
                .map(|(dst, _)| dst)
                .collect(),
            None => Vec::new(),
        }
    }

    fn has_edge(&self, from: &usize, to: &usize) -> bool {
        self.weight(*from, *to).is_some()
    }
}
