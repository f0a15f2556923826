//! Undirected unweighted graph stored as an adjacency list.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{GraphError, GraphResult};

use super::traversal;
use super::Adjacency;

/// Anything usable as an undirected vertex label.
pub trait Label: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Label for T {}

/// An undirected graph over arbitrary labels.
///
/// Every edge `u -- v` is stored twice: `v` in the neighbor list of `u` and
/// `u` in the neighbor list of `v`. Vertices are enumerated in insertion order.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V: Label> {
    /// Neighbor sequence per vertex, in the order edges were added.
    adjacency: HashMap<V, Vec<V>>,
    /// Vertex insertion order.
    order: Vec<V>,
}

impl<V: Label> UndirectedGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Build a graph from a literal edge list, adding each pair in turn.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether the vertex exists.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Neighbors of `v` in insertion order, or `None` for unknown vertices.
    pub fn neighbors(&self, v: &V) -> Option<&[V]> {
        self.adjacency.get(v).map(Vec::as_slice)
    }

    /// Add a vertex with no edges. Returns false if it already existed.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.order.push(v.clone());
        self.adjacency.insert(v, Vec::new());
        true
    }

    /// Add the edge `u -- v`, creating missing endpoints.
    ///
    /// Self-loops are ignored and existing edges are left alone. Returns
    /// whether a new edge was created.
    pub fn add_edge(&mut self, u: V, v: V) -> bool {
        let (from, to) = (u.clone(), v.clone());
        match self.try_add_edge(u, v) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("add_edge({:?}, {:?}) ignored: {}", from, to, e);
                false
            }
        }
    }

    /// Strict form of [`add_edge`](Self::add_edge).
    pub fn try_add_edge(&mut self, u: V, v: V) -> GraphResult<()> {
        if u == v {
            return Err(GraphError::SelfLoop(format!("{:?}", u)));
        }
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());

        let mut created = false;
        if let Some(list) = self.adjacency.get_mut(&u) {
            if !list.contains(&v) {
                list.push(v.clone());
                created = true;
            }
        }
        if let Some(list) = self.adjacency.get_mut(&v) {
            if !list.contains(&u) {
                list.push(u.clone());
                created = true;
            }
        }

        if created {
            Ok(())
        } else {
            Err(GraphError::DuplicateEdge {
                from: format!("{:?}", u),
                to: format!("{:?}", v),
            })
        }
    }

    /// Remove the edge `u -- v`. Returns whether anything was removed.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        match self.try_remove_edge(u, v) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("remove_edge({:?}, {:?}) ignored: {}", u, v, e);
                false
            }
        }
    }

    /// Strict form of [`remove_edge`](Self::remove_edge).
    pub fn try_remove_edge(&mut self, u: &V, v: &V) -> GraphResult<()> {
        for vertex in [u, v] {
            if !self.adjacency.contains_key(vertex) {
                return Err(GraphError::VertexNotFound(format!("{:?}", vertex)));
            }
        }

        let mut removed = false;
        if let Some(list) = self.adjacency.get_mut(u) {
            removed |= remove_item(list, v);
        }
        if let Some(list) = self.adjacency.get_mut(v) {
            removed |= remove_item(list, u);
        }

        if removed {
            Ok(())
        } else {
            Err(GraphError::EdgeNotFound {
                from: format!("{:?}", u),
                to: format!("{:?}", v),
            })
        }
    }

    /// Remove a vertex and every edge touching it. Returns whether it existed.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        match self.try_remove_vertex(v) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("remove_vertex({:?}) ignored: {}", v, e);
                false
            }
        }
    }

    /// Strict form of [`remove_vertex`](Self::remove_vertex).
    pub fn try_remove_vertex(&mut self, v: &V) -> GraphResult<()> {
        if self.adjacency.remove(v).is_none() {
            return Err(GraphError::VertexNotFound(format!("{:?}", v)));
        }
        self.order.retain(|x| x != v);
        for list in self.adjacency.values_mut() {
            remove_item(list, v);
        }
        Ok(())
    }

    /// All vertices in insertion order.
    pub fn get_vertices(&self) -> Vec<V> {
        self.order.clone()
    }

    /// Every edge exactly once, the earlier-inserted endpoint first.
    pub fn get_edges(&self) -> Vec<(V, V)> {
        let mut seen: HashSet<&V> = HashSet::new();
        let mut edges = Vec::new();
        for key in &self.order {
            seen.insert(key);
            if let Some(list) = self.adjacency.get(key) {
                for value in list {
                    if !seen.contains(value) {
                        edges.push((key.clone(), value.clone()));
                    }
                }
            }
        }
        edges
    }

    /// Whether every consecutive pair in `path` is joined by an edge.
    pub fn is_valid_path(&self, path: &[V]) -> bool {
        traversal::is_valid_path(self, path)
    }

    /// Depth-first visitation trace from `start`, stopping early at `end`.
    pub fn dfs(&self, start: &V, end: Option<&V>) -> Vec<V> {
        traversal::dfs(self, start, end)
    }

    /// Breadth-first visitation trace from `start`, stopping early at `end`.
    pub fn bfs(&self, start: &V, end: Option<&V>) -> Vec<V> {
        traversal::bfs(self, start, end)
    }

    /// Single-start cycle check. See [`traversal::has_cycle`].
    pub fn has_cycle(&self) -> bool {
        traversal::has_cycle(self)
    }
}

impl<V: Label> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Label> Adjacency for UndirectedGraph<V> {
    type Vertex = V;

    fn vertices(&self) -> Vec<V> {
        self.get_vertices()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn successors(&self, vertex: &V) -> Vec<V> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    // Looked up through `to`'s list; symmetric storage makes it equivalent.
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(to)
            .is_some_and(|list| list.contains(from))
    }
}

fn remove_item<V: PartialEq>(list: &mut Vec<V>, item: &V) -> bool {
    match list.iter().position(|x| x == item) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}
