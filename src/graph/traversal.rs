//! Graph traversal algorithms (DFS, BFS) and the checks built on them.
//!
//! Every search prefers the smallest unvisited neighbor of the current
//! vertex. DFS sorts the unvisited neighbors and pushes them onto a stack in
//! descending order so the smallest pops first; BFS drains them from a
//! min-heap into the queue. Both return a visitation trace: the vertices in
//! the order they were first taken off the frontier.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use serde::Serialize;

use super::Adjacency;

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Stack-driven depth-first search.
    DepthFirst,
    /// Queue-driven breadth-first search.
    BreadthFirst,
}

impl TraversalOrder {
    /// Return a short name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Run the search selected by `order`.
pub fn traverse<G: Adjacency>(
    graph: &G,
    order: TraversalOrder,
    start: &G::Vertex,
    end: Option<&G::Vertex>,
) -> Vec<G::Vertex> {
    match order {
        TraversalOrder::DepthFirst => dfs(graph, start, end),
        TraversalOrder::BreadthFirst => bfs(graph, start, end),
    }
}

/// Depth-first visitation trace from `start`.
///
/// Returns an empty trace for an unknown start. If `end` is reached the
/// trace up to and including it is returned immediately.
pub fn dfs<G: Adjacency>(graph: &G, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex> {
    let mut trace = Vec::new();
    if !graph.contains_vertex(start) {
        return trace;
    }

    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut stack = vec![start.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        trace.push(current.clone());
        if end == Some(&current) {
            return trace;
        }

        let mut next = unvisited_successors(graph, &current, &visited);
        next.sort();
        log::trace!("dfs at {:?}: pushing {:?}", current, next);
        stack.extend(next.into_iter().rev());
    }

    trace
}

/// Breadth-first visitation trace from `start`.
///
/// Same contract as [`dfs`], with a FIFO frontier.
pub fn bfs<G: Adjacency>(graph: &G, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex> {
    let mut trace = Vec::new();
    if !graph.contains_vertex(start) {
        return trace;
    }

    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut queue: VecDeque<G::Vertex> = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        trace.push(current.clone());
        if end == Some(&current) {
            return trace;
        }

        let mut heap: BinaryHeap<Reverse<G::Vertex>> =
            unvisited_successors(graph, &current, &visited)
                .into_iter()
                .map(Reverse)
                .collect();
        while let Some(Reverse(next)) = heap.pop() {
            queue.push_back(next);
        }
    }

    trace
}

/// Whether every consecutive pair in `path` is joined by an edge.
///
/// The empty path is valid; a single vertex is valid iff it exists.
pub fn is_valid_path<G: Adjacency>(graph: &G, path: &[G::Vertex]) -> bool {
    match path {
        [] => true,
        [only] => graph.contains_vertex(only),
        _ => path.windows(2).all(|pair| graph.has_edge(&pair[0], &pair[1])),
    }
}

/// Single-start cycle check.
///
/// Walks depth-first from the first enumerated vertex. The "parent" of the
/// current vertex is whichever vertex was popped just before it. A neighbor
/// that is already visited, is not that parent and is not the current vertex
/// counts as a cycle.
///
/// This only inspects the component of the first vertex and tracks a single
/// parent rather than the ancestor chain, so it can both miss cycles in other
/// components and report back-references that a full detector would not.
/// An empty graph has no cycle.
pub fn has_cycle<G: Adjacency>(graph: &G) -> bool {
    let Some(first) = graph.vertices().into_iter().next() else {
        return false;
    };

    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut stack = vec![first.clone()];
    let mut current = first;

    while let Some(popped) = stack.pop() {
        let parent = std::mem::replace(&mut current, popped);
        if !visited.insert(current.clone()) {
            continue;
        }

        let mut next = Vec::new();
        for neighbor in graph.successors(&current) {
            if visited.contains(&neighbor) {
                if neighbor != parent && neighbor != current {
                    log::debug!(
                        "cycle found: {:?} reaches visited {:?} (parent {:?})",
                        current,
                        neighbor,
                        parent
                    );
                    return true;
                }
            } else {
                next.push(neighbor);
            }
        }
        next.sort();
        stack.extend(next.into_iter().rev());
    }

    false
}

fn unvisited_successors<G: Adjacency>(
    graph: &G,
    vertex: &G::Vertex,
    visited: &HashSet<G::Vertex>,
) -> Vec<G::Vertex> {
    graph
        .successors(vertex)
        .into_iter()
        .filter(|v| !visited.contains(v))
        .collect()
}
