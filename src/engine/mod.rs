//! Whole-graph analyses layered on top of the core storage.

pub mod components;
pub mod shortest_path;

pub use shortest_path::ShortestPaths;
