//! Command-line driver: edge-list parsing, commands and demonstrations.

pub mod commands;
pub mod demo;
pub mod parse;

pub use commands::{load_graph, GraphKind, LoadedGraph};
