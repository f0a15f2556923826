//! CLI entry point for the `geng` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use graph_engine::cli::commands::{self, GraphKind};
use graph_engine::cli::demo;
use graph_engine::cli::load_graph;
use graph_engine::graph::TraversalOrder;
use graph_engine::GraphError;

#[derive(Parser)]
#[command(
    name = "geng",
    about = "graph-engine CLI: traverse and analyse small in-memory graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where a command's graph comes from.
#[derive(Args)]
struct GraphSource {
    /// Graph kind: directed or undirected
    #[arg(long, default_value = "directed")]
    kind: String,
    /// Inline edge list, e.g. "0-1:10,4-0:12" or "AE,AC"
    #[arg(long)]
    edges: Option<String>,
    /// File containing an edge list, one or more entries per line
    #[arg(long)]
    edges_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the demonstration scenarios for one graph kind
    Demo {
        /// Graph kind: directed or undirected
        kind: String,
    },
    /// Print the graph with its vertices and edges
    Show {
        #[command(flatten)]
        source: GraphSource,
    },
    /// Check whether a vertex sequence is a valid path
    Path {
        #[command(flatten)]
        source: GraphSource,
        /// Comma-separated vertices
        vertices: String,
    },
    /// Depth-first visitation trace
    Dfs {
        #[command(flatten)]
        source: GraphSource,
        /// Start vertex
        start: String,
        /// Stop as soon as this vertex is visited
        #[arg(long)]
        end: Option<String>,
    },
    /// Breadth-first visitation trace
    Bfs {
        #[command(flatten)]
        source: GraphSource,
        /// Start vertex
        start: String,
        /// Stop as soon as this vertex is visited
        #[arg(long)]
        end: Option<String>,
    },
    /// Run the single-start cycle check
    Cycle {
        #[command(flatten)]
        source: GraphSource,
    },
    /// Shortest distances from a source vertex (directed graphs)
    Dijkstra {
        #[command(flatten)]
        source: GraphSource,
        /// Source vertex index
        from: usize,
    },
    /// Connected components (undirected graphs)
    Components {
        #[command(flatten)]
        source: GraphSource,
    },
}

fn parse_kind(name: &str) -> GraphKind {
    match GraphKind::from_name(name) {
        Some(kind) => kind,
        None => {
            eprintln!("Invalid graph kind: {}", name);
            process::exit(3);
        }
    }
}

fn load(source: &GraphSource) -> Result<commands::LoadedGraph, GraphError> {
    load_graph(
        parse_kind(&source.kind),
        source.edges.as_deref(),
        source.edges_file.as_deref(),
    )
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Demo { kind } => demo::cmd_demo(parse_kind(&kind)),
        Commands::Show { source } => load(&source).and_then(|g| commands::cmd_show(&g, json)),
        Commands::Path { source, vertices } => {
            load(&source).and_then(|g| commands::cmd_path(&g, &vertices, json))
        }
        Commands::Dfs { source, start, end } => load(&source).and_then(|g| {
            commands::cmd_traverse(
                &g,
                TraversalOrder::DepthFirst,
                &start,
                end.as_deref(),
                json,
            )
        }),
        Commands::Bfs { source, start, end } => load(&source).and_then(|g| {
            commands::cmd_traverse(
                &g,
                TraversalOrder::BreadthFirst,
                &start,
                end.as_deref(),
                json,
            )
        }),
        Commands::Cycle { source } => load(&source).and_then(|g| commands::cmd_cycle(&g, json)),
        Commands::Dijkstra { source, from } => {
            load(&source).and_then(|g| commands::cmd_dijkstra(&g, from, json))
        }
        Commands::Components { source } => {
            load(&source).and_then(|g| commands::cmd_components(&g, json))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::VertexOutOfRange { .. } | GraphError::VertexNotFound(_) => 4,
            GraphError::Unsupported { .. } => 6,
            _ => 5,
        };
        process::exit(code);
    }
}
