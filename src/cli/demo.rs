//! Scripted demonstrations of every public graph operation.

use crate::graph::{DirectedGraph, UndirectedGraph};
use crate::types::GraphResult;

use super::commands::GraphKind;

/// Edge list shared by the directed scenarios.
pub const SAMPLE_DIRECTED_EDGES: [(usize, usize, i64); 7] = [
    (0, 1, 10),
    (4, 0, 12),
    (1, 4, 15),
    (4, 3, 3),
    (3, 1, 5),
    (2, 1, 23),
    (3, 2, 7),
];

/// Edge list shared by the undirected scenarios, one pair per string.
pub const SAMPLE_UNDIRECTED_EDGES: [&str; 11] = [
    "AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG",
];

/// Run the demonstration for one graph variant.
pub fn cmd_demo(kind: GraphKind) -> GraphResult<()> {
    match kind {
        GraphKind::Directed => directed_demo(),
        GraphKind::Undirected => undirected_demo(),
    }
    Ok(())
}

fn heading(title: &str) {
    println!("\n{}", title);
    println!("{}", "-".repeat(title.len()));
}

fn pairs(edges: &[&str]) -> Vec<(String, String)> {
    edges
        .iter()
        .filter_map(|e| {
            let mut chars = e.chars();
            Some((chars.next()?.to_string(), chars.next()?.to_string()))
        })
        .collect()
}

fn labels(s: &str) -> Vec<String> {
    s.chars().map(String::from).collect()
}

fn format_edges(graph: &DirectedGraph) -> String {
    let edges: Vec<String> = graph.get_edges().iter().map(ToString::to_string).collect();
    format!("[{}]", edges.join(", "))
}

fn format_distances(graph: &DirectedGraph, src: usize) -> String {
    let distances: Vec<String> = graph
        .dijkstra(src)
        .iter()
        .map(ToString::to_string)
        .collect();
    format!("[{}]", distances.join(", "))
}

fn directed_demo() {
    heading("add_vertex() / add_edge()");
    let mut g = DirectedGraph::new();
    print!("{}", g);
    g.add_vertices(5);
    print!("{}", g);
    for (src, dst, weight) in SAMPLE_DIRECTED_EDGES {
        g.add_edge(src, dst, weight);
    }
    print!("{}", g);

    heading("get_edges() / get_vertices()");
    let g = DirectedGraph::new();
    println!("{}\n{:?}", format_edges(&g), g.get_vertices());
    let g = DirectedGraph::from_edges(SAMPLE_DIRECTED_EDGES);
    println!("{}\n{:?}", format_edges(&g), g.get_vertices());

    heading("is_valid_path()");
    let paths: [&[usize]; 6] = [&[0, 1, 4, 3], &[1, 3, 2, 1], &[0, 4], &[4, 0], &[], &[2]];
    for path in paths {
        println!("{:?} {}", path, g.is_valid_path(path));
    }

    heading("dfs() / bfs()");
    let mut edges = SAMPLE_DIRECTED_EDGES.to_vec();
    edges.push((5, 5, 0));
    let g = DirectedGraph::from_edges(edges);
    for start in 0..6 {
        println!(
            "{} DFS:{:?} BFS:{:?}",
            start,
            g.dfs(start, None),
            g.bfs(start, None)
        );
    }

    heading("has_cycle()");
    let mut g = DirectedGraph::from_edges(SAMPLE_DIRECTED_EDGES);
    for (src, dst) in [(3, 1), (4, 0), (3, 2)] {
        g.remove_edge(src, dst);
        println!("{}\n{}", format_edges(&g), g.has_cycle());
    }
    for (src, dst) in [(4, 3), (2, 3), (1, 3), (4, 0)] {
        g.add_edge(src, dst, 1);
        println!("{}\n{}", format_edges(&g), g.has_cycle());
    }
    print!("\n{}", g);

    heading("dijkstra()");
    let mut g = DirectedGraph::from_edges(SAMPLE_DIRECTED_EDGES);
    for src in 0..5 {
        println!("DIJKSTRA {} {}", src, format_distances(&g, src));
    }
    g.remove_edge(4, 3);
    print!("\n{}", g);
    for src in 0..5 {
        println!("DIJKSTRA {} {}", src, format_distances(&g, src));
    }
}

fn undirected_demo() {
    heading("add_vertex() / add_edge()");
    let mut g: UndirectedGraph<String> = UndirectedGraph::new();
    println!("{}", g);
    for v in labels("ABCDE") {
        g.add_vertex(v);
    }
    println!("{}", g);
    g.add_vertex("A".to_string());
    println!("{}", g);
    for (u, v) in pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE", "BC"]) {
        g.add_edge(u, v);
    }
    println!("{}", g);
    let mut g: UndirectedGraph<String> = UndirectedGraph::new();
    g.add_edge("C".to_string(), "C".to_string());
    println!("{}", g);

    heading("remove_edge() / remove_vertex()");
    let mut g = UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]));
    g.remove_vertex(&"DOES NOT EXIST".to_string());
    g.remove_edge(&"A".to_string(), &"B".to_string());
    g.remove_edge(&"X".to_string(), &"B".to_string());
    println!("{}", g);
    g.remove_vertex(&"D".to_string());
    println!("{}", g);

    heading("get_vertices() / get_edges()");
    let g: UndirectedGraph<String> = UndirectedGraph::new();
    println!("{:?}\n{:?}", g.get_edges(), g.get_vertices());
    let g = UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE"]));
    println!("{:?}\n{:?}", g.get_edges(), g.get_vertices());

    heading("is_valid_path()");
    let g = UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]));
    for path in ["ABC", "ADE", "ECABDCBE", "ACDECB", "", "D", "Z"] {
        let path = labels(path);
        println!("{:?} {}", path, g.is_valid_path(&path));
    }

    heading("dfs() / bfs()");
    let g = UndirectedGraph::from_edges(pairs(&SAMPLE_UNDIRECTED_EDGES));
    let cases = labels("ABCDEGH");
    for case in &cases {
        println!(
            "{} DFS:{:?} BFS:{:?}",
            case,
            g.dfs(case, None),
            g.bfs(case, None)
        );
    }
    println!("-----");
    for i in 1..cases.len() {
        let (v1, v2) = (&cases[i], &cases[cases.len() - 1 - i]);
        println!(
            "{}-{} DFS:{:?} BFS:{:?}",
            v1,
            v2,
            g.dfs(v1, Some(v2)),
            g.bfs(v1, Some(v2))
        );
    }
    let missing = "J".to_string();
    println!(
        "{} DFS:{:?} BFS:{:?}",
        missing,
        g.dfs(&missing, None),
        g.bfs(&missing, None)
    );

    let script = [
        "add QH", "remove FG", "remove GQ", "remove HQ", "remove AE", "remove CA", "remove EB",
        "remove CE", "remove DE", "remove BC", "add EA", "add EF", "add GQ", "add AC", "add DQ",
        "add EG", "add QH", "remove CD", "remove BD", "remove QG", "add FG", "remove GE",
    ];

    heading("count_connected_components() / has_cycle()");
    let mut g = UndirectedGraph::from_edges(pairs(&SAMPLE_UNDIRECTED_EDGES));
    for step in script {
        let Some((command, edge)) = step.split_once(' ') else {
            continue;
        };
        let Some((u, v)) = pairs(&[edge]).into_iter().next() else {
            continue;
        };
        if command == "add" {
            g.add_edge(u, v);
        } else {
            g.remove_edge(&u, &v);
        }
        println!(
            "{:<10} components={} cycle={}",
            step,
            g.count_connected_components(),
            g.has_cycle()
        );
    }
}
