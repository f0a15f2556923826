//! Build both graph kinds, traverse them and run the analyses.

use graph_engine::*;

fn main() -> GraphResult<()> {
    // A small weighted road network
    let mut roads = DirectedGraphBuilder::new()
        .edge(0, 1, 10)
        .edge(4, 0, 12)
        .edge(1, 4, 15)
        .edge(4, 3, 3)
        .edge(3, 1, 5)
        .edge(2, 1, 23)
        .edge(3, 2, 7)
        .build();

    print!("{}", roads);
    println!(
        "{} vertices, {} edges",
        roads.vertex_count(),
        roads.edge_count()
    );

    // Strict mutations say why they were refused
    if let Err(e) = roads.try_add_edge(2, 2, 4) {
        println!("Rejected: {}", e);
    }

    println!("DFS from 0: {:?}", roads.dfs(0, None));
    println!("BFS from 3: {:?}", roads.bfs(3, None));
    println!("0 -> 1 -> 4 -> 3 valid: {}", roads.is_valid_path(&[0, 1, 4, 3]));

    if let Some(paths) = roads.shortest_paths(0) {
        for v in roads.get_vertices() {
            match paths.path_to(v) {
                Some(path) => println!("  0 -> {}: {} via {:?}", v, paths.distance(v), path),
                None => println!("  0 -> {}: unreachable", v),
            }
        }
    }

    roads.try_remove_edge(4, 3)?;
    println!("After closing 4 -> 3: {:?}", roads.dijkstra(0));

    // A friendship network over names
    let mut friends = UndirectedGraphBuilder::new()
        .edge("ana", "ben")
        .edge("ben", "cai")
        .edge("cai", "ana")
        .edge("dev", "eli")
        .vertex("fay")
        .build();

    println!("{}", friends);
    println!("Components: {:?}", friends.connected_components());
    println!("Cycle through ana: {}", friends.has_cycle());

    friends.try_remove_vertex(&"cai")?;
    println!(
        "After cai leaves: {} components, cycle {}",
        friends.count_connected_components(),
        friends.has_cycle()
    );

    Ok(())
}
