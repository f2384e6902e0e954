//! Shortest distance on a small road map
//!
//! Run with `cargo run --example shortest_distance`.

use ugraph::Graph;

fn main() -> ugraph::Result<()> {
    println!("Shortest Distance Example");
    println!("=========================");

    let mut graph: Graph<&str, f64> = Graph::new();
    let [a, b, c, d, e, f, g, h] =
        ["A", "B", "C", "D", "E", "F", "G", "H"].map(|p| graph.add_node(p));

    graph.add_edge(8.0, a, b)?;
    graph.add_edge(2.0, a, c)?;
    graph.add_edge(5.0, a, d)?;
    graph.add_edge(2.0, b, d)?;
    graph.add_edge(2.0, c, d)?;
    graph.add_edge(13.0, b, f)?;
    graph.add_edge(5.0, c, e)?;
    graph.add_edge(1.0, d, e)?;
    graph.add_edge(3.0, d, g)?;
    graph.add_edge(6.0, d, f)?;
    graph.add_edge(2.0, f, g)?;
    graph.add_edge(1.0, e, g)?;
    graph.add_edge(3.0, f, h)?;
    graph.add_edge(6.0, g, h)?;

    print!("{}", graph.display());
    println!();

    let paths = graph.shortest_paths(a)?;
    for &node in graph.nodes() {
        let route = paths
            .path_to(node)
            .unwrap_or_default()
            .into_iter()
            .map(|n| graph.node_payload(n).copied())
            .collect::<ugraph::Result<Vec<_>>>()?;
        println!(
            "  A -> {}: {:>4} via {}",
            graph.node_payload(node)?,
            paths.cost(node),
            route.join("-")
        );
    }

    let island = graph.add_node("I");
    println!();
    println!("A -> F = {}", graph.shortest_path_cost(a, f)?);
    println!("A -> I = {} (no edges)", graph.shortest_path_cost(a, island)?);

    let bfs = graph.breadth_first_traversal(a)?;
    println!("Unreachable from A: {} node(s)", bfs.unreachable().len());
    Ok(())
}
