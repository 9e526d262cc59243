use trigraph::{Backend, Graph, Mode};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("trigraph v{}", trigraph::version());
    println!("==========================================");

    for backend in Backend::ALL {
        println!("\n##### {} #####", backend);
        demo_undirected(backend);
        demo_directed(backend);
    }
}

fn demo_undirected(backend: Backend) {
    println!("\n=== Undirected graph ===");
    let mut graph = backend.create(Mode::Undirected);

    graph.insert_edge("A", "B");
    graph.insert_edge("B", "C");
    graph.insert_edge("A", "C");
    print!("{}", graph);

    println!("\nNeighbors of A: {}", join(&graph.neighbors("A")));
    println!("Neighbors of B: {}", join(&graph.neighbors("B")));
    print_degrees(graph.as_ref());

    println!("\nRemoving vertex B");
    graph.remove_vertex("B");
    print!("{}", graph);
    println!("Neighbors of A: {}", join(&graph.neighbors("A")));
    println!("A -> B exists: {}", graph.edge_exists("A", "B"));
}

fn demo_directed(backend: Backend) {
    println!("\n=== Directed graph ===");
    let mut graph = backend.create(Mode::Directed);

    graph.insert_edge("X", "Y");
    graph.insert_edge("Y", "Z");
    graph.insert_edge("Z", "X");
    print!("{}", graph);

    println!("\nNeighbors of Y (outgoing): {}", join(&graph.neighbors("Y")));
    print_degrees(graph.as_ref());

    println!("\nPath X -> Y -> Z valid: {}", graph.path_valid(&["X", "Y", "Z"]));
    println!("Path X -> Z valid: {}", graph.path_valid(&["X", "Z"]));
}

fn print_degrees(graph: &dyn Graph) {
    println!("Degrees:");
    for (vertex, degree) in graph.degree_table() {
        println!("  {}: {}", vertex, degree);
    }
}

fn join(vertices: &[trigraph::Vertex]) -> String {
    let names: Vec<&str> = vertices.iter().map(|v| v.as_str()).collect();
    format!("[{}]", names.join(", "))
}
