//! Contract scenarios run against every representation

use trigraph::{Backend, Degree, Graph, Mode, Vertex};

fn each_backend(mode: Mode, check: impl Fn(Backend, Box<dyn Graph>)) {
    for backend in Backend::ALL {
        check(backend, backend.create(mode));
    }
}

#[test]
fn test_undirected_triangle_then_remove_vertex() {
    each_backend(Mode::Undirected, |backend, mut graph| {
        graph.insert_edge("A", "B");
        graph.insert_edge("B", "C");
        graph.insert_edge("A", "C");

        assert_eq!(graph.neighbors("A"), vec!["B", "C"], "{}", backend);
        assert_eq!(graph.neighbors("B"), vec!["A", "C"], "{}", backend);
        assert_eq!(graph.degree_table()["A"], Degree::Undirected(2), "{}", backend);

        graph.remove_vertex("B");

        assert_eq!(graph.neighbors("A"), vec!["C"], "{}", backend);
        assert!(!graph.edge_exists("A", "B"), "{}", backend);
        assert!(!graph.has_vertex("B"), "{}", backend);
        assert_eq!(graph.vertices(), vec!["A", "C"], "{}", backend);
    });
}

#[test]
fn test_directed_path_validation() {
    each_backend(Mode::Directed, |backend, mut graph| {
        graph.insert_edge("X", "Y");
        graph.insert_edge("Y", "Z");

        assert!(graph.path_valid(&["X", "Y", "Z"]), "{}", backend);
        assert!(!graph.path_valid(&["X", "Z"]), "{}", backend);
        // the last pair must be checked too
        assert!(!graph.path_valid(&["X", "Y", "X"]), "{}", backend);
        assert!(!graph.path_valid(&["Z", "Y"]), "{}", backend);
    });
}

#[test]
fn test_path_validity_boundary() {
    for mode in [Mode::Directed, Mode::Undirected] {
        each_backend(mode, |backend, graph| {
            assert!(graph.path_valid(&[]), "{}", backend);
            assert!(graph.path_valid(&["never-inserted"]), "{}", backend);
        });
    }
}

#[test]
fn test_directed_cycle_degrees() {
    each_backend(Mode::Directed, |backend, mut graph| {
        graph.insert_edge("X", "Y");
        graph.insert_edge("Y", "Z");
        graph.insert_edge("Z", "X");

        assert_eq!(graph.neighbors("Y"), vec!["Z"], "{}", backend);
        let table = graph.degree_table();
        let order: Vec<&str> = table.keys().map(Vertex::as_str).collect();
        assert_eq!(order, vec!["X", "Y", "Z"], "{}", backend);
        for degree in table.values() {
            assert_eq!(
                *degree,
                Degree::Directed {
                    in_degree: 1,
                    out_degree: 1,
                    total: 2
                },
                "{}",
                backend
            );
        }
    });
}

#[test]
fn test_insertion_is_idempotent() {
    for mode in [Mode::Directed, Mode::Undirected] {
        each_backend(mode, |backend, mut graph| {
            graph.insert_vertex("A");
            graph.insert_vertex("A");
            assert_eq!(graph.vertices(), vec!["A"], "{}", backend);

            graph.insert_edge("A", "B");
            let once = graph.snapshot();
            graph.insert_edge("A", "B");
            assert_eq!(graph.snapshot(), once, "{}", backend);
        });
    }
}

#[test]
fn test_insert_edge_registers_missing_endpoints() {
    each_backend(Mode::Directed, |backend, mut graph| {
        graph.insert_edge("P", "Q");

        assert!(graph.has_vertex("P"), "{}", backend);
        assert!(graph.has_vertex("Q"), "{}", backend);
        assert_eq!(graph.vertex_count(), 2, "{}", backend);
        assert!(graph.edge_exists("P", "Q"), "{}", backend);
        assert!(!graph.edge_exists("Q", "P"), "{}", backend);
        assert_eq!(graph.in_neighbors("Q"), vec!["P"], "{}", backend);
    });
}

#[test]
fn test_cascading_vertex_removal() {
    for mode in [Mode::Directed, Mode::Undirected] {
        each_backend(mode, |backend, mut graph| {
            graph.insert_edge("A", "V");
            graph.insert_edge("V", "B");
            graph.insert_edge("V", "V");
            graph.insert_edge("A", "B");

            graph.remove_vertex("V");

            for u in graph.vertices() {
                assert!(!graph.edge_exists(u.as_str(), "V"), "{}", backend);
                assert!(!graph.edge_exists("V", u.as_str()), "{}", backend);
                assert!(!graph.neighbors(u.as_str()).contains(&Vertex::new("V")));
            }
            assert!(graph.edge_exists("A", "B"), "{}", backend);
            assert_eq!(graph.degree("V"), None, "{}", backend);
        });
    }
}

#[test]
fn test_unknown_vertices_are_noops() {
    each_backend(Mode::Directed, |backend, mut graph| {
        graph.insert_edge("A", "B");
        let before = graph.snapshot();

        graph.remove_vertex("ghost");
        graph.remove_edge("ghost", "A");
        graph.remove_edge("B", "A");

        assert_eq!(graph.snapshot(), before, "{}", backend);
        assert!(graph.neighbors("ghost").is_empty(), "{}", backend);
        assert!(graph.in_neighbors("ghost").is_empty(), "{}", backend);
        assert!(!graph.edge_exists("ghost", "A"), "{}", backend);
        assert_eq!(graph.degree("ghost"), None, "{}", backend);
    });
}

#[test]
fn test_undirected_removal_from_either_side() {
    each_backend(Mode::Undirected, |backend, mut graph| {
        graph.insert_edge("A", "B");
        graph.remove_edge("B", "A");

        assert!(!graph.edge_exists("A", "B"), "{}", backend);
        assert!(!graph.edge_exists("B", "A"), "{}", backend);
        assert_eq!(graph.edge_count(), 0, "{}", backend);
        assert_eq!(graph.vertex_count(), 2, "{}", backend);
    });
}

#[test]
fn test_self_loop() {
    for mode in [Mode::Directed, Mode::Undirected] {
        each_backend(mode, |backend, mut graph| {
            graph.insert_edge("S", "S");

            assert!(graph.edge_exists("S", "S"), "{}", backend);
            assert_eq!(graph.neighbors("S"), vec!["S"], "{}", backend);
            assert_eq!(graph.edge_count(), 1, "{}", backend);
            assert_eq!(
                graph.degree("S"),
                Some(Degree::from_counts(mode, 1, 1)),
                "{}",
                backend
            );

            graph.remove_edge("S", "S");
            assert_eq!(graph.edge_count(), 0, "{}", backend);
        });
    }
}

#[test]
fn test_edges_in_registration_order() {
    each_backend(Mode::Undirected, |backend, mut graph| {
        graph.insert_vertex("C");
        graph.insert_edge("A", "C");
        graph.insert_edge("C", "B");

        let edges: Vec<String> = graph.edges().iter().map(ToString::to_string).collect();
        assert_eq!(
            edges,
            vec!["C -> A", "C -> B", "A -> C", "B -> C"],
            "{}",
            backend
        );
        assert_eq!(graph.edge_count(), 4, "{}", backend);
    });
}

#[test]
fn test_instances_do_not_share_storage() {
    for backend in Backend::ALL {
        let mut first = backend.create(Mode::Directed);
        let second = backend.create(Mode::Directed);
        first.insert_edge("A", "B");

        assert_eq!(second.vertex_count(), 0, "{}", backend);
        assert!(!second.edge_exists("A", "B"), "{}", backend);
    }
}

#[test]
fn test_mode_is_fixed_at_construction() {
    each_backend(Mode::Directed, |backend, mut graph| {
        graph.insert_edge("A", "B");
        graph.remove_vertex("A");
        assert_eq!(graph.mode(), Mode::Directed, "{}", backend);
        assert!(graph.is_directed(), "{}", backend);
    });
}

#[test]
fn test_display_empty_graph() {
    each_backend(Mode::Undirected, |backend, graph| {
        assert_eq!(graph.to_string(), "(empty graph)\n", "{}", backend);
    });
}
