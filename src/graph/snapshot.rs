//! Serializable view of a graph, for machine-readable output

use serde::Serialize;

use super::backend::Backend;
use super::types::{DegreeTable, Edge, Mode, Vertex};

/// Everything observable about a graph at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub mode: Mode,
    pub backend: Backend,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub degrees: DegreeTable,
}

impl GraphSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Same observable content, ignoring which backend produced it
    pub fn same_graph(&self, other: &GraphSnapshot) -> bool {
        self.mode == other.mode
            && self.vertices == other.vertices
            && self.edges == other.edges
            && self.degrees == other.degrees
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Backend, Graph, Mode};

    #[test]
    fn test_snapshot_json() {
        let mut graph = Backend::AdjacencyList.create(Mode::Directed);
        graph.insert_edge("X", "Y");

        let json: serde_json::Value =
            serde_json::from_str(&graph.snapshot().to_json().unwrap()).unwrap();
        assert_eq!(json["mode"], "directed");
        assert_eq!(json["backend"], "adjacency-list");
        assert_eq!(json["vertices"], serde_json::json!(["X", "Y"]));
        assert_eq!(
            json["edges"],
            serde_json::json!([{ "origin": "X", "destination": "Y" }])
        );
        assert_eq!(json["degrees"]["X"]["out"], 1);
        assert_eq!(json["degrees"]["Y"]["in"], 1);
    }

    #[test]
    fn test_same_graph_ignores_backend() {
        let mut list = Backend::AdjacencyList.create(Mode::Undirected);
        let mut matrix = Backend::AdjacencyMatrix.create(Mode::Undirected);
        for graph in [&mut list, &mut matrix] {
            graph.insert_edge("A", "B");
        }

        assert!(list.snapshot().same_graph(&matrix.snapshot()));
        assert_ne!(list.snapshot(), matrix.snapshot());
    }
}
