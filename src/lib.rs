//! trigraph
//!
//! A small graph abstraction exposing one operation contract through three
//! interchangeable representations: adjacency list, edge list and adjacency
//! matrix. Each trades lookup speed, memory and mutation cost differently while
//! reporting identical results for identical operation sequences.
//!
//! Supported operations, in directed and undirected mode:
//! - vertex and edge insertion/removal (idempotent, cascading vertex removal)
//! - neighbor lookup
//! - per-vertex degree and the full degree table
//! - edge existence and path validation
//!
//! ## Example Usage
//!
//! ```rust
//! use trigraph::{Backend, Degree, Graph, Mode};
//!
//! let mut graph = Backend::AdjacencyMatrix.create(Mode::Undirected);
//! graph.insert_edge("A", "B");
//! graph.insert_edge("B", "C");
//! graph.insert_edge("A", "C");
//!
//! assert_eq!(graph.neighbors("A"), vec!["B", "C"]);
//! assert_eq!(graph.degree_table()["A"], Degree::Undirected(2));
//!
//! graph.remove_vertex("B");
//! assert_eq!(graph.neighbors("A"), vec!["C"]);
//! assert!(!graph.edge_exists("A", "B"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AdjacencyListGraph, AdjacencyMatrixGraph, Backend, Degree, DegreeTable, Edge, EdgeListGraph,
    Graph, GraphConfig, GraphError, GraphResult, GraphSnapshot, Mode, Vertex, VertexRegistry,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
