//! Graph contract and its three representations
//!
//! This module implements one operation contract over:
//! - an adjacency list (vertex -> out-neighbor sequence)
//! - an edge list (flat ordered pairs plus a vertex registry)
//! - an adjacency matrix (square boolean matrix plus a vertex registry)
//!
//! All three support directed and undirected modes and report identical
//! results for identical operation sequences.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod backend;
pub mod edge_list;
pub mod error;
pub mod registry;
pub mod snapshot;
pub mod traits;
pub mod types;

// Re-export main types
pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_matrix::AdjacencyMatrixGraph;
pub use backend::{Backend, GraphConfig};
pub use edge_list::EdgeListGraph;
pub use error::{GraphError, GraphResult};
pub use registry::VertexRegistry;
pub use snapshot::GraphSnapshot;
pub use traits::Graph;
pub use types::{Degree, DegreeTable, Edge, Mode, Vertex};
