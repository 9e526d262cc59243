//! Backend selection and graph configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::adjacency_list::AdjacencyListGraph;
use super::adjacency_matrix::AdjacencyMatrixGraph;
use super::edge_list::EdgeListGraph;
use super::error::GraphError;
use super::traits::Graph;
use super::types::Mode;

/// The three interchangeable representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    #[default]
    AdjacencyList,
    EdgeList,
    AdjacencyMatrix,
}

impl Backend {
    pub const ALL: [Backend; 3] = [
        Backend::AdjacencyList,
        Backend::EdgeList,
        Backend::AdjacencyMatrix,
    ];

    /// Create an empty graph stored in this representation
    pub fn create(self, mode: Mode) -> Box<dyn Graph> {
        match self {
            Backend::AdjacencyList => Box::new(AdjacencyListGraph::new(mode)),
            Backend::EdgeList => Box::new(EdgeListGraph::new(mode)),
            Backend::AdjacencyMatrix => Box::new(AdjacencyMatrixGraph::new(mode)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Backend::AdjacencyList => "adjacency-list",
            Backend::EdgeList => "edge-list",
            Backend::AdjacencyMatrix => "adjacency-matrix",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" | "adjacency-list" => Ok(Backend::AdjacencyList),
            "edges" | "edge-list" => Ok(Backend::EdgeList),
            "matrix" | "adjacency-matrix" => Ok(Backend::AdjacencyMatrix),
            other => Err(GraphError::UnknownBackend(other.to_string())),
        }
    }
}

/// How to build a graph: directionality plus representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub mode: Mode,
    pub backend: Backend,
}

impl GraphConfig {
    pub fn new(mode: Mode, backend: Backend) -> Self {
        GraphConfig { mode, backend }
    }

    pub fn build(&self) -> Box<dyn Graph> {
        self.backend.create(self.mode)
    }
}
