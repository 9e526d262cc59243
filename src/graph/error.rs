//! Errors raised at the parsing and configuration boundary
//!
//! Graph operations themselves never fail: unknown vertices and duplicate
//! inserts are no-ops. Only turning user input into graph values can go wrong.

use thiserror::Error;

/// Errors that can occur while parsing graph inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Unknown graph mode '{0}' (expected 'directed' or 'undirected')")]
    UnknownMode(String),

    #[error("Unknown backend '{0}' (expected 'list', 'edges' or 'matrix')")]
    UnknownBackend(String),

    #[error("Vertex label is empty")]
    EmptyVertex,
}

pub type GraphResult<T> = Result<T, GraphError>;
