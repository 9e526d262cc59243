//! Core type definitions shared by every graph representation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use super::error::{GraphError, GraphResult};

/// Vertex label (e.g., "A", "Lisbon")
///
/// Labels are unique within a graph instance. Insertion order is kept by the
/// backends for display but carries no meaning of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Vertex(label.into())
    }

    /// Build a vertex from a line of user input: surrounding whitespace is
    /// trimmed and only the first word is kept.
    pub fn from_token(input: &str) -> GraphResult<Self> {
        input
            .split_whitespace()
            .next()
            .map(Vertex::new)
            .ok_or(GraphError::EmptyVertex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Vertex {
    fn from(s: String) -> Self {
        Vertex(s)
    }
}

impl From<&str> for Vertex {
    fn from(s: &str) -> Self {
        Vertex(s.to_string())
    }
}

impl PartialEq<str> for Vertex {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Vertex {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An ordered (origin, destination) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub origin: Vertex,
    pub destination: Vertex,
}

impl Edge {
    pub fn new(origin: impl Into<Vertex>, destination: impl Into<Vertex>) -> Self {
        Edge {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// The same pair with its endpoints swapped
    pub fn mirror(&self) -> Self {
        Edge {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
        }
    }

    /// Check if either endpoint is `label`
    pub fn touches(&self, label: &str) -> bool {
        self.origin == *label || self.destination == *label
    }

    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }

    /// Check if this is exactly the ordered pair (origin, destination)
    pub fn matches(&self, origin: &str, destination: &str) -> bool {
        self.origin == *origin && self.destination == *destination
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// Edge directionality, fixed when a graph is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Directed,
    #[default]
    Undirected,
}

impl Mode {
    pub fn is_directed(self) -> bool {
        matches!(self, Mode::Directed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Directed => "directed",
            Mode::Undirected => "undirected",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "directed" | "d" => Ok(Mode::Directed),
            "undirected" | "u" => Ok(Mode::Undirected),
            other => Err(GraphError::UnknownMode(other.to_string())),
        }
    }
}

/// Degree of a single vertex
///
/// Directed graphs report the in/out split; undirected graphs report one
/// number, since out-degree equals in-degree there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Degree {
    Directed {
        #[serde(rename = "in")]
        in_degree: usize,
        #[serde(rename = "out")]
        out_degree: usize,
        total: usize,
    },
    Undirected(usize),
}

impl Degree {
    /// Assemble a degree from raw counts for the given mode
    pub fn from_counts(mode: Mode, in_degree: usize, out_degree: usize) -> Self {
        match mode {
            Mode::Directed => Degree::Directed {
                in_degree,
                out_degree,
                total: in_degree + out_degree,
            },
            Mode::Undirected => Degree::Undirected(out_degree),
        }
    }

    pub fn out_degree(&self) -> usize {
        match *self {
            Degree::Directed { out_degree, .. } => out_degree,
            Degree::Undirected(d) => d,
        }
    }

    pub fn in_degree(&self) -> usize {
        match *self {
            Degree::Directed { in_degree, .. } => in_degree,
            Degree::Undirected(d) => d,
        }
    }

    /// Total for directed graphs, the single scalar for undirected ones
    pub fn total(&self) -> usize {
        match *self {
            Degree::Directed { total, .. } => total,
            Degree::Undirected(d) => d,
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degree::Directed {
                in_degree,
                out_degree,
                total,
            } => write!(f, "in: {}, out: {}, total: {}", in_degree, out_degree, total),
            Degree::Undirected(d) => write!(f, "{}", d),
        }
    }
}

/// Per-vertex degrees in registration order
pub type DegreeTable = IndexMap<Vertex, Degree>;
