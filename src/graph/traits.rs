//! The operation contract shared by every graph representation
//!
//! Any backend can replace another without changing caller code: for the same
//! sequence of calls, all of them report the same neighbors, edges, degrees and
//! path checks, in the same order (vertex registration order).
//!
//! None of the operations fail. Unknown vertices give empty/false results and
//! duplicate inserts are no-ops.

use std::fmt;

use super::backend::Backend;
use super::snapshot::GraphSnapshot;
use super::types::{Degree, DegreeTable, Edge, Mode, Vertex};

pub trait Graph: fmt::Debug + fmt::Display {
    /// Directionality chosen at construction
    fn mode(&self) -> Mode;

    /// Which representation stores this graph
    fn backend(&self) -> Backend;

    /// Add `label` if it is not already registered
    fn insert_vertex(&mut self, label: &str);

    /// Record the edge (origin, destination), registering missing endpoints
    /// first. Undirected graphs also record the mirror edge.
    fn insert_edge(&mut self, origin: &str, destination: &str);

    /// Drop the edge (and its mirror in undirected mode) if present
    fn remove_edge(&mut self, origin: &str, destination: &str);

    /// Drop `label` together with every edge that starts or ends at it
    fn remove_vertex(&mut self, label: &str);

    /// Vertices `v` with an edge (label, v), in registration order
    fn neighbors(&self, label: &str) -> Vec<Vertex>;

    /// Vertices `u` with an edge (u, label), in registration order
    fn in_neighbors(&self, label: &str) -> Vec<Vertex>;

    /// True iff the exact ordered pair is stored
    fn edge_exists(&self, origin: &str, destination: &str) -> bool;

    /// Degree of `label`, or `None` if it is not registered
    fn degree(&self, label: &str) -> Option<Degree>;

    /// Registered labels in registration order
    fn vertices(&self) -> Vec<Vertex>;

    fn has_vertex(&self, label: &str) -> bool;

    fn vertex_count(&self) -> usize;

    /// Number of stored ordered pairs (mirrors included)
    fn edge_count(&self) -> usize;

    /// Every stored ordered pair, by origin then destination registration order
    fn edges(&self) -> Vec<Edge> {
        self.vertices()
            .into_iter()
            .flat_map(|origin| {
                self.neighbors(origin.as_str())
                    .into_iter()
                    .map(move |destination| Edge {
                        origin: origin.clone(),
                        destination,
                    })
            })
            .collect()
    }

    fn is_directed(&self) -> bool {
        self.mode().is_directed()
    }

    /// Degree of every vertex, in registration order
    fn degree_table(&self) -> DegreeTable {
        self.vertices()
            .into_iter()
            .filter_map(|v| {
                let degree = self.degree(v.as_str())?;
                Some((v, degree))
            })
            .collect()
    }

    /// Check that every consecutive pair of `path` is a stored edge
    ///
    /// Paths with fewer than two vertices are trivially valid, whether or not
    /// the vertex exists.
    fn path_valid(&self, path: &[&str]) -> bool {
        path.windows(2)
            .all(|pair| self.edge_exists(pair[0], pair[1]))
    }

    /// Serializable view of the whole graph
    fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            mode: self.mode(),
            backend: self.backend(),
            vertices: self.vertices(),
            edges: self.edges(),
            degrees: self.degree_table(),
        }
    }
}
