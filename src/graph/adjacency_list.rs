//! Adjacency list representation
//!
//! Each vertex maps to the sequence of its out-neighbors. The map keeps
//! registration order, and every sequence is kept sorted by the registration
//! position of its entries so neighbor order matches the other backends.
//!
//! Costs:
//! - neighbors: O(1) lookup, O(out-degree) to materialize
//! - insert_edge: O(out-degree) to find the slot and guard duplicates
//! - remove_vertex: O(V + E), every sequence is rewritten
//! - degree: O(V + E) per vertex (in-degree scans every sequence);
//!   `degree_table` tallies in-degrees once, O(V + E) total

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::{debug, trace};

use super::backend::Backend;
use super::traits::Graph;
use super::types::{Degree, DegreeTable, Mode, Vertex};

#[derive(Debug, Clone)]
pub struct AdjacencyListGraph {
    mode: Mode,
    /// Vertex -> out-neighbors, sorted by registration position
    adjacency: IndexMap<Vertex, Vec<Vertex>>,
}

impl AdjacencyListGraph {
    pub fn new(mode: Mode) -> Self {
        AdjacencyListGraph {
            mode,
            adjacency: IndexMap::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(Mode::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Mode::Undirected)
    }

    /// Append `to` to the sequence of `from` unless already present.
    /// Both labels must be registered.
    fn link(&mut self, from: &str, to: &str) -> bool {
        let Some(target) = self.adjacency.get_index_of(to) else {
            return false;
        };
        let Some(sequence) = self.adjacency.get(from) else {
            return false;
        };

        let slot = sequence
            .binary_search_by_key(&Some(target), |v| self.adjacency.get_index_of(v.as_str()));
        match slot {
            Ok(_) => false,
            Err(position) => {
                if let Some(sequence) = self.adjacency.get_mut(from) {
                    sequence.insert(position, Vertex::new(to));
                }
                true
            }
        }
    }

    fn unlink(&mut self, from: &str, to: &str) -> bool {
        let Some(sequence) = self.adjacency.get_mut(from) else {
            return false;
        };
        match sequence.iter().position(|v| v == to) {
            Some(position) => {
                sequence.remove(position);
                true
            }
            None => false,
        }
    }

    fn in_degree(&self, label: &str) -> usize {
        self.adjacency
            .values()
            .filter(|sequence| sequence.iter().any(|v| v == label))
            .count()
    }
}

impl Graph for AdjacencyListGraph {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn backend(&self) -> Backend {
        Backend::AdjacencyList
    }

    fn insert_vertex(&mut self, label: &str) {
        if self.adjacency.contains_key(label) {
            trace!("Vertex {} already present", label);
            return;
        }
        self.adjacency.insert(Vertex::new(label), Vec::new());
        debug!("Inserted vertex {} ({} vertices)", label, self.adjacency.len());
    }

    fn insert_edge(&mut self, origin: &str, destination: &str) {
        self.insert_vertex(origin);
        self.insert_vertex(destination);

        let mut inserted = self.link(origin, destination);
        if !self.mode.is_directed() {
            inserted |= self.link(destination, origin);
        }

        if inserted {
            debug!("Inserted {} edge {} -> {}", self.mode, origin, destination);
        } else {
            trace!("Edge {} -> {} already present", origin, destination);
        }
    }

    fn remove_edge(&mut self, origin: &str, destination: &str) {
        let mut removed = self.unlink(origin, destination);
        if !self.mode.is_directed() {
            removed |= self.unlink(destination, origin);
        }

        if removed {
            debug!("Removed {} edge {} -> {}", self.mode, origin, destination);
        } else {
            trace!("Edge {} -> {} not present", origin, destination);
        }
    }

    fn remove_vertex(&mut self, label: &str) {
        let Some(outgoing) = self.adjacency.shift_remove(label) else {
            trace!("Vertex {} not present", label);
            return;
        };

        let mut incoming = 0;
        for sequence in self.adjacency.values_mut() {
            let before = sequence.len();
            sequence.retain(|v| v != label);
            incoming += before - sequence.len();
        }

        debug!(
            "Removed vertex {} with {} outgoing and {} incoming edges",
            label,
            outgoing.len(),
            incoming
        );
    }

    fn neighbors(&self, label: &str) -> Vec<Vertex> {
        self.adjacency.get(label).cloned().unwrap_or_default()
    }

    fn in_neighbors(&self, label: &str) -> Vec<Vertex> {
        if !self.adjacency.contains_key(label) {
            return Vec::new();
        }
        self.adjacency
            .iter()
            .filter(|(_, sequence)| sequence.iter().any(|v| v == label))
            .map(|(vertex, _)| vertex.clone())
            .collect()
    }

    fn edge_exists(&self, origin: &str, destination: &str) -> bool {
        self.adjacency
            .get(origin)
            .is_some_and(|sequence| sequence.iter().any(|v| v == destination))
    }

    fn degree(&self, label: &str) -> Option<Degree> {
        let out_degree = self.adjacency.get(label)?.len();
        let in_degree = match self.mode {
            Mode::Directed => self.in_degree(label),
            Mode::Undirected => out_degree,
        };
        Some(Degree::from_counts(self.mode, in_degree, out_degree))
    }

    fn degree_table(&self) -> DegreeTable {
        let mut in_counts: FxHashMap<&str, usize> = FxHashMap::default();
        for sequence in self.adjacency.values() {
            for v in sequence {
                *in_counts.entry(v.as_str()).or_default() += 1;
            }
        }

        self.adjacency
            .iter()
            .map(|(vertex, sequence)| {
                let in_degree = in_counts.get(vertex.as_str()).copied().unwrap_or(0);
                let degree = Degree::from_counts(self.mode, in_degree, sequence.len());
                (vertex.clone(), degree)
            })
            .collect()
    }

    fn vertices(&self) -> Vec<Vertex> {
        self.adjacency.keys().cloned().collect()
    }

    fn has_vertex(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl fmt::Display for AdjacencyListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.adjacency.is_empty() {
            return writeln!(f, "(empty graph)");
        }
        for (vertex, sequence) in &self.adjacency {
            let names: Vec<&str> = sequence.iter().map(Vertex::as_str).collect();
            writeln!(f, "{} -> [{}]", vertex, names.join(", "))?;
        }
        Ok(())
    }
}
