//! Edge list representation
//!
//! A flat collection of (origin, destination) pairs in insertion order, plus the
//! vertex registry. Cheapest in memory; almost every query is a full scan.
//!
//! Costs:
//! - insert_edge: O(E) presence check before appending
//! - remove_vertex: O(E) rebuild of the edge collection
//! - neighbors: O(E) filter
//! - degree: O(E) per vertex, O(V·E) for the whole table

use std::fmt;
use tracing::{debug, trace};

use super::backend::Backend;
use super::registry::VertexRegistry;
use super::traits::Graph;
use super::types::{Degree, Edge, Mode, Vertex};

#[derive(Debug, Clone)]
pub struct EdgeListGraph {
    mode: Mode,
    vertices: VertexRegistry,
    edges: Vec<Edge>,
}

impl EdgeListGraph {
    pub fn new(mode: Mode) -> Self {
        EdgeListGraph {
            mode,
            vertices: VertexRegistry::new(),
            edges: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(Mode::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Mode::Undirected)
    }

    /// The raw pairs in insertion order
    pub fn pairs(&self) -> &[Edge] {
        &self.edges
    }

    fn contains(&self, origin: &str, destination: &str) -> bool {
        self.edges.iter().any(|e| e.matches(origin, destination))
    }

    fn push(&mut self, origin: &str, destination: &str) -> bool {
        if self.contains(origin, destination) {
            return false;
        }
        self.edges.push(Edge::new(origin, destination));
        true
    }

    fn take(&mut self, origin: &str, destination: &str) -> bool {
        match self.edges.iter().position(|e| e.matches(origin, destination)) {
            Some(position) => {
                self.edges.remove(position);
                true
            }
            None => false,
        }
    }

    /// Sort labels into registration order
    fn in_registration_order(&self, mut labels: Vec<Vertex>) -> Vec<Vertex> {
        labels.sort_by_key(|v| self.vertices.index_of(v.as_str()));
        labels
    }
}

impl Graph for EdgeListGraph {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn backend(&self) -> Backend {
        Backend::EdgeList
    }

    fn insert_vertex(&mut self, label: &str) {
        let (_, inserted) = self.vertices.insert(label);
        if inserted {
            debug!("Inserted vertex {} ({} vertices)", label, self.vertices.len());
        } else {
            trace!("Vertex {} already present", label);
        }
    }

    fn insert_edge(&mut self, origin: &str, destination: &str) {
        self.insert_vertex(origin);
        self.insert_vertex(destination);

        let mut inserted = self.push(origin, destination);
        if !self.mode.is_directed() {
            inserted |= self.push(destination, origin);
        }

        if inserted {
            debug!(
                "Inserted {} edge {} -> {} ({} pairs)",
                self.mode,
                origin,
                destination,
                self.edges.len()
            );
        } else {
            trace!("Edge {} -> {} already present", origin, destination);
        }
    }

    fn remove_edge(&mut self, origin: &str, destination: &str) {
        let mut removed = self.take(origin, destination);
        if !self.mode.is_directed() {
            removed |= self.take(destination, origin);
        }

        if removed {
            debug!("Removed {} edge {} -> {}", self.mode, origin, destination);
        } else {
            trace!("Edge {} -> {} not present", origin, destination);
        }
    }

    fn remove_vertex(&mut self, label: &str) {
        if !self.vertices.contains(label) {
            trace!("Vertex {} not present", label);
            return;
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(label));
        self.vertices.remove(label);

        debug!(
            "Removed vertex {} and {} incident pairs",
            label,
            before - self.edges.len()
        );
    }

    fn neighbors(&self, label: &str) -> Vec<Vertex> {
        let found = self
            .edges
            .iter()
            .filter(|e| e.origin == *label)
            .map(|e| e.destination.clone())
            .collect();
        self.in_registration_order(found)
    }

    fn in_neighbors(&self, label: &str) -> Vec<Vertex> {
        let found = self
            .edges
            .iter()
            .filter(|e| e.destination == *label)
            .map(|e| e.origin.clone())
            .collect();
        self.in_registration_order(found)
    }

    fn edge_exists(&self, origin: &str, destination: &str) -> bool {
        self.contains(origin, destination)
    }

    fn degree(&self, label: &str) -> Option<Degree> {
        if !self.vertices.contains(label) {
            return None;
        }

        let (mut in_degree, mut out_degree) = (0, 0);
        for edge in &self.edges {
            if edge.origin == *label {
                out_degree += 1;
            }
            if edge.destination == *label {
                in_degree += 1;
            }
        }
        Some(Degree::from_counts(self.mode, in_degree, out_degree))
    }

    fn vertices(&self) -> Vec<Vertex> {
        self.vertices.to_vec()
    }

    fn has_vertex(&self, label: &str) -> bool {
        self.vertices.contains(label)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl fmt::Display for EdgeListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertices.is_empty() {
            return writeln!(f, "(empty graph)");
        }

        writeln!(f, "{:<8} -> Destination", "Origin")?;
        writeln!(f, "-------------------")?;
        for edge in &self.edges {
            writeln!(f, "{:<8} -> {}", edge.origin.as_str(), edge.destination)?;
        }

        let isolated: Vec<&str> = self
            .vertices
            .iter()
            .filter(|v| !self.edges.iter().any(|e| e.touches(v.as_str())))
            .map(Vertex::as_str)
            .collect();
        if !isolated.is_empty() {
            writeln!(f, "isolated: {}", isolated.join(", "))?;
        }
        Ok(())
    }
}
