//! Adjacency matrix representation
//!
//! A square boolean matrix indexed by registry position: cell `[i][j]` is set
//! when the edge (label_i, label_j) exists. The registry and the matrix must
//! always agree on size and order, so every structural change touches both.
//!
//! Growth is explicit. Adding a vertex appends one cell to each existing row
//! and one new row: O(V) per insertion, O(V²) to build a graph of V vertices
//! when rows have to reallocate. Removing a vertex compacts the matrix: its
//! row goes, its column goes from every remaining row, and its label leaves
//! the registry so the positions after it shift down together. O(V²) worst
//! case.
//!
//! Other costs:
//! - insert_edge / remove_edge / edge_exists: O(1) after the index lookup
//! - neighbors: O(V) row scan
//! - degree: O(V), row sum for out, column sum for in

use std::fmt;
use tracing::{debug, trace};

use super::backend::Backend;
use super::registry::VertexRegistry;
use super::traits::Graph;
use super::types::{Degree, Mode, Vertex};

#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    mode: Mode,
    vertices: VertexRegistry,
    /// `cells[row][column]`, always `vertices.len()` square
    cells: Vec<Vec<bool>>,
}

impl AdjacencyMatrixGraph {
    pub fn new(mode: Mode) -> Self {
        AdjacencyMatrixGraph {
            mode,
            vertices: VertexRegistry::new(),
            cells: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(Mode::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Mode::Undirected)
    }

    /// Pre-size for `additional` more vertices so growth does not reallocate
    pub fn reserve(&mut self, additional: usize) {
        let target = self.cells.len() + additional;
        self.cells.reserve(additional);
        for row in &mut self.cells {
            row.reserve(target - row.len());
        }
    }

    /// The raw matrix, rows in registration order
    pub fn matrix(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Check that the matrix is square and sized to the registry
    pub fn is_consistent(&self) -> bool {
        let size = self.vertices.len();
        self.cells.len() == size && self.cells.iter().all(|row| row.len() == size)
    }

    fn positions(&self, origin: &str, destination: &str) -> Option<(usize, usize)> {
        Some((
            self.vertices.index_of(origin)?,
            self.vertices.index_of(destination)?,
        ))
    }

    /// Set both the cell and, in undirected mode, its transpose.
    /// Returns whether anything changed.
    fn set(&mut self, row: usize, column: usize, value: bool) -> bool {
        let mut changed = self.cells[row][column] != value;
        self.cells[row][column] = value;
        if !self.mode.is_directed() {
            changed |= self.cells[column][row] != value;
            self.cells[column][row] = value;
        }
        changed
    }

    fn grow(&mut self) {
        let size = self.cells.len() + 1;
        for row in &mut self.cells {
            row.push(false);
        }
        self.cells.push(vec![false; size]);
    }

    fn shrink(&mut self, index: usize) {
        self.cells.remove(index);
        for row in &mut self.cells {
            row.remove(index);
        }
    }

    fn out_degree(&self, index: usize) -> usize {
        self.cells[index].iter().filter(|&&cell| cell).count()
    }

    fn in_degree(&self, index: usize) -> usize {
        self.cells.iter().filter(|row| row[index]).count()
    }

    fn labels_where(&self, mut present: impl FnMut(usize) -> bool) -> Vec<Vertex> {
        (0..self.cells.len())
            .filter(|&position| present(position))
            .filter_map(|position| self.vertices.label_at(position).cloned())
            .collect()
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn backend(&self) -> Backend {
        Backend::AdjacencyMatrix
    }

    fn insert_vertex(&mut self, label: &str) {
        let (index, inserted) = self.vertices.insert(label);
        if !inserted {
            trace!("Vertex {} already present at index {}", label, index);
            return;
        }
        self.grow();
        debug_assert!(self.is_consistent());
        debug!("Inserted vertex {} at index {}", label, index);
    }

    fn insert_edge(&mut self, origin: &str, destination: &str) {
        self.insert_vertex(origin);
        self.insert_vertex(destination);

        let Some((row, column)) = self.positions(origin, destination) else {
            return;
        };
        if self.set(row, column, true) {
            debug!(
                "Inserted {} edge {} -> {} at [{}][{}]",
                self.mode, origin, destination, row, column
            );
        } else {
            trace!("Edge {} -> {} already present", origin, destination);
        }
    }

    fn remove_edge(&mut self, origin: &str, destination: &str) {
        let Some((row, column)) = self.positions(origin, destination) else {
            trace!("Edge {} -> {} references an unknown vertex", origin, destination);
            return;
        };
        if self.set(row, column, false) {
            debug!("Removed {} edge {} -> {}", self.mode, origin, destination);
        } else {
            trace!("Edge {} -> {} not present", origin, destination);
        }
    }

    fn remove_vertex(&mut self, label: &str) {
        let Some(index) = self.vertices.index_of(label) else {
            trace!("Vertex {} not present", label);
            return;
        };

        self.shrink(index);
        self.vertices.remove(label);
        debug_assert!(self.is_consistent());

        debug!(
            "Removed vertex {} from index {} ({} vertices left)",
            label,
            index,
            self.vertices.len()
        );
    }

    fn neighbors(&self, label: &str) -> Vec<Vertex> {
        match self.vertices.index_of(label) {
            Some(row) => self.labels_where(|column| self.cells[row][column]),
            None => Vec::new(),
        }
    }

    fn in_neighbors(&self, label: &str) -> Vec<Vertex> {
        match self.vertices.index_of(label) {
            Some(column) => self.labels_where(|row| self.cells[row][column]),
            None => Vec::new(),
        }
    }

    fn edge_exists(&self, origin: &str, destination: &str) -> bool {
        self.positions(origin, destination)
            .is_some_and(|(row, column)| self.cells[row][column])
    }

    fn degree(&self, label: &str) -> Option<Degree> {
        let index = self.vertices.index_of(label)?;
        let out_degree = self.out_degree(index);
        let in_degree = match self.mode {
            Mode::Directed => self.in_degree(index),
            Mode::Undirected => out_degree,
        };
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
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .sum()
    }
}

impl fmt::Display for AdjacencyMatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertices.is_empty() {
            return writeln!(f, "(empty graph)");
        }

        let width = self
            .vertices
            .iter()
            .map(|v| v.as_str().len())
            .max()
            .unwrap_or(1);

        write!(f, "{:width$}", "", width = width)?;
        for vertex in self.vertices.iter() {
            write!(f, " {:>width$}", vertex.as_str(), width = width)?;
        }
        writeln!(f)?;

        for (vertex, row) in self.vertices.iter().zip(&self.cells) {
            write!(f, "{:<width$}", vertex.as_str(), width = width)?;
            for &cell in row {
                write!(f, " {:>width$}", u8::from(cell), width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
