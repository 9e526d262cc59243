//! Vertex registry: ordered, duplicate-free label set with stable positions
//!
//! The edge list and adjacency matrix both keep their labels here. Positions
//! are dense (`0..len`) and follow registration order. Removing a label
//! compacts the positions of every label registered after it, which is what
//! the matrix relies on to keep its rows and columns aligned.

use indexmap::IndexSet;

use super::types::Vertex;

#[derive(Debug, Clone, Default)]
pub struct VertexRegistry {
    labels: IndexSet<Vertex>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        VertexRegistry {
            labels: IndexSet::new(),
        }
    }

    /// Register a label, returning its position and whether it was new
    pub fn insert(&mut self, label: &str) -> (usize, bool) {
        if let Some(index) = self.labels.get_index_of(label) {
            return (index, false);
        }
        self.labels.insert_full(Vertex::new(label))
    }

    /// Remove a label, returning the position it occupied
    ///
    /// Labels after it shift down by one. O(V).
    pub fn remove(&mut self, label: &str) -> Option<usize> {
        self.labels.shift_remove_full(label).map(|(index, _)| index)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.get_index_of(label)
    }

    pub fn label_at(&self, index: usize) -> Option<&Vertex> {
        self.labels.get_index(index)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.labels.iter()
    }

    /// Registered labels in order, cloned
    pub fn to_vec(&self) -> Vec<Vertex> {
        self.labels.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut registry = VertexRegistry::new();
        assert_eq!(registry.insert("A"), (0, true));
        assert_eq!(registry.insert("B"), (1, true));
        assert_eq!(registry.insert("A"), (0, false));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_compacts_positions() {
        let mut registry = VertexRegistry::new();
        registry.insert("A");
        registry.insert("B");
        registry.insert("C");

        assert_eq!(registry.remove("B"), Some(1));
        assert_eq!(registry.index_of("A"), Some(0));
        assert_eq!(registry.index_of("C"), Some(1));
        assert_eq!(registry.label_at(1).map(Vertex::as_str), Some("C"));
        assert_eq!(registry.remove("B"), None);
        assert!(!registry.contains("B"));
    }

    #[test]
    fn test_order_is_registration_order() {
        let mut registry = VertexRegistry::new();
        for label in ["Z", "A", "M"] {
            registry.insert(label);
        }
        let labels: Vec<&str> = registry.iter().map(Vertex::as_str).collect();
        assert_eq!(labels, vec!["Z", "A", "M"]);
        assert!(!registry.is_empty());
    }
}
