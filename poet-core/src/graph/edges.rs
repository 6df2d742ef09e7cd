//! Edge-list representation.
//!
//! Keeps a vertex set plus a flat list of edges. Adjacency queries scan the
//! whole list, which is fine for small corpora and easy to reason about.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::{check_weight, Edge, Graph, Label, Weight};
use crate::error::Result;

/// A [`Graph`] stored as a vertex set and a list of edges.
#[derive(Debug, Clone)]
pub struct EdgesGraph<L> {
    vertices: HashSet<L>,
    edges: Vec<Edge<L>>,
}

impl<L: Label> EdgesGraph<L> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashSet::new(),
            edges: Vec::new(),
        }
    }

    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| &e.source == source && &e.target == target)
    }

    /// Debug-only invariant check.
    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            let mut seen = HashSet::with_capacity(self.edges.len());
            for e in &self.edges {
                debug_assert!(e.weight > 0, "stored non-positive weight {:?}", e);
                debug_assert!(
                    self.vertices.contains(&e.source) && self.vertices.contains(&e.target),
                    "edge endpoint missing from vertex set: {:?}",
                    e
                );
                debug_assert!(
                    seen.insert((&e.source, &e.target)),
                    "duplicate edge {:?}",
                    e
                );
            }
        }
    }
}

impl<L: Label> Default for EdgesGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Graph<L> for EdgesGraph<L> {
    fn add_vertex(&mut self, label: L) -> bool {
        let added = self.vertices.insert(label);
        self.check_rep();
        added
    }

    fn set_edge(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        check_weight(weight)?;

        let previous = match self.position(&source, &target) {
            Some(idx) if weight == 0 => self.edges.swap_remove(idx).weight,
            Some(idx) => std::mem::replace(&mut self.edges[idx].weight, weight),
            None => {
                self.vertices.insert(source.clone());
                self.vertices.insert(target.clone());
                if weight > 0 {
                    self.edges.push(Edge::new(source, target, weight));
                }
                0
            }
        };

        self.check_rep();
        Ok(previous)
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        if !self.vertices.remove(label) {
            return false;
        }
        self.edges.retain(|e| &e.source != label && &e.target != label);
        self.check_rep();
        true
    }

    fn vertices(&self) -> BTreeSet<L> {
        self.vertices.iter().cloned().collect()
    }

    fn sources(&self, target: &L) -> BTreeMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| &e.target == target)
            .map(|e| (e.source.clone(), e.weight))
            .collect()
    }

    fn targets(&self, source: &L) -> BTreeMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| &e.source == source)
            .map(|e| (e.target.clone(), e.weight))
            .collect()
    }

    fn contains_vertex(&self, label: &L) -> bool {
        self.vertices.contains(label)
    }

    fn edges(&self) -> Vec<Edge<L>> {
        let mut edges = self.edges.clone();
        edges.sort();
        edges
    }

    fn weight(&self, source: &L, target: &L) -> Option<Weight> {
        self.position(source, target).map(|idx| self.edges[idx].weight)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
