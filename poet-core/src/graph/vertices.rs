//! Adjacency-map representation.
//!
//! Every vertex owns its outgoing and incoming weights, so adjacency queries
//! cost O(degree) and edge lookups are O(1) amortized. Each edge is recorded
//! twice (once on each endpoint) and both copies are kept in sync.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{check_weight, Edge, Graph, Label, Weight};
use crate::error::Result;

/// Per-vertex adjacency.
#[derive(Debug, Clone)]
struct Vertex<L> {
    outgoing: HashMap<L, Weight>,
    incoming: HashMap<L, Weight>,
}

impl<L> Default for Vertex<L> {
    fn default() -> Self {
        Self {
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }
}

/// A [`Graph`] stored as a map from each vertex to its adjacency.
#[derive(Debug, Clone)]
pub struct VerticesGraph<L> {
    vertices: HashMap<L, Vertex<L>>,
}

impl<L: Label> VerticesGraph<L> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Debug-only invariant check: weights are positive, both endpoints
    /// exist and the outgoing/incoming copies agree.
    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            for (label, vertex) in &self.vertices {
                for (target, &weight) in &vertex.outgoing {
                    debug_assert!(weight > 0, "stored non-positive weight on {:?}", label);
                    let mirrored = self
                        .vertices
                        .get(target)
                        .and_then(|t| t.incoming.get(label));
                    debug_assert_eq!(
                        mirrored,
                        Some(&weight),
                        "edge {:?} -> {:?} not mirrored",
                        label,
                        target
                    );
                }
                for source in vertex.incoming.keys() {
                    debug_assert!(
                        self.vertices
                            .get(source)
                            .is_some_and(|s| s.outgoing.contains_key(label)),
                        "dangling incoming edge {:?} -> {:?}",
                        source,
                        label
                    );
                }
            }
        }
    }
}

impl<L: Label> Default for VerticesGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Graph<L> for VerticesGraph<L> {
    fn add_vertex(&mut self, label: L) -> bool {
        if self.vertices.contains_key(&label) {
            return false;
        }
        self.vertices.insert(label, Vertex::default());
        self.check_rep();
        true
    }

    fn set_edge(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        check_weight(weight)?;

        let previous = {
            let from = self.vertices.entry(source.clone()).or_default();
            if weight == 0 {
                from.outgoing.remove(&target)
            } else {
                from.outgoing.insert(target.clone(), weight)
            }
        };

        let to = self.vertices.entry(target).or_default();
        if weight == 0 {
            to.incoming.remove(&source);
        } else {
            to.incoming.insert(source, weight);
        }

        self.check_rep();
        Ok(previous.unwrap_or(0))
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        let Some(removed) = self.vertices.remove(label) else {
            return false;
        };

        // Self-loops live in the removed entry itself, so missing neighbours
        // are skipped rather than treated as errors.
        for target in removed.outgoing.keys() {
            if let Some(t) = self.vertices.get_mut(target) {
                t.incoming.remove(label);
            }
        }
        for source in removed.incoming.keys() {
            if let Some(s) = self.vertices.get_mut(source) {
                s.outgoing.remove(label);
            }
        }

        self.check_rep();
        true
    }

    fn vertices(&self) -> BTreeSet<L> {
        self.vertices.keys().cloned().collect()
    }

    fn sources(&self, target: &L) -> BTreeMap<L, Weight> {
        self.vertices
            .get(target)
            .map(|v| {
                v.incoming
                    .iter()
                    .map(|(label, &weight)| (label.clone(), weight))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn targets(&self, source: &L) -> BTreeMap<L, Weight> {
        self.vertices
            .get(source)
            .map(|v| {
                v.outgoing
                    .iter()
                    .map(|(label, &weight)| (label.clone(), weight))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn contains_vertex(&self, label: &L) -> bool {
        self.vertices.contains_key(label)
    }

    fn edges(&self) -> Vec<Edge<L>> {
        let mut edges: Vec<Edge<L>> = self
            .vertices
            .iter()
            .flat_map(|(source, v)| {
                v.outgoing
                    .iter()
                    .map(move |(target, &weight)| Edge::new(source.clone(), target.clone(), weight))
            })
            .collect();
        edges.sort();
        edges
    }

    fn weight(&self, source: &L, target: &L) -> Option<Weight> {
        self.vertices
            .get(source)
            .and_then(|v| v.outgoing.get(target))
            .copied()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.outgoing.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_is_mirrored_on_both_endpoints() {
        let mut graph = VerticesGraph::new();
        graph.set_edge("a", "b", 3).unwrap();
        assert_eq!(graph.vertices[&"a"].outgoing.get(&"b"), Some(&3));
        assert_eq!(graph.vertices[&"b"].incoming.get(&"a"), Some(&3));

        graph.set_edge("a", "b", 0).unwrap();
        assert!(graph.vertices[&"a"].outgoing.is_empty());
        assert!(graph.vertices[&"b"].incoming.is_empty());
    }

    #[test]
    fn test_remove_vertex_with_self_loop() {
        let mut graph = VerticesGraph::new();
        graph.set_edge("a", "a", 2).unwrap();
        graph.set_edge("a", "b", 1).unwrap();
        graph.set_edge("b", "a", 4).unwrap();

        assert!(graph.remove_vertex(&"a"));
        assert_eq!(graph.vertices(), BTreeSet::from(["b"]));
        assert!(graph.vertices[&"b"].incoming.is_empty());
        assert!(graph.vertices[&"b"].outgoing.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_missing_vertex_queries_are_empty() {
        let graph: VerticesGraph<String> = VerticesGraph::new();
        assert!(graph.sources(&"nope".to_string()).is_empty());
        assert!(graph.targets(&"nope".to_string()).is_empty());
        assert_eq!(graph.weight(&"a".to_string(), &"b".to_string()), None);
    }
}
