//! Mutable weighted directed graphs.
//!
//! [`Graph`] is the contract; [`EdgesGraph`] and [`VerticesGraph`] are two
//! interchangeable representations of it. Both are driven through the same
//! conformance suite (`tests/graph_conformance.rs`) and must be
//! indistinguishable from the outside.
//!
//! # Model
//!
//! - Vertices are unique labels of any [`Label`] type.
//! - Edges are directed and carry a strictly positive [`Weight`].
//!   A→B and B→A are independent; self-loops are allowed.
//! - Setting a weight to 0 deletes the edge. Removing a vertex deletes
//!   every edge touching it.
//!
//! # Example
//!
//! ```
//! use poet_core::graph::{Graph, VerticesGraph};
//!
//! let mut graph = VerticesGraph::new();
//! assert_eq!(graph.set_edge("a", "b", 2).unwrap(), 0);
//! assert_eq!(graph.set_edge("a", "b", 5).unwrap(), 2);
//! assert_eq!(graph.targets(&"a").get(&"b"), Some(&5));
//! assert!(graph.set_edge("a", "b", -1).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

mod edges;
mod vertices;

pub use edges::EdgesGraph;
pub use vertices::VerticesGraph;

/// Edge weight. Stored weights are always strictly positive.
pub type Weight = i64;

/// Bound for vertex labels.
///
/// Labels need hashing for O(1) membership checks and a total order so
/// that snapshots and tie-breaks are deterministic.
pub trait Label: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Label for T {}

/// A directed, weighted edge as returned by [`Graph::edges`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge<L> {
    /// Source vertex
    pub source: L,
    /// Target vertex
    pub target: L,
    /// Edge weight (> 0)
    pub weight: Weight,
}

impl<L> Edge<L> {
    /// Create a new edge.
    pub fn new(source: L, target: L, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// A mutable weighted directed graph with labeled vertices.
pub trait Graph<L: Label> {
    /// Add a vertex.
    ///
    /// Returns `true` if the vertex was newly added, `false` if it was
    /// already present (the graph is unchanged).
    fn add_vertex(&mut self, label: L) -> bool;

    /// Set the weight of the edge `source -> target`.
    ///
    /// Missing endpoints are added as vertices as part of the call, for any
    /// non-negative weight (0 included). A weight of 0 removes the edge if
    /// it exists; a positive weight creates or overwrites it.
    ///
    /// Returns the previous weight, or 0 if there was no edge.
    ///
    /// # Errors
    ///
    /// [`GraphError::NegativeWeight`](crate::GraphError::NegativeWeight) if
    /// `weight < 0`. The graph is left untouched.
    fn set_edge(&mut self, source: L, target: L, weight: Weight) -> Result<Weight>;

    /// Remove a vertex and every edge where it is the source or target.
    ///
    /// Returns `true` if the vertex existed.
    fn remove_vertex(&mut self, label: &L) -> bool;

    /// Snapshot of the vertex set.
    fn vertices(&self) -> BTreeSet<L>;

    /// All vertices with an edge into `target`, with that edge's weight.
    fn sources(&self, target: &L) -> BTreeMap<L, Weight>;

    /// All vertices `source` has an edge to, with that edge's weight.
    fn targets(&self, source: &L) -> BTreeMap<L, Weight>;

    /// Check whether a vertex exists.
    fn contains_vertex(&self, label: &L) -> bool;

    /// Snapshot of every edge, sorted by source then target.
    fn edges(&self) -> Vec<Edge<L>>;

    /// Weight of the edge `source -> target`, if it exists.
    fn weight(&self, source: &L, target: &L) -> Option<Weight> {
        self.targets(source).get(target).copied()
    }

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// True if the graph has no vertices (and therefore no edges).
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// Reject negative weights before any mutation happens.
pub(crate) fn check_weight(weight: Weight) -> Result<()> {
    if weight < 0 {
        return Err(crate::GraphError::NegativeWeight { weight });
    }
    Ok(())
}
