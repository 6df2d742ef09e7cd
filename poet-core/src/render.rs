//! Human-readable dumps of a graph.
//!
//! Three shapes, all for debugging and tooling:
//! - `Display` on both graph types (plain text)
//! - [`GraphSnapshot`], a serializable copy for JSON output
//! - [`to_dot`], Graphviz DOT through petgraph
//!
//! None of these formats is meant to be parsed back.

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt::{self, Display};

use crate::graph::{Edge, EdgesGraph, Graph, Label, VerticesGraph};

/// Owned, serializable view of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot<L> {
    /// All vertices, sorted.
    pub vertices: BTreeSet<L>,
    /// All edges, sorted by source then target.
    pub edges: Vec<Edge<L>>,
}

impl<L: Label> GraphSnapshot<L> {
    /// Capture the current state of a graph.
    pub fn of<G: Graph<L> + ?Sized>(graph: &G) -> Self {
        Self {
            vertices: graph.vertices(),
            edges: graph.edges(),
        }
    }
}

impl<L: Label + Serialize> GraphSnapshot<L> {
    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Write the plain-text dump shared by both representations.
pub fn write_graph<L, G>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    L: Label + Display,
    G: Graph<L> + ?Sized,
{
    let vertices = graph.vertices();
    if vertices.is_empty() {
        return write!(f, "The graph is empty");
    }

    write!(f, "Vertices:")?;
    for v in &vertices {
        write!(f, " {}", v)?;
    }

    let edges = graph.edges();
    if edges.is_empty() {
        return write!(f, "\nEdges: none");
    }
    write!(f, "\nEdges:")?;
    for e in &edges {
        write!(f, "\n  {} -> {} ({})", e.source, e.target, e.weight)?;
    }
    Ok(())
}

impl<L: Label + Display> Display for EdgesGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_graph(self, f)
    }
}

impl<L: Label + Display> Display for VerticesGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_graph(self, f)
    }
}

/// Render a graph as Graphviz DOT, labelling edges with their weights.
pub fn to_dot<L, G>(graph: &G) -> String
where
    L: Label + Display,
    G: Graph<L> + ?Sized,
{
    let vertices = graph.vertices();
    let mut dg: DiGraph<String, i64> = DiGraph::with_capacity(vertices.len(), 0);
    let mut index: HashMap<L, NodeIndex> = HashMap::with_capacity(vertices.len());

    for v in vertices {
        let idx = dg.add_node(v.to_string());
        index.insert(v, idx);
    }

    for e in graph.edges() {
        if let (Some(&s), Some(&t)) = (index.get(&e.source), index.get(&e.target)) {
            dg.add_edge(s, t, e.weight);
        }
    }

    format!("{}", Dot::with_config(&dg, &[]))
}
