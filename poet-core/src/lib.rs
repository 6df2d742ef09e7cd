//! Graph Poet core - weighted word graphs and bridge-word poetry.
//!
//! This crate provides the core functionality behind the `poet` CLI:
//! a mutable weighted directed graph with two interchangeable
//! representations, a corpus loader that turns text into a word-adjacency
//! graph, and a poem generator that inserts "bridge" words between the
//! words of an input line.
//!
//! # Features
//!
//! - **One contract, two representations**: [`EdgesGraph`] (edge list) and
//!   [`VerticesGraph`] (adjacency maps) both implement [`Graph`]
//! - **Corpus loading**: single-space tokenization, case-folded adjacency counts
//! - **Bridge words**: maximum-weight two-edge paths with deterministic tie-breaks
//! - **Diagnostics**: plain-text dumps, JSON snapshots, Graphviz DOT
//!
//! # Usage
//!
//! ```
//! use poet_core::{GraphPoet, VerticesGraph};
//!
//! let poet: GraphPoet<VerticesGraph<String>> =
//!     GraphPoet::from_corpus_lines(["To explore strange new worlds", "To seek out new life"])?;
//!
//! assert_eq!(poet.poem("Seek to explore new and exciting"), "Seek to explore strange new and exciting");
//! # Ok::<(), poet_core::CorpusError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
mod error;
pub mod graph;
pub mod poet;
pub mod render;

pub use error::{CorpusError, GraphError, Result};
pub use graph::{Edge, EdgesGraph, Graph, Label, VerticesGraph, Weight};
pub use poet::{Bridge, BridgeInsertion, CasePolicy, GraphPoet, PoemReport};
pub use render::{to_dot, GraphSnapshot};

/// Get the version of poet-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
