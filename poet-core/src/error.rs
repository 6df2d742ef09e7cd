//! Error types for poet-core.

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::Weight;

/// Result type alias for graph mutations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors returned by graph mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A negative weight was passed to `set_edge`.
    #[error("Invalid edge weight {weight}: weights must be zero or positive")]
    NegativeWeight {
        /// The rejected weight.
        weight: Weight,
    },
}

/// Errors that can occur while building a graph from a corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The corpus file could not be opened or read.
    #[error("Failed to read corpus {}: {source}", path.display())]
    Io {
        /// Path of the corpus that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from an in-memory or streamed source failed.
    #[error("Failed to read corpus stream: {0}")]
    Stream(#[from] std::io::Error),

    /// A graph mutation failed while counting adjacencies.
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}
