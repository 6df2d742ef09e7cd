//! Command implementations for the poet CLI
//!
//! Each command module provides a `run` function that executes the command
//! logic against an already-loaded [`poet_core::GraphPoet`].

pub mod bridge;
pub mod graph;
pub mod poem;
