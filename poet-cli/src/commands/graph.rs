//! Graph command - dump the corpus graph
//!
//! Table output lists every edge; JSON output is a [`GraphSnapshot`];
//! `--dot` prints Graphviz regardless of the output format.

use crate::output::{edge_table, Output, OutputConfig, TableDisplay};
use anyhow::Result;
use colored::Colorize;
use poet_core::{to_dot, Graph, GraphPoet, GraphSnapshot};

impl TableDisplay for GraphSnapshot<String> {
    fn to_table(&self) -> String {
        if self.vertices.is_empty() {
            return "The graph is empty".to_string();
        }
        format!(
            "{} {}  {} {}\n{}",
            "Vertices:".cyan(),
            self.vertices.len(),
            "Edges:".cyan(),
            self.edges.len(),
            edge_table(&self.edges)
        )
    }
}

/// Run the graph command.
pub fn run<G: Graph<String>>(poet: &GraphPoet<G>, dot: bool, config: &OutputConfig) -> Result<()> {
    if dot {
        print!("{}", to_dot(poet.graph()));
        return Ok(());
    }
    Output::new(GraphSnapshot::of(poet.graph()), config).render()
}
