//! Poem command - insert bridge words into input lines
//!
//! Input comes from the command-line arguments (joined with single spaces)
//! or, when none are given, from stdin one line at a time.

use crate::output::{Output, OutputConfig, TableDisplay};
use anyhow::{Context, Result};
use poet_core::{Graph, GraphPoet, PoemReport};
use serde::Serialize;
use std::io::BufRead;

/// Poems generated in one run, in input order.
#[derive(Debug, Serialize)]
pub struct PoemOutput {
    pub poems: Vec<PoemReport>,
}

impl TableDisplay for PoemOutput {
    fn to_table(&self) -> String {
        self.poems
            .iter()
            .map(|report| report.poem.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Generate poems for each input line.
pub fn generate<G, I, S>(poet: &GraphPoet<G>, lines: I) -> PoemOutput
where
    G: Graph<String>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let poems = lines
        .into_iter()
        .map(|line| poet.poem_with_bridges(line.as_ref()))
        .collect();
    PoemOutput { poems }
}

/// Run the poem command.
pub fn run<G: Graph<String>>(
    poet: &GraphPoet<G>,
    input: &[String],
    config: &OutputConfig,
) -> Result<()> {
    let output = if input.is_empty() {
        let lines = std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("Failed to read input from stdin")?;
        tracing::debug!(lines = lines.len(), "Read poem input from stdin");
        generate(poet, lines)
    } else {
        generate(poet, [input.join(" ")])
    };

    Output::new(output, config).render()
}
