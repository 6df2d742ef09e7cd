//! Bridge command - look up the bridge word between two words

use crate::output::{Output, OutputConfig, TableDisplay};
use anyhow::Result;
use colored::Colorize;
use poet_core::{Bridge, Graph, GraphPoet};
use serde::Serialize;

/// Result of a single bridge lookup.
#[derive(Debug, Serialize)]
pub struct BridgeResult {
    pub from: String,
    pub to: String,
    pub bridge: Option<Bridge>,
}

impl TableDisplay for BridgeResult {
    fn to_table(&self) -> String {
        match &self.bridge {
            Some(bridge) => format!(
                "{} -> {} -> {} {}",
                self.from,
                bridge.word.green().bold(),
                self.to,
                format!("(score {})", bridge.score).dimmed()
            ),
            None => format!(
                "{} between '{}' and '{}'",
                "No bridge".yellow(),
                self.from,
                self.to
            ),
        }
    }
}

/// Look up the bridge between two words, case-insensitively.
pub fn lookup<G: Graph<String>>(poet: &GraphPoet<G>, from: &str, to: &str) -> BridgeResult {
    let from = from.to_lowercase();
    let to = to.to_lowercase();
    let bridge = poet.find_bridge(&from, &to);
    BridgeResult { from, to, bridge }
}

/// Run the bridge command.
///
/// A missing bridge is a normal outcome and exits successfully.
pub fn run<G: Graph<String>>(
    poet: &GraphPoet<G>,
    from: &str,
    to: &str,
    config: &OutputConfig,
) -> Result<()> {
    Output::new(lookup(poet, from, to), config).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use poet_core::EdgesGraph;

    #[test]
    fn test_lookup_is_case_insensitive() {
        colored::control::set_override(false);
        let poet: GraphPoet<EdgesGraph<String>> =
            GraphPoet::from_corpus_lines(["This is a test of the Mugar Omni Theater sound system."])
                .unwrap();

        let result = lookup(&poet, "MUGAR", "Theater");
        assert_eq!(result.from, "mugar");
        assert_eq!(result.bridge.as_ref().map(|b| b.word.as_str()), Some("omni"));
        assert_eq!(result.to_table(), "mugar -> omni -> theater (score 2)");

        let missing = lookup(&poet, "sound", "test");
        assert!(missing.bridge.is_none());
        assert_eq!(missing.to_table(), "No bridge between 'sound' and 'test'");
    }
}
