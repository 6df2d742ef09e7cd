//! Graph-based poetry generator.
//!
//! A [`GraphPoet`] owns a word-adjacency graph built from a corpus (see
//! [`crate::corpus`]). Given an input line it inserts a *bridge word*
//! between every adjacent pair of input words `w1 w2`: the word `b` such that
//! `w1 -> b -> w2` is the two-edge path with the largest combined weight.
//! Pairs without any such path are left untouched.
//!
//! # Example
//!
//! ```
//! use poet_core::{CasePolicy, GraphPoet, VerticesGraph};
//!
//! let poet: GraphPoet<VerticesGraph<String>> = GraphPoet::from_corpus_lines([
//!     "This is a test of the Mugar Omni Theater sound system.",
//! ])?;
//!
//! assert_eq!(poet.poem("Test the system."), "Test of the system.");
//!
//! let poet = poet.with_case_policy(CasePolicy::Lowercase);
//! assert_eq!(poet.poem("Test the system."), "test of the system.");
//! # Ok::<(), poet_core::CorpusError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;
use tracing::trace;

use crate::corpus::{self, tokenize};
use crate::error::CorpusError;
use crate::graph::{Graph, Weight};

/// How the words of the input line are cased in the generated poem.
///
/// Bridge words always come out lower case, since graph vertices are
/// lower-cased corpus words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    /// Input words keep their original case.
    #[default]
    Preserve,
    /// The whole poem is lower-cased.
    Lowercase,
}

impl FromStr for CasePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "preserve" => Ok(CasePolicy::Preserve),
            "lowercase" | "lower" => Ok(CasePolicy::Lowercase),
            _ => Err(format!("Unknown case policy: '{}'", s)),
        }
    }
}

/// A bridge word together with the weight of the path through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bridge {
    /// The bridge word (lower case).
    pub word: String,
    /// `weight(from -> word) + weight(word -> to)`
    pub score: Weight,
}

/// One bridge inserted while generating a poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeInsertion {
    /// Input word before the bridge, as it appears in the poem.
    pub after: String,
    /// Input word after the bridge, as it appears in the poem.
    pub before: String,
    /// The inserted word.
    pub word: String,
    /// Combined weight of the two-edge path.
    pub score: Weight,
}

/// A generated poem plus the bridges that went into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoemReport {
    /// The input line.
    pub input: String,
    /// The generated poem.
    pub poem: String,
    /// Bridges in the order they were inserted.
    pub bridges: Vec<BridgeInsertion>,
}

/// Poetry generator over a word-adjacency graph.
#[derive(Debug, Clone)]
pub struct GraphPoet<G> {
    graph: G,
    case_policy: CasePolicy,
}

impl<G: Graph<String>> GraphPoet<G> {
    /// Create a poet over an already-built affinity graph.
    ///
    /// Vertices are expected to be lower-cased words and edge weights
    /// adjacency counts, as produced by [`corpus::build_graph`].
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            case_policy: CasePolicy::default(),
        }
    }

    /// Change how input words are cased in the output.
    pub fn with_case_policy(mut self, case_policy: CasePolicy) -> Self {
        self.case_policy = case_policy;
        self
    }

    /// The underlying graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// The words known to this poet.
    pub fn vertices(&self) -> BTreeSet<String> {
        self.graph.vertices()
    }

    /// Current case policy.
    pub fn case_policy(&self) -> CasePolicy {
        self.case_policy
    }

    /// Find the best bridge between two lower-cased words.
    ///
    /// Returns `None` when either word is unknown or no two-edge path
    /// `from -> b -> to` exists. Among paths of equal maximum weight the
    /// lexicographically smallest bridge word wins.
    pub fn find_bridge(&self, from: &str, to: &str) -> Option<Bridge> {
        let from = from.to_string();
        let to = to.to_string();
        if !self.graph.contains_vertex(&from) || !self.graph.contains_vertex(&to) {
            return None;
        }

        let incoming = self.graph.sources(&to);
        let mut best: Option<Bridge> = None;

        // `targets` is ordered, so the first candidate reaching the maximum is
        // also the smallest word with that score.
        for (word, first) in self.graph.targets(&from) {
            let Some(second) = incoming.get(&word) else {
                continue;
            };
            let score = first.saturating_add(*second);
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(Bridge { word, score });
            }
        }

        trace!(from = %from, to = %to, bridge = ?best, "Bridge lookup");
        best
    }

    /// Convenience form of [`find_bridge`](Self::find_bridge) returning only the word.
    pub fn bridge_word(&self, from: &str, to: &str) -> Option<String> {
        self.find_bridge(from, to).map(|b| b.word)
    }

    /// Generate a poem from `input`.
    ///
    /// Words are split on single spaces exactly like corpus lines. An input
    /// with no words produces an empty poem.
    pub fn poem(&self, input: &str) -> String {
        self.poem_with_bridges(input).poem
    }

    /// Generate a poem and report which bridges were inserted.
    pub fn poem_with_bridges(&self, input: &str) -> PoemReport {
        let words: Vec<String> = tokenize(input)
            .into_iter()
            .map(|w| match self.case_policy {
                CasePolicy::Preserve => w.to_string(),
                CasePolicy::Lowercase => w.to_lowercase(),
            })
            .collect();

        let mut poem = String::with_capacity(input.len() * 2);
        let mut bridges = Vec::new();

        if let Some(first) = words.first() {
            poem.push_str(first);
        }

        for pair in words.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            if let Some(bridge) = self.find_bridge(&current.to_lowercase(), &next.to_lowercase()) {
                poem.push(' ');
                poem.push_str(&bridge.word);
                bridges.push(BridgeInsertion {
                    after: current.clone(),
                    before: next.clone(),
                    word: bridge.word,
                    score: bridge.score,
                });
            }
            poem.push(' ');
            poem.push_str(next);
        }

        PoemReport {
            input: input.to_string(),
            poem,
            bridges,
        }
    }
}

impl<G: Graph<String> + Default> GraphPoet<G> {
    /// Create a poet from corpus lines.
    pub fn from_corpus_lines<I, S>(lines: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(corpus::build_graph(lines)?))
    }

    /// Create a poet from a corpus file.
    ///
    /// # Errors
    ///
    /// [`CorpusError::Io`] if the corpus cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        Ok(Self::new(corpus::load_graph(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgesGraph, VerticesGraph};

    const MUGAR: &str = "This is a test of the Mugar Omni Theater sound system.";

    fn mugar() -> GraphPoet<VerticesGraph<String>> {
        GraphPoet::from_corpus_lines([MUGAR]).unwrap()
    }

    fn poet_from_edges(edges: &[(&str, &str, Weight)]) -> GraphPoet<EdgesGraph<String>> {
        let mut graph = EdgesGraph::new();
        for &(s, t, w) in edges {
            graph.set_edge(s.to_string(), t.to_string(), w).unwrap();
        }
        GraphPoet::new(graph)
    }

    #[test]
    fn test_mugar_vertices() {
        let expected: BTreeSet<String> = MUGAR
            .to_lowercase()
            .split(' ')
            .map(String::from)
            .collect();
        assert_eq!(mugar().vertices(), expected);
    }

    #[test]
    fn test_poem_preserves_input_case() {
        let poet = mugar();
        assert_eq!(poet.poem("Test the system."), "Test of the system.");
        assert_eq!(poet.poem("Mugar Theater"), "Mugar omni Theater");
        assert_eq!(poet.poem("theater system."), "theater sound system.");
    }

    #[test]
    fn test_poem_lowercase_policy() {
        let poet = mugar().with_case_policy(CasePolicy::Lowercase);
        assert_eq!(poet.poem("Test the system."), "test of the system.");
        assert_eq!(poet.poem("Mugar Theater"), "mugar omni theater");
        assert_eq!(poet.poem("theater system."), "theater sound system.");
    }

    #[test]
    fn test_poem_without_bridges() {
        let poet = mugar();
        assert_eq!(poet.poem("sound theater"), "sound theater");
        assert_eq!(poet.poem("unknown words here"), "unknown words here");
        assert_eq!(poet.poem("Test"), "Test");
    }

    #[test]
    fn test_empty_input_gives_empty_poem() {
        let poet = mugar();
        assert_eq!(poet.poem(""), "");
        assert_eq!(poet.poem("   "), "");
        assert!(poet.poem_with_bridges("").bridges.is_empty());
    }

    #[test]
    fn test_poem_keeps_empty_words_between_double_spaces() {
        let poet = mugar();
        assert_eq!(poet.poem("test  the"), "test  the");
    }

    #[test]
    fn test_find_bridge_picks_heaviest_path() {
        let poet = poet_from_edges(&[
            ("a", "light", 1),
            ("light", "z", 1),
            ("a", "heavy", 3),
            ("heavy", "z", 2),
        ]);
        assert_eq!(
            poet.find_bridge("a", "z"),
            Some(Bridge {
                word: "heavy".to_string(),
                score: 5
            })
        );
    }

    #[test]
    fn test_find_bridge_tie_breaks_lexicographically() {
        let poet = poet_from_edges(&[
            ("a", "pear", 2),
            ("pear", "z", 2),
            ("a", "fig", 1),
            ("fig", "z", 3),
            ("a", "plum", 3),
            ("plum", "z", 1),
        ]);
        assert_eq!(poet.bridge_word("a", "z"), Some("fig".to_string()));
    }

    #[test]
    fn test_find_bridge_absent_words() {
        let poet = poet_from_edges(&[("a", "b", 1), ("b", "c", 1)]);
        assert_eq!(poet.find_bridge("missing", "c"), None);
        assert_eq!(poet.find_bridge("a", "missing"), None);
        assert_eq!(poet.find_bridge("c", "a"), None);
        assert_eq!(poet.bridge_word("a", "c"), Some("b".to_string()));
    }

    #[test]
    fn test_find_bridge_through_self_loop() {
        let poet = poet_from_edges(&[("a", "a", 4), ("a", "b", 1)]);
        assert_eq!(
            poet.find_bridge("a", "b"),
            Some(Bridge {
                word: "a".to_string(),
                score: 5
            })
        );
    }

    #[test]
    fn test_duplicate_pairs_corpus() {
        let poet: GraphPoet<VerticesGraph<String>> = GraphPoet::from_corpus_lines([
            "good news is good news",
            "no good news no old news",
            "have old news",
        ])
        .unwrap()
        .with_case_policy(CasePolicy::Lowercase);

        assert_eq!(poet.poem("Good no"), "good news no");
        assert_eq!(poet.poem("a nEws"), "a news");
        assert_eq!(poet.poem("haVe news"), "have old news");
    }

    #[test]
    fn test_poem_report_lists_bridges() {
        let report = mugar().poem_with_bridges("Test the system.");
        assert_eq!(report.poem, "Test of the system.");
        assert_eq!(
            report.bridges,
            vec![BridgeInsertion {
                after: "Test".to_string(),
                before: "the".to_string(),
                word: "of".to_string(),
                score: 2,
            }]
        );
    }

    #[test]
    fn test_case_policy_from_str() {
        assert_eq!("preserve".parse::<CasePolicy>(), Ok(CasePolicy::Preserve));
        assert_eq!("Lowercase".parse::<CasePolicy>(), Ok(CasePolicy::Lowercase));
        assert!("shouty".parse::<CasePolicy>().is_err());
    }
}
