//! Corpus loading: turning text into a word-adjacency graph.
//!
//! Words are maximal runs of characters between single ASCII spaces. Only
//! the space character separates words; tabs and other whitespace stay part
//! of the word, and two consecutive spaces produce an empty word between
//! them. Trailing empty words are dropped from a line that contains a space;
//! a line without any space is a single word, so a blank line contributes
//! one empty word.
//!
//! Input is decoded as UTF-8 line by line; invalid sequences become
//! U+FFFD rather than failing the whole corpus.
//!
//! Every consecutive pair of lower-cased words `(w1, w2)` across the whole
//! corpus (line breaks do not interrupt the sequence) increments the edge
//! `w1 -> w2` by one.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::error::CorpusError;
use crate::graph::Graph;

/// Split a line into words on the single ASCII space.
///
/// ```
/// use poet_core::corpus::tokenize;
///
/// assert_eq!(tokenize("a  b\tc "), vec!["a", "", "b\tc"]);
/// assert_eq!(tokenize(""), vec![""]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(line: &str) -> Vec<&str> {
    if !line.contains(' ') {
        return vec![line];
    }
    let mut words: Vec<&str> = line.split(' ').collect();
    while words.last().is_some_and(|w| w.is_empty()) {
        words.pop();
    }
    words
}

/// Build an adjacency graph from an iterator of corpus lines.
///
/// A corpus with fewer than two words yields an empty graph.
pub fn build_graph<G, I, S>(lines: I) -> Result<G, CorpusError>
where
    G: Graph<String> + Default,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut graph = G::default();
    let mut previous: Option<String> = None;
    let mut words = 0usize;
    let mut pairs = 0usize;

    for line in lines {
        for word in tokenize(line.as_ref()) {
            let word = word.to_lowercase();
            words += 1;
            if let Some(prev) = previous.take() {
                increment(&mut graph, prev, word.clone())?;
                pairs += 1;
            }
            previous = Some(word);
        }
    }

    debug!(
        words,
        pairs,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Built corpus graph"
    );
    Ok(graph)
}

/// Build an adjacency graph from any buffered reader.
pub fn read_graph<G, R>(reader: R) -> Result<G, CorpusError>
where
    G: Graph<String> + Default,
    R: BufRead,
{
    build_graph(read_lines(reader)?)
}

/// Build an adjacency graph from a corpus file.
///
/// # Errors
///
/// [`CorpusError::Io`] if the file cannot be opened or read.
pub fn load_graph<G>(path: impl AsRef<Path>) -> Result<G, CorpusError>
where
    G: Graph<String> + Default,
{
    let path = path.as_ref();
    let io_err = |source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    };

    debug!("Loading corpus from {}", path.display());
    let file = File::open(path).map_err(io_err)?;
    let lines = read_lines(BufReader::new(file)).map_err(io_err)?;
    build_graph(lines)
}

/// Read LF or CRLF terminated lines, replacing invalid UTF-8.
fn read_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(lines);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
}

/// Add one occurrence of `source -> target`.
fn increment<G: Graph<String>>(
    graph: &mut G,
    source: String,
    target: String,
) -> Result<(), CorpusError> {
    let current = graph.weight(&source, &target).unwrap_or(0);
    graph.set_edge(source, target, current.saturating_add(1))?;
    Ok(())
}
