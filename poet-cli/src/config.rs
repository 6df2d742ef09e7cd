//! Poet configuration loading from `.poetrc.toml`.
//!
//! Configuration is optional. Every section has defaults, and a file that
//! cannot be read or parsed is reported with a warning and ignored.
//!
//! # Example Configuration
//!
//! ```toml
//! [corpus]
//! path = "corpus/mugar-omni-theater.txt"
//!
//! [graph]
//! representation = "vertices"
//!
//! [poem]
//! case = "preserve"
//!
//! [output]
//! format = "table"
//! color = true
//! ```

use clap::ValueEnum;
use poet_core::CasePolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".poetrc.toml";

/// Which graph representation backs the poet.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Representation {
    /// Flat edge list
    Edges,
    /// Per-vertex adjacency maps (default)
    #[default]
    Vertices,
}

impl FromStr for Representation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "edges" => Ok(Representation::Edges),
            "vertices" => Ok(Representation::Vertices),
            _ => Err(format!("Unknown graph representation: '{}'", s)),
        }
    }
}

/// Root configuration structure loaded from `.poetrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct PoetConfig {
    /// Where the corpus lives.
    #[serde(default)]
    pub corpus: CorpusSection,

    /// Graph representation choice.
    #[serde(default)]
    pub graph: GraphSection,

    /// Poem generation preferences.
    #[serde(default)]
    pub poem: PoemSection,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Corpus location.
#[derive(Debug, Deserialize, Default)]
pub struct CorpusSection {
    /// Path to the corpus file, relative to the config file's directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Graph settings.
#[derive(Debug, Deserialize, Default)]
pub struct GraphSection {
    /// `edges` or `vertices`.
    #[serde(default)]
    pub representation: Option<String>,
}

/// Poem settings.
#[derive(Debug, Deserialize, Default)]
pub struct PoemSection {
    /// `preserve` or `lowercase`.
    #[serde(default)]
    pub case: Option<String>,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g. `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table` or `json`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output.
    ///
    /// Defaults to `true` when stdout is a TTY.
    #[serde(default)]
    pub color: Option<bool>,
}

impl PoetConfig {
    /// Load configuration from `.poetrc.toml` in the given directory.
    ///
    /// Parse errors are logged as warnings but don't cause failures.
    /// A relative `[corpus] path` is resolved against `root`.
    ///
    /// # Arguments
    ///
    /// * `root` - Directory to search for `.poetrc.toml`
    ///
    /// # Returns
    ///
    /// Loaded configuration, or defaults if no usable config file exists.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str::<PoetConfig>(&content) {
                    Ok(mut config) => {
                        if let Some(path) = config.corpus.path.take() {
                            config.corpus.path = Some(root.join(path));
                        }
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Get the configured corpus path, if any.
    pub fn corpus_path(&self) -> Option<&Path> {
        self.corpus.path.as_deref()
    }

    /// Get the configured graph representation.
    ///
    /// Unknown values are logged and treated as unset.
    pub fn representation(&self) -> Option<Representation> {
        parse_setting(self.graph.representation.as_deref(), "graph.representation")
    }

    /// Get the configured case policy.
    ///
    /// Unknown values are logged and treated as unset.
    pub fn case_policy(&self) -> Option<CasePolicy> {
        parse_setting(self.poem.case.as_deref(), "poem.case")
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Check if colored output should be used.
    ///
    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}

fn parse_setting<T: FromStr<Err = String>>(value: Option<&str>, key: &str) -> Option<T> {
    match value?.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("Ignoring {} in {}: {}", key, CONFIG_FILE, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PoetConfig::default();
        assert!(config.corpus_path().is_none());
        assert!(config.representation().is_none());
        assert!(config.case_policy().is_none());
        assert!(config.default_format().is_none());
        assert!(config.use_color().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[corpus]
path = "corpus.txt"

[graph]
representation = "edges"

[poem]
case = "lowercase"

[output]
format = "json"
color = false
"#;
        let config: PoetConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.corpus_path(), Some(Path::new("corpus.txt")));
        assert_eq!(config.representation(), Some(Representation::Edges));
        assert_eq!(config.case_policy(), Some(CasePolicy::Lowercase));
        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
    }

    #[test]
    fn test_unknown_values_are_ignored() {
        let toml_content = r#"
[graph]
representation = "matrix"

[poem]
case = "shouty"
"#;
        let config: PoetConfig = toml::from_str(toml_content).unwrap();
        assert!(config.representation().is_none());
        assert!(config.case_policy().is_none());
    }

    #[test]
    fn test_load_resolves_corpus_relative_to_root() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[corpus]\npath = \"words.txt\"\n",
        )
        .unwrap();

        let config = PoetConfig::load(dir.path());
        assert_eq!(config.corpus_path(), Some(dir.path().join("words.txt").as_path()));
    }

    #[test]
    fn test_load_missing_or_malformed_uses_defaults() {
        let dir = TempDir::new().unwrap();
        assert!(PoetConfig::load(dir.path()).corpus_path().is_none());

        fs::write(dir.path().join(CONFIG_FILE), "[corpus\npath = ").unwrap();
        let config = PoetConfig::load(dir.path());
        assert!(config.corpus_path().is_none());
        assert!(config.default_format().is_none());
    }

    #[test]
    fn test_representation_from_str() {
        assert_eq!("Edges".parse::<Representation>(), Ok(Representation::Edges));
        assert_eq!("vertices".parse::<Representation>(), Ok(Representation::Vertices));
        assert!("matrix".parse::<Representation>().is_err());
    }
}
