//! Poet CLI - Command-line interface for Graph Poet
//!
//! Builds a word-adjacency graph from a text corpus and uses it to bridge
//! the words of an input line into a poem.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use poet_core::{CasePolicy, EdgesGraph, Graph, GraphPoet, VerticesGraph};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use config::{PoetConfig, Representation};
use output::{OutputConfig, OutputFormat};

/// Bridge-word poetry from a text corpus.
///
/// Every pair of adjacent words in the input gets the word that most often
/// links them in the corpus inserted between them.
#[derive(Parser)]
#[command(name = "poet")]
#[command(author, version)]
#[command(about = "Bridge-word poetry from a text corpus")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  poet --corpus mugar.txt poem Test the system.
  poet --corpus mugar.txt bridge mugar theater
  poet --corpus mugar.txt graph --dot | dot -Tpng > graph.png")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Corpus file to build the word graph from
    #[arg(long, global = true, env = "POET_CORPUS")]
    corpus: Option<PathBuf>,

    /// Graph representation backing the poet
    #[arg(long, global = true, value_enum)]
    representation: Option<Representation>,

    /// Lower-case the whole poem, not just the bridge words
    #[arg(long, global = true)]
    lowercase: bool,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a poem from the input words (reads stdin lines if none are given)
    Poem {
        /// Words of the input line
        input: Vec<String>,
    },

    /// Show the bridge word between two words
    Bridge {
        /// First word
        from: String,

        /// Second word
        to: String,
    },

    /// Dump the corpus graph
    Graph {
        /// Print Graphviz DOT instead of a table
        #[arg(long)]
        dot: bool,
    },
}

/// Settings resolved from flags, environment and `.poetrc.toml`.
struct Settings {
    corpus: PathBuf,
    representation: Representation,
    case_policy: CasePolicy,
    output: OutputConfig,
}

impl Settings {
    /// Resolve settings with precedence: CLI flag > environment > config file > default.
    fn resolve(cli: &Cli, config: &PoetConfig) -> Result<Self> {
        let corpus = cli
            .corpus
            .clone()
            .or_else(|| config.corpus_path().map(Path::to_path_buf))
            .context(
                "No corpus given: pass --corpus <PATH>, set POET_CORPUS, \
                 or add a [corpus] path to .poetrc.toml",
            )?;

        let representation = cli
            .representation
            .or_else(|| config.representation())
            .unwrap_or_default();

        let case_policy = if cli.lowercase {
            CasePolicy::Lowercase
        } else {
            config.case_policy().unwrap_or_default()
        };

        let format = cli.format.unwrap_or_else(|| {
            config
                .default_format()
                .and_then(|f| f.parse().ok())
                .unwrap_or(OutputFormat::Table)
        });
        let output = OutputConfig::auto_detect_with_color_override(format, config.use_color())
            .with_compact(cli.compact);

        Ok(Self {
            corpus,
            representation,
            case_policy,
            output,
        })
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Load the corpus into the chosen representation and run the command.
fn execute<G: Graph<String> + Default>(command: Commands, settings: &Settings) -> Result<()> {
    let poet = GraphPoet::<G>::from_path(&settings.corpus)
        .with_context(|| format!("Failed to load corpus {}", settings.corpus.display()))?
        .with_case_policy(settings.case_policy);

    tracing::debug!(
        corpus = %settings.corpus.display(),
        representation = ?settings.representation,
        vertices = poet.graph().vertex_count(),
        edges = poet.graph().edge_count(),
        "Corpus loaded"
    );

    match command {
        Commands::Poem { input } => commands::poem::run(&poet, &input, &settings.output),
        Commands::Bridge { from, to } => commands::bridge::run(&poet, &from, &to, &settings.output),
        Commands::Graph { dot } => commands::graph::run(&poet, dot, &settings.output),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .poetrc.toml
    let config = PoetConfig::load(Path::new("."));
    let settings = Settings::resolve(&cli, &config)?;

    colored::control::set_override(settings.output.use_colors());

    match settings.representation {
        Representation::Edges => execute::<EdgesGraph<String>>(cli.command, &settings),
        Representation::Vertices => execute::<VerticesGraph<String>>(cli.command, &settings),
    }
}
