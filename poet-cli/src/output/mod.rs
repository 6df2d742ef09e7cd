//! Output formatting module for the poet CLI
//!
//! Every command result can be rendered as a human-readable table or as
//! JSON. Colors are turned off automatically when stdout is not a TTY.

use anyhow::Context;
use clap::ValueEnum;
use serde::Serialize;
use std::io::IsTerminal;
use std::str::FromStr;

mod json;
mod table;

pub use self::json::JsonOutput;
pub use self::table::edge_table;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format (default)
    #[default]
    Table,
    /// JSON format for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// The output format to use
    pub format: OutputFormat,
    /// Disable colored output
    pub no_color: bool,
    /// Single-line JSON (`--compact`)
    pub compact: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            no_color: false,
            compact: false,
        }
    }

    /// Create an OutputConfig with automatic TTY detection and optional color override.
    ///
    /// # Arguments
    ///
    /// * `format` - The output format to use
    /// * `color_override` - If `Some(true)`, force colors on. If `Some(false)`, force colors off.
    ///   If `None`, colors follow whether stdout is a TTY.
    pub fn auto_detect_with_color_override(
        format: OutputFormat,
        color_override: Option<bool>,
    ) -> Self {
        let use_color = color_override.unwrap_or_else(|| std::io::stdout().is_terminal());
        Self {
            no_color: !use_color,
            ..Self::new(format)
        }
    }

    /// Builder: single-line JSON output
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Check if colors should be used
    pub fn use_colors(&self) -> bool {
        !self.no_color
    }
}

/// Types that can be displayed as a table.
///
/// JSON rendering comes for free through `Serialize`.
pub trait TableDisplay: Serialize {
    /// Convert to table format string
    fn to_table(&self) -> String;
}

/// Result wrapper that renders in the configured format
pub struct Output<'a, T> {
    data: T,
    config: &'a OutputConfig,
}

impl<'a, T: TableDisplay> Output<'a, T> {
    /// Wrap data for rendering with the given config
    pub fn new(data: T, config: &'a OutputConfig) -> Self {
        Self { data, config }
    }

    /// Get the rendered string without printing
    pub fn render_to_string(&self) -> anyhow::Result<String> {
        match self.config.format {
            OutputFormat::Table => Ok(self.data.to_table()),
            OutputFormat::Json => JsonOutput::format(&self.data, self.config)
                .context("Failed to serialize output as JSON"),
        }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        println!("{}", self.render_to_string()?);
        Ok(())
    }
}
