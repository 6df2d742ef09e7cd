//! JSON output formatting for machine-readable output.

use super::OutputConfig;
use serde::Serialize;

/// JSON output formatter
pub struct JsonOutput;

impl JsonOutput {
    /// Serialize a command result.
    ///
    /// Pretty-printed unless `--compact` was given.
    pub fn format<T: Serialize + ?Sized>(
        data: &T,
        config: &OutputConfig,
    ) -> serde_json::Result<String> {
        if config.compact {
            serde_json::to_string(data)
        } else {
            serde_json::to_string_pretty(data)
        }
    }
}
