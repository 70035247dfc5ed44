mod formatters;

pub use formatters::{
    CsvFormatter, INCOMPLETE_MESSAGE, JsonFormatter, MATCH_MESSAGE, MISMATCH_MESSAGE, TextFormatter,
};

use crate::history::HistoryEntry;
use crate::record::DigestRecord;
use anyhow::{Context, Result};
use hashify_core::{BatchEntry, Comparison};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn from_string(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_string(&value)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format a single digest
    fn format_digest(&self, record: &DigestRecord) -> Result<String>;

    /// Format the results of a batch run
    fn format_batch(&self, entries: &[BatchEntry]) -> Result<String>;

    /// Format a comparison of two inputs
    fn format_comparison(&self, comparison: &Comparison) -> Result<String>;

    /// Format recorded history, newest first
    fn format_history(&self, entries: &[HistoryEntry]) -> Result<String>;
}

/// Create a formatter based on output format
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}

/// Write formatted output to `path`, or to stdout when no path is given
///
/// Returns whether a file was written so callers can report it.
pub fn emit(content: &str, path: Option<&Path>) -> Result<bool> {
    match path {
        Some(path) => {
            let mut data = content.to_string();
            if !data.ends_with('\n') {
                data.push('\n');
            }
            std::fs::write(path, data)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::debug!("Wrote {} bytes to {}", content.len(), path.display());
            Ok(true)
        }
        None => {
            println!("{}", content.trim_end_matches('\n'));
            Ok(false)
        }
    }
}
