//! Output formatting module

use anyhow::Result;
use petrovich_core::{Case, Declension, NameRequest};
use std::io;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the declension of one name
    fn format_declension(&mut self, request: &NameRequest, declension: &Declension) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One form per line
    Text,
    /// JSON object keyed by case name
    Json,
}

/// Whether the output describes one name or a list of names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Single,
    Batch,
}

/// Formatter writing to stdout
///
/// `case` restricts the output to a single form.
pub fn stdout_formatter(
    format: OutputFormat,
    case: Option<Case>,
    layout: Layout,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(io::stdout(), case)),
        OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout(), case, layout)),
    }
}
