//! Output formatting module

use anyhow::Result;
use olympos_core::PipelineOutput;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output one fragment of an intermediate stage
    fn format_fragment(&mut self, index: usize, fragment: &str) -> Result<()>;

    /// Format and output the merged document of a complete run
    fn format_document(&mut self, output: &PipelineOutput) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text: the merged document, or one fragment per line
    Text,
    /// JSON with the document and processing statistics
    Json,
    /// Markdown numbered list with the merged paragraph
    Markdown,
}

impl OutputFormat {
    /// Lowercase name as used in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
