//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use olympos_core::PipelineOutput;
use std::io::Write;

/// Plain text formatter - the merged document, or one fragment per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_fragment(&mut self, _index: usize, fragment: &str) -> Result<()> {
        writeln!(self.writer, "{fragment}")?;
        Ok(())
    }

    fn format_document(&mut self, output: &PipelineOutput) -> Result<()> {
        writeln!(self.writer, "{}", output.document)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
