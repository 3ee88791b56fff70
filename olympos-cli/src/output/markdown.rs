//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use olympos_core::PipelineOutput;
use std::io::Write;

/// Markdown formatter - numbered sentences and the merged paragraph
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    fragment_count: usize,
    wrote_document: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            fragment_count: 0,
            wrote_document: false,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_fragment(&mut self, _index: usize, fragment: &str) -> Result<()> {
        self.fragment_count += 1;
        writeln!(self.writer, "{}. {}", self.fragment_count, fragment.trim())?;
        Ok(())
    }

    fn format_document(&mut self, output: &PipelineOutput) -> Result<()> {
        writeln!(self.writer, "## Sentences")?;
        writeln!(self.writer)?;
        for (index, sentence) in output.trace.modernized.iter().enumerate() {
            writeln!(self.writer, "{}. {}", index + 1, sentence)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "## Merged text")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", output.document)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total sentences: {} of {}*",
            output.stats.matched_count, output.stats.sentence_count
        )?;
        self.wrote_document = true;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.wrote_document {
            writeln!(self.writer)?;
            writeln!(self.writer, "---")?;
            writeln!(self.writer, "*Total fragments: {}*", self.fragment_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_output;

    #[test]
    fn test_document_layout() {
        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer);
        formatter.format_document(&sample_output()).unwrap();
        formatter.finish().unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert!(written.contains("1. Olympus trembled\n"));
        assert!(written.contains("2. The Olympian gods met\n"));
        assert!(written.contains("## Merged text\n\nOlympus trembled. The Olympian gods met\n"));
        assert!(written.ends_with("*Total sentences: 2 of 4*\n"));
        assert!(!written.contains("Total fragments"));
    }

    #[test]
    fn test_fragment_list() {
        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer);
        formatter.format_fragment(0, " Olympus ").unwrap();
        formatter.format_fragment(1, "Troy").unwrap();
        formatter.finish().unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert!(written.starts_with("1. Olympus\n2. Troy\n"));
        assert!(written.ends_with("---\n*Total fragments: 2*\n"));
    }
}
