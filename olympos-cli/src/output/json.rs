//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use olympos_core::PipelineOutput;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - the document with statistics, or an array of fragments
///
/// Fragments are collected and written as one array by `finish`.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    wrote_document: bool,
    fragments: Vec<FragmentData>,
}

/// Data structure for fragment output
#[derive(Debug, Serialize, Deserialize)]
pub struct FragmentData {
    /// Position of the fragment within its stage
    pub index: usize,
    /// The fragment text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            wrote_document: false,
            fragments: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_fragment(&mut self, index: usize, fragment: &str) -> Result<()> {
        self.fragments.push(FragmentData {
            index,
            text: fragment.to_string(),
        });
        Ok(())
    }

    fn format_document(&mut self, output: &PipelineOutput) -> Result<()> {
        self.write_value(output)?;
        self.wrote_document = true;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.wrote_document {
            let fragments = std::mem::take(&mut self.fragments);
            self.write_value(&fragments)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
