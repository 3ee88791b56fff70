//! Stage composition: clean → split → filter → modernize → join

use crate::domain::{Modernizer, SentenceJoiner, SentenceSplitter, TextCleaner, TopicFilter};
use crate::error::Result;
use crate::types::{OutputDocument, RawDocument};
use serde::Serialize;
use std::time::Instant;

/// Intermediate results of a run, before the final join
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineTrace {
    /// Text after cleaning
    pub cleaned: String,
    /// Every fragment produced by the splitter, empties included
    pub sentences: Vec<String>,
    /// Fragments that mention the topic keyword, untouched
    pub matched: Vec<String>,
    /// Matched fragments after contraction rewriting and trimming
    pub modernized: Vec<String>,
}

impl PipelineTrace {
    /// Join the modernized fragments into the output document
    pub fn merge(&self) -> Result<OutputDocument> {
        SentenceJoiner::new()
            .join(&self.modernized)
            .map(OutputDocument::new)
    }
}

/// Size and timing figures for a completed run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingStats {
    /// Raw document size in bytes
    pub input_bytes: usize,
    /// Cleaned text size in bytes
    pub cleaned_bytes: usize,
    /// Fragments produced by the splitter
    pub sentence_count: usize,
    /// Fragments kept by the topic filter
    pub matched_count: usize,
    /// Output document size in bytes
    pub output_bytes: usize,
    /// Wall-clock time of the run in milliseconds
    pub processing_time_ms: u64,
}

/// Result of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    /// Merged text
    #[serde(rename = "text")]
    pub document: OutputDocument,
    /// Run statistics
    pub stats: ProcessingStats,
    /// Stage results the document was built from
    #[serde(skip)]
    pub trace: PipelineTrace,
}

/// The topic sentence pipeline.
///
/// Holds only stateless stages, so one instance can be reused across runs
/// and shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    cleaner: TextCleaner,
    splitter: SentenceSplitter,
    topic: TopicFilter,
    modernizer: Modernizer,
}

impl Pipeline {
    /// Create a pipeline filtering on the fixed topic keyword
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyword the topic filter matches
    pub fn keyword(&self) -> &str {
        self.topic.keyword()
    }

    /// Run every stage except the join
    pub fn trace(&self, document: &RawDocument) -> PipelineTrace {
        let cleaned = self.cleaner.clean(document.as_str());
        log::debug!(
            "cleaned {} bytes down to {} bytes",
            document.len(),
            cleaned.len()
        );

        let sentences = self.splitter.split(&cleaned);
        log::debug!("split into {} fragments", sentences.len());

        let matched = self.topic.filter(&sentences);
        log::debug!(
            "{} fragments mention '{}'",
            matched.len(),
            self.topic.keyword()
        );

        let modernized = self.modernizer.modernize(&matched);
        let sentences = to_owned_fragments(&sentences);
        let matched = to_owned_fragments(&matched);

        PipelineTrace {
            cleaned,
            sentences,
            matched,
            modernized,
        }
    }

    /// Run the whole pipeline.
    ///
    /// Fails with [`crate::CoreError::EmptyInput`] when no fragment matches
    /// the topic keyword.
    pub fn run(&self, document: &RawDocument) -> Result<PipelineOutput> {
        let start = Instant::now();

        let trace = self.trace(document);
        let merged = trace.merge()?;

        let stats = ProcessingStats {
            input_bytes: document.len(),
            cleaned_bytes: trace.cleaned.len(),
            sentence_count: trace.sentences.len(),
            matched_count: trace.matched.len(),
            output_bytes: merged.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };
        log::info!(
            "kept {} of {} sentences ({} bytes)",
            stats.matched_count,
            stats.sentence_count,
            stats.output_bytes
        );

        Ok(PipelineOutput {
            document: merged,
            stats,
            trace,
        })
    }

    /// Run the pipeline on plain text (convenience method)
    pub fn process_text(&self, text: &str) -> Result<OutputDocument> {
        self.run(&RawDocument::from(text)).map(|output| output.document)
    }
}

fn to_owned_fragments(fragments: &[&str]) -> Vec<String> {
    fragments.iter().map(|fragment| fragment.to_string()).collect()
}
