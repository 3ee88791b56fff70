//! Sentence splitting on the fixed delimiter

use crate::constants::SENTENCE_DELIMITER;
use crate::types::FragmentSequence;

/// Splits cleaned text into fragments on every delimiter.
///
/// The delimiter is consumed. Empty fragments produced by consecutive,
/// leading, or trailing delimiters are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Create a new splitter
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into borrowed fragments, in document order
    pub fn split<'a>(&self, text: &'a str) -> FragmentSequence<'a> {
        text.split(SENTENCE_DELIMITER).collect()
    }
}

/// Split with the default splitter
pub fn split(text: &str) -> FragmentSequence<'_> {
    SentenceSplitter.split(text)
}
