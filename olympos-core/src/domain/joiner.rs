//! Folding fragments back into one text.
//!
//! A left fold seeded with the first fragment. Each following fragment is
//! appended directly when the accumulator already ends with the delimiter,
//! and after `". "` otherwise. Nothing is appended after the last fragment,
//! so a merged text of `n` fragments carries at most `n - 1` inserted
//! delimiters.

use crate::constants::{JOIN_SEPARATOR, SENTENCE_DELIMITER};
use crate::error::{CoreError, Result};

/// Stateless fragment joiner
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceJoiner;

impl SentenceJoiner {
    /// Create a new joiner
    pub fn new() -> Self {
        Self
    }

    /// Join `fragments`, failing with [`CoreError::EmptyInput`] when there are none
    pub fn join<S: AsRef<str>>(&self, fragments: &[S]) -> Result<String> {
        let (first, rest) = fragments.split_first().ok_or(CoreError::EmptyInput)?;

        let merged = rest
            .iter()
            .fold(first.as_ref().to_string(), |mut acc, next| {
                // An empty accumulator has no last character and takes the separator.
                if !acc.ends_with(SENTENCE_DELIMITER) {
                    acc.push_str(JOIN_SEPARATOR);
                }
                acc.push_str(next.as_ref());
                acc
            });

        Ok(merged)
    }
}

/// Join with the default joiner
pub fn join<S: AsRef<str>>(fragments: &[S]) -> Result<String> {
    SentenceJoiner.join(fragments)
}
