//! Raw text normalization before sentence splitting.
//!
//! The three passes run in a fixed order: line endings first, then
//! bracketed citation markers, then any remaining ASCII digits. Reordering
//! the last two would leave `[]` behind wherever a marker stood.

use crate::constants::{CITATION_MARKER_PATTERN, CRLF};
use regex::Regex;
use std::sync::OnceLock;

static CITATION_MARKER: OnceLock<Regex> = OnceLock::new();

fn citation_marker() -> &'static Regex {
    CITATION_MARKER.get_or_init(|| {
        Regex::new(CITATION_MARKER_PATTERN).expect("citation marker pattern is a valid regex")
    })
}

/// Stateless text cleaner
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCleaner;

impl TextCleaner {
    /// Create a new cleaner
    pub fn new() -> Self {
        Self
    }

    /// Clean raw text; never fails, empty input yields empty output
    pub fn clean(&self, raw: &str) -> String {
        let unified = unify_line_endings(raw);
        let without_markers = remove_citation_markers(&unified);
        remove_digits(&without_markers)
    }
}

/// Clean raw text with the default cleaner
pub fn clean(raw: &str) -> String {
    TextCleaner.clean(raw)
}

fn unify_line_endings(input: &str) -> String {
    input.replace(CRLF, " ")
}

fn remove_citation_markers(input: &str) -> String {
    citation_marker().replace_all(input, "").into_owned()
}

// Only ASCII digits, whether or not they were inside brackets.
fn remove_digits(input: &str) -> String {
    input.chars().filter(|c| !c.is_ascii_digit()).collect()
}
