//! Document types flowing into and out of the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sequence of sentence fragments
pub type FragmentSequence<'a> = Vec<&'a str>;

/// Source text as fetched, before any cleaning
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawDocument(String);

impl RawDocument {
    /// Wrap fetched text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the document holds no text
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for RawDocument {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for RawDocument {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for RawDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Final merged text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputDocument(String);

impl OutputDocument {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    /// Borrow the text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the merged text is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for OutputDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutputDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_document_conversions() {
        let from_str = RawDocument::from("Olympus.");
        let from_string = RawDocument::from("Olympus.".to_string());
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.as_str(), "Olympus.");
        assert_eq!(from_str.len(), 8);
        assert!(!from_str.is_empty());
        assert!(RawDocument::default().is_empty());
    }

    #[test]
    fn test_output_document_display_and_serialize() {
        let doc = OutputDocument::new("Zeus. Hera".to_string());
        assert_eq!(doc.to_string(), "Zeus. Hera");
        assert_eq!(serde_json::to_string(&doc).unwrap(), "\"Zeus. Hera\"");
        assert_eq!(doc.into_string(), "Zeus. Hera");
    }
}
