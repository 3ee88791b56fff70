//! Core error types

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised by the pipeline and by input reading
#[derive(Error, Debug)]
pub enum CoreError {
    /// The joiner received no fragments, typically because no sentence
    /// matched the topic keyword
    #[error("cannot join an empty fragment sequence")]
    EmptyInput,

    /// I/O error while reading an input source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),
}

impl CoreError {
    /// True when the error only signals that nothing matched the topic
    pub fn is_empty_input(&self) -> bool {
        matches!(self, CoreError::EmptyInput)
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
