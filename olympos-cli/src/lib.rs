//! Olympos CLI library
//!
//! This library provides the command-line interface for the Olympos topic
//! sentence extractor: source fetching, configuration, and output
//! formatting around the `olympos-core` pipeline.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;
pub mod source;

pub use error::CliError;
