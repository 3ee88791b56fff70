//! Topic sentence extraction for public-domain texts
//!
//! This crate implements a linear, single-pass pipeline that keeps the
//! sentences of a document which mention a fixed topic keyword, rewrites
//! archaic contractions, and merges the survivors back into one text.
//!
//! # Architecture
//!
//! - **Domain layer**: the five pure stages (clean, split, filter,
//!   modernize, join)
//! - **Application layer**: [`Pipeline`], composing the stages and
//!   reporting per-stage results
//!
//! Fetching the source text is left to the caller; the pipeline performs
//! no I/O.
//!
//! # Example
//!
//! ```rust
//! use olympos_core::{Pipeline, RawDocument};
//!
//! let document = RawDocument::from("The gods of Olympus look\u{2019}d on[3]. Troy burned. Olympian Zeus.");
//! let output = Pipeline::new().run(&document).unwrap();
//!
//! assert_eq!(output.document.as_str(), "The gods of Olympus looked on. Olympian Zeus");
//! assert_eq!(output.stats.matched_count, 2);
//! ```

pub mod application;
pub mod constants;
pub mod domain;
pub mod error;
pub mod input;
pub mod types;

pub use application::{Pipeline, PipelineOutput, PipelineTrace, ProcessingStats};
pub use domain::{clean, filter, join, modernize, split};
pub use error::{CoreError, Result};
pub use input::Input;
pub use types::{FragmentSequence, OutputDocument, RawDocument};

/// Run the default pipeline over `text`
pub fn process_text(text: &str) -> Result<OutputDocument> {
    Pipeline::new().process_text(text)
}
