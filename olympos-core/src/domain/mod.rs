//! Pipeline stages, leaf-first.
//!
//! Every stage is a pure function over its input. Each one is exposed both
//! as a zero-sized stage type and as a free function using the fixed
//! literals from [`crate::constants`].

pub mod cleaner;
pub mod filter;
pub mod joiner;
pub mod modernizer;
pub mod splitter;

pub use cleaner::{clean, TextCleaner};
pub use filter::{filter, TopicFilter};
pub use joiner::{join, SentenceJoiner};
pub use modernizer::{modernize, Modernizer};
pub use splitter::{split, SentenceSplitter};
