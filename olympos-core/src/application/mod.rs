//! Application layer: orchestration of the domain stages

pub mod pipeline;

pub use pipeline::{Pipeline, PipelineOutput, PipelineTrace, ProcessingStats};
