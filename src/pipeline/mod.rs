//! Orchestration of a complete image to pattern conversion

/// Sequential conversion run and its configuration
pub mod executor;

pub use executor::{PatternPipeline, PipelineConfig, PipelineSummary};
