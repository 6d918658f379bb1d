//! Pipeline configuration module

pub mod types;

pub use types::{OutputFiles, PipelineConfig, PipelineConfigBuilder};
