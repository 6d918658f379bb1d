//! Common utilities module
//!
//! Shared error type and stage timing used across the pipeline.

pub mod error;
pub mod timing;

pub use error::{PipelineError, Result};
pub use timing::{PipelineTimings, StageTiming, Timer};
