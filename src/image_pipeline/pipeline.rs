//! Pipeline orchestration module
//!
//! Composes loading, rendering, analysis, editing, filtering and reporting
//! into one run.

mod grid_reveal;

pub use grid_reveal::{GridRevealPipeline, RevealArtifacts, RevealSummary};
