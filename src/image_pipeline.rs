//! Grid reveal pipeline module
//!
//! Loads a grayscale grid from delimited text, renders it under several color
//! maps, locates and bounds its black pixels, edits and smooths an RGB copy,
//! and reports the findings.

pub mod common;
pub mod grid;
pub mod rgb;
pub mod colormap;
pub mod analysis;
pub mod edit;
pub mod filter;
pub mod output;
pub mod config;
pub mod pipeline;

pub use common::{
    PipelineError,
    Result,
};

pub use grid::{
    Grid,
    GridReader,
    DelimitedGridReader,
};

pub use rgb::{Rgb, RgbImageData};

pub use colormap::ColorMap;

pub use analysis::{
    BoundingBox,
    PixelCoord,
    ZeroPixelAnalysis,
};

pub use edit::FractionalRegion;

pub use output::{
    ImageWriter,
    PngImageWriter,
};

pub use config::{
    OutputFiles,
    PipelineConfig,
    PipelineConfigBuilder,
};

pub use pipeline::{
    GridRevealPipeline,
    RevealArtifacts,
    RevealSummary,
};
