//! Zero-pixel analysis module
//!
//! Locates black pixels, bounds them, and serializes their coordinates.

mod detect;
mod coords_writer;
pub mod types;

pub use detect::{analyze, find_zero_pixels};
pub use coords_writer::write_coordinates;
pub use types::{BoundingBox, PixelCoord, ZeroPixelAnalysis};
