//! Image editing module
//!
//! In-place edits applied to the replicated RGB buffer: region marking,
//! band flipping and border drawing.

mod operations;
pub mod types;

pub use types::FractionalRegion;
