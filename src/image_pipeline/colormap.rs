//! Color mapping module
//!
//! Named scalar-to-RGB maps and the renderer that applies them to a grid.

mod render;
pub mod types;

pub use render::render;
pub use types::ColorMap;
