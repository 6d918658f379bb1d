//! Output module
//!
//! Image encoding, figure titles, the before/after comparison figure and the
//! answers report.

mod writer;
mod png_writer;
mod comparison;
mod report;
mod title;

pub use writer::ImageWriter;
pub use png_writer::PngImageWriter;
pub use comparison::side_by_side;
pub use report::{write_answers, FEATURE_DESCRIPTION};
pub use title::{load_font, with_title};
