//! Grid loading module
//!
//! Reads single-channel intensity grids stored as delimited text.

mod reader;
mod delimited_reader;
pub mod types;

pub use reader::GridReader;
pub use delimited_reader::DelimitedGridReader;
pub use types::Grid;
