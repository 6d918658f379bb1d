use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to parse grid at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Row at line {line} has {found} values, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("No zero-valued pixels found; bounding box is undefined")]
    NoZeroPixels,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
