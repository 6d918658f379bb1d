//! Grid reader for delimited numeric text such as CSV.
//!
//! Text after a `#` is a comment. Every line with data left is one row of the grid.
//! All rows must have the same number of fields.

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::grid::reader::GridReader;
use crate::image_pipeline::grid::types::Grid;

const COMMENT_PREFIX: char = '#';

/// Reads a rectangular grid of `f64` values separated by `delimiter`.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedGridReader {
    pub delimiter: char,
}

impl Default for DelimitedGridReader {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl DelimitedGridReader {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    fn parse_row(&self, line_no: usize, line: &str) -> Result<Vec<f64>> {
        line.split(self.delimiter)
            .enumerate()
            .map(|(idx, field)| {
                let field = field.trim();
                field.parse::<f64>().map_err(|e| PipelineError::ParseError {
                    line: line_no,
                    column: idx + 1,
                    message: if field.is_empty() {
                        "empty field".to_string()
                    } else {
                        format!("'{}': {}", field, e)
                    },
                })
            })
            .collect()
    }
}

impl GridReader for DelimitedGridReader {
    /// Parses delimited text into a [`Grid`].
    ///
    /// # Errors
    ///
    /// * `ParseError` - the input is not UTF-8 or a field is not a number
    /// * `RaggedRow` - a row's field count differs from the first row
    /// * `InvalidDimensions` - the input contains no data rows
    fn read_grid(&self, data: &[u8]) -> Result<Grid> {
        debug!("Parsing delimited grid, {} bytes", data.len());

        let text = std::str::from_utf8(data).map_err(|e| PipelineError::ParseError {
            line: 0,
            column: 0,
            message: e.to_string(),
        })?;

        let mut width = 0;
        let mut height = 0;
        let mut values = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            // anything from the first comment marker on is ignored
            let content = line.split(COMMENT_PREFIX).next().unwrap_or("");
            let trimmed = content.trim();
            if trimmed.is_empty() {
                continue;
            }

            let row = self.parse_row(line_no, trimmed)?;
            if height == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(PipelineError::RaggedRow {
                    line: line_no,
                    expected: width,
                    found: row.len(),
                });
            }
            values.extend(row);
            height += 1;
        }

        debug!("Parsed grid: {}x{}", width, height);
        Grid::new(width, height, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_csv_with_comments_and_blank_lines() {
        let input = b"# secret image\n0, 255, 128\n\n12,0,3.5\n";
        let grid = DelimitedGridReader::default().read_grid(input).unwrap();

        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 2);
        assert_eq!(grid.data, vec![0.0, 255.0, 128.0, 12.0, 0.0, 3.5]);
    }

    #[test]
    fn test_trailing_comment_is_stripped() {
        let input = b"1,2 # first row\n3,4#second\n  # indented comment\n";
        let grid = DelimitedGridReader::default().read_grid(input).unwrap();

        assert_eq!((grid.width, grid.height), (2, 2));
        assert_eq!(grid.data, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_custom_delimiter() {
        let grid = DelimitedGridReader::new(';').read_grid(b"1;2\n3;4").unwrap();
        assert_eq!(grid.get(1, 0), 3.0);
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let result = DelimitedGridReader::default().read_grid(b"1,2,3\n4,5\n");
        assert!(matches!(
            result,
            Err(PipelineError::RaggedRow { line: 2, expected: 3, found: 2 })
        ));
    }

    #[test]
    fn test_malformed_value_reports_position() {
        let result = DelimitedGridReader::default().read_grid(b"1,2\n3,abc\n");
        match result {
            Err(PipelineError::ParseError { line, column, .. }) => {
                assert_eq!((line, column), (2, 2));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_field_is_a_parse_error() {
        let result = DelimitedGridReader::default().read_grid(b"1,,3\n");
        assert!(matches!(result, Err(PipelineError::ParseError { column: 2, .. })));
    }

    #[test]
    fn test_empty_input_has_invalid_dimensions() {
        let result = DelimitedGridReader::default().read_grid(b"# only a header\n\n");
        assert!(matches!(result, Err(PipelineError::InvalidDimensions(0, 0))));
    }
}
