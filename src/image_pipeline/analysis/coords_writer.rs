use std::io::Write;

use crate::image_pipeline::analysis::types::PixelCoord;
use crate::image_pipeline::common::error::Result;

const HEADER: &str = "# y x";

/// Writes one `row col` pair per line after a `# y x` header line.
pub fn write_coordinates(coords: &[PixelCoord], output: &mut dyn Write) -> Result<()> {
    writeln!(output, "{}", HEADER)?;
    for c in coords {
        writeln!(output, "{} {}", c.row, c.col)?;
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_per_coordinate() {
        let coords = vec![PixelCoord::new(2, 3), PixelCoord::new(5, 7), PixelCoord::new(5, 8)];
        let mut buffer = Vec::new();
        write_coordinates(&coords, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# y x");
        assert_eq!(&lines[1..], &["2 3", "5 7", "5 8"]);

        let data_lines = lines.iter().filter(|l| !l.starts_with('#')).count();
        assert_eq!(data_lines, coords.len());
    }
}
