use imageproc::filter::separable_filter_equal;
use tracing::instrument;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::rgb::RgbImageData;

/// Box-averages each channel over a `window × window` neighbourhood.
///
/// Runs as a horizontal then a vertical pass with equal weights. Borders repeat
/// the edge pixel, which for a 3-wide window gives the same sums as mirroring.
/// `window` must be odd and at most `2 * min(width, height) + 1`.
#[instrument(skip(image), fields(width = image.width, height = image.height))]
pub fn mean_filter(image: &RgbImageData, window: usize) -> Result<RgbImageData> {
    if window == 0 || window % 2 == 0 {
        return Err(PipelineError::InvalidConfig(format!(
            "filter window must be odd and positive, got {}",
            window
        )));
    }
    if image.width == 0 || image.height == 0 {
        return Ok(image.clone());
    }
    let limit = 2 * image.width.min(image.height) + 1;
    if window > limit {
        return Err(PipelineError::InvalidConfig(format!(
            "filter window {} exceeds {} for a {}x{} image",
            window, limit, image.width, image.height
        )));
    }

    let kernel = vec![1.0f32 / window as f32; window];
    let smoothed = separable_filter_equal(&image.to_rgb_image()?, &kernel);
    Ok(RgbImageData::from_rgb_image(smoothed))
}
