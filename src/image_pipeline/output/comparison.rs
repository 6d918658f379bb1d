use image::{imageops, Rgb as Pixel, RgbImage};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::rgb::{Rgb, RgbImageData};

/// Places `before` and `after` next to each other, top aligned, separated by
/// `gap` columns of `background`.
pub fn side_by_side(
    before: &RgbImageData,
    after: &RgbImageData,
    gap: usize,
    background: Rgb,
) -> Result<RgbImageData> {
    let width = before.width + gap + after.width;
    let height = before.height.max(after.height);

    let mut canvas = RgbImage::from_pixel(width as u32, height as u32, Pixel(background));
    imageops::replace(&mut canvas, &before.to_rgb_image()?, 0, 0);
    imageops::replace(&mut canvas, &after.to_rgb_image()?, (before.width + gap) as i64, 0);

    Ok(RgbImageData::from_rgb_image(canvas))
}
