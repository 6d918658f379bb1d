//! Figure titles drawn in a white strip above an image.
//!
//! Titles need a TrueType font; when none of the usual system fonts exist the
//! pipeline saves untitled figures.

use ab_glyph::{Font, FontVec};
use image::{imageops, Rgb as Pixel, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::rgb::RgbImageData;

const FONT_PATHS: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const TITLE_SCALE: f32 = 16.0;
const TITLE_STRIP: u32 = 24;
const TITLE_MARGIN: u32 = 4;

/// First readable system font, if any.
pub fn load_font() -> Option<FontVec> {
    for path in FONT_PATHS {
        if let Ok(data) = std::fs::read(path)
            && let Ok(font) = FontVec::try_from_vec(data)
        {
            debug!("Loaded title font {}", path);
            return Some(font);
        }
    }
    None
}

/// Returns `image` below a strip holding `title`, centered.
///
/// The figure widens when the title is wider than the image.
pub fn with_title(image: &RgbImageData, title: &str, font: &impl Font) -> Result<RgbImageData> {
    let body = image.to_rgb_image()?;
    let (text_w, text_h) = text_size(TITLE_SCALE, font, title);

    let width = body.width().max(text_w + 2 * TITLE_MARGIN);
    let height = body.height() + TITLE_STRIP;
    let mut canvas = RgbImage::from_pixel(width, height, Pixel([255, 255, 255]));

    let x = (width - text_w) / 2;
    let y = TITLE_STRIP.saturating_sub(text_h) / 2;
    draw_text_mut(&mut canvas, Pixel([0, 0, 0]), x as i32, y as i32, TITLE_SCALE, font, title);
    imageops::replace(
        &mut canvas,
        &body,
        ((width - body.width()) / 2) as i64,
        TITLE_STRIP as i64,
    );

    Ok(RgbImageData::from_rgb_image(canvas))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_strip_above_image() {
        // skipped on machines without any of the system fonts
        let Some(font) = load_font() else { return };

        let image = RgbImageData::filled(200, 10, [0, 0, 255]);
        let figure = with_title(&image, "Colormap: hot", &font).unwrap();

        assert_eq!(figure.width, 200);
        assert_eq!(figure.height, 10 + TITLE_STRIP as usize);
        assert_eq!(figure.pixel(TITLE_STRIP as usize, 0), [0, 0, 255]);
        assert_eq!(figure.pixel(figure.height - 1, 199), [0, 0, 255]);

        let strip = &figure.data[..200 * TITLE_STRIP as usize * 3];
        assert!(strip.iter().any(|&v| v < 128), "title text was not drawn");
    }

    #[test]
    fn test_narrow_image_widens_for_title() {
        let Some(font) = load_font() else { return };

        let image = RgbImageData::filled(4, 4, [9, 9, 9]);
        let figure = with_title(&image, "Before Denoising", &font).unwrap();

        assert!(figure.width > 4);
        let left = (figure.width - 4) / 2;
        assert_eq!(figure.pixel(TITLE_STRIP as usize, left), [9, 9, 9]);
        assert_eq!(figure.pixel(TITLE_STRIP as usize, left + 3), [9, 9, 9]);
    }
}
