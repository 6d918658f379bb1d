//! Interleaved 8-bit RGB buffers shared by the render, edit and filter stages.

use image::{ImageBuffer, RgbImage};

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::grid::Grid;

pub type Rgb = [u8; 3];

/// RGB image buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}

impl RgbImageData {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height * 3 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        Ok(Self { width, height, data })
    }

    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            data: color.repeat(width * height),
        }
    }

    /// Replicates the grid into three identical channels.
    ///
    /// Values are saturated to `0..=255` and truncated toward zero.
    pub fn from_grid(grid: &Grid) -> Self {
        let data = grid
            .data
            .iter()
            .flat_map(|&v| {
                let level = v as u8;
                [level, level, level]
            })
            .collect();
        Self {
            width: grid.width,
            height: grid.height,
            data,
        }
    }

    /// Copies the buffer into an `image` crate buffer for `imageops`/`imageproc` work.
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        ImageBuffer::from_raw(self.width as u32, self.height as u32, self.data.clone())
            .ok_or(PipelineError::InvalidDimensions(self.width, self.height))
    }

    pub fn from_rgb_image(image: RgbImage) -> Self {
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            data: image.into_raw(),
        }
    }

    /// Runs `edit` on an `RgbImage` view of the pixels and keeps the result.
    pub(crate) fn edit_buffer(&mut self, edit: impl FnOnce(&mut RgbImage)) -> Result<()> {
        let mut buffer = self.to_rgb_image()?;
        edit(&mut buffer);
        self.data = buffer.into_raw();
        Ok(())
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.width + col) * 3
    }

    pub fn pixel(&self, row: usize, col: usize) -> Rgb {
        let i = self.offset(row, col);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, color: Rgb) {
        let i = self.offset(row, col);
        self.data[i..i + 3].copy_from_slice(&color);
    }

    pub fn row(&self, row: usize) -> &[u8] {
        let stride = self.width * 3;
        &self.data[row * stride..(row + 1) * stride]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_grid_replicates_channels() {
        let grid = Grid::new(3, 2, vec![0.0, 17.0, 255.0, 300.0, -4.0, 99.9]).unwrap();
        let rgb = RgbImageData::from_grid(&grid);

        assert_eq!((rgb.width, rgb.height), (3, 2));
        assert_eq!(rgb.data.len(), 3 * 2 * 3);
        for row in 0..2 {
            for col in 0..3 {
                let [r, g, b] = rgb.pixel(row, col);
                assert_eq!(r, g);
                assert_eq!(g, b);
            }
        }
        assert_eq!(rgb.pixel(0, 1), [17, 17, 17]);
        assert_eq!(rgb.pixel(1, 0), [255, 255, 255]);
        assert_eq!(rgb.pixel(1, 1), [0, 0, 0]);
        assert_eq!(rgb.pixel(1, 2), [99, 99, 99]);
    }

    #[test]
    fn test_set_pixel_touches_one_pixel() {
        let mut rgb = RgbImageData::filled(2, 2, [1, 2, 3]);
        rgb.set_pixel(1, 0, [9, 8, 7]);
        assert_eq!(rgb.pixel(1, 0), [9, 8, 7]);
        assert_eq!(rgb.pixel(0, 0), [1, 2, 3]);
        assert_eq!(rgb.row(1), &[9, 8, 7, 1, 2, 3]);
    }

    #[test]
    fn test_rgb_image_conversion_keeps_layout() {
        let mut rgb = RgbImageData::filled(3, 2, [0, 0, 0]);
        rgb.set_pixel(1, 2, [7, 8, 9]);

        let buffer = rgb.to_rgb_image().unwrap();
        assert_eq!(buffer.dimensions(), (3, 2));
        assert_eq!(buffer.get_pixel(2, 1).0, [7, 8, 9]);
        assert_eq!(RgbImageData::from_rgb_image(buffer), rgb);

        let broken = RgbImageData { width: 4, height: 4, data: vec![0; 5] };
        assert!(matches!(broken.to_rgb_image(), Err(PipelineError::InvalidDimensions(4, 4))));
    }

    #[test]
    fn test_new_checks_length() {
        assert!(RgbImageData::new(2, 2, vec![0; 11]).is_err());
        assert!(RgbImageData::new(2, 2, vec![0; 12]).is_ok());
    }
}
