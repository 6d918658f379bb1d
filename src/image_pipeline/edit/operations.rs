use image::imageops;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use tracing::debug;

use crate::image_pipeline::analysis::PixelCoord;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::edit::types::FractionalRegion;
use crate::image_pipeline::rgb::{Rgb, RgbImageData};

impl RgbImageData {
    /// Paints every coordinate that falls inside any of `regions` with `color`.
    ///
    /// Returns the number of pixels painted.
    pub fn mark_regions(
        &mut self,
        coords: &[PixelCoord],
        regions: &[FractionalRegion],
        color: Rgb,
    ) -> usize {
        let (height, width) = (self.height, self.width);
        let mut marked = 0;
        for c in coords {
            if c.row >= height || c.col >= width {
                continue;
            }
            if regions.iter().any(|r| r.contains(c.row, c.col, height, width)) {
                self.set_pixel(c.row, c.col, color);
                marked += 1;
            }
        }
        debug!("Marked {} of {} pixels", marked, coords.len());
        marked
    }

    /// Reverses the order of rows `start..end` in place. `end` is clamped to the height.
    pub fn flip_rows(&mut self, start: usize, end: usize) -> Result<()> {
        let end = end.min(self.height);
        if start >= end {
            return Ok(());
        }
        let width = self.width as u32;
        self.edit_buffer(|buffer| {
            let mut band = imageops::crop(buffer, 0, start as u32, width, (end - start) as u32);
            imageops::flip_vertical_in_place(&mut *band);
        })
    }

    /// Sets the outermost row and column on every side to `color`.
    pub fn draw_border(&mut self, color: Rgb) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }
        let frame = Rect::at(0, 0).of_size(self.width as u32, self.height as u32);
        self.edit_buffer(|buffer| draw_hollow_rect_mut(buffer, frame, image::Rgb(color)))
    }
}
