use tracing::debug;

use crate::image_pipeline::colormap::types::ColorMap;
use crate::image_pipeline::grid::Grid;
use crate::image_pipeline::rgb::RgbImageData;

/// Renders `grid` through `colormap`, stretched over the grid's finite value range.
///
/// A constant grid renders entirely at the low end of the map. Each cell becomes a
/// `scale × scale` block of pixels (`scale` must be at least 1).
pub fn render(grid: &Grid, colormap: ColorMap, scale: usize) -> RgbImageData {
    let scale = scale.max(1);
    let (lo, hi) = grid.finite_range().unwrap_or((0.0, 0.0));
    let span = hi - lo;
    debug!("Rendering {} with range [{}, {}]", colormap, lo, hi);

    let normalize = |v: f64| {
        if !v.is_finite() || span <= 0.0 {
            0.0
        } else {
            (v - lo) / span
        }
    };

    let width = grid.width * scale;
    let height = grid.height * scale;
    let mut data = Vec::with_capacity(width * height * 3);
    for row in grid.rows() {
        let mut line = Vec::with_capacity(width * 3);
        for &v in row {
            let color = colormap.color_at(normalize(v));
            for _ in 0..scale {
                line.extend_from_slice(&color);
            }
        }
        for _ in 0..scale {
            data.extend_from_slice(&line);
        }
    }

    RgbImageData { width, height, data }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stretches_over_value_range() {
        let grid = Grid::new(3, 1, vec![10.0, 15.0, 20.0]).unwrap();
        let image = render(&grid, ColorMap::Gray, 1);

        assert_eq!(image.pixel(0, 0), [0, 0, 0]);
        assert_eq!(image.pixel(0, 1), [128, 128, 128]);
        assert_eq!(image.pixel(0, 2), [255, 255, 255]);
    }

    #[test]
    fn test_constant_grid_uses_low_end() {
        let grid = Grid::new(2, 2, vec![42.0; 4]).unwrap();
        let image = render(&grid, ColorMap::Viridis, 1);
        assert!(image.data.chunks(3).all(|px| px == [0x44, 0x01, 0x54]));
    }

    #[test]
    fn test_scale_repeats_cells() {
        let grid = Grid::new(2, 1, vec![0.0, 1.0]).unwrap();
        let image = render(&grid, ColorMap::Gray, 3);

        assert_eq!((image.width, image.height), (6, 3));
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(image.pixel(row, col), [0, 0, 0]);
                assert_eq!(image.pixel(row, col + 3), [255, 255, 255]);
            }
        }
    }
}
