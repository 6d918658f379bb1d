use tracing::{info, instrument};

use crate::image_pipeline::analysis::types::{BoundingBox, PixelCoord, ZeroPixelAnalysis};
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::grid::Grid;

/// Every cell whose magnitude is at most `tolerance`, in row-major order.
pub fn find_zero_pixels(grid: &Grid, tolerance: f64) -> Vec<PixelCoord> {
    grid.rows()
        .enumerate()
        .flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .filter(move |(_, v)| v.abs() <= tolerance)
                .map(move |(col, _)| PixelCoord::new(row, col))
        })
        .collect()
}

/// Finds the black pixels and their bounding box.
///
/// Fails with [`PipelineError::NoZeroPixels`] when the grid has none.
#[instrument(skip(grid), fields(width = grid.width, height = grid.height))]
pub fn analyze(grid: &Grid, tolerance: f64) -> Result<ZeroPixelAnalysis> {
    let coords = find_zero_pixels(grid, tolerance);
    let bounding_box = BoundingBox::from_coords(&coords).ok_or(PipelineError::NoZeroPixels)?;

    info!("Black pixel count: {}", coords.len());
    info!(
        "Bounding box: x=[{}, {}], y=[{}, {}]",
        bounding_box.min_col, bounding_box.max_col, bounding_box.min_row, bounding_box.max_row
    );

    Ok(ZeroPixelAnalysis {
        coords,
        bounding_box,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_zeros(width: usize, height: usize, zeros: &[(usize, usize)]) -> Grid {
        let mut data = vec![200.0; width * height];
        for &(r, c) in zeros {
            data[r * width + c] = 0.0;
        }
        Grid::new(width, height, data).unwrap()
    }

    #[test]
    fn test_two_zero_cells() {
        let grid = grid_with_zeros(10, 8, &[(5, 7), (2, 3)]);
        let analysis = analyze(&grid, 0.0).unwrap();

        assert_eq!(analysis.count(), 2);
        assert_eq!(
            analysis.bounding_box,
            BoundingBox { min_row: 2, max_row: 5, min_col: 3, max_col: 7 }
        );
        assert_eq!(analysis.coords, vec![PixelCoord::new(2, 3), PixelCoord::new(5, 7)]);
    }

    #[test]
    fn test_every_coordinate_inside_box() {
        let zeros = [(1, 1), (4, 9), (7, 0), (3, 5), (0, 6)];
        let grid = grid_with_zeros(10, 8, &zeros);
        let analysis = analyze(&grid, 0.0).unwrap();

        assert_eq!(analysis.count(), zeros.len());
        assert!(analysis.coords.iter().all(|&c| analysis.bounding_box.contains(c)));
        assert_eq!(
            analysis.bounding_box,
            BoundingBox { min_row: 0, max_row: 7, min_col: 0, max_col: 9 }
        );
    }

    #[test]
    fn test_no_zeros_is_an_error() {
        let grid = grid_with_zeros(4, 4, &[]);
        assert!(matches!(analyze(&grid, 1e-6), Err(PipelineError::NoZeroPixels)));
    }

    #[test]
    fn test_tolerance_absorbs_float_noise() {
        let grid = Grid::new(3, 1, vec![1e-9, -1e-9, 1.0]).unwrap();
        assert!(find_zero_pixels(&grid, 0.0).is_empty());
        assert_eq!(find_zero_pixels(&grid, 1e-6).len(), 2);
    }

    #[test]
    fn test_nan_is_never_zero() {
        let grid = Grid::new(2, 1, vec![f64::NAN, 0.0]).unwrap();
        assert_eq!(find_zero_pixels(&grid, 1e-6), vec![PixelCoord::new(0, 1)]);
    }
}
