//! Grid data types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Single-channel intensity grid, immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Row-major intensity values
    pub data: Vec<f64>,
}

impl Grid {
    /// Builds a grid, checking that `data` holds exactly `width * height` values.
    pub fn new(width: usize, height: usize, data: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != width * height {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        Ok(Self { width, height, data })
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.width)
    }

    /// Smallest and largest finite values, or `None` when nothing is finite.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
