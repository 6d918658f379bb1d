//! Region types for proportional image edits

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Rectangle given as fractions of image height (`top`, `bottom`) and width
/// (`left`, `right`).
///
/// Bounds resolve to `floor(fraction * extent)` and are exclusive on both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalRegion {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

fn edge(fraction: f64, extent: usize) -> usize {
    (fraction * extent as f64).floor() as usize
}

impl FractionalRegion {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }

    pub fn contains(&self, row: usize, col: usize, height: usize, width: usize) -> bool {
        edge(self.top, height) < row
            && row < edge(self.bottom, height)
            && edge(self.left, width) < col
            && col < edge(self.right, width)
    }

    /// True when no pixel of a `height × width` image can fall inside.
    pub fn is_degenerate(&self, height: usize, width: usize) -> bool {
        edge(self.bottom, height) <= edge(self.top, height) + 1
            || edge(self.right, width) <= edge(self.left, width) + 1
    }

    pub fn validate(&self) -> Result<()> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if ![self.top, self.bottom, self.left, self.right].into_iter().all(in_unit) {
            return Err(PipelineError::InvalidConfig(format!(
                "region fractions must lie in [0, 1]: {:?}",
                self
            )));
        }
        if self.top >= self.bottom || self.left >= self.right {
            return Err(PipelineError::InvalidConfig(format!(
                "region bounds are inverted: {:?}",
                self
            )));
        }
        Ok(())
    }
}
