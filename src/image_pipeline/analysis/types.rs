//! Analysis result types

/// A (row, column) position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    pub row: usize,
    pub col: usize,
}

impl PixelCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Minimal axis-aligned rectangle containing a set of coordinates, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl BoundingBox {
    /// `None` for an empty set, where no box exists.
    pub fn from_coords(coords: &[PixelCoord]) -> Option<Self> {
        let first = coords.first()?;
        let init = BoundingBox {
            min_row: first.row,
            max_row: first.row,
            min_col: first.col,
            max_col: first.col,
        };
        Some(coords.iter().fold(init, |bb, c| BoundingBox {
            min_row: bb.min_row.min(c.row),
            max_row: bb.max_row.max(c.row),
            min_col: bb.min_col.min(c.col),
            max_col: bb.max_col.max(c.col),
        }))
    }

    pub fn contains(&self, coord: PixelCoord) -> bool {
        (self.min_row..=self.max_row).contains(&coord.row)
            && (self.min_col..=self.max_col).contains(&coord.col)
    }
}

/// Black pixels of a grid, computed once and shared by later stages.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroPixelAnalysis {
    /// Row-major scan order
    pub coords: Vec<PixelCoord>,
    pub bounding_box: BoundingBox,
}

impl ZeroPixelAnalysis {
    pub fn count(&self) -> usize {
        self.coords.len()
    }
}
