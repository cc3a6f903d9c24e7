//! Cell anchors of the sampling grid.

/// Top-left corner of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellAnchor {
    pub x: usize,
    pub y: usize,
}

/// Iterates cell anchors row by row, `(0,0)` first.
///
/// Anchors step by `step` while `x < width` and `y < height`, so the last
/// column and row may describe cells that hang over the image edge.
#[derive(Clone, Debug)]
pub struct CellGrid {
    width: usize,
    height: usize,
    step: usize,
    x: usize,
    y: usize,
}

impl CellGrid {
    pub fn new(width: usize, height: usize, step: usize) -> Self {
        debug_assert!(step > 0, "cell step must be positive");
        Self {
            width,
            height,
            step: step.max(1),
            x: 0,
            y: 0,
        }
    }

    /// Number of cells along x and y.
    pub fn dims(&self) -> (usize, usize) {
        (
            self.width.div_ceil(self.step),
            self.height.div_ceil(self.step),
        )
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        let (cols, rows) = self.dims();
        cols * rows
    }
}

impl Iterator for CellGrid {
    type Item = CellAnchor;

    fn next(&mut self) -> Option<CellAnchor> {
        if self.width == 0 || self.y >= self.height {
            return None;
        }
        let anchor = CellAnchor {
            x: self.x,
            y: self.y,
        };
        self.x += self.step;
        if self.x >= self.width {
            self.x = 0;
            self.y += self.step;
        }
        Some(anchor)
    }
}
