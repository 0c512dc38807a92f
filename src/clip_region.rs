//! Clip region: even-odd point-in-polygon test against a saved path.
//!
//! Drawing operations query rows in runs, so the crossings of the most
//! recently tested row are kept and reused until a different row is asked
//! for.

use crate::basics::Line;
use crate::rasterizer_scanline::sorted_intersections;

#[derive(Debug, Clone, Default)]
pub struct ClipRegion {
    lines: Vec<Line>,
    cached_row: Option<i64>,
    cached: Vec<f64>,
}

impl ClipRegion {
    /// Clip to the area enclosed by `lines` (already closed, device space).
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            cached_row: None,
            cached: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// True if pixel `(x, y)` is inside the region: an odd number of the
    /// row's crossings lie strictly left of `x`.
    pub fn contains(&mut self, x: i64, y: i64) -> bool {
        if self.cached_row != Some(y) {
            self.cached = sorted_intersections(&self.lines, y as f64);
            self.cached_row = Some(y);
        }
        let xf = x as f64;
        // Crossings are sorted, so the count left of x is a partition point.
        let left = self.cached.partition_point(|&c| c < xf);
        left % 2 == 1
    }
}

impl PartialEq for ClipRegion {
    fn eq(&self, other: &Self) -> bool {
        self.lines == other.lines
    }
}
