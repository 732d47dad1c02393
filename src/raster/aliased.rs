//! Bresenham line rasterization (non-antialiased).
//!
//! Integer-only scan conversion: exactly one pixel per step, 8-connected,
//! both endpoints included.
//!
//! # References
//!
//! Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use super::{AliasedSample, Rasterizer};
use crate::geometry::{Grid, Line};

/// Rasterize the segment `(x0, y0) -> (x1, y1)` with Bresenham's algorithm.
///
/// The first sample is always `(x0, y0)` and the last `(x1, y1)`. The
/// error walk always runs from the lexicographically smaller endpoint so that
/// both directions select the same pixels; for the other direction the
/// output is reversed.
///
/// # Example
///
/// ```
/// use trueno_lines::raster::{bresenham, AliasedSample};
///
/// let samples = bresenham(0, 0, 3, 1);
/// assert_eq!(samples.first(), Some(&AliasedSample::new(0, 0)));
/// assert_eq!(samples.last(), Some(&AliasedSample::new(3, 1)));
/// assert_eq!(samples.len(), 4);
/// ```
#[must_use]
pub fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<AliasedSample> {
    if (x1, y1) < (x0, y0) {
        let mut samples = walk(x1, y1, x0, y0);
        samples.reverse();
        samples
    } else {
        walk(x0, y0, x1, y1)
    }
}

fn walk(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<AliasedSample> {
    // Error terms in i64 so extreme endpoints cannot overflow `2 * err`.
    let dx = (i64::from(x1) - i64::from(x0)).abs();
    let dy = -(i64::from(y1) - i64::from(y0)).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut samples = Vec::with_capacity(dx.max(-dy) as usize + 1);
    let mut x = x0;
    let mut y = y0;

    loop {
        samples.push(AliasedSample::new(x, y));

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    samples
}

/// Baseline rasterizer producing one full-intensity pixel per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasedRasterizer {
    grid: Grid,
}

impl AliasedRasterizer {
    /// Create a rasterizer targeting `grid`.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Rasterize integer endpoints.
    #[must_use]
    pub fn rasterize(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<AliasedSample> {
        let samples = bresenham(x0, y0, x1, y1);
        tracing::trace!(x0, y0, x1, y1, count = samples.len(), "aliased line");
        samples
    }
}

impl Rasterizer for AliasedRasterizer {
    type Sample = AliasedSample;

    fn grid(&self) -> Grid {
        self.grid
    }

    /// Subpixel endpoints are rounded to the nearest pixel first.
    fn rasterize_line(&self, line: &Line) -> Vec<AliasedSample> {
        let (x0, y0) = line.start.rounded();
        let (x1, y1) = line.end.rounded();
        self.rasterize(x0, y0, x1, y1)
    }
}
