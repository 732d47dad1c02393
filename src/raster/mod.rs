//! Line rasterization.
//!
//! Two rasterizers share one contract (endpoints in, pixel samples out):
//!
//! - **Bresenham** ([`AliasedRasterizer`]): integer-only, one pixel per step
//! - **Wu** ([`AntialiasedRasterizer`]): two pixels per step with a
//!   fractional coverage split
//!
//! Both are pure functions of their input. They never clip: indices outside
//! the [`Grid`] are emitted as-is and discarded by the renderer.
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod aliased;
mod antialiased;
pub mod coverage;

pub use aliased::{bresenham, AliasedRasterizer};
pub use antialiased::{wu, wu_steps, AntialiasedRasterizer};
pub use coverage::{CoverageStep, Orientation, StepKind};

use crate::color::Rgb;
use crate::geometry::{Grid, Line};

/// One full-intensity pixel from the aliased rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AliasedSample {
    /// Pixel column.
    pub px: i32,
    /// Pixel row.
    pub py: i32,
}

impl AliasedSample {
    /// Create a sample.
    #[must_use]
    pub const fn new(px: i32, py: i32) -> Self {
        Self { px, py }
    }
}

/// One pixel from the anti-aliased rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSample {
    /// Pixel column.
    pub px: i32,
    /// Pixel row.
    pub py: i32,
    /// Fraction of the pixel covered by the line, in `[0, 1]`.
    pub coverage: f32,
    /// Line color.
    pub color: Rgb,
}

impl PixelSample {
    /// Create a sample.
    #[must_use]
    pub const fn new(px: i32, py: i32, coverage: f32, color: Rgb) -> Self {
        Self { px, py, coverage, color }
    }
}

/// Common interface of the line rasterizers.
pub trait Rasterizer {
    /// Output record type.
    type Sample;

    /// Grid the samples are meant for.
    fn grid(&self) -> Grid;

    /// Rasterize one segment.
    fn rasterize_line(&self, line: &Line) -> Vec<Self::Sample>;

    /// Rasterize a batch of segments into one sequence, in input order.
    fn rasterize_all(&self, lines: &[Line]) -> Vec<Self::Sample> {
        let mut samples = Vec::new();
        for line in lines {
            samples.extend(self.rasterize_line(line));
        }
        tracing::debug!(lines = lines.len(), samples = samples.len(), "rasterized batch");
        samples
    }
}
