//! Anti-aliased line rasterization using Wu's algorithm.
//!
//! Wu's algorithm draws two pixels at each step along the major axis,
//! splitting one unit of intensity between them according to the
//! fractional distance of the ideal line from the pixel row.
//!
//! The walk is computed once in `(major, minor)` space by [`wu_steps`];
//! [`wu`] maps the result back to grid pixels. Steep lines are handled by
//! [`Orientation`] rather than a second code path.
//!
//! # References
//!
//! Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

use super::coverage::{CoverageStep, Orientation, StepKind};
use super::{PixelSample, Rasterizer};
use crate::color::Rgb;
use crate::geometry::{Grid, Line};

/// Compute Wu coverage steps for `(x0, y0) -> (x1, y1)`.
///
/// Steps are returned in increasing major-axis order: the start cap, every
/// interior column, then the end cap. Endpoints are expected to be finite.
#[must_use]
pub fn wu_steps(x0: f32, y0: f32, x1: f32, y1: f32) -> (Orientation, Vec<CoverageStep>) {
    let orientation = Orientation::of(x0, y0, x1, y1);

    let (x0, y0) = orientation.to_major(x0, y0);
    let (x1, y1) = orientation.to_major(x1, y1);
    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    // Only a zero-length segment reaches dx == 0 after normalization.
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    // Start cap: floor keeps the endpoint column out of the span range.
    let xend = x0.floor();
    let yend = y0 + gradient * (xend - x0);
    let xgap = 1.0 - (x0 - xend);
    let xpxl1 = xend as i32;
    let start = CoverageStep::split(StepKind::StartCap, xpxl1, yend, xgap);

    let mut intery = yend + gradient;

    // End cap
    let xend = x1.ceil();
    let yend = y1 + gradient * (xend - x1);
    let xgap = 1.0 - (xend - x1);
    let xpxl2 = xend as i32;
    let end = CoverageStep::split(StepKind::EndCap, xpxl2, yend, xgap);

    let spans = usize::try_from(i64::from(xpxl2) - i64::from(xpxl1) - 1).unwrap_or(0);
    let mut steps = Vec::with_capacity(spans + 2);
    steps.push(start);

    for major in (xpxl1.saturating_add(1))..xpxl2 {
        steps.push(CoverageStep::split(StepKind::Span, major, intery, 1.0));
        intery += gradient;
    }

    steps.push(end);
    (orientation, steps)
}

/// Rasterize `(x0, y0) -> (x1, y1)` into coverage samples.
///
/// Each step emits the lower pixel first, then the upper one. Samples with
/// zero coverage are kept so that every step yields exactly one pair.
///
/// # Example
///
/// ```
/// use trueno_lines::color::Rgb;
/// use trueno_lines::raster::wu;
///
/// let samples = wu(0.0, 10.0, 5.0, 10.0, Rgb::WHITE);
/// assert_eq!(samples.len(), 12);
/// assert!(samples.iter().all(|s| (s.py == 10 && s.coverage == 1.0) || s.coverage == 0.0));
/// ```
#[must_use]
pub fn wu(x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb) -> Vec<PixelSample> {
    let (orientation, steps) = wu_steps(x0, y0, x1, y1);

    let mut samples = Vec::with_capacity(steps.len() * 2);
    for step in &steps {
        let (px, py) = orientation.to_grid(step.major, step.minor);
        samples.push(PixelSample::new(px, py, step.low, color));
        let (px, py) = orientation.to_grid(step.major, step.minor.saturating_add(1));
        samples.push(PixelSample::new(px, py, step.high, color));
    }
    samples
}

/// Wu rasterizer with a fixed target grid and line color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntialiasedRasterizer {
    grid: Grid,
    color: Rgb,
}

impl AntialiasedRasterizer {
    /// Create a rasterizer targeting `grid` with the default color.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self { grid, color: Rgb::default() }
    }

    /// Set the color attached to every sample.
    #[must_use]
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Rasterize real-valued endpoints.
    #[must_use]
    pub fn rasterize(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<PixelSample> {
        let samples = wu(x0, y0, x1, y1, self.color);
        tracing::trace!(x0, y0, x1, y1, count = samples.len(), "antialiased line");
        samples
    }
}

impl Rasterizer for AntialiasedRasterizer {
    type Sample = PixelSample;

    fn grid(&self) -> Grid {
        self.grid
    }

    fn rasterize_line(&self, line: &Line) -> Vec<PixelSample> {
        self.rasterize(line.start.x, line.start.y, line.end.x, line.end.y)
    }
}
