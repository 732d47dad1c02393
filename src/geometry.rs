//! Geometric primitives for line rasterization.
//!
//! Points and lines live in grid space (real-valued, not pixel indices).
//! [`Grid`] describes the target raster and the pixel-center convention.

use crate::error::{Error, Result};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Round both coordinates to the nearest integer pixel.
    #[must_use]
    pub fn rounded(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// The same segment walked from the other end.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Reflection across the `y = x` diagonal.
    #[must_use]
    pub const fn transposed(&self) -> Self {
        Self::from_coords(self.start.y, self.start.x, self.end.y, self.end.x)
    }
}

/// Target raster dimensions.
///
/// Valid pixel indices are `[0, width-1] x [0, height-1]`. Rasterizers may
/// produce indices outside this range; clipping is left to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Create a grid.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether a pixel index lies on the grid.
    #[must_use]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= 0 && py >= 0 && (px as u32) < self.width && (py as u32) < self.height
    }

    /// Map a pixel index to normalized device coordinates.
    ///
    /// Pixel `p` is centered at `p + 0.5`, so pixel 0 of a 2-wide grid maps
    /// to `-0.5` and pixel 1 to `0.5`.
    #[must_use]
    pub fn to_ndc(&self, px: i32, py: i32) -> (f32, f32) {
        let x = (2.0 * (px as f32 + 0.5)) / self.width as f32 - 1.0;
        let y = (2.0 * (py as f32 + 0.5)) / self.height as f32 - 1.0;
        (x, y)
    }
}

impl batuta_common::display::WithDimensions for Grid {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        // Zero would break the pixel-center mapping, keep the old extent.
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
        }
    }
}
