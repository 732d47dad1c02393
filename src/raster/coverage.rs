//! Coverage helpers shared by the rasterizers.

/// Fractional part of a float, floor based.
///
/// Always in `[0, 1)`, including for negative input: `fpart(-0.25) == 0.75`.
#[inline]
pub fn fpart(x: f32) -> f32 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
pub fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

/// Which grid axis a line steps along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Major axis is x (`|dy| <= |dx|`).
    Shallow,
    /// Major axis is y (`|dy| > |dx|`).
    Steep,
}

impl Orientation {
    /// Classify the segment `(x0, y0) -> (x1, y1)`.
    #[must_use]
    pub fn of(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        if (y1 - y0).abs() > (x1 - x0).abs() {
            Self::Steep
        } else {
            Self::Shallow
        }
    }

    /// Grid coordinates to `(major, minor)`.
    #[inline]
    #[must_use]
    pub fn to_major(self, x: f32, y: f32) -> (f32, f32) {
        match self {
            Self::Shallow => (x, y),
            Self::Steep => (y, x),
        }
    }

    /// Pixel `(major, minor)` back to grid `(px, py)`.
    #[inline]
    #[must_use]
    pub fn to_grid(self, major: i32, minor: i32) -> (i32, i32) {
        match self {
            Self::Shallow => (major, minor),
            Self::Steep => (minor, major),
        }
    }
}

/// Where along the line a [`CoverageStep`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Column of the start endpoint.
    StartCap,
    /// Interior column.
    Span,
    /// Column of the end endpoint.
    EndCap,
}

/// One major-axis step: two adjacent minor-axis pixels and their coverage.
///
/// Coordinates are in the rasterizer's `(major, minor)` space; `low` covers
/// pixel `minor` and `high` covers `minor + 1`. For spans `low + high == 1`.
/// For caps the pair sums to the endpoint's gap factor, which is 1 for
/// integer endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageStep {
    /// Position along the line.
    pub kind: StepKind,
    /// Major-axis pixel index.
    pub major: i32,
    /// Lower minor-axis pixel index.
    pub minor: i32,
    /// Coverage of `minor`.
    pub low: f32,
    /// Coverage of `minor + 1`.
    pub high: f32,
}

impl CoverageStep {
    /// Split the cross-axis position `y` between `floor(y)` and `floor(y) + 1`,
    /// scaled by `gap`.
    #[inline]
    #[must_use]
    pub fn split(kind: StepKind, major: i32, y: f32, gap: f32) -> Self {
        Self { kind, major, minor: y.floor() as i32, low: rfpart(y) * gap, high: fpart(y) * gap }
    }

    /// Total coverage of the pair.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.low + self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fpart_negative_uses_floor() {
        assert_eq!(fpart(2.25), 0.25);
        assert_eq!(fpart(-0.25), 0.75);
        assert_eq!(fpart(-3.0), 0.0);
        assert_eq!(rfpart(-0.25), 0.25);
    }

    #[test]
    fn test_orientation_classification() {
        assert_eq!(Orientation::of(0.0, 0.0, 10.0, 3.0), Orientation::Shallow);
        assert_eq!(Orientation::of(0.0, 0.0, 3.0, 10.0), Orientation::Steep);
        // 45 degrees is not steep
        assert_eq!(Orientation::of(0.0, 0.0, 5.0, -5.0), Orientation::Shallow);
        assert_eq!(Orientation::of(1.0, 1.0, 1.0, 1.0), Orientation::Shallow);
    }

    #[test]
    fn test_orientation_mappings_invert() {
        for o in [Orientation::Shallow, Orientation::Steep] {
            let (major, minor) = o.to_major(3.0, 7.0);
            assert_eq!(o.to_grid(major as i32, minor as i32), (3, 7));
        }
    }

    #[test]
    fn test_split_negative_position() {
        let step = CoverageStep::split(StepKind::Span, 0, -1.25, 1.0);
        assert_eq!(step.minor, -2);
        assert_eq!(step.low, 0.25);
        assert_eq!(step.high, 0.75);
        assert_eq!(step.total(), 1.0);
    }

    #[test]
    fn test_split_scaled_by_gap() {
        let step = CoverageStep::split(StepKind::StartCap, 4, 2.5, 0.5);
        assert_eq!(step.minor, 2);
        assert_eq!(step.low, 0.25);
        assert_eq!(step.high, 0.25);
    }
}
