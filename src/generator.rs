//! Line and curve generators for demo scenes.
//!
//! These produce input for the rasterizers: radial fans of segments and a
//! sine wave sampled once per pixel column.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::{Grid, Line, Point};
use crate::raster::{AliasedSample, CoverageStep, PixelSample, StepKind};

/// Segments from `center` outward, one every `angle_step` degrees in `[0, 360)`.
///
/// # Errors
///
/// Returns an error if `angle_step` is 0 or larger than 360, or if `center`
/// or `radius` is not finite.
///
/// # Example
///
/// ```
/// use trueno_lines::generator::radial_fan;
/// use trueno_lines::geometry::Point;
///
/// let lines = radial_fan(Point::new(100.0, 100.0), 50.0, 15).unwrap();
/// assert_eq!(lines.len(), 24);
/// ```
pub fn radial_fan(center: Point, radius: f32, angle_step: u32) -> Result<Vec<Line>> {
    ensure_finite("center.x", center.x)?;
    ensure_finite("center.y", center.y)?;
    ensure_finite("radius", radius)?;
    if angle_step == 0 || angle_step > 360 {
        return Err(Error::InvalidParameter {
            name: "angle_step",
            message: format!("must be in 1..=360 degrees, got {angle_step}"),
        });
    }

    let lines = (0..360)
        .step_by(angle_step as usize)
        .map(|degrees: u32| {
            let rad = f64::from(degrees).to_radians();
            let r = f64::from(radius);
            let end = Point::new(
                center.x + (r * rad.cos()) as f32,
                center.y + (r * rad.sin()) as f32,
            );
            Line::new(center, end)
        })
        .collect();

    Ok(lines)
}

/// Reject NaN and infinite parameters before they reach a rasterizer.
pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, message: format!("must be finite, got {value}") })
    }
}

/// `y = baseline + amplitude * sin(frequency * x + phase)` over integer columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWave {
    /// First sampled column.
    pub x_start: i32,
    /// Last sampled column (inclusive).
    pub x_end: i32,
    /// Vertical center of the wave.
    pub baseline: f32,
    /// Peak displacement from the baseline, in pixels.
    pub amplitude: f32,
    /// Angular frequency per pixel.
    pub frequency: f32,
    /// Phase offset in radians.
    pub phase: f32,
}

impl SineWave {
    /// A wave spanning `grid` with a small horizontal margin.
    #[must_use]
    pub fn across(grid: Grid) -> Self {
        let margin = (grid.width() / 25) as i32;
        Self {
            x_start: margin,
            x_end: grid.width() as i32 - 1 - margin,
            baseline: grid.height() as f32 / 2.0,
            amplitude: grid.height() as f32 * 0.28,
            frequency: 0.01,
            phase: 0.0,
        }
    }

    /// Set the amplitude.
    #[must_use]
    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the phase.
    #[must_use]
    pub fn phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// Check that every wave parameter is finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first non-finite field.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("baseline", self.baseline)?;
        ensure_finite("amplitude", self.amplitude)?;
        ensure_finite("frequency", self.frequency)?;
        ensure_finite("phase", self.phase)
    }

    /// Height of the wave at `x`.
    #[must_use]
    pub fn y_at(&self, x: f32) -> f32 {
        self.baseline + self.amplitude * (self.frequency * x + self.phase).sin()
    }

    /// One full-intensity pixel per column at the rounded height.
    #[must_use]
    pub fn aliased_samples(&self) -> Vec<AliasedSample> {
        (self.x_start..=self.x_end)
            .map(|x| AliasedSample::new(x, self.y_at(x as f32).round() as i32))
            .collect()
    }

    /// Two pixels per column, splitting coverage at the wave's height.
    ///
    /// Uses the same floor/fraction split as the interior of a Wu line.
    #[must_use]
    pub fn coverage_samples(&self, color: Rgb) -> Vec<PixelSample> {
        let mut samples = Vec::new();
        for x in self.x_start..=self.x_end {
            let step = CoverageStep::split(StepKind::Span, x, self.y_at(x as f32), 1.0);
            samples.push(PixelSample::new(x, step.minor, step.low, color));
            samples.push(PixelSample::new(x, step.minor.saturating_add(1), step.high, color));
        }
        samples
    }
}
