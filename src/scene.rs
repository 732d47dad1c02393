//! Demo scenes that feed both rasterizers with the same geometry.

use crate::color::Rgb;
use crate::error::Result;
use crate::generator::{ensure_finite, radial_fan, SineWave};
use crate::geometry::{Grid, Line, Point};
use crate::raster::{
    AliasedRasterizer, AliasedSample, AntialiasedRasterizer, PixelSample, Rasterizer,
};
use serde::{Deserialize, Serialize};

fn default_angle_step() -> u32 {
    15
}
fn default_frequency() -> f32 {
    0.01
}

/// What to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scene {
    /// Segments fanning out from the grid center.
    Radial {
        /// Segment length; defaults to half the grid diagonal.
        #[serde(default)]
        radius: Option<f32>,
        /// Degrees between segments.
        #[serde(default = "default_angle_step")]
        angle_step: u32,
    },
    /// A sine wave sampled per column.
    Sine {
        /// Peak displacement; defaults to 28% of the grid height.
        #[serde(default)]
        amplitude: Option<f32>,
        /// Angular frequency per pixel.
        #[serde(default = "default_frequency")]
        frequency: f32,
        /// Phase offset in radians.
        #[serde(default)]
        phase: f32,
    },
    /// A single segment.
    Segment {
        /// Start x.
        x0: f32,
        /// Start y.
        y0: f32,
        /// End x.
        x1: f32,
        /// End y.
        y1: f32,
    },
}

impl Default for Scene {
    fn default() -> Self {
        Self::Radial { radius: None, angle_step: default_angle_step() }
    }
}

/// Output of both rasterizers for one scene.
#[derive(Debug, Clone, Default)]
pub struct SceneSamples {
    /// Bresenham pixels.
    pub aliased: Vec<AliasedSample>,
    /// Wu (or per-column) coverage pixels.
    pub coverage: Vec<PixelSample>,
}

impl Scene {
    /// Rasterize the scene for `grid`, coloring coverage samples with `color`.
    ///
    /// # Errors
    ///
    /// Returns an error if a generator parameter is invalid.
    pub fn samples(&self, grid: Grid, color: Rgb) -> Result<SceneSamples> {
        let aliased = AliasedRasterizer::new(grid);
        let antialiased = AntialiasedRasterizer::new(grid).color(color);

        let samples = match *self {
            Self::Radial { radius, angle_step } => {
                let center = Point::new(grid.width() as f32 / 2.0, grid.height() as f32 / 2.0);
                let radius = radius.unwrap_or_else(|| center.distance(Point::ORIGIN));
                let lines = radial_fan(center, radius, angle_step)?;
                SceneSamples {
                    aliased: aliased.rasterize_all(&lines),
                    coverage: antialiased.rasterize_all(&lines),
                }
            }
            Self::Sine { amplitude, frequency, phase } => {
                let mut wave = SineWave::across(grid).frequency(frequency).phase(phase);
                if let Some(amplitude) = amplitude {
                    wave = wave.amplitude(amplitude);
                }
                wave.validate()?;
                SceneSamples {
                    aliased: wave.aliased_samples(),
                    coverage: wave.coverage_samples(color),
                }
            }
            Self::Segment { x0, y0, x1, y1 } => {
                ensure_finite("x0", x0)?;
                ensure_finite("y0", y0)?;
                ensure_finite("x1", x1)?;
                ensure_finite("y1", y1)?;
                let line = Line::from_coords(x0, y0, x1, y1);
                SceneSamples {
                    aliased: aliased.rasterize_line(&line),
                    coverage: antialiased.rasterize_line(&line),
                }
            }
        };

        tracing::debug!(
            scene = ?self,
            aliased = samples.aliased.len(),
            coverage = samples.coverage.len(),
            "scene rasterized"
        );
        Ok(samples)
    }
}
