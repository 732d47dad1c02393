//! Software renderer over a [`Framebuffer`].

use super::Renderer;
use crate::color::Rgb;
use crate::framebuffer::Framebuffer;
use crate::raster::{AliasedSample, PixelSample};

/// Counters kept by [`FramebufferRenderer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Samples written to the framebuffer.
    pub drawn: usize,
    /// Samples outside the framebuffer.
    pub clipped: usize,
    /// Zero-coverage samples that were not blended.
    pub skipped: usize,
}

/// Draws samples into a framebuffer.
///
/// Grid row 0 is the bottom row of the image by default, matching the
/// y-up convention of normalized device coordinates.
#[derive(Debug)]
pub struct FramebufferRenderer<'a> {
    fb: &'a mut Framebuffer,
    flip_y: bool,
    stats: RenderStats,
}

impl<'a> FramebufferRenderer<'a> {
    /// Create a renderer drawing into `fb`.
    pub fn new(fb: &'a mut Framebuffer) -> Self {
        Self { fb, flip_y: true, stats: RenderStats::default() }
    }

    /// Draw grid row 0 at the top of the image instead of the bottom.
    #[must_use]
    pub fn y_down(mut self) -> Self {
        self.flip_y = false;
        self
    }

    /// Counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Map a grid pixel to a framebuffer pixel, or `None` if clipped.
    fn target(&self, px: i32, py: i32) -> Option<(u32, u32)> {
        let (x, y) = (u32::try_from(px).ok()?, u32::try_from(py).ok()?);
        if x >= self.fb.width() || y >= self.fb.height() {
            return None;
        }
        let row = if self.flip_y { self.fb.height() - 1 - y } else { y };
        Some((x, row))
    }
}

impl Renderer for FramebufferRenderer<'_> {
    fn draw_coverage(&mut self, samples: &[PixelSample]) {
        for sample in samples {
            let Some((x, y)) = self.target(sample.px, sample.py) else {
                self.stats.clipped += 1;
                continue;
            };
            if sample.coverage <= 0.0 {
                self.stats.skipped += 1;
                continue;
            }
            self.fb.blend_pixel(x, y, sample.color.to_rgba(sample.coverage));
            self.stats.drawn += 1;
        }
    }

    fn draw_points(&mut self, samples: &[AliasedSample], color: Rgb) {
        let rgba = color.to_rgba(1.0);
        for sample in samples {
            match self.target(sample.px, sample.py) {
                Some((x, y)) => {
                    self.fb.set_pixel(x, y, rgba);
                    self.stats.drawn += 1;
                }
                None => self.stats.clipped += 1,
            }
        }
    }
}
