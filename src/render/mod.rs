//! Renderers that turn rasterizer output into drawn pixels.
//!
//! The rasterizers stop at sample sequences. A [`Renderer`] draws them:
//! coverage is used as an alpha-blend factor, aliased samples are drawn at
//! full intensity, and out-of-grid indices are discarded here.
//!
//! - [`FramebufferRenderer`]: software blending into a [`Framebuffer`](crate::framebuffer::Framebuffer)
//! - [`VertexBuffer`]: NDC point vertices ready for a GPU upload
//! - [`ComparisonSheet`]: side-by-side aliased/anti-aliased image

mod compare;
mod software;
mod vertex;

pub use compare::ComparisonSheet;
pub use software::{FramebufferRenderer, RenderStats};
pub use vertex::{NdcVertex, VertexBuffer};

use crate::color::Rgb;
use crate::raster::{AliasedSample, PixelSample};

/// Consumer of rasterizer output.
pub trait Renderer {
    /// Draw coverage samples, blending each with its coverage as alpha.
    fn draw_coverage(&mut self, samples: &[PixelSample]);

    /// Draw aliased samples at full intensity in a single color.
    fn draw_points(&mut self, samples: &[AliasedSample], color: Rgb);
}
