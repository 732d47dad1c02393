//! # Trueno-Lines
//!
//! Line rasterization with and without anti-aliasing.
//!
//! A continuous segment is converted into a discrete set of pixel samples.
//! The aliased path (Bresenham) picks exactly one pixel per step; the
//! anti-aliased path (Wu) picks two adjacent pixels per step and splits the
//! line's intensity between them as fractional coverage.
//!
//! Rasterizers are pure functions: no shared state, no clipping, no I/O.
//! Drawing the samples (blending, clipping, encoding) happens in
//! [`render`] and [`output`].
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_lines::prelude::*;
//!
//! let grid = Grid::new(64, 64)?;
//! let samples = AntialiasedRasterizer::new(grid)
//!     .color(Rgb::WHITE)
//!     .rasterize(2.0, 3.0, 40.0, 17.5);
//!
//! let mut fb = Framebuffer::for_grid(grid)?;
//! fb.clear(Rgba::BLACK);
//! FramebufferRenderer::new(&mut fb).draw_coverage(&samples);
//! # Ok::<(), trueno_lines::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `trueno-lines` command line renderer
//!
//! ## Academic References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Points, segments and the target grid.
pub mod geometry;

/// Aliased and anti-aliased line rasterizers.
pub mod raster;

// ============================================================================
// Rendering Modules
// ============================================================================

/// RGBA framebuffer for software rendering.
pub mod framebuffer;

/// Renderers consuming rasterizer output.
pub mod render;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Application Modules
// ============================================================================

/// Radial fan and sine wave generators.
pub mod generator;

/// Demo scenes.
pub mod scene;

/// YAML configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-lines operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_lines::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Rgb, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Grid, Line, Point};
    pub use crate::raster::{
        bresenham, wu, AliasedRasterizer, AliasedSample, AntialiasedRasterizer, PixelSample,
        Rasterizer,
    };
    pub use crate::render::{ComparisonSheet, FramebufferRenderer, Renderer, VertexBuffer};
    pub use crate::scene::Scene;
}
