//! Point vertices in normalized device coordinates.

use super::Renderer;
use crate::color::Rgb;
use crate::geometry::Grid;
use crate::raster::{AliasedSample, PixelSample};

/// One coverage point: NDC position, color, and coverage as alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct NdcVertex {
    /// NDC x.
    pub x: f32,
    /// NDC y.
    pub y: f32,
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Coverage.
    pub alpha: f32,
}

/// Collects samples as NDC vertices for a point-list draw call.
///
/// Nothing is clipped: the pipeline's viewport discards off-screen points.
#[derive(Debug, Clone)]
pub struct VertexBuffer {
    grid: Grid,
    vertices: Vec<NdcVertex>,
    points: Vec<[f32; 2]>,
}

impl VertexBuffer {
    /// Floats per coverage vertex in [`VertexBuffer::interleaved`].
    pub const STRIDE: usize = 6;

    /// Create an empty buffer for `grid`.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self { grid, vertices: Vec::new(), points: Vec::new() }
    }

    /// Coverage vertices in submission order.
    #[must_use]
    pub fn vertices(&self) -> &[NdcVertex] {
        &self.vertices
    }

    /// Aliased point positions in submission order.
    #[must_use]
    pub fn points(&self) -> &[[f32; 2]] {
        &self.points
    }

    /// Coverage vertices flattened as `x, y, r, g, b, alpha` per vertex.
    #[must_use]
    pub fn interleaved(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| [v.x, v.y, v.r, v.g, v.b, v.alpha]).collect()
    }

    /// Drop all collected geometry, keeping allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.points.clear();
    }
}

impl Renderer for VertexBuffer {
    fn draw_coverage(&mut self, samples: &[PixelSample]) {
        self.vertices.reserve(samples.len());
        for s in samples {
            let (x, y) = self.grid.to_ndc(s.px, s.py);
            self.vertices.push(NdcVertex {
                x,
                y,
                r: s.color.r,
                g: s.color.g,
                b: s.color.b,
                alpha: s.coverage,
            });
        }
    }

    /// The color is a per-draw constant and is not stored per point.
    fn draw_points(&mut self, samples: &[AliasedSample], _color: Rgb) {
        let grid = self.grid;
        self.points.extend(samples.iter().map(|s| {
            let (x, y) = grid.to_ndc(s.px, s.py);
            [x, y]
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_vertices_in_ndc() {
        let grid = Grid::new(4, 2).unwrap();
        let mut buffer = VertexBuffer::new(grid);
        buffer.draw_coverage(&[PixelSample::new(0, 0, 0.25, Rgb::MAGENTA)]);

        assert_eq!(
            buffer.vertices(),
            &[NdcVertex { x: -0.75, y: -0.5, r: 1.0, g: 0.0, b: 1.0, alpha: 0.25 }]
        );
        assert_eq!(buffer.interleaved(), vec![-0.75, -0.5, 1.0, 0.0, 1.0, 0.25]);
    }

    #[test]
    fn test_points_not_clipped() {
        let grid = Grid::new(2, 2).unwrap();
        let mut buffer = VertexBuffer::new(grid);
        buffer.draw_points(&[AliasedSample::new(1, 1), AliasedSample::new(3, -1)], Rgb::BLACK);

        assert_eq!(buffer.points(), &[[0.5, 0.5], [2.5, -1.5]]);
        buffer.clear();
        assert!(buffer.points().is_empty());
    }

    #[test]
    fn test_interleaved_stride() {
        let grid = Grid::new(16, 16).unwrap();
        let mut buffer = VertexBuffer::new(grid);
        buffer.draw_coverage(&crate::raster::wu(1.0, 1.0, 9.0, 4.0, Rgb::WHITE));
        assert_eq!(buffer.interleaved().len(), buffer.vertices().len() * VertexBuffer::STRIDE);
    }
}
