//! Side-by-side comparison of the two rasterizers.
//!
//! The sheet is a 2x2 grid of cells, each the size of the target grid:
//!
//! | | light background | dark background |
//! |---|---|---|
//! | Bresenham | top-left, black | bottom-left, yellow |
//! | Wu | top-right | bottom-right |

use super::{FramebufferRenderer, Renderer};
use crate::color::{Rgb, Rgba};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Grid;
use crate::raster::{AliasedSample, PixelSample};

#[derive(Debug, Clone, Copy)]
enum Content {
    Aliased(Rgb),
    Coverage,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    column: u32,
    row: u32,
    background: Rgba,
    content: Content,
}

const CELLS: [Cell; 4] = [
    Cell { column: 0, row: 0, background: Rgba::WHITE, content: Content::Aliased(Rgb::BLACK) },
    Cell { column: 0, row: 1, background: Rgba::BLACK, content: Content::Aliased(Rgb::YELLOW) },
    Cell { column: 1, row: 0, background: Rgba::WHITE, content: Content::Coverage },
    Cell { column: 1, row: 1, background: Rgba::BLACK, content: Content::Coverage },
];

/// Renders aliased and coverage samples of the same scene into one image.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonSheet {
    grid: Grid,
}

impl ComparisonSheet {
    /// Create a sheet whose cells match `grid`.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Size of the full sheet in pixels.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.grid.width().saturating_mul(2), self.grid.height().saturating_mul(2))
    }

    /// Draw both sample sets into a new framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if a framebuffer cannot be created.
    pub fn render(&self, aliased: &[AliasedSample], coverage: &[PixelSample]) -> Result<Framebuffer> {
        let (width, height) = self.dimensions();
        let mut sheet = Framebuffer::new(width, height)?;
        let mut cell_fb = Framebuffer::for_grid(self.grid)?;

        for cell in CELLS {
            cell_fb.clear(cell.background);
            let mut renderer = FramebufferRenderer::new(&mut cell_fb);
            match cell.content {
                Content::Aliased(color) => renderer.draw_points(aliased, color),
                Content::Coverage => renderer.draw_coverage(coverage),
            }
            tracing::debug!(
                column = cell.column,
                row = cell.row,
                stats = ?renderer.stats(),
                "comparison cell"
            );
            sheet.blit(&cell_fb, cell.column * self.grid.width(), cell.row * self.grid.height());
        }

        Ok(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{bresenham, wu};

    #[test]
    fn test_sheet_dimensions() {
        let sheet = ComparisonSheet::new(Grid::new(64, 36).unwrap());
        assert_eq!(sheet.dimensions(), (128, 72));
    }

    #[test]
    fn test_sheet_cells() {
        let grid = Grid::new(8, 8).unwrap();
        let aliased = bresenham(0, 0, 7, 0);
        let coverage = wu(0.0, 0.0, 7.0, 0.0, Rgb::MAGENTA);

        let fb = ComparisonSheet::new(grid).render(&aliased, &coverage).unwrap();

        // Grid row 0 is the bottom row of each cell.
        assert_eq!(fb.get_pixel(3, 7), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(3, 6), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(3, 15), Some(Rgba::rgb(255, 255, 0)));
        assert_eq!(fb.get_pixel(3, 14), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(11, 7), Some(Rgba::rgb(255, 0, 255)));
        assert_eq!(fb.get_pixel(11, 15), Some(Rgba::rgb(255, 0, 255)));
        assert_eq!(fb.get_pixel(11, 14), Some(Rgba::BLACK));
    }
}
