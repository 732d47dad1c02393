//! Golden-output tests for the rasterizers and the render pipeline.
//!
//! Run: cargo test --test golden_lines_test
#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use trueno_lines::prelude::*;
use trueno_lines::raster::{wu_steps, StepKind};

fn grid() -> Grid {
    Grid::new(64, 64).unwrap()
}

// ============================================================================
// Degenerate and axis-aligned segments
// ============================================================================

#[test]
fn degenerate_point_emits_cap_pair_twice() {
    let samples = AntialiasedRasterizer::new(grid()).rasterize(5.0, 5.0, 5.0, 5.0);

    assert_eq!(samples.len(), 4);
    for pair in samples.chunks_exact(2) {
        assert_eq!((pair[0].px, pair[0].py, pair[0].coverage), (5, 5, 1.0));
        assert_eq!((pair[1].px, pair[1].py, pair[1].coverage), (5, 6, 0.0));
    }
}

#[test]
fn degenerate_subpixel_point_scales_caps_by_gap() {
    let (_, steps) = wu_steps(5.25, 7.5, 5.25, 7.5);
    assert_eq!(steps.len(), 2);
    assert_eq!((steps[0].major, steps[0].minor), (5, 7));
    assert_eq!((steps[1].major, steps[1].minor), (6, 8));
    // Unit gradient moves both caps off row 7.5; gaps are 0.75 and 0.25.
    assert_abs_diff_eq!(steps[0].total(), 0.75, epsilon = 1e-6);
    assert_abs_diff_eq!(steps[0].low, 0.5625, epsilon = 1e-6);
    assert_abs_diff_eq!(steps[1].total(), 0.25, epsilon = 1e-6);
    assert_abs_diff_eq!(steps[1].high, 0.0625, epsilon = 1e-6);
}

#[test]
fn horizontal_line() {
    let aliased = AliasedRasterizer::new(grid()).rasterize(0, 10, 5, 10);
    assert_eq!(aliased, (0..=5).map(|x| AliasedSample::new(x, 10)).collect::<Vec<_>>());

    let samples = AntialiasedRasterizer::new(grid()).rasterize(0.0, 10.0, 5.0, 10.0);
    assert_eq!(samples.len(), 12);
    for (x, pair) in samples.chunks_exact(2).enumerate() {
        assert_eq!((pair[0].px, pair[0].py, pair[0].coverage), (x as i32, 10, 1.0));
        assert_eq!((pair[1].px, pair[1].py, pair[1].coverage), (x as i32, 11, 0.0));
    }
}

#[test]
fn vertical_line_is_steep() {
    let samples = wu(3.0, 0.0, 3.0, 4.0, Rgb::WHITE);
    for pair in samples.chunks_exact(2) {
        assert_eq!((pair[0].px, pair[0].coverage), (3, 1.0));
        assert_eq!((pair[1].px, pair[1].coverage), (4, 0.0));
        assert_eq!(pair[0].py, pair[1].py);
    }
    let rows: Vec<i32> = samples.chunks_exact(2).map(|p| p[0].py).collect();
    assert_eq!(rows, vec![0, 1, 2, 3, 4]);
}

#[test]
fn diagonal_line() {
    let diagonal: Vec<AliasedSample> = (0..=10).map(|i| AliasedSample::new(i, i)).collect();
    assert_eq!(bresenham(0, 0, 10, 10), diagonal);

    let samples = wu(0.0, 0.0, 10.0, 10.0, Rgb::WHITE);
    let primary: Vec<AliasedSample> =
        samples.chunks_exact(2).map(|p| AliasedSample::new(p[0].px, p[0].py)).collect();
    assert_eq!(primary, diagonal);
    assert!(samples.chunks_exact(2).all(|p| p[0].coverage == 1.0 && p[1].coverage == 0.0));
}

// ============================================================================
// Emission order and coverage values
// ============================================================================

#[test]
fn emission_order_start_spans_end() {
    let (_, steps) = wu_steps(0.0, 0.0, 6.0, 2.0);
    let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind).collect();
    assert_eq!(kinds.first(), Some(&StepKind::StartCap));
    assert_eq!(kinds.last(), Some(&StepKind::EndCap));
    assert!(kinds[1..kinds.len() - 1].iter().all(|k| *k == StepKind::Span));
    let majors: Vec<i32> = steps.iter().map(|s| s.major).collect();
    assert_eq!(majors, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn gradient_one_third() {
    let samples = wu(0.0, 0.0, 3.0, 1.0, Rgb::WHITE);
    // Column 1: intery = 1/3
    assert_eq!((samples[2].px, samples[2].py), (1, 0));
    assert_abs_diff_eq!(samples[2].coverage, 2.0 / 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(samples[3].coverage, 1.0 / 3.0, epsilon = 1e-6);
    // Column 2: intery = 2/3
    assert_abs_diff_eq!(samples[4].coverage, 1.0 / 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(samples[5].coverage, 2.0 / 3.0, epsilon = 1e-6);
}

#[test]
fn crossing_quadrants_keeps_split_orientation() {
    // y passes through zero between columns
    let samples = wu(-2.0, -1.0, 2.0, 1.0, Rgb::WHITE);
    let column = |x: i32| {
        samples.iter().filter(|s| s.px == x).map(|s| (s.py, s.coverage)).collect::<Vec<_>>()
    };
    assert_eq!(column(-1), vec![(-1, 0.5), (0, 0.5)]);
    assert_eq!(column(0), vec![(0, 1.0), (1, 0.0)]);
    assert_eq!(column(1), vec![(0, 0.5), (1, 0.5)]);
}

#[test]
fn diagonal_tie_is_shallow_both_ways() {
    use std::collections::HashSet;
    use trueno_lines::raster::Orientation;

    let (forward, _) = wu_steps(0.5, 0.0, 4.5, 4.0);
    let (mirrored, _) = wu_steps(0.0, 0.5, 4.0, 4.5);
    assert_eq!(forward, Orientation::Shallow);
    assert_eq!(mirrored, Orientation::Shallow);

    // Both walk columns, so swapping the axes of one does not reproduce the other.
    let transposed: HashSet<_> = wu(0.5, 0.0, 4.5, 4.0, Rgb::WHITE)
        .iter()
        .map(|s| (s.py, s.px, s.coverage.to_bits()))
        .collect();
    let other: HashSet<_> = wu(0.0, 0.5, 4.0, 4.5, Rgb::WHITE)
        .iter()
        .map(|s| (s.px, s.py, s.coverage.to_bits()))
        .collect();
    assert_ne!(transposed, other);
}

#[test]
fn reproducible_output() {
    let a = wu(1.7, 3.3, 40.2, 22.9, Rgb::MAGENTA);
    let b = wu(1.7, 3.3, 40.2, 22.9, Rgb::MAGENTA);
    assert_eq!(a, b);
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn framebuffer_intensity_tracks_coverage() {
    let grid = Grid::new(16, 16).unwrap();
    let mut fb = Framebuffer::for_grid(grid).unwrap();
    fb.clear(Rgba::BLACK);

    let samples = AntialiasedRasterizer::new(grid).color(Rgb::WHITE).rasterize(0.0, 4.0, 8.0, 6.0);
    FramebufferRenderer::new(&mut fb).y_down().draw_coverage(&samples);

    // Column 2: intery = 4.5, even split between rows 4 and 5
    let upper = fb.get_pixel(2, 4).unwrap();
    let lower = fb.get_pixel(2, 5).unwrap();
    assert!((i32::from(upper.r) - i32::from(lower.r)).abs() <= 1);
    assert!(upper.r > 120 && upper.r < 135);
    // Column 4 lands exactly on row 5
    assert_eq!(fb.get_pixel(4, 5), Some(Rgba::WHITE));
}

#[test]
fn vertex_buffer_matches_sample_count() {
    let grid = grid();
    let lines = trueno_lines::generator::radial_fan(Point::new(32.0, 32.0), 20.0, 30).unwrap();
    let coverage = AntialiasedRasterizer::new(grid).rasterize_all(&lines);
    let aliased = AliasedRasterizer::new(grid).rasterize_all(&lines);

    let mut buffer = VertexBuffer::new(grid);
    buffer.draw_coverage(&coverage);
    buffer.draw_points(&aliased, Rgb::BLACK);

    assert_eq!(buffer.vertices().len(), coverage.len());
    assert_eq!(buffer.points().len(), aliased.len());
    assert!(buffer.vertices().iter().all(|v| v.x.abs() < 1.0 && v.y.abs() < 1.0));
}

#[test]
fn comparison_sheet_png_roundtrip() {
    let grid = Grid::new(32, 18).unwrap();
    let samples = Scene::default().samples(grid, Rgb::MAGENTA).unwrap();
    let sheet = ComparisonSheet::new(grid).render(&samples.aliased, &samples.coverage).unwrap();
    assert_eq!((sheet.width(), sheet.height()), (64, 36));

    let bytes = trueno_lines::output::PngEncoder::to_bytes(&sheet).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}
