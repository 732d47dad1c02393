#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the line rasterizers and the comparison sheet.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_lines::prelude::*;

fn bresenham_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bresenham");

    for length in [10, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            b.iter(|| bresenham(black_box(0), black_box(0), black_box(length), black_box(length / 3)));
        });
    }

    group.finish();
}

fn wu_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("wu");

    for length in [10, 100, 1_000, 10_000] {
        let end = length as f32 + 0.37;
        group.bench_with_input(BenchmarkId::from_parameter(length), &end, |b, &end| {
            b.iter(|| {
                wu(black_box(0.25), black_box(0.5), black_box(end), black_box(end / 3.0), Rgb::WHITE)
            });
        });
    }

    group.finish();
}

fn scene_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison_sheet");

    for (width, height) in [(160, 90), (640, 360), (1280, 720)] {
        let grid = Grid::new(width, height).expect("valid grid");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &grid,
            |b, &grid| {
                b.iter(|| {
                    let samples = Scene::default()
                        .samples(black_box(grid), Rgb::MAGENTA)
                        .expect("scene should rasterize");
                    ComparisonSheet::new(grid)
                        .render(&samples.aliased, &samples.coverage)
                        .expect("sheet should render")
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bresenham_benchmark, wu_benchmark, scene_benchmark);
criterion_main!(benches);
