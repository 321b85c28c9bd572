//! Criterion benchmark for the geometry engine.
//! Widths span the clamped-low, proportional, and clamped-high bands.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wheel::layout::panel_placements;
use wheel::{compute_geometry, compute_geometry_with, WheelCfg};

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    for &w in &[375.0f64, 700.0, 1366.0] {
        group.bench_with_input(BenchmarkId::new("compute_geometry", w), &w, |b, &w| {
            b.iter(|| compute_geometry(black_box(w), black_box(w * 1.78)))
        });
    }
    let cfg = WheelCfg::default();
    group.bench_function("compute_geometry_with", |b| {
        b.iter(|| compute_geometry_with(&cfg, black_box(700.0), black_box(1246.0)))
    });
    group.bench_function("panel_placements", |b| {
        let g = compute_geometry(700.0, 1246.0).unwrap();
        b.iter(|| panel_placements(black_box(&g)))
    });
    group.finish();
}

criterion_group!(benches, bench_geometry);
criterion_main!(benches);
