// File: crates/plot-core/benches/heatmap_bench.rs
// Summary: Benchmarks for per-pixel heat map rasterization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot_core::{HeatMap, HeatMapView, Interval};

fn build_view() -> HeatMapView {
    let map = HeatMap::new(
        Interval::new(-2.0, 2.0),
        Interval::new(-2.0, 2.0),
        Interval::new(-1.0, 1.0),
        |x, y| (x * 3.0).sin() * (y * 3.0).cos(),
    );
    HeatMapView::new(map)
}

fn bench_heatmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_to_rgba8");
    for &size in &[64usize, 256] {
        group.bench_function(format!("{size}x{size}"), |b| {
            let view = build_view();
            b.iter(|| black_box(view.render_to_rgba8(size, size)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_heatmap);
criterion_main!(benches);
