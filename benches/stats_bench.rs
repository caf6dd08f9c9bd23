//! Benchmarks for the stats transforms and page composition
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use regiondash::dataset::sample;
use regiondash::pages::RegionInfo;
use regiondash::router::{render, Topic};
use regiondash::stats;

fn synthetic_columns(len: usize, count: usize) -> Vec<Vec<f64>> {
    (0..count)
        .map(|c| {
            (0..len)
                .map(|i| (i as f64 * 0.37 + c as f64).sin() * 10.0 + i as f64)
                .collect()
        })
        .collect()
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");

    for size in [60, 600, 6000] {
        let columns = synthetic_columns(size, 5);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("correlation_matrix_{}", size), |b| {
            b.iter(|| stats::correlation_matrix(black_box(&columns)))
        });

        group.bench_function(format!("linear_trend_{}", size), |b| {
            b.iter(|| stats::linear_trend(black_box(&columns[0])))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let dataset = sample::dataset();
    let region = RegionInfo::default();

    for &topic in Topic::all() {
        group.bench_function(format!("compose_{}", topic), |b| {
            b.iter(|| render(black_box(topic), black_box(&dataset), black_box(&region)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stats, bench_render);
criterion_main!(benches);
