//! Benchmarks for the period fold engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use transit_search::fold::{fold_periods, FoldConfig};

fn correlation_series(n: usize, period: usize) -> Vec<f64> {
    (0..n)
        .map(|k| {
            if k % period == 0 {
                6.0
            } else {
                0.05 * ((k % 11) as f64 - 5.0)
            }
        })
        .collect()
}

fn period_grid(count: usize) -> Vec<f64> {
    (0..count).map(|i| 20.0 + i as f64 * 0.25).collect()
}

fn bench_fold_grid_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold_periods");
    let n = 20_000;
    let correlation = correlation_series(n, 480);
    let normalization = vec![1.0; n];
    let config = FoldConfig::new(1.0, 3);

    for count in [64, 256, 1024, 4096].iter() {
        let periods = period_grid(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                fold_periods(
                    black_box(&correlation),
                    black_box(&normalization),
                    black_box(&periods),
                    &config,
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_fold_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold_resolution");
    let n = 20_000;
    let correlation = correlation_series(n, 480);
    let normalization = vec![1.0; n];
    let periods = period_grid(256);

    for delta_lag in [0.25, 0.5, 1.0, 2.0].iter() {
        let config = FoldConfig::new(*delta_lag, 3);
        group.bench_with_input(
            BenchmarkId::from_parameter(delta_lag),
            delta_lag,
            |b, _| {
                b.iter(|| {
                    fold_periods(
                        black_box(&correlation),
                        black_box(&normalization),
                        black_box(&periods),
                        &config,
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fold_grid_sizes, bench_fold_resolution);
criterion_main!(benches);
