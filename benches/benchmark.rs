//! S-Map benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Embedding cost across series lengths and lag schedules
//! - Prediction scalability (library size)
//! - Locality (theta) and neighborhood size (k)
//! - Embedding dimension
//! - Sequential vs parallel execution
//! - Pathological cases (gappy series, periodic duplicates)
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use smap_rs::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Noisy logistic map, a standard chaotic benchmark series.
fn generate_logistic_series(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.01).unwrap();

    let mut x = 0.4;
    (0..size)
        .map(|_| {
            x = 3.8 * x * (1.0 - x);
            x + noise_dist.sample(&mut rng)
        })
        .collect()
}

/// Series with 10% of observations missing (NaN).
fn generate_gappy_series(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let gap_dist = Uniform::new(0.0, 1.0).unwrap();

    generate_logistic_series(size, seed)
        .into_iter()
        .map(|v| {
            if gap_dist.sample(&mut rng) < 0.1 {
                f64::NAN
            } else {
                v
            }
        })
        .collect()
}

/// One-step-ahead target aligned with `series`.
fn one_step_target(series: &[f64]) -> Vec<f64> {
    series[1..].iter().copied().chain([f64::NAN]).collect()
}

/// First half library, second half prediction.
fn split(size: usize, skip: usize) -> (Vec<usize>, Vec<usize>) {
    let mid = size / 2;
    ((skip..mid).collect(), (mid..size - 1).collect())
}

// ============================================================================
// Embedding Benchmarks
// ============================================================================

fn bench_embedding(c: &mut Criterion) {
    let mut group = c.benchmark_group("embedding");
    group.sample_size(100);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let series = generate_logistic_series(size, 42);

        for (name, tau, style) in [
            ("inclusive_tau1", 1, Inclusive),
            ("shifted_tau3", 3, Shifted),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| embed(black_box(&series), 4, tau, style).unwrap())
            });
        }
    }
    group.finish();
}

// ============================================================================
// Prediction Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for size in [500, 1_000, 2_000, 5_000] {
        group.throughput(Throughput::Elements((size / 2) as u64));

        let series = generate_logistic_series(size, 42);
        let target = one_step_target(&series);
        let matrix = embed(&series, 3, 1, Inclusive).unwrap();
        let (library, prediction) = split(size, 2);

        group.bench_with_input(BenchmarkId::new("predict", size), &size, |b, _| {
            b.iter(|| {
                SMap::new()
                    .neighbors(4)
                    .theta(2.0)
                    .build()
                    .unwrap()
                    .predict(
                        black_box(&matrix),
                        black_box(&target),
                        &library,
                        &prediction,
                    )
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_theta(c: &mut Criterion) {
    let mut group = c.benchmark_group("theta");
    group.sample_size(50);

    let size = 1_000;
    let series = generate_logistic_series(size, 42);
    let target = one_step_target(&series);
    let matrix = embed(&series, 3, 1, Inclusive).unwrap();
    let (library, prediction) = split(size, 2);

    for theta in [0.0, 0.5, 2.0, 8.0] {
        group.bench_with_input(BenchmarkId::new("predict", theta), &theta, |b, &theta| {
            b.iter(|| {
                predict_smap(
                    black_box(&matrix),
                    black_box(&target),
                    &library,
                    &prediction,
                    4,
                    theta,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");
    group.sample_size(50);

    let size = 1_000;
    let series = generate_logistic_series(size, 42);
    let target = one_step_target(&series);
    let matrix = embed(&series, 3, 1, Inclusive).unwrap();
    let (library, prediction) = split(size, 2);

    for k in [4, 16, 64, 250] {
        group.bench_with_input(BenchmarkId::new("predict", k), &k, |b, &k| {
            b.iter(|| {
                predict_smap(
                    black_box(&matrix),
                    black_box(&target),
                    &library,
                    &prediction,
                    k,
                    2.0,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimensions");
    group.sample_size(50);

    let size = 1_000;
    let series = generate_logistic_series(size, 42);
    let target = one_step_target(&series);

    for dimension in [1, 2, 4, 8] {
        let matrix = embed(&series, dimension, 1, Inclusive).unwrap();
        let (library, prediction) = split(size, dimension);

        group.bench_with_input(BenchmarkId::new("predict", dimension), &dimension, |b, &e| {
            b.iter(|| {
                predict_smap(
                    black_box(&matrix),
                    black_box(&target),
                    &library,
                    &prediction,
                    e + 1,
                    2.0,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_execution_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution_mode");
    group.sample_size(20);

    let size = 4_000;
    let series = generate_logistic_series(size, 42);
    let target = one_step_target(&series);
    let matrix = embed(&series, 3, 1, Inclusive).unwrap();
    let (library, prediction) = split(size, 2);

    for (name, parallel) in [("sequential", false), ("parallel", true)] {
        let model = SMap::new()
            .neighbors(4)
            .theta(2.0)
            .parallel(parallel)
            .build()
            .unwrap();

        group.bench_function(name, |b| {
            b.iter(|| {
                model
                    .predict(
                        black_box(&matrix),
                        black_box(&target),
                        &library,
                        &prediction,
                    )
                    .unwrap()
            })
        });
    }
    group.finish();
}

// ============================================================================
// Pathological Cases
// ============================================================================

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(50);

    let size = 1_000;

    // Missing observations force partial-overlap distances
    group.bench_function("gappy", |b| {
        let series = generate_gappy_series(size, 42);
        let target = one_step_target(&series);
        let matrix = embed(&series, 3, 1, Inclusive).unwrap();
        let (library, prediction) = split(size, 0);

        b.iter(|| {
            predict_smap(
                black_box(&matrix),
                black_box(&target),
                &library,
                &prediction,
                4,
                2.0,
            )
            .unwrap()
        })
    });

    // Exactly repeating states produce rank-deficient local systems
    group.bench_function("periodic_duplicates", |b| {
        let series: Vec<f64> = (0..size).map(|t| [0.0, 1.0, 0.0, -1.0][t % 4]).collect();
        let target = one_step_target(&series);
        let matrix = embed(&series, 3, 1, Inclusive).unwrap();
        let (library, prediction) = split(size, 2);

        b.iter(|| {
            predict_smap(
                black_box(&matrix),
                black_box(&target),
                &library,
                &prediction,
                8,
                2.0,
            )
            .unwrap()
        })
    });

    // Skill scoring on top of prediction
    group.bench_function("behavior", |b| {
        let series = generate_logistic_series(size, 7);
        let target = one_step_target(&series);
        let matrix = embed(&series, 3, 1, Inclusive).unwrap();
        let (library, prediction) = split(size, 2);

        b.iter(|| {
            behavior_score(
                black_box(&matrix),
                black_box(&target),
                &library,
                &prediction,
                4,
                2.0,
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_embedding,
    bench_scalability,
    bench_theta,
    bench_neighbors,
    bench_dimensions,
    bench_execution_mode,
    bench_pathological,
);

criterion_main!(benches);
