//! Criterion benchmarks for search_core strategies.
//!
//! Measures interpolation, binary and hybrid probing on uniformly spaced and
//! exponentially growing data to characterise where interpolation pays off
//! and where it degrades.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use search_core::search::{InterpolationSearch, SearchConfig};

/// Evenly spaced values: the best case for interpolation.
fn generate_uniform_data(n: usize) -> Vec<u64> {
    (0..n as u64).map(|i| i * 7 + 3).collect()
}

/// Exponentially growing values: the worst case for interpolation.
fn generate_exponential_data(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 40.0 / n as f64).exp()).collect()
}

fn engines() -> [(&'static str, InterpolationSearch); 3] {
    [
        (
            "interpolation",
            InterpolationSearch::new(SearchConfig::interpolation()),
        ),
        ("binary", InterpolationSearch::new(SearchConfig::binary())),
        ("hybrid", InterpolationSearch::new(SearchConfig::hybrid())),
    ]
}

/// Benchmark 100 lookups on uniform data.
fn bench_uniform_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_search");

    for size in [1_000, 100_000, 1_000_000] {
        let data = generate_uniform_data(size);
        let targets: Vec<u64> = (0..100).map(|i| data[i * (size - 1) / 99]).collect();

        for (name, engine) in engines() {
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| {
                    for &target in &targets {
                        let _ = engine.search(black_box(data), black_box(target));
                    }
                });
            });
        }
    }

    group.finish();
}

/// Benchmark 100 lookups on exponential data.
fn bench_exponential_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("exponential_search");

    for size in [1_000, 10_000] {
        let data = generate_exponential_data(size);
        let targets: Vec<f64> = (0..100).map(|i| data[i * (size - 1) / 99]).collect();

        for (name, engine) in engines() {
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| {
                    for &target in &targets {
                        let _ = engine.search(black_box(data), black_box(target));
                    }
                });
            });
        }
    }

    group.finish();
}

/// Benchmark a lookup that misses on uniform data.
fn bench_missing_target(c: &mut Criterion) {
    let data = generate_uniform_data(100_000);
    let engine = InterpolationSearch::with_defaults();

    c.bench_function("missing_target_uniform_100000", |b| {
        b.iter(|| engine.search(black_box(&data), black_box(350_001u64)));
    });
}

criterion_group!(
    benches,
    bench_uniform_search,
    bench_exponential_search,
    bench_missing_target
);
criterion_main!(benches);
