//! Benchmarks for Hilbert point lookup and full path generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hilbertpath::{CurvePath, HilbertCurve};

/// Orders to benchmark; cost doubles in bit-steps and quadruples in points.
const ORDERS: [u32; 5] = [2, 4, 6, 8, 10];

/// Benchmark the `point` operation (index -> coordinates) across orders.
fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point");

    for order in ORDERS {
        let curve = HilbertCurve::new(order).expect("valid order");
        let midpoint = curve.length() / 2;

        group.bench_function(BenchmarkId::new("order", order), |b| {
            b.iter(|| curve.point(black_box(midpoint)))
        });
    }

    group.finish();
}

/// Benchmark generating the complete path for a curve.
fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");

    for order in [2, 4, 6, 8] {
        group.bench_function(BenchmarkId::new("order", order), |b| {
            b.iter(|| CurvePath::generate(black_box(order)))
        });
    }

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_point, bench_path);
}

pub use bench_defs::benches;
criterion_main!(benches);
