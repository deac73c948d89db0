// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Criterion benchmarks for batch loading, measuring, and culling.
//!
//! Run with: `cargo bench -p bookcase_benches --bench loader`

use bookcase_virtual_list::{IncrementalLoader, LayoutBox};
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const SPINE: f64 = 40.0;

#[expect(
    clippy::cast_possible_truncation,
    reason = "benchmark lengths fit in u32"
)]
fn measured_loader(len: usize) -> IncrementalLoader<u32> {
    let mut loader = IncrementalLoader::new(50);
    loader.reset(0..len as u32);
    loader.ensure_loaded_through(len.saturating_sub(1));
    loader.measure(|i, _| Some(LayoutBox::new(i as f64 * SPINE, SPINE)));
    loader
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "benchmark lengths fit in u32"
)]
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader/ensure_loaded_through");
    for len in [1_000usize, 20_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut loader = IncrementalLoader::new(50);
                    loader.reset(0..len as u32);
                    loader
                },
                |mut loader| {
                    loader.ensure_loaded_through(len - 1);
                    black_box(loader);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader/measure");
    for len in [1_000usize, 20_000] {
        let mut loader = measured_loader(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                loader.measure(|i, _| Some(LayoutBox::new(i as f64 * SPINE, SPINE)));
            });
        });
    }
    group.finish();
}

fn bench_cull(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader/visible_in");
    // Culling is a linear scan over materialized items; this tracks its cost
    // at catalog sizes where the shelf loop runs it every frame.
    for len in [1_000usize, 20_000] {
        let loader = measured_loader(len);
        let mid = len as f64 * SPINE / 2.0;
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                black_box(
                    loader
                        .visible_in(black_box(mid), 1280.0, 280.0)
                        .count(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_measure, bench_cull);
criterion_main!(benches);
