// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Criterion benchmarks for filtering, index building, and sorting.
//!
//! Run with: `cargo bench -p bookcase_benches --bench search`

use bookcase_catalog::{BookRecord, Catalog, SortKey};
use bookcase_search::SearchIndex;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const WORDS: [&str; 16] = [
    "river", "shadow", "garden", "winter", "empire", "letters", "stone", "night", "ocean",
    "silver", "house", "mountain", "glass", "station", "orchard", "kingdom",
];
const AUTHORS: [&str; 8] = [
    "Tolkien", "Güntekin", "Austen", "Herbert", "Morrison", "Eliot", "Atay", "Lem",
];

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_index(&mut self, upper: usize) -> usize {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) as usize) % upper
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "year offsets are below 220"
)]
fn catalog(len: usize) -> Catalog {
    let mut rng = Lcg(0x5eed);
    Catalog::new((0..len).map(|i| {
        let title = format!(
            "The {} of the {} {}",
            WORDS[rng.next_index(WORDS.len())],
            WORDS[rng.next_index(WORDS.len())],
            i
        );
        BookRecord::new(format!("book-{i}"), title)
            .with_author(AUTHORS[rng.next_index(AUTHORS.len())])
            .with_published(1800 + (rng.next_index(220) as i32))
    }))
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("search/filter");
    for len in [1_000usize, 10_000] {
        let catalog = catalog(len);
        let index = SearchIndex::new(&catalog);
        group.throughput(Throughput::Elements(len as u64));

        // Substring hits short-circuit before any edit distance runs.
        group.bench_with_input(BenchmarkId::new("substring", len), &index, |b, index| {
            b.iter(|| black_box(index.filter(black_box("garden tolkien"))));
        });

        // Misspellings fall through to the per-token edit distance.
        group.bench_with_input(BenchmarkId::new("fuzzy", len), &index, |b, index| {
            b.iter(|| black_box(index.filter(black_box("gardn tolkein"))));
        });

        group.bench_with_input(BenchmarkId::new("miss", len), &index, |b, index| {
            b.iter(|| black_box(index.filter(black_box("zzyzx"))));
        });
    }
    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let catalog = catalog(10_000);
    c.bench_function("search/index_build/10000", |b| {
        b.iter(|| black_box(SearchIndex::new(black_box(&catalog))));
    });
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("search/sort");
    let catalog = catalog(10_000);
    for key in SortKey::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(key), &key, |b, &key| {
            b.iter_batched(
                || catalog.view_all(),
                |mut list| {
                    list.sort_by(key);
                    black_box(list);
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_filter, bench_index_build, bench_sort);
criterion_main!(benches);
