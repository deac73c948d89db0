// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Criterion benchmarks for one frame of each simulation.
//!
//! Run with: `cargo bench -p bookcase_benches --bench physics`

use bookcase_input::keys::Direction;
use bookcase_physics::coverflow::CoverflowPhysicsState;
use bookcase_physics::shelf::ShelfPhysicsState;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn bench_coverflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("physics/coverflow_frame");
    for materialized in [50usize, 5_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(materialized),
            &materialized,
            |b, &materialized| {
                let mut cf = CoverflowPhysicsState::default();
                cf.start(0.0);
                cf.press(Direction::Right);
                let mut now = 0.0;
                b.iter(|| {
                    now += FRAME_MS;
                    let step = cf.step(now, materialized);
                    let placed = cf.placements(materialized).count();
                    black_box((step, placed))
                });
            },
        );
    }
    group.finish();
}

fn bench_shelf(c: &mut Criterion) {
    c.bench_function("physics/shelf_frame", |b| {
        let mut shelf = ShelfPhysicsState::default();
        shelf.press(Direction::Right);
        let mut now = 0.0;
        let mut scroll = 0.0;
        b.iter(|| {
            now += FRAME_MS;
            let dt = shelf.begin_frame(now);
            if let Some(delta) = shelf.momentum(dt) {
                scroll += delta;
            }
            shelf.decay_wheel_boost();
            black_box(shelf.observe_scroll(scroll, dt))
        });
    });
}

criterion_group!(benches, bench_coverflow, bench_shelf);
criterion_main!(benches);
