// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use rondel_gesture::keys::{KeyNav, NavIntent};
use rondel_gesture::swipe::SwipeTracker;

fn bench_swipe_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/swipe");

    for moves in [4_usize, 32, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            b.iter(|| {
                let mut tracker = SwipeTracker::default();
                tracker.begin(Point::new(0.0, 0.0));
                for i in 0..moves {
                    tracker.update(Point::new(i as f64, (i / 2) as f64));
                }
                black_box(tracker.finish(50.0))
            });
        });
    }

    group.finish();
}

fn bench_key_throttle(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/keys");

    group.bench_function("burst_of_repeats", |b| {
        b.iter(|| {
            let mut nav = KeyNav::new(
                [
                    ("ArrowLeft", NavIntent::Previous),
                    ("ArrowRight", NavIntent::Next),
                ],
                500,
            );
            let mut fired = 0_usize;
            for now in (0..5_000_u64).step_by(16) {
                if nav.on_key_up(black_box(&"ArrowRight"), now).is_some() {
                    fired += 1;
                }
            }
            black_box(fired)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_swipe_decode, bench_key_throttle);
criterion_main!(benches);
