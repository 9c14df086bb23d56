// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rondel_index::{IndexMode, advance_index, classify, signed_distance};

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("index/advance");

    for len in [3_usize, 16, 256] {
        group.bench_with_input(BenchmarkId::new("wrap", len), &len, |b, &len| {
            b.iter(|| {
                let mut index = 0;
                for delta in -8..8_i64 {
                    index = advance_index(black_box(index), black_box(delta), len, IndexMode::Wrap);
                }
                black_box(index)
            });
        });
        group.bench_with_input(BenchmarkId::new("clamp", len), &len, |b, &len| {
            b.iter(|| {
                let mut index = 0;
                for delta in -8..8_i64 {
                    index =
                        advance_index(black_box(index), black_box(delta), len, IndexMode::Clamp);
                }
                black_box(index)
            });
        });
    }

    group.finish();
}

fn bench_full_strip_classification(c: &mut Criterion) {
    // The per-render cost of a carousel: distance + role for every item.
    let mut group = c.benchmark_group("index/classify_strip");

    for len in [4_usize, 32, 512] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                let active = len / 2;
                let mut hidden = 0_usize;
                for i in 0..len {
                    let d = signed_distance(i, active, len, IndexMode::Wrap);
                    if classify(d, 2) == rondel_index::ItemPosition::Hidden {
                        hidden += 1;
                    }
                }
                black_box(hidden)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance, bench_full_strip_classification);
criterion_main!(benches);
