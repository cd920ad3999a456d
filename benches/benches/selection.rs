// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use quarry_selection::Selection;

fn bench_extend_with_vs_hashed(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/extend");

    // A box select over a dense area merges a large preview into an existing
    // selection that already holds half of it.
    for len in [128usize, 512, 2_048, 8_192] {
        let existing: Vec<u32> = (0..(len as u32)).step_by(2).collect();
        let preview: Vec<u32> = (0..(len as u32)).collect();
        group.throughput(Throughput::Elements(len as u64));

        let seeded = || {
            let mut sel = Selection::<u32>::new();
            sel.extend_with(existing.iter().copied());
            sel
        };

        group.bench_with_input(BenchmarkId::new("extend_with", len), &preview, |b, keys| {
            b.iter_batched(
                seeded,
                |mut sel| {
                    sel.extend_with(keys.iter().copied());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("extend_with_hashed", len),
            &preview,
            |b, keys| {
                b.iter_batched(
                    seeded,
                    |mut sel| {
                        sel.extend_with_hashed(keys.iter().copied());
                        black_box(sel);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_replace_with(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/replace_with");

    for len in [128usize, 512, 2_048] {
        let keys: Vec<u32> = (0..(len as u32))
            .flat_map(|k| core::iter::repeat_n(k, 2))
            .collect();
        group.throughput(Throughput::Elements(keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("with_duplicates", len), &keys, |b, keys| {
            b.iter_batched(
                Selection::<u32>::new,
                |mut sel| {
                    sel.replace_with(keys.iter().copied());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extend_with_vs_hashed, bench_replace_with);
criterion_main!(benches);
