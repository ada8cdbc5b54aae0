// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Criterion micro-benchmarks for appends, front inserts, and range erases.

use array_list::ArrayList;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for n in [1_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::new("from_empty", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = ArrayList::new();
                for i in 0..n {
                    v.push(black_box(i)).unwrap();
                }
                v
            });
        });
        group.bench_with_input(BenchmarkId::new("reserved", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = ArrayList::with_capacity(n).unwrap();
                for i in 0..n {
                    v.push(black_box(i)).unwrap();
                }
                v
            });
        });
    }
    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("insert_front_1k", |b| {
        b.iter(|| {
            let mut v: ArrayList<u64> = ArrayList::new();
            for i in 0..1_000 {
                v.insert(v.begin(), black_box(i)).unwrap();
            }
            v
        });
    });
}

fn bench_erase_range(c: &mut Criterion) {
    let src: Vec<u64> = (0..10_000).collect();
    c.bench_function("erase_middle_half_10k", |b| {
        b.iter(|| {
            let mut v = ArrayList::from_slice(&src).unwrap();
            let first = v.begin() + 2_500;
            v.erase(first, first + 5_000).unwrap();
            v
        });
    });
}

criterion_group!(benches, bench_push, bench_insert_front, bench_erase_range);
criterion_main!(benches);
