//! Criterion comparison of the three sequence containers across the
//! harness workloads: copy-in, sinking sequential scan, and single-pass
//! statistics. Inputs are seeded so every run measures identical data.

use std::collections::{LinkedList, VecDeque};
use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use seqbench_core::source::uniform_series;
use seqbench_core::{mean, sink_scan, variance};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const SEED: u64 = 42;
const MIN_VALUE: i32 = -100;
const MAX_VALUE: i32 = 100;
const SCAN_PASSES: usize = 10;

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy");
    for &size in &SIZES {
        let source = uniform_series(size, SEED, MIN_VALUE, MAX_VALUE);

        group.bench_with_input(BenchmarkId::new("vec_push", size), &source, |b, src| {
            b.iter_with_large_drop(|| {
                let mut vec = Vec::new();
                for &value in src {
                    vec.push(value);
                }
                vec
            });
        });

        group.bench_with_input(BenchmarkId::new("vec_reserved", size), &source, |b, src| {
            b.iter_with_large_drop(|| {
                let mut vec = Vec::with_capacity(src.len());
                vec.extend_from_slice(src);
                vec
            });
        });

        group.bench_with_input(BenchmarkId::new("deque", size), &source, |b, src| {
            b.iter_with_large_drop(|| {
                let mut deque = VecDeque::new();
                deque.extend(src.iter().copied());
                deque
            });
        });

        group.bench_with_input(BenchmarkId::new("list", size), &source, |b, src| {
            b.iter_with_large_drop(|| {
                let mut list = LinkedList::new();
                list.extend(src.iter().copied());
                list
            });
        });
    }
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for &size in &SIZES {
        let source = uniform_series(size, SEED, MIN_VALUE, MAX_VALUE);
        let vec: Vec<i32> = source.clone();
        let deque: VecDeque<i32> = source.iter().copied().collect();
        let list: LinkedList<i32> = source.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("vec", size), &vec, |b, data| {
            b.iter(|| sink_scan(data.iter().copied(), SCAN_PASSES));
        });
        group.bench_with_input(BenchmarkId::new("deque", size), &deque, |b, data| {
            b.iter(|| sink_scan(data.iter().copied(), SCAN_PASSES));
        });
        group.bench_with_input(BenchmarkId::new("list", size), &list, |b, data| {
            b.iter(|| sink_scan(data.iter().copied(), SCAN_PASSES));
        });
    }
    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    for &size in &SIZES {
        let source = uniform_series(size, SEED, MIN_VALUE, MAX_VALUE);
        let vec: Vec<i32> = source.clone();
        let list: LinkedList<i32> = source.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("mean_vec", size), &vec, |b, data| {
            b.iter(|| black_box(mean(data.iter().copied())));
        });
        group.bench_with_input(BenchmarkId::new("mean_list", size), &list, |b, data| {
            b.iter(|| black_box(mean(data.iter().copied())));
        });
        group.bench_with_input(BenchmarkId::new("variance_vec", size), &vec, |b, data| {
            b.iter(|| black_box(variance(data.iter().copied())));
        });
        group.bench_with_input(BenchmarkId::new("variance_list", size), &list, |b, data| {
            b.iter(|| black_box(variance(data.iter().copied())));
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2));
    targets = bench_copy, bench_scan, bench_stats
}
criterion_main!(benches);
