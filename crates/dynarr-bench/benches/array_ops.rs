//! Criterion micro-benchmarks for append, insert, remove, and resize.

use criterion::{criterion_group, criterion_main, Criterion};
use dynarr::DynamicArray;
use dynarr_bench::{filled_array, scattered_indices};
use std::hint::black_box;

/// Benchmark: 10K appends into a fresh array (amortized doubling).
fn bench_append_10k(c: &mut Criterion) {
    c.bench_function("append_10k", |b| {
        b.iter(|| {
            let mut da = DynamicArray::new();
            for i in 0..10_000u64 {
                da.append(i);
            }
            black_box(da.capacity());
        });
    });
}

/// Benchmark: 1K inserts at scattered positions into a 1K array.
fn bench_insert_scattered_1k(c: &mut Criterion) {
    let indices = scattered_indices(1_000, 1_000);
    c.bench_function("insert_scattered_1k", |b| {
        b.iter(|| {
            let mut da = filled_array(1_000);
            for (i, &index) in indices.iter().enumerate() {
                da.insert_at_index(index, i as u64).unwrap();
            }
            black_box(da.length());
        });
    });
}

/// Benchmark: drain a 4K array from the back, exercising every shrink.
fn bench_remove_back_4k(c: &mut Criterion) {
    c.bench_function("remove_back_4k", |b| {
        b.iter(|| {
            let mut da = filled_array(4_096);
            while !da.is_empty() {
                let last = da.length() - 1;
                black_box(da.remove_at_index(last).unwrap());
            }
            black_box(da.capacity());
        });
    });
}

/// Benchmark: grow-then-shrink resize cycle on a 10K array.
fn bench_resize_cycle_10k(c: &mut Criterion) {
    let mut da = filled_array(10_000);
    c.bench_function("resize_cycle_10k", |b| {
        b.iter(|| {
            da.resize(40_000);
            da.resize(10_000);
            black_box(da.capacity());
        });
    });
}

/// Benchmark: map + filter + reduce pipeline over 10K elements.
fn bench_functional_10k(c: &mut Criterion) {
    let da = filled_array(10_000);
    c.bench_function("map_filter_reduce_10k", |b| {
        b.iter(|| {
            let total = da
                .map(|x| x * 3)
                .filter(|x| x % 2 == 0)
                .reduce_with(0u64, |acc, x| acc + x);
            black_box(total);
        });
    });
}

criterion_group!(
    benches,
    bench_append_10k,
    bench_insert_scattered_1k,
    bench_remove_back_4k,
    bench_resize_cycle_10k,
    bench_functional_10k
);
criterion_main!(benches);
