//! Hot-path benchmarks: checked vs unchecked access, slicing, the seal /
//! first-write duplication, overlapping swaps, and map.
//!
//! Run with `cargo bench`. Use `--release` numbers only.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use geneview::{ArrayView, ValueView};

const N: usize = 1_000;

fn fixture() -> ValueView<i64> {
    (0..N as i64).collect()
}

fn bench_checked_get(c: &mut Criterion) {
    let v = fixture();
    c.bench_function("get_checked_1k", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for i in 0..v.len() {
                acc += v.get(black_box(i)).unwrap();
            }
            acc
        })
    });
}

fn bench_unchecked_get(c: &mut Criterion) {
    let v = fixture();
    c.bench_function("get_unchecked_1k", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for i in 0..v.len() {
                acc += v.get_unchecked(black_box(i));
            }
            acc
        })
    });
}

fn bench_slice(c: &mut Criterion) {
    let v = fixture();
    c.bench_function("slice", |b| {
        b.iter(|| v.slice(black_box(10), black_box(N - 10)).unwrap())
    });
}

fn bench_seal_first_write(c: &mut Criterion) {
    c.bench_function("seal_then_first_write", |b| {
        b.iter(|| {
            let mut v = fixture();
            let _snapshot = v.seal();
            v.set(black_box(0), black_box(-1)).unwrap();
            v
        })
    });
}

fn bench_overlapping_swap(c: &mut Criterion) {
    c.bench_function("swap_overlapping_halves", |b| {
        b.iter(|| {
            let mut v = fixture();
            let mut alias = v.slice_from(0).unwrap();
            v.swap(0, N / 2, &mut alias, N / 2).unwrap();
            v
        })
    });
}

fn bench_map(c: &mut Criterion) {
    let v = fixture();
    c.bench_function("map_1k", |b| b.iter(|| v.map(|x| black_box(x) * 2)));
}

criterion_group!(
    benches,
    bench_checked_get,
    bench_unchecked_get,
    bench_slice,
    bench_seal_first_write,
    bench_overlapping_swap,
    bench_map
);
criterion_main!(benches);
