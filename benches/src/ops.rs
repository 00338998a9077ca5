use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hertz::si::*;

fn ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("hertz/ops");

    group.bench_function("add-same", |b| {
        b.iter(|| black_box(3 * kHz) + black_box(4 * kHz))
    });
    group.bench_function("add-common", |b| {
        b.iter(|| black_box(3 * kHz) + black_box(4 * mHz))
    });
    group.bench_function("cmp-common", |b| {
        b.iter(|| black_box(999 * mHz) < black_box(1 * Hz))
    });
    group.bench_function("div", |b| {
        b.iter(|| black_box(3 * MHz) / black_box(7 * Hz))
    });
    group.bench_function("fmt", |b| {
        b.iter(|| black_box(1250 * mHz).to_string())
    });

    group.finish();
}

criterion_group!(benches, ops);
criterion_main!(benches);
