use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hertz::{
    frequency_cast, si::*, try_frequency_cast, Frequency, Hertz, Nano, Nanohertz, Ratio,
};

fn cast(c: &mut Criterion) {
    let mut group = c.benchmark_group("hertz/cast");

    [1, 1_000, 1_000_000].into_iter().for_each(|count| {
        group.bench_with_input(BenchmarkId::new("int", count), &count, |b, count| {
            b.iter(|| frequency_cast::<Nanohertz, _>(black_box(*count * kHz)))
        });
        group.bench_with_input(BenchmarkId::new("int-odd", count), &count, |b, count| {
            b.iter(|| {
                frequency_cast::<Frequency<i64, Ratio<2, 3>>, _>(black_box(
                    Frequency::<i64, Ratio<5, 2>>::new(*count),
                ))
            })
        });
        group.bench_with_input(BenchmarkId::new("float", count), &count, |b, count| {
            b.iter(|| frequency_cast::<Hertz, _>(black_box(*count as f64 * mHz)))
        });
        group.bench_with_input(BenchmarkId::new("checked", count), &count, |b, count| {
            b.iter(|| try_frequency_cast::<Frequency<i32, Nano>, _>(black_box(*count * Hz)))
        });
    });

    group.finish();
}

criterion_group!(benches, cast);
criterion_main!(benches);
