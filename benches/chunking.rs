//! Benchmarking of interval walks and chunking
use timeframe::prelude::*;

extern crate criterion;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn consume(chunks: Chunks) -> usize {
    chunks.map(|chunk| chunk.count()).sum()
}

fn benchmark(c: &mut Criterion) {
    let t0 = Epoch::from_gregorian_utc_at_midnight(2000, 1, 1);

    let mut group = c.benchmark_group("chunking");

    let interval = t0.until(t0 + 100.year_period());
    group.bench_function("month/100y/12", |b| {
        b.iter(|| consume(black_box(interval).chunk_month(12).unwrap()))
    });
    group.bench_function("day/100y/7", |b| {
        b.iter(|| consume(black_box(interval).chunk_day(7).unwrap()))
    });

    let interval = t0.until(t0 + 1.day_period());
    group.bench_function("second/1d/60", |b| {
        b.iter(|| consume(black_box(interval).chunk_second(60).unwrap()))
    });
    group.bench_function("millisecond/1d/first", |b| {
        b.iter(|| black_box(interval).chunk_milli(1000).unwrap().next())
    });

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
