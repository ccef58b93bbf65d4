//! Benchmarks for decimal conversion

extern crate criterion;
extern crate mersenne_digits;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mersenne_digits::{
    build_power_table,
    make_mersenne_candidate,
    to_decimal_string,
    to_decimal_string_direct,
};

mod common;
use common::*;

criterion_main!(
    conversion,
    power_tables,
);

criterion_group!(
    name = conversion;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(10))
                       .sample_size(20);
    targets =
        bench_direct_vs_recursive,
        bench_mersenne,
);

criterion_group!(
    name = power_tables;
    config = Criterion::default()
                       .sample_size(20);
    targets =
        bench_power_table,
);


/// Limb counts of the random inputs
const SIZES: [usize; 4] = [16, 128, 512, 2048];

fn bench_direct_vs_recursive(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal-conversion");

    for (i, &len) in SIZES.iter().enumerate() {
        let nums = random_bignums(0x5eed_0000 + i as u128, 8, len);

        let mut iter = CyclingIterator::new(&nums);
        group.bench_with_input(BenchmarkId::new("direct", len), &len, |b, _| {
            b.iter(|| black_box(to_decimal_string_direct(iter.next())))
        });

        let mut iter = CyclingIterator::new(&nums);
        group.bench_with_input(BenchmarkId::new("recursive", len), &len, |b, _| {
            b.iter(|| black_box(to_decimal_string(iter.next())))
        });
    }

    group.finish();
}

fn bench_mersenne(c: &mut Criterion) {
    for n in [44497u64, 110503, 216091] {
        let m = make_mersenne_candidate(n);
        c.bench_function(&format!("mersenne-{}", n), |b| {
            b.iter(|| black_box(to_decimal_string(&m)))
        });
    }
}

fn bench_power_table(c: &mut Criterion) {
    for bits in [10_000u64, 100_000, 1_000_000] {
        c.bench_function(&format!("power-table-{}", bits), |b| {
            b.iter(|| black_box(build_power_table(black_box(bits))))
        });
    }
}
