#![allow(unused_imports)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use timesphere::calendar::{from_unix_time, to_unix_time, try_to_unix_time};
use timesphere::prelude::*;

// decode scans year by year, so cost grows with distance from 1970
const YEARS: [u16; 4] = [1970, 2000, 2038, 2105];

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode");

    for year in YEARS.iter() {
        group.bench_with_input(BenchmarkId::new("unchecked", year), year, |b, &year| {
            b.iter(|| to_unix_time(black_box(year), 12, 31, 23, 59, 59));
        });

        group.bench_with_input(BenchmarkId::new("checked", year), year, |b, &year| {
            let civil = CivilDateTime::new(year, 12, 31, 23, 59, 59);
            b.iter(|| try_to_unix_time(black_box(&civil)));
        });
    }
    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode");

    for year in YEARS.iter() {
        let counter = to_unix_time(*year, 12, 31, 23, 59, 59);
        group.bench_with_input(BenchmarkId::new("from_unix_time", year), &counter, |b, &counter| {
            b.iter(|| from_unix_time(black_box(counter)));
        });
    }
    group.finish();
}

fn benchmark_timestamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("Timestamp");

    group.bench_function("add_days_wrap", |b| {
        let mut ts = Timestamp::<DefaultConfig>::from_unix_time(1_700_000_000);
        b.iter(|| ts.add_days(black_box(1)).unwrap());
    });

    group.bench_function("add_days_checked", |b| {
        let mut ts = Timestamp::<StrictConfig>::from_unix_time(1_700_000_000);
        b.iter(|| {
            if ts.add_days(black_box(1)).is_err() {
                ts = Timestamp::from_unix_time(1_700_000_000);
            }
        });
    });

    group.bench_function("to_text", |b| {
        let ts = Timestamp::<DefaultConfig>::from_unix_time(1_700_000_000);
        b.iter(|| black_box(ts.to_text()));
    });

    group.finish();
}

fn benchmark_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("List");

    for size in [4usize, 16, 64].iter() {
        group.bench_with_input(BenchmarkId::new("append_remove", size), size, |b, &size| {
            b.iter(|| {
                let mut list = List::<u32, 64>::new();
                for i in 0..size as u32 {
                    list.append(black_box(i)).unwrap();
                }
                for i in 0..size as u32 {
                    list.remove(black_box(&i));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_timestamp,
    benchmark_list
);
criterion_main!(benches);
