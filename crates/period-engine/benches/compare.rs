use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use period_engine::{
    compare, compare_with_options, CompareOptions, Granularity, OffsetGranularity, PeriodicMode,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    group.bench_function("daily_month_over_month", |b| {
        b.iter(|| {
            compare(
                black_box(date(2024, 6, 1)),
                black_box(date(2024, 6, 15)),
                Granularity::Daily,
                black_box(-1),
                OffsetGranularity::Monthly,
                0,
            )
        })
    });

    group.bench_function("weekly_year_over_year", |b| {
        b.iter(|| {
            compare(
                black_box(date(2024, 1, 1)),
                black_box(date(2024, 3, 31)),
                Granularity::Weekly,
                black_box(-9),
                OffsetGranularity::Yearly,
                0,
            )
        })
    });

    group.bench_function("monthly_quarter_over_quarter", |b| {
        let options = CompareOptions {
            periodic: PeriodicMode::WholeRange,
        };
        b.iter(|| {
            compare_with_options(
                black_box(date(2024, 4, 1)),
                black_box(date(2024, 6, 30)),
                Granularity::Monthly,
                black_box(-1),
                OffsetGranularity::Periodic,
                0,
                &options,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
