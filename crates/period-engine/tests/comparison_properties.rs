//! Property tests for the comparison engine.
//!
//! Ranges are generated as whole periods (a random date snapped to its period
//! start, then extended by 1..=12 periods) under a random first weekday.

use chrono::{Datelike, Duration, NaiveDate};
use period_engine::{
    anchor, compare_ranges, week_start, CompareError, CompareOptions, DatePeriodOffset, DateRange,
    FirstWeekday, Granularity, OffsetGranularity, PeriodicMode,
};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    // 1950-01-01 .. roughly 2100
    (0i64..55_000).prop_map(|days| NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + Duration::days(days))
}

fn range_strategy() -> impl Strategy<Value = DateRange> {
    (
        date_strategy(),
        prop::sample::select(Granularity::ALL.to_vec()),
        1i64..=12,
        0u8..7,
    )
        .prop_map(|(date, granularity, length, first_weekday)| {
            let first_weekday = FirstWeekday::try_from(first_weekday).unwrap();
            let start = granularity.period_start_of(date, first_weekday).unwrap();
            let end = granularity.period_end(start, length, first_weekday).unwrap();
            DateRange::new(start, end, granularity, first_weekday).unwrap()
        })
}

fn case_strategy() -> impl Strategy<Value = (DateRange, OffsetGranularity, i64)> {
    range_strategy().prop_flat_map(|range| {
        (
            Just(range),
            prop::sample::select(range.granularity().supported_offsets().to_vec()),
            -40i64..40,
        )
    })
}

fn options_strategy() -> impl Strategy<Value = CompareOptions> {
    prop_oneof![Just(PeriodicMode::Standard), Just(PeriodicMode::WholeRange)]
        .prop_map(|periodic| CompareOptions { periodic })
}

proptest! {
    #[test]
    fn test_zero_offset_is_identity(
        (range, offset_granularity, _) in case_strategy(),
        options in options_strategy(),
    ) {
        let offset = DatePeriodOffset::new(0, offset_granularity).unwrap();
        let compared = compare_ranges(&range, &offset, &options).unwrap();
        prop_assert_eq!(compared.start_date, range.start_date());
        prop_assert_eq!(compared.end_date, range.end_date());
    }

    #[test]
    fn test_length_is_preserved(
        (range, offset_granularity, offset) in case_strategy(),
        options in options_strategy(),
    ) {
        let offset = DatePeriodOffset::new(offset, offset_granularity).unwrap();
        match compare_ranges(&range, &offset, &options) {
            Ok(compared) => {
                let length = range
                    .granularity()
                    .period_length(compared.start_date, compared.end_date, range.first_weekday())
                    .unwrap();
                prop_assert_eq!(length, range.length());
            }
            Err(err) => prop_assert_eq!(err, CompareError::StartDateOverflow),
        }
    }

    #[test]
    fn test_compared_start_is_monotonic_in_offset(
        (range, offset_granularity, low) in case_strategy(),
        step in 1i64..20,
        options in options_strategy(),
    ) {
        let low_offset = DatePeriodOffset::new(low, offset_granularity).unwrap();
        let high_offset = DatePeriodOffset::new(low + step, offset_granularity).unwrap();
        if let (Ok(earlier), Ok(later)) = (
            compare_ranges(&range, &low_offset, &options),
            compare_ranges(&range, &high_offset, &options),
        ) {
            prop_assert!(earlier.start_date < later.start_date);
        }
    }

    #[test]
    fn test_anchor_month_holds_most_of_the_week(
        date in date_strategy(),
        first_weekday in 0u8..7,
    ) {
        let first_weekday = FirstWeekday::try_from(first_weekday).unwrap();
        let start = week_start(date, first_weekday).unwrap();
        let owner = anchor(date, first_weekday).unwrap();
        let owned_days = (0..7)
            .map(|i| start + Duration::days(i))
            .filter(|day| (day.year(), day.month()) == (owner.year(), owner.month()))
            .count();
        prop_assert!(owned_days >= 4);
        prop_assert_eq!(start.weekday(), first_weekday.weekday());
    }
}

// ── Scenarios ───────────────────────────────────────────────────────────────

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_scenarios() {
    let cases = [
        (
            (d(2024, 6, 1), d(2024, 6, 15), Granularity::Daily, -1, OffsetGranularity::Monthly),
            (d(2024, 5, 1), d(2024, 5, 15)),
        ),
        (
            (d(2024, 7, 1), d(2024, 12, 31), Granularity::Monthly, -6, OffsetGranularity::Monthly),
            (d(2024, 1, 1), d(2024, 6, 30)),
        ),
        (
            (d(2024, 2, 1), d(2024, 2, 29), Granularity::Monthly, -1, OffsetGranularity::Periodic),
            (d(2024, 1, 1), d(2024, 1, 31)),
        ),
        (
            (d(2024, 1, 1), d(2024, 3, 31), Granularity::Weekly, -9, OffsetGranularity::Yearly),
            (d(2014, 12, 29), d(2015, 3, 29)),
        ),
        (
            (d(2024, 3, 1), d(2024, 3, 31), Granularity::Daily, -1, OffsetGranularity::Yearly),
            (d(2023, 3, 2), d(2023, 4, 1)),
        ),
    ];

    for ((start, end, granularity, offset, offset_granularity), expected) in cases {
        let result =
            period_engine::compare(start, end, granularity, offset, offset_granularity, 0).unwrap();
        assert_eq!(result, expected, "{start}..{end} {granularity} by {offset} {offset_granularity}");
    }
}

#[test]
fn test_week_of_new_year_belongs_to_next_year() {
    let monday_first = FirstWeekday::MONDAY;
    assert_eq!(anchor(d(2024, 12, 30), monday_first).unwrap(), d(2025, 1, 2));
    let range = DateRange::new(d(2024, 12, 30), d(2025, 1, 5), Granularity::Weekly, monday_first)
        .unwrap();
    let offset = DatePeriodOffset::new(-1, OffsetGranularity::Yearly).unwrap();
    let compared = compare_ranges(&range, &offset, &CompareOptions::default()).unwrap();
    // Week 1 of 2024 starts Mon 2024-01-01.
    assert_eq!(compared.start_date, d(2024, 1, 1));
    assert_eq!(compared.end_date, d(2024, 1, 7));
}
