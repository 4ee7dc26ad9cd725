//! Shifting a container period by a whole number of its own units.
//!
//! A container is one period of the offset granularity (the month holding a
//! day, the year holding a week...). [`shift_container`] moves from one
//! container to its `offset`-th neighbour. Weekly ranges keep week ownership:
//! their containers start on the first owned week, so the shift is applied to
//! the owning month or year and then mapped back to its first week.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{CompareError, Result};
use crate::granularity::{month_start, total_months, year_start, Granularity};
use crate::week::{self, FirstWeekday};

/// Start of the container `offset` units away from the one starting at
/// `container_start`.
///
/// `unit` is the date range's own granularity and decides how the container
/// start is expressed; `container` is the granularity being stepped.
///
/// # Errors
///
/// Returns [`CompareError::DateOutOfRange`] when the shifted container falls
/// outside the calendar `chrono` can represent. Every other integer offset
/// maps to exactly one container.
pub fn shift_container(
    container_start: NaiveDate,
    offset: i64,
    unit: Granularity,
    container: Granularity,
    first_weekday: FirstWeekday,
) -> Result<NaiveDate> {
    match (container, unit) {
        (Granularity::Daily, _) => shift_days(container_start, offset),
        (Granularity::Weekly, _) => {
            let days = offset.checked_mul(7).ok_or_else(|| out_of_range(container_start, offset))?;
            shift_days(week::week_start(container_start, first_weekday)?, days)
        }
        (Granularity::Monthly, Granularity::Weekly) => {
            let owner = week::anchor(container_start, first_weekday)?;
            let month = shift_months(month_start(owner), offset)?;
            week::first_week_start_of_month(month.year(), month.month(), first_weekday)
        }
        (Granularity::Monthly, _) => shift_months(month_start(container_start), offset),
        (Granularity::Yearly, Granularity::Weekly) => {
            let owner = week::anchor(container_start, first_weekday)?;
            let year = shift_years(year_start(owner), offset)?;
            week::first_week_start_of_year(year.year(), first_weekday)
        }
        (Granularity::Yearly, _) => shift_years(year_start(container_start), offset),
    }
}

// ── Calendar steps ──────────────────────────────────────────────────────────

/// `date` moved by `days` days.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| out_of_range(date, days))
}

/// First day of the month `months` after the month containing `date`.
pub(crate) fn shift_months(date: NaiveDate, months: i64) -> Result<NaiveDate> {
    // total_months counts January as 1, so step back one before splitting.
    let total = total_months(date)
        .checked_add(months)
        .and_then(|t| t.checked_sub(1))
        .ok_or_else(|| out_of_range(date, months))?;
    let year = i32::try_from(total.div_euclid(12)).map_err(|_| out_of_range(date, months))?;
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| out_of_range(date, months))
}

/// January 1st of the year `years` after the year containing `date`.
pub(crate) fn shift_years(date: NaiveDate, years: i64) -> Result<NaiveDate> {
    let year = i64::from(date.year())
        .checked_add(years)
        .and_then(|y| i32::try_from(y).ok())
        .ok_or_else(|| out_of_range(date, years))?;
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| out_of_range(date, years))
}

fn out_of_range(date: NaiveDate, offset: i64) -> CompareError {
    CompareError::DateOutOfRange(format!("shifting {date} by {offset} leaves the calendar"))
}

// ── Tests ───────────────────────────────────────────────────────────────────
