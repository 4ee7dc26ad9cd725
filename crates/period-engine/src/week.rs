//! Week ownership under a configurable first weekday.
//!
//! A week always spans seven days starting on the [`FirstWeekday`]. The
//! month and year that "own" a week are the ones containing its fourth day,
//! the [`anchor`] date. With Monday-first weeks this is exactly ISO 8601 week
//! numbering: the week of Mon 2024-12-30 .. Sun 2025-01-05 is week 1 of 2025
//! because Thu 2025-01-02 falls in January.
//!
//! Every weekly computation in this crate goes through these functions, so the
//! attribution rule lives in one place.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{CompareError, Result};
use crate::offset::shift_days;

// ── Configurable week start ─────────────────────────────────────────────────

/// Which day begins a week for every weekly computation.
///
/// Indexed from 0 = Monday (ISO 8601) to 6 = Sunday (US/Canada).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FirstWeekday(Weekday);

impl FirstWeekday {
    /// ISO 8601 weeks.
    pub const MONDAY: Self = Self(Weekday::Mon);
    /// US/Canada weeks.
    pub const SUNDAY: Self = Self(Weekday::Sun);

    /// Build from a 0-based index, 0 = Monday through 6 = Sunday.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidWeekday`] for anything outside `0..=6`.
    pub fn new(index: i64) -> Result<Self> {
        u8::try_from(index)
            .ok()
            .and_then(|i| Weekday::try_from(i).ok())
            .map(Self)
            .ok_or(CompareError::InvalidWeekday(index))
    }

    /// The weekday that opens each week.
    pub fn weekday(self) -> Weekday {
        self.0
    }

    /// 0-based index, 0 = Monday.
    pub fn index(self) -> u8 {
        self.0.num_days_from_monday() as u8
    }

    /// How many days `weekday` is from the start of its week.
    fn days_into_week(self, weekday: Weekday) -> i64 {
        (i64::from(weekday.num_days_from_monday()) - i64::from(self.index())).rem_euclid(7)
    }
}

impl Default for FirstWeekday {
    fn default() -> Self {
        Self::MONDAY
    }
}

impl From<Weekday> for FirstWeekday {
    fn from(weekday: Weekday) -> Self {
        Self(weekday)
    }
}

impl TryFrom<u8> for FirstWeekday {
    type Error = CompareError;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(i64::from(index))
    }
}

impl fmt::Display for FirstWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Ownership rules ─────────────────────────────────────────────────────────

/// The first day of the week containing `date`.
///
/// # Errors
///
/// Returns [`CompareError::DateOutOfRange`] when that day precedes the
/// earliest representable date.
pub fn week_start(date: NaiveDate, first_weekday: FirstWeekday) -> Result<NaiveDate> {
    shift_days(date, -first_weekday.days_into_week(date.weekday()))
}

/// The fourth day of the week containing `date`.
///
/// The month and year of this date own the whole week.
///
/// # Errors
///
/// Returns [`CompareError::DateOutOfRange`] when the week runs off either end
/// of the representable calendar.
pub fn anchor(date: NaiveDate, first_weekday: FirstWeekday) -> Result<NaiveDate> {
    shift_days(week_start(date, first_weekday)?, 3)
}

/// Number of whole weeks from the week containing `a` to the week containing `b`.
///
/// Callers pass `a <= b`; reversed inputs give a floored negative distance.
///
/// # Errors
///
/// Same as [`anchor`].
pub fn weeks_between(a: NaiveDate, b: NaiveDate, first_weekday: FirstWeekday) -> Result<i64> {
    let days = (anchor(b, first_weekday)? - anchor(a, first_weekday)?).num_days();
    Ok((days + 1).div_euclid(7))
}

/// Start date of the first week owned by `(year, month)`.
///
/// When the week holding the 1st is anchored in the previous month, the
/// month's first week is the following one.
///
/// # Errors
///
/// Returns [`CompareError::DateOutOfRange`] if `(year, month)` is not a
/// representable calendar month, or its first week is not representable.
pub fn first_week_start_of_month(
    year: i32,
    month: u32,
    first_weekday: FirstWeekday,
) -> Result<NaiveDate> {
    let day_one = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        CompareError::DateOutOfRange(format!("no calendar month {year}-{month:02}"))
    })?;
    if day_one > anchor(day_one, first_weekday)? {
        week_start(shift_days(day_one, 7)?, first_weekday)
    } else {
        week_start(day_one, first_weekday)
    }
}

/// Start date of the first week owned by `year`.
///
/// # Errors
///
/// Same as [`first_week_start_of_month`] for January of `year`.
pub fn first_week_start_of_year(year: i32, first_weekday: FirstWeekday) -> Result<NaiveDate> {
    first_week_start_of_month(year, 1, first_weekday)
}

// ── Tests ───────────────────────────────────────────────────────────────────
