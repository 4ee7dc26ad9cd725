//! Date granularities and what counts as a complete period of each.
//!
//! [`Granularity`] is the unit a date range is expressed in. Each variant is
//! backed by one [`PeriodCalendar`] implementation that knows the variant's
//! period boundaries, how many periods lie between two boundaries, and where a
//! run of `n` periods ends.
//!
//! [`OffsetGranularity`] is the unit a comparison shift is expressed in. It
//! adds [`OffsetGranularity::Periodic`], which reuses the range's own
//! granularity (link-relative comparison).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::compat;
use crate::error::{CompareError, Result};
use crate::offset::{shift_days, shift_months, shift_years};
use crate::week::{self, FirstWeekday};

// ── Granularity ─────────────────────────────────────────────────────────────

/// The calendar unit a date range is expressed in.
///
/// Variants are ordered from finest to coarsest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Granularity {
    /// Every granularity, finest first.
    pub const ALL: [Granularity; 4] = [
        Granularity::Daily,
        Granularity::Weekly,
        Granularity::Monthly,
        Granularity::Yearly,
    ];

    /// The capability implementing this granularity.
    pub fn calendar(self) -> &'static dyn PeriodCalendar {
        match self {
            Granularity::Daily => &DailyPeriods,
            Granularity::Weekly => &WeeklyPeriods,
            Granularity::Monthly => &MonthlyPeriods,
            Granularity::Yearly => &YearlyPeriods,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        }
    }

    /// Whether `date` is the first day of a period.
    pub fn is_period_start(self, date: NaiveDate, first_weekday: FirstWeekday) -> bool {
        self.calendar().is_period_start(date, first_weekday)
    }

    /// Whether `date` is the last day of a period.
    pub fn is_period_end(self, date: NaiveDate, first_weekday: FirstWeekday) -> bool {
        self.calendar().is_period_end(date, first_weekday)
    }

    /// Start of the period of this granularity that contains `date`.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::DateOutOfRange`] for a week starting before the
    /// earliest representable date.
    pub fn period_start_of(
        self,
        date: NaiveDate,
        first_weekday: FirstWeekday,
    ) -> Result<NaiveDate> {
        self.calendar().period_start_of(date, first_weekday)
    }

    /// Whether `start..=end` is a whole number of periods.
    pub fn is_complete_range(
        self,
        start: NaiveDate,
        end: NaiveDate,
        first_weekday: FirstWeekday,
    ) -> bool {
        start <= end
            && self.is_period_start(start, first_weekday)
            && self.is_period_end(end, first_weekday)
    }

    /// Count of whole periods in `start..=end` (1 day, 2 weeks, 3 months...).
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidDateRange`] if `end < start`,
    /// [`CompareError::IncompletePeriod`] if the bounds are not period
    /// boundaries, or [`CompareError::DateOutOfRange`] for weeks that run off
    /// the representable calendar.
    pub fn period_length(
        self,
        start: NaiveDate,
        end: NaiveDate,
        first_weekday: FirstWeekday,
    ) -> Result<i64> {
        if end < start {
            return Err(CompareError::InvalidDateRange { start, end });
        }
        if !self.is_complete_range(start, end, first_weekday) {
            return Err(CompareError::IncompletePeriod {
                start,
                end,
                granularity: self,
            });
        }
        self.calendar().count_periods(start, end, first_weekday)
    }

    /// Last day of the run of `length` periods beginning at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidLength`] if `start` is not a period start
    /// or `length < 1`, and [`CompareError::DateOutOfRange`] if the end falls
    /// outside the supported calendar.
    pub fn period_end(
        self,
        start: NaiveDate,
        length: i64,
        first_weekday: FirstWeekday,
    ) -> Result<NaiveDate> {
        if !self.is_period_start(start, first_weekday) {
            return Err(CompareError::InvalidLength(format!(
                "{start} does not start a {self} period"
            )));
        }
        if length < 1 {
            return Err(CompareError::InvalidLength(format!(
                "a {self} range needs at least one period, got {length}"
            )));
        }
        self.calendar().end_after(start, length, first_weekday)
    }

    /// Offset granularities this granularity can be compared with.
    pub fn supported_offsets(self) -> &'static [OffsetGranularity] {
        compat::supported_offsets(self)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Granularity::Daily),
            "weekly" | "week" => Ok(Granularity::Weekly),
            "monthly" | "month" => Ok(Granularity::Monthly),
            "yearly" | "year" => Ok(Granularity::Yearly),
            _ => Err(CompareError::InvalidGranularity(format!("'{}'", s.trim()))),
        }
    }
}

// ── OffsetGranularity ───────────────────────────────────────────────────────

/// The calendar unit a comparison shift is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetGranularity {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// Same granularity as the date range (N periods ago).
    Periodic,
}

impl OffsetGranularity {
    /// Every offset granularity, `Periodic` first.
    pub const ALL: [OffsetGranularity; 5] = [
        OffsetGranularity::Periodic,
        OffsetGranularity::Daily,
        OffsetGranularity::Weekly,
        OffsetGranularity::Monthly,
        OffsetGranularity::Yearly,
    ];

    /// The named calendar unit, or `None` for [`OffsetGranularity::Periodic`].
    pub fn as_granularity(self) -> Option<Granularity> {
        match self {
            OffsetGranularity::Daily => Some(Granularity::Daily),
            OffsetGranularity::Weekly => Some(Granularity::Weekly),
            OffsetGranularity::Monthly => Some(Granularity::Monthly),
            OffsetGranularity::Yearly => Some(Granularity::Yearly),
            OffsetGranularity::Periodic => None,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self.as_granularity() {
            Some(granularity) => granularity.as_str(),
            None => "periodic",
        }
    }
}

impl From<Granularity> for OffsetGranularity {
    fn from(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Daily => OffsetGranularity::Daily,
            Granularity::Weekly => OffsetGranularity::Weekly,
            Granularity::Monthly => OffsetGranularity::Monthly,
            Granularity::Yearly => OffsetGranularity::Yearly,
        }
    }
}

impl fmt::Display for OffsetGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OffsetGranularity {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "periodic" | "period" | "link-relative" => Ok(OffsetGranularity::Periodic),
            other => other
                .parse::<Granularity>()
                .map(OffsetGranularity::from)
                .map_err(|_| CompareError::InvalidGranularity(format!("'{}'", s.trim()))),
        }
    }
}

// ── Period capability ───────────────────────────────────────────────────────

/// Period arithmetic for one granularity.
///
/// `count_periods` and `end_after` assume their inputs are already period
/// boundaries; [`Granularity::period_length`] and [`Granularity::period_end`]
/// check that before delegating.
pub trait PeriodCalendar: Sync {
    /// Whether `date` opens a period. Dates whose period cannot be
    /// represented are never boundaries.
    fn is_period_start(&self, date: NaiveDate, first_weekday: FirstWeekday) -> bool;

    /// Whether `date` closes a period.
    fn is_period_end(&self, date: NaiveDate, first_weekday: FirstWeekday) -> bool;

    /// First day of the period holding `date`.
    fn period_start_of(&self, date: NaiveDate, first_weekday: FirstWeekday)
        -> Result<NaiveDate>;

    /// Periods in `start..=end`, both bounds being boundaries.
    fn count_periods(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        first_weekday: FirstWeekday,
    ) -> Result<i64>;

    /// Last day of `length` periods starting at the boundary `start`.
    fn end_after(
        &self,
        start: NaiveDate,
        length: i64,
        first_weekday: FirstWeekday,
    ) -> Result<NaiveDate>;
}

/// Every day is its own period.
pub struct DailyPeriods;
/// Seven-day weeks opening on the [`FirstWeekday`].
pub struct WeeklyPeriods;
/// Calendar months.
pub struct MonthlyPeriods;
/// Calendar years.
pub struct YearlyPeriods;

impl PeriodCalendar for DailyPeriods {
    fn is_period_start(&self, _date: NaiveDate, _first_weekday: FirstWeekday) -> bool {
        true
    }

    fn is_period_end(&self, _date: NaiveDate, _first_weekday: FirstWeekday) -> bool {
        true
    }

    fn period_start_of(&self, date: NaiveDate, _: FirstWeekday) -> Result<NaiveDate> {
        Ok(date)
    }

    fn count_periods(&self, start: NaiveDate, end: NaiveDate, _: FirstWeekday) -> Result<i64> {
        Ok((end - start).num_days() + 1)
    }

    fn end_after(&self, start: NaiveDate, length: i64, _: FirstWeekday) -> Result<NaiveDate> {
        shift_days(start, length - 1)
    }
}

impl PeriodCalendar for WeeklyPeriods {
    fn is_period_start(&self, date: NaiveDate, first_weekday: FirstWeekday) -> bool {
        week::week_start(date, first_weekday).is_ok_and(|start| start == date)
    }

    fn is_period_end(&self, date: NaiveDate, first_weekday: FirstWeekday) -> bool {
        week::week_start(date, first_weekday)
            .and_then(|start| shift_days(start, 6))
            .is_ok_and(|end| end == date)
    }

    fn period_start_of(&self, date: NaiveDate, first_weekday: FirstWeekday) -> Result<NaiveDate> {
        week::week_start(date, first_weekday)
    }

    fn count_periods(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        first_weekday: FirstWeekday,
    ) -> Result<i64> {
        Ok(week::weeks_between(start, end, first_weekday)? + 1)
    }

    fn end_after(&self, start: NaiveDate, length: i64, _: FirstWeekday) -> Result<NaiveDate> {
        let days = length.checked_mul(7).ok_or_else(|| {
            CompareError::DateOutOfRange(format!("{length} weeks after {start}"))
        })?;
        shift_days(start, days - 1)
    }
}

impl PeriodCalendar for MonthlyPeriods {
    fn is_period_start(&self, date: NaiveDate, _first_weekday: FirstWeekday) -> bool {
        date.day() == 1
    }

    fn is_period_end(&self, date: NaiveDate, _first_weekday: FirstWeekday) -> bool {
        date.succ_opt().is_none_or(|next| next.day() == 1)
    }

    fn period_start_of(&self, date: NaiveDate, _: FirstWeekday) -> Result<NaiveDate> {
        Ok(month_start(date))
    }

    fn count_periods(&self, start: NaiveDate, end: NaiveDate, _: FirstWeekday) -> Result<i64> {
        Ok(total_months(end) - total_months(start) + 1)
    }

    fn end_after(&self, start: NaiveDate, length: i64, _: FirstWeekday) -> Result<NaiveDate> {
        last_day_before(shift_months(start, length)?)
    }
}

impl PeriodCalendar for YearlyPeriods {
    fn is_period_start(&self, date: NaiveDate, _first_weekday: FirstWeekday) -> bool {
        date.ordinal() == 1
    }

    fn is_period_end(&self, date: NaiveDate, _first_weekday: FirstWeekday) -> bool {
        date.month() == 12 && date.day() == 31
    }

    fn period_start_of(&self, date: NaiveDate, _: FirstWeekday) -> Result<NaiveDate> {
        Ok(year_start(date))
    }

    fn count_periods(&self, start: NaiveDate, end: NaiveDate, _: FirstWeekday) -> Result<i64> {
        Ok(i64::from(end.year()) - i64::from(start.year()) + 1)
    }

    fn end_after(&self, start: NaiveDate, length: i64, _: FirstWeekday) -> Result<NaiveDate> {
        last_day_before(shift_years(start, length)?)
    }
}

// ── Calendar helpers ────────────────────────────────────────────────────────

/// First day of the month containing `date`.
pub(crate) fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// January 1st of the year containing `date`.
pub(crate) fn year_start(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

/// `year * 12 + month`, the running month count used for month arithmetic.
pub(crate) fn total_months(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month())
}

/// Days in the month containing `date`.
pub(crate) fn days_in_month(date: NaiveDate) -> i64 {
    let first = month_start(date);
    match shift_months(first, 1) {
        Ok(next) => (next - first).num_days(),
        // Only December of the last representable year gets here.
        Err(_) => 31,
    }
}

/// Days in the year containing `date`.
pub(crate) fn days_in_year(date: NaiveDate) -> i64 {
    if NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some() {
        366
    } else {
        365
    }
}

fn last_day_before(date: NaiveDate) -> Result<NaiveDate> {
    date.pred_opt()
        .ok_or_else(|| CompareError::DateOutOfRange(format!("day before {date}")))
}

// ── Tests ───────────────────────────────────────────────────────────────────
