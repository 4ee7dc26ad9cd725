//! Locating a period inside a coarser container period and back.
//!
//! A [`PeriodLocator`] is built for one (unit, container) pair, e.g. "days
//! inside months" or "weeks inside years". Construction is the only place the
//! pair is checked; afterwards every operation dispatches over a closed set of
//! placements, so a missing combination is a compile error rather than a
//! runtime lookup failure.
//!
//! Weekly units always use week ownership: a week belongs to the month or year
//! holding its fourth day, and the container of a week starts on the first
//! week that container owns.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::error::{CompareError, Result};
use crate::granularity::{days_in_month, days_in_year, month_start, year_start, Granularity};
use crate::offset::shift_days;
use crate::week::{self, FirstWeekday};

/// No period at `index` exists in the container starting at `container_start`.
///
/// This is the expected outcome of calendar irregularity (a 30th day in
/// February, a 53rd week in a 52-week year), not a programming error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no {unit} period at index {index} in the {container} period starting {container_start}")]
pub struct IndexOverflow {
    pub unit: Granularity,
    pub container: Granularity,
    pub index: i64,
    pub container_start: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    DayInDay,
    DayInWeek,
    DayInMonth,
    DayInYear,
    WeekInWeek,
    WeekInMonth,
    WeekInYear,
    MonthInMonth,
    MonthInYear,
    YearInYear,
}

impl Placement {
    fn of(unit: Granularity, container: Granularity) -> Option<Self> {
        use Granularity::{Daily, Monthly, Weekly, Yearly};

        match (unit, container) {
            (Daily, Daily) => Some(Placement::DayInDay),
            (Daily, Weekly) => Some(Placement::DayInWeek),
            (Daily, Monthly) => Some(Placement::DayInMonth),
            (Daily, Yearly) => Some(Placement::DayInYear),
            (Weekly, Weekly) => Some(Placement::WeekInWeek),
            (Weekly, Monthly) => Some(Placement::WeekInMonth),
            (Weekly, Yearly) => Some(Placement::WeekInYear),
            (Monthly, Monthly) => Some(Placement::MonthInMonth),
            (Monthly, Yearly) => Some(Placement::MonthInYear),
            (Yearly, Yearly) => Some(Placement::YearInYear),
            (Weekly, Daily) | (Monthly, Daily | Weekly) | (Yearly, Daily | Weekly | Monthly) => {
                None
            }
        }
    }
}

/// Positions `unit` periods inside `container` periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodLocator {
    unit: Granularity,
    container: Granularity,
    first_weekday: FirstWeekday,
    placement: Placement,
}

impl PeriodLocator {
    /// Locator for `unit` periods inside `container` periods.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::UnsupportedCombination`] when `container` is
    /// finer than `unit`.
    pub fn new(
        unit: Granularity,
        container: Granularity,
        first_weekday: FirstWeekday,
    ) -> Result<Self> {
        let placement =
            Placement::of(unit, container).ok_or(CompareError::UnsupportedCombination {
                date_granularity: unit,
                offset_granularity: container.into(),
            })?;
        Ok(Self {
            unit,
            container,
            first_weekday,
            placement,
        })
    }

    /// Start of the container holding `date`, expressed in the unit's own
    /// boundaries (for weeks: the start of the container's first owned week).
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::DateOutOfRange`] when the container starts
    /// outside the representable calendar.
    pub fn container_start(&self, date: NaiveDate) -> Result<NaiveDate> {
        let fw = self.first_weekday;
        match self.placement {
            Placement::DayInDay => Ok(date),
            Placement::DayInWeek | Placement::WeekInWeek => week::week_start(date, fw),
            Placement::DayInMonth | Placement::MonthInMonth => Ok(month_start(date)),
            Placement::DayInYear | Placement::MonthInYear | Placement::YearInYear => {
                Ok(year_start(date))
            }
            Placement::WeekInMonth => {
                let owner = week::anchor(date, fw)?;
                week::first_week_start_of_month(owner.year(), owner.month(), fw)
            }
            Placement::WeekInYear => {
                week::first_week_start_of_year(week::anchor(date, fw)?.year(), fw)
            }
        }
    }

    /// Zero-based position of the unit period holding `date` inside its
    /// container (day of month, week of year, month of year...).
    ///
    /// # Errors
    ///
    /// Same as [`Self::container_start`].
    pub fn index_within_container(&self, date: NaiveDate) -> Result<i64> {
        match self.placement {
            Placement::DayInDay
            | Placement::WeekInWeek
            | Placement::MonthInMonth
            | Placement::YearInYear => Ok(0),
            Placement::DayInWeek | Placement::DayInMonth | Placement::DayInYear => {
                Ok((date - self.container_start(date)?).num_days())
            }
            Placement::WeekInMonth | Placement::WeekInYear => {
                let own_week = week::week_start(date, self.first_weekday)?;
                Ok((own_week - self.container_start(date)?).num_days() / 7)
            }
            Placement::MonthInYear => Ok(i64::from(date.month0())),
        }
    }

    /// Start of the unit period at `index` inside the container starting at
    /// `container_start`. Inverse of [`Self::index_within_container`].
    ///
    /// # Errors
    ///
    /// Returns [`IndexOverflow`] when that container has no period at `index`,
    /// including when the period would fall outside the representable calendar.
    pub fn reconstruct(
        &self,
        container_start: NaiveDate,
        index: i64,
    ) -> std::result::Result<NaiveDate, IndexOverflow> {
        let overflow = IndexOverflow {
            unit: self.unit,
            container: self.container,
            index,
            container_start,
        };
        let fw = self.first_weekday;
        let within = |capacity: i64| (0..capacity).contains(&index);
        let week_start = |date| week::week_start(date, fw).map_err(|_| overflow);
        let anchor = |date| week::anchor(date, fw).map_err(|_| overflow);
        let nth_day = |first, days| shift_days(first, days).map_err(|_| overflow);

        match self.placement {
            Placement::DayInDay if index == 0 => Ok(container_start),
            Placement::WeekInWeek if index == 0 => week_start(container_start),
            Placement::MonthInMonth if index == 0 => Ok(month_start(container_start)),
            Placement::YearInYear if index == 0 => Ok(year_start(container_start)),
            Placement::DayInWeek if within(7) => nth_day(week_start(container_start)?, index),
            Placement::DayInMonth if within(days_in_month(container_start)) => {
                nth_day(month_start(container_start), index)
            }
            Placement::DayInYear if within(days_in_year(container_start)) => {
                nth_day(year_start(container_start), index)
            }
            Placement::MonthInYear if within(12) => {
                NaiveDate::from_ymd_opt(container_start.year(), index as u32 + 1, 1).ok_or(overflow)
            }
            // A month owns at most five weeks and a year at most 53.
            Placement::WeekInMonth if within(5) => {
                let owner = anchor(container_start)?;
                let first = week::first_week_start_of_month(owner.year(), owner.month(), fw)
                    .map_err(|_| overflow)?;
                let candidate = nth_day(first, index * 7)?;
                let candidate_owner = anchor(candidate)?;
                if (candidate_owner.year(), candidate_owner.month()) == (owner.year(), owner.month())
                {
                    Ok(candidate)
                } else {
                    Err(overflow)
                }
            }
            Placement::WeekInYear if within(53) => {
                let owner = anchor(container_start)?;
                let first =
                    week::first_week_start_of_year(owner.year(), fw).map_err(|_| overflow)?;
                let candidate = nth_day(first, index * 7)?;
                if anchor(candidate)?.year() == owner.year() {
                    Ok(candidate)
                } else {
                    Err(overflow)
                }
            }
            _ => Err(overflow),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
