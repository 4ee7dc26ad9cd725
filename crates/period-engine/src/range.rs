//! Validated inputs to a comparison.

use chrono::NaiveDate;

use crate::error::{CompareError, Result};
use crate::granularity::{Granularity, OffsetGranularity};
use crate::week::FirstWeekday;

/// Largest accepted offset magnitude.
///
/// Wider than any distance `chrono::NaiveDate` can represent, even in days,
/// so it only rejects values that could never produce a date.
pub const MAX_OFFSET: i64 = 100_000_000;

/// A date range made of whole periods of one granularity.
///
/// Immutable once built; construction is the only validation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
    granularity: Granularity,
    first_weekday: FirstWeekday,
    length: i64,
}

impl DateRange {
    /// Validate `start_date..=end_date` as whole `granularity` periods.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidDateRange`] if `end_date < start_date`,
    /// or [`CompareError::IncompletePeriod`] if the dates are not a whole
    /// number of `granularity` periods under `first_weekday`.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        granularity: Granularity,
        first_weekday: FirstWeekday,
    ) -> Result<Self> {
        let length = granularity.period_length(start_date, end_date, first_weekday)?;
        Ok(Self {
            start_date,
            end_date,
            granularity,
            first_weekday,
            length,
        })
    }

    /// First day of the range.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the range, inclusive.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Unit the range is made of.
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Week start the range was validated under.
    pub fn first_weekday(&self) -> FirstWeekday {
        self.first_weekday
    }

    /// Number of whole periods in the range.
    pub fn length(&self) -> i64 {
        self.length
    }
}

/// How far, and in which unit, to move a range. Negative is the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatePeriodOffset {
    offset: i64,
    granularity: OffsetGranularity,
}

impl DatePeriodOffset {
    /// Build an offset of `offset` units of `granularity`.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidOffset`] if `|offset|` exceeds
    /// [`MAX_OFFSET`].
    pub fn new(offset: i64, granularity: OffsetGranularity) -> Result<Self> {
        if offset.unsigned_abs() > MAX_OFFSET.unsigned_abs() {
            return Err(CompareError::InvalidOffset(format!(
                "{offset} is beyond +/-{MAX_OFFSET}"
            )));
        }
        Ok(Self {
            offset,
            granularity,
        })
    }

    /// Signed number of containers to move.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Container unit of the shift.
    pub fn granularity(&self) -> OffsetGranularity {
        self.granularity
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
