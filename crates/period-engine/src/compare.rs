//! Computing the comparison range for a date range.
//!
//! Given a range, an offset and an offset granularity, the compared range is
//! the one playing the same role `offset` containers away: the same days one
//! month earlier, the same weeks nine years earlier, the previous quarter...
//!
//! # Algorithm
//!
//! 1. Check the (date granularity, offset granularity) pair against
//!    [`crate::compat`].
//! 2. Resolve the container granularity. `Periodic` reuses the range's own
//!    granularity (see [`PeriodicMode`] for how the offset is scaled).
//! 3. Find the index of the range's first period inside its container, shift
//!    the container by the offset and rebuild the period at the same index.
//!    If the shifted container has no such period the comparison fails with
//!    [`CompareError::StartDateOverflow`]; callers pick their own fallback.
//! 4. The compared range has the same number of periods as the input.
//!
//! Every function here is pure: no clock, no shared state.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, trace};

use crate::compat;
use crate::error::{CompareError, Result};
use crate::granularity::{Granularity, OffsetGranularity};
use crate::locator::PeriodLocator;
use crate::offset::shift_container;
use crate::range::{DatePeriodOffset, DateRange};
use crate::week::FirstWeekday;

// ── Options ─────────────────────────────────────────────────────────────────

/// How a [`OffsetGranularity::Periodic`] offset is turned into a period count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodicMode {
    /// Daily ranges move by whole range lengths (a 3-day range at `-1` moves
    /// 3 days back); weekly, monthly and yearly ranges move by single periods.
    #[default]
    Standard,
    /// Every range moves by whole range lengths, so a 3-month range at `-1`
    /// lands on the 3 months right before it (quarter-over-quarter).
    WholeRange,
}

/// Options for [`compare_with_options`] and [`compare_ranges`].
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub periodic: PeriodicMode,
}

// ── Result ──────────────────────────────────────────────────────────────────

/// The compared date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ComparedRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<ComparedRange> for (NaiveDate, NaiveDate) {
    fn from(range: ComparedRange) -> Self {
        (range.start_date, range.end_date)
    }
}

// ── Entry points ────────────────────────────────────────────────────────────

/// Compute the comparison range of `start_date..=end_date`.
///
/// Uses [`PeriodicMode::Standard`]. For other options, use
/// [`compare_with_options`].
///
/// # Arguments
///
/// * `date_granularity` — the unit the range is expressed in
/// * `offset` — containers to move; negative is earlier, zero is the identity
/// * `offset_granularity` — the container unit, or `Periodic` for link-relative
/// * `first_weekday` — 0 = Monday (ISO 8601) through 6 = Sunday
///
/// # Errors
///
/// See [`CompareError`]: validation failures for malformed inputs,
/// [`CompareError::UnsupportedCombination`] for a finer offset granularity, and
/// [`CompareError::StartDateOverflow`] when no date plays the same role in the
/// compared container.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use period_engine::{compare, Granularity, OffsetGranularity};
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let (start, end) = compare(
///     date(2024, 6, 1),
///     date(2024, 6, 15),
///     Granularity::Daily,
///     -1,
///     OffsetGranularity::Monthly,
///     0,
/// )
/// .unwrap();
/// assert_eq!((start, end), (date(2024, 5, 1), date(2024, 5, 15)));
/// ```
pub fn compare(
    start_date: NaiveDate,
    end_date: NaiveDate,
    date_granularity: Granularity,
    offset: i64,
    offset_granularity: OffsetGranularity,
    first_weekday: u8,
) -> Result<(NaiveDate, NaiveDate)> {
    compare_with_options(
        start_date,
        end_date,
        date_granularity,
        offset,
        offset_granularity,
        first_weekday,
        &CompareOptions::default(),
    )
    .map(Into::into)
}

/// Compute the comparison range with explicit options.
///
/// # Errors
///
/// Same as [`compare`].
pub fn compare_with_options(
    start_date: NaiveDate,
    end_date: NaiveDate,
    date_granularity: Granularity,
    offset: i64,
    offset_granularity: OffsetGranularity,
    first_weekday: u8,
    options: &CompareOptions,
) -> Result<ComparedRange> {
    let first_weekday = FirstWeekday::new(i64::from(first_weekday))?;
    let range = DateRange::new(start_date, end_date, date_granularity, first_weekday)?;
    let offset = DatePeriodOffset::new(offset, offset_granularity)?;
    compare_ranges(&range, &offset, options)
}

/// Compute the comparison range for already-validated inputs.
///
/// # Errors
///
/// Returns [`CompareError::UnsupportedCombination`],
/// [`CompareError::StartDateOverflow`], or [`CompareError::DateOutOfRange`]
/// when the compared range leaves the supported calendar.
pub fn compare_ranges(
    range: &DateRange,
    offset: &DatePeriodOffset,
    options: &CompareOptions,
) -> Result<ComparedRange> {
    let date_granularity = range.granularity();
    let first_weekday = range.first_weekday();
    compat::check(date_granularity, offset.granularity())?;

    let (container, steps) = resolve_offset_unit(range, offset, options)?;
    let locator = PeriodLocator::new(date_granularity, container, first_weekday)?;

    let index = locator.index_within_container(range.start_date())?;
    let container_start = locator.container_start(range.start_date())?;
    let shifted = shift_container(
        container_start,
        steps,
        date_granularity,
        container,
        first_weekday,
    )?;
    debug!(
        unit = %date_granularity,
        %container,
        index,
        steps,
        %container_start,
        %shifted,
        "located compared container"
    );

    let start_date = locator.reconstruct(shifted, index).map_err(|overflow| {
        debug!(%overflow, "compared container has no matching period");
        CompareError::StartDateOverflow
    })?;
    let end_date = date_granularity.period_end(start_date, range.length(), first_weekday)?;
    trace!(%start_date, %end_date, "compared range");

    Ok(ComparedRange {
        start_date,
        end_date,
    })
}

/// The container granularity and how many containers to move.
fn resolve_offset_unit(
    range: &DateRange,
    offset: &DatePeriodOffset,
    options: &CompareOptions,
) -> Result<(Granularity, i64)> {
    if let Some(container) = offset.granularity().as_granularity() {
        return Ok((container, offset.offset()));
    }

    let granularity = range.granularity();
    let scale = match (options.periodic, granularity) {
        (PeriodicMode::WholeRange, _) | (PeriodicMode::Standard, Granularity::Daily) => {
            range.length()
        }
        (PeriodicMode::Standard, _) => 1,
    };
    let steps = offset.offset().checked_mul(scale).ok_or_else(|| {
        CompareError::InvalidOffset(format!(
            "{} periods of {} {granularity} periods overflows",
            offset.offset(),
            scale
        ))
    })?;
    Ok((granularity, steps))
}

// ── Tests ───────────────────────────────────────────────────────────────────
