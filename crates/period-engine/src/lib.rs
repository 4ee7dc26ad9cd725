//! # period-engine
//!
//! Deterministic period-over-period date range comparison.
//!
//! Given a date range made of whole days, weeks, months or years, the engine
//! computes the range to compare it with: the same days one month earlier,
//! the same ISO weeks last year, the previous period of identical length.
//! Calendar irregularities (month lengths, leap years, 52- vs 53-week years)
//! are handled explicitly; when no date plays the same role in the compared
//! period the engine reports it instead of guessing.
//!
//! ## Modules
//!
//! - [`week`] — Week start, week ownership (4th-day anchor), configurable first weekday
//! - [`granularity`] — Daily/weekly/monthly/yearly period boundaries, lengths and ends
//! - [`range`] — Validated date ranges and offsets
//! - [`locator`] — Position of a period inside a coarser container, and back
//! - [`offset`] — Shifting a container by whole units
//! - [`compat`] — Which offset granularities each date granularity accepts
//! - [`compare`] — The comparison itself
//! - [`error`] — Error types

pub mod compare;
pub mod compat;
pub mod error;
pub mod granularity;
pub mod locator;
pub mod offset;
pub mod range;
pub mod week;

pub use compare::{
    compare, compare_ranges, compare_with_options, CompareOptions, ComparedRange, PeriodicMode,
};
pub use error::CompareError;
pub use granularity::{Granularity, OffsetGranularity, PeriodCalendar};
pub use locator::{IndexOverflow, PeriodLocator};
pub use offset::shift_container;
pub use range::{DatePeriodOffset, DateRange, MAX_OFFSET};
pub use week::{anchor, first_week_start_of_month, week_start, weeks_between, FirstWeekday};
