//! Error types for period-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

use crate::granularity::{Granularity, OffsetGranularity};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("Invalid date range: end date {end} precedes start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Incomplete period: {start} - {end} is not a whole number of {granularity} periods")]
    IncompletePeriod {
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    },

    #[error(
        "Unsupported combination: offset granularity {offset_granularity} cannot be used with date granularity {date_granularity}"
    )]
    UnsupportedCombination {
        date_granularity: Granularity,
        offset_granularity: OffsetGranularity,
    },

    #[error("Start date overflow: no date plays the same role in the compared period")]
    StartDateOverflow,

    #[error("Invalid offset: {0}")]
    InvalidOffset(String),

    #[error("Invalid weekday: {0} (expected 0 for Monday through 6 for Sunday)")]
    InvalidWeekday(i64),

    #[error("Invalid length: {0}")]
    InvalidLength(String),

    #[error("Invalid granularity: {0}")]
    InvalidGranularity(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, CompareError>;
