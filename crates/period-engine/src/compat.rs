//! Which offset granularities each date granularity can be compared with.
//!
//! A range can be shifted by its own granularity, any coarser calendar
//! granularity, or [`OffsetGranularity::Periodic`]. It can never be shifted by
//! a finer one: "the same week, one day earlier" has no meaning.

use crate::error::{CompareError, Result};
use crate::granularity::{Granularity, OffsetGranularity};

/// Offset granularities usable with `granularity`, `Periodic` first.
pub fn supported_offsets(granularity: Granularity) -> &'static [OffsetGranularity] {
    use OffsetGranularity::{Daily, Monthly, Periodic, Weekly, Yearly};

    match granularity {
        Granularity::Daily => &[Periodic, Daily, Weekly, Monthly, Yearly],
        Granularity::Weekly => &[Periodic, Weekly, Monthly, Yearly],
        Granularity::Monthly => &[Periodic, Monthly, Yearly],
        Granularity::Yearly => &[Periodic, Yearly],
    }
}

/// Whether `offset_granularity` can shift a `date_granularity` range.
pub fn is_supported(date_granularity: Granularity, offset_granularity: OffsetGranularity) -> bool {
    supported_offsets(date_granularity).contains(&offset_granularity)
}

/// Reject a pair missing from the table.
///
/// # Errors
///
/// Returns [`CompareError::UnsupportedCombination`] if the pair is not in the
/// table.
pub fn check(date_granularity: Granularity, offset_granularity: OffsetGranularity) -> Result<()> {
    if is_supported(date_granularity, offset_granularity) {
        Ok(())
    } else {
        Err(CompareError::UnsupportedCombination {
            date_granularity,
            offset_granularity,
        })
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
