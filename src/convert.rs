//! Gregorian to Bikram Sambat conversion.
//!
//! Every conversion is a whole-day difference against the reference
//! correspondence (Baisakh 1, 2081 B.S. == 2024-04-13 A.D.) followed by a walk
//! over the month-length table: forward, month lengths are subtracted until the
//! running day number fits; backward, days are borrowed from preceding months.

use crate::NepaliDate;
use crate::calendar::{self, MAX_TABLE_YEAR, MIN_TABLE_YEAR};
use crate::consts::{
    MAX_MONTH, REFERENCE_AD_DAY, REFERENCE_AD_MONTH, REFERENCE_AD_YEAR, REFERENCE_BS_DAY,
    REFERENCE_BS_MONTH, REFERENCE_BS_YEAR,
};
use crate::gregorian::{self, GregorianDate};

/// Epoch day number of the reference correspondence (2024-04-13 A.D.).
const REFERENCE_EPOCH_DAYS: i64 =
    gregorian::epoch_days(REFERENCE_AD_YEAR, REFERENCE_AD_MONTH, REFERENCE_AD_DAY);

/// Error type for conversions that must stay within the tabulated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The converted date's year has no entry in the month-length table.
    #[error("Bikram Sambat year {0} is outside the tabulated range {MIN_TABLE_YEAR}..={MAX_TABLE_YEAR}")]
    OutsideTable(u16),
}

/// Converts a Gregorian date to the equivalent Bikram Sambat date.
///
/// Total function: every valid input produces a date. Within B.S.
/// 2070..=2090 the result follows the official month lengths exactly; outside,
/// the walk continues on an approximate 365-day profile and the result is
/// plausible but not calendrically exact (check [`NepaliDate::is_exact`], or
/// use [`to_bikram_sambat_exact`] to reject such inputs).
pub fn to_bikram_sambat(date: GregorianDate) -> NepaliDate {
    let days_diff = date.to_epoch_days() - REFERENCE_EPOCH_DAYS;

    let mut year = REFERENCE_BS_YEAR;
    let mut month = REFERENCE_BS_MONTH;
    let mut day = i64::from(REFERENCE_BS_DAY);

    if days_diff >= 0 {
        // Forward: absorb the surplus into the day number, then subtract whole
        // months until it fits.
        day += days_diff;
        loop {
            let in_month = i64::from(calendar::days_in_month(year, month));
            if day <= in_month {
                break;
            }
            day -= in_month;
            month += 1;
            if month > MAX_MONTH {
                month = 1;
                year += 1;
            }
        }
    } else {
        // Backward: borrow full months from before the reference until the
        // countdown is spent.
        let mut countdown = -days_diff;
        while countdown > 0 {
            if day > countdown {
                day -= countdown;
                break;
            }
            countdown -= day;
            if month == 1 {
                month = MAX_MONTH;
                year -= 1;
            } else {
                month -= 1;
            }
            day = i64::from(calendar::days_in_month(year, month));
        }
    }

    // The walk leaves day in 1..=32 by construction
    NepaliDate::from_walk(year, month, day as u8)
}

/// Like [`to_bikram_sambat`], but fails when the result falls outside the
/// tabulated year range instead of degrading to the approximate profile.
///
/// # Errors
/// Returns `ConvertError::OutsideTable` when the converted year has no table
/// entry. The walk visits years contiguously from the reference, so checking
/// the final year covers every year it touched.
pub fn to_bikram_sambat_exact(date: GregorianDate) -> Result<NepaliDate, ConvertError> {
    let converted = to_bikram_sambat(date);
    if converted.is_exact() {
        Ok(converted)
    } else {
        Err(ConvertError::OutsideTable(converted.year()))
    }
}
