//! Bikram Sambat month-length table.
//!
//! B.S. month lengths vary year to year and follow no closed formula, so the
//! crate carries the official per-year lengths for a bounded span and counts
//! days against them. Outside the span, lookups degrade to an approximate
//! fixed profile; [`covers`] tells callers which regime a year falls in.

use crate::consts::MAX_MONTH;

/// First B.S. year covered by the table (inclusive).
pub const MIN_TABLE_YEAR: u16 = 2070;
/// Last B.S. year covered by the table (inclusive).
pub const MAX_TABLE_YEAR: u16 = 2090;

/// Day count of a year outside the table.
pub(crate) const APPROX_YEAR_DAYS: u16 = 365;

/// Month profile used outside the table: 365 days split as evenly as twelve
/// whole-day months allow.
pub(crate) const APPROX_MONTH_LENGTHS: [u8; 12] = [31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 30, 30];

/// Official month lengths for B.S. 2070..=2090, indexed by `year - MIN_TABLE_YEAR`.
/// Every entry is in 29..=32.
const MONTH_LENGTHS: [[u8; 12]; 21] = [
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2081
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2082
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2083
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2084
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2085
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2086
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2087
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2088
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2089
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2090
];

/// Bikram Sambat month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Ashoj", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Returns true when the table holds exact month lengths for `year`.
pub fn covers(year: u16) -> bool {
    (MIN_TABLE_YEAR..=MAX_TABLE_YEAR).contains(&year)
}

/// Returns the twelve month lengths for `year`, or `None` outside the table.
pub fn month_lengths(year: u16) -> Option<&'static [u8; 12]> {
    if covers(year) {
        Some(&MONTH_LENGTHS[(year - MIN_TABLE_YEAR) as usize])
    } else {
        None
    }
}

/// Days in the given B.S. month.
///
/// Outside the tabulated range this returns the approximate profile, so the
/// value is plausible but not calendrically exact.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let lengths = month_lengths(year).unwrap_or(&APPROX_MONTH_LENGTHS);
    lengths[(month - 1) as usize]
}

/// Total days in the given B.S. year (365 outside the table).
pub fn days_in_year(year: u16) -> u16 {
    month_lengths(year).map_or(APPROX_YEAR_DAYS, |lengths| {
        lengths.iter().map(|&d| u16::from(d)).sum()
    })
}

/// Returns the name of the given B.S. month (1 = Baisakh), or `None` if the
/// month is out of range.
pub fn month_name(month: u8) -> Option<&'static str> {
    if month == 0 || month > MAX_MONTH {
        return None;
    }
    Some(MONTH_NAMES[(month - 1) as usize])
}
