/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December on the Gregorian side, Chaitra on the B.S. side)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator for Gregorian input (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Date component separator in Bikram Sambat display strings
pub const BS_DATE_SEPARATOR: char = '/';
/// Suffix appended to formatted Bikram Sambat dates
pub const BS_SUFFIX: &str = " B.S.";

// Reference correspondence: Baisakh 1, 2081 B.S. fell on April 13, 2024 A.D.
// Every conversion counts whole days from this anchor.

/// Bikram Sambat year of the reference correspondence
pub const REFERENCE_BS_YEAR: u16 = 2081;
/// Bikram Sambat month of the reference correspondence
pub const REFERENCE_BS_MONTH: u8 = 1;
/// Bikram Sambat day of the reference correspondence
pub const REFERENCE_BS_DAY: u8 = 1;

/// Gregorian year of the reference correspondence
pub const REFERENCE_AD_YEAR: u16 = 2024;
/// Gregorian month of the reference correspondence
pub const REFERENCE_AD_MONTH: u8 = 4;
/// Gregorian day of the reference correspondence
pub const REFERENCE_AD_DAY: u8 = 13;
