pub mod calendar;
mod consts;
mod convert;
mod format;
mod gregorian;
mod prelude;
mod types;

pub use calendar::{MAX_TABLE_YEAR, MIN_TABLE_YEAR};
pub use consts::*;
pub use convert::{ConvertError, to_bikram_sambat, to_bikram_sambat_exact};
pub use format::{format_nepali_date, format_nepali_date_str};
pub use gregorian::GregorianDate;
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// A Bikram Sambat (Nepali) calendar date.
///
/// Values normally come out of the converter ([`NepaliDate::from_gregorian`]);
/// the constructor validates components for callers that already hold B.S.
/// values. Ordering is lexicographic on (year, month, day), so converted dates
/// sort the same way the underlying Gregorian dates do.
///
/// Unlike [`GregorianDate`], the fields are plain integers behind the
/// validating constructor: this is computed output, and far-future inputs map
/// to B.S. years past the Gregorian [`Year`] cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}/{month:02}/{day:02} B.S.")]
pub struct NepaliDate {
    year: u16,
    month: u8,
    day: u8,
}

impl NepaliDate {
    /// Creates a date, validating the day against the month-length table (or
    /// the approximate profile outside the tabulated range).
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if year == 0 {
            return Err(ParseError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > calendar::days_in_month(year, month) {
            return Err(ParseError::InvalidDay { month, day, year });
        }
        Ok(Self { year, month, day })
    }

    /// Invariant: the converter walk only produces in-range components.
    pub(crate) const fn from_walk(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Converts a Gregorian date; shorthand for [`to_bikram_sambat`].
    pub fn from_gregorian(date: GregorianDate) -> Self {
        convert::to_bikram_sambat(date)
    }

    /// Returns the Bikram Sambat year
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month (1 = Baisakh)
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Name of this date's month, Baisakh through Chaitra.
    pub fn month_name(&self) -> &'static str {
        calendar::MONTH_NAMES[(self.month - 1) as usize]
    }

    /// True when the year is inside the tabulated range, i.e. the date is
    /// calendrically exact rather than approximate.
    pub fn is_exact(&self) -> bool {
        calendar::covers(self.year)
    }

    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for NepaliDate {
    type Err = ParseError;

    /// Parses the canonical display form `YYYY/MM/DD B.S.`. The suffix is
    /// optional; the components are validated like [`NepaliDate::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let date_part = trimmed.strip_suffix(BS_SUFFIX).unwrap_or(trimmed);

        let parts: Vec<&str> = date_part.split(BS_DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY/MM/DD B.S., got: {s}"
            )));
        }

        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for NepaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for NepaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::NepaliDate;
    use crate::gregorian::GregorianDate;

    /// Gregorian date fixture; panics on invalid input so tests read flat.
    pub(crate) fn greg(year: u16, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).expect("test fixture date must be valid")
    }

    /// Bikram Sambat date fixture.
    pub(crate) fn bs(year: u16, month: u8, day: u8) -> NepaliDate {
        NepaliDate::new(year, month, day).expect("test fixture date must be valid")
    }
}
