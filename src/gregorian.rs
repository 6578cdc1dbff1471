//! Gregorian (A.D.) calendar dates: the input side of the converter.

use crate::ParseError;
use crate::consts::{DATE_SEPARATOR, JANUARY, MAX_MONTH, MAX_YEAR, MIN_DAY};
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month};
use std::str::FromStr;

/// A validated Gregorian calendar date.
///
/// Ordering is lexicographic on (year, month, day). The type is the sole entry
/// into the converter: anything that reaches it is a real calendar day, so the
/// day-walk never has to re-validate its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year: Year,
    month: Month,
    day: Day,
}

impl GregorianDate {
    /// Creates a new date, validating every component.
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range for the Gregorian
    /// calendar (including leap-year rules for February).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Day number in a proleptic Gregorian day count (days since 1970-01-01).
    ///
    /// All conversions difference two of these, so time-of-day and timezone
    /// can never shift a result.
    pub fn to_epoch_days(&self) -> i64 {
        epoch_days(self.year(), self.month(), self.day())
    }

    /// Whole days from `other` to `self` (negative when `self` is earlier).
    pub fn days_since(&self, other: &Self) -> i64 {
        self.to_epoch_days() - other.to_epoch_days()
    }

    /// The next calendar day, or `None` past `MAX_YEAR`.
    pub fn tomorrow(&self) -> Option<Self> {
        let (y, m, d) = (self.year(), self.month(), self.day());
        if d < days_in_month(y, m) {
            return Self::new(y, m, d + 1).ok();
        }
        if m < MAX_MONTH {
            return Self::new(y, m + 1, MIN_DAY).ok();
        }
        if y >= MAX_YEAR {
            return None;
        }
        Self::new(y + 1, JANUARY, MIN_DAY).ok()
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

/// Day number of a civil date in the proleptic Gregorian calendar,
/// relative to 1970-01-01 (the standard days-from-civil computation).
pub(crate) const fn epoch_days(year: u16, month: u8, day: u8) -> i64 {
    let y = if month <= 2 {
        year as i64 - 1
    } else {
        year as i64
    };
    // y >= 0 for every valid Year, so truncating division is euclidean here
    let era = y / 400;
    let yoe = y - era * 400;
    let mp = if month > 2 {
        (month - 3) as i64
    } else {
        (month + 9) as i64
    };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`, optionally followed by an ISO-8601 time part
    /// (`T` or space separator) which is ignored along with any zone offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Only the calendar day matters, so two representations of the same
        // day in different timezones parse to the same date.
        let date_part = match trimmed.find(['T', ' ']) {
            Some(pos) => &trimmed[..pos],
            None => trimmed,
        };

        let parts: Vec<&str> = date_part.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY-MM-DD, got: {s}"
            )));
        }

        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
