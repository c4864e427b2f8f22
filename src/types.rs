use crate::ParseError;
use crate::consts::{MAX_DAY, MAX_MONTH, MONTH_ABBREV_LEN, MONTH_NAMES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A day-of-month value guaranteed to be in the range `1..=MAX_DAY` (1..=31).
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// The grammar accepts any day in `1..=31` regardless of month; historical
/// sources are not required to be calendar-exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay(value))?;
        if value > MAX_DAY {
            return Err(ParseError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Looks up a month by its English name, case-insensitively.
    /// Accepts the full name ("september") or its first three letters ("sep").
    ///
    /// # Errors
    /// Returns `ParseError::UnknownMonth` if the name matches no month.
    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        let lower = name.to_ascii_lowercase();
        for (ordinal, full) in (1u8..).zip(MONTH_NAMES) {
            if lower == full || (lower.len() == MONTH_ABBREV_LEN && full.starts_with(&lower)) {
                return Self::new(ordinal);
            }
        }
        Err(ParseError::UnknownMonth(name.to_owned()))
    }

    /// Returns the canonical lowercase full English name of the month
    pub fn name(self) -> &'static str {
        MONTH_NAMES[usize::from(self.get() - 1)]
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
