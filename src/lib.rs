mod consts;
mod parse;
mod point;
mod prelude;
mod roman;
mod types;

pub use consts::*;
pub use point::{DatePoint, DayMonth, Granularity};
pub use types::{Day, Month};

use crate::prelude::*;
use std::str::FromStr;

/// A historical date: a single uncertain position, a span with both bounds
/// known, or a span with only a lower bound.
///
/// Values are immutable once constructed, either by parsing the compact
/// notation (`"c.12 may 23 BC?"`, `"123 AD -- 135 AD"`, `"123 AD --"`) via
/// [`FromStr`], or directly from [`DatePoint`]s. Formatting through
/// [`Display`](std::fmt::Display) is the structural inverse of parsing:
/// re-parsing the output yields a structurally equal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum HistoricalDate {
    /// A single position
    #[display(fmt = "{}", _0)]
    Point(DatePoint),
    /// A span with both bounds known
    #[display(fmt = "{} -- {}", _0, _1)]
    ClosedRange(DatePoint, DatePoint),
    /// A span with only a lower bound (terminus post quem)
    #[display(fmt = "{} --", _0)]
    OpenRange(DatePoint),
}

/// The shape of a [`HistoricalDate`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateVariant {
    Point,
    ClosedRange,
    OpenRange,
}

/// Error type for historical date parsing. Parsing is all-or-nothing: any
/// malformed token fails the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Unknown month name: {0}")]
    UnknownMonth(String),
    #[error("Invalid day: {0} (must be 1-31)")]
    InvalidDay(u8),
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),
    #[error("Invalid numeral: {0}")]
    InvalidNumeral(String),
    #[error("Mixed numeral kinds in slide pair: {0}")]
    MixedNumerals(String),
    #[error("Missing era token: {0}")]
    MissingEra(String),
    #[error("Unmatched hint brace: {0}")]
    UnmatchedHint(String),
}

impl HistoricalDate {
    /// Returns the shape of this date
    pub const fn variant(&self) -> DateVariant {
        match self {
            Self::Point(_) => DateVariant::Point,
            Self::ClosedRange(_, _) => DateVariant::ClosedRange,
            Self::OpenRange(_) => DateVariant::OpenRange,
        }
    }

    /// Returns the first (or only) point of the date
    pub const fn start(&self) -> &DatePoint {
        match self {
            Self::Point(a) | Self::ClosedRange(a, _) | Self::OpenRange(a) => a,
        }
    }

    /// Returns the upper bound, present only for a closed range
    pub const fn end(&self) -> Option<&DatePoint> {
        match self {
            Self::ClosedRange(_, b) => Some(b),
            Self::Point(_) | Self::OpenRange(_) => None,
        }
    }

    /// Reduces the date to a single comparable year for sorting and
    /// filtering. Pure and total; for an unambiguous single point (year
    /// granularity, no slide) this is the year itself.
    ///
    /// - a point ranks at the midpoint of its slide window;
    /// - a closed range ranks at the floor of the mean of both points'
    ///   latest edges;
    /// - an open range ranks past its lower bound by the declared slide,
    ///   or by [`APPROX_DELTA`] when none was declared.
    pub fn to_year(&self) -> i32 {
        match self {
            Self::Point(a) => a.rank_year(),
            Self::ClosedRange(a, b) => (a.latest_year() + b.latest_year()).div_euclid(2),
            Self::OpenRange(a) => a.base_year() + a.slide().unwrap_or(APPROX_DELTA),
        }
    }
}

impl FromStr for HistoricalDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s)
    }
}

impl serde::Serialize for HistoricalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HistoricalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
