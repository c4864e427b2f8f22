use crate::consts::{
    CENTURY_MIDPOINT_OFFSET, CIRCA_PREFIX, DUBIOUS_SUFFIX, ERA_AD, ERA_BC, HINT_CLOSE, HINT_OPEN,
    MAX_CENTURY, MAX_YEAR, SLIDE_SEPARATOR, YEARS_PER_CENTURY,
};
use crate::roman;
use crate::types::{Day, Month};
use std::fmt;

/// A day-and-month pair pinning a year-granularity point to a calendar date.
/// Day and month travel together; one without the other is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayMonth {
    pub day: Day,
    pub month: Month,
}

/// Whether a [`DatePoint`]'s value counts years or centuries.
///
/// A day/month pair only makes sense at year granularity, so it lives inside
/// the `Year` variant; "century with a day" cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// The value is a plain year, optionally pinned to a day and month.
    Year { day_month: Option<DayMonth> },
    /// The value is a century ordinal.
    Century,
}

/// One calendar position with uncertainty annotations.
///
/// The sign of `value` encodes the era: negative is BCE. When the
/// granularity is [`Granularity::Century`], `value` is a century ordinal
/// rather than a year. Instances are immutable once built; the builder
/// methods consume and return the point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatePoint {
    value: i32,
    granularity: Granularity,
    approximate: bool,
    dubious: bool,
    slide: Option<i32>,
    hint: Option<String>,
}

impl DatePoint {
    /// Creates a point at year granularity. The magnitude must stay within
    /// `MAX_YEAR`, the same bound the parser enforces.
    pub const fn year(value: i32) -> Self {
        debug_assert!(-MAX_YEAR <= value && value <= MAX_YEAR);
        Self {
            value,
            granularity: Granularity::Year { day_month: None },
            approximate: false,
            dubious: false,
            slide: None,
            hint: None,
        }
    }

    /// Creates a point at year granularity pinned to a day and month.
    pub const fn year_with_day(value: i32, day: Day, month: Month) -> Self {
        debug_assert!(-MAX_YEAR <= value && value <= MAX_YEAR);
        Self {
            value,
            granularity: Granularity::Year {
                day_month: Some(DayMonth { day, month }),
            },
            approximate: false,
            dubious: false,
            slide: None,
            hint: None,
        }
    }

    /// Creates a point at century granularity. The ordinal must not be zero
    /// (there is no zeroth century in either era) and its magnitude must
    /// stay within `MAX_CENTURY`, the same bound the parser enforces.
    pub const fn century(ordinal: i32) -> Self {
        debug_assert!(ordinal != 0, "century ordinals start at 1");
        debug_assert!(-MAX_CENTURY <= ordinal && ordinal <= MAX_CENTURY);
        Self {
            value: ordinal,
            granularity: Granularity::Century,
            approximate: false,
            dubious: false,
            slide: None,
            hint: None,
        }
    }

    /// Marks the point as approximate ("circa").
    #[must_use]
    pub fn approximate(mut self) -> Self {
        self.approximate = true;
        self
    }

    /// Marks the point as dubious.
    #[must_use]
    pub fn dubious(mut self) -> Self {
        self.dubious = true;
        self
    }

    /// Declares an uncertainty window of the given signed width.
    #[must_use]
    pub fn with_slide(mut self, slide: i32) -> Self {
        self.slide = Some(slide);
        self
    }

    /// Attaches a free-text hint, kept verbatim.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Returns the year number, or the century ordinal at century
    /// granularity. Negative means BCE.
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns the granularity tag, including any day/month pair
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Returns true when the value is a century ordinal
    pub const fn is_century(&self) -> bool {
        matches!(self.granularity, Granularity::Century)
    }

    /// Returns the day component if present (as u8 for convenience)
    pub const fn day(&self) -> Option<u8> {
        match self.granularity {
            Granularity::Year {
                day_month: Some(dm),
            } => Some(dm.day.get()),
            Granularity::Year { day_month: None } | Granularity::Century => None,
        }
    }

    /// Returns the month component if present (as u8 for convenience)
    pub const fn month(&self) -> Option<u8> {
        match self.granularity {
            Granularity::Year {
                day_month: Some(dm),
            } => Some(dm.month.get()),
            Granularity::Year { day_month: None } | Granularity::Century => None,
        }
    }

    /// Returns true if the point carries the "circa" marker
    pub const fn is_approximate(&self) -> bool {
        self.approximate
    }

    /// Returns true if the point carries the reliability marker
    pub const fn is_dubious(&self) -> bool {
        self.dubious
    }

    /// Returns the declared uncertainty window width, if any
    pub const fn slide(&self) -> Option<i32> {
        self.slide
    }

    /// Returns the free-text hint, if any
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

// --- ranking primitives ---

impl DatePoint {
    /// The point's value as a plain year: the year itself, or the midpoint
    /// year of the century (`ordinal * 100 - 50`, sign carried by the
    /// ordinal).
    pub const fn base_year(&self) -> i32 {
        match self.granularity {
            Granularity::Century => self.value * YEARS_PER_CENTURY - CENTURY_MIDPOINT_OFFSET,
            Granularity::Year { .. } => self.value,
        }
    }

    /// Single comparable year for a point standing alone: the slide window
    /// resolved to its midpoint. Odd slides halve toward zero.
    pub const fn rank_year(&self) -> i32 {
        self.base_year() + self.slide_or_zero() / 2
    }

    /// Latest edge of the point's uncertainty window.
    pub const fn latest_year(&self) -> i32 {
        self.base_year() + self.slide_or_zero()
    }

    const fn slide_or_zero(&self) -> i32 {
        match self.slide {
            Some(slide) => slide,
            None => 0,
        }
    }
}

impl fmt::Display for DatePoint {
    /// Canonical notation:
    /// `["c."] [day month-name] number[":" number'] era ["?"] ["{" hint "}"]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.approximate {
            write!(f, "{CIRCA_PREFIX}")?;
        }
        if let Granularity::Year {
            day_month: Some(dm),
        } = self.granularity
        {
            write!(f, "{} {} ", dm.day, dm.month.name())?;
        }
        let magnitude = self.value.abs();
        match self.granularity {
            Granularity::Century => {
                write!(f, "{}", roman::format(magnitude))?;
                if let Some(slide) = self.slide {
                    write!(f, "{SLIDE_SEPARATOR}{}", roman::format(magnitude + slide))?;
                }
            }
            Granularity::Year { .. } => {
                write!(f, "{magnitude}")?;
                if let Some(slide) = self.slide {
                    write!(f, "{SLIDE_SEPARATOR}{}", magnitude + slide)?;
                }
            }
        }
        let era = if self.value < 0 { ERA_BC } else { ERA_AD };
        write!(f, " {era}")?;
        if self.dubious {
            write!(f, "{DUBIOUS_SUFFIX}")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " {HINT_OPEN}{hint}{HINT_CLOSE}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(value: u8) -> Day {
        Day::new(value).unwrap()
    }

    fn month(value: u8) -> Month {
        Month::new(value).unwrap()
    }

    #[test]
    fn test_year_constructor_defaults() {
        let point = DatePoint::year(23);
        assert_eq!(point.value(), 23);
        assert!(!point.is_century());
        assert_eq!(point.day(), None);
        assert_eq!(point.month(), None);
        assert!(!point.is_approximate());
        assert!(!point.is_dubious());
        assert_eq!(point.slide(), None);
        assert_eq!(point.hint(), None);
    }

    #[test]
    fn test_year_with_day_accessors() {
        let point = DatePoint::year_with_day(-23, day(12), month(5));
        assert_eq!(point.value(), -23);
        assert_eq!(point.day(), Some(12));
        assert_eq!(point.month(), Some(5));
    }

    #[test]
    fn test_century_has_no_day_month() {
        let point = DatePoint::century(3);
        assert!(point.is_century());
        assert_eq!(point.day(), None);
        assert_eq!(point.month(), None);
    }

    #[test]
    fn test_builder_markers() {
        let point = DatePoint::year(23)
            .approximate()
            .dubious()
            .with_slide(10)
            .with_hint("battle of X");
        assert!(point.is_approximate());
        assert!(point.is_dubious());
        assert_eq!(point.slide(), Some(10));
        assert_eq!(point.hint(), Some("battle of X"));
    }

    #[test]
    fn test_base_year_plain() {
        assert_eq!(DatePoint::year(1230).base_year(), 1230);
        assert_eq!(DatePoint::year(-810).base_year(), -810);
    }

    #[test]
    fn test_base_year_century_midpoint() {
        assert_eq!(DatePoint::century(3).base_year(), 250);
        assert_eq!(DatePoint::century(1).base_year(), 50);
        assert_eq!(DatePoint::century(-3).base_year(), -350);
    }

    #[test]
    fn test_rank_year_even_slide() {
        assert_eq!(DatePoint::year(1230).with_slide(10).rank_year(), 1235);
        assert_eq!(DatePoint::year(810).with_slide(-10).rank_year(), 805);
    }

    #[test]
    fn test_rank_year_odd_slide_halves_toward_zero() {
        // Documented rule: odd slides halve toward zero in both directions
        assert_eq!(DatePoint::year(100).with_slide(5).rank_year(), 102);
        assert_eq!(DatePoint::year(100).with_slide(-5).rank_year(), 98);
        assert_eq!(DatePoint::year(-100).with_slide(5).rank_year(), -98);
        assert_eq!(DatePoint::year(-100).with_slide(-5).rank_year(), -102);
        assert_eq!(DatePoint::year(1).with_slide(1).rank_year(), 1);
    }

    #[test]
    fn test_latest_year() {
        assert_eq!(DatePoint::year(1230).latest_year(), 1230);
        assert_eq!(DatePoint::year(1230).with_slide(10).latest_year(), 1240);
        assert_eq!(DatePoint::century(3).with_slide(2).latest_year(), 252);
    }

    #[test]
    fn test_display_plain_year() {
        assert_eq!(DatePoint::year(23).to_string(), "23 AD");
        assert_eq!(DatePoint::year(-25).to_string(), "25 BC");
    }

    #[test]
    fn test_display_markers() {
        let point = DatePoint::year(23).approximate().dubious();
        assert_eq!(point.to_string(), "c.23 AD?");
    }

    #[test]
    fn test_display_day_month() {
        let point = DatePoint::year_with_day(-23, day(12), month(5))
            .approximate()
            .dubious();
        assert_eq!(point.to_string(), "c.12 may 23 BC?");
    }

    #[test]
    fn test_display_slide() {
        assert_eq!(
            DatePoint::year(1230).with_slide(10).to_string(),
            "1230:1240 AD"
        );
        assert_eq!(
            DatePoint::year(-810).with_slide(-5).to_string(),
            "810:805 BC"
        );
    }

    #[test]
    fn test_display_century() {
        assert_eq!(DatePoint::century(3).to_string(), "III AD");
        assert_eq!(DatePoint::century(3).with_slide(2).to_string(), "III:V AD");
        assert_eq!(DatePoint::century(-4).to_string(), "IV BC");
    }

    #[test]
    fn test_display_hint() {
        let point = DatePoint::year(-25).with_hint("marriage of Julia and Marcellus");
        assert_eq!(
            point.to_string(),
            "25 BC {marriage of Julia and Marcellus}"
        );
    }
}
