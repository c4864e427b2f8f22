//! Grammar parser for the historical-date notation.
//!
//! One point expression reads `["c."] [day month-name] number [":" number] era ["?"]
//! ["{" hint "}"]`; two expressions joined by `" -- "` form a closed range, and a
//! bare trailing `" --"` forms an open-ended one. Parsing is a single
//! non-backtracking pass; any malformed token fails the whole parse.
//!
//! Era signs are committed in a second pass: each expression is first reduced to an
//! unsigned [`PointDraft`], so the left side of a range can inherit the right
//! side's era without mutable parser state.

use crate::consts::{
    CIRCA_PREFIX, DUBIOUS_SUFFIX, ERA_AD, ERA_BC, HINT_CLOSE, HINT_OPEN, MAX_CENTURY, MAX_YEAR,
    OPEN_RANGE_SUFFIX, RANGE_SEPARATOR, SLIDE_SEPARATOR,
};
use crate::point::{DatePoint, DayMonth};
use crate::types::{Day, Month};
use crate::{HistoricalDate, ParseError};

/// The BC/AD sign indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Era {
    Ad,
    Bc,
}

/// Which notation a numeral was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumeralKind {
    /// Decimal digits, a plain year
    Year,
    /// Upper-case Roman numeral, a century ordinal
    Century,
}

/// A fully scanned point expression whose era sign has not been committed yet.
#[derive(Debug)]
struct PointDraft {
    magnitude: i32,
    kind: NumeralKind,
    day_month: Option<DayMonth>,
    slide: Option<i32>,
    approximate: bool,
    dubious: bool,
    hint: Option<String>,
    era: Option<Era>,
}

impl PointDraft {
    /// Commits the era sign, producing the immutable point.
    fn resolve(self, era: Era) -> DatePoint {
        let value = match era {
            Era::Ad => self.magnitude,
            Era::Bc => -self.magnitude,
        };
        let mut point = match (self.kind, self.day_month) {
            (NumeralKind::Century, _) => DatePoint::century(value),
            (NumeralKind::Year, None) => DatePoint::year(value),
            (NumeralKind::Year, Some(dm)) => DatePoint::year_with_day(value, dm.day, dm.month),
        };
        if self.approximate {
            point = point.approximate();
        }
        if self.dubious {
            point = point.dubious();
        }
        if let Some(slide) = self.slide {
            point = point.with_slide(slide);
        }
        if let Some(hint) = self.hint {
            point = point.with_hint(hint);
        }
        point
    }
}

/// Parses a full date expression: one point, a closed range, or an open range.
///
/// # Errors
/// Returns `ParseError` on empty input or any malformed token; no partial
/// result ever escapes.
pub(crate) fn parse(text: &str) -> Result<HistoricalDate, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // Open range: a single point expression followed by a bare trailing marker. A hint
    // ends in '}', so a genuine marker can never be hint text here.
    if let Some(left) = trimmed.strip_suffix(OPEN_RANGE_SUFFIX) {
        if range_separator(left).is_some() {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }
        let draft = parse_point_expr(left)?;
        let era = draft.era.unwrap_or(Era::Ad);
        return Ok(HistoricalDate::OpenRange(draft.resolve(era)));
    }

    if let Some(pos) = range_separator(trimmed) {
        let left = parse_point_expr(&trimmed[..pos])?;
        let right = parse_point_expr(&trimmed[pos + RANGE_SEPARATOR.len()..])?;
        // The right side is the era-inheritance source and must be explicit.
        let right_era = right
            .era
            .ok_or_else(|| ParseError::MissingEra(trimmed.to_owned()))?;
        let left_era = left.era.unwrap_or(right_era);
        return Ok(HistoricalDate::ClosedRange(
            left.resolve(left_era),
            right.resolve(right_era),
        ));
    }

    let draft = parse_point_expr(trimmed)?;
    // A lone point expression without an era token defaults to AD.
    let era = draft.era.unwrap_or(Era::Ad);
    Ok(HistoricalDate::Point(draft.resolve(era)))
}

/// Finds the closed-range separator, skipping any occurrence inside a hint.
fn range_separator(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let pattern = RANGE_SEPARATOR.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            _ => {
                if depth == 0 && bytes[i..].starts_with(pattern) {
                    return Some(i);
                }
            }
        }
        i += 1;
    }
    None
}

/// Scans one point expression into an unsigned draft. Annotations are peeled off the
/// edges (circa prefix, then hint, dubious marker and era off the tail),
/// leaving `[day month-name] number` for token analysis.
fn parse_point_expr(text: &str) -> Result<PointDraft, ParseError> {
    let mut rest = text.trim();
    if rest.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let approximate = match rest.strip_prefix(CIRCA_PREFIX) {
        Some(stripped) => {
            rest = stripped;
            true
        }
        None => false,
    };

    let hint = match rest.find(HINT_OPEN) {
        Some(open) => {
            let inner = rest[open + HINT_OPEN.len_utf8()..]
                .strip_suffix(HINT_CLOSE)
                .ok_or_else(|| ParseError::UnmatchedHint(rest.to_owned()))?;
            let hint = inner.to_owned();
            rest = rest[..open].trim_end();
            Some(hint)
        }
        None => {
            if rest.contains(HINT_CLOSE) {
                return Err(ParseError::UnmatchedHint(rest.to_owned()));
            }
            None
        }
    };

    let dubious = match rest.strip_suffix(DUBIOUS_SUFFIX) {
        Some(stripped) => {
            rest = stripped.trim_end();
            true
        }
        None => false,
    };

    let mut tokens: Vec<&str> = rest.split_whitespace().collect();
    let era = match tokens.last().copied() {
        Some(ERA_AD) => {
            tokens.pop();
            Some(Era::Ad)
        }
        Some(ERA_BC) => {
            tokens.pop();
            Some(Era::Bc)
        }
        _ => None,
    };

    let (day_month, number_token) = match tokens.as_slice() {
        [number] => (None, *number),
        [day_token, month_token, number] => {
            let day = parse_day(day_token)?;
            let month = Month::from_name(month_token)?;
            (Some(DayMonth { day, month }), *number)
        }
        // A day without a month (or any other token count) is malformed.
        _ => return Err(ParseError::InvalidFormat(text.trim().to_owned())),
    };

    let (magnitude, kind, slide) = parse_number(number_token)?;

    // Day and month only exist at year granularity.
    if day_month.is_some() && kind == NumeralKind::Century {
        return Err(ParseError::InvalidFormat(text.trim().to_owned()));
    }

    Ok(PointDraft {
        magnitude,
        kind,
        day_month,
        slide,
        approximate,
        dubious,
        hint,
        era,
    })
}

fn parse_day(token: &str) -> Result<Day, ParseError> {
    let value = token
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(token.to_owned()))?;
    Day::new(value)
}

/// Parses `number[":" number]`, yielding the first magnitude, its kind and
/// the signed slide (`second - first`) when a window was declared.
fn parse_number(token: &str) -> Result<(i32, NumeralKind, Option<i32>), ParseError> {
    match token.split_once(SLIDE_SEPARATOR) {
        None => {
            let (magnitude, kind) = parse_numeral(token)?;
            Ok((magnitude, kind, None))
        }
        Some((first, second)) => {
            let (first_magnitude, first_kind) = parse_numeral(first)?;
            let (second_magnitude, second_kind) = parse_numeral(second)?;
            if first_kind != second_kind {
                return Err(ParseError::MixedNumerals(token.to_owned()));
            }
            Ok((
                first_magnitude,
                first_kind,
                Some(second_magnitude - first_magnitude),
            ))
        }
    }
}

/// Parses one numeral, bounding its magnitude (`MAX_YEAR` for digits,
/// `MAX_CENTURY` for Roman numerals) so every value the parser lets through
/// stays within the ranking arithmetic's range.
fn parse_numeral(token: &str) -> Result<(i32, NumeralKind), ParseError> {
    if token.is_empty() {
        return Err(ParseError::InvalidNumeral(token.to_owned()));
    }
    if token.bytes().all(|b| b.is_ascii_digit()) {
        let value = token
            .parse::<i32>()
            .ok()
            .filter(|&value| value <= MAX_YEAR)
            .ok_or_else(|| ParseError::InvalidNumeral(token.to_owned()))?;
        return Ok((value, NumeralKind::Year));
    }
    crate::roman::parse(token)
        .filter(|&value| value <= MAX_CENTURY)
        .map(|value| (value, NumeralKind::Century))
        .ok_or_else(|| ParseError::InvalidNumeral(token.to_owned()))
}
