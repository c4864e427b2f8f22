//! Upper-case Roman numeral conversion for century ordinals.
//!
//! Only canonical spellings are accepted: "IIII" and "VX" are rejected,
//! as is anything lowercase.

/// Subtractive digit table, largest weight first.
const DIGITS: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Formats a positive integer as a canonical upper-case Roman numeral.
pub(crate) fn format(value: i32) -> String {
    debug_assert!(value > 0, "Roman numerals have no zero or negative form");
    let mut remaining = value;
    let mut out = String::new();
    for (weight, digit) in DIGITS {
        while remaining >= weight {
            out.push_str(digit);
            remaining -= weight;
        }
    }
    out
}

/// Parses a canonical upper-case Roman numeral.
/// Returns `None` for anything else, including non-canonical spellings and
/// numerals whose value does not fit an `i32`.
pub(crate) fn parse(text: &str) -> Option<i32> {
    if text.is_empty() {
        return None;
    }
    let mut value = 0i32;
    let mut rest = text;
    for (weight, digit) in DIGITS {
        while let Some(stripped) = rest.strip_prefix(digit) {
            value = value.checked_add(weight)?;
            rest = stripped;
        }
    }
    // Greedy digit stripping accepts some malformed strings ("IXI" reads
    // as 10); re-formatting catches those along with leftovers.
    if !rest.is_empty() || format(value) != text {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_basic() {
        assert_eq!(format(1), "I");
        assert_eq!(format(3), "III");
        assert_eq!(format(4), "IV");
        assert_eq!(format(9), "IX");
        assert_eq!(format(14), "XIV");
        assert_eq!(format(19), "XIX");
        assert_eq!(format(21), "XXI");
        assert_eq!(format(90), "XC");
        assert_eq!(format(1987), "MCMLXXXVII");
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse("I"), Some(1));
        assert_eq!(parse("V"), Some(5));
        assert_eq!(parse("XIX"), Some(19));
        assert_eq!(parse("XXI"), Some(21));
        assert_eq!(parse("MCMLXXXVII"), Some(1987));
    }

    #[test]
    fn test_parse_rejects_non_canonical() {
        assert_eq!(parse("IIII"), None);
        assert_eq!(parse("VX"), None);
        assert_eq!(parse("IXI"), None);
        assert_eq!(parse("VV"), None);
        assert_eq!(parse("IC"), None);
    }

    #[test]
    fn test_parse_rejects_non_roman() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("iii"), None);
        assert_eq!(parse("X I"), None);
        assert_eq!(parse("X3"), None);
    }

    #[test]
    fn test_parse_rejects_overflowing_value() {
        // Enough M digits to exceed i32; accumulation must bail, not wrap
        let huge = "M".repeat(3_000_000);
        assert_eq!(parse(&huge), None);
    }

    #[test]
    fn test_round_trip() {
        for value in 1..=2000 {
            assert_eq!(parse(&format(value)), Some(value), "value {value}");
        }
    }
}
