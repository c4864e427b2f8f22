/// Maximum valid day (the grammar accepts 1..=31 regardless of month)
pub const MAX_DAY: u8 = 31;

/// Maximum year magnitude a numeral may encode, either era
pub const MAX_YEAR: i32 = 9999;

/// Maximum century ordinal a numeral may encode, either era.
/// Century C ends in year 10000, mirroring the year bound.
pub const MAX_CENTURY: i32 = 100;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Lowercase full English month names, indexed by ordinal - 1.
/// Lookup also accepts the first three letters of each name.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Length of a recognized month-name abbreviation ("jan", "feb", ...)
pub const MONTH_ABBREV_LEN: usize = 3;

/// "circa" prefix marking an approximate point
pub const CIRCA_PREFIX: &str = "c.";

/// Trailing marker for a dubious point
pub const DUBIOUS_SUFFIX: char = '?';

/// Separates the two numerals of a declared uncertainty window ("X:Y")
pub const SLIDE_SEPARATOR: char = ':';

/// Opening brace of a free-text hint
pub const HINT_OPEN: char = '{';

/// Closing brace of a free-text hint
pub const HINT_CLOSE: char = '}';

/// Era token keeping the value non-negative (CE)
pub const ERA_AD: &str = "AD";

/// Era token negating the value (BCE)
pub const ERA_BC: &str = "BC";

/// Joins the two point expressions of a closed range
pub const RANGE_SEPARATOR: &str = " -- ";

/// Bare trailing marker of an open-ended range (terminus post quem)
pub const OPEN_RANGE_SUFFIX: &str = " --";

/// Years per century ordinal
pub(crate) const YEARS_PER_CENTURY: i32 = 100;

/// Offset from a century's end year back to its midpoint
pub(crate) const CENTURY_MIDPOINT_OFFSET: i32 = 50;

/// Fallback uncertainty width, in years, used when ranking an open-ended
/// range whose point declared no explicit slide. The original notation
/// leaves this width unstated; ten years keeps open ranges close to their
/// lower bound without collapsing onto it.
pub const APPROX_DELTA: i32 = 10;
