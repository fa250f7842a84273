/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Largest day number any month can have
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by the calendar's leap-year rule)
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

/// Cumulative days before each month of a 12-month year that starts in March.
///
/// With March first, February is the last month of the year and its leap day
/// (if present) is the last day of the year, so this table is the same for
/// regular and leap years. Index 0 is March, index 11 is February.
pub(crate) const DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337];

/// Days in a regular year
pub(crate) const DAYS_PER_YEAR: i64 = 365;
/// Days in a 4-year leap cycle (3 regular years + 1 leap year)
pub(crate) const DAYS_PER_LEAP_CYCLE: i64 = 1_461;
/// Days in a Gregorian century (100 years with the century leap day dropped)
pub(crate) const DAYS_PER_CENTURY: i64 = 36_524;
/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not Gregorian leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Julian day number of March 1st of normalized year 0, Julian calendar.
/// Anchors JDN 0 to January 1st, 4713 BCE (Julian).
pub(crate) const JULIAN_YEAR_ZERO_JDN: i64 = 1_721_118;
/// Julian day number of March 1st of normalized year 0, Gregorian calendar.
/// Anchors JDN 0 to November 24th, 4714 BCE (Gregorian).
pub(crate) const GREGORIAN_YEAR_ZERO_JDN: i64 = 1_721_120;
