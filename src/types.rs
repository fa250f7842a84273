use crate::consts::{FEBRUARY, MAX_DAY, MAX_MONTH, MIN_DAY};
use crate::rules::Calendar;
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A year value guaranteed to be non-zero.
///
/// BCE years are negative and year -1 immediately precedes year +1; the year
/// zero of astronomical numbering does not exist in either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a new Year, validating that it's non-zero
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0.
    pub fn new(value: i32) -> Result<Self, DateError> {
        if value == 0 {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(value))
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns the normalized year: BCE years shifted up by one so the year
    /// sequence is continuous across the missing year zero.
    #[inline]
    pub(crate) const fn normalized(self) -> i64 {
        if self.0 > 0 {
            self.0 as i64
        } else {
            self.0 as i64 + 1
        }
    }

    /// Un-normalizes a year, reintroducing the year-zero gap.
    pub(crate) const fn from_normalized(normalized: i64) -> Self {
        let year = if normalized <= 0 {
            normalized - 1
        } else {
            normalized
        };
        debug_assert!(year != 0 && year >= i32::MIN as i64 && year <= i32::MAX as i64);
        Self(year as i32)
    }

    pub(crate) const fn new_unchecked(value: i32) -> Self {
        debug_assert!(value != 0);
        Self(value)
    }
}

impl TryFrom<i32> for Year {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Creates a new Month, validating that it's in `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        if value == 0 || value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value != 0 && value <= MAX_MONTH);
        Self(value)
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given calendar, year, and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(u8);

impl Day {
    /// Creates a new Day, validating it against the month's length in the
    /// given calendar and year. February has 29 days when the calendar's
    /// leap-year rule says so, 28 otherwise.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of
    /// the month.
    pub fn new(value: u8, calendar: Calendar, year: Year, month: Month) -> Result<Self, DateError> {
        if value < MIN_DAY || value > calendar.month_length(year, month) {
            return Err(DateError::InvalidDay {
                year: year.get(),
                month: month.get(),
                day: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value >= MIN_DAY && value <= MAX_DAY);
        Self(value)
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without calendar/year/month context, so only check
        // the bounds that hold for every month.
        if value < MIN_DAY || value > MAX_DAY {
            return Err(DateError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        Ok(Self(value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Shared month-length helper; February length comes from the calendar's
// leap-year rule, every other month is fixed.
pub(crate) const fn month_days(month: u8, february_days: u8) -> u8 {
    if month == FEBRUARY {
        february_days
    } else {
        crate::consts::DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(-1).is_ok());
        assert!(Year::new(-4713).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(Year::new(50_000).is_ok());
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(result, Err(DateError::InvalidYear(0))));
    }

    #[test]
    fn test_year_get() {
        let year = Year::new(-44).unwrap();
        assert_eq!(year.get(), -44);
    }

    #[test]
    fn test_year_normalized() {
        // Positive years are unchanged; BCE years shift up by one.
        assert_eq!(Year::new(2024).unwrap().normalized(), 2024);
        assert_eq!(Year::new(1).unwrap().normalized(), 1);
        assert_eq!(Year::new(-1).unwrap().normalized(), 0);
        assert_eq!(Year::new(-4713).unwrap().normalized(), -4712);
    }

    #[test]
    fn test_year_from_normalized_roundtrip() {
        for year in [-50_000, -4713, -100, -1, 1, 4, 1900, 2024, 50_000] {
            let y = Year::new(year).unwrap();
            assert_eq!(Year::from_normalized(y.normalized()), y);
        }
    }

    #[test]
    fn test_year_display() {
        assert_eq!(Year::new(2024).unwrap().to_string(), "2024");
        assert_eq!(Year::new(-4713).unwrap().to_string(), "-4713");
    }

    #[test]
    fn test_year_try_from_i32() {
        let year: Year = (-4713).try_into().unwrap();
        assert_eq!(year.get(), -4713);

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_ordering() {
        let y1 = Year::new(-1).unwrap();
        let y2 = Year::new(1).unwrap();
        assert!(y1 < y2);
        assert!(y2 > y1);
        assert_eq!(y1, y1);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(-4713).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "-4713");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let rejected: Result<Year, _> = serde_json::from_str("0");
        assert!(rejected.is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(DateError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
    }

    #[test]
    fn test_day_new_valid() {
        let year = Year::new(2024).unwrap();
        let january = Month::new(1).unwrap();
        assert!(Day::new(1, Calendar::Gregorian, year, january).is_ok());
        assert!(Day::new(31, Calendar::Gregorian, year, january).is_ok());

        let april = Month::new(4).unwrap();
        assert!(Day::new(30, Calendar::Gregorian, year, april).is_ok());
        assert!(Day::new(31, Calendar::Gregorian, year, april).is_err());
    }

    #[test]
    fn test_day_new_february() {
        let february = Month::new(2).unwrap();

        // Gregorian: 2024 leap, 2023 regular.
        let leap = Year::new(2024).unwrap();
        assert!(Day::new(29, Calendar::Gregorian, leap, february).is_ok());
        assert!(Day::new(30, Calendar::Gregorian, leap, february).is_err());
        let regular = Year::new(2023).unwrap();
        assert!(Day::new(28, Calendar::Gregorian, regular, february).is_ok());
        assert!(Day::new(29, Calendar::Gregorian, regular, february).is_err());

        // 1900: Julian leap year, Gregorian regular year.
        let y1900 = Year::new(1900).unwrap();
        assert!(Day::new(29, Calendar::Julian, y1900, february).is_ok());
        assert!(Day::new(29, Calendar::Gregorian, y1900, february).is_err());
    }

    #[test]
    fn test_day_new_invalid_zero() {
        let year = Year::new(2024).unwrap();
        let month = Month::new(1).unwrap();
        let result = Day::new(0, Calendar::Gregorian, year, month);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_day_new_invalid_too_large() {
        let year = Year::new(2024).unwrap();
        let month = Month::new(1).unwrap();
        let result = Day::new(32, Calendar::Gregorian, year, month);
        assert!(matches!(
            result,
            Err(DateError::InvalidDay {
                year: 2024,
                month: 1,
                day: 32
            })
        ));
    }

    #[test]
    fn test_day_try_from_u8() {
        // Context-free validation only checks the universal bounds
        let day: Day = 31.try_into().unwrap();
        assert_eq!(day.get(), 31);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Day, _> = 32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_serde() {
        let year = Year::new(2024).unwrap();
        let month = Month::new(8).unwrap();
        let day = Day::new(15, Calendar::Gregorian, year, month).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }
}
