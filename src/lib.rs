mod consts;
mod prelude;
mod rules;
mod types;

pub use consts::*;
pub use rules::Calendar;
pub use types::{Day, Month, Year};

use crate::consts::DAYS_BEFORE_MONTH;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

/// A validated date in one of the proleptic calendars.
///
/// A date is immutable once constructed and always satisfies its calendar's
/// rules: the year is non-zero, the month is in `1..=12`, and the day fits
/// the month. Equality, ordering, and hashing go through the Julian day
/// number, so a Julian and a Gregorian date denoting the same day compare
/// equal, e.g. `Julian 1752-09-02 == Gregorian 1752-09-13`.
#[derive(Debug, Clone, Copy, Display, Serialize, Deserialize)]
#[display(fmt = "{} {}-{:02}-{:02}", calendar, "year.get()", "month.get()", "day.get()")]
#[serde(try_from = "DateParts", into = "DateParts")]
pub struct CalendarDate {
    calendar: Calendar,
    year: Year,
    month: Month,
    day: Day,
}

/// Error type for date construction and calendar queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The year is 0, which exists in neither calendar.
    #[error("invalid year: {0} (year zero does not exist)")]
    InvalidYear(i32),

    /// The month is outside `1..=12`.
    #[error("invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// The day is outside the month.
    #[error("invalid day {day} for year {year}, month {month}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

impl CalendarDate {
    /// Creates a date in the given calendar, validating all three fields.
    ///
    /// # Errors
    /// Returns `DateError` if the year is 0, the month is outside `1..=12`,
    /// or the day is outside the resolved month.
    pub fn new(calendar: Calendar, year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, calendar, year, month)?;
        Ok(Self {
            calendar,
            year,
            month,
            day,
        })
    }

    /// Creates a date in the proleptic Julian calendar.
    ///
    /// # Errors
    /// Same as [`CalendarDate::new`].
    pub fn julian(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(Calendar::Julian, year, month, day)
    }

    /// Creates a date in the proleptic Gregorian calendar.
    ///
    /// # Errors
    /// Same as [`CalendarDate::new`].
    pub fn gregorian(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(Calendar::Gregorian, year, month, day)
    }

    // Fields must already satisfy the calendar's rules.
    pub(crate) const fn from_raw_parts(
        calendar: Calendar,
        year: Year,
        month: Month,
        day: Day,
    ) -> Self {
        Self {
            calendar,
            year,
            month,
            day,
        }
    }

    /// Returns the calendar this date is expressed in
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Returns the year (negative for BCE)
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Decomposes the date into `(year, month, day)`
    pub const fn to_parts(&self) -> (i32, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Returns whether this date's year is a leap year in its calendar
    pub fn is_leap_year(&self) -> bool {
        self.calendar.leap(self.year)
    }

    /// Returns the length in days of this date's month
    pub fn length_of_month(&self) -> u8 {
        self.calendar.month_length(self.year, self.month)
    }

    /// Converts this date to its Julian day number.
    ///
    /// The year is normalized across the missing year zero and re-indexed to
    /// start in March, which pushes February and its optional leap day to the
    /// end of the year; the month offsets then come from a single fixed
    /// table regardless of leap status.
    pub fn to_julian_day_number(&self) -> i64 {
        let mut normalized_year = self.year.normalized();

        let mut month = self.month.get() as i64 - 3;
        if month < 0 {
            month += 12;
            normalized_year -= 1;
        }

        let day = self.day.get() as i64 - 1;

        self.calendar.year_day_number(normalized_year) + DAYS_BEFORE_MONTH[month as usize] + day
    }

    /// Returns the calendar day immediately following this one.
    ///
    /// Crossing from December 31st of year -1 lands on January 1st of year
    /// +1; there is no year zero to pass through.
    pub fn next_day(&self) -> Self {
        let (mut year, mut month, mut day) = self.to_parts();

        if day == self.length_of_month() {
            day = 0;
            if month == DECEMBER {
                month = 0;
                if year == -1 {
                    year = 0;
                }
                year += 1;
            }
            month += 1;
        }
        day += 1;

        Self {
            calendar: self.calendar,
            year: Year::new_unchecked(year),
            month: Month::new_unchecked(month),
            day: Day::new_unchecked(day),
        }
    }

    /// Returns an unbounded iterator over consecutive days, starting with
    /// this date itself. The iterator is pure and restartable; it holds no
    /// state beyond the next date to yield.
    pub const fn days(&self) -> Days {
        Days { next: *self }
    }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CalendarDate {}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    /// Total order by the underlying day count. Field-wise comparison would
    /// be wrong across calendars and across the BCE/CE boundary, so every
    /// relation is derived from this one conversion.
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_julian_day_number().cmp(&other.to_julian_day_number())
    }
}

impl Hash for CalendarDate {
    // Must agree with equality, which is calendar-agnostic.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_julian_day_number().hash(state);
    }
}

impl TryFrom<(Calendar, i32, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from(value: (Calendar, i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

/// Raw serialization form of a date; deserialization re-validates through
/// `CalendarDate::new`.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct DateParts {
    calendar: Calendar,
    year: i32,
    month: u8,
    day: u8,
}

impl From<CalendarDate> for DateParts {
    fn from(date: CalendarDate) -> Self {
        Self {
            calendar: date.calendar,
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl TryFrom<DateParts> for CalendarDate {
    type Error = DateError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.calendar, parts.year, parts.month, parts.day)
    }
}

/// Unbounded forward iterator over consecutive calendar days.
#[derive(Debug, Clone, Copy)]
pub struct Days {
    next: CalendarDate,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next;
        self.next = current.next_day();
        Some(current)
    }
}

impl FusedIterator for Days {}
