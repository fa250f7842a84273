use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DAYS_PER_CENTURY,
    DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_LEAP_CYCLE, DAYS_PER_YEAR, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, GREGORIAN_YEAR_ZERO_JDN, JULIAN_YEAR_ZERO_JDN, LEAP_YEAR_CYCLE,
};
use crate::types::{month_days, Day, Month, Year};
use crate::{CalendarDate, DateError};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// One row of a calendar's leap-year cycle: a period spanning `years` years
/// and `days` days, peeled off at most `max_periods` times (or without limit).
///
/// The limit handles the period that runs short at a cycle boundary: the
/// fourth Gregorian century in a 400-year cycle is one day longer than the
/// other three, so at most three full 36524-day centuries may be subtracted
/// before falling through to the 4-year row. Same for the fourth year of a
/// 4-year cycle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LeapPeriod {
    pub days: i64,
    pub years: i64,
    pub max_periods: Option<i64>,
}

/// The per-calendar constants the generic conversion algorithms run on:
/// a leap-year predicate over normalized years, the ordered leap-year period
/// table, and the closed-form day number of March 1st of a normalized year.
///
/// The period table and the closed form must describe the same cycle
/// structure; both directions of conversion share them as the single source
/// of truth.
pub(crate) struct CalendarRules {
    pub is_leap: fn(i64) -> bool,
    pub periods: &'static [LeapPeriod],
    pub year_day_number: fn(i64) -> i64,
}

fn julian_leap(normalized_year: i64) -> bool {
    normalized_year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

fn gregorian_leap(normalized_year: i64) -> bool {
    (normalized_year.rem_euclid(LEAP_YEAR_CYCLE) == 0)
        ^ (normalized_year.rem_euclid(CENTURY_CYCLE) == 0)
        ^ (normalized_year.rem_euclid(GREGORIAN_CYCLE) == 0)
}

/// Julian day number of March 1st of a normalized year, Julian calendar.
fn julian_year_day_number(normalized_year: i64) -> i64 {
    JULIAN_YEAR_ZERO_JDN
        + DAYS_PER_YEAR * normalized_year
        + normalized_year.div_euclid(LEAP_YEAR_CYCLE)
}

/// Julian day number of March 1st of a normalized year, Gregorian calendar.
fn gregorian_year_day_number(normalized_year: i64) -> i64 {
    GREGORIAN_YEAR_ZERO_JDN
        + DAYS_PER_YEAR * normalized_year
        + normalized_year.div_euclid(LEAP_YEAR_CYCLE)
        - normalized_year.div_euclid(CENTURY_CYCLE)
        + normalized_year.div_euclid(GREGORIAN_CYCLE)
}

static JULIAN_RULES: CalendarRules = CalendarRules {
    is_leap: julian_leap,
    periods: &[
        LeapPeriod {
            days: DAYS_PER_LEAP_CYCLE,
            years: 4,
            max_periods: None,
        },
        LeapPeriod {
            days: DAYS_PER_YEAR,
            years: 1,
            max_periods: Some(3),
        },
    ],
    year_day_number: julian_year_day_number,
};

static GREGORIAN_RULES: CalendarRules = CalendarRules {
    is_leap: gregorian_leap,
    periods: &[
        LeapPeriod {
            days: DAYS_PER_GREGORIAN_CYCLE,
            years: 400,
            max_periods: None,
        },
        LeapPeriod {
            days: DAYS_PER_CENTURY,
            years: 100,
            max_periods: Some(3),
        },
        LeapPeriod {
            days: DAYS_PER_LEAP_CYCLE,
            years: 4,
            max_periods: None,
        },
        LeapPeriod {
            days: DAYS_PER_YEAR,
            years: 1,
            max_periods: Some(3),
        },
    ],
    year_day_number: gregorian_year_day_number,
};

/// The two supported proleptic calendars.
///
/// Both calendars map dates onto the same absolute day count, so dates from
/// different calendars order and compare against each other directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Calendar {
    /// Proleptic Julian calendar: every fourth normalized year is a leap year.
    #[display(fmt = "Julian")]
    Julian,
    /// Proleptic Gregorian calendar: every fourth normalized year is a leap
    /// year, except centuries not divisible by 400.
    #[display(fmt = "Gregorian")]
    Gregorian,
}

impl Calendar {
    pub(crate) fn rules(self) -> &'static CalendarRules {
        match self {
            Self::Julian => &JULIAN_RULES,
            Self::Gregorian => &GREGORIAN_RULES,
        }
    }

    /// Returns whether the year is a leap year under this calendar's rule.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if `year` is 0.
    pub fn is_leap_year(self, year: i32) -> Result<bool, DateError> {
        Ok(self.leap(Year::new(year)?))
    }

    /// Returns the length in days of the given month in the given year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if `year` is 0 and
    /// `DateError::InvalidMonth` if `month` is outside `1..=12`.
    pub fn length_of_month(self, year: i32, month: u8) -> Result<u8, DateError> {
        Ok(self.month_length(Year::new(year)?, Month::new(month)?))
    }

    /// Constructs a date in this calendar, validating all fields.
    ///
    /// # Errors
    /// Returns `DateError` if the year is 0, the month is outside `1..=12`,
    /// or the day is outside the month.
    pub fn date(self, year: i32, month: u8, day: u8) -> Result<CalendarDate, DateError> {
        CalendarDate::new(self, year, month, day)
    }

    /// Converts a Julian day number to the date it denotes in this calendar.
    ///
    /// Works by rebasing the day number to March 1st of normalized year 0,
    /// then peeling off whole leap-year periods (largest first) to recover
    /// the year, then scanning the March-first month table. Total for any
    /// day number whose year fits the supported range.
    pub fn from_julian_day_number(self, julian_day_number: i64) -> CalendarDate {
        let rules = self.rules();

        let mut year: i64 = 0;
        let mut days = julian_day_number - (rules.year_day_number)(0);

        // Peel off the leap-year periods. Floor division keeps day numbers
        // before the epoch on the correct side of each period boundary.
        for period in rules.periods {
            let mut periods = days.div_euclid(period.days);
            if let Some(max_periods) = period.max_periods {
                if periods > max_periods {
                    periods = max_periods;
                }
            }
            year += periods * period.years;
            days -= periods * period.days;
        }

        // Find the month; the last entry (February) takes whatever remains.
        let mut month = 0;
        while month < 11 && days >= DAYS_BEFORE_MONTH[month + 1] {
            month += 1;
        }
        days -= DAYS_BEFORE_MONTH[month];
        let day = days + 1;

        // Move start-of-year from March back to January.
        let mut month = month as i64 + 3;
        if month > 12 {
            month -= 12;
            year += 1;
        }

        CalendarDate::from_raw_parts(
            self,
            Year::from_normalized(year),
            Month::new_unchecked(month as u8),
            Day::new_unchecked(day as u8),
        )
    }

    pub(crate) fn leap(self, year: Year) -> bool {
        (self.rules().is_leap)(year.normalized())
    }

    pub(crate) fn month_length(self, year: Year, month: Month) -> u8 {
        let february_days = if self.leap(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[FEBRUARY as usize]
        };
        month_days(month.get(), february_days)
    }

    /// Julian day number of March 1st of a normalized year.
    pub(crate) fn year_day_number(self, normalized_year: i64) -> i64 {
        (self.rules().year_day_number)(normalized_year)
    }
}
