//! Calendar date used by every schedule and valuation routine.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A day/month/year calendar date with no time component.
///
/// Components are range-checked (day 1..=31, month 1..=12, year >= 1) but
/// not checked for calendar validity, so `31/02/2024` is accepted. Ordering
/// is lexicographic on (year, month, day).
///
/// Dates are written and parsed in `D/M/Y` form:
///
/// ```rust
/// use bondlib_core::types::Date;
///
/// let date: Date = "1/4/2024".parse().unwrap();
/// assert_eq!(date.month(), 4);
/// assert_eq!(date.add_days(30).unwrap().to_string(), "01/05/2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date {
    // Field order drives the derived ordering.
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// The earliest representable date, 1/1/1.
    pub const MIN: Date = Date {
        year: 1,
        month: 1,
        day: 1,
    };

    /// Creates a date from day, month and year.
    ///
    /// # Errors
    ///
    /// Returns the matching `CoreError` range variant when a component is
    /// out of range.
    pub fn new(day: u32, month: u32, year: i32) -> CoreResult<Self> {
        Self::checked(i64::from(day), i64::from(month), i64::from(year))
    }

    /// Parses a `D/M/Y` string. Zero padding is optional and surrounding
    /// whitespace around each component is ignored.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmptyDate` for an empty string,
    /// `CoreError::MalformedDate` when the text is not three `/`-separated
    /// integers, and a range error when a component is out of range.
    pub fn parse(s: &str) -> CoreResult<Self> {
        if s.trim().is_empty() {
            return Err(CoreError::EmptyDate);
        }

        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 3 {
            return Err(CoreError::malformed_date(s));
        }

        let field = |text: &str| {
            text.trim()
                .parse::<i64>()
                .map_err(|_| CoreError::malformed_date(s))
        };

        Self::checked(field(parts[0])?, field(parts[1])?, field(parts[2])?)
    }

    fn checked(day: i64, month: i64, year: i64) -> CoreResult<Self> {
        if !(1..=31).contains(&day) {
            return Err(CoreError::DayOutOfRange { day });
        }
        if !(1..=12).contains(&month) {
            return Err(CoreError::MonthOutOfRange { month });
        }
        if year < 1 || year > i64::from(i32::MAX) {
            return Err(CoreError::YearOutOfRange { year });
        }

        Ok(Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        })
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Proleptic Gregorian day number (days since a fixed epoch in year 0).
    ///
    /// [`Date::from_day_number`] is its exact inverse for calendar-valid
    /// dates.
    #[must_use]
    pub fn day_number(&self) -> i64 {
        let shifted_month = (i64::from(self.month) + 9) % 12;
        let year = i64::from(self.year) - shifted_month / 10;
        365 * year + year / 4 - year / 100 + year / 400
            + (shifted_month * 306 + 5) / 10
            + (i64::from(self.day) - 1)
    }

    /// Converts a day number back into a date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::YearOutOfRange` if the number falls before year 1
    /// or beyond the representable years.
    pub fn from_day_number(number: i64) -> CoreResult<Self> {
        let leap_days = |y: i64| 365 * y + y / 4 - y / 100 + y / 400;

        let mut year = number
            .checked_mul(10_000)
            .and_then(|n| n.checked_add(14_780))
            .ok_or(CoreError::YearOutOfRange { year: number / 365 })?
            / 3_652_425;
        let mut day_of_year = number - leap_days(year);
        if day_of_year < 0 {
            year -= 1;
            day_of_year = number - leap_days(year);
        }

        let mi = (100 * day_of_year + 52) / 3060;
        let month = (mi + 2) % 12 + 1;
        year += (mi + 2) / 12;
        let day = day_of_year - (mi * 306 + 5) / 10 + 1;

        Self::checked(day, month, year)
    }

    /// Returns the date `days` days later (earlier when negative).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::YearOutOfRange` if the result falls before year 1
    /// or beyond the representable years.
    pub fn add_days(&self, days: i64) -> CoreResult<Self> {
        let number = self
            .day_number()
            .checked_add(days)
            .ok_or(CoreError::YearOutOfRange {
                year: i64::from(self.year).saturating_add(days / 365),
            })?;
        Self::from_day_number(number)
    }

    /// Returns the same day and month `years` years later, without any
    /// month-end adjustment.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::YearOutOfRange` if the result falls before year 1.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        Self::checked(
            i64::from(self.day),
            i64::from(self.month),
            i64::from(self.year) + i64::from(years),
        )
    }

    /// Julian day number, the integer used for actual-day accrual counts.
    #[must_use]
    pub fn julian_day_number(&self) -> i64 {
        let (y, m, d) = (
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        367 * y - (7 * (y + 5001 + (m - 9) / 7)) / 4 + (275 * m) / 9 + d + 1_729_777
    }

    /// Actual days from `self` to `other` by Julian day number.
    ///
    /// Positive if `other` is after `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        other.julian_day_number() - self.julian_day_number()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Date {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = CoreError;

    /// Fails with `CoreError::YearOutOfRange` for chrono's years before 1.
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.day(), date.month(), date.year())
    }
}
