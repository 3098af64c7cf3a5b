//! 30-day month conventions.

use super::DayCount;
use crate::types::Date;

/// Day count with 30-day months and 365-day years:
/// `365 * (Y2 - Y1) + 30 * (M2 - M1) + (D2 - D1)`.
///
/// No end-of-month adjustment is applied to either date.
#[inline]
fn month_thirty_days(start: Date, end: Date) -> i64 {
    365 * i64::from(end.year() - start.year())
        + 30 * (i64::from(end.month()) - i64::from(start.month()))
        + (i64::from(end.day()) - i64::from(start.day()))
}

/// Year 360 / Month 30.
///
/// Shares its formula, including the 365-day year basis, with
/// [`Thirty365`]. Existing valuations depend on the two agreeing, so the
/// name does not change the arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 365.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        month_thirty_days(start, end)
    }
}

/// Year 365 / Month 30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty365;

impl DayCount for Thirty365 {
    fn name(&self) -> &'static str {
        "30/365"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 365.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        month_thirty_days(start, end)
    }
}
