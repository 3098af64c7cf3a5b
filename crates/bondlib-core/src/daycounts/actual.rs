//! Actual-day conventions with a fixed year basis.

use super::DayCount;
use crate::types::Date;

/// Actual days over 360.
///
/// Days are counted as the difference of Julian day numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual days over 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365;

impl DayCount for Act365 {
    fn name(&self) -> &'static str {
        "ACT/365"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 365.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act360_quarter() {
        let start = Date::parse("01/01/2024").unwrap();
        let end = Date::parse("01/04/2024").unwrap();

        // Leap February: 31 + 29 + 31
        assert_eq!(Act360.day_count(start, end), 91);
        assert_relative_eq!(Act360.year_fraction(start, end), 91.0 / 360.0);
    }

    #[test]
    fn test_act365_full_year() {
        let start = Date::parse("01/01/2025").unwrap();
        let end = Date::parse("01/01/2026").unwrap();

        assert_eq!(Act365.day_count(start, end), 365);
        assert_relative_eq!(Act365.year_fraction(start, end), 1.0);
    }

    #[test]
    fn test_negative_span() {
        let start = Date::parse("01/04/2024").unwrap();
        let end = Date::parse("01/01/2024").unwrap();
        assert!(Act360.year_fraction(start, end) < 0.0);
    }
}
