//! Actual/Actual measured against the enclosing coupon period.

use super::DayCount;
use crate::types::Date;

/// Actual/Actual relative to a coupon period.
///
/// The year fraction of `start..end` is
///
/// $$\frac{\text{days}(start, end)}{\text{frequency} \times \text{days}(start, period\_end)}$$
///
/// where `period_end` is the due date of the coupon being accrued and
/// `frequency` the number of payments per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActActPeriod {
    frequency: u32,
    period_end: Date,
}

impl ActActPeriod {
    /// Creates the convention for a coupon period ending on `period_end`.
    #[must_use]
    pub fn new(frequency: u32, period_end: Date) -> Self {
        Self {
            frequency,
            period_end,
        }
    }
}

impl DayCount for ActActPeriod {
    fn name(&self) -> &'static str {
        "ACT/ACT"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let period_days = start.days_between(&self.period_end);
        self.day_count(start, end) as f64 / (f64::from(self.frequency) * period_days as f64)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
