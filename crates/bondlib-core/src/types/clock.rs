//! Sources of "today" for expiry checks and default settlement.

use std::fmt;

use super::Date;

/// Supplies the current calendar date.
///
/// Valuation code never reads the wall clock directly; it asks a `Clock`,
/// so tests can pin the date with [`FixedClock`].
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns today's date.
    fn today(&self) -> Date;
}

/// The process wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        // The local calendar never reports a year before 1.
        Date::try_from(chrono::Local::now().date_naive()).unwrap_or(Date::MIN)
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Date);

impl FixedClock {
    /// Creates a clock that always reports `today`.
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = Date::new(19, 10, 2026).unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_system_clock_is_recent() {
        let floor = Date::new(1, 1, 2024).unwrap();
        assert!(SystemClock.today() > floor);
    }
}
