//! Error types for the core calendar and schedule primitives.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or querying dates and cash-flow schedules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The date text was empty.
    #[error("Invalid date: empty date string")]
    EmptyDate,

    /// The date text was not of the form `D/M/Y`.
    #[error("Invalid date: cannot parse '{input}' as D/M/Y")]
    MalformedDate {
        /// The rejected input.
        input: String,
    },

    /// Day component outside 1..=31.
    #[error("Invalid date: day {day} is outside 1..=31")]
    DayOutOfRange {
        /// The rejected day.
        day: i64,
    },

    /// Month component outside 1..=12.
    #[error("Invalid date: month {month} is outside 1..=12")]
    MonthOutOfRange {
        /// The rejected month.
        month: i64,
    },

    /// Year component below 1.
    #[error("Invalid date: year {year} is before year 1")]
    YearOutOfRange {
        /// The rejected year.
        year: i64,
    },

    /// A schedule was built from no cash flows.
    #[error("Invalid cash flow schedule: no cash flows supplied")]
    EmptySchedule,

    /// Neighbour lookup on a schedule that cannot have neighbours.
    #[error("Cash flow schedule has {len} entries; at least 2 are required to walk it")]
    InsufficientCashFlows {
        /// Number of entries in the schedule.
        len: usize,
    },

    /// Unrecognised day-count convention name.
    #[error("Unknown day count convention: '{name}'")]
    UnknownDayCount {
        /// The rejected name.
        name: String,
    },
}

impl CoreError {
    /// Creates a malformed date error.
    #[must_use]
    pub fn malformed_date(input: impl Into<String>) -> Self {
        Self::MalformedDate {
            input: input.into(),
        }
    }

    /// Creates an unknown day count error.
    #[must_use]
    pub fn unknown_day_count(name: impl Into<String>) -> Self {
        Self::UnknownDayCount { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::malformed_date("2024-01-01");
        assert_eq!(
            err.to_string(),
            "Invalid date: cannot parse '2024-01-01' as D/M/Y"
        );

        let err = CoreError::InsufficientCashFlows { len: 1 };
        assert!(err.to_string().contains("1 entries"));
    }
}
