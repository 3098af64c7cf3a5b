//! Day count conventions for accrued interest.
//!
//! A convention turns the span between a reference date (previous coupon
//! or issue) and a settlement date into a fraction of a year.
//!
//! # Supported Conventions
//!
//! - [`Thirty360`] and [`Thirty365`]: 30-day months over a 365-day year
//! - [`Act360`]: actual days over 360
//! - [`Act365`]: actual days over 365
//! - [`ActActPeriod`]: actual days over the actual coupon period times the
//!   payment frequency
//!
//! # Usage
//!
//! ```rust
//! use bondlib_core::daycounts::{Act360, DayCount};
//! use bondlib_core::types::Date;
//!
//! let start = Date::parse("01/01/2024").unwrap();
//! let end = Date::parse("01/04/2024").unwrap();
//! assert_eq!(Act360.day_count(start, end), 91);
//! ```

mod actact;
mod actual;
mod thirty;

pub use actact::ActActPeriod;
pub use actual::{Act360, Act365};
pub use thirty::{Thirty360, Thirty365};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the short name of the convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Fraction of a year between two dates. Negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Day count numerator between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// The five conventions a bond can be constructed with.
///
/// # Example
///
/// ```rust
/// use bondlib_core::daycounts::DayCountConvention;
/// use bondlib_core::types::Date;
///
/// let convention: DayCountConvention = "ACT/360".parse().unwrap();
/// let dc = convention.to_day_count(1, Date::parse("1/1/2025").unwrap());
/// assert_eq!(dc.name(), "ACT/360");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// 30-day months, 365-day year basis (same arithmetic as `Year365Month30`).
    Year360Month30,

    /// 30-day months, 365-day year basis.
    Year365Month30,

    /// Actual days over 360.
    Year360MonthActual,

    /// Actual days over 365.
    Year365MonthActual,

    /// Actual days over frequency times actual coupon-period days.
    #[default]
    YearActualMonthActual,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    ///
    /// `frequency` and `period_end` describe the coupon period being
    /// accrued; only [`DayCountConvention::YearActualMonthActual`] reads them.
    #[must_use]
    pub fn to_day_count(&self, frequency: u32, period_end: Date) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Year360Month30 => Box::new(Thirty360),
            DayCountConvention::Year365Month30 => Box::new(Thirty365),
            DayCountConvention::Year360MonthActual => Box::new(Act360),
            DayCountConvention::Year365MonthActual => Box::new(Act365),
            DayCountConvention::YearActualMonthActual => {
                Box::new(ActActPeriod::new(frequency, period_end))
            }
        }
    }

    /// True if the convention depends on the coupon period.
    #[must_use]
    pub const fn needs_coupon_period(&self) -> bool {
        matches!(self, DayCountConvention::YearActualMonthActual)
    }

    /// Returns the short name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Year360Month30 => "30/360",
            DayCountConvention::Year365Month30 => "30/365",
            DayCountConvention::Year360MonthActual => "ACT/360",
            DayCountConvention::Year365MonthActual => "ACT/365",
            DayCountConvention::YearActualMonthActual => "ACT/ACT",
        }
    }

    /// Returns all conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Year360Month30,
            DayCountConvention::Year365Month30,
            DayCountConvention::Year360MonthActual,
            DayCountConvention::Year365MonthActual,
            DayCountConvention::YearActualMonthActual,
        ]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Accepts the short names ("30/360", "ACT/ACT", ...) or the variant
    /// names ("Year360Month30", ...), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "30/360" | "YEAR360MONTH30" => Ok(DayCountConvention::Year360Month30),
            "30/365" | "YEAR365MONTH30" => Ok(DayCountConvention::Year365Month30),
            "ACT/360" | "ACTUAL/360" | "YEAR360MONTHACTUAL" => {
                Ok(DayCountConvention::Year360MonthActual)
            }
            "ACT/365" | "ACTUAL/365" | "YEAR365MONTHACTUAL" => {
                Ok(DayCountConvention::Year365MonthActual)
            }
            "ACT/ACT" | "ACTUAL/ACTUAL" | "YEARACTUALMONTHACTUAL" => {
                Ok(DayCountConvention::YearActualMonthActual)
            }
            _ => Err(CoreError::unknown_day_count(s)),
        }
    }
}
