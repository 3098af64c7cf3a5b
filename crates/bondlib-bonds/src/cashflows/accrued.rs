//! Accrued interest calculations for bonds.
//!
//! Interest accrues from the reference date (the previous cash flow, or the
//! issue date before the first one) up to settlement, under the bond's
//! day-count convention, and is rounded to cents.
//!
//! # Example
//!
//! ```rust
//! use bondlib_bonds::cashflows::AccruedInterestCalculator;
//! use bondlib_core::prelude::*;
//!
//! let d = |s: &str| Date::parse(s).unwrap();
//! let schedule = CashFlowSchedule::new(
//!     vec![CashFlow::new(50.0, d("01/01/2024")), CashFlow::new(50.0, d("01/07/2024"))],
//!     1000.0,
//! )
//! .unwrap();
//!
//! let accrued = AccruedInterestCalculator::accrued_amount(
//!     &schedule,
//!     d("01/07/2023"),
//!     50.0,
//!     DayCountConvention::Year360MonthActual,
//!     d("01/04/2024"),
//! )
//! .unwrap();
//! assert_eq!(accrued, 12.64);
//! ```

use bondlib_core::daycounts::DayCountConvention;
use bondlib_core::types::{CashFlow, CashFlowSchedule, Date};

use crate::error::{BondError, BondResult};
use crate::pricing::round_money;

/// Calculator for accrued interest.
pub struct AccruedInterestCalculator;

impl AccruedInterestCalculator {
    /// Accrued interest on `settlement`.
    ///
    /// # Arguments
    ///
    /// * `schedule` - The bond's cash flows
    /// * `issue` - Issue date, the reference before the first cash flow
    /// * `coupon` - Coupon amount per period
    /// * `day_count` - Day count convention
    /// * `settlement` - Settlement date
    ///
    /// # Errors
    ///
    /// Returns `BondError::NoCurrentCashFlow` when no cash flow is due after
    /// `settlement`, and `BondError::SettlementBeforeReference` when
    /// `settlement` precedes the reference date.
    pub fn accrued_amount(
        schedule: &CashFlowSchedule,
        issue: Date,
        coupon: f64,
        day_count: DayCountConvention,
        settlement: Date,
    ) -> BondResult<f64> {
        let current = schedule
            .cash_flow_at(settlement)
            .ok_or(BondError::NoCurrentCashFlow { settlement })?;
        let reference = Self::reference_date(schedule, issue, &current)?;

        if settlement < reference {
            return Err(BondError::SettlementBeforeReference {
                settlement,
                reference,
            });
        }

        let frequency = if day_count.needs_coupon_period() {
            schedule.coupon_frequency(current.due())?
        } else {
            1
        };
        let fraction = day_count
            .to_day_count(frequency, current.due())
            .year_fraction(reference, settlement);

        Ok(round_money(fraction * coupon))
    }

    /// Due date of the flow before `current`, or `issue` when there is none.
    fn reference_date(
        schedule: &CashFlowSchedule,
        issue: Date,
        current: &CashFlow,
    ) -> BondResult<Date> {
        if schedule.len() < 2 {
            return Ok(issue);
        }
        Ok(schedule
            .previous_cash_flow(current)?
            .map_or(issue, |prev| prev.due()))
    }
}
