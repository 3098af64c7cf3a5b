//! Core Bond trait definition.
//!
//! The `Bond` trait is the common interface of the bond variants. A variant
//! owns a [`BondCore`] holding the contractual data and supplies its own
//! duration model; accrued interest, yields and the other shared analytics
//! are provided on top of those two.

use bondlib_core::Date;

use crate::error::BondResult;
use crate::instruments::BondCore;
use crate::pricing::YieldSolver;

/// Common interface for bonds.
///
/// # Example
///
/// ```rust
/// use bondlib_bonds::prelude::*;
/// use bondlib_core::prelude::*;
///
/// let d = |s: &str| Date::parse(s).unwrap();
/// let bond = FlatTermBond::new(
///     BondCore::builder()
///         .coupon(10.0)
///         .maturity(d("12/10/2024"))
///         .issue(d("12/10/2021"))
///         .settlement(d("14/10/2021"))
///         .cash_flows((2022..=2024).map(|y| CashFlow::new(10.0, Date::new(12, 10, y).unwrap())))
///         .build()
///         .unwrap(),
/// );
///
/// let price = bond.clean_price(0.09, d("12/10/2021"));
/// assert_eq!(price, 102.53);
/// assert_eq!(bond.yield_to_maturity(price, d("12/10/2021")).unwrap(), 0.09);
/// ```
pub trait Bond {
    /// Returns the shared bond data.
    fn core(&self) -> &BondCore;

    /// Weighted average time to the cash flows due on or after `date`,
    /// in periods, under this bond's discounting model.
    fn macaulay_duration(&self, rate: f64, date: Date) -> f64;

    /// Macaulay duration divided by `1 + rate`.
    fn modified_duration(&self, rate: f64, date: Date) -> f64 {
        self.macaulay_duration(rate, date) / (1.0 + rate)
    }

    /// Interest accrued on `settlement` since the previous cash flow.
    fn accrued_amount(&self, settlement: Date) -> BondResult<f64> {
        self.core().accrued_amount(settlement)
    }

    /// Coupon as a fraction of face value.
    fn coupon_rate(&self) -> f64 {
        self.core().coupon_rate()
    }

    /// Coupon divided by the market price.
    fn current_yield(&self, market_price: f64) -> f64 {
        self.core().current_yield(market_price)
    }

    /// True if the final cash flow was due before today.
    fn is_expired(&self) -> bool {
        self.core().is_expired()
    }

    /// Flat rate at which the bond's notional present value equals
    /// `price`, rounded to 4 decimals.
    fn yield_to_maturity(&self, price: f64, date: Date) -> BondResult<f64> {
        YieldSolver::default().solve(self, price, date)
    }
}
