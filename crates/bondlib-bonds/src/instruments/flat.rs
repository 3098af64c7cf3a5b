//! Bonds discounted at a single flat rate.

use bondlib_core::Date;

use super::BondCore;
use crate::error::BondResult;
use crate::pricing::round_money;
use crate::traits::Bond;

/// A bond whose cash flows are discounted at one constant per-period rate.
///
/// Flows due on or after the valuation date are discounted as
/// `CF / (1 + rate)^t`, with `t = 1` for the first of them.
///
/// # Example
///
/// ```rust
/// use bondlib_bonds::prelude::*;
/// use bondlib_core::prelude::*;
///
/// let d = |s: &str| Date::parse(s).unwrap();
/// let core = BondCore::builder()
///     .coupon(10.0)
///     .maturity(d("1/1/2025"))
///     .issue(d("1/1/2021"))
///     .settlement(d("3/1/2021"))
///     .cash_flows((2023..=2025).map(|y| CashFlow::new(10.0, Date::new(1, 1, y).unwrap())))
///     .build()
///     .unwrap();
/// let bond = FlatTermBond::new(core);
///
/// assert_eq!(bond.clean_price(0.09, d("3/1/2021")), 102.53);
/// assert_eq!(bond.duration(0.09, d("3/1/2021")), 2.74);
/// ```
#[derive(Debug, Clone)]
pub struct FlatTermBond {
    core: BondCore,
}

impl FlatTermBond {
    /// Wraps the bond data in a flat-rate model.
    #[must_use]
    pub fn new(core: BondCore) -> Self {
        Self { core }
    }

    /// Present value at `rate` as of `date`, rounded to cents.
    #[must_use]
    pub fn present_value(&self, rate: f64, date: Date) -> f64 {
        self.core.notional_present_value(rate, date)
    }

    /// Price excluding accrued interest; equal to the present value.
    #[must_use]
    pub fn clean_price(&self, rate: f64, date: Date) -> f64 {
        self.present_value(rate, date)
    }

    /// Present value plus the interest accrued on `date`.
    pub fn dirty_price(&self, rate: f64, date: Date) -> BondResult<f64> {
        Ok(self.present_value(rate, date) + self.core.accrued_amount(date)?)
    }

    /// Quoted clean price plus the interest accrued on `date`.
    pub fn dirty_price_from_clean(&self, clean_price: f64, date: Date) -> BondResult<f64> {
        Ok(clean_price + self.core.accrued_amount(date)?)
    }

    /// Macaulay duration in periods, rounded to 2 decimals.
    ///
    /// The weighted sum is divided by the rounded present value. With no
    /// flow left on `date` the result is not finite.
    #[must_use]
    pub fn duration(&self, rate: f64, date: Date) -> f64 {
        let weighted: f64 = self
            .core
            .schedule()
            .flows_from(date)
            .zip(1_i32..)
            .map(|(cf, t)| f64::from(t) * cf.amount() / (1.0 + rate).powf(f64::from(t)))
            .sum();
        round_money(weighted / self.present_value(rate, date))
    }
}

impl Bond for FlatTermBond {
    fn core(&self) -> &BondCore {
        &self.core
    }

    fn macaulay_duration(&self, rate: f64, date: Date) -> f64 {
        self.duration(rate, date)
    }
}
