//! Bonds discounted along a yield curve.

use bondlib_core::Date;
use bondlib_curves::{SharedYieldCurve, YieldCurve};

use super::BondCore;
use crate::error::BondResult;
use crate::pricing::round_money;
use crate::traits::Bond;

/// Days in each month before the one indexed, ignoring leap years.
const MONTH_DAYS: [u32; 12] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30];

/// A bond discounted with continuously compounded rates read off a yield
/// curve.
///
/// The curve is owned elsewhere and observed through a
/// [`SharedYieldCurve`] handle, so edits made by its owner show up in the
/// next valuation. Each valuation reads the curve under one lock.
///
/// For the `t`-th flow due on or after the valuation date the curve is
/// sampled at the flow's day-of-year fraction plus its year offset from the
/// first scheduled payment, and the flow is discounted by `exp(-y * t)`.
#[derive(Debug, Clone)]
pub struct GeneralTermBond {
    core: BondCore,
    curve: SharedYieldCurve,
}

impl GeneralTermBond {
    /// Creates a bond valued off `curve`.
    #[must_use]
    pub fn new(core: BondCore, curve: SharedYieldCurve) -> Self {
        Self { core, curve }
    }

    /// Rebinds the bond to another curve.
    pub fn set_yield_curve(&mut self, curve: SharedYieldCurve) {
        self.curve = curve;
    }

    /// Returns the curve handle.
    #[must_use]
    pub fn yield_curve(&self) -> &SharedYieldCurve {
        &self.curve
    }

    /// Present value as of `date`, rounded to cents.
    #[must_use]
    pub fn present_value(&self, date: Date) -> f64 {
        let curve = self.curve.read();
        let pv: f64 = self
            .discounted_flows(&curve, date)
            .map(|(_, amount, df)| amount * df)
            .sum();
        round_money(pv)
    }

    /// Present value, or zero once the bond has expired.
    #[must_use]
    pub fn clean_price(&self, date: Date) -> f64 {
        if self.core.is_expired() {
            return 0.0;
        }
        self.present_value(date)
    }

    /// Present value plus accrued interest, rounded to cents, or zero once
    /// the bond has expired.
    pub fn dirty_price(&self, date: Date) -> BondResult<f64> {
        if self.core.is_expired() {
            return Ok(0.0);
        }
        Ok(round_money(
            self.present_value(date) + self.core.accrued_amount(date)?,
        ))
    }

    /// Curve duration as of `date`, rounded to 2 decimals.
    #[must_use]
    pub fn duration(&self, date: Date) -> f64 {
        round_money(self.curve_duration(date))
    }

    fn curve_duration(&self, date: Date) -> f64 {
        let curve = self.curve.read();
        let (value, weighted) = self
            .discounted_flows(&curve, date)
            .fold((0.0, 0.0), |(value, weighted), (t, amount, df)| {
                (value + amount * df, weighted + t * amount * df)
            });
        weighted / value
    }

    /// `(period, amount, discount factor)` for each flow due on or after
    /// `date`.
    fn discounted_flows<'a>(
        &'a self,
        curve: &'a YieldCurve,
        date: Date,
    ) -> impl Iterator<Item = (f64, f64, f64)> + 'a {
        let first_year = self.core.schedule().first().due().year();
        self.core
            .schedule()
            .flows_from(date)
            .zip(1_i32..)
            .map(move |(cf, t)| {
                let time = year_fraction(cf.due()) + years_accrued(cf.due(), first_year);
                let period = f64::from(t);
                let df = (-curve.rate_at(time) * period).exp();
                (period, cf.amount(), df)
            })
    }
}

impl Bond for GeneralTermBond {
    fn core(&self) -> &BondCore {
        &self.core
    }

    /// The curve duration; `rate` plays no part.
    fn macaulay_duration(&self, _rate: f64, date: Date) -> f64 {
        self.curve_duration(date)
    }
}

/// Fraction of a 365-day year elapsed before `date`.
fn year_fraction(date: Date) -> f64 {
    let month_start: u32 = MONTH_DAYS.iter().take(date.month() as usize).sum();
    f64::from(month_start + date.day() - 1) / 365.0
}

/// Years from the first payment year, counting that year as 1.
fn years_accrued(date: Date, first_year: i32) -> f64 {
    f64::from((date.year() - first_year + 1).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use approx::assert_relative_eq;
    use bondlib_core::types::{CashFlow, FixedClock};
    use bondlib_curves::YieldCurvePoint;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn curve() -> SharedYieldCurve {
        SharedYieldCurve::new(
            YieldCurve::new(vec![
                YieldCurvePoint::new(1.0, 0.035),
                YieldCurvePoint::new(2.0, 0.04),
                YieldCurvePoint::new(3.0, 0.047),
                YieldCurvePoint::new(4.0, 0.055),
            ])
            .unwrap(),
        )
    }

    fn bond_with(curve: SharedYieldCurve, today: &str) -> GeneralTermBond {
        let core = BondCore::builder()
            .coupon(5.0)
            .maturity(d("1/1/2025"))
            .issue(d("1/1/2020"))
            .settlement(d("3/1/2021"))
            .cash_flows((2022..=2025).map(|y| CashFlow::new(5.0, Date::new(1, 1, y).unwrap())))
            .clock(Arc::new(FixedClock::new(d(today))))
            .build()
            .unwrap();
        GeneralTermBond::new(core, curve)
    }

    #[test]
    fn test_year_fraction() {
        assert_eq!(year_fraction(d("1/1/2023")), 0.0);
        assert_relative_eq!(year_fraction(d("1/3/2024")), 59.0 / 365.0);
        assert_relative_eq!(year_fraction(d("31/12/2023")), 364.0 / 365.0);
    }

    #[test]
    fn test_years_accrued() {
        assert_eq!(years_accrued(d("1/1/2022"), 2022), 1.0);
        assert_eq!(years_accrued(d("1/1/2025"), 2022), 4.0);
        assert_eq!(years_accrued(d("1/1/2019"), 2022), 2.0);
    }

    #[test]
    fn test_clean_price() {
        let bond = bond_with(curve(), "1/1/2021");
        assert_eq!(bond.clean_price(d("1/1/2021")), 98.05);
    }

    #[test]
    fn test_dirty_price() {
        let bond = bond_with(curve(), "1/1/2021");
        assert_eq!(bond.dirty_price(d("1/6/2022")).unwrap(), 100.45);
    }

    #[test]
    fn test_expired_prices_are_zero() {
        let bond = bond_with(curve(), "2/1/2025");
        assert_eq!(bond.clean_price(d("1/1/2021")), 0.0);
        assert_eq!(bond.dirty_price(d("1/1/2021")).unwrap(), 0.0);
        // Present value itself ignores expiry.
        assert_eq!(bond.present_value(d("1/1/2021")), 98.05);
    }

    #[test]
    fn test_empty_curve_discounts_nothing() {
        let bond = bond_with(SharedYieldCurve::default(), "1/1/2021");
        assert_eq!(bond.present_value(d("1/1/2021")), 120.0);
    }

    #[test]
    fn test_sees_curve_edits() {
        let owner = SharedYieldCurve::default();
        let bond = bond_with(owner.clone(), "1/1/2021");
        assert_eq!(bond.present_value(d("1/1/2021")), 120.0);

        owner.replace(curve().snapshot());
        assert_eq!(bond.present_value(d("1/1/2021")), 98.05);
    }

    #[test]
    fn test_set_yield_curve() {
        let mut bond = bond_with(SharedYieldCurve::default(), "1/1/2021");
        let replacement = curve();
        bond.set_yield_curve(replacement.clone());

        assert!(bond.yield_curve().same_curve(&replacement));
        assert_eq!(bond.clean_price(d("1/1/2021")), 98.05);
    }

    #[test]
    fn test_yield_to_maturity() {
        let bond = bond_with(curve(), "1/1/2021");
        let price = bond.clean_price(d("1/1/2021"));
        assert_eq!(bond.yield_to_maturity(price, d("1/1/2021")).unwrap(), 0.0556);
    }

    #[test]
    fn test_duration_ignores_rate() {
        let bond = bond_with(curve(), "1/1/2021");
        let date = d("1/1/2021");
        assert_eq!(
            bond.macaulay_duration(0.01, date),
            bond.macaulay_duration(0.5, date)
        );
        assert_relative_eq!(bond.duration(date), bond.macaulay_duration(0.0, date), epsilon = 0.005);
    }
}
