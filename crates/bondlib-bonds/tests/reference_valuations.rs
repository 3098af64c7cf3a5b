//! Reference valuations for both bond variants.
//!
//! Every valuation pins "today" with a `FixedClock` so expiry checks and
//! default settlement dates do not depend on when the tests run.

use std::sync::Arc;

use approx::assert_relative_eq;
use bondlib_bonds::prelude::*;
use bondlib_core::prelude::*;
use bondlib_curves::prelude::*;

fn d(s: &str) -> Date {
    Date::parse(s).unwrap()
}

fn clock(today: &str) -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(d(today)))
}

fn annual_flows(amount: f64, day: u32, month: u32, years: std::ops::RangeInclusive<i32>) -> Vec<CashFlow> {
    years
        .map(|y| CashFlow::new(amount, Date::new(day, month, y).unwrap()))
        .collect()
}

fn market_curve() -> SharedYieldCurve {
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

/// Face 100, coupon 10, paid each 1 January 2023-2025.
fn flat_annual() -> FlatTermBond {
    FlatTermBond::new(
        BondCore::builder()
            .coupon(10.0)
            .maturity(d("1/1/2025"))
            .issue(d("1/1/2021"))
            .settlement(d("3/1/2021"))
            .cash_flows(annual_flows(10.0, 1, 1, 2023..=2025))
            .clock(clock("3/1/2021"))
            .build()
            .unwrap(),
    )
}

fn curve_bond(coupon: f64, curve: SharedYieldCurve) -> GeneralTermBond {
    GeneralTermBond::new(
        BondCore::builder()
            .coupon(coupon)
            .maturity(d("1/1/2025"))
            .issue(d("1/1/2020"))
            .settlement(d("3/1/2021"))
            .cash_flows(annual_flows(coupon, 1, 1, 2022..=2025))
            .clock(clock("1/1/2021"))
            .build()
            .unwrap(),
        curve,
    )
}

// ============================================================================
// Flat-rate bonds
// ============================================================================

#[test]
fn flat_clean_price_on_issue() {
    let bond = FlatTermBond::new(
        BondCore::builder()
            .coupon(10.0)
            .maturity(d("12/10/2024"))
            .issue(d("12/10/2021"))
            .settlement(d("14/10/2021"))
            .cash_flows(annual_flows(10.0, 12, 10, 2022..=2024))
            .clock(clock("12/10/2021"))
            .build()
            .unwrap(),
    );

    assert_eq!(bond.clean_price(0.09, d("12/10/2021")), 102.53);
}

#[test]
fn flat_price_duration_and_yield() {
    let bond = flat_annual();
    let date = d("3/1/2021");

    let price = bond.clean_price(0.09, date);
    assert_eq!(price, 102.53);
    assert_eq!(bond.duration(0.09, date), 2.74);
    assert_eq!(bond.yield_to_maturity(price, date).unwrap(), 0.09);
}

#[test]
fn flat_yield_round_trip() {
    let bond = flat_annual();
    let date = d("3/1/2021");
    let cases = [
        (0.01, 126.47),
        (0.03, 119.8),
        (0.05, 113.62),
        (0.07, 107.87),
        (0.12, 95.2),
        (0.2, 78.94),
        (0.35, 57.6),
    ];

    for (rate, expected_price) in cases {
        let price = bond.clean_price(rate, date);
        assert_eq!(price, expected_price, "price at {rate}");

        let solved = bond.yield_to_maturity(price, date).unwrap();
        assert_relative_eq!(solved, rate, epsilon = 1e-4);
    }
}

#[test]
fn flat_dirty_price_by_day_count() {
    let flows: Vec<CashFlow> = annual_flows(50.0, 1, 6, 2022..=2024)
        .into_iter()
        .chain(annual_flows(50.0, 1, 12, 2022..=2024))
        .collect();
    let settlement = d("29/9/2022");

    let cases = [
        (DayCountConvention::YearActualMonthActual, 1016.39),
        (DayCountConvention::Year360Month30, 1016.16),
        (DayCountConvention::Year365Month30, 1016.16),
        (DayCountConvention::Year360MonthActual, 1016.67),
        (DayCountConvention::Year365MonthActual, 1016.44),
    ];

    for (convention, expected) in cases {
        let bond = FlatTermBond::new(
            BondCore::builder()
                .face_value(1000.0)
                .coupon(50.0)
                .maturity(d("1/12/2024"))
                .issue(d("1/12/2021"))
                .settlement(settlement)
                .day_count(convention)
                .cash_flows(flows.clone())
                .clock(clock("29/9/2022"))
                .build()
                .unwrap(),
        );

        let dirty = bond.dirty_price(0.05, settlement).unwrap();
        assert_relative_eq!(dirty, expected, epsilon = 1e-9);
    }
}

#[test]
fn accrued_interest_actual_360() {
    let core = BondCore::builder()
        .face_value(1000.0)
        .coupon(50.0)
        .maturity(d("1/7/2024"))
        .issue(d("1/7/2023"))
        .settlement(d("1/4/2024"))
        .day_count(DayCountConvention::Year360MonthActual)
        .cash_flow(50.0, d("1/1/2024"))
        .cash_flow(50.0, d("1/7/2024"))
        .clock(clock("1/4/2024"))
        .build()
        .unwrap();

    assert_eq!(d("1/1/2024").days_between(&d("1/4/2024")), 91);
    assert_eq!(core.accrued_amount(d("1/4/2024")).unwrap(), 12.64);
}

#[test]
fn final_principal_merges_into_last_coupon() {
    let core = BondCore::builder()
        .face_value(1000.0)
        .coupon(50.0)
        .maturity(d("1/1/2025"))
        .issue(d("1/1/2023"))
        .settlement(d("3/1/2023"))
        .cash_flow(50.0, d("1/1/2024"))
        .cash_flow(50.0, d("1/1/2025"))
        .cash_flow(50.0, d("1/1/2025"))
        .clock(clock("3/1/2023"))
        .build()
        .unwrap();

    let dues: Vec<_> = core.schedule().iter().map(|cf| (cf.amount(), cf.due())).collect();
    assert_eq!(dues, vec![(50.0, d("1/1/2024")), (1050.0, d("1/1/2025"))]);
}

// ============================================================================
// Curve-discounted bonds
// ============================================================================

#[test]
fn curve_clean_and_dirty_price() {
    let bond = curve_bond(5.0, market_curve());

    assert_eq!(bond.clean_price(d("1/1/2021")), 98.05);
    assert_eq!(bond.dirty_price(d("1/6/2022")).unwrap(), 100.45);
}

#[test]
fn curve_yield_to_maturity() {
    let bond = curve_bond(5.0, market_curve());
    let date = d("1/1/2021");
    let price = bond.clean_price(date);

    assert_eq!(bond.yield_to_maturity(price, date).unwrap(), 0.0556);
}

#[test]
fn curve_duration() {
    let bond = curve_bond(10.0, market_curve());
    assert_eq!(bond.duration(d("1/1/2021")), 3.52);
}

#[test]
fn curve_edits_reach_the_bond() {
    let owner = SharedYieldCurve::default();
    let bond = curve_bond(5.0, owner.clone());
    let date = d("1/1/2021");

    assert_eq!(bond.present_value(date), 120.0);

    owner.replace(market_curve().snapshot());
    assert_eq!(bond.present_value(date), 98.05);

    owner.remove_point(&YieldCurvePoint::new(4.0, 0.055));
    assert!(bond.present_value(date) > 98.05);
}
