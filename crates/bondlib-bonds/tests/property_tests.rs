//! Property-based tests for flat-rate valuation and yield solving.

use std::sync::Arc;

use approx::assert_relative_eq;
use bondlib_bonds::prelude::*;
use bondlib_core::prelude::*;
use proptest::prelude::*;

fn d(s: &str) -> Date {
    Date::parse(s).unwrap()
}

/// Annual bond with `years` equal coupons from 2025, face 1000.
fn annual_bond(coupon: f64, years: i32) -> FlatTermBond {
    let core = BondCore::builder()
        .face_value(1000.0)
        .coupon(coupon)
        .maturity(Date::new(1, 1, 2024 + years).unwrap())
        .issue(d("1/1/2024"))
        .settlement(d("2/1/2024"))
        .cash_flows((1..=years).map(|i| CashFlow::new(coupon, Date::new(1, 1, 2024 + i).unwrap())))
        .clock(Arc::new(FixedClock::new(d("2/1/2024"))))
        .build()
        .unwrap();
    FlatTermBond::new(core)
}

proptest! {
    #[test]
    fn present_value_decreases_with_rate(
        coupon in 10.0f64..80.0,
        years in 1i32..20,
        rate in 0.0f64..0.25,
    ) {
        let bond = annual_bond(coupon, years);
        let date = d("2/1/2024");

        let lower = bond.present_value(rate, date);
        let higher = bond.present_value(rate + 0.02, date);
        prop_assert!(higher < lower, "pv({}) = {} !< {}", rate + 0.02, higher, lower);
    }

    #[test]
    fn yield_recovers_pricing_rate(
        coupon in 10.0f64..80.0,
        years in 3i32..15,
        rate in 0.01f64..0.2,
    ) {
        let bond = annual_bond(coupon, years);
        let date = d("2/1/2024");

        let price = bond.clean_price(rate, date);
        let solved = bond.yield_to_maturity(price, date).unwrap();
        prop_assert!((solved - rate).abs() < 1e-4, "solved {} for rate {}", solved, rate);
    }

    #[test]
    fn dirty_price_adds_accrued(
        coupon in 10.0f64..80.0,
        years in 2i32..10,
        offset in 0i64..360,
    ) {
        let bond = annual_bond(coupon, years);
        let date = d("1/1/2024").add_days(offset).unwrap();

        let accrued = bond.accrued_amount(date).unwrap();
        let dirty = bond.dirty_price(0.05, date).unwrap();
        assert_relative_eq!(dirty, bond.clean_price(0.05, date) + accrued);
        prop_assert!(accrued >= 0.0);
    }
}
