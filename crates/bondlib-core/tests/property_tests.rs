//! Property-based tests for calendar arithmetic and schedule queries.

use std::collections::BTreeSet;

use bondlib_core::prelude::*;
use proptest::prelude::*;

fn calendar_date() -> impl Strategy<Value = Date> {
    (1900i32..2200, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| Date::new(d, m, y).unwrap())
}

/// Between 2 and 40 distinct due dates, shuffled, with amounts.
fn cash_flows() -> impl Strategy<Value = Vec<CashFlow>> {
    prop::collection::btree_set(0i64..20_000, 2..40)
        .prop_flat_map(|offsets: BTreeSet<i64>| {
            let n = offsets.len();
            (
                Just(offsets),
                prop::collection::vec(1.0f64..100.0, n),
            )
        })
        .prop_map(|(offsets, amounts)| {
            let base = Date::new(1, 1, 2000).unwrap();
            offsets
                .into_iter()
                .rev()
                .zip(amounts)
                .map(|(offset, amount)| CashFlow::new(amount, base.add_days(offset).unwrap()))
                .collect()
        })
}

proptest! {
    #[test]
    fn add_days_shifts_day_number(date in calendar_date(), n in -500_000i64..500_000) {
        let shifted = date.add_days(n).unwrap();
        prop_assert_eq!(shifted.day_number(), date.day_number() + n);
    }

    #[test]
    fn add_days_is_total(date in calendar_date(), n in any::<i64>()) {
        match date.add_days(n) {
            Ok(shifted) => prop_assert_eq!(shifted.day_number(), date.day_number() + n),
            Err(err) => prop_assert!(matches!(err, CoreError::YearOutOfRange { .. }), "unexpected error variant"),
        }
    }

    #[test]
    fn day_number_inverts(date in calendar_date()) {
        prop_assert_eq!(Date::from_day_number(date.day_number()).unwrap(), date);
    }

    #[test]
    fn ordering_matches_day_number(a in calendar_date(), b in calendar_date()) {
        prop_assert_eq!(a.cmp(&b), a.day_number().cmp(&b.day_number()));
    }

    #[test]
    fn schedule_is_ascending(flows in cash_flows()) {
        let schedule = CashFlowSchedule::new(flows.clone(), 100.0).unwrap();
        prop_assert_eq!(schedule.len(), flows.len());
        for pair in schedule.as_slice().windows(2) {
            prop_assert!(pair[0].due() < pair[1].due());
        }
    }

    #[test]
    fn cash_flow_at_is_earliest_later_flow(flows in cash_flows(), offset in -10i64..20_010) {
        let schedule = CashFlowSchedule::new(flows, 100.0).unwrap();
        let date = Date::new(1, 1, 2000).unwrap().add_days(offset).unwrap();

        let expected = schedule.iter().filter(|cf| cf.due() > date).map(|cf| cf.due()).min();
        prop_assert_eq!(schedule.cash_flow_at(date).map(|cf| cf.due()), expected);
    }

    #[test]
    fn previous_undoes_next(flows in cash_flows()) {
        let schedule = CashFlowSchedule::new(flows, 100.0).unwrap();
        let last = schedule.last();

        for cf in schedule.iter().filter(|cf| cf.due() != last.due()) {
            let next = schedule.next_cash_flow(cf).unwrap().unwrap();
            prop_assert_eq!(schedule.previous_cash_flow(&next).unwrap(), Some(*cf));
        }
    }
}
