//! Cash flows and the immutable schedule a bond is valued from.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// A payment amount due on a date.
///
/// # Example
///
/// ```rust
/// use bondlib_core::types::{CashFlow, Date};
///
/// let cf = CashFlow::new(5.0, Date::parse("1/1/2025").unwrap());
/// assert_eq!(cf.amount(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    amount: f64,
    due: Date,
}

impl CashFlow {
    /// Creates a cash flow of `amount` due on `due`.
    #[must_use]
    pub fn new(amount: f64, due: Date) -> Self {
        Self { amount, due }
    }

    /// Payment amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Due date.
    #[must_use]
    pub fn due(&self) -> Date {
        self.due
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.due, self.amount)
    }
}

/// Cash flows of one bond in ascending due-date order.
///
/// Built once from unordered input and never mutated afterwards. When the
/// two final flows carry the same amount the face value is folded into the
/// last one, so a coupon list of `[5, 5, 5, 5]` becomes `[5, 5, 5, 105]`.
/// If that final pair also shares a due date the pair collapses into a
/// single entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowSchedule {
    cash_flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Sorts `flows` by due date and applies the final-pair merge.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmptySchedule` if `flows` is empty.
    #[allow(clippy::float_cmp)]
    pub fn new(flows: impl IntoIterator<Item = CashFlow>, face_value: f64) -> CoreResult<Self> {
        let mut cash_flows: Vec<CashFlow> = flows.into_iter().collect();
        if cash_flows.is_empty() {
            return Err(CoreError::EmptySchedule);
        }

        cash_flows.sort_by_key(CashFlow::due);

        let n = cash_flows.len();
        if n >= 2 && cash_flows[n - 1].amount == cash_flows[n - 2].amount {
            cash_flows[n - 1].amount += face_value;
            if cash_flows[n - 1].due == cash_flows[n - 2].due {
                log::warn!(
                    "merging duplicate final cash flow due {}",
                    cash_flows[n - 1].due
                );
                cash_flows.remove(n - 2);
            }
        }

        log::trace!("built cash flow schedule with {} entries", cash_flows.len());
        Ok(Self { cash_flows })
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Always false; construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter()
    }

    /// Earliest cash flow.
    #[must_use]
    pub fn first(&self) -> CashFlow {
        self.cash_flows[0]
    }

    /// Latest cash flow.
    #[must_use]
    pub fn last(&self) -> CashFlow {
        self.cash_flows[self.cash_flows.len() - 1]
    }

    /// Flows due on or after `date`, the set a valuation on `date` discounts.
    pub fn flows_from(&self, date: Date) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter().filter(move |cf| cf.due >= date)
    }

    /// The current cash flow: the first one due strictly after `date`.
    ///
    /// Returns `None` once `date` is on or after the final due date.
    #[must_use]
    pub fn cash_flow_at(&self, date: Date) -> Option<CashFlow> {
        self.cash_flows.iter().find(|cf| cf.due > date).copied()
    }

    /// The flow following `cf`, located by due date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InsufficientCashFlows` on a schedule with fewer
    /// than two entries.
    pub fn next_cash_flow(&self, cf: &CashFlow) -> CoreResult<Option<CashFlow>> {
        let index = self.position_of(cf)?;
        Ok(index.and_then(|i| self.cash_flows.get(i + 1).copied()))
    }

    /// The flow preceding `cf`, located by due date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InsufficientCashFlows` on a schedule with fewer
    /// than two entries.
    pub fn previous_cash_flow(&self, cf: &CashFlow) -> CoreResult<Option<CashFlow>> {
        let index = self.position_of(cf)?;
        Ok(index
            .and_then(|i| i.checked_sub(1))
            .map(|i| self.cash_flows[i]))
    }

    fn position_of(&self, cf: &CashFlow) -> CoreResult<Option<usize>> {
        if self.cash_flows.len() < 2 {
            return Err(CoreError::InsufficientCashFlows {
                len: self.cash_flows.len(),
            });
        }
        Ok(self.cash_flows.iter().position(|c| c.due == cf.due))
    }

    /// Payments per year implied by the schedule around `date`: one plus
    /// the number of flows due strictly between `date` and the same day a
    /// year later.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::YearOutOfRange` if `date` cannot be moved a year
    /// forward.
    pub fn coupon_frequency(&self, date: Date) -> CoreResult<u32> {
        let horizon = date.add_years(1)?;
        let inside = self
            .cash_flows
            .iter()
            .filter(|cf| cf.due > date && cf.due < horizon)
            .count();
        Ok(1 + inside as u32)
    }

    /// True when the final payment falls strictly before `today`.
    #[must_use]
    pub fn is_expired(&self, today: Date) -> bool {
        self.last().due < today
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}
