//! Contractual data shared by every bond variant.

use std::fmt;
use std::sync::Arc;

use bondlib_core::daycounts::DayCountConvention;
use bondlib_core::types::{CashFlow, CashFlowSchedule, Clock, Date, SystemClock};

use crate::cashflows::AccruedInterestCalculator;
use crate::error::{BondError, BondResult};
use crate::pricing::round_money;

/// Days between "today" and the settlement date when none is given.
pub const DEFAULT_SETTLEMENT_DAYS: i64 = 2;

/// Face value used when none is given.
pub const DEFAULT_FACE_VALUE: f64 = 100.0;

/// Face value, coupon, dates, day count and cash flow schedule of a bond.
///
/// Built once through [`BondCore::builder`] and read-only afterwards. The
/// bond variants wrap a `BondCore` and add their discounting model.
#[derive(Clone)]
pub struct BondCore {
    face_value: f64,
    coupon: f64,
    maturity: Date,
    issue: Date,
    settlement: Date,
    day_count: DayCountConvention,
    schedule: CashFlowSchedule,
    clock: Arc<dyn Clock>,
}

impl BondCore {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> BondCoreBuilder {
        BondCoreBuilder::new()
    }

    /// Returns the face value.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Returns the coupon paid per period, in currency.
    #[must_use]
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Returns the issue date.
    #[must_use]
    pub fn issue(&self) -> Date {
        self.issue
    }

    /// Returns the settlement date.
    #[must_use]
    pub fn settlement(&self) -> Date {
        self.settlement
    }

    /// Returns the day count convention.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the cash flow schedule.
    #[must_use]
    pub fn schedule(&self) -> &CashFlowSchedule {
        &self.schedule
    }

    /// Returns the clock used for expiry checks.
    #[must_use]
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// First cash flow due strictly after `date`.
    #[must_use]
    pub fn cash_flow_at(&self, date: Date) -> Option<CashFlow> {
        self.schedule.cash_flow_at(date)
    }

    /// The cash flow after `cf`.
    pub fn next_cash_flow(&self, cf: &CashFlow) -> BondResult<Option<CashFlow>> {
        Ok(self.schedule.next_cash_flow(cf)?)
    }

    /// The cash flow before `cf`.
    pub fn previous_cash_flow(&self, cf: &CashFlow) -> BondResult<Option<CashFlow>> {
        Ok(self.schedule.previous_cash_flow(cf)?)
    }

    /// Payments per year around `date`.
    pub fn coupon_frequency(&self, date: Date) -> BondResult<u32> {
        Ok(self.schedule.coupon_frequency(date)?)
    }

    /// True if the final cash flow was due before the clock's today.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.schedule.is_expired(self.clock.today())
    }

    /// Coupon as a fraction of face value.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon / self.face_value
    }

    /// Coupon divided by `market_price`.
    #[must_use]
    pub fn current_yield(&self, market_price: f64) -> f64 {
        self.coupon / market_price
    }

    /// Interest accrued on `settlement`, rounded to cents.
    pub fn accrued_amount(&self, settlement: Date) -> BondResult<f64> {
        AccruedInterestCalculator::accrued_amount(
            &self.schedule,
            self.issue,
            self.coupon,
            self.day_count,
            settlement,
        )
    }

    /// Present value of the flows due on or after `date`, discounted at the
    /// flat per-period `rate` with the first included flow in period 1.
    /// Rounded to cents.
    #[must_use]
    pub fn notional_present_value(&self, rate: f64, date: Date) -> f64 {
        let pv: f64 = self
            .schedule
            .flows_from(date)
            .zip(1_i32..)
            .map(|(cf, t)| cf.amount() / (1.0 + rate).powf(f64::from(t)))
            .sum();
        round_money(pv)
    }
}

impl fmt::Debug for BondCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BondCore")
            .field("face_value", &self.face_value)
            .field("coupon", &self.coupon)
            .field("maturity", &self.maturity)
            .field("issue", &self.issue)
            .field("settlement", &self.settlement)
            .field("day_count", &self.day_count)
            .field("cash_flows", &self.schedule.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`BondCore`].
#[derive(Debug, Clone)]
pub struct BondCoreBuilder {
    face_value: f64,
    coupon: Option<f64>,
    maturity: Option<Date>,
    issue: Option<Date>,
    settlement: Option<Date>,
    day_count: DayCountConvention,
    cash_flows: Vec<CashFlow>,
    clock: Arc<dyn Clock>,
}

impl Default for BondCoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BondCoreBuilder {
    /// Creates a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            face_value: DEFAULT_FACE_VALUE,
            coupon: None,
            maturity: None,
            issue: None,
            settlement: None,
            day_count: DayCountConvention::default(),
            cash_flows: Vec::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, value: f64) -> Self {
        self.face_value = value;
        self
    }

    /// Sets the coupon paid per period, in currency.
    #[must_use]
    pub fn coupon(mut self, coupon: f64) -> Self {
        self.coupon = Some(coupon);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Sets the issue date.
    #[must_use]
    pub fn issue(mut self, date: Date) -> Self {
        self.issue = Some(date);
        self
    }

    /// Sets the settlement date.
    #[must_use]
    pub fn settlement(mut self, date: Date) -> Self {
        self.settlement = Some(date);
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn day_count(mut self, convention: DayCountConvention) -> Self {
        self.day_count = convention;
        self
    }

    /// Adds cash flows, in any order.
    #[must_use]
    pub fn cash_flows(mut self, flows: impl IntoIterator<Item = CashFlow>) -> Self {
        self.cash_flows.extend(flows);
        self
    }

    /// Adds one cash flow.
    #[must_use]
    pub fn cash_flow(mut self, amount: f64, due: Date) -> Self {
        self.cash_flows.push(CashFlow::new(amount, due));
        self
    }

    /// Sets the clock used for the default settlement date and expiry.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Builds the bond core.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the face value is
    /// not positive, no cash flows were given, the first cash flow precedes
    /// the issue date or the maturity precedes the issue date.
    pub fn build(self) -> BondResult<BondCore> {
        let coupon = self.coupon.ok_or_else(|| BondError::missing_field("coupon"))?;
        let maturity = self
            .maturity
            .ok_or_else(|| BondError::missing_field("maturity"))?;
        let issue = self.issue.ok_or_else(|| BondError::missing_field("issue"))?;

        if !(self.face_value.is_finite() && self.face_value > 0.0) {
            return Err(BondError::invalid_spec("Face value must be positive"));
        }
        if !coupon.is_finite() {
            return Err(BondError::invalid_spec("Coupon must be finite"));
        }
        if let Some(cf) = self.cash_flows.iter().find(|cf| !cf.amount().is_finite()) {
            return Err(BondError::invalid_spec(format!(
                "Cash flow due {} has a non-finite amount",
                cf.due()
            )));
        }

        let schedule = CashFlowSchedule::new(self.cash_flows, self.face_value)?;

        let first_payment = schedule.first().due();
        if first_payment < issue {
            return Err(BondError::IssueAfterFirstPayment {
                issue,
                first_payment,
            });
        }
        if maturity < issue {
            return Err(BondError::MaturityBeforeIssue { maturity, issue });
        }

        let settlement = match self.settlement {
            Some(date) => date,
            None => self.clock.today().add_days(DEFAULT_SETTLEMENT_DAYS)?,
        };

        log::trace!(
            "built bond: face {}, coupon {coupon}, {} cash flows, matures {maturity}",
            self.face_value,
            schedule.len()
        );

        Ok(BondCore {
            face_value: self.face_value,
            coupon,
            maturity,
            issue,
            settlement,
            day_count: self.day_count,
            schedule,
            clock: self.clock,
        })
    }
}
