//! Domain types: dates, clocks and cash-flow schedules.

mod cashflow;
mod clock;
mod date;

pub use cashflow::{CashFlow, CashFlowSchedule};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::Date;
