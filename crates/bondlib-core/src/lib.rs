//! # Bondlib Core
//!
//! Calendar, day-count and cash-flow primitives for the bondlib valuation
//! engine.
//!
//! - **Types**: [`Date`] with `D/M/Y` parsing and day-number arithmetic,
//!   [`Clock`] sources of "today", [`CashFlow`] and [`CashFlowSchedule`]
//! - **Day Count Conventions**: the five accrual conventions a bond can use
//!
//! ## Example
//!
//! ```rust
//! use bondlib_core::prelude::*;
//!
//! let flows = vec![
//!     CashFlow::new(5.0, Date::parse("1/1/2023").unwrap()),
//!     CashFlow::new(5.0, Date::parse("1/1/2022").unwrap()),
//! ];
//! let schedule = CashFlowSchedule::new(flows, 100.0).unwrap();
//! assert_eq!(schedule.last().amount(), 105.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowSchedule, Clock, Date, FixedClock, SystemClock};
}

// Re-export commonly used types at crate root
pub use daycounts::DayCountConvention;
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowSchedule, Clock, Date, FixedClock, SystemClock};
