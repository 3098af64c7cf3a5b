//! # Bondlib Bonds
//!
//! Bond valuation for the bondlib engine.
//!
//! This crate provides:
//!
//! - **Instruments**: [`FlatTermBond`] (one flat discount rate) and
//!   [`GeneralTermBond`] (discounted along a yield curve), both built from a
//!   [`BondCore`]
//! - **Pricing**: clean/dirty price, duration, yield-to-maturity
//! - **Cash Flows**: accrued interest under five day count conventions
//!
//! ## Example
//!
//! ```rust
//! use bondlib_bonds::prelude::*;
//! use bondlib_core::prelude::*;
//! use bondlib_curves::prelude::*;
//!
//! let d = |s: &str| Date::parse(s).unwrap();
//! let core = BondCore::builder()
//!     .coupon(5.0)
//!     .maturity(d("1/1/2025"))
//!     .issue(d("1/1/2021"))
//!     .settlement(d("3/1/2021"))
//!     .cash_flows((2022..=2025).map(|y| CashFlow::new(5.0, Date::new(1, 1, y).unwrap())))
//!     .build()
//!     .unwrap();
//!
//! let curve = SharedYieldCurve::new(YieldCurve::new(vec![
//!     YieldCurvePoint::new(1.0, 0.035),
//!     YieldCurvePoint::new(2.0, 0.04),
//!     YieldCurvePoint::new(3.0, 0.047),
//!     YieldCurvePoint::new(4.0, 0.055),
//! ]).unwrap());
//!
//! let bond = GeneralTermBond::new(core, curve);
//! assert_eq!(bond.present_value(d("1/1/2021")), 98.05);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::AccruedInterestCalculator;
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{BondCore, BondCoreBuilder, FlatTermBond, GeneralTermBond};
    pub use crate::pricing::{round_money, YieldSolver};
    pub use crate::traits::Bond;
}

// Re-export commonly used types at crate root
pub use error::{BondError, BondResult};
pub use instruments::{BondCore, BondCoreBuilder, FlatTermBond, GeneralTermBond};
pub use traits::Bond;
