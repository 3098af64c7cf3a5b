//! # Bondlib Curves
//!
//! Yield curves for curve-discounted bonds.
//!
//! - **Curve**: [`YieldCurve`], an ordered list of (maturity, yield) points
//!   with linear interpolation clamped at both ends
//! - **Sharing**: [`SharedYieldCurve`], a cloneable handle that lets the
//!   curve's owner keep editing it while bonds read it
//!
//! ## Quick Start
//!
//! ```rust
//! use bondlib_curves::prelude::*;
//!
//! let curve = YieldCurve::new(vec![
//!     YieldCurvePoint::new(1.0, 0.02),
//!     YieldCurvePoint::new(5.0, 0.04),
//! ])
//! .unwrap();
//!
//! assert!((curve.rate_at(3.0) - 0.03).abs() < 1e-12);
//! assert_eq!(curve.rate_at(0.5), 0.02);
//! assert_eq!(curve.rate_at(10.0), 0.04);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod curve;
pub mod error;
pub mod interpolation;
pub mod shared;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::{YieldCurve, YieldCurvePoint};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::shared::SharedYieldCurve;
}

pub use curve::{YieldCurve, YieldCurvePoint};
pub use error::{CurveError, CurveResult};
pub use shared::SharedYieldCurve;
