//! Pricing utilities: rounding rules and the yield-to-maturity solver.
//!
//! Monetary results (present values, prices, accrued interest, durations)
//! are rounded half away from zero to 2 decimals, solved yields to 4.

mod yield_solver;

pub use yield_solver::{YieldSolver, DEFAULT_YIELD_DECIMALS};

/// Rounds `value` half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Rounds a monetary amount to cents.
#[must_use]
pub fn round_money(value: f64) -> f64 {
    round_to(value, 2)
}
