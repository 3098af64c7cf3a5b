//! Root-finding algorithms.
//!
//! - [`safeguarded_newton`]: Newton steps kept inside a shrinking bracket,
//!   with bisection whenever a step would leave it or stalls
//! - [`expand_upper_bound`]: doubles an upper bound until a decreasing
//!   function turns non-positive
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use bondlib_math::solvers::{expand_upper_bound, safeguarded_newton, SolverConfig};
//!
//! // Three annual 10% coupons plus principal, priced at par.
//! let pv = |y: f64| (1..=3).map(|t| {
//!     let cf = if t == 3 { 110.0 } else { 10.0 };
//!     cf / (1.0 + y).powi(t)
//! }).sum::<f64>();
//! let f = |y: f64| pv(y) - 100.0;
//! let df = |y: f64| -(1..=3).map(|t| {
//!     let cf = if t == 3 { 110.0 } else { 10.0 };
//!     f64::from(t) * cf / (1.0 + y).powi(t + 1)
//! }).sum::<f64>();
//!
//! let upper = expand_upper_bound(&f, 1.0, 64).unwrap();
//! let result = safeguarded_newton(&f, &df, 0.0, upper, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.10).abs() < 1e-4);
//! ```

mod bracket;
mod safeguarded;

pub use bracket::expand_upper_bound;
pub use safeguarded::safeguarded_newton;

/// Default step tolerance for root finding.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Default iteration cap for root finding.
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence is declared once a step is smaller than this.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of function evaluations of the iteration loop.
    pub iterations: u32,
    /// Function value at the last evaluated point.
    pub residual: f64,
}
