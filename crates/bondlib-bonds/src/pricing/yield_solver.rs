//! Yield-to-maturity solver.
//!
//! Inverts a price into the flat per-period rate at which the bond's
//! notional present value equals that price.

use bondlib_core::Date;
use bondlib_math::solvers::{expand_upper_bound, safeguarded_newton, SolverConfig};
use bondlib_math::MathError;

use super::round_to;
use crate::error::{BondError, BondResult};
use crate::traits::Bond;

/// Decimal places solved yields are rounded to.
pub const DEFAULT_YIELD_DECIMALS: i32 = 4;

/// Yield-to-maturity solver.
///
/// The search runs over `[0, U]`, where `U` starts at 1.0 (100%) and is
/// doubled until the present value at `U` no longer exceeds the price.
/// Inside that bracket a safeguarded Newton iteration uses the bond's
/// modified duration as the step slope, and the root is rounded to
/// [`DEFAULT_YIELD_DECIMALS`] places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    /// Solver configuration.
    config: SolverConfig,
    /// Decimal places of the returned yield.
    decimals: i32,
    /// First upper bound tried.
    initial_upper: f64,
    /// Maximum doublings of the upper bound.
    max_expansions: u32,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-5
    /// Default max iterations: 200
    /// Default rounding: 4 decimals
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            decimals: DEFAULT_YIELD_DECIMALS,
            initial_upper: 1.0,
            max_expansions: 64,
        }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the decimal places of the returned yield.
    #[must_use]
    pub fn with_precision(mut self, decimals: i32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the yield of `bond` at `price` as of `date`.
    ///
    /// The objective is always the flat notional present value; only the
    /// slope comes from the bond's own duration model.
    ///
    /// # Errors
    ///
    /// Returns `BondError::YieldConvergenceFailed` if the iteration cap is
    /// hit and `BondError::MathError` if no bracket can be found.
    pub fn solve<B: Bond + ?Sized>(&self, bond: &B, price: f64, date: Date) -> BondResult<f64> {
        let core = bond.core();
        self.solve_with(
            |rate| core.notional_present_value(rate, date),
            |rate| bond.modified_duration(rate, date),
            price,
        )
    }

    /// Solves `present_value(r) = price` with `slope` steering Newton steps.
    ///
    /// # Arguments
    ///
    /// * `present_value` - Present value as a function of the rate
    /// * `slope` - Step slope, normally the modified duration
    /// * `price` - Target price
    pub fn solve_with<PV, S>(&self, present_value: PV, slope: S, price: f64) -> BondResult<f64>
    where
        PV: Fn(f64) -> f64,
        S: Fn(f64) -> f64,
    {
        let objective = |rate: f64| present_value(rate) - price;

        let upper = expand_upper_bound(objective, self.initial_upper, self.max_expansions)?;
        let result = safeguarded_newton(objective, slope, 0.0, upper, &self.config).map_err(
            |err| match err {
                MathError::ConvergenceFailed { iterations, .. } => {
                    BondError::YieldConvergenceFailed { iterations }
                }
                other => BondError::from(other),
            },
        )?;

        log::debug!(
            "yield {} solved for price {price} in {} iterations",
            result.root,
            result.iterations
        );
        Ok(round_to(result.root, self.decimals))
    }
}
