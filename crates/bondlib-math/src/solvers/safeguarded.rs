//! Newton-Raphson safeguarded by bisection.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Finds a root of `f` between `lower` and `upper`.
///
/// The iteration starts at the midpoint and keeps a bracket `[xl, xh]`
/// oriented so that `f(xl) <= 0`. Each step is a Newton step
/// `x - f(x) / df(x)` unless that step would land outside the bracket or
/// would shrink less than half as fast as the step before it, in which
/// case the bracket is bisected instead. After each step the new point
/// replaces the bracket end with the same sign.
///
/// `df` only steers the step; it does not have to be the exact derivative
/// of `f`. With a poor slope the iteration degrades to bisection.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - Slope estimate used for Newton steps
/// * `lower`, `upper` - Bracketing interval
/// * `config` - Step tolerance and iteration cap
///
/// # Errors
///
/// Returns `MathError::InvalidInput` for non-finite bounds and
/// `MathError::ConvergenceFailed` once `config.max_iterations` evaluations
/// pass without a step smaller than `config.tolerance`.
///
/// # Example
///
/// ```rust
/// use bondlib_math::solvers::{safeguarded_newton, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let config = SolverConfig::default().with_tolerance(1e-12);
/// let result = safeguarded_newton(f, df, 0.0, 2.0, &config).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn safeguarded_newton<F, DF>(
    f: F,
    df: DF,
    lower: f64,
    upper: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    if !(lower.is_finite() && upper.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "bracket [{lower}, {upper}] must be finite"
        )));
    }

    let (mut xl, mut xh) = if f(upper) <= 0.0 {
        (upper, lower)
    } else {
        (lower, upper)
    };

    let mut x = 0.5 * (lower + upper);
    let mut dx_old = upper - lower;
    let mut dx = dx_old;
    let mut fx = f(x);
    let mut dfx = df(x);

    let mut iterations = 1;
    while iterations <= config.max_iterations {
        let leaves_bracket = ((x - xh) * dfx - fx) * ((x - xl) * dfx - fx) > 0.0;
        let too_slow = (2.0 * fx).abs() > (dx_old * dfx).abs();

        dx_old = dx;
        if leaves_bracket || too_slow {
            dx = 0.5 * (xh - xl);
            x = xl + dx;
        } else {
            dx = fx / dfx;
            x -= dx;
        }

        if dx.abs() < config.tolerance {
            log::debug!("safeguarded newton converged to {x} in {iterations} iterations");
            return Ok(SolverResult {
                root: x,
                iterations,
                residual: fx,
            });
        }

        fx = f(x);
        dfx = df(x);
        iterations += 1;

        if fx < 0.0 {
            xl = x;
        } else {
            xh = x;
        }
    }

    Err(MathError::convergence_failed(config.max_iterations, fx.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_two() {
        let config = SolverConfig::new(1e-12, 100);
        let result = safeguarded_newton(|x| x * x - 2.0, |x| 2.0 * x, 0.0, 2.0, &config).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < 20);
    }

    #[test]
    fn test_decreasing_function_with_bracket_reversed() {
        // Root at x = 3 for a decreasing function; f(upper) < 0.
        let f = |x: f64| 9.0 - x * x;
        let df = |x: f64| -2.0 * x;
        let config = SolverConfig::new(1e-10, 100);

        let result = safeguarded_newton(f, df, 0.0, 8.0, &config).unwrap();
        assert_relative_eq!(result.root, 3.0, epsilon = 1e-8);
    }

    #[test]
    fn test_wrong_slope_falls_back_to_bisection() {
        // Slope has the wrong sign everywhere; bisection still finds the root.
        let f = |x: f64| 0.3 - x;
        let df = |_: f64| 1.0;
        let config = SolverConfig::new(1e-9, 200);

        let result = safeguarded_newton(f, df, 0.0, 1.0, &config).unwrap();
        assert_relative_eq!(result.root, 0.3, epsilon = 1e-8);
        assert!(result.iterations > 20);
    }

    #[test]
    fn test_iteration_cap() {
        let f = |x: f64| 0.3 - x;
        let df = |_: f64| 1.0;
        let config = SolverConfig::new(1e-12, 5);

        let err = safeguarded_newton(f, df, 0.0, 1.0, &config).unwrap_err();
        assert!(matches!(
            err,
            MathError::ConvergenceFailed { iterations: 5, .. }
        ));
    }

    #[test]
    fn test_non_finite_bracket() {
        let config = SolverConfig::default();
        assert!(safeguarded_newton(|x| x, |_| 1.0, 0.0, f64::INFINITY, &config).is_err());
    }
}
