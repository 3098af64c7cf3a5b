//! Upward bracket search.

use crate::error::{MathError, MathResult};

/// Doubles `initial` until `f(upper) <= 0`.
///
/// Meant for functions that decrease towards a root as the argument grows,
/// such as present value minus price as a function of yield. The search
/// starts at `initial` and gives up after `max_expansions` doublings.
///
/// # Errors
///
/// Returns `MathError::InvalidInput` if `initial` is not a positive finite
/// number, and `MathError::BracketNotFound` if the cap is reached.
///
/// # Example
///
/// ```rust
/// use bondlib_math::solvers::expand_upper_bound;
///
/// let f = |x: f64| 10.0 - x;
/// assert_eq!(expand_upper_bound(f, 1.0, 64).unwrap(), 16.0);
/// ```
pub fn expand_upper_bound<F>(f: F, initial: f64, max_expansions: u32) -> MathResult<f64>
where
    F: Fn(f64) -> f64,
{
    if !(initial.is_finite() && initial > 0.0) {
        return Err(MathError::invalid_input(format!(
            "initial upper bound must be positive and finite, got {initial}"
        )));
    }

    let mut upper = initial;
    let mut expansions = 0;
    while f(upper) > 0.0 {
        if expansions == max_expansions {
            return Err(MathError::BracketNotFound { expansions, upper });
        }
        upper *= 2.0;
        expansions += 1;
    }

    log::debug!("bracket upper bound {upper} after {expansions} expansions");
    Ok(upper)
}
