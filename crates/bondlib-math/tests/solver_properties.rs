//! Property-based tests for bracketing and the safeguarded Newton solver.

use bondlib_math::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn bracket_bounds_the_root(root in 0.001f64..1.0e6) {
        let f = |x: f64| root - x;
        let upper = expand_upper_bound(f, 1.0, 64).unwrap();

        prop_assert!(upper >= root);
        prop_assert!(upper == 1.0 || upper / 2.0 < root);
    }

    #[test]
    fn exact_slope_finds_root(root in 0.01f64..0.99, scale in 1.0f64..500.0) {
        let f = |x: f64| scale * (root - x);
        let df = |_: f64| -scale;

        let result = safeguarded_newton(f, df, 0.0, 1.0, &SolverConfig::default()).unwrap();
        prop_assert!((result.root - root).abs() < 1e-9);
    }

    #[test]
    fn wrong_slope_still_converges(root in 0.01f64..0.99, scale in 1.0f64..500.0) {
        // Positive slope for a decreasing function pushes the solver onto
        // bisection.
        let f = |x: f64| scale * (root - x);
        let df = |_: f64| scale;

        let result = safeguarded_newton(f, df, 0.0, 1.0, &SolverConfig::default()).unwrap();
        prop_assert!((result.root - root).abs() < 1e-4);
        prop_assert!(result.iterations <= 200);
    }
}
