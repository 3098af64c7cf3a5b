//! Interpolation on curve points.

use crate::curve::YieldCurvePoint;

/// Linear interpolation of yield at `time`, flat beyond both ends.
///
/// Points are taken in the order given and are expected to be ascending in
/// maturity. An empty slice yields 0.
///
/// For interior times the bracketing pair is the first point with
/// maturity `>= time` and its predecessor:
///
/// $$y = y_{j-1} \lambda + y_j (1 - \lambda), \quad \lambda = \frac{m_j - t}{m_j - m_{j-1}}$$
#[must_use]
pub fn linear_clamped(points: &[YieldCurvePoint], time: f64) -> f64 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };

    if time <= first.maturity {
        return first.bond_yield;
    }
    if time >= last.maturity {
        return last.bond_yield;
    }

    let j = points
        .iter()
        .skip(1)
        .position(|p| p.maturity >= time)
        .map_or(points.len() - 1, |i| i + 1);

    let (lo, hi) = (&points[j - 1], &points[j]);
    let lambda = (hi.maturity - time) / (hi.maturity - lo.maturity);
    lo.bond_yield * lambda + hi.bond_yield * (1.0 - lambda)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points(raw: &[(f64, f64)]) -> Vec<YieldCurvePoint> {
        raw.iter()
            .map(|&(m, y)| YieldCurvePoint::new(m, y))
            .collect()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(linear_clamped(&[], 2.0), 0.0);
    }

    #[test]
    fn test_two_point_curve() {
        let pts = points(&[(1.0, 0.02), (5.0, 0.04)]);

        assert_relative_eq!(linear_clamped(&pts, 3.0), 0.03, epsilon = 1e-15);
        assert_eq!(linear_clamped(&pts, 0.5), 0.02);
        assert_eq!(linear_clamped(&pts, 10.0), 0.04);
        assert_eq!(linear_clamped(&pts, 1.0), 0.02);
        assert_eq!(linear_clamped(&pts, 5.0), 0.04);
    }

    #[test]
    fn test_interior_knot_hit_exactly() {
        let pts = points(&[(1.0, 0.035), (2.0, 0.04), (3.0, 0.047), (4.0, 0.055)]);
        assert_relative_eq!(linear_clamped(&pts, 2.0), 0.04, epsilon = 1e-15);
        assert_relative_eq!(linear_clamped(&pts, 2.5), 0.0435, epsilon = 1e-15);
    }

    #[test]
    fn test_single_point_is_flat() {
        let pts = points(&[(2.0, 0.05)]);
        assert_eq!(linear_clamped(&pts, 0.1), 0.05);
        assert_eq!(linear_clamped(&pts, 7.0), 0.05);
    }
}
