//! Yield curve points and the curve itself.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::linear_clamped;

/// A yield observed at a maturity, in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldCurvePoint {
    /// Time to maturity in years.
    pub maturity: f64,
    /// Yield at that maturity.
    #[serde(rename = "yield")]
    pub bond_yield: f64,
}

impl YieldCurvePoint {
    /// Creates a curve point.
    #[must_use]
    pub fn new(maturity: f64, bond_yield: f64) -> Self {
        Self {
            maturity,
            bond_yield,
        }
    }

    fn validate(&self) -> CurveResult<()> {
        if self.maturity.is_finite() && self.bond_yield.is_finite() {
            Ok(())
        } else {
            Err(CurveError::InvalidPoint {
                maturity: self.maturity,
                bond_yield: self.bond_yield,
            })
        }
    }
}

/// An ordered sequence of yield curve points.
///
/// Points are kept in the order they were supplied; callers are expected
/// to supply them in increasing maturity. The curve is never sorted or
/// deduplicated internally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<YieldCurvePoint>", into = "Vec<YieldCurvePoint>")]
pub struct YieldCurve {
    points: Vec<YieldCurvePoint>,
}

impl YieldCurve {
    /// Creates a curve from points.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidPoint` if any point is not finite.
    pub fn new(points: Vec<YieldCurvePoint>) -> CurveResult<Self> {
        points.iter().try_for_each(YieldCurvePoint::validate)?;
        Ok(Self { points })
    }

    /// Appends points to the end of the curve.
    ///
    /// Either every point is appended or, on error, none is.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidPoint` if any point is not finite.
    pub fn add_points(&mut self, points: impl IntoIterator<Item = YieldCurvePoint>) -> CurveResult<()> {
        let points: Vec<YieldCurvePoint> = points.into_iter().collect();
        points.iter().try_for_each(YieldCurvePoint::validate)?;
        self.points.extend(points);
        Ok(())
    }

    /// Removes every point exactly equal to `point`, returning how many
    /// were removed.
    pub fn remove_point(&mut self, point: &YieldCurvePoint) -> usize {
        let before = self.points.len();
        self.points.retain(|p| p != point);
        let removed = before - self.points.len();
        if removed == 0 {
            log::debug!("no curve point at maturity {} to remove", point.maturity);
        }
        removed
    }

    /// Returns the points in curve order.
    #[must_use]
    pub fn points(&self) -> &[YieldCurvePoint] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Interpolated yield at `time` years. See [`linear_clamped`].
    #[must_use]
    pub fn rate_at(&self, time: f64) -> f64 {
        linear_clamped(&self.points, time)
    }
}

impl TryFrom<Vec<YieldCurvePoint>> for YieldCurve {
    type Error = CurveError;

    fn try_from(points: Vec<YieldCurvePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<YieldCurve> for Vec<YieldCurvePoint> {
    fn from(curve: YieldCurve) -> Self {
        curve.points
    }
}
