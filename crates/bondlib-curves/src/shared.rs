//! Shared, externally owned curve handles.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::curve::{YieldCurve, YieldCurvePoint};
use crate::error::CurveResult;

/// A cloneable handle to a yield curve owned outside the bond.
///
/// Every clone refers to the same curve, so edits made through one handle
/// are seen by all others on their next read. Readers take a
/// [`SharedYieldCurve::read`] guard for the duration of one valuation,
/// giving that valuation a consistent view even if another thread edits
/// the curve concurrently.
///
/// ```rust
/// use bondlib_curves::{SharedYieldCurve, YieldCurve, YieldCurvePoint};
///
/// let owner = SharedYieldCurve::new(YieldCurve::default());
/// let observer = owner.clone();
///
/// owner.add_points([YieldCurvePoint::new(1.0, 0.03)]).unwrap();
/// assert_eq!(observer.read().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedYieldCurve {
    inner: Arc<RwLock<YieldCurve>>,
}

impl SharedYieldCurve {
    /// Wraps a curve in a new shared handle.
    #[must_use]
    pub fn new(curve: YieldCurve) -> Self {
        Self {
            inner: Arc::new(RwLock::new(curve)),
        }
    }

    /// Locks the curve for reading.
    ///
    /// Hold the guard for the whole of a calculation that must see a single
    /// version of the curve.
    pub fn read(&self) -> RwLockReadGuard<'_, YieldCurve> {
        self.inner.read()
    }

    /// Appends points to the shared curve.
    pub fn add_points(&self, points: impl IntoIterator<Item = YieldCurvePoint>) -> CurveResult<()> {
        self.inner.write().add_points(points)
    }

    /// Removes every point equal to `point`, returning how many were removed.
    pub fn remove_point(&self, point: &YieldCurvePoint) -> usize {
        self.inner.write().remove_point(point)
    }

    /// Replaces the whole curve.
    pub fn replace(&self, curve: YieldCurve) {
        *self.inner.write() = curve;
    }

    /// Copy of the current curve.
    #[must_use]
    pub fn snapshot(&self) -> YieldCurve {
        self.inner.read().clone()
    }

    /// True if both handles refer to the same curve.
    #[must_use]
    pub fn same_curve(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<YieldCurve> for SharedYieldCurve {
    fn from(curve: YieldCurve) -> Self {
        Self::new(curve)
    }
}
