//! Interior angles and the per-call angle cache.

use crate::error::TriangulationError;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::HashMap;

/// Computes the angle at `vertex` swept from the edge towards `prev` to the
/// edge towards `next`, in radians.
///
/// The result lies in `[0, π]` for a convex corner of a counter-clockwise
/// loop and in `[π, 2π)` for a reflex corner. The dot product of the unit
/// edge vectors is clamped to `[-1, 1]` before `acos`.
///
/// Returns `None` if either edge has zero length.
///
/// # Example
///
/// ```
/// use earshull::predicates::interior_angle;
/// use earshull::Point2;
///
/// // Corner (0, 0) of the CCW triangle (0, 0), (1, 0), (0, 1).
/// let angle = interior_angle(
///     Point2::new(0.0_f64, 1.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 0.0),
/// )
/// .unwrap();
/// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn interior_angle<F: Float>(prev: Point2<F>, next: Point2<F>, vertex: Point2<F>) -> Option<F> {
    let to_prev = (prev - vertex).normalize()?;
    let to_next = (next - vertex).normalize()?;

    let cross = -to_prev.cross(to_next);
    let dot = to_prev.dot(to_next).max(-F::one()).min(F::one());
    let angle = dot.acos();

    if cross < F::zero() {
        let two_pi = F::from(2.0 * std::f64::consts::PI).unwrap();
        Some(two_pi - angle)
    } else {
        Some(angle)
    }
}

/// Memoized interior angles keyed by the ordered point-index triple
/// `(prev, next, vertex)`.
///
/// A cache belongs to a single triangulation call and must not be reused
/// with a different point set.
#[derive(Debug, Clone, Default)]
pub struct AngleCache<F> {
    angles: HashMap<(usize, usize, usize), F>,
}

impl<F: Float> AngleCache<F> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            angles: HashMap::new(),
        }
    }

    /// Returns the number of cached angles.
    #[inline]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Returns true if nothing has been cached yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Returns the angle at `points[vertex]` between the edges to
    /// `points[prev]` and `points[next]`, computing it on first use.
    ///
    /// # Errors
    ///
    /// [`TriangulationError::DegenerateGeometry`] if either edge has zero length.
    pub fn angle(
        &mut self,
        points: &[Point2<F>],
        prev: usize,
        next: usize,
        vertex: usize,
    ) -> Result<F, TriangulationError> {
        let key = (prev, next, vertex);
        if let Some(&angle) = self.angles.get(&key) {
            return Ok(angle);
        }

        let angle = interior_angle(points[prev], points[next], points[vertex])
            .ok_or(TriangulationError::DegenerateGeometry { vertex })?;
        self.angles.insert(key, angle);
        Ok(angle)
    }
}
