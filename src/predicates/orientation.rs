//! Signed-area orientation test.

use crate::primitives::Point2;
use num_traits::Float;

/// Computes twice the signed area of the triangle `(p1, p2, p3)`, taking `p2`
/// as the origin: `(p1 - p2) × (p3 - p2)`.
///
/// For a counter-clockwise loop, a value `<= 0` puts `p3` on the interior
/// (left) side of the directed edge `p1 -> p2`. A convex corner `p1, p2, p3`
/// of a counter-clockwise polygon therefore has a negative value.
///
/// # Example
///
/// ```
/// use earshull::predicates::orientation;
/// use earshull::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
///
/// assert!(orientation(a, b, Point2::new(0.5, 1.0)) < 0.0); // left of a -> b
/// assert!(orientation(a, b, Point2::new(0.5, -1.0)) > 0.0); // right of a -> b
/// assert_eq!(orientation(a, b, Point2::new(2.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn orientation<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> F {
    (p1 - p2).cross(p3 - p2)
}

/// Checks if `p` lies inside or on the counter-clockwise triangle `(a, b, c)`.
///
/// All three edge tests must be `<= 0`, so points on an edge or at a corner
/// count as contained.
#[inline]
pub fn point_in_triangle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let zero = F::zero();
    orientation(a, b, p) <= zero && orientation(b, c, p) <= zero && orientation(c, a, p) <= zero
}
