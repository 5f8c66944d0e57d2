//! Circumcircle measures and the in-circle test.

use crate::primitives::Point2;
use num_traits::Float;

/// Computes the circumradius of the triangle `(a, b, c)`.
///
/// Uses the numerically stable arrangement of Heron's formula, multiplying
/// four terms built from the side lengths sorted implicitly by the
/// parenthesization. If that product is non-positive or negligible compared
/// to the fourth power of the perimeter, the triangle is treated as collinear
/// and the radius is infinite.
///
/// # Example
///
/// ```
/// use earshull::triangulation::circumradius;
/// use earshull::Point2;
///
/// let r = circumradius(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
/// );
/// assert!((r - 2.0_f64.sqrt()).abs() < 1e-12);
///
/// let collinear = circumradius(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(2.0, 0.0),
/// );
/// assert!(collinear.is_infinite());
/// ```
pub fn circumradius<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    let ab = a.distance(b);
    let ac = a.distance(c);
    let bc = b.distance(c);

    let x1 = ab + (ac + bc);
    let x2 = bc - (ab - ac);
    let x3 = bc + (ab - ac);
    let x4 = ab + (ac - bc);
    let product = x1 * x2 * x3 * x4;

    let perimeter = ab + ac + bc;
    let floor = F::epsilon() * perimeter.powi(4);
    if product <= F::zero() || product <= floor {
        return F::infinity();
    }

    // sqrt(product) is four times the area.
    ab * ac * bc / product.sqrt()
}

/// Computes the center of the circle through `a`, `b` and `c`.
///
/// Returns `None` for collinear points.
pub fn circumcenter<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<Point2<F>> {
    let two = F::from(2.0).unwrap();
    let d = two * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d == F::zero() {
        return None;
    }

    let aa = a.x * a.x + a.y * a.y;
    let bb = b.x * b.x + b.y * b.y;
    let cc = c.x * c.x + c.y * c.y;

    let ux = (aa * (b.y - c.y) + bb * (c.y - a.y) + cc * (a.y - b.y)) / d;
    let uy = (aa * (c.x - b.x) + bb * (a.x - c.x) + cc * (b.x - a.x)) / d;
    Some(Point2::new(ux, uy))
}

/// Tests if a point lies strictly inside the circumcircle of a triangle.
///
/// Works for either winding of `(a, b, c)`. Degenerate triangles have no
/// inside. The determinant must exceed `tolerance` times the magnitude of its
/// terms, so cocircular points are not reported.
///
/// # Arguments
///
/// * `p` - The point to test
/// * `a`, `b`, `c` - The triangle vertices
/// * `tolerance` - Relative error allowance, e.g. `1e-9`
pub fn in_circumcircle_with_tolerance<F: Float>(
    p: Point2<F>,
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    tolerance: F,
) -> bool {
    let area = (b - a).cross(c - a);
    if area == F::zero() {
        return false;
    }

    // | ax-px  ay-py  (ax-px)²+(ay-py)² |
    // | bx-px  by-py  (bx-px)²+(by-py)² | > 0  iff p is inside circumcircle (CCW triangle)
    // | cx-px  cy-py  (cx-px)²+(cy-py)² |
    let ax = a.x - p.x;
    let ay = a.y - p.y;
    let bx = b.x - p.x;
    let by = b.y - p.y;
    let cx = c.x - p.x;
    let cy = c.y - p.y;

    let aa = ax * ax + ay * ay;
    let bb = bx * bx + by * by;
    let cc = cx * cx + cy * cy;

    let det = ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by);
    let permanent = ax.abs() * (by.abs() * cc + cy.abs() * bb)
        + ay.abs() * (bx.abs() * cc + cx.abs() * bb)
        + aa * ((bx * cy).abs() + (cx * by).abs());

    let signed = if area > F::zero() { det } else { -det };
    signed > tolerance * permanent
}

/// Tests if a point lies strictly inside the circumcircle of a triangle,
/// allowing for floating-point rounding in the determinant.
///
/// # Example
///
/// ```
/// use earshull::triangulation::in_circumcircle;
/// use earshull::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.5, 0.866); // Roughly equilateral
///
/// assert!(in_circumcircle(Point2::new(0.5, 0.29), a, b, c));
/// assert!(in_circumcircle(Point2::new(0.5, 0.29), a, c, b));
/// assert!(!in_circumcircle(Point2::new(10.0, 10.0), a, b, c));
/// ```
pub fn in_circumcircle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let slack = F::from(16.0).unwrap();
    in_circumcircle_with_tolerance(p, a, b, c, slack * F::epsilon())
}
