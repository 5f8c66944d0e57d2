//! Lawson edge flipping.
//!
//! Turns any triangulation of a point set into a Delaunay triangulation by
//! repeatedly flipping interior edges whose opposite vertex lies inside the
//! neighbouring circumcircle.
//!
//! ```text
//!        q                 q
//!       /|\               / \
//!      / | \             /   \
//!     a  |  b    flip   a-----b
//!      \ | /             \   /
//!       \|/               \ /
//!        p                 p
//! ```
//!
//! The pair `(a, p, q)` and `(b, q, p)` becomes `(a, b, p)` and `(a, b, q)`.
//! A flip only happens when `a, p, b, q` is strictly convex, so the covered
//! area never changes.

use super::circumcircle::in_circumcircle;
use super::triangle::{Edge, Triangle};
use crate::error::TriangulationError;
use crate::predicates::orientation;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Output of [`flip_to_delaunay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipResult {
    /// Triangles after flipping, in the slots of the input triangles.
    pub triangles: Vec<Triangle>,
    /// Number of flips performed.
    pub flips: usize,
}

/// Flips edges until every interior edge is locally Delaunay.
///
/// A pair containing exactly one zero-area triangle is always flipped when its
/// quad is convex. This removes the slivers the sweep leaves along collinear
/// hull points.
///
/// `max_iterations` bounds the number of edges examined. `None` uses
/// `16 * t * t` for `t` triangles.
///
/// # Errors
///
/// Returns [`TriangulationError::ConvergenceFailed`] if the bound is reached
/// before the queue drains.
///
/// # Example
///
/// ```
/// use earshull::triangulation::{flip_to_delaunay, Triangle};
/// use earshull::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(2.0, 0.5),
///     Point2::new(2.0, -0.5),
/// ];
/// let triangles = vec![Triangle::new(0, 1, 2), Triangle::new(1, 0, 3)];
///
/// let result = flip_to_delaunay(&points, &triangles, None).unwrap();
/// assert_eq!(result.flips, 1);
/// ```
pub fn flip_to_delaunay<F: Float>(
    points: &[Point2<F>],
    triangles: &[Triangle],
    max_iterations: Option<usize>,
) -> Result<FlipResult, TriangulationError> {
    let mut triangles = triangles.to_vec();
    let limit = max_iterations.unwrap_or_else(|| {
        triangles
            .len()
            .saturating_mul(triangles.len())
            .saturating_mul(16)
    });

    let mut edges: HashMap<Edge, Vec<usize>> = HashMap::with_capacity(triangles.len() * 3 / 2);
    for (t, tri) in triangles.iter().enumerate() {
        register(&mut edges, tri, t);
    }

    // Interior edges in triangle order, each once.
    let mut stack: Vec<Edge> = Vec::new();
    for (t, tri) in triangles.iter().enumerate() {
        for (u, v) in tri.edges() {
            let edge = Edge::new(u, v);
            if matches!(edges.get(&edge).map(Vec::as_slice), Some(&[first, _]) if first == t) {
                stack.push(edge);
            }
        }
    }

    let mut iterations = 0;
    let mut flips = 0;

    while let Some(edge) = stack.pop() {
        iterations += 1;
        if iterations > limit {
            return Err(TriangulationError::ConvergenceFailed { iterations: limit });
        }

        let (t1, t2) = match edges.get(&edge).map(Vec::as_slice) {
            Some(&[t1, t2]) => (t1, t2),
            _ => continue,
        };
        let Edge(p, q) = edge;
        let (Some(a), Some(b)) = (
            opposite(&triangles[t1], p, q),
            opposite(&triangles[t2], p, q),
        ) else {
            continue;
        };
        if a == b {
            continue;
        }

        let area1 = triangles[t1].signed_area(points);
        let area2 = triangles[t2].signed_area(points);
        let zero1 = area1 == F::zero();
        let zero2 = area2 == F::zero();
        if zero1 && zero2 {
            continue;
        }

        let (pa, pb, pp, pq) = (points[a], points[b], points[p], points[q]);
        let side_p = orientation(pa, pb, pp);
        let side_q = orientation(pa, pb, pq);
        let convex = (side_p > F::zero() && side_q < F::zero())
            || (side_p < F::zero() && side_q > F::zero());
        if !convex {
            continue;
        }

        if zero1 == zero2 && !in_circumcircle(pb, pp, pq, pa) {
            continue;
        }

        let reference = if zero1 { area2 } else { area1 };
        let positive = reference > F::zero();
        let first = with_winding(Triangle::new(a, b, p), points, positive);
        let second = with_winding(Triangle::new(a, b, q), points, positive);

        unregister(&mut edges, &triangles[t1], t1);
        unregister(&mut edges, &triangles[t2], t2);
        triangles[t1] = first;
        triangles[t2] = second;
        register(&mut edges, &first, t1);
        register(&mut edges, &second, t2);

        stack.extend([
            Edge::new(a, p),
            Edge::new(p, b),
            Edge::new(b, q),
            Edge::new(q, a),
        ]);

        flips += 1;
        trace!(p, q, a, b, "flipped edge");
    }

    debug!(
        triangles = triangles.len(),
        flips, iterations, "edge flipping converged"
    );

    Ok(FlipResult { triangles, flips })
}

fn register(edges: &mut HashMap<Edge, Vec<usize>>, tri: &Triangle, t: usize) {
    for (u, v) in tri.edges() {
        edges.entry(Edge::new(u, v)).or_default().push(t);
    }
}

fn unregister(edges: &mut HashMap<Edge, Vec<usize>>, tri: &Triangle, t: usize) {
    for (u, v) in tri.edges() {
        let edge = Edge::new(u, v);
        if let Some(owners) = edges.get_mut(&edge) {
            owners.retain(|&o| o != t);
            if owners.is_empty() {
                edges.remove(&edge);
            }
        }
    }
}

#[inline]
fn opposite(tri: &Triangle, p: usize, q: usize) -> Option<usize> {
    tri.vertices().into_iter().find(|&v| v != p && v != q)
}

/// Reorders `tri` so its signed area is positive iff `positive`.
#[inline]
fn with_winding<F: Float>(tri: Triangle, points: &[Point2<F>], positive: bool) -> Triangle {
    if (tri.signed_area(points) > F::zero()) == positive {
        tri
    } else {
        tri.reversed()
    }
}
