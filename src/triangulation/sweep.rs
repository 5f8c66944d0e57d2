//! Delaunay triangulation by sweep-hull incremental insertion.
//!
//! Points are inserted in order of distance from the circumcenter of a seed
//! triangle. Every insertion sees a convex hull of the points inserted so far
//! and joins the new point to the arc of hull edges it can see.
//!
//! # Algorithm
//!
//! 1. The seed is the first input point; its nearest neighbour is second
//! 2. The third point minimizes the seed triangle's circumradius
//! 3. Remaining points are sorted by distance to the seed circumcenter
//! 4. Each point adds one triangle per visible hull edge and replaces the
//!    visible arc with two edges to itself
//!
//! The raw sweep output is a valid triangulation of the convex hull with no
//! edge flips applied. [`delaunay_triangulation`] adds the flip pass.
//!
//! # Complexity
//!
//! - Time: O(n log n) for sorting plus O(h) per insertion, h = hull size
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use earshull::triangulation::sweep_hull;
//! use earshull::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let result = sweep_hull(&points).unwrap();
//! assert_eq!(result.triangles.len(), 2);
//! assert_eq!(result.hull.len(), 4);
//! ```

use super::circumcircle::{circumcenter, circumradius};
use super::flip::flip_to_delaunay;
use super::triangle::Triangle;
use crate::error::TriangulationError;
use crate::predicates::orientation;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Final hull and triangles of a sweep-hull triangulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepHull {
    /// Hull vertex indices in order.
    ///
    /// Consecutive hull vertices `u, v` satisfy `orientation(u, v, p) > 0`
    /// for every point `p` strictly inside the hull.
    pub hull: Vec<usize>,
    /// Triangles, seed triangle first.
    pub triangles: Vec<Triangle>,
}

/// Triangulates a point set with the sweep-hull algorithm.
///
/// Triangles are emitted as `(hull[i], new_point, hull[i + 1])` for every
/// visible hull edge, so they all share the winding of the seed triangle.
///
/// # Errors
///
/// - [`TriangulationError::TooFewVertices`] for fewer than 3 points
/// - [`TriangulationError::CollinearPoints`] if no seed triangle has a finite
///   circumcircle
/// - [`TriangulationError::NoVisibleHullEdge`] or
///   [`TriangulationError::AllHullEdgesVisible`] for degenerate insertions
pub fn sweep_hull<F: Float>(points: &[Point2<F>]) -> Result<SweepHull, TriangulationError> {
    if points.len() < 3 {
        return Err(TriangulationError::TooFewVertices {
            required: 3,
            found: points.len(),
        });
    }

    let seed = select_seed(points)?;
    let center = circumcenter(points[seed[0]], points[seed[1]], points[seed[2]])
        .ok_or(TriangulationError::CollinearPoints)?;
    let order = sorted_by_distance(points, center, |i| !seed.contains(&i));

    let mut hull = seed.to_vec();
    let mut triangles = Vec::with_capacity(2 * points.len());
    triangles.push(Triangle::new(seed[0], seed[1], seed[2]));

    for point in order {
        insert_point(points, &mut hull, point, &mut triangles)?;
    }

    debug!(
        points = points.len(),
        hull = hull.len(),
        triangles = triangles.len(),
        "sweep-hull finished"
    );

    Ok(SweepHull { hull, triangles })
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Runs [`sweep_hull`] and then legalizes every interior edge with
/// [`flip_to_delaunay`]. The hull is unchanged by flipping and triangles keep
/// the sweep's winding.
///
/// # Example
///
/// ```
/// use earshull::triangulation::{delaunay_triangulation, in_circumcircle};
/// use earshull::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.4),
/// ];
///
/// let result = delaunay_triangulation(&points).unwrap();
/// assert_eq!(result.triangles.len(), 4);
///
/// for tri in &result.triangles {
///     for (i, &p) in points.iter().enumerate() {
///         if !tri.contains_vertex(i) {
///             assert!(!in_circumcircle(p, points[tri.a], points[tri.b], points[tri.c]));
///         }
///     }
/// }
/// ```
pub fn delaunay_triangulation<F: Float>(
    points: &[Point2<F>],
) -> Result<SweepHull, TriangulationError> {
    let mut result = sweep_hull(points)?;
    let flipped = flip_to_delaunay(points, &result.triangles, None)?;
    result.triangles = flipped.triangles;
    Ok(result)
}

/// Picks the seed triangle, ordered so that `orientation(seed) >= 0`.
fn select_seed<F: Float>(points: &[Point2<F>]) -> Result<[usize; 3], TriangulationError> {
    let seed = 0;
    let origin = points[seed];

    let second = (0..points.len())
        .filter(|&i| i != seed)
        .min_by(|&i, &j| compare(origin.distance(points[i]), origin.distance(points[j])))
        .ok_or(TriangulationError::CollinearPoints)?;

    let (third, radius) = (0..points.len())
        .filter(|&i| i != seed && i != second)
        .map(|i| (i, circumradius(origin, points[second], points[i])))
        .min_by(|a, b| compare(a.1, b.1))
        .ok_or(TriangulationError::CollinearPoints)?;

    if !radius.is_finite() {
        return Err(TriangulationError::CollinearPoints);
    }

    debug!(seed, second, third, radius = radius.to_f64(), "selected seed triangle");

    if orientation(origin, points[second], points[third]) < F::zero() {
        Ok([seed, third, second])
    } else {
        Ok([seed, second, third])
    }
}

#[inline]
fn compare<F: Float>(a: F, b: F) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Indices accepted by `keep`, sorted by distance to `origin`. Ties keep
/// index order.
fn sorted_by_distance<F: Float>(
    points: &[Point2<F>],
    origin: Point2<F>,
    keep: impl Fn(usize) -> bool,
) -> Vec<usize> {
    let mut by_distance: Vec<(F, usize)> = points
        .iter()
        .enumerate()
        .filter(|&(i, _)| keep(i))
        .map(|(i, &p)| (p.distance(origin), i))
        .collect();
    by_distance.sort_by(|a, b| compare(a.0, b.0));
    by_distance.into_iter().map(|(_, i)| i).collect()
}

/// Finds the contiguous arc of visible edges as `(first, last)` edge indices.
///
/// The arc starts at the first visible edge that follows a hidden one, so it
/// may wrap around the end of the hull.
fn visible_arc(visible: &[bool], point: usize) -> Result<(usize, usize), TriangulationError> {
    let n = visible.len();

    let hidden = visible
        .iter()
        .position(|&v| !v)
        .ok_or(TriangulationError::AllHullEdgesVisible { point })?;

    let first = (1..n)
        .map(|offset| (hidden + offset) % n)
        .find(|&i| visible[i])
        .ok_or(TriangulationError::NoVisibleHullEdge { point })?;

    let mut last = first;
    while visible[(last + 1) % n] {
        last = (last + 1) % n;
    }

    Ok((first, last))
}

/// Adds `point` to the hull, emitting one triangle per visible edge.
///
/// Edge `i` runs from `hull[i]` to `hull[i + 1]` and is visible when
/// `orientation(hull[i], hull[i + 1], point) <= 0`.
fn insert_point<F: Float>(
    points: &[Point2<F>],
    hull: &mut Vec<usize>,
    point: usize,
    triangles: &mut Vec<Triangle>,
) -> Result<(), TriangulationError> {
    let n = hull.len();
    let p = points[point];

    let visible: Vec<bool> = (0..n)
        .map(|i| orientation(points[hull[i]], points[hull[(i + 1) % n]], p) <= F::zero())
        .collect();
    let (first, last) = visible_arc(&visible, point)?;

    let arc_len = (last + n - first) % n + 1;
    for offset in 0..arc_len {
        let i = (first + offset) % n;
        triangles.push(Triangle::new(hull[i], point, hull[(i + 1) % n]));
    }

    // Keep hull[last + 1] ..= hull[first], then close through the new point.
    let start = (last + 1) % n;
    let kept = (first + n - start) % n + 1;
    let mut next_hull = Vec::with_capacity(kept + 1);
    next_hull.extend((0..kept).map(|offset| hull[(start + offset) % n]));
    next_hull.push(point);
    *hull = next_hull;

    trace!(point, visible_edges = arc_len, hull = hull.len(), "inserted point");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulation::triangle::triangulation_area;
    use crate::triangulation::in_circumcircle;
    use std::collections::HashSet;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn assert_empty_circumcircles(points: &[Point2<f64>], triangles: &[Triangle]) {
        for tri in triangles {
            let (a, b, c) = (points[tri.a], points[tri.b], points[tri.c]);
            for (i, &p) in points.iter().enumerate() {
                if !tri.contains_vertex(i) {
                    assert!(
                        !in_circumcircle(p, a, b, c),
                        "Point {} is inside circumcircle of triangle ({}, {}, {})",
                        i,
                        tri.a,
                        tri.b,
                        tri.c
                    );
                }
            }
        }
    }

    #[test]
    fn test_too_few_points() {
        let points = vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(
            sweep_hull(&points),
            Err(TriangulationError::TooFewVertices {
                required: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_collinear_points() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        ];
        assert_eq!(sweep_hull(&points), Err(TriangulationError::CollinearPoints));
    }

    #[test]
    fn test_coincident_seed() {
        let points = vec![
            Point2::new(1.0_f64, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(3.0, 0.0),
        ];
        assert_eq!(sweep_hull(&points), Err(TriangulationError::CollinearPoints));
    }

    #[test]
    fn test_three_points() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let result = sweep_hull(&points).unwrap();
        assert_eq!(result.triangles.len(), 1);
        assert_eq!(result.hull.len(), 3);

        let tri = result.triangles[0];
        assert_eq!(tri.a, 0);
        assert!(
            orientation(points[tri.a], points[tri.b], points[tri.c]) >= 0.0,
            "seed triangle must be ordered with non-negative orientation"
        );
    }

    #[test]
    fn test_seed_selection() {
        // (0.5, 0.6) is nearest to the origin and (1, 0) closes the tightest circle.
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(5.0, 5.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.6),
            Point2::new(0.5, 3.0),
        ];
        let seed = select_seed(&points).unwrap();
        assert_eq!(seed[0], 0);
        let rest: HashSet<usize> = seed[1..].iter().copied().collect();
        assert_eq!(rest, HashSet::from([2, 3]));
        assert!(orientation(points[seed[0]], points[seed[1]], points[seed[2]]) >= 0.0);
    }

    #[test]
    fn test_square() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let result = sweep_hull(&points).unwrap();
        assert_eq!(result.triangles.len(), 2);
        assert!(approx_eq(triangulation_area(&points, &result.triangles), 1.0, 1e-12));
        assert_empty_circumcircles(&points, &result.triangles);

        let hull: HashSet<usize> = result.hull.iter().copied().collect();
        assert_eq!(hull, HashSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn test_triangles_share_seed_winding() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.1, 0.2),
            Point2::new(0.8, 0.1),
            Point2::new(0.9, 0.9),
            Point2::new(0.2, 0.85),
            Point2::new(0.5, 0.5),
            Point2::new(0.3, 0.3),
            Point2::new(0.7, 0.6),
            Point2::new(0.4, 0.8),
        ];
        let result = sweep_hull(&points).unwrap();
        let seed_sign = result.triangles[0].signed_area(&points).signum();
        for tri in &result.triangles {
            assert_eq!(tri.signed_area(&points).signum(), seed_sign);
        }
    }

    #[test]
    fn test_hull_is_convex() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.1, 0.2),
            Point2::new(0.8, 0.1),
            Point2::new(0.9, 0.9),
            Point2::new(0.2, 0.85),
            Point2::new(0.5, 0.5),
            Point2::new(0.3, 0.3),
            Point2::new(0.7, 0.6),
            Point2::new(0.4, 0.8),
        ];
        let result = sweep_hull(&points).unwrap();
        assert_eq!(result.hull.len(), 4);

        let n = result.hull.len();
        for i in 0..n {
            let a = points[result.hull[i]];
            let b = points[result.hull[(i + 1) % n]];
            for (k, &p) in points.iter().enumerate() {
                if k != result.hull[i] && k != result.hull[(i + 1) % n] {
                    assert!(orientation(a, b, p) > 0.0);
                }
            }
        }

        // 2n - h - 2 triangles
        assert_eq!(result.triangles.len(), 2 * points.len() - n - 2);
    }

    #[test]
    fn test_insert_single_visible_edge() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let mut hull = vec![0, 1, 2];
        let mut triangles = Vec::new();
        insert_point(&points, &mut hull, 3, &mut triangles).unwrap();

        assert_eq!(triangles, vec![Triangle::new(1, 3, 2)]);
        assert_eq!(hull, vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_insert_wrapping_arc() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, -1.0),
        ];
        // Visible edges are 2 -> 3 and 3 -> 0, split across the end of the list.
        let mut hull = vec![3, 0, 1, 2];
        let mut triangles = Vec::new();
        insert_point(&points, &mut hull, 4, &mut triangles).unwrap();

        assert_eq!(triangles, vec![Triangle::new(2, 4, 3), Triangle::new(3, 4, 0)]);
        assert_eq!(hull, vec![0, 1, 2, 4]);
    }

    #[test]
    fn test_insert_no_visible_edge() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.2, 0.2),
        ];
        let mut hull = vec![0, 1, 2];
        let mut triangles = Vec::new();
        assert_eq!(
            insert_point(&points, &mut hull, 3, &mut triangles),
            Err(TriangulationError::NoVisibleHullEdge { point: 3 })
        );
        assert!(triangles.is_empty());
        assert_eq!(hull, vec![0, 1, 2]);
    }

    #[test]
    fn test_insert_all_edges_visible() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        ];
        let mut hull = vec![0, 1, 2];
        let mut triangles = Vec::new();
        assert_eq!(
            insert_point(&points, &mut hull, 3, &mut triangles),
            Err(TriangulationError::AllHullEdgesVisible { point: 3 })
        );
    }

    #[test]
    fn test_visible_arc() {
        assert_eq!(visible_arc(&[false, true, true, false], 9), Ok((1, 2)));
        assert_eq!(visible_arc(&[true, false, false, true], 9), Ok((3, 0)));
        assert_eq!(
            visible_arc(&[false, false, false], 9),
            Err(TriangulationError::NoVisibleHullEdge { point: 9 })
        );
        assert_eq!(
            visible_arc(&[true, true, true], 9),
            Err(TriangulationError::AllHullEdgesVisible { point: 9 })
        );
    }

    #[test]
    fn test_delaunay_no_point_in_circumcircle() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.1, 0.2),
            Point2::new(0.8, 0.1),
            Point2::new(0.9, 0.9),
            Point2::new(0.2, 0.85),
            Point2::new(0.5, 0.5),
            Point2::new(0.3, 0.3),
            Point2::new(0.7, 0.6),
            Point2::new(0.4, 0.8),
        ];
        let result = delaunay_triangulation(&points).unwrap();
        assert_eq!(result.triangles.len(), 10);
        assert_empty_circumcircles(&points, &result.triangles);
    }

    #[test]
    fn test_delaunay_covers_all_points() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.4),
        ];
        let result = delaunay_triangulation(&points).unwrap();

        let used: HashSet<usize> = result
            .triangles
            .iter()
            .flat_map(|t| t.vertices())
            .collect();
        for i in 0..points.len() {
            assert!(used.contains(&i), "Point {} not used in triangulation", i);
        }
        assert!(approx_eq(triangulation_area(&points, &result.triangles), 1.0, 1e-12));
    }

    #[test]
    fn test_grid_area() {
        // Collinear rows leave zero-area triangles along the hull,
        // the covered area is still exact.
        let mut points: Vec<Point2<f64>> = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                points.push(Point2::new(i as f64, j as f64));
            }
        }
        let result = delaunay_triangulation(&points).unwrap();
        assert!(approx_eq(triangulation_area(&points, &result.triangles), 9.0, 1e-9));
    }

    #[test]
    fn test_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let result = sweep_hull(&points).unwrap();
        assert_eq!(result.triangles.len(), 1);
    }
}
