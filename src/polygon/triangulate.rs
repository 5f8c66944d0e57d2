//! Polygon triangulation using ear clipping.
//!
//! Converts a simple polygon, optionally with holes, into a set of triangles
//! that exactly cover it.
//!
//! # Algorithm
//!
//! The ear clipping algorithm works by repeatedly finding and removing "ears":
//! - An ear is a triangle formed by three consecutive vertices
//! - The middle vertex must be convex (reflex vertices cannot form ears)
//! - No other polygon vertices may be inside or on the ear triangle
//!
//! Holes are first merged into the outer boundary with [`merge_holes`].
//!
//! # Complexity
//!
//! - Time: O(n³) worst case, as every clip restarts the scan
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use earshull::polygon::{triangulate_polygon, Polygon};
//! use earshull::{Point2, TriangleWinding};
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ]);
//!
//! let result = triangulate_polygon(&square, TriangleWinding::default()).unwrap();
//!
//! // A square is divided into 2 triangles
//! assert_eq!(result.len(), 2);
//! ```

use super::core::Polygon;
use super::merge::{merge_holes, MergedPolygon};
use crate::config::{TriangleWinding, TriangulationOptions};
use crate::error::TriangulationError;
use crate::predicates::{point_in_triangle, AngleCache};
use crate::primitives::Point2;
use crate::triangulation::{flip_to_delaunay, triangulation_area, Triangle};
use num_traits::Float;
use tracing::{debug, trace};

/// Result of polygon triangulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation<F> {
    /// Outer vertices followed by the vertices of every merged hole.
    pub points: Vec<Point2<F>>,
    /// Triangles as indices into `points`.
    pub triangles: Vec<Triangle>,
}

impl<F: Float> Triangulation<F> {
    /// Returns the number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Total unsigned area of all triangles.
    pub fn area(&self) -> F {
        triangulation_area(&self.points, &self.triangles)
    }

    /// Iterates over triangles as coordinate triples.
    pub fn triangle_points(&self) -> impl Iterator<Item = [Point2<F>; 3]> + '_ {
        self.triangles
            .iter()
            .map(move |t| [self.points[t.a], self.points[t.b], self.points[t.c]])
    }
}

/// Triangulates a polygon with holes.
///
/// `outer` must be counter-clockwise and every hole clockwise. With
/// `options.refine` set, the ear-clipped mesh is passed through
/// [`flip_to_delaunay`].
///
/// The returned triangle count is `n + h + 2k - 2` for `n` outer vertices,
/// `h` hole vertices in total and `k` holes.
///
/// # Example
///
/// ```
/// use earshull::polygon::{triangulate_with_holes, Polygon};
/// use earshull::{Point2, TriangulationOptions};
///
/// let outer = Polygon::new(vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
/// let hole = Polygon::new(vec![
///     Point2::new(0.5, 0.5),
///     Point2::new(0.5, 1.5),
///     Point2::new(1.5, 1.5),
///     Point2::new(1.5, 0.5),
/// ]);
///
/// let result = triangulate_with_holes(&outer, &[hole], TriangulationOptions::default()).unwrap();
/// assert_eq!(result.len(), 8);
/// assert!((result.area() - 3.0).abs() < 1e-12);
/// ```
pub fn triangulate_with_holes<F: Float>(
    outer: &Polygon<F>,
    holes: &[Polygon<F>],
    options: TriangulationOptions,
) -> Result<Triangulation<F>, TriangulationError> {
    let MergedPolygon { points, boundary } = merge_holes(outer, holes)?;
    let mut triangles = ear_clip(&points, &boundary, options.winding)?;

    if options.refine {
        let refined = flip_to_delaunay(&points, &triangles, options.max_flip_iterations)?;
        debug!(flips = refined.flips, "refined ear-clipped mesh");
        triangles = refined.triangles;
    }

    Ok(Triangulation { points, triangles })
}

/// Triangulates a simple polygon without holes.
///
/// Triangle indices refer to the polygon's own vertices.
///
/// # Example
///
/// ```
/// use earshull::polygon::{triangulate_polygon, Polygon};
/// use earshull::{Point2, TriangleWinding};
///
/// // L-shaped polygon (concave)
/// let l_shape = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
///
/// let result = triangulate_polygon(&l_shape, TriangleWinding::PrevCurrentNext).unwrap();
/// assert_eq!(result.len(), 4); // 6 vertices -> 4 triangles
/// ```
pub fn triangulate_polygon<F: Float>(
    polygon: &Polygon<F>,
    winding: TriangleWinding,
) -> Result<Triangulation<F>, TriangulationError> {
    triangulate_with_holes(
        polygon,
        &[],
        TriangulationOptions::default().with_winding(winding),
    )
}

/// Clips ears from a boundary loop until a single triangle is left.
///
/// `boundary` indexes `points` in counter-clockwise order and may visit a
/// point more than once, as merged boundaries do. Containment tests skip
/// every entry sharing a point index with the candidate ear.
///
/// # Errors
///
/// - [`TriangulationError::TooFewVertices`] for fewer than 3 entries
/// - [`TriangulationError::IndexOutOfRange`] if an entry is not a valid
///   index into `points`
/// - [`TriangulationError::DegenerateGeometry`] for a zero-length edge
/// - [`TriangulationError::NoEarFound`] if a scan finds no ear, which happens
///   for clockwise or self-intersecting input
pub fn ear_clip<F: Float>(
    points: &[Point2<F>],
    boundary: &[usize],
    winding: TriangleWinding,
) -> Result<Vec<Triangle>, TriangulationError> {
    if boundary.len() < 3 {
        return Err(TriangulationError::TooFewVertices {
            required: 3,
            found: boundary.len(),
        });
    }
    if let Some(&index) = boundary.iter().find(|&&i| i >= points.len()) {
        return Err(TriangulationError::IndexOutOfRange {
            index,
            len: points.len(),
        });
    }

    let mut remaining = boundary.to_vec();
    let mut angles = AngleCache::new();
    let mut triangles = Vec::with_capacity(boundary.len() - 2);

    while remaining.len() > 3 {
        let ear = find_ear(points, &remaining, &mut angles)?.ok_or(
            TriangulationError::NoEarFound {
                remaining: remaining.len(),
            },
        )?;

        let (prev, current, next) = corner(&remaining, ear);
        triangles.push(winding.arrange(prev, current, next));
        remaining.remove(ear);
        trace!(prev, current, next, remaining = remaining.len(), "clipped ear");
    }

    triangles.push(winding.arrange(remaining[0], remaining[1], remaining[2]));

    debug!(
        boundary = boundary.len(),
        triangles = triangles.len(),
        cached_angles = angles.len(),
        "ear clipping finished"
    );

    Ok(triangles)
}

/// Point indices around position `i` of a loop.
#[inline]
fn corner(ring: &[usize], i: usize) -> (usize, usize, usize) {
    let m = ring.len();
    (ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m])
}

/// Position of the first ear in the loop, if any.
fn find_ear<F: Float>(
    points: &[Point2<F>],
    ring: &[usize],
    angles: &mut AngleCache<F>,
) -> Result<Option<usize>, TriangulationError> {
    let pi = F::from(std::f64::consts::PI).unwrap();

    for i in 0..ring.len() {
        let (prev, current, next) = corner(ring, i);

        if angles.angle(points, prev, next, current)? >= pi {
            continue;
        }
        if !contains_other_vertex(points, ring, prev, current, next) {
            return Ok(Some(i));
        }
    }

    Ok(None)
}

/// Checks whether any loop vertex other than the corner's own points lies
/// inside or on the triangle `(prev, current, next)`.
fn contains_other_vertex<F: Float>(
    points: &[Point2<F>],
    ring: &[usize],
    prev: usize,
    current: usize,
    next: usize,
) -> bool {
    let (a, b, c) = (points[prev], points[current], points[next]);
    ring.iter()
        .filter(|&&v| v != prev && v != current && v != next)
        .any(|&v| point_in_triangle(points[v], a, b, c))
}
