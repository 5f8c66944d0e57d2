//! Hole elimination by visibility bridges.
//!
//! Each hole is connected to the current boundary by a zero-width channel: a
//! pair of coincident edges running from a hole vertex to a visible boundary
//! vertex and back. After every hole is bridged the figure is a single
//! (weakly simple) polygon that ear clipping can consume.
//!
//! ```text
//!   3-----------2          3-----------2
//!   |           |          |           |
//!   |   5---6   |          |   5---6   |
//!   |   |   |   |  merge   |   |   |   |
//!   |   4---7   |          |  /4---7   |
//!   |           |          | //        |
//!   0-----------1          0/----------1
//! ```
//!
//! Holes are bridged in input order. Holes that are still waiting count as
//! obstacles; bridged holes are already part of the boundary.

use super::core::Polygon;
use crate::error::TriangulationError;
use crate::predicates::segments_intersect;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::cmp::Ordering;
use tracing::debug;

/// A point set with a single boundary loop of point indices.
///
/// Points are the outer vertices followed by each hole's vertices, rotated so
/// that the bridged vertex comes first. Bridged vertices appear twice in
/// `boundary`.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedPolygon<F> {
    /// Every vertex of the outer polygon and the holes.
    pub points: Vec<Point2<F>>,
    /// Counter-clockwise boundary loop as indices into `points`.
    pub boundary: Vec<usize>,
}

impl<F: Float> MergedPolygon<F> {
    /// Wraps a polygon without holes; the boundary visits every vertex once.
    pub fn from_polygon(polygon: &Polygon<F>) -> Self {
        Self {
            points: polygon.vertices.clone(),
            boundary: (0..polygon.len()).collect(),
        }
    }

    /// Number of boundary entries, counting bridged vertices twice.
    #[inline]
    pub fn len(&self) -> usize {
        self.boundary.len()
    }

    /// Returns true if the boundary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }

    /// Boundary loop as coordinates.
    pub fn boundary_points(&self) -> impl Iterator<Item = Point2<F>> + '_ {
        self.boundary.iter().map(move |&i| self.points[i])
    }

    /// Inserts `hole` right after boundary position `position`, starting at
    /// hole vertex `start`, and closes the channel back to the target.
    fn splice(&mut self, hole: &Polygon<F>, start: usize, position: usize) {
        let base = self.points.len();
        let target = self.boundary[position];

        let (head, tail) = hole.vertices.split_at(start);
        self.points.extend_from_slice(tail);
        self.points.extend_from_slice(head);

        let rest = self.boundary.split_off(position + 1);
        self.boundary.extend(base..base + hole.len());
        self.boundary.extend([base, target]);
        self.boundary.extend(rest);
    }
}

/// The chosen connection between a hole and the boundary.
#[derive(Debug, Clone, Copy)]
struct Bridge<F> {
    /// Index into the hole's vertices.
    hole_vertex: usize,
    /// Position in the merged boundary.
    position: usize,
    distance: F,
}

/// Merges holes into the outer polygon.
///
/// `outer` must be counter-clockwise and each hole clockwise, inside `outer`
/// and disjoint from the other holes. Those conditions are not checked.
///
/// # Errors
///
/// - [`TriangulationError::TooFewVertices`] if `outer` or a hole has fewer
///   than 3 vertices
/// - [`TriangulationError::ZeroArea`] if `outer` encloses no area
/// - [`TriangulationError::NoBridgeFound`] if no boundary vertex is visible
///   from any vertex of a hole
///
/// # Example
///
/// ```
/// use earshull::polygon::{merge_holes, Polygon};
/// use earshull::Point2;
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
/// let merged = merge_holes(&outer, &[hole]).unwrap();
/// assert_eq!(merged.points.len(), 8);
/// assert_eq!(merged.boundary, vec![0, 4, 5, 6, 7, 4, 0, 1, 2, 3]);
/// ```
pub fn merge_holes<F: Float>(
    outer: &Polygon<F>,
    holes: &[Polygon<F>],
) -> Result<MergedPolygon<F>, TriangulationError> {
    validate(outer, holes)?;

    let mut merged = MergedPolygon::from_polygon(outer);
    for (index, hole) in holes.iter().enumerate() {
        let pending = &holes[index + 1..];
        let bridge = find_bridge(&merged, hole, pending)
            .ok_or(TriangulationError::NoBridgeFound { hole: index })?;

        debug!(
            hole = index,
            hole_vertex = bridge.hole_vertex,
            target = merged.boundary[bridge.position],
            distance = bridge.distance.to_f64(),
            "bridged hole"
        );
        merged.splice(hole, bridge.hole_vertex, bridge.position);
    }

    Ok(merged)
}

fn validate<F: Float>(outer: &Polygon<F>, holes: &[Polygon<F>]) -> Result<(), TriangulationError> {
    if outer.len() < 3 {
        return Err(TriangulationError::TooFewVertices {
            required: 3,
            found: outer.len(),
        });
    }
    if outer.has_zero_area() {
        return Err(TriangulationError::ZeroArea);
    }
    if let Some(hole) = holes.iter().find(|h| h.len() < 3) {
        return Err(TriangulationError::TooFewVertices {
            required: 3,
            found: hole.len(),
        });
    }
    Ok(())
}

/// Shortest bridge over all hole vertices. Ties keep the earliest hole vertex.
fn find_bridge<F: Float>(
    merged: &MergedPolygon<F>,
    hole: &Polygon<F>,
    pending: &[Polygon<F>],
) -> Option<Bridge<F>> {
    let mut best: Option<Bridge<F>> = None;

    for hole_vertex in 0..hole.len() {
        let Some((position, distance)) = nearest_visible(merged, hole, hole_vertex, pending)
        else {
            continue;
        };
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(Bridge {
                hole_vertex,
                position,
                distance,
            });
        }
    }

    best
}

/// Nearest boundary position visible from `hole.vertices[hole_vertex]`.
///
/// Candidates are tried in order of distance; equal distances keep boundary
/// order.
fn nearest_visible<F: Float>(
    merged: &MergedPolygon<F>,
    hole: &Polygon<F>,
    hole_vertex: usize,
    pending: &[Polygon<F>],
) -> Option<(usize, F)> {
    let from = hole.vertices[hole_vertex];

    let mut candidates: Vec<(usize, F)> = merged
        .boundary_points()
        .enumerate()
        .map(|(position, p)| (position, from.distance(p)))
        .collect();
    candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    candidates
        .into_iter()
        .find(|&(position, _)| {
            is_visible(
                merged,
                merged.boundary[position],
                hole,
                hole_vertex,
                pending,
            )
        })
}

/// Checks whether the sight line from a hole vertex to boundary point
/// `target` is free of obstacles.
///
/// Boundary edges touching `target` and the two hole edges touching the hole
/// vertex are ignored.
fn is_visible<F: Float>(
    merged: &MergedPolygon<F>,
    target: usize,
    hole: &Polygon<F>,
    hole_vertex: usize,
    pending: &[Polygon<F>],
) -> bool {
    let sight = Segment2::new(hole.vertices[hole_vertex], merged.points[target]);
    let blocks = |edge: Segment2<F>| segments_intersect(sight, edge);

    let boundary_blocked = ring(&merged.boundary)
        .filter(|&(_, a, b)| a != target && b != target)
        .any(|(_, a, b)| blocks(Segment2::new(merged.points[a], merged.points[b])));
    if boundary_blocked {
        return false;
    }

    let n = hole.len();
    let hole_blocked = ring(&hole.vertices)
        .filter(|&(k, _, _)| k != hole_vertex && (k + 1) % n != hole_vertex)
        .any(|(_, a, b)| blocks(Segment2::new(a, b)));
    if hole_blocked {
        return false;
    }

    !pending
        .iter()
        .any(|other| ring(&other.vertices).any(|(_, a, b)| blocks(Segment2::new(a, b))))
}

/// Closed-loop edges as `(index, start, end)`.
fn ring<T: Copy>(items: &[T]) -> impl Iterator<Item = (usize, T, T)> + '_ {
    let n = items.len();
    (0..n).map(move |k| (k, items[k], items[(k + 1) % n]))
}
