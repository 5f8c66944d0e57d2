//! Segment intersection by bounding boxes and implicit lines.
//!
//! [`segments_intersect`] is deliberately conservative: once the bounding
//! boxes overlap it only asks whether the two infinite lines cross, and never
//! checks that the crossing lies on both finite segments. Hole bridging relies
//! on this exact behavior, so a crossing reported here can be a false
//! positive.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A line in implicit form `a·x + b·y = c`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ImplicitLine<F> {
    a: F,
    b: F,
    c: F,
}

impl<F: Float> ImplicitLine<F> {
    /// Line through both endpoints of a segment.
    #[inline]
    fn through(segment: Segment2<F>) -> Self {
        let p1 = segment.start;
        let p2 = segment.end;
        Self {
            a: p1.y - p2.y,
            b: p2.x - p1.x,
            c: -(p1.x * p2.y - p2.x * p1.y),
        }
    }
}

/// Checks if two closed ranges share at least one value.
#[inline]
fn ranges_overlap<F: Float>((min1, max1): (F, F), (min2, max2): (F, F)) -> bool {
    min1 <= max2 && min2 <= max1
}

/// Checks if the axis-aligned bounding boxes of two segments overlap.
///
/// Touching boxes count as overlapping.
#[inline]
pub fn bounding_boxes_overlap<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> bool {
    ranges_overlap(s1.x_range(), s2.x_range()) && ranges_overlap(s1.y_range(), s2.y_range())
}

/// Computes where the infinite lines through two segments cross.
///
/// Returns `None` if the lines are parallel (zero determinant), including
/// collinear and degenerate (zero-length) segments.
///
/// # Example
///
/// ```
/// use earshull::predicates::line_intersection;
/// use earshull::{Point2, Segment2};
///
/// let s1 = Segment2::from_coords(0.0_f64, 0.0, 2.0, 2.0);
/// let s2 = Segment2::from_coords(0.0, 2.0, 1.0, 1.5);
///
/// // The lines meet beyond the end of `s2`.
/// assert_eq!(line_intersection(s1, s2), Some(Point2::new(4.0 / 3.0, 4.0 / 3.0)));
/// ```
pub fn line_intersection<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> Option<Point2<F>> {
    let l1 = ImplicitLine::through(s1);
    let l2 = ImplicitLine::through(s2);

    let det = l1.a * l2.b - l1.b * l2.a;
    if det == F::zero() {
        return None;
    }

    let dx = l1.c * l2.b - l1.b * l2.c;
    let dy = l1.a * l2.c - l1.c * l2.a;
    Some(Point2::new(dx / det, dy / det))
}

/// Tests if two segments intersect.
///
/// Returns `false` when the bounding boxes are disjoint or the lines are
/// parallel, and `true` otherwise, even if the crossing of the infinite lines
/// falls outside one of the finite segments.
///
/// # Example
///
/// ```
/// use earshull::predicates::segments_intersect;
/// use earshull::Segment2;
///
/// let s1 = Segment2::from_coords(0.0_f64, 0.0, 2.0, 2.0);
/// let s2 = Segment2::from_coords(0.0, 2.0, 2.0, 0.0);
/// assert!(segments_intersect(s1, s2));
///
/// // Disjoint bounding boxes never intersect.
/// let far = Segment2::from_coords(5.0, 5.0, 6.0, 7.0);
/// assert!(!segments_intersect(s1, far));
/// ```
pub fn segments_intersect<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> bool {
    if !bounding_boxes_overlap(s1, s2) {
        return false;
    }
    line_intersection(s1, s2).is_some()
}
