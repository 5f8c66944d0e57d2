//! Geometric predicates shared by the triangulators.
//!
//! - [`orientation`]: signed twice-area test used for reflex detection,
//!   containment and hull visibility
//! - [`AngleCache`]: memoized interior angles keyed by index triple
//! - [`segments_intersect`]: bounding-box plus infinite-line intersection test
//!
//! All predicates use plain floating-point arithmetic. No exact or adaptive
//! arithmetic is attempted.

mod angle;
mod intersect;
mod orientation;

pub use angle::{interior_angle, AngleCache};
pub use intersect::{bounding_boxes_overlap, line_intersection, segments_intersect};
pub use orientation::{orientation, point_in_triangle};
