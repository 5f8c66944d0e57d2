//! Triangulation of point sets.
//!
//! [`sweep_hull`] builds a triangulation of the convex hull by incremental
//! insertion and [`flip_to_delaunay`] legalizes it. [`delaunay_triangulation`]
//! runs both.

mod circumcircle;
mod flip;
mod sweep;
mod triangle;

pub use circumcircle::{circumcenter, circumradius, in_circumcircle, in_circumcircle_with_tolerance};
pub use flip::{flip_to_delaunay, FlipResult};
pub use sweep::{delaunay_triangulation, sweep_hull, SweepHull};
pub use triangle::{triangulation_area, Triangle};

