//! earshull - Polygon and point-set triangulation
//!
//! Two triangulators over plain floating-point geometry:
//!
//! - [`polygon`]: simple polygons with holes, by bridging every hole into the
//!   outer boundary and clipping ears
//! - [`triangulation`]: Delaunay triangulation of point sets, by sweep-hull
//!   insertion followed by edge flipping
//!
//! Everything is generic over `f32` and `f64` through [`num_traits::Float`].
//! Fallible operations return [`TriangulationError`]; progress is reported
//! through [`tracing`] and no subscriber is installed.
//!
//! # Example
//!
//! ```
//! use earshull::triangulation::delaunay_triangulation;
//! use earshull::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let result = delaunay_triangulation(&points).unwrap();
//! assert_eq!(result.triangles.len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod polygon;
pub mod predicates;
pub mod primitives;
pub mod triangulation;

pub use config::{TriangleWinding, TriangulationOptions};
pub use error::TriangulationError;
pub use primitives::{Point2, Segment2, Vec2};
