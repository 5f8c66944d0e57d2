//! Polygon triangulation with holes.
//!
//! This module provides:
//! - The [`Polygon`] type with area and bounding box
//! - Hole merging through visibility bridges ([`merge_holes`])
//! - Ear clipping of the merged boundary ([`ear_clip`])
//!
//! # Example
//!
//! ```
//! use earshull::polygon::{triangulate_with_holes, Polygon};
//! use earshull::{Point2, TriangulationOptions};
//!
//! let outer = Polygon::new(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! // Holes run clockwise
//! let holes = vec![
//!     Polygon::new(vec![
//!         Point2::new(0.5, 0.5),
//!         Point2::new(0.5, 1.5),
//!         Point2::new(1.5, 1.5),
//!         Point2::new(1.5, 0.5),
//!     ]),
//!     Polygon::new(vec![
//!         Point2::new(2.5, 2.5),
//!         Point2::new(2.5, 3.5),
//!         Point2::new(3.5, 3.5),
//!         Point2::new(3.5, 2.5),
//!     ]),
//! ];
//!
//! let result = triangulate_with_holes(&outer, &holes, TriangulationOptions::default()).unwrap();
//! assert_eq!(result.len(), 14);
//! assert!((result.area() - 14.0).abs() < 1e-12);
//! ```

mod core;
mod merge;
mod triangulate;

pub use core::{polygon_signed_area, Polygon};
pub use merge::{merge_holes, MergedPolygon};
pub use triangulate::{ear_clip, triangulate_polygon, triangulate_with_holes, Triangulation};
