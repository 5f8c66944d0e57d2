//! Error types for triangulation operations.

use thiserror::Error;

/// Errors that can occur while triangulating a polygon or a point set.
///
/// Every variant means the input geometry has to be fixed; nothing is
/// retried and no partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// A zero-length edge makes the angle at a vertex undefined.
    #[error("degenerate geometry: zero-length edge at point {vertex}")]
    DegenerateGeometry {
        /// Point index of the vertex the angle was requested at.
        vertex: usize,
    },

    /// A hole has no visible connection to the rest of the figure.
    #[error("no bridge found for hole {hole}")]
    NoBridgeFound {
        /// Index of the hole in the input order.
        hole: usize,
    },

    /// A full ear-clipping scan found no valid ear.
    #[error("no ear found with {remaining} vertices remaining")]
    NoEarFound {
        /// Number of vertices left in the working polygon.
        remaining: usize,
    },

    /// No hull edge is visible from the point being inserted.
    #[error("no hull edge visible from point {point}")]
    NoVisibleHullEdge {
        /// Index of the point being inserted.
        point: usize,
    },

    /// Every hull edge is visible from the point being inserted.
    #[error("all hull edges visible from point {point}")]
    AllHullEdgesVisible {
        /// Index of the point being inserted.
        point: usize,
    },

    /// Not enough vertices to form a triangle.
    #[error("at least {required} vertices required, found {found}")]
    TooFewVertices {
        /// Minimum vertex count.
        required: usize,
        /// Vertex count provided.
        found: usize,
    },

    /// A boundary entry points past the end of the point list.
    #[error("boundary index {index} out of range for {len} points")]
    IndexOutOfRange {
        /// The offending point index.
        index: usize,
        /// Number of points available.
        len: usize,
    },

    /// The outer polygon encloses no area.
    #[error("outer polygon has zero area")]
    ZeroArea,

    /// Every candidate seed triangle is collinear or has coincident points.
    #[error("points are collinear: no seed triangle with a finite circumcircle")]
    CollinearPoints,

    /// A numeric winding flag other than 0 or 1.
    #[error("invalid winding flag {0}, expected 0 or 1")]
    InvalidWindingFlag(u8),

    /// Edge flipping did not settle within the iteration limit.
    #[error("convergence failed after {iterations} iterations")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: usize,
    },
}
