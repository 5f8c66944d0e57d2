//! Triangulation options.

use crate::error::TriangulationError;
use crate::triangulation::Triangle;

/// Vertex order of the triangles emitted by ear clipping.
///
/// For a counter-clockwise input polygon, `PrevCurrentNext` yields
/// counter-clockwise triangles and `PrevNextCurrent` yields clockwise ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriangleWinding {
    /// Emit `(prev, next, current)`. Numeric flag `0`.
    PrevNextCurrent,
    /// Emit `(prev, current, next)`. Numeric flag `1`.
    #[default]
    PrevCurrentNext,
}

impl TriangleWinding {
    /// Builds the ear triangle for the corner `current` in this winding.
    #[inline]
    pub fn arrange(self, prev: usize, current: usize, next: usize) -> Triangle {
        match self {
            TriangleWinding::PrevNextCurrent => Triangle::new(prev, next, current),
            TriangleWinding::PrevCurrentNext => Triangle::new(prev, current, next),
        }
    }
}

impl TryFrom<u8> for TriangleWinding {
    type Error = TriangulationError;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(TriangleWinding::PrevNextCurrent),
            1 => Ok(TriangleWinding::PrevCurrentNext),
            other => Err(TriangulationError::InvalidWindingFlag(other)),
        }
    }
}

impl From<TriangleWinding> for u8 {
    fn from(winding: TriangleWinding) -> Self {
        match winding {
            TriangleWinding::PrevNextCurrent => 0,
            TriangleWinding::PrevCurrentNext => 1,
        }
    }
}

/// Options for [`triangulate_with_holes`](crate::polygon::triangulate_with_holes).
///
/// # Example
///
/// ```
/// use earshull::{TriangleWinding, TriangulationOptions};
///
/// let options = TriangulationOptions::default()
///     .with_winding(TriangleWinding::PrevNextCurrent)
///     .with_refinement(true);
///
/// assert!(options.refine);
/// assert_eq!(options.max_flip_iterations, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriangulationOptions {
    /// Vertex order of emitted triangles.
    pub winding: TriangleWinding,
    /// Run the Delaunay edge-flip pass over the ear-clipped mesh.
    pub refine: bool,
    /// Iteration limit for the flip pass. `None` picks a limit from the mesh size.
    pub max_flip_iterations: Option<usize>,
}

impl TriangulationOptions {
    /// Sets the triangle winding.
    pub fn with_winding(mut self, winding: TriangleWinding) -> Self {
        self.winding = winding;
        self
    }

    /// Enables or disables the edge-flip pass.
    pub fn with_refinement(mut self, refine: bool) -> Self {
        self.refine = refine;
        self
    }

    /// Caps the number of edge-flip iterations.
    pub fn with_max_flip_iterations(mut self, iterations: usize) -> Self {
        self.max_flip_iterations = Some(iterations);
        self
    }
}
