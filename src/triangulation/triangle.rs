//! Index triangles and undirected edges.

use crate::primitives::Point2;
use num_traits::Float;

/// A triangle represented by indices into a point array.
///
/// The vertex order is whatever the producing algorithm emitted; see
/// [`TriangleWinding`](crate::TriangleWinding) for ear clipping and
/// [`sweep_hull`](super::sweep_hull) for the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the vertex indices in order.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three edges of this triangle as pairs of indices.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Returns the triangle with the opposite winding.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.a, self.c, self.b)
    }

    /// Signed area: positive when the vertices run counter-clockwise.
    pub fn signed_area<F: Float>(&self, points: &[Point2<F>]) -> F {
        let two = F::from(2.0).unwrap();
        (points[self.b] - points[self.a]).cross(points[self.c] - points[self.a]) / two
    }

    /// Absolute area.
    pub fn area<F: Float>(&self, points: &[Point2<F>]) -> F {
        self.signed_area(points).abs()
    }
}

impl From<(usize, usize, usize)> for Triangle {
    fn from((a, b, c): (usize, usize, usize)) -> Self {
        Self::new(a, b, c)
    }
}

impl From<Triangle> for [usize; 3] {
    fn from(t: Triangle) -> Self {
        t.vertices()
    }
}

/// An edge represented by two vertex indices, normalized so smaller index comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Edge(pub(crate) usize, pub(crate) usize);

impl Edge {
    pub(crate) fn new(a: usize, b: usize) -> Self {
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }
}

/// Computes the total area of a triangulation.
///
/// Useful for verifying that the triangulation covers the input polygon.
pub fn triangulation_area<F: Float>(points: &[Point2<F>], triangles: &[Triangle]) -> F {
    triangles
        .iter()
        .map(|t| t.area(points))
        .fold(F::zero(), |a, b| a + b)
}
