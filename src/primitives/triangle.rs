//! Triangle over integer points.

use super::{Edge, Point};

/// A triangle given by three integer vertices.
///
/// No vertex ordering is enforced. The derived equality compares vertices
/// position by position; use [`Triangle::same_vertices`] to compare as
/// unordered triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    /// Creates a new triangle.
    #[inline]
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    /// Returns the vertices in storage order.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Returns the three edges `(p1, p2)`, `(p2, p3)`, `(p3, p1)`.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.p1, self.p2),
            Edge::new(self.p2, self.p3),
            Edge::new(self.p3, self.p1),
        ]
    }

    /// Checks if `p` is one of the vertices.
    #[inline]
    pub fn contains_vertex(&self, p: Point) -> bool {
        self.p1 == p || self.p2 == p || self.p3 == p
    }

    /// Counts how many of this triangle's vertices also appear in `other`.
    ///
    /// Two triangles with a count of exactly two share an edge.
    pub fn shared_vertex_count(&self, other: &Triangle) -> usize {
        self.vertices()
            .iter()
            .filter(|&&v| other.contains_vertex(v))
            .count()
    }

    /// Vertices sorted by the point ordering.
    pub fn sorted_vertices(&self) -> [Point; 3] {
        let mut v = self.vertices();
        v.sort_unstable();
        v
    }

    /// Compares as unordered vertex triples.
    #[inline]
    pub fn same_vertices(&self, other: &Triangle) -> bool {
        self.sorted_vertices() == other.sorted_vertices()
    }

    /// Twice the signed area, exact in integer arithmetic.
    ///
    /// Positive for counter-clockwise winding in a y-up frame, zero when the
    /// vertices are collinear or coincident. Computed in `i128` so any `i32`
    /// coordinates fit.
    pub fn doubled_signed_area(&self) -> i128 {
        orient(self.p1, self.p2, self.p3)
    }

    /// Checks if `p` lies strictly inside the triangle, off every edge.
    pub fn strictly_contains(&self, p: Point) -> bool {
        let d1 = orient(self.p1, self.p2, p).signum();
        let d2 = orient(self.p2, self.p3, p).signum();
        let d3 = orient(self.p3, self.p1, p).signum();
        d1 != 0 && d1 == d2 && d2 == d3
    }
}

fn orient(a: Point, b: Point, c: Point) -> i128 {
    let (ax, ay) = (i128::from(a.x), i128::from(a.y));
    let (bx, by) = (i128::from(b.x), i128::from(b.y));
    let (cx, cy) = (i128::from(c.x), i128::from(c.y));
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}
