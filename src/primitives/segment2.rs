//! 2D line segment between floating-point positions.

use super::Point2;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Voronoi edges are segments between circumcenters. Derived equality is
/// directional; [`Segment2::same_endpoints`] ignores orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the segment with start and end swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns `true` if both segments join the same two points, in either direction.
    #[inline]
    pub fn same_endpoints(self, other: Self) -> bool {
        self == other || self == other.reversed()
    }
}
