//! Undirected edge between two integer points.

use super::Point;
use std::hash::{Hash, Hasher};

/// An unordered pair of points.
///
/// Equality ignores orientation: `Edge::new(a, b) == Edge::new(b, a)`.
/// The endpoints keep the order they were created with so that a cavity
/// boundary edge re-triangulates with the winding of the triangle it came from.
///
/// # Example
///
/// ```
/// use bowyer::{Edge, Point};
///
/// let a = Point::new(0, 0);
/// let b = Point::new(5, 1);
/// assert_eq!(Edge::new(a, b), Edge::new(b, a));
/// assert_ne!(Edge::new(a, b), Edge::new(a, Point::new(5, 2)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub p1: Point,
    pub p2: Point,
}

impl Edge {
    /// Creates an edge from two endpoints.
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Endpoints sorted by the point ordering, independent of orientation.
    #[inline]
    pub fn key(&self) -> (Point, Point) {
        if self.p1 <= self.p2 {
            (self.p1, self.p2)
        } else {
            (self.p2, self.p1)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
