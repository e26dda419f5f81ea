//! Integer sample point.

use super::Point2;
use num_traits::Float;
use std::fmt;

/// An integer point sample, as delivered by pointer input.
///
/// Equality is exact. The ordering sorts by `x` first and breaks ties on `y`,
/// which is the processing order of a rebuild.
///
/// # Example
///
/// ```
/// use bowyer::Point;
///
/// let mut points = vec![Point::new(300, 100), Point::new(100, 100), Point::new(100, 50)];
/// points.sort();
/// assert_eq!(points, vec![Point::new(100, 50), Point::new(100, 100), Point::new(300, 100)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts to a floating-point position.
    #[inline]
    pub fn to_float<F: Float>(self) -> Point2<F> {
        // i32 always fits in f32/f64 range
        Point2::new(
            F::from(self.x).unwrap_or_else(F::zero),
            F::from(self.y).unwrap_or_else(F::zero),
        )
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
