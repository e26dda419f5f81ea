//! Circumcircle construction and the tolerance-based containment test.
//!
//! The circle through three points is found by intersecting perpendicular
//! bisectors of two triangle edges. The bisector slope divides by an edge's
//! y-difference, so a (near-)horizontal edge is routed to a branch that takes
//! the center's x-coordinate directly from that edge's midpoint instead.
//!
//! Containment is inclusive: a point within `eps` of the circle counts as
//! inside. When no circle exists the test reports [`CircleTest::Degenerate`],
//! which never counts as containment.
//!
//! # Example
//!
//! ```
//! use bowyer::triangulation::{circumcircle, CircleTest};
//! use bowyer::Point2;
//!
//! let a = Point2::new(0.0_f64, 0.0);
//! let b = Point2::new(4.0, 0.0);
//! let c = Point2::new(0.0, 4.0);
//!
//! let test = circumcircle(Point2::new(2.0, 2.0), a, b, c);
//! assert!(test.contains());
//!
//! let circle = test.circle().unwrap();
//! assert_eq!(circle.center, Point2::new(2.0, 2.0));
//! assert_eq!(circle.radius_squared, 8.0);
//!
//! let collinear = circumcircle(a, a, b, Point2::new(8.0, 0.0));
//! assert_eq!(collinear, CircleTest::Degenerate);
//! ```

use crate::config::DEFAULT_EPSILON;
use crate::primitives::{Point, Point2, Triangle};
use num_traits::Float;

/// A circle stored by center and squared radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle<F> {
    pub center: Point2<F>,
    pub radius_squared: F,
}

impl<F: Float> Circumcircle<F> {
    /// Computes the circle through `a`, `b` and `c`.
    ///
    /// Returns `None` when both the `a`–`b` and `b`–`c` y-differences are below
    /// `eps`, or when the bisectors do not meet at a finite point.
    pub fn through(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Option<Self> {
        let two = F::one() + F::one();
        let dy_ab = (a.y - b.y).abs();
        let dy_bc = (b.y - c.y).abs();

        if dy_ab < eps && dy_bc < eps {
            return None;
        }

        let center = if dy_ab < eps {
            let m_bc = -(c.x - b.x) / (c.y - b.y);
            let mid_bc = b.midpoint(c);
            let x = (b.x + a.x) / two;
            Point2::new(x, m_bc * (x - mid_bc.x) + mid_bc.y)
        } else if dy_bc < eps {
            let m_ab = -(b.x - a.x) / (b.y - a.y);
            let mid_ab = a.midpoint(b);
            let x = (c.x + b.x) / two;
            Point2::new(x, m_ab * (x - mid_ab.x) + mid_ab.y)
        } else {
            let m_ab = -(b.x - a.x) / (b.y - a.y);
            let m_bc = -(c.x - b.x) / (c.y - b.y);
            let mid_ab = a.midpoint(b);
            let mid_bc = b.midpoint(c);
            let x = (m_ab * mid_ab.x - m_bc * mid_bc.x + mid_bc.y - mid_ab.y) / (m_ab - m_bc);
            // Evaluate on the steeper-edged bisector, it is better conditioned.
            let y = if dy_ab > dy_bc {
                m_ab * (x - mid_ab.x) + mid_ab.y
            } else {
                m_bc * (x - mid_bc.x) + mid_bc.y
            };
            Point2::new(x, y)
        };

        // Vertical collinear triples give parallel bisectors.
        if !center.is_finite() {
            return None;
        }

        Some(Self {
            center,
            radius_squared: b.distance_squared(center),
        })
    }

    /// Returns the radius.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius_squared.sqrt()
    }

    /// Tests whether `p` lies inside or on the circle, within `eps`.
    #[inline]
    pub fn contains(&self, p: Point2<F>, eps: F) -> bool {
        p.distance_squared(self.center) - self.radius_squared <= eps
    }
}

/// Outcome of a circumcircle containment test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleTest<F> {
    /// The query point is inside or on the circle.
    Inside(Circumcircle<F>),
    /// The query point is outside the circle.
    Outside(Circumcircle<F>),
    /// The three points are collinear within tolerance; no circle exists.
    Degenerate,
}

impl<F: Float> CircleTest<F> {
    /// Returns `true` only for [`CircleTest::Inside`].
    #[inline]
    pub fn contains(&self) -> bool {
        matches!(self, CircleTest::Inside(_))
    }

    /// Returns `true` for [`CircleTest::Degenerate`].
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, CircleTest::Degenerate)
    }

    /// Returns the circle, if one exists.
    #[inline]
    pub fn circle(&self) -> Option<Circumcircle<F>> {
        match *self {
            CircleTest::Inside(c) | CircleTest::Outside(c) => Some(c),
            CircleTest::Degenerate => None,
        }
    }
}

/// Tests `query` against the circumcircle of `a`, `b`, `c` with the default
/// tolerance of `1e-4`.
pub fn circumcircle<F: Float>(
    query: Point2<F>,
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
) -> CircleTest<F> {
    let eps = F::from(DEFAULT_EPSILON).unwrap_or_else(F::epsilon);
    circumcircle_with_tolerance(query, a, b, c, eps)
}

/// Tests `query` against the circumcircle of `a`, `b`, `c`.
///
/// `eps` is used both to detect near-horizontal edges and as the containment
/// slack on squared distances.
pub fn circumcircle_with_tolerance<F: Float>(
    query: Point2<F>,
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    eps: F,
) -> CircleTest<F> {
    match Circumcircle::through(a, b, c, eps) {
        Some(circle) if circle.contains(query, eps) => CircleTest::Inside(circle),
        Some(circle) => CircleTest::Outside(circle),
        None => CircleTest::Degenerate,
    }
}

/// Tests an integer sample against a triangle's circumcircle in `f64`.
#[inline]
pub fn triangle_circle_test(query: Point, triangle: &Triangle, eps: f64) -> CircleTest<f64> {
    circumcircle_with_tolerance(
        query.to_float(),
        triangle.p1.to_float(),
        triangle.p2.to_float(),
        triangle.p3.to_float(),
        eps,
    )
}

/// Returns the circumcircle of a triangle, if it has one.
#[inline]
pub fn triangle_circumcircle(triangle: &Triangle, eps: f64) -> Option<Circumcircle<f64>> {
    Circumcircle::through(
        triangle.p1.to_float(),
        triangle.p2.to_float(),
        triangle.p3.to_float(),
        eps,
    )
}
