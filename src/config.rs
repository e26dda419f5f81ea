//! Triangulator configuration.

use crate::error::BowyerError;
use crate::primitives::{Point, Triangle};

/// Default tolerance for the circumcircle test.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Default super-triangle corners, enclosing the square 0..2000 on both
/// axes with room to spare.
pub const DEFAULT_SUPER_TRIANGLE: [Point; 3] = [
    Point::new(-3000, -3000),
    Point::new(1000, 9000),
    Point::new(5000, -3000),
];

/// What happens to triangles that touch a super-triangle corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Keep them in the mesh. The Voronoi dual then has segments running to
    /// the circumcenters of these outer triangles.
    #[default]
    Keep,
    /// Drop them after each rebuild, leaving only triangles between samples.
    Strip,
}

/// Settings for a [`Triangulator`](crate::Triangulator).
///
/// # Example
///
/// ```
/// use bowyer::{BoundaryPolicy, Triangulator, TriangulatorConfig};
///
/// let config = TriangulatorConfig::default()
///     .with_epsilon(1e-6)
///     .with_boundary(BoundaryPolicy::Strip);
/// let triangulator = Triangulator::with_config(config).unwrap();
/// assert!(triangulator.triangles().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TriangulatorConfig {
    /// Corners of the seed triangle. Every sample should lie inside it.
    pub super_triangle: [Point; 3],
    /// Tolerance for near-horizontal edges and for circle containment.
    pub epsilon: f64,
    /// Treatment of triangles attached to the super-triangle.
    pub boundary: BoundaryPolicy,
}

impl Default for TriangulatorConfig {
    fn default() -> Self {
        Self {
            super_triangle: DEFAULT_SUPER_TRIANGLE,
            epsilon: DEFAULT_EPSILON,
            boundary: BoundaryPolicy::Keep,
        }
    }
}

impl TriangulatorConfig {
    /// Replaces the super-triangle corners.
    pub fn with_super_triangle(mut self, corners: [Point; 3]) -> Self {
        self.super_triangle = corners;
        self
    }

    /// Replaces the circumcircle tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Replaces the boundary policy.
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Returns the super-triangle as a [`Triangle`].
    #[inline]
    pub fn seed_triangle(&self) -> Triangle {
        let [a, b, c] = self.super_triangle;
        Triangle::new(a, b, c)
    }

    /// Checks if `p` lies strictly inside the super-triangle.
    ///
    /// Samples on or beyond its boundary cannot be triangulated.
    #[inline]
    pub fn encloses(&self, p: Point) -> bool {
        self.seed_triangle().strictly_contains(p)
    }

    /// Checks the settings for values a rebuild cannot work with.
    pub fn validate(&self) -> Result<(), BowyerError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(BowyerError::InvalidTolerance {
                value: self.epsilon,
            });
        }
        if self.seed_triangle().doubled_signed_area() == 0 {
            return Err(BowyerError::DegenerateSuperTriangle);
        }
        Ok(())
    }
}
