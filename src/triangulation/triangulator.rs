//! Delaunay triangulation rebuilt from scratch with Bowyer-Watson.
//!
//! The [`Triangulator`] owns the accumulated samples and the current mesh.
//! Every change to the sample set discards the mesh and re-inserts all
//! samples into a fresh super-triangle:
//!
//! 1. Sort the samples by `x`, then `y`
//! 2. Seed the mesh with the super-triangle
//! 3. For each sample, remove every triangle whose circumcircle contains it,
//!    cancel the edges shared between removed triangles, and fan the sample
//!    to the remaining cavity boundary
//!
//! Sorting fixes the insertion order, so co-circular inputs always resolve to
//! the same mesh no matter the order in which samples arrived.
//!
//! # Complexity
//!
//! - Time: O(n²) containment tests per rebuild in the worst case
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use bowyer::{Point, Triangle, Triangulator};
//!
//! let mut triangulator = Triangulator::new();
//! triangulator.add_point(100, 100);
//! triangulator.add_point(300, 100);
//! triangulator.add_point(200, 300);
//!
//! let expected = Triangle::new(Point::new(100, 100), Point::new(200, 300), Point::new(300, 100));
//! assert!(triangulator.triangles().iter().any(|t| t.same_vertices(&expected)));
//!
//! triangulator.clear();
//! assert_eq!(triangulator.triangles().len(), 1);
//! ```

use super::circumcircle::{triangle_circle_test, triangle_circumcircle, CircleTest, Circumcircle};
use super::voronoi::voronoi_edges;
use crate::config::{BoundaryPolicy, TriangulatorConfig};
use crate::error::BowyerError;
use crate::primitives::{Edge, Point, Segment2, Triangle};
use std::fmt;

/// A change to the sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append a sample and rebuild.
    AddPoint(Point),
    /// Remove every sample and rebuild.
    Clear,
}

/// Size summary of a triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub points: usize,
    pub triangles: usize,
    pub interior_triangles: usize,
    pub voronoi_edges: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "points: {}", self.points)?;
        writeln!(f, "triangles: {}", self.triangles)?;
        writeln!(f, "interior triangles: {}", self.interior_triangles)?;
        write!(f, "voronoi edges: {}", self.voronoi_edges)
    }
}

/// Owner of the sample sequence and the Delaunay mesh built from it.
#[derive(Debug, Clone)]
pub struct Triangulator {
    config: TriangulatorConfig,
    points: Vec<Point>,
    triangles: Vec<Triangle>,
}

impl Default for Triangulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Triangulator {
    /// Creates a triangulator with the default configuration.
    ///
    /// The mesh starts out as the bare super-triangle.
    pub fn new() -> Self {
        let mut triangulator = Self {
            config: TriangulatorConfig::default(),
            points: Vec::new(),
            triangles: Vec::new(),
        };
        triangulator.rebuild();
        triangulator
    }

    /// Creates a triangulator after validating `config`.
    pub fn with_config(config: TriangulatorConfig) -> Result<Self, BowyerError> {
        config.validate()?;
        let mut triangulator = Self {
            config,
            points: Vec::new(),
            triangles: Vec::new(),
        };
        triangulator.rebuild();
        Ok(triangulator)
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &TriangulatorConfig {
        &self.config
    }

    /// Appends a sample and rebuilds the mesh.
    ///
    /// Duplicate samples are accepted. A sample outside the super-triangle is
    /// stored but cannot appear in the mesh; use [`Triangulator::try_add_point`]
    /// to refuse it instead.
    pub fn add_point(&mut self, x: i32, y: i32) {
        self.points.push(Point::new(x, y));
        self.rebuild();
    }

    /// Appends a sample only if it lies strictly inside the super-triangle.
    pub fn try_add_point(&mut self, x: i32, y: i32) -> Result<(), BowyerError> {
        if !self.config.encloses(Point::new(x, y)) {
            tracing::warn!(x, y, "sample outside super-triangle rejected");
            return Err(BowyerError::OutsideSuperTriangle { x, y });
        }
        self.add_point(x, y);
        Ok(())
    }

    /// Removes every sample and rebuilds, leaving only the super-triangle.
    pub fn clear(&mut self) {
        self.points.clear();
        self.rebuild();
    }

    /// Applies one change to the sample set.
    ///
    /// Samples outside the super-triangle are rejected, leaving the state untouched.
    pub fn apply(&mut self, command: Command) -> Result<(), BowyerError> {
        match command {
            Command::AddPoint(p) => self.try_add_point(p.x, p.y),
            Command::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// The accumulated samples, in the sorted order of the last rebuild.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The current mesh.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Triangles whose vertices are all samples, without any super-triangle corner.
    pub fn interior_triangles(&self) -> impl Iterator<Item = &Triangle> + '_ {
        let corners = self.config.super_triangle;
        self.triangles
            .iter()
            .filter(move |t| !corners.iter().any(|&c| t.contains_vertex(c)))
    }

    /// Voronoi edges of the current mesh, recomputed on every call.
    pub fn voronoi_edges(&self) -> Vec<Segment2<f64>> {
        voronoi_edges(&self.triangles, self.config.epsilon)
    }

    /// Circumcircles of every non-degenerate triangle in the mesh.
    pub fn circumcircles(&self) -> Vec<Circumcircle<f64>> {
        self.triangles
            .iter()
            .filter_map(|t| triangle_circumcircle(t, self.config.epsilon))
            .collect()
    }

    /// Counts of samples, triangles and Voronoi edges.
    pub fn stats(&self) -> Stats {
        Stats {
            points: self.points.len(),
            triangles: self.triangles.len(),
            interior_triangles: self.interior_triangles().count(),
            voronoi_edges: self.voronoi_edges().len(),
        }
    }

    fn rebuild(&mut self) {
        self.points.sort();
        self.triangles = triangulate(&self.points, &self.config);
    }
}

/// Runs a full Bowyer-Watson pass over `points` in the given order.
///
/// `points` is expected to be sorted already; [`Triangulator`] takes care of that.
pub fn triangulate(points: &[Point], config: &TriangulatorConfig) -> Vec<Triangle> {
    let eps = config.epsilon;
    let mut triangles = vec![config.seed_triangle()];
    let mut degenerate_tests = 0usize;

    for &p in points {
        let mut cavity_edges: Vec<Edge> = Vec::new();

        let (cavity, kept): (Vec<Triangle>, Vec<Triangle>) =
            triangles.into_iter().partition(|t| match triangle_circle_test(p, t, eps) {
                CircleTest::Inside(_) => true,
                CircleTest::Outside(_) => false,
                CircleTest::Degenerate => {
                    degenerate_tests += 1;
                    false
                }
            });
        triangles = kept;

        for t in &cavity {
            cavity_edges.extend_from_slice(&t.edges());
        }

        let boundary = cancel_shared_edges(cavity_edges);

        tracing::trace!(
            point = %p,
            cavity = cavity.len(),
            boundary = boundary.len(),
            "inserted point"
        );

        triangles.extend(boundary.into_iter().map(|e| Triangle::new(e.p1, e.p2, p)));
    }

    if config.boundary == BoundaryPolicy::Strip {
        let corners = config.super_triangle;
        triangles.retain(|t| !corners.iter().any(|&c| t.contains_vertex(c)));
    }

    if degenerate_tests > 0 {
        tracing::debug!(degenerate_tests, "collinear triangles skipped during rebuild");
    }
    tracing::debug!(
        points = points.len(),
        triangles = triangles.len(),
        "rebuilt triangulation"
    );

    triangles
}

/// Removes every pair of equal edges, keeping unpaired ones in order.
///
/// Edges shared by two cavity triangles are interior to the cavity; what
/// remains is its boundary. Cancellation is pairwise, so an edge occurring
/// three times leaves one copy behind.
fn cancel_shared_edges(edges: Vec<Edge>) -> Vec<Edge> {
    let mut boundary: Vec<Edge> = Vec::with_capacity(edges.len());
    for edge in edges {
        match boundary.iter().position(|e| *e == edge) {
            Some(i) => {
                boundary.remove(i);
            }
            None => boundary.push(edge),
        }
    }
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SUPER_TRIANGLE;
    use crate::primitives::Point2;
    use std::collections::BTreeSet;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn vertex_sets(triangles: &[Triangle]) -> BTreeSet<[Point; 3]> {
        triangles.iter().map(Triangle::sorted_vertices).collect()
    }

    fn assert_delaunay(tri: &Triangulator) {
        for t in tri.interior_triangles() {
            let circle = triangle_circumcircle(t, 1e-4).unwrap();
            for &q in tri.points() {
                if t.contains_vertex(q) {
                    continue;
                }
                let qf: Point2<f64> = q.to_float();
                // Strictly inside, beyond the boundary slack.
                assert!(
                    qf.distance_squared(circle.center) - circle.radius_squared > -1e-4,
                    "{} inside circumcircle of {:?}",
                    q,
                    t
                );
            }
        }
    }

    #[test]
    fn test_new_is_super_triangle() {
        let tri = Triangulator::new();
        assert_eq!(tri.triangles().len(), 1);
        assert!(tri.triangles()[0].same_vertices(&TriangulatorConfig::default().seed_triangle()));
        assert!(tri.points().is_empty());
    }

    #[test]
    fn test_single_point_fans_into_three() {
        let mut tri = Triangulator::new();
        tri.add_point(400, 300);

        let seed = TriangulatorConfig::default().seed_triangle();
        let triangles = tri.triangles();
        assert_eq!(triangles.len(), 3);
        assert!(!triangles.iter().any(|t| t.same_vertices(&seed)));

        for t in triangles {
            assert!(t.contains_vertex(p(400, 300)));
            let shared = seed.edges().iter().filter(|e| t.edges().contains(*e)).count();
            assert_eq!(shared, 1);
        }
    }

    #[test]
    fn test_end_to_end_three_points() {
        let mut tri = Triangulator::new();
        tri.add_point(100, 100);
        tri.add_point(300, 100);
        tri.add_point(200, 300);

        assert_eq!(tri.points(), &[p(100, 100), p(200, 300), p(300, 100)]);

        let inner = Triangle::new(p(100, 100), p(200, 300), p(300, 100));
        let triangles = tri.triangles();
        assert_eq!(triangles.iter().filter(|t| t.same_vertices(&inner)).count(), 1);

        // Euler: 3 samples + 3 corners in general position give 2n + 1 faces.
        assert_eq!(triangles.len(), 7);
        for corner in DEFAULT_SUPER_TRIANGLE {
            assert!(triangles.iter().any(|t| t.contains_vertex(corner)));
        }
        assert_eq!(tri.interior_triangles().count(), 1);
    }

    #[test]
    fn test_clear_resets() {
        let mut tri = Triangulator::new();
        tri.add_point(10, 10);
        tri.add_point(20, 40);
        tri.clear();
        assert!(tri.points().is_empty());
        assert_eq!(tri.triangles().len(), 1);
    }

    #[test]
    fn test_apply_commands() {
        let mut tri = Triangulator::new();
        tri.apply(Command::AddPoint(p(5, 5))).unwrap();
        tri.apply(Command::AddPoint(p(50, 5))).unwrap();
        assert_eq!(tri.points().len(), 2);
        tri.apply(Command::Clear).unwrap();
        assert!(tri.points().is_empty());
    }

    #[test]
    fn test_far_corner_of_working_square_is_meshed() {
        let mut tri = Triangulator::new();
        for (x, y) in [(100, 100), (1400, 1000), (1800, 1800), (2000, 0), (0, 2000)] {
            tri.try_add_point(x, y).unwrap();
        }
        for &q in tri.points() {
            assert!(tri.triangles().iter().any(|t| t.contains_vertex(q)), "{} missing", q);
        }
        // 5 samples + 3 corners, all samples inside: 2 * 5 + 1 faces.
        assert_eq!(tri.triangles().len(), 11);
        assert_delaunay(&tri);
    }

    #[test]
    fn test_outside_sample_rejected() {
        let mut tri = Triangulator::new();
        tri.add_point(100, 100);
        let before = tri.triangles().to_vec();

        let err = tri.try_add_point(20000, 100).unwrap_err();
        assert_eq!(err, BowyerError::OutsideSuperTriangle { x: 20000, y: 100 });
        assert!(tri.apply(Command::AddPoint(p(-3000, -3000))).is_err());
        assert_eq!(tri.points(), &[p(100, 100)]);
        assert_eq!(tri.triangles(), before.as_slice());
    }

    #[test]
    fn test_stats() {
        let mut tri = Triangulator::new();
        tri.add_point(100, 100);
        tri.add_point(300, 100);
        tri.add_point(200, 300);
        let stats = tri.stats();
        assert_eq!(
            stats,
            Stats {
                points: 3,
                triangles: 7,
                interior_triangles: 1,
                voronoi_edges: tri.voronoi_edges().len(),
            }
        );
        assert!(stats.to_string().starts_with("points: 3\ntriangles: 7\n"));
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let input = [(120, 40), (300, 310), (50, 220), (410, 90), (230, 180), (330, 400)];
        let mut first = Triangulator::new();
        let mut second = Triangulator::new();
        for &(x, y) in &input {
            first.add_point(x, y);
        }
        for &(x, y) in input.iter().rev() {
            second.add_point(x, y);
        }
        assert_eq!(vertex_sets(first.triangles()), vertex_sets(second.triangles()));
        assert_eq!(first.triangles(), second.triangles());
    }

    #[test]
    fn test_square_with_center() {
        let mut tri = Triangulator::new();
        for (x, y) in [(100, 100), (300, 100), (300, 300), (100, 300), (200, 200)] {
            tri.add_point(x, y);
        }
        assert_eq!(tri.interior_triangles().count(), 4);
        for t in tri.interior_triangles() {
            assert!(t.contains_vertex(p(200, 200)));
        }
        assert_delaunay(&tri);
    }

    #[test]
    fn test_no_duplicate_triangles() {
        let mut tri = Triangulator::new();
        for (x, y) in [(80, 90), (420, 130), (260, 410), (150, 300), (330, 260), (200, 150)] {
            tri.add_point(x, y);
        }
        let sets = vertex_sets(tri.triangles());
        assert_eq!(sets.len(), tri.triangles().len());
        assert_delaunay(&tri);
    }

    #[test]
    fn test_vertices_come_from_samples_or_corners() {
        let mut tri = Triangulator::new();
        for (x, y) in [(10, 700), (640, 20), (333, 333), (500, 500)] {
            tri.add_point(x, y);
        }
        for t in tri.triangles() {
            for v in t.vertices() {
                assert!(tri.points().contains(&v) || DEFAULT_SUPER_TRIANGLE.contains(&v));
            }
        }
    }

    #[test]
    fn test_duplicate_points_accepted() {
        let mut tri = Triangulator::new();
        tri.add_point(200, 200);
        tri.add_point(200, 200);
        tri.add_point(400, 250);
        assert_eq!(tri.points().len(), 3);
        assert!(!tri.triangles().is_empty());
    }

    #[test]
    fn test_collinear_samples_do_not_panic() {
        let mut tri = Triangulator::new();
        for x in [100, 200, 300, 400] {
            tri.add_point(x, 250);
        }
        assert!(!tri.triangles().is_empty());
        assert_eq!(tri.interior_triangles().count(), 0);
    }

    #[test]
    fn test_strip_policy_removes_corner_triangles() {
        let config = TriangulatorConfig::default().with_boundary(BoundaryPolicy::Strip);
        let mut tri = Triangulator::with_config(config).unwrap();
        assert!(tri.triangles().is_empty());

        tri.add_point(100, 100);
        tri.add_point(300, 100);
        tri.add_point(200, 300);
        assert_eq!(tri.triangles().len(), 1);
        assert!(tri.voronoi_edges().is_empty());
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = TriangulatorConfig::default().with_epsilon(-1.0);
        assert!(Triangulator::with_config(config).is_err());
    }

    #[test]
    fn test_circumcircles_cover_every_triangle() {
        let mut tri = Triangulator::new();
        tri.add_point(150, 150);
        tri.add_point(350, 200);
        assert_eq!(tri.circumcircles().len(), tri.triangles().len());
    }

    #[test]
    fn test_cancel_shared_edges() {
        let a = p(0, 0);
        let b = p(1, 0);
        let c = p(0, 1);
        let d = p(1, 1);
        let edges = vec![
            Edge::new(a, b),
            Edge::new(b, d),
            Edge::new(d, a),
            Edge::new(a, d),
            Edge::new(d, c),
            Edge::new(c, a),
        ];
        let boundary = cancel_shared_edges(edges);
        assert_eq!(
            boundary,
            vec![Edge::new(a, b), Edge::new(b, d), Edge::new(d, c), Edge::new(c, a)]
        );
    }

    #[test]
    fn test_cancel_shared_edges_is_pairwise() {
        let e = Edge::new(p(0, 0), p(3, 3));
        let flipped = Edge::new(p(3, 3), p(0, 0));
        assert_eq!(cancel_shared_edges(vec![e, flipped, e]).len(), 1);
        assert!(cancel_shared_edges(vec![e, e, e, e]).is_empty());
    }
}
