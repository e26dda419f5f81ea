//! Voronoi edges derived from a Delaunay mesh.
//!
//! The Voronoi diagram is the dual of the Delaunay triangulation:
//! - Each triangle's circumcenter is a Voronoi vertex
//! - Each pair of triangles sharing an edge gives a Voronoi edge between
//!   their circumcenters
//!
//! Nothing is cached; the edges are derived from whatever triangle list is
//! passed in. Triangles touching the super-triangle corners take part like any
//! other, so the outermost edges run to far-away circumcenters unless those
//! triangles were stripped beforehand.
//!
//! # Example
//!
//! ```
//! use bowyer::triangulation::voronoi_edges;
//! use bowyer::{Point, Triangle};
//!
//! let a = Point::new(0, 0);
//! let b = Point::new(4, 0);
//! let c = Point::new(0, 4);
//! let d = Point::new(5, 5);
//!
//! let triangles = vec![Triangle::new(a, b, c), Triangle::new(b, d, c)];
//! let edges = voronoi_edges(&triangles, 1e-4);
//!
//! // One shared edge means one Voronoi edge.
//! assert_eq!(edges.len(), 1);
//! ```

use super::circumcircle::triangle_circumcircle;
use crate::primitives::{Edge, Point2, Segment2, Triangle};
use std::collections::{HashMap, HashSet};

/// Bit pattern of a point, with `-0.0` folded onto `0.0`.
fn point_bits(p: Point2<f64>) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

/// Hashable key for a segment, independent of its orientation.
fn segment_key(s: Segment2<f64>) -> ((u64, u64), (u64, u64)) {
    let a = point_bits(s.start);
    let b = point_bits(s.end);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Computes the Voronoi edges of a triangle mesh.
///
/// Two triangles are neighbours when they share exactly two vertices. For each
/// unordered pair of neighbours one segment joins their circumcenters. Segments
/// with the same endpoints, in either direction, are reported once. Triangles
/// without a circumcircle (collinear within `eps`) contribute nothing.
///
/// Output order follows the order of `triangles`.
pub fn voronoi_edges(triangles: &[Triangle], eps: f64) -> Vec<Segment2<f64>> {
    let centers: Vec<Option<Point2<f64>>> = triangles
        .iter()
        .map(|t| triangle_circumcircle(t, eps).map(|c| c.center))
        .collect();

    let mut edge_to_triangles: HashMap<Edge, Vec<usize>> = HashMap::new();
    let mut seen_pairs: HashSet<(usize, usize)> = HashSet::new();
    let mut seen_segments = HashSet::new();
    let mut segments = Vec::new();

    for (i, tri) in triangles.iter().enumerate() {
        for edge in tri.edges() {
            let neighbours = edge_to_triangles.entry(edge).or_default();

            for &j in neighbours.iter() {
                if j == i || !seen_pairs.insert((j, i)) {
                    continue;
                }
                if tri.shared_vertex_count(&triangles[j]) != 2 {
                    continue;
                }
                let (Some(from), Some(to)) = (centers[j], centers[i]) else {
                    continue;
                };
                let segment = Segment2::new(from, to);
                if seen_segments.insert(segment_key(segment)) {
                    segments.push(segment);
                }
            }

            neighbours.push(i);
        }
    }

    segments
}
