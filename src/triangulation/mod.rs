//! Delaunay triangulation of integer samples and its Voronoi dual.
//!
//! The mesh is rebuilt from the full sample set on every change using the
//! Bowyer-Watson algorithm; the Voronoi edges are derived from it on demand.

mod circumcircle;
mod triangulator;
mod voronoi;

pub use circumcircle::{
    circumcircle, circumcircle_with_tolerance, triangle_circle_test, triangle_circumcircle,
    CircleTest, Circumcircle,
};
pub use triangulator::{triangulate, Command, Stats, Triangulator};
pub use voronoi::voronoi_edges;
