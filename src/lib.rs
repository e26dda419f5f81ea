//! bowyer - Delaunay triangulation and Voronoi dual for growing point sets
//!
//! Integer samples are accumulated by a [`Triangulator`], which rebuilds a
//! Bowyer-Watson triangulation from scratch on every change. The Voronoi dual
//! is derived from the mesh on demand.

pub mod config;
pub mod error;
pub mod io;
pub mod primitives;
pub mod triangulation;

pub use config::{BoundaryPolicy, TriangulatorConfig};
pub use error::BowyerError;
pub use primitives::{Edge, Point, Point2, Segment2, Triangle, Vec2};
pub use triangulation::{CircleTest, Circumcircle, Command, Triangulator};
