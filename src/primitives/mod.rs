//! Geometric value types: integer samples and floating-point derived positions.

mod edge;
mod point;
mod point2;
mod segment2;
mod triangle;
mod vec2;

pub use edge::Edge;
pub use point::Point;
pub use point2::Point2;
pub use segment2::Segment2;
pub use triangle::Triangle;
pub use vec2::Vec2;
