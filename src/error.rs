//! Error types for bowyer operations.

use thiserror::Error;

/// Errors raised at the crate's configuration and input surfaces.
///
/// Geometric degeneracies inside a rebuild are never errors; see
/// [`CircleTest::Degenerate`](crate::triangulation::CircleTest::Degenerate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BowyerError {
    /// The configured super-triangle corners are collinear.
    #[error("degenerate super-triangle: corners are collinear")]
    DegenerateSuperTriangle,

    /// Tolerance must be finite and strictly positive.
    #[error("invalid tolerance {value}: must be finite and positive")]
    InvalidTolerance {
        /// The rejected value.
        value: f64,
    },

    /// A sample lies on or outside the super-triangle and would be lost.
    #[error("point ({x}, {y}) is outside the super-triangle")]
    OutsideSuperTriangle {
        /// Sample x-coordinate.
        x: i32,
        /// Sample y-coordinate.
        y: i32,
    },

    /// A command script line could not be parsed.
    #[error("line {line}: {reason}")]
    InvalidCommand {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The input contained no commands.
    #[error("input contains no commands")]
    EmptyInput,
}
