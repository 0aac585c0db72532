use thiserror::Error;

use crate::shape::Shape4;

/// Errors returned by tensor construction and accumulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// The right-hand operand cannot be broadcast into the left-hand one.
    #[error("incompatible shapes for broadcasting: axis {axis} of {other} cannot broadcast into {this}")]
    ShapeIncompatible {
        axis: usize,
        this: Shape4,
        other: Shape4,
    },

    /// The source data does not hold one element per position of the shape.
    #[error("expected {expected} elements for the shape, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// The product of the extents does not fit in `usize`.
    #[error("shape {0} has more elements than usize can address")]
    ShapeOverflow(Shape4),

    /// The buffer cannot be laid out as an `ndarray` view.
    #[error("invalid array layout: {0}")]
    Layout(String),
}
