//! Rank-4 shapes, row-major strides and one-directional broadcasting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TensorError;

/// Number of axes of every tensor in this crate.
pub const RANK: usize = 4;

/// Extents of the four axes. Axis 3 is the innermost (fastest-varying).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape4([usize; RANK]);

impl Shape4 {
    pub const fn new(dims: [usize; RANK]) -> Self {
        Shape4(dims)
    }

    pub fn dims(&self) -> [usize; RANK] {
        self.0
    }

    /// Extent of `axis`. Panics if `axis >= 4`.
    pub fn dim(&self, axis: usize) -> usize {
        self.0[axis]
    }

    /// Total number of elements. Any zero extent makes the tensor empty.
    ///
    /// Saturates at `usize::MAX` for shapes no buffer can back; tensors are
    /// only ever built from shapes that pass [`Shape4::checked_numel`].
    pub fn numel(&self) -> usize {
        self.checked_numel().unwrap_or(usize::MAX)
    }

    /// Total number of elements, or `None` when the product overflows `usize`.
    pub fn checked_numel(&self) -> Option<usize> {
        self.0.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Row-major (C-contiguous) strides.
    pub fn contiguous_strides(&self) -> [usize; RANK] {
        let mut strides = [1usize; RANK];
        for i in (0..RANK - 1).rev() {
            strides[i] = strides[i + 1].saturating_mul(self.0[i + 1]);
        }
        strides
    }

    /// Per-axis indices of the flat position `flat`.
    ///
    /// Meaningful only for `flat < self.numel()`. An empty shape has no
    /// positions and maps everything to the zero index.
    pub fn unravel(&self, flat: usize) -> [usize; RANK] {
        let strides = self.contiguous_strides();
        let mut indices = [0usize; RANK];
        let mut rest = flat;
        for axis in 0..RANK {
            indices[axis] = rest.checked_div(strides[axis]).unwrap_or(0);
            rest = rest.checked_rem(strides[axis]).unwrap_or(0);
        }
        indices
    }

    /// Checks that `other` can be broadcast into `self`: on every axis the
    /// extents agree or `other` has extent 1.
    pub fn check_broadcast_from(&self, other: &Shape4) -> Result<(), TensorError> {
        match (0..RANK).find(|&axis| other.0[axis] != self.0[axis] && other.0[axis] != 1) {
            Some(axis) => Err(TensorError::ShapeIncompatible {
                axis,
                this: *self,
                other: *other,
            }),
            None => Ok(()),
        }
    }
}

/// Maps a flat position of a `dst`-shaped tensor to the flat position of the
/// element of a `src`-shaped tensor that is broadcast onto it.
///
/// Axes where `src` has extent 1 always read index 0; every other axis reads
/// the destination index unchanged. The offset is accumulated with `src`'s own
/// row-major strides. The shapes must already satisfy
/// [`Shape4::check_broadcast_from`] and `flat` must be below `dst.numel()`;
/// an empty `dst` yields 0.
pub fn broadcast_source_index(flat: usize, dst: &Shape4, src: &Shape4) -> usize {
    let indices = dst.unravel(flat);
    let mut offset = 0;
    for axis in 0..RANK {
        let extent = src.0[axis];
        let index = if extent == 1 { 0 } else { indices[axis] };
        offset = offset * extent + index;
    }
    offset
}

impl From<[usize; RANK]> for Shape4 {
    fn from(dims: [usize; RANK]) -> Self {
        Shape4(dims)
    }
}

impl fmt::Debug for Shape4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape4({:?})", self.0)
    }
}

impl fmt::Display for Shape4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
