use std::fmt;

use ndarray::{ArrayView4, IndexLonger};
use serde::{Deserialize, Serialize};

use crate::error::TensorError;
use crate::shape::{Shape4, RANK};

/// A rank-4 tensor that exclusively owns its row-major buffer.
///
/// The type is neither `Clone` nor `Copy`, and never hands out
/// mutable access to its buffer or shape. The only mutation is accumulation
/// (see [`Tensor4D::try_add_assign`]).
#[derive(Serialize, Deserialize)]
#[serde(try_from = "TensorRepr<T>")]
pub struct Tensor4D<T> {
    shape: Shape4,
    data: Vec<T>,
}

#[derive(Deserialize)]
struct TensorRepr<T> {
    shape: Shape4,
    data: Vec<T>,
}

impl<T: Copy> Tensor4D<T> {
    /// Copies the first `shape.numel()` elements of `source` into a freshly
    /// allocated buffer.
    ///
    /// Extents are not validated; a zero extent yields an empty tensor.
    pub fn new(shape: impl Into<Shape4>, source: &[T]) -> Result<Self, TensorError> {
        let shape = shape.into();
        let size = shape.checked_numel().ok_or(TensorError::ShapeOverflow(shape))?;
        if source.len() < size {
            return Err(TensorError::DataLength {
                expected: size,
                actual: source.len(),
            });
        }
        log::debug!("allocating tensor {} ({} elements)", shape, size);
        Ok(Tensor4D {
            shape,
            data: source[..size].to_vec(),
        })
    }
}

impl<T> Tensor4D<T> {
    /// Takes ownership of `data`, which must hold exactly `shape.numel()` elements.
    pub fn from_vec(shape: impl Into<Shape4>, data: Vec<T>) -> Result<Self, TensorError> {
        let shape = shape.into();
        let size = shape.checked_numel().ok_or(TensorError::ShapeOverflow(shape))?;
        if data.len() != size {
            return Err(TensorError::DataLength {
                expected: size,
                actual: data.len(),
            });
        }
        Ok(Tensor4D { shape, data })
    }

    pub fn shape(&self) -> &Shape4 {
        &self.shape
    }

    /// The flat row-major buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `indices`, or `None` when any index is out of range.
    pub fn get(&self, indices: [usize; RANK]) -> Option<&T> {
        let view = self.view().ok()?;
        IndexLonger::get(&view, indices)
    }

    /// Zero-copy `ndarray` view over the buffer.
    pub fn view(&self) -> Result<ArrayView4<'_, T>, TensorError> {
        ArrayView4::from_shape(self.shape.dims(), &self.data)
            .map_err(|e| TensorError::Layout(e.to_string()))
    }

    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> TryFrom<TensorRepr<T>> for Tensor4D<T> {
    type Error = TensorError;

    fn try_from(repr: TensorRepr<T>) -> Result<Self, Self::Error> {
        Tensor4D::from_vec(repr.shape, repr.data)
    }
}

impl<T: fmt::Debug> fmt::Debug for Tensor4D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor4D")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}
