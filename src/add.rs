use std::ops::AddAssign;

use crate::error::TensorError;
use crate::shape::broadcast_source_index;
use crate::tensor::Tensor4D;

impl<T: Copy + AddAssign> Tensor4D<T> {
    /// Adds `other` into `self` element-wise, broadcasting every axis where
    /// `other` has extent 1.
    ///
    /// Broadcasting is one-directional: `self` never expands to match `other`.
    /// All axes are checked before the first write, so on error `self` is
    /// unchanged.
    pub fn try_add_assign(&mut self, other: &Tensor4D<T>) -> Result<&mut Self, TensorError> {
        let this_shape = *self.shape();
        let other_shape = *other.shape();
        if let Err(e) = this_shape.check_broadcast_from(&other_shape) {
            log::debug!("rejected accumulation: {}", e);
            return Err(e);
        }
        log::trace!("accumulating {} into {}", other_shape, this_shape);

        let src = other.data();
        if this_shape == other_shape {
            for (dst, &s) in self.data_mut().iter_mut().zip(src) {
                *dst += s;
            }
        } else {
            for (flat, dst) in self.data_mut().iter_mut().enumerate() {
                *dst += src[broadcast_source_index(flat, &this_shape, &other_shape)];
            }
        }
        Ok(self)
    }
}

/// `this += &other`. Panics on incompatible shapes, leaving `this` untouched;
/// use [`Tensor4D::try_add_assign`] to handle the error instead.
impl<T: Copy + AddAssign> AddAssign<&Tensor4D<T>> for Tensor4D<T> {
    fn add_assign(&mut self, rhs: &Tensor4D<T>) {
        if let Err(e) = self.try_add_assign(rhs) {
            panic!("{}", e);
        }
    }
}
