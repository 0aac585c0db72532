use std::ops::AddAssign;

use rayon::prelude::*;

use crate::error::TensorError;
use crate::shape::broadcast_source_index;
use crate::tensor::Tensor4D;

impl<T> Tensor4D<T>
where
    T: Copy + AddAssign + Send + Sync,
{
    /// Same contract as [`Tensor4D::try_add_assign`], with positions spread
    /// over the rayon pool. Each position is written by exactly one task.
    pub fn par_add_assign(&mut self, other: &Tensor4D<T>) -> Result<&mut Self, TensorError> {
        let this_shape = *self.shape();
        let other_shape = *other.shape();
        if let Err(e) = this_shape.check_broadcast_from(&other_shape) {
            log::debug!("rejected parallel accumulation: {}", e);
            return Err(e);
        }
        log::trace!("parallel accumulation of {} into {}", other_shape, this_shape);

        let src = other.data();
        self.data_mut()
            .par_iter_mut()
            .enumerate()
            .for_each(|(flat, dst)| {
                *dst += src[broadcast_source_index(flat, &this_shape, &other_shape)];
            });
        Ok(self)
    }
}
