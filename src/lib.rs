//! # tensor4d - fixed-rank tensors with broadcasting accumulation
//!
//! [`Tensor4D`] owns a row-major buffer described by a [`Shape4`]. Its only
//! mutation is in-place accumulation, where the right-hand operand may use
//! extent 1 on any axis to broadcast along it.
//!
//! ## Example
//!
//! ```
//! use tensor4d::prelude::*;
//!
//! let mut a = Tensor4D::new([1, 2, 3, 4], &[1.0f32; 24]).unwrap();
//! let b = Tensor4D::new([1, 2, 3, 1], &[6.0, 5.0, 4.0, 3.0, 2.0, 1.0]).unwrap();
//! a += &b;
//! assert_eq!(a.get([0, 1, 2, 3]), Some(&2.0));
//! ```

pub mod add;
pub mod error;
#[cfg(feature = "parallel")]
pub mod par_add;
pub mod shape;
pub mod tensor;

pub use error::TensorError;
pub use shape::{broadcast_source_index, Shape4, RANK};
pub use tensor::Tensor4D;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::TensorError;
    pub use crate::shape::{broadcast_source_index, Shape4};
    pub use crate::tensor::Tensor4D;
}
