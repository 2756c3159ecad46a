#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `kornia-tensor` is a small strided tensor library used to build and compare test
//! fixtures for computer vision code. Storage is reference counted, so clones and
//! broadcasts share memory, and every operation reads tensors in logical order so
//! permuted, narrowed and broadcast layouts behave like owned ones.
//!
//! # Architecture
//!
//! - **Tensor**: owned handle with shape and stride information
//! - **TensorStorage**: Arc-shared buffer with copy-on-write mutation
//! - **TensorView**: borrowed view with its own shape, strides and offset
//!
//! # Quick Start
//!
//! ```rust
//! use kornia_tensor::Tensor;
//!
//! // Create a 2x3 tensor from a vector
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let tensor = Tensor::<f32, 2>::from_shape_vec([2, 3], data).unwrap();
//!
//! assert_eq!(tensor.get([0, 0]), Some(&1.0));
//! assert_eq!(tensor.get([1, 2]), Some(&6.0));
//!
//! // Reshape to a different shape
//! let reshaped = tensor.reshape([3, 2]).unwrap();
//! assert_eq!(reshaped.shape, [3, 2]);
//! ```
//!
//! Broadcasting a matrix over a batch dimension without copying it:
//!
//! ```rust
//! use kornia_tensor::Tensor;
//!
//! let identity = Tensor::<f32, 2>::from_shape_fn([3, 3], |[i, j]| {
//!     if i == j { 1.0 } else { 0.0 }
//! });
//! let batch = identity.expand([4, 3, 3]).unwrap();
//! assert_eq!(batch.strides, [0, 3, 1]);
//! assert_eq!(batch.get([3, 2, 2]), Some(&1.0));
//! ```

/// Element-wise arithmetic between tensors.
pub mod ops;

/// Storage module containing the reference-counted memory buffer.
///
/// This module provides [`storage::TensorStorage`] which owns the data of one or
/// more tensors.
pub mod storage;

/// Tensor module containing the main tensor implementation and error types.
///
/// This module provides the core [`tensor::Tensor`] struct and related functionality.
pub mod tensor;

/// View module containing non-owning tensor view implementations.
///
/// This module provides [`view::TensorView`] for creating efficient, zero-copy views
/// into existing tensor data.
pub mod view;

pub(crate) use crate::tensor::get_strides_from_shape;
pub use crate::ops::{add, div, mul, sub};
pub use crate::tensor::{Tensor, TensorError};
pub use crate::view::TensorView;

/// Type alias for a 1-dimensional tensor.
pub type Tensor1<T> = Tensor<T, 1>;

/// Type alias for a 2-dimensional tensor.
pub type Tensor2<T> = Tensor<T, 2>;

/// Type alias for a 3-dimensional tensor.
pub type Tensor3<T> = Tensor<T, 3>;

/// Type alias for a 4-dimensional tensor.
pub type Tensor4<T> = Tensor<T, 4>;
