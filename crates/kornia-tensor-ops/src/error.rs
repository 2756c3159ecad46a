use kornia_tensor::TensorError;
use thiserror::Error;

/// An error type for tensor operations.
#[derive(Error, Debug, PartialEq)]
pub enum TensorOpsError {
    /// Tensor error
    #[error("Error with the tensor: {0}")]
    TensorError(#[from] TensorError),

    /// The reduction is undefined for a tensor without elements.
    #[error("Cannot reduce an empty tensor with shape {0:?}")]
    EmptyTensor(Vec<usize>),
}
