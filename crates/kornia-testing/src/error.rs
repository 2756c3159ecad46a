use kornia_tensor::TensorError;
use kornia_tensor_ops::TensorOpsError;

/// An error type for the testing fixtures.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TestingError {
    /// Error raised by the tensor layer, e.g. a shape mismatch.
    #[error(transparent)]
    Tensor(#[from] TensorError),

    /// Error raised by a tensor reduction.
    #[error(transparent)]
    TensorOps(#[from] TensorOpsError),

    /// A fixture parameter is outside of its valid range.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The value handed to a gradient-check conversion is not a supported tensor.
    #[error("Expected a tensor, got a value of type `{type_name}`")]
    NotATensor {
        /// Fully qualified type name of the value received
        type_name: &'static str,
    },

    /// The trimmed comparison region of a patch contains no element.
    #[error("Patch region is empty after trimming: shape {shape:?}, trim ({h}, {w})")]
    EmptyRegion {
        /// Shape of the compared tensors
        shape: Vec<usize>,
        /// Height used to trim the rows
        h: usize,
        /// Width used to trim the columns
        w: usize,
    },

    /// The uniform distribution could not be built from the noise scale.
    #[error("Invalid noise range: {0}")]
    Sampling(#[from] rand::distr::uniform::Error),
}
