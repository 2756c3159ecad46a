use std::any::Any;

use kornia_tensor::Tensor;
use num_traits::Float;

use crate::error::TestingError;

/// A tensor prepared for numeric gradient checking.
///
/// Finite-difference gradient checks need double precision to keep the numeric
/// error under the check tolerance, so the data is held in a floating point type
/// (`f64` unless requested otherwise) together with the gradient tracking flag
/// consumed by the checker.
#[derive(Debug, Clone, PartialEq)]
pub struct GradcheckVar<T, const N: usize> {
    tensor: Tensor<T, N>,
    requires_grad: bool,
}

impl<T, const N: usize> GradcheckVar<T, N> {
    /// The converted tensor.
    pub fn tensor(&self) -> &Tensor<T, N> {
        &self.tensor
    }

    /// Consumes the variable and returns the converted tensor.
    pub fn into_tensor(self) -> Tensor<T, N> {
        self.tensor
    }

    /// Whether gradients must be tracked for this variable.
    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    /// Sets the gradient tracking flag and returns the variable.
    pub fn with_requires_grad(mut self, requires_grad: bool) -> Self {
        self.requires_grad = requires_grad;
        self
    }

    /// Name of the element type, e.g. `"f64"`.
    pub fn dtype(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Converts a tensor into a double precision variable for gradient checking.
///
/// # Arguments
///
/// * `tensor` - The tensor to convert. Its element type must widen losslessly to `f64`.
/// * `requires_grad` - Whether the checker should track gradients (usually `true`).
///
/// # Example
///
/// ```
/// use kornia_tensor::Tensor2;
/// use kornia_testing::tensor_to_gradcheck_var;
///
/// let t = Tensor2::<f32>::from_shape_vec([1, 2], vec![0.5, 1.5]).unwrap();
/// let var = tensor_to_gradcheck_var(&t, true);
/// assert_eq!(var.dtype(), "f64");
/// assert!(var.requires_grad());
/// assert_eq!(var.tensor().as_slice(), &[0.5, 1.5]);
/// ```
pub fn tensor_to_gradcheck_var<T, const N: usize>(
    tensor: &Tensor<T, N>,
    requires_grad: bool,
) -> GradcheckVar<f64, N>
where
    T: Clone,
    f64: From<T>,
{
    tensor_to_gradcheck_var_as::<f64, T, N>(tensor, requires_grad)
}

/// Converts a tensor into a gradient-check variable of element type `U`.
///
/// Use this when the checker runs at a precision other than `f64`.
pub fn tensor_to_gradcheck_var_as<U, T, const N: usize>(
    tensor: &Tensor<T, N>,
    requires_grad: bool,
) -> GradcheckVar<U, N>
where
    U: Float + From<T>,
    T: Clone,
{
    log::debug!(
        "converting tensor {:?} from {} to {} (requires_grad: {})",
        tensor.shape,
        std::any::type_name::<T>(),
        std::any::type_name::<U>(),
        requires_grad
    );
    GradcheckVar {
        tensor: tensor.cast::<U>(),
        requires_grad,
    }
}

/// Converts an arbitrary value into a double precision gradient-check variable.
///
/// This is the dynamically typed entry point, for fixtures whose value type is
/// only known at runtime. Tensors of rank `N` with `f64`, `f32`, `i32`, `i16`,
/// `i8`, `u32`, `u16` or `u8` elements are accepted.
///
/// # Errors
///
/// Returns [`TestingError::NotATensor`] carrying the type name of `value` for
/// anything else, including tensors of another rank.
///
/// # Example
///
/// ```
/// use kornia_testing::{try_tensor_to_gradcheck_var, TestingError};
///
/// let err = try_tensor_to_gradcheck_var::<_, 2>(&vec![1.0f32, 2.0], true).unwrap_err();
/// assert!(matches!(err, TestingError::NotATensor { type_name } if type_name.contains("Vec")));
/// ```
pub fn try_tensor_to_gradcheck_var<V, const N: usize>(
    value: &V,
    requires_grad: bool,
) -> Result<GradcheckVar<f64, N>, TestingError>
where
    V: Any,
{
    let value = value as &dyn Any;

    macro_rules! convert {
        ($($ty:ty),+) => {
            $(
                if let Some(tensor) = value.downcast_ref::<Tensor<$ty, N>>() {
                    return Ok(tensor_to_gradcheck_var(tensor, requires_grad));
                }
            )+
        };
    }
    convert!(f64, f32, i32, i16, i8, u32, u16, u8);

    Err(TestingError::NotATensor {
        type_name: std::any::type_name::<V>(),
    })
}
