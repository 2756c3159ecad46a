use kornia_tensor::{Tensor, TensorError};
use kornia_tensor_ops::ops;
use num_traits::Float;

use crate::error::TestingError;

/// Default per-element tolerance used by [`check_equal_tensor`].
pub const DEFAULT_EQUAL_EPS: f64 = 1e-4;

/// Checks whether two tensors are approximately equal.
///
/// The tensors are equal when `||a - b||_2 <= numel * eps`. The tolerance is
/// scaled by the element count, not its square root, so large tensors are
/// compared loosely.
///
/// # Arguments
///
/// * `a` - The first tensor.
/// * `b` - The second tensor, with the same shape as `a`.
/// * `eps` - Per-element tolerance, [`DEFAULT_EQUAL_EPS`] is the usual choice. It is
///   converted to the element type before the comparison.
///
/// # Errors
///
/// Returns [`TestingError::Tensor`] if the shapes differ.
///
/// # Example
///
/// ```
/// use kornia_tensor::Tensor1;
/// use kornia_testing::{check_equal_tensor, DEFAULT_EQUAL_EPS};
///
/// let a = Tensor1::<f64>::from_shape_vec([2], vec![1.0, 2.0]).unwrap();
/// let b = Tensor1::<f64>::from_shape_vec([2], vec![1.0, 2.0001]).unwrap();
/// assert!(check_equal_tensor(&a, &b, DEFAULT_EQUAL_EPS).unwrap());
/// assert!(!check_equal_tensor(&a, &b, 1e-6).unwrap());
/// ```
pub fn check_equal_tensor<T, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<T, N>,
    eps: f64,
) -> Result<bool, TestingError>
where
    T: Float,
{
    let error = ops::l2_norm(&kornia_tensor::sub(a, b)?);
    let numel =
        <T as num_traits::NumCast>::from(a.numel()).ok_or_else(|| TestingError::InvalidArgument {
            name: "a",
            reason: format!("{} elements do not fit the element type", a.numel()),
        })?;
    let eps = <T as num_traits::NumCast>::from(eps).ok_or_else(|| TestingError::InvalidArgument {
        name: "eps",
        reason: format!("{} does not fit the element type", eps),
    })?;

    Ok(error <= numel * eps)
}

/// Checks whether two slices are approximately equal.
///
/// The slices are equal when `||a - b||_2 <= len * f32::EPSILON`. The machine
/// epsilon of `f32` is used regardless of `T`, which makes this a strict check
/// intended for data that went through the same computation.
///
/// # Errors
///
/// Returns [`TestingError::Tensor`] if the lengths differ.
///
/// # Example
///
/// ```
/// use kornia_testing::check_equal_slice;
///
/// assert!(check_equal_slice(&[0.5f32, 1.0], &[0.5, 1.0]).unwrap());
/// assert!(!check_equal_slice(&[0.5f64, 1.0], &[0.5, 1.001]).unwrap());
/// ```
pub fn check_equal_slice<T>(a: &[T], b: &[T]) -> Result<bool, TestingError>
where
    T: Float + From<f32>,
{
    if a.len() != b.len() {
        return Err(TensorError::dimension_mismatch(
            "slices must have the same length",
            &[a.len()],
            &[b.len()],
        )
        .into());
    }

    let error = a
        .iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + (x - y) * (x - y))
        .sqrt();
    let numel =
        <T as num_traits::NumCast>::from(a.len()).ok_or_else(|| TestingError::InvalidArgument {
            name: "a",
            reason: format!("{} elements do not fit the element type", a.len()),
        })?;

    Ok(error <= numel * <T as From<f32>>::from(f32::EPSILON))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kornia_tensor::{Tensor2, Tensor3};

    use crate::homography::create_eye_batch;

    #[test]
    fn test_check_equal_tensor_reflexive() -> Result<(), TestingError> {
        let a = Tensor3::<f32>::from_shape_fn([2, 3, 3], |[b, i, j]| (b * 9 + i * 3 + j) as f32);
        assert!(check_equal_tensor(&a, &a, 0.0)?);
        assert!(check_equal_tensor(&a, &a.clone(), 1e-4)?);
        Ok(())
    }

    #[test]
    fn test_check_equal_tensor_scaled_tolerance() -> Result<(), TestingError> {
        let a = Tensor2::<f64>::zeros([10, 10]);
        // a single deviation of 0.005 is within 100 * 1e-4 = 0.01
        let b = Tensor2::<f64>::from_shape_fn([10, 10], |[i, j]| {
            if i == 0 && j == 0 {
                0.005
            } else {
                0.0
            }
        });
        assert!(check_equal_tensor(&a, &b, DEFAULT_EQUAL_EPS)?);

        let c = Tensor2::<f64>::from_shape_val([10, 10], 0.01);
        assert!(!check_equal_tensor(&a, &c, DEFAULT_EQUAL_EPS)?);
        Ok(())
    }

    #[test]
    fn test_check_equal_tensor_broadcast() -> Result<(), TestingError> {
        let eye = create_eye_batch::<f32>(3, 3)?;
        assert!(check_equal_tensor(&eye, &eye.to_standard_layout(), 0.0)?);
        Ok(())
    }

    #[test]
    fn test_check_equal_tensor_shape_mismatch() {
        let a = Tensor2::<f32>::zeros([2, 3]);
        let b = Tensor2::<f32>::zeros([3, 2]);
        assert!(matches!(
            check_equal_tensor(&a, &b, 1e-4),
            Err(TestingError::Tensor(TensorError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn test_check_equal_slice() -> Result<(), TestingError> {
        let a = [1.0f32, -2.0, 3.5];
        assert!(check_equal_slice(&a, &a)?);
        assert!(check_equal_slice::<f64>(&[], &[])?);
        assert!(!check_equal_slice(&a, &[1.0, -2.0, 3.6])?);
        Ok(())
    }

    #[test]
    fn test_check_equal_slice_uses_f32_epsilon() -> Result<(), TestingError> {
        // tolerance is 2 * f32::EPSILON, about 2.4e-7, even for f64 data
        let a = [1.0f64, 2.0];
        assert!(check_equal_slice(&a, &[1.0 + 1e-7, 2.0])?);
        assert!(!check_equal_slice(&a, &[1.0 + 3e-7, 2.0])?);

        // the same deviation passes once the slice is long enough
        let long = [0.0f64; 4];
        assert!(check_equal_slice(&long, &[3e-7, 0.0, 0.0, 0.0])?);
        Ok(())
    }

    #[test]
    fn test_check_equal_tensor_default_eps_for_f32() -> Result<(), TestingError> {
        let a = Tensor2::<f32>::zeros([2, 2]);
        let b = Tensor2::<f32>::from_shape_val([2, 2], 1e-4);
        assert!(check_equal_tensor(&a, &b, DEFAULT_EQUAL_EPS)?);
        assert!(!check_equal_tensor(&a, &b, 1e-5)?);
        Ok(())
    }

    #[test]
    fn test_check_equal_slice_length_mismatch() {
        assert!(matches!(
            check_equal_slice(&[1.0f32, 2.0], &[1.0]),
            Err(TestingError::Tensor(_))
        ));
    }
}
