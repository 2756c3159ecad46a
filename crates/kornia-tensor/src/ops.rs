//! Element-wise arithmetic between tensors.
//!
//! Every function reads its inputs in logical order, so broadcast tensors produced
//! by [`Tensor::expand`] can be combined with owned ones. The result is always a
//! freshly allocated standard-layout tensor.

use crate::tensor::{Tensor, TensorError};

/// Add two tensors element-wise.
///
/// # Errors
///
/// Returns [`TensorError::DimensionMismatch`] if the shapes differ.
///
/// # Example
///
/// ```
/// use kornia_tensor::Tensor1;
///
/// let a = Tensor1::<f32>::from_shape_vec([2], vec![1.0, 2.0]).unwrap();
/// let b = Tensor1::<f32>::from_shape_vec([2], vec![0.5, 0.5]).unwrap();
/// let c = kornia_tensor::add(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[1.5, 2.5]);
/// ```
pub fn add<T, const N: usize>(
    lhs: &Tensor<T, N>,
    rhs: &Tensor<T, N>,
) -> Result<Tensor<T, N>, TensorError>
where
    T: std::ops::Add<Output = T> + Clone,
{
    lhs.element_wise_op(rhs, |a, b| a.clone() + b.clone())
}

/// Subtract two tensors element-wise.
///
/// # Errors
///
/// Returns [`TensorError::DimensionMismatch`] if the shapes differ.
pub fn sub<T, const N: usize>(
    lhs: &Tensor<T, N>,
    rhs: &Tensor<T, N>,
) -> Result<Tensor<T, N>, TensorError>
where
    T: std::ops::Sub<Output = T> + Clone,
{
    lhs.element_wise_op(rhs, |a, b| a.clone() - b.clone())
}

/// Multiply two tensors element-wise.
///
/// # Errors
///
/// Returns [`TensorError::DimensionMismatch`] if the shapes differ.
pub fn mul<T, const N: usize>(
    lhs: &Tensor<T, N>,
    rhs: &Tensor<T, N>,
) -> Result<Tensor<T, N>, TensorError>
where
    T: std::ops::Mul<Output = T> + Clone,
{
    lhs.element_wise_op(rhs, |a, b| a.clone() * b.clone())
}

/// Divide two tensors element-wise.
///
/// # Errors
///
/// Returns [`TensorError::DimensionMismatch`] if the shapes differ.
pub fn div<T, const N: usize>(
    lhs: &Tensor<T, N>,
    rhs: &Tensor<T, N>,
) -> Result<Tensor<T, N>, TensorError>
where
    T: std::ops::Div<Output = T> + Clone,
{
    lhs.element_wise_op(rhs, |a, b| a.clone() / b.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tensor2, Tensor3};

    #[test]
    fn test_arithmetic() -> Result<(), TensorError> {
        let a = Tensor2::<f64>::from_shape_vec([2, 2], vec![1.0, 2.0, 3.0, 4.0])?;
        let b = Tensor2::<f64>::from_shape_vec([2, 2], vec![2.0, 2.0, 2.0, 2.0])?;

        assert_eq!(add(&a, &b)?.as_slice(), &[3.0, 4.0, 5.0, 6.0]);
        assert_eq!(sub(&a, &b)?.as_slice(), &[-1.0, 0.0, 1.0, 2.0]);
        assert_eq!(mul(&a, &b)?.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(div(&a, &b)?.as_slice(), &[0.5, 1.0, 1.5, 2.0]);
        Ok(())
    }

    #[test]
    fn test_add_to_broadcast_batch() -> Result<(), TensorError> {
        let eye = Tensor2::<f32>::from_shape_vec([2, 2], vec![1.0, 0.0, 0.0, 1.0])?;
        let batch = eye.expand([2, 2, 2])?;
        let noise = Tensor3::<f32>::from_shape_fn([2, 2, 2], |[b, _, _]| b as f32);

        let out = add(&batch, &noise)?;
        assert!(out.is_standard_layout());
        assert_eq!(
            out.as_slice(),
            &[1.0, 0.0, 0.0, 1.0, 2.0, 1.0, 1.0, 2.0]
        );
        // the shared identity is untouched
        assert_eq!(eye.as_slice(), &[1.0, 0.0, 0.0, 1.0]);
        Ok(())
    }
}
