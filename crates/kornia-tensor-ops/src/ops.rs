use kornia_tensor::{Tensor, Tensor2, TensorView};
use num_traits::{Float, Zero};

use crate::error::TensorOpsError;

/// Compute the sum of all the elements visible through a view.
///
/// # Arguments
///
/// * `view` - The view to sum the elements of. Use [`Tensor::view`] for a whole tensor.
///
/// # Returns
///
/// The sum of the elements, or zero for an empty view.
///
/// # Example
///
/// ```
/// use kornia_tensor::Tensor;
/// use kornia_tensor_ops::ops::sum;
///
/// let t = Tensor::<u8, 2>::from_shape_slice([2, 3], &[1, 1, 1, 1, 1, 1]).unwrap();
/// assert_eq!(sum(&t.view()), 6);
/// ```
pub fn sum<T, const N: usize>(view: &TensorView<'_, T, N>) -> T
where
    T: Zero + Clone + std::ops::Add<Output = T>,
{
    view.iter().fold(T::zero(), |acc, v| acc + v.clone())
}

/// Compute the arithmetic mean of the elements visible through a view.
///
/// # Errors
///
/// Returns [`TensorOpsError::EmptyTensor`] if the view has no elements.
///
/// # Example
///
/// ```
/// use kornia_tensor::Tensor;
/// use kornia_tensor_ops::ops::mean;
///
/// let t = Tensor::<f32, 1>::from_shape_slice([4], &[1.0, 2.0, 3.0, 6.0]).unwrap();
/// assert_eq!(mean(&t.view()).unwrap(), 3.0);
/// ```
pub fn mean<T, const N: usize>(view: &TensorView<'_, T, N>) -> Result<T, TensorOpsError>
where
    T: Float,
{
    let numel = view.numel();
    let count = match <T as num_traits::NumCast>::from(numel) {
        Some(count) if numel > 0 => count,
        _ => return Err(TensorOpsError::EmptyTensor(view.shape.to_vec())),
    };
    Ok(sum(view) / count)
}

/// Compute the element-wise absolute value of a tensor.
pub fn abs<T, const N: usize>(tensor: &Tensor<T, N>) -> Tensor<T, N>
where
    T: Float,
{
    tensor.map(|x| x.abs())
}

/// Raise every element of the tensor to an integer power.
///
/// # Arguments
///
/// * `n` - The power to raise the data to.
pub fn powi<T, const N: usize>(tensor: &Tensor<T, N>, n: i32) -> Tensor<T, N>
where
    T: Float,
{
    tensor.map(|x| x.powi(n))
}

/// Raise every element of the tensor to a floating point power.
///
/// # Arguments
///
/// * `n` - The power to raise the data to.
pub fn powf<T, const N: usize>(tensor: &Tensor<T, N>, n: T) -> Tensor<T, N>
where
    T: Float,
{
    tensor.map(|x| x.powf(n))
}

/// Compute the Frobenius (L2) norm of a tensor, `sqrt(sum(x^2))`.
///
/// # Example
///
/// ```
/// use kornia_tensor::Tensor;
/// use kornia_tensor_ops::ops::l2_norm;
///
/// let t = Tensor::<f64, 1>::from_shape_slice([2], &[3.0, 4.0]).unwrap();
/// assert_eq!(l2_norm(&t), 5.0);
/// ```
pub fn l2_norm<T, const N: usize>(tensor: &Tensor<T, N>) -> T
where
    T: Float,
{
    tensor
        .iter()
        .fold(T::zero(), |acc, &x| acc + x * x)
        .sqrt()
}

/// Compute the Kronecker product of two matrices.
///
/// For `a` of shape `[m, n]` and `b` of shape `[p, q]` the result has shape
/// `[m * p, n * q]` and block `(i, j)` equals `a[i, j] * b`.
///
/// # Example
///
/// ```
/// use kornia_tensor::Tensor;
/// use kornia_tensor_ops::ops::kron;
///
/// let a = Tensor::<u8, 2>::from_shape_slice([1, 2], &[1, 0]).unwrap();
/// let b = Tensor::<u8, 2>::from_shape_val([2, 2], 1);
/// let k = kron(&a, &b);
/// assert_eq!(k.shape, [2, 4]);
/// assert_eq!(k.as_slice(), &[1, 1, 0, 0, 1, 1, 0, 0]);
/// ```
pub fn kron<T>(a: &Tensor2<T>, b: &Tensor2<T>) -> Tensor2<T>
where
    T: Clone + std::ops::Mul<Output = T>,
{
    let [p, q] = b.shape;
    let shape = [a.shape[0] * p, a.shape[1] * q];
    Tensor2::from_shape_fn(shape, |[r, c]| {
        a.get_unchecked([r / p, c / q]).clone() * b.get_unchecked([r % p, c % q]).clone()
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use kornia_tensor::{Tensor, TensorError};

    use super::*;

    #[test]
    fn test_sum_view() -> Result<(), TensorError> {
        let t = Tensor::<i32, 2>::from_shape_fn([3, 3], |[i, j]| (i * 3 + j) as i32);
        assert_eq!(sum(&t.view()), 36);
        assert_eq!(sum(&t.narrow(0, 1, 1)?), 3 + 4 + 5);
        assert_eq!(sum(&t.narrow(1, 0, 0)?), 0);
        Ok(())
    }

    #[test]
    fn test_mean() -> Result<(), TensorOpsError> {
        let t = Tensor::<f64, 2>::from_shape_slice([2, 2], &[1.0, 2.0, 3.0, 4.0])?;
        assert_relative_eq!(mean(&t.view())?, 2.5);
        assert_relative_eq!(mean(&t.narrow(1, 1, 1)?)?, 3.0);
        Ok(())
    }

    #[test]
    fn test_mean_empty() -> Result<(), TensorOpsError> {
        let t = Tensor::<f32, 2>::zeros([2, 2]);
        let empty = t.narrow(0, 1, 0)?;
        assert_eq!(mean(&empty), Err(TensorOpsError::EmptyTensor(vec![0, 2])));
        Ok(())
    }

    #[test]
    fn test_abs_powi_powf() -> Result<(), TensorOpsError> {
        let t = Tensor::<f32, 1>::from_shape_slice([3], &[-2.0, 0.0, 3.0])?;
        assert_eq!(abs(&t).as_slice(), &[2.0, 0.0, 3.0]);
        assert_eq!(powi(&t, 2).as_slice(), &[4.0, 0.0, 9.0]);
        assert_eq!(powf(&abs(&t), 0.5).as_slice()[1], 0.0);
        Ok(())
    }

    #[test]
    fn test_l2_norm() -> Result<(), TensorOpsError> {
        let t = Tensor::<f32, 2>::from_shape_slice([2, 2], &[1.0, -1.0, 1.0, -1.0])?;
        assert_relative_eq!(l2_norm(&t), 2.0);
        assert_eq!(l2_norm(&Tensor::<f64, 3>::zeros([2, 3, 3])), 0.0);
        Ok(())
    }

    #[test]
    fn test_l2_norm_broadcast() -> Result<(), TensorOpsError> {
        let row = Tensor::<f64, 1>::from_shape_slice([2], &[3.0, 4.0])?;
        let rows = row.expand([4, 2])?;
        assert_relative_eq!(l2_norm(&rows), 10.0);
        Ok(())
    }

    #[test]
    fn test_kron_identity() -> Result<(), TensorOpsError> {
        let eye = Tensor2::<f32>::from_shape_slice([2, 2], &[1.0, 0.0, 0.0, 1.0])?;
        let block = Tensor2::<f32>::from_shape_slice([1, 2], &[2.0, 3.0])?;
        let k = kron(&eye, &block);
        assert_eq!(k.shape, [2, 4]);
        assert_eq!(k.as_slice(), &[2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 2.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_kron_empty_block() {
        let a = Tensor2::<f32>::from_shape_val([2, 2], 1.0);
        let b = Tensor2::<f32>::zeros([0, 3]);
        let k = kron(&a, &b);
        assert_eq!(k.shape, [0, 6]);
        assert_eq!(k.numel(), 0);
    }
}
