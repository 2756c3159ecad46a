use kornia_tensor::Tensor;
use kornia_tensor_ops::ops;
use num_traits::Float;

use crate::error::TestingError;

/// Computes the error between two tensors as `sqrt(sum((x - y)^2))`.
///
/// Despite the name this is the L2 norm of the difference, not a mean: the
/// result grows with the number of elements.
///
/// # Errors
///
/// Returns [`TestingError::Tensor`] if the shapes differ.
///
/// # Example
///
/// ```
/// use kornia_tensor::Tensor1;
/// use kornia_testing::compute_mse;
///
/// let x = Tensor1::<f32>::from_shape_vec([2], vec![3.0, 0.0]).unwrap();
/// let y = Tensor1::<f32>::from_shape_vec([2], vec![0.0, 4.0]).unwrap();
/// assert_eq!(compute_mse(&x, &y).unwrap(), 5.0);
/// ```
pub fn compute_mse<T, const N: usize>(x: &Tensor<T, N>, y: &Tensor<T, N>) -> Result<T, TestingError>
where
    T: Float,
{
    let diff = kornia_tensor::sub(x, y)?;
    Ok(ops::l2_norm(&diff))
}

/// Computes the mean absolute error between two patches, ignoring their borders.
///
/// The last two dimensions are trimmed by a quarter of `h` (rows) and `w`
/// (columns) on each side before averaging `|x - y|`. The leading quarter is
/// `h / 4` and the trailing one is `ceil(h / 4)`; a zero `h` or `w` leaves an
/// empty region.
///
/// # Arguments
///
/// * `x` - The first patch, with at least two dimensions.
/// * `y` - The second patch, same shape as `x`.
/// * `h` - Height used to size the row border.
/// * `w` - Width used to size the column border.
///
/// # Errors
///
/// Returns [`TestingError::Tensor`] if the shapes differ,
/// [`TestingError::InvalidArgument`] if the tensors have fewer than two
/// dimensions, and [`TestingError::EmptyRegion`] if nothing is left after trimming.
///
/// # Example
///
/// ```
/// use kornia_tensor::Tensor2;
/// use kornia_testing::compute_patch_error;
///
/// let x = Tensor2::<f32>::zeros([4, 4]);
/// // only the border differs
/// let y = Tensor2::<f32>::from_shape_fn([4, 4], |[r, c]| {
///     if (1..3).contains(&r) && (1..3).contains(&c) { 0.0 } else { 9.0 }
/// });
/// assert_eq!(compute_patch_error(&x, &y, 4, 4).unwrap(), 0.0);
/// ```
pub fn compute_patch_error<T, const N: usize>(
    x: &Tensor<T, N>,
    y: &Tensor<T, N>,
    h: usize,
    w: usize,
) -> Result<T, TestingError>
where
    T: Float,
{
    if N < 2 {
        return Err(TestingError::InvalidArgument {
            name: "x",
            reason: format!("patches need at least two dimensions, got {}", N),
        });
    }

    let error = ops::abs(&kornia_tensor::sub(x, y)?);

    let (row_start, row_len) = trimmed_range(error.shape[N - 2], h);
    let (col_start, col_len) = trimmed_range(error.shape[N - 1], w);
    let interior = error
        .narrow(N - 2, row_start, row_len)?
        .narrow(N - 1, col_start, col_len)?;

    if interior.numel() == 0 {
        return Err(TestingError::EmptyRegion {
            shape: error.shape.to_vec(),
            h,
            w,
        });
    }

    Ok(ops::mean(&interior)?)
}

/// Start and length of `size // 4 .. -(-size // 4)` applied to a dimension of `dim` elements.
fn trimmed_range(dim: usize, size: usize) -> (usize, usize) {
    let start = (size / 4).min(dim);
    let tail = size.div_ceil(4);
    let stop = if tail == 0 { 0 } else { dim.saturating_sub(tail) };
    (start, stop.saturating_sub(start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kornia_tensor::{Tensor1, Tensor2, Tensor3};

    #[test]
    fn test_mse_identity() -> Result<(), TestingError> {
        let x = Tensor3::<f64>::from_shape_fn([2, 3, 4], |[b, r, c]| (b + r * c) as f64);
        assert_eq!(compute_mse(&x, &x)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_mse_is_l2_norm() -> Result<(), TestingError> {
        let x = Tensor2::<f32>::from_shape_val([2, 2], 1.0);
        let y = Tensor2::<f32>::zeros([2, 2]);
        // a true mean squared error would be 1.0
        assert_relative_eq!(compute_mse(&x, &y)?, 2.0);
        Ok(())
    }

    #[test]
    fn test_mse_shape_mismatch() {
        let x = Tensor2::<f32>::zeros([2, 2]);
        let y = Tensor2::<f32>::zeros([4, 1]);
        assert!(matches!(
            compute_mse(&x, &y),
            Err(TestingError::Tensor(_))
        ));
    }

    #[test]
    fn test_trimmed_range() {
        // python: list(range(dim))[size // 4 : -size // 4]
        assert_eq!(trimmed_range(8, 8), (2, 4));
        assert_eq!(trimmed_range(4, 4), (1, 2));
        assert_eq!(trimmed_range(5, 5), (1, 2));
        assert_eq!(trimmed_range(6, 2), (0, 5));
        assert_eq!(trimmed_range(6, 0), (0, 0));
        assert_eq!(trimmed_range(2, 16), (2, 0));
    }

    #[test]
    fn test_patch_error_identity() -> Result<(), TestingError> {
        let x = Tensor3::<f32>::from_shape_fn([3, 8, 8], |[c, r, k]| (c * 64 + r * 8 + k) as f32);
        assert_eq!(compute_patch_error(&x, &x, 8, 8)?, 0.0);
        assert_eq!(compute_patch_error(&x, &x, 3, 5)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_patch_error_interior_mean() -> Result<(), TestingError> {
        let x = Tensor2::<f32>::zeros([8, 8]);
        let y = Tensor2::<f32>::from_shape_fn([8, 8], |[r, c]| {
            if r < 2 || c < 2 {
                100.0
            } else if r == 2 && c == 2 {
                16.0
            } else {
                0.0
            }
        });
        // interior is rows/cols 2..6, 16 elements, a single non-zero
        assert_relative_eq!(compute_patch_error(&x, &y, 8, 8)?, 1.0);
        Ok(())
    }

    #[test]
    fn test_patch_error_batched() -> Result<(), TestingError> {
        let x = Tensor3::<f64>::zeros([2, 4, 4]);
        let y = Tensor3::<f64>::from_shape_fn([2, 4, 4], |[b, _, _]| if b == 0 { -1.0 } else { 3.0 });
        assert_relative_eq!(compute_patch_error(&x, &y, 4, 4)?, 2.0);
        Ok(())
    }

    #[test]
    fn test_patch_error_empty_region() {
        let x = Tensor2::<f32>::zeros([4, 4]);
        assert_eq!(
            compute_patch_error(&x, &x, 0, 4),
            Err(TestingError::EmptyRegion {
                shape: vec![4, 4],
                h: 0,
                w: 4
            })
        );
    }

    #[test]
    fn test_patch_error_rank_one() {
        let x = Tensor1::<f32>::zeros([4]);
        assert!(matches!(
            compute_patch_error(&x, &x, 4, 4),
            Err(TestingError::InvalidArgument { .. })
        ));
    }
}
