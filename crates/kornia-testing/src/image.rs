use kornia_tensor::Tensor2;
use kornia_tensor_ops::ops::kron;

use crate::error::TestingError;

/// Creates a synthetic checkerboard of shape `h x w` with `nw` tile pairs per side.
///
/// The board is built from a `2*nw x 2*nw` pattern of alternating ones and zeros,
/// starting with a one in the top-left corner, where every cell is expanded into a
/// `(h / (2*nw)) x (w / (2*nw))` block (a Kronecker product with a block of ones).
///
/// If `h` or `w` is not a multiple of `2*nw` the block size is floored and the
/// returned image is smaller than requested. A warning is logged in that case.
///
/// # Arguments
///
/// * `h` - The requested image height.
/// * `w` - The requested image width.
/// * `nw` - The number of black/white tile pairs along each side.
///
/// # Errors
///
/// Returns [`TestingError::InvalidArgument`] if `nw` is zero.
///
/// # Example
///
/// ```
/// use kornia_testing::create_checkerboard;
///
/// let board = create_checkerboard(4, 4, 1).unwrap();
/// assert_eq!(board.shape, [4, 4]);
/// assert_eq!(
///     board.as_slice(),
///     &[
///         1.0, 1.0, 0.0, 0.0, //
///         1.0, 1.0, 0.0, 0.0, //
///         0.0, 0.0, 1.0, 1.0, //
///         0.0, 0.0, 1.0, 1.0,
///     ]
/// );
/// ```
pub fn create_checkerboard(h: usize, w: usize, nw: usize) -> Result<Tensor2<f32>, TestingError> {
    if nw == 0 {
        return Err(TestingError::InvalidArgument {
            name: "nw",
            reason: "the number of tiles must be positive".to_string(),
        });
    }

    let cells = 2 * nw;
    if h % cells != 0 || w % cells != 0 {
        log::warn!(
            "checkerboard {}x{} is not divisible by {} tiles, output is truncated to {}x{}",
            h,
            w,
            cells,
            h / cells * cells,
            w / cells * cells
        );
    }

    let pattern = Tensor2::from_shape_fn([cells, cells], |[r, c]| {
        if (r + c) % 2 == 0 {
            1.0f32
        } else {
            0.0
        }
    });
    let block = Tensor2::from_shape_val([h / cells, w / cells], 1.0f32);

    let board = kron(&pattern, &block);
    log::debug!("created checkerboard with shape {:?}", board.shape);

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_4x4() -> Result<(), TestingError> {
        let board = create_checkerboard(4, 4, 1)?;
        let expected = Tensor2::from_shape_vec(
            [4, 4],
            vec![
                1.0, 1.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 1.0, //
                0.0, 0.0, 1.0, 1.0,
            ],
        )?;
        assert_eq!(board, expected);
        Ok(())
    }

    #[test]
    fn test_checkerboard_tiles() -> Result<(), TestingError> {
        let board = create_checkerboard(8, 12, 2)?;
        assert_eq!(board.shape, [8, 12]);
        // blocks are 2 rows by 3 columns
        assert_eq!(board.get([0, 0]), Some(&1.0));
        assert_eq!(board.get([1, 2]), Some(&1.0));
        assert_eq!(board.get([0, 3]), Some(&0.0));
        assert_eq!(board.get([2, 0]), Some(&0.0));
        assert_eq!(board.get([2, 3]), Some(&1.0));
        assert_eq!(board.get([7, 11]), Some(&1.0));

        let ones = board.iter().filter(|&&v| v == 1.0).count();
        assert_eq!(ones, board.numel() / 2);
        Ok(())
    }

    #[test]
    fn test_checkerboard_truncates() -> Result<(), TestingError> {
        let board = create_checkerboard(5, 7, 1)?;
        assert_eq!(board.shape, [4, 6]);

        let board = create_checkerboard(3, 3, 2)?;
        assert_eq!(board.shape, [0, 0]);
        assert_eq!(board.numel(), 0);
        Ok(())
    }

    #[test]
    fn test_checkerboard_zero_tiles() {
        assert!(matches!(
            create_checkerboard(4, 4, 0),
            Err(TestingError::InvalidArgument { name: "nw", .. })
        ));
    }
}
