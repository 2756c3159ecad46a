use kornia_tensor::{Tensor2, Tensor3};
use num_traits::{One, Zero};
use rand::distr::{Distribution, Uniform};
use rand::Rng;

use crate::error::TestingError;

/// Default half-width of the uniform noise added by [`create_random_homography`].
pub const DEFAULT_HOMOGRAPHY_STD: f32 = 1e-3;

/// Parameters of the random homography generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomHomographyParams {
    /// Number of matrices in the batch.
    pub batch_size: usize,
    /// Size of each square matrix.
    pub eye_size: usize,
    /// Noise is drawn uniformly in `[-std_val, std_val]`.
    pub std_val: f32,
}

impl Default for RandomHomographyParams {
    fn default() -> Self {
        Self {
            batch_size: 1,
            eye_size: 3,
            std_val: DEFAULT_HOMOGRAPHY_STD,
        }
    }
}

/// Creates the `eye_size x eye_size` identity matrix.
pub fn create_eye<T>(eye_size: usize) -> Tensor2<T>
where
    T: Zero + One,
{
    Tensor2::from_shape_fn([eye_size, eye_size], |[i, j]| {
        if i == j {
            T::one()
        } else {
            T::zero()
        }
    })
}

/// Creates a batch of identity matrices of shape `[batch_size, eye_size, eye_size]`.
///
/// The batch is a broadcast of a single identity matrix: the batch dimension has a
/// stride of zero and every slice shares the same storage. Reading the tensor, or
/// using it in arithmetic, behaves as if each slice were its own identity matrix.
/// Writing through [`kornia_tensor::Tensor::as_slice_mut`] does not: call
/// [`kornia_tensor::Tensor::to_standard_layout`] first to give every batch element
/// its own memory.
///
/// # Errors
///
/// Never fails for valid sizes; the `Result` carries broadcast errors of the tensor layer.
///
/// # Example
///
/// ```
/// use kornia_testing::create_eye_batch;
///
/// let eye = create_eye_batch::<f32>(4, 3).unwrap();
/// assert_eq!(eye.shape, [4, 3, 3]);
/// assert_eq!(eye.strides[0], 0);
/// assert_eq!(eye.get([3, 1, 1]), Some(&1.0));
/// assert_eq!(eye.get([3, 1, 2]), Some(&0.0));
/// ```
pub fn create_eye_batch<T>(batch_size: usize, eye_size: usize) -> Result<Tensor3<T>, TestingError>
where
    T: Zero + One,
{
    let eye = create_eye::<T>(eye_size);
    Ok(eye.expand([batch_size, eye_size, eye_size])?)
}

/// Creates a batch of random homographies of shape `[batch_size, eye_size, eye_size]`.
///
/// Each matrix is the identity perturbed element-wise by uniform noise in
/// `[-std_val, std_val]`. Uses the thread-local generator; see
/// [`create_random_homography_with_rng`] for reproducible batches.
///
/// # Errors
///
/// Returns [`TestingError::Sampling`] if `std_val` is negative or not finite.
///
/// # Example
///
/// ```
/// use kornia_testing::{create_random_homography, DEFAULT_HOMOGRAPHY_STD};
///
/// let h = create_random_homography(2, 3, DEFAULT_HOMOGRAPHY_STD).unwrap();
/// assert_eq!(h.shape, [2, 3, 3]);
/// let d = h.get([1, 2, 2]).unwrap() - 1.0;
/// assert!(d.abs() <= DEFAULT_HOMOGRAPHY_STD + f32::EPSILON);
/// ```
pub fn create_random_homography(
    batch_size: usize,
    eye_size: usize,
    std_val: f32,
) -> Result<Tensor3<f32>, TestingError> {
    create_random_homography_with_rng(&mut rand::rng(), batch_size, eye_size, std_val)
}

/// Same as [`create_random_homography`] but drawing the noise from `rng`.
///
/// # Errors
///
/// Returns [`TestingError::Sampling`] if `std_val` is negative or not finite.
pub fn create_random_homography_with_rng<R>(
    rng: &mut R,
    batch_size: usize,
    eye_size: usize,
    std_val: f32,
) -> Result<Tensor3<f32>, TestingError>
where
    R: Rng + ?Sized,
{
    let dist = Uniform::new_inclusive(-std_val, std_val)?;
    let noise = Tensor3::from_shape_fn([batch_size, eye_size, eye_size], |_| {
        dist.sample(&mut *rng)
    });
    let eye = create_eye_batch::<f32>(batch_size, eye_size)?;

    let homography = kornia_tensor::add(&eye, &noise)?;
    log::debug!(
        "created {} random homographies of size {} with noise {}",
        batch_size,
        eye_size,
        std_val
    );

    Ok(homography)
}

impl RandomHomographyParams {
    /// Generates a batch with these parameters, drawing the noise from `rng`.
    ///
    /// # Errors
    ///
    /// See [`create_random_homography_with_rng`].
    pub fn sample<R>(&self, rng: &mut R) -> Result<Tensor3<f32>, TestingError>
    where
        R: Rng + ?Sized,
    {
        create_random_homography_with_rng(rng, self.batch_size, self.eye_size, self.std_val)
    }
}
