#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `kornia-testing` builds the synthetic inputs and numeric comparisons shared by
//! the test suites of the computer vision crates: encoded pinhole cameras,
//! checkerboard images, identity batches, perturbed homographies, gradient-check
//! variables and error metrics.
//!
//! # Quick Start
//!
//! ```rust
//! use kornia_testing::{check_equal_tensor, create_eye_batch, create_random_homography};
//!
//! let eye = create_eye_batch::<f32>(2, 3).unwrap();
//! let h = create_random_homography(2, 3, 0.0).unwrap();
//! assert!(check_equal_tensor(&eye, &h, 1e-4).unwrap());
//! ```

/// Pinhole camera encoding.
pub mod camera;

/// Approximate equality checks.
pub mod equal;

/// Error types for the testing fixtures.
pub mod error;

/// Conversion of tensors into gradient-check variables.
pub mod gradcheck;

/// Identity batches and random homographies.
pub mod homography;

/// Synthetic images.
pub mod image;

/// Error metrics between tensors.
pub mod metrics;

pub use crate::camera::{create_pinhole, PinholeParams, PINHOLE_NUM_PARAMS};
pub use crate::equal::{check_equal_slice, check_equal_tensor, DEFAULT_EQUAL_EPS};
pub use crate::error::TestingError;
pub use crate::gradcheck::{
    tensor_to_gradcheck_var, tensor_to_gradcheck_var_as, try_tensor_to_gradcheck_var,
    GradcheckVar,
};
pub use crate::homography::{
    create_eye, create_eye_batch, create_random_homography, create_random_homography_with_rng,
    RandomHomographyParams, DEFAULT_HOMOGRAPHY_STD,
};
pub use crate::image::create_checkerboard;
pub use crate::metrics::{compute_mse, compute_patch_error};
