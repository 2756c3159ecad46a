use thiserror::Error;

use super::{
    storage::TensorStorage,
    view::{Iter, TensorView},
};

/// An error type for tensor operations.
///
/// This enum provides detailed error information for tensor creation,
/// manipulation, and computation operations.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// Tensor shape does not match the provided data.
    ///
    /// This error occurs when creating a tensor with data that doesn't match
    /// the specified shape. The shape must match the number of elements exactly.
    ///
    /// # Example
    /// ```ignore
    /// // Error: shape [2, 3] expects 6 elements, but got 5
    /// let data = vec![1, 2, 3, 4, 5];
    /// let tensor = Tensor2::from_shape_vec([2, 3], data)?;
    /// ```
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// Index exceeds tensor bounds.
    ///
    /// This occurs when attempting to access elements, dimensions or ranges
    /// outside the valid index range of the tensor.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },

    /// Tensor dimensions incompatible for the requested operation.
    ///
    /// # Examples
    /// - Element-wise operations on different-shaped tensors
    /// - Expanding a dimension that is neither 1 nor the target size
    #[error("Dimension mismatch: {message}. Expected shape: {expected}, got: {actual}")]
    DimensionMismatch {
        /// Human-readable description of the mismatch
        message: String,
        /// Expected shape description
        expected: String,
        /// Actual shape description
        actual: String,
    },

    /// Operation not supported for this tensor configuration.
    ///
    /// This indicates that the requested operation is not available for
    /// the current memory layout, e.g. reshaping a broadcast tensor.
    #[error("Unsupported operation: {operation} - {reason}")]
    UnsupportedOperation {
        /// Name of the operation that failed
        operation: String,
        /// Reason why the operation is not supported
        reason: String,
    },
}

impl TensorError {
    /// Creates an InvalidShape error with clear context.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates an IndexOutOfBounds error with clear context.
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Creates a DimensionMismatch error with formatted shapes.
    pub fn dimension_mismatch(
        message: impl Into<String>,
        expected: &[usize],
        actual: &[usize],
    ) -> Self {
        Self::DimensionMismatch {
            message: message.into(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }

    /// Creates an UnsupportedOperation error with context.
    pub fn unsupported_operation(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Returns a user-friendly suggestion for resolving the error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::InvalidShape { .. } => {
                "Ensure the product of shape dimensions equals the number of data elements"
            }
            Self::IndexOutOfBounds { .. } => {
                "Verify indices are within bounds (0 <= index < dimension_size)"
            }
            Self::DimensionMismatch { .. } => {
                "Check tensor shapes are compatible for the operation. Consider reshaping or broadcasting."
            }
            Self::UnsupportedOperation { .. } => {
                "Materialize the tensor with to_standard_layout() before retrying"
            }
        }
    }
}

/// Computes the strides for a row-major (C-contiguous) tensor layout.
///
/// For row-major layout, the rightmost dimension has stride 1, and each dimension's
/// stride is the product of all dimensions to its right.
///
/// # Examples
///
/// ```rust
/// use kornia_tensor::tensor::get_strides_from_shape;
///
/// let strides = get_strides_from_shape([2, 3]);
/// assert_eq!(strides, [3, 1]);
///
/// let strides = get_strides_from_shape([2, 3, 4]);
/// assert_eq!(strides, [12, 4, 1]);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A multi-dimensional array (tensor) with reference-counted data.
///
/// `Tensor` combines data storage, shape information, and memory layout (strides)
/// into a single, type-safe structure with compile-time dimensionality checking.
///
/// # Type Parameters
///
/// * `T` - The element type stored in the tensor
/// * `N` - The number of dimensions (const generic, checked at compile time)
///
/// # Memory Layout
///
/// Freshly constructed tensors use row-major (C-contiguous) layout. A tensor
/// obtained with [`Tensor::expand`] carries zero strides along its broadcast
/// dimensions and shares its storage with the source tensor. Every operation in
/// this crate reads tensors in logical order, so both layouts behave the same
/// when read. Mutating through [`Tensor::as_slice_mut`] however writes the raw
/// storage: call [`Tensor::to_standard_layout`] first when every logical element
/// needs its own memory.
///
/// # Examples
///
/// ```rust
/// use kornia_tensor::Tensor2;
///
/// let data: Vec<u8> = vec![1, 2, 3, 4];
/// let t = Tensor2::<u8>::from_shape_vec([2, 2], data).unwrap();
/// assert_eq!(t.shape, [2, 2]);
/// ```
pub struct Tensor<T, const N: usize> {
    /// The storage of the tensor.
    pub storage: TensorStorage<T>,
    /// The shape of the tensor.
    pub shape: [usize; N],
    /// The strides of the tensor data in memory.
    pub strides: [usize; N],
}

impl<T, const N: usize> Tensor<T, N> {
    /// Returns the raw storage of the tensor as a slice.
    ///
    /// For standard-layout tensors this is the data in row-major order. For
    /// broadcast tensors it is the shared, smaller buffer; use [`Tensor::iter`] to
    /// read logical elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns the raw storage of the tensor as a mutable slice.
    ///
    /// The storage is detached from other tensors before writing (copy-on-write).
    /// Broadcast dimensions still alias a single element each.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T]
    where
        T: Clone,
    {
        self.storage.as_mut_slice()
    }

    /// Get the data of the tensor as a pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Consumes the tensor and returns its logical elements in row-major order.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        if self.is_standard_layout() {
            return self.storage.into_vec();
        }
        self.iter().cloned().collect()
    }

    /// Returns an iterator over the logical elements of the tensor in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kornia_tensor::Tensor1;
    ///
    /// let tensor = Tensor1::<i32>::from_shape_vec([5], vec![1, 2, 3, 4, 5]).unwrap();
    ///
    /// let sum: i32 = tensor.iter().sum();
    /// assert_eq!(sum, 15);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(self.storage.as_slice(), self.shape, self.strides, 0)
    }

    /// Creates a new `Tensor` with the given shape and data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape of the tensor, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use kornia_tensor::Tensor2;
    ///
    /// let data: Vec<u8> = vec![1, 2, 3, 4];
    /// let t = Tensor2::<u8>::from_shape_vec([2, 2], data).unwrap();
    /// assert_eq!(t.shape, [2, 2]);
    /// ```
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(TensorError::invalid_shape(numel, data.len()));
        }
        Ok(Self {
            storage: TensorStorage::from_vec(data),
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Creates a new `Tensor` with the given shape and slice of data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape of the tensor, an error is returned.
    pub fn from_shape_slice(shape: [usize; N], data: &[T]) -> Result<Self, TensorError>
    where
        T: Clone,
    {
        Self::from_shape_vec(shape, data.to_vec())
    }

    /// Creates a new `Tensor` with the given shape filled with `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use kornia_tensor::{Tensor1, Tensor3};
    ///
    /// let t = Tensor1::<u8>::from_shape_val([4], 0);
    /// assert_eq!(t.as_slice(), vec![0, 0, 0, 0]);
    ///
    /// let t = Tensor3::<u8>::from_shape_val([2, 1, 3], 2);
    /// assert_eq!(t.as_slice(), vec![2, 2, 2, 2, 2, 2]);
    /// ```
    pub fn from_shape_val(shape: [usize; N], value: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        Self {
            storage: TensorStorage::from_vec(vec![value; numel]),
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Create a new `Tensor` with the given shape and a function to generate the data.
    ///
    /// The function `f` is called once per element, in row-major order, with the
    /// index of the element to generate.
    ///
    /// # Example
    ///
    /// ```
    /// use kornia_tensor::{Tensor1, Tensor2};
    ///
    /// let t = Tensor1::<u8>::from_shape_fn([4], |[i]| i as u8);
    /// assert_eq!(t.as_slice(), vec![0, 1, 2, 3]);
    ///
    /// let t = Tensor2::<u8>::from_shape_fn([2, 2], |[i, j]| (i * 2 + j) as u8);
    /// assert_eq!(t.as_slice(), vec![0, 1, 2, 3]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; N], mut f: F) -> Self
    where
        F: FnMut([usize; N]) -> T,
    {
        let numel = shape.iter().product::<usize>();
        let data: Vec<T> = (0..numel)
            .map(|i| {
                let mut index = [0; N];
                let mut j = i;
                for k in (0..N).rev() {
                    index[k] = j % shape[k];
                    j /= shape[k];
                }
                f(index)
            })
            .collect();
        Self {
            storage: TensorStorage::from_vec(data),
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Create a new tensor with all elements set to zero.
    pub fn zeros(shape: [usize; N]) -> Self
    where
        T: Clone + num_traits::Zero,
    {
        Self::from_shape_val(shape, T::zero())
    }

    /// Returns the number of logical elements in the tensor.
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Get the storage offset of the element at the given index.
    ///
    /// Returns `None` if any component of the index is outside its dimension.
    pub fn get_iter_offset(&self, index: [usize; N]) -> Option<usize> {
        let mut offset = 0;
        for ((&idx, dim_size), stride) in index.iter().zip(self.shape).zip(self.strides) {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        Some(offset)
    }

    /// Get the storage offset of the element at the given index without checking dim sizes.
    pub fn get_iter_offset_unchecked(&self, index: [usize; N]) -> usize {
        let mut offset = 0;
        for (&idx, stride) in index.iter().zip(self.strides) {
            offset += idx * stride;
        }
        offset
    }

    /// Get the element at the given index without checking it against the shape.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the storage.
    ///
    /// # Example
    ///
    /// ```
    /// use kornia_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(*t.get_unchecked([0, 1]), 2);
    /// assert_eq!(*t.get_unchecked([1, 0]), 3);
    /// ```
    pub fn get_unchecked(&self, index: [usize; N]) -> &T {
        let offset = self.get_iter_offset_unchecked(index);
        &self.storage.as_slice()[offset]
    }

    /// Get the element at the given index, checking if the index is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use kornia_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    ///
    /// assert_eq!(t.get([0, 0]), Some(&1));
    /// assert_eq!(t.get([1, 1]), Some(&4));
    /// assert!(t.get([2, 0]).is_none());
    /// ```
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        self.get_iter_offset(index)
            .and_then(|i| self.storage.as_slice().get(i))
    }

    /// Reshape the tensor to a new shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of elements differs, or if the tensor is not
    /// in standard layout (e.g. permuted or broadcast).
    ///
    /// # Example
    ///
    /// ```
    /// use kornia_tensor::Tensor1;
    ///
    /// let t = Tensor1::<u8>::from_shape_vec([4], vec![1, 2, 3, 4]).unwrap();
    /// let t2 = t.reshape([2, 2]).unwrap();
    /// assert_eq!(t2.shape, [2, 2]);
    /// assert_eq!(t2.strides, [2, 1]);
    /// assert_eq!(t2.numel(), 4);
    /// ```
    pub fn reshape<const M: usize>(
        &self,
        shape: [usize; M],
    ) -> Result<TensorView<'_, T, M>, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != self.numel() {
            return Err(TensorError::DimensionMismatch {
                message: "Reshape operation requires same number of elements".to_string(),
                expected: format!("{:?} ({} elements)", shape, numel),
                actual: format!("{:?} ({} elements)", self.shape, self.numel()),
            });
        }
        if !self.is_standard_layout() {
            return Err(TensorError::unsupported_operation(
                "reshape",
                "tensor is not in standard layout",
            ));
        }

        Ok(TensorView {
            storage: &self.storage,
            shape,
            strides: get_strides_from_shape(shape),
            offset: 0,
        })
    }

    /// Permutes (reorders) the dimensions of the tensor.
    ///
    /// This is a zero-copy operation that returns a view with reordered dimensions.
    /// `axes[i]` indicates which source dimension becomes the i-th dimension in the output.
    pub fn permute_axes(&self, axes: [usize; N]) -> TensorView<'_, T, N> {
        let mut new_shape = [0; N];
        let mut new_strides = [0; N];
        for (i, &axis) in axes.iter().enumerate() {
            new_shape[i] = self.shape[axis];
            new_strides[i] = self.strides[axis];
        }

        TensorView {
            storage: &self.storage,
            shape: new_shape,
            strides: new_strides,
            offset: 0,
        }
    }

    /// Return a view of the tensor with the same shape and strides.
    pub fn view(&self) -> TensorView<'_, T, N> {
        TensorView {
            storage: &self.storage,
            shape: self.shape,
            strides: self.strides,
            offset: 0,
        }
    }

    /// Narrows the tensor along `dim` to `start..start + len` without copying.
    ///
    /// # Errors
    ///
    /// See [`TensorView::narrow`].
    pub fn narrow(
        &self,
        dim: usize,
        start: usize,
        len: usize,
    ) -> Result<TensorView<'_, T, N>, TensorError> {
        self.view().narrow(dim, start, len)
    }

    /// Broadcasts the tensor to a larger shape without copying.
    ///
    /// New dimensions are prepended, and existing dimensions of size 1 may be
    /// stretched to any size. The result shares the storage of `self` and uses a
    /// stride of zero along every broadcast dimension.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::DimensionMismatch`] if `M < N` or if a non-unit
    /// dimension differs from the target size.
    ///
    /// # Example
    ///
    /// ```
    /// use kornia_tensor::Tensor1;
    ///
    /// let row = Tensor1::<u8>::from_shape_vec([3], vec![1, 2, 3]).unwrap();
    /// let rows = row.expand([2, 3]).unwrap();
    /// assert_eq!(rows.strides, [0, 1]);
    /// assert!(rows.storage.ptr_eq(&row.storage));
    /// assert_eq!(rows.into_vec(), vec![1, 2, 3, 1, 2, 3]);
    /// ```
    pub fn expand<const M: usize>(&self, shape: [usize; M]) -> Result<Tensor<T, M>, TensorError> {
        if M < N {
            return Err(TensorError::dimension_mismatch(
                "Cannot expand to fewer dimensions",
                &shape,
                &self.shape,
            ));
        }

        let lead = M - N;
        let mut strides = [0; M];
        for (i, (&size, &stride)) in self.shape.iter().zip(self.strides.iter()).enumerate() {
            let target = shape[lead + i];
            strides[lead + i] = if size == target {
                stride
            } else if size == 1 {
                0
            } else {
                return Err(TensorError::dimension_mismatch(
                    "Expanded size must match the existing size at non-singleton dimensions",
                    &shape,
                    &self.shape,
                ));
            };
        }

        Ok(Tensor {
            storage: self.storage.clone(),
            shape,
            strides,
        })
    }

    /// Apply a function to each element of the tensor.
    ///
    /// The result is always a new standard-layout tensor.
    ///
    /// # Example
    ///
    /// ```
    /// use kornia_tensor::Tensor1;
    ///
    /// let t = Tensor1::<u8>::from_shape_vec([4], vec![1, 2, 3, 4]).unwrap();
    ///
    /// let t2 = t.map(|x| *x + 1);
    /// assert_eq!(t2.as_slice(), vec![2, 3, 4, 5]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Tensor<U, N>
    where
        F: Fn(&T) -> U,
    {
        let data: Vec<U> = self.iter().map(f).collect();

        Tensor {
            storage: TensorStorage::from_vec(data),
            shape: self.shape,
            strides: get_strides_from_shape(self.shape),
        }
    }

    /// Checks if the tensor has a standard contiguous (row-major) memory layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use kornia_tensor::Tensor3;
    ///
    /// let data: Vec<u8> = (1..=12).collect();
    /// let mut t = Tensor3::<u8>::from_shape_vec([2, 2, 3], data).unwrap();
    /// assert!(t.is_standard_layout());
    /// // arbitrary incorrect stride
    /// t.strides = [10, 5, 1];
    /// assert!(!t.is_standard_layout());
    /// ```
    pub fn is_standard_layout(&self) -> bool {
        let mut expected_stride: usize = 1;
        for (&dim, &stride) in self.shape.iter().rev().zip(self.strides.iter().rev()) {
            if stride != expected_stride {
                return false;
            }
            expected_stride = expected_stride.saturating_mul(dim);
        }
        true
    }

    /// Returns true if at least one dimension of size > 1 has a zero stride.
    pub fn is_broadcast(&self) -> bool {
        self.shape
            .iter()
            .zip(self.strides.iter())
            .any(|(&dim, &stride)| dim > 1 && stride == 0)
    }

    /// Converts the tensor to standard contiguous (row-major) memory layout.
    ///
    /// If the tensor already has standard layout, returns a cheap clone sharing the
    /// storage. Otherwise every logical element is copied into a fresh buffer, which
    /// also gives each element of a broadcast dimension its own memory.
    pub fn to_standard_layout(&self) -> Self
    where
        T: Clone,
    {
        if self.is_standard_layout() {
            return self.clone();
        }
        self.view().as_contiguous()
    }

    /// Cast the tensor to a new type.
    ///
    /// # Example
    ///
    /// ```
    /// use kornia_tensor::Tensor1;
    ///
    /// let t = Tensor1::<u8>::from_shape_vec([4], vec![1, 2, 3, 4]).unwrap();
    ///
    /// let t2 = t.cast::<f32>();
    /// assert_eq!(t2.as_slice(), vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn cast<U>(&self) -> Tensor<U, N>
    where
        U: From<T>,
        T: Clone,
    {
        self.map(|x| U::from(x.clone()))
    }

    /// Perform an element-wise operation on two tensors.
    ///
    /// Both tensors are read in logical order, so broadcast inputs are allowed. The
    /// result is a new standard-layout tensor.
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
    /// let t1 = Tensor1::<u8>::from_shape_vec([4], vec![1, 2, 3, 4]).unwrap();
    /// let t2 = Tensor1::<u8>::from_shape_vec([4], vec![1, 2, 3, 4]).unwrap();
    ///
    /// let t3 = t1.element_wise_op(&t2, |a, b| *a + *b).unwrap();
    /// assert_eq!(t3.as_slice(), vec![2, 4, 6, 8]);
    ///
    /// let t4 = t1.element_wise_op(&t2, |a, b| *a - *b).unwrap();
    /// assert_eq!(t4.as_slice(), vec![0, 0, 0, 0]);
    /// ```
    pub fn element_wise_op<F>(
        &self,
        other: &Tensor<T, N>,
        op: F,
    ) -> Result<Tensor<T, N>, TensorError>
    where
        F: Fn(&T, &T) -> T,
    {
        if self.shape != other.shape {
            return Err(TensorError::dimension_mismatch(
                "Element-wise operations require identical shapes",
                &self.shape,
                &other.shape,
            ));
        }

        let data = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| op(a, b))
            .collect();

        Ok(Tensor {
            storage: TensorStorage::from_vec(data),
            shape: self.shape,
            strides: get_strides_from_shape(self.shape),
        })
    }
}

impl<T, const N: usize> Clone for Tensor<T, N> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            shape: self.shape,
            strides: self.strides,
        }
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Tensor<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.iter().eq(other.iter())
    }
}

impl<T: std::fmt::Debug, const N: usize> std::fmt::Debug for Tensor<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("strides", &self.strides)
            .field("data", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
