use crate::{get_strides_from_shape, storage::TensorStorage, Tensor, TensorError};

/// A non-owning view into tensor data.
///
/// `TensorView` provides a lightweight, non-owning reference to tensor data with its own
/// shape, strides and starting offset. Views enable zero-copy operations like reshaping,
/// dimension permutation and narrowing without duplicating the underlying data.
///
/// # Lifetime
///
/// The view borrows the storage for its lifetime `'a`, ensuring the underlying data
/// remains valid while the view exists.
///
/// # Examples
///
/// ```rust
/// use kornia_tensor::Tensor;
///
/// let data = vec![1, 2, 3, 4, 5, 6];
/// let tensor = Tensor::<i32, 1>::from_shape_vec([6], data).unwrap();
///
/// // Create a 2x3 view of the 1D tensor
/// let view = tensor.reshape([2, 3]).unwrap();
/// assert_eq!(view.shape, [2, 3]);
/// assert_eq!(*view.get_unchecked([0, 0]), 1);
/// assert_eq!(*view.get_unchecked([1, 2]), 6);
/// ```
///
/// Converting a view to a contiguous tensor:
///
/// ```rust
/// use kornia_tensor::Tensor;
///
/// let data = vec![1, 2, 3, 4];
/// let tensor = Tensor::<i32, 2>::from_shape_vec([2, 2], data).unwrap();
///
/// // Permute creates a non-contiguous view
/// let view = tensor.permute_axes([1, 0]);
///
/// // Convert to an owned contiguous tensor
/// let contiguous = view.as_contiguous();
/// assert_eq!(contiguous.as_slice(), &[1, 3, 2, 4]);
/// ```
pub struct TensorView<'a, T, const N: usize> {
    /// Reference to the storage held by another tensor.
    pub storage: &'a TensorStorage<T>,

    /// The shape of the tensor view.
    pub shape: [usize; N],

    /// The strides for accessing elements in the view.
    pub strides: [usize; N],

    /// Offset of the first element of the view in the storage.
    pub offset: usize,
}

impl<'a, T, const N: usize> TensorView<'a, T, N> {
    /// Returns a slice of the whole underlying storage.
    ///
    /// Note: this is not restricted to the elements visible through the view. For
    /// element-wise access respecting the view's layout, use [`Self::iter`] or
    /// [`Self::get`].
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.storage.as_slice()
    }

    /// Returns a raw pointer to the underlying storage.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Returns the total number of elements in the view.
    ///
    /// This is computed from the view's shape, not the underlying storage size.
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Get the storage offset of the element at the given index, checking dim sizes.
    pub fn get_iter_offset(&self, index: [usize; N]) -> Option<usize> {
        let mut offset = self.offset;
        for ((&idx, dim_size), stride) in index.iter().zip(self.shape).zip(self.strides) {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        Some(offset)
    }

    /// Gets the element at the given index without checking it against the view's shape.
    ///
    /// The offset is computed from the view's strides, so an index outside the view may
    /// silently land on another element of the storage.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kornia_tensor::Tensor;
    ///
    /// let data = vec![1, 2, 3, 4, 5, 6];
    /// let tensor = Tensor::<i32, 1>::from_shape_vec([6], data).unwrap();
    /// let view = tensor.reshape([2, 3]).unwrap();
    ///
    /// assert_eq!(*view.get_unchecked([0, 1]), 2);
    /// assert_eq!(*view.get_unchecked([1, 2]), 6);
    /// ```
    pub fn get_unchecked(&self, index: [usize; N]) -> &'a T {
        let offset = index
            .iter()
            .zip(self.strides.iter())
            .fold(self.offset, |acc, (i, s)| acc + i * s);
        &self.storage.as_slice()[offset]
    }

    /// Gets the element at the given index, or `None` if it is outside the view.
    pub fn get(&self, index: [usize; N]) -> Option<&'a T> {
        self.get_iter_offset(index)
            .and_then(|offset| self.storage.as_slice().get(offset))
    }

    /// Returns an iterator over the elements of the view in logical row-major order.
    pub fn iter(&self) -> Iter<'a, T, N> {
        Iter::new(self.storage.as_slice(), self.shape, self.strides, self.offset)
    }

    /// Narrows the view along `dim` to the range `start..start + len`.
    ///
    /// This is a zero-copy operation: only the offset and the shape are adjusted.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::IndexOutOfBounds`] if `dim` is not a dimension of the
    /// view or if the range does not fit in it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kornia_tensor::Tensor;
    ///
    /// let t = Tensor::<u8, 2>::from_shape_fn([3, 4], |[i, j]| (i * 4 + j) as u8);
    /// let v = t.view().narrow(1, 1, 2).unwrap();
    /// assert_eq!(v.shape, [3, 2]);
    /// assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 2, 5, 6, 9, 10]);
    /// ```
    pub fn narrow(&self, dim: usize, start: usize, len: usize) -> Result<Self, TensorError> {
        if dim >= N {
            return Err(TensorError::index_out_of_bounds(dim, N));
        }
        let end = start + len;
        if end > self.shape[dim] {
            return Err(TensorError::index_out_of_bounds(end, self.shape[dim]));
        }

        let mut shape = self.shape;
        shape[dim] = len;

        Ok(Self {
            storage: self.storage,
            shape,
            strides: self.strides,
            offset: self.offset + start * self.strides[dim],
        })
    }

    /// Converts the view to an owned tensor with contiguous memory layout.
    ///
    /// The elements are read in logical order according to the view's shape and
    /// strides, so this also materializes broadcast (zero-stride) dimensions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kornia_tensor::Tensor;
    ///
    /// let data = vec![1, 2, 3, 4, 5, 6];
    /// let tensor = Tensor::<i32, 2>::from_shape_vec([2, 3], data).unwrap();
    ///
    /// // Transpose by permuting axes: [[1, 4], [2, 5], [3, 6]]
    /// let contiguous = tensor.permute_axes([1, 0]).as_contiguous();
    /// assert_eq!(contiguous.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn as_contiguous(&self) -> Tensor<T, N>
    where
        T: Clone,
    {
        let data: Vec<T> = self.iter().cloned().collect();

        Tensor {
            storage: TensorStorage::from_vec(data),
            shape: self.shape,
            strides: get_strides_from_shape(self.shape),
        }
    }
}

impl<T, const N: usize> Clone for TensorView<'_, T, N> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage,
            shape: self.shape,
            strides: self.strides,
            offset: self.offset,
        }
    }
}

/// Iterator over the elements of a strided tensor in logical row-major order.
///
/// Zero strides are allowed, in which case the same storage element is yielded
/// once per index along the broadcast dimension. The shape and strides must stay
/// within the storage; iteration ends at the first position outside of it.
pub struct Iter<'a, T, const N: usize> {
    data: &'a [T],
    shape: [usize; N],
    strides: [usize; N],
    offset: usize,
    index: [usize; N],
    remaining: usize,
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    pub(crate) fn new(
        data: &'a [T],
        shape: [usize; N],
        strides: [usize; N],
        offset: usize,
    ) -> Self {
        Self {
            data,
            shape,
            strides,
            offset,
            index: [0; N],
            remaining: shape.iter().product(),
        }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let position = self
            .index
            .iter()
            .zip(self.strides.iter())
            .fold(self.offset, |acc, (i, s)| acc + i * s);
        let Some(item) = self.data.get(position) else {
            self.remaining = 0;
            return None;
        };
        self.remaining -= 1;

        // increment index
        for dim in (0..N).rev() {
            self.index[dim] += 1;
            if self.index[dim] < self.shape[dim] {
                break;
            }
            self.index[dim] = 0;
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}
