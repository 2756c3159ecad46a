//! Arc-based storage management for zero-copy views and broadcasting.
//!
//! This module provides the storage backing every [`crate::Tensor`]. The buffer is
//! reference counted, so cloning a tensor or expanding it along a new dimension
//! shares the same memory instead of copying it.

use std::sync::Arc;

/// Arc-based tensor storage enabling zero-copy views and efficient sharing.
///
/// Clones are cheap (a reference count increment) and allow several tensors to
/// read the same buffer with different shapes and strides.
///
/// # Mutation
///
/// Mutable access is copy-on-write: if the buffer is shared with another tensor,
/// [`TensorStorage::as_mut_slice`] first detaches a private copy so writes never
/// leak into the other owners.
pub struct TensorStorage<T> {
    /// Reference-counted buffer.
    data: Arc<Vec<T>>,
}

impl<T> TensorStorage<T> {
    /// Creates a new storage taking ownership of the vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// Returns the pointer to the first element of the buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns the storage data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Returns the storage data as a mutable slice.
    ///
    /// If the buffer is shared, it is cloned first so the returned slice is
    /// exclusively owned by this storage.
    pub fn as_mut_slice(&mut self) -> &mut [T]
    where
        T: Clone,
    {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Returns the number of elements held by the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if no other storage shares this buffer.
    #[inline]
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.data) == 1
    }

    /// Returns true if both storages point to the same buffer.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Consumes the storage and returns the underlying vector.
    ///
    /// The buffer is moved out when this is the last owner, and cloned otherwise.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| shared.as_ref().clone())
    }
}

impl<T> Clone for TensorStorage<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> std::fmt::Debug for TensorStorage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TensorStorage")
            .field("ptr", &self.as_ptr())
            .field("len", &self.len())
            .field("refs", &Arc::strong_count(&self.data))
            .finish()
    }
}
