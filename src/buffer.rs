use core::marker::PhantomData;
use core::mem::size_of;

use crate::element::{check_index, read_checked, read_unchecked, write_checked, write_unchecked};
use crate::error::RawBufError;
use crate::iter::BoundedBufferIter;
use crate::swap::{check_region, swap_regions};

/// A typed, fixed-capacity view over an externally owned buffer
///
/// The view never allocates or frees memory. Every access is bounds-checked
/// against the capacity it was created with.
#[derive(Debug)]
pub struct BoundedBuffer<'a, T: Copy> {
    ptr: *mut T,
    capacity: usize,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: the view is an exclusive borrow of `[T]`, like `&mut [T]`.
unsafe impl<T: Copy + Send> Send for BoundedBuffer<'_, T> {}
// SAFETY: shared access only reads.
unsafe impl<T: Copy + Sync> Sync for BoundedBuffer<'_, T> {}

impl<'a, T: Copy> BoundedBuffer<'a, T> {
    /// Creates a view over a mutable slice. The capacity is the slice length.
    pub fn from_slice(buffer: &'a mut [T]) -> Self {
        Self {
            ptr: buffer.as_mut_ptr(),
            capacity: buffer.len(),
            _marker: PhantomData,
        }
    }

    /// Creates a view over `capacity` elements starting at `ptr`.
    ///
    /// `ptr` does not need to be aligned for `T`.
    ///
    /// # Safety
    ///
    /// For the lifetime `'a`, `ptr` must be valid for reads and writes of
    /// `capacity * size_of::<T>()` bytes holding initialized values of `T`,
    /// and no other access to that memory may happen through other pointers.
    pub unsafe fn from_raw_parts(ptr: *mut T, capacity: usize) -> Self {
        Self {
            ptr,
            capacity,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Size of the viewed region in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.capacity * size_of::<T>()
    }

    /// Reads the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `RawBufError::OutOfRange` if `index` is not below the capacity.
    pub fn try_get(&self, index: usize) -> Result<T, RawBufError> {
        // SAFETY: construction guarantees `capacity` readable elements.
        unsafe { read_checked(self.ptr.cast_const(), index, self.capacity) }
    }

    /// Reads the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> T {
        assert!(
            index < self.capacity,
            "Index {} out of range for buffer of capacity {}",
            index,
            self.capacity
        );
        // SAFETY: bounds asserted above.
        unsafe { read_unchecked(self.ptr.cast_const(), index) }
    }

    /// Writes `value` at `index`.
    ///
    /// # Errors
    ///
    /// Returns `RawBufError::OutOfRange` if `index` is not below the capacity.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), RawBufError> {
        // SAFETY: construction guarantees `capacity` writable elements.
        unsafe { write_checked(self.ptr, index, value, self.capacity) }
    }

    /// Writes `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, value: T) {
        assert!(
            index < self.capacity,
            "Index {} out of range for buffer of capacity {}",
            index,
            self.capacity
        );
        // SAFETY: bounds asserted above.
        unsafe { write_unchecked(self.ptr, index, value) }
    }

    /// Exchanges the elements at `a` and `b`. Swapping an element with itself
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RawBufError::OutOfRange` if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), RawBufError> {
        check_index(a, self.capacity)?;
        check_index(b, self.capacity)?;
        if a == b {
            return Ok(());
        }
        let base = self.ptr.cast::<u8>();
        let width = size_of::<T>();
        // SAFETY: both elements lie inside the buffer and are distinct.
        unsafe { swap_regions(base.add(a * width), base.add(b * width), width) }
    }

    /// Exchanges the element ranges `[first, first + count)` and
    /// `[second, second + count)`. A `count` of zero is a no-op.
    ///
    /// # Errors
    ///
    /// - `RawBufError::RegionOutOfBounds` if either range exceeds the capacity
    /// - `RawBufError::OverlappingRegions` if the ranges intersect
    pub fn swap_ranges(
        &mut self,
        first: usize,
        second: usize,
        count: usize,
    ) -> Result<(), RawBufError> {
        if count == 0 {
            return Ok(());
        }
        check_region(first, count, self.capacity)?;
        check_region(second, count, self.capacity)?;

        let base = self.ptr.cast::<u8>();
        let width = size_of::<T>();
        // SAFETY: both ranges were checked against the capacity.
        unsafe {
            swap_regions(
                base.add(first * width),
                base.add(second * width),
                count * width,
            )
        }
    }

    /// Returns an iterator over copies of the elements.
    #[must_use]
    pub fn iter(&self) -> BoundedBufferIter<'_, T> {
        self.into_iter()
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.cast_const()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_len() {
        let mut data = [0u32; 6];
        let buffer = BoundedBuffer::from_slice(&mut data);

        assert_eq!(buffer.capacity(), 6);
        assert_eq!(buffer.byte_len(), 24);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_swap_ranges_zero_sized_elements() {
        let mut data = [(); 4];
        let mut buffer = BoundedBuffer::from_slice(&mut data);

        // Zero-width regions never overlap, so any in-bounds pair succeeds.
        assert!(buffer.swap_ranges(0, 1, 2).is_ok());
        assert!(buffer.swap(0, 3).is_ok());
    }
}
