use crate::error::RawBufError;

/// Verifies that `index` addresses an element of a buffer holding `capacity` elements.
///
/// # Errors
///
/// Returns `RawBufError::OutOfRange` if `index >= capacity`.
#[inline]
pub fn check_index(index: usize, capacity: usize) -> Result<(), RawBufError> {
    if index >= capacity {
        return Err(RawBufError::OutOfRange { index, capacity });
    }
    Ok(())
}

/// Reads the element at `index` after bounds checking.
///
/// The element is copied out of `source + index * size_of::<T>()`. The read
/// does not require `source` to be aligned for `T`.
///
/// # Errors
///
/// Returns `RawBufError::OutOfRange` if `index >= capacity`. The buffer is not
/// accessed in that case.
///
/// # Safety
///
/// `source` must be valid for reads of `capacity * size_of::<T>()` bytes, and
/// those bytes must hold initialized values of `T`.
pub unsafe fn read_checked<T: Copy>(
    source: *const T,
    index: usize,
    capacity: usize,
) -> Result<T, RawBufError> {
    check_index(index, capacity)?;
    // SAFETY: index < capacity and the caller vouches for `capacity` elements.
    Ok(unsafe { read_unchecked(source, index) })
}

/// Writes `value` at `index` after bounds checking.
///
/// # Errors
///
/// Returns `RawBufError::OutOfRange` if `index >= capacity`. Nothing is
/// written in that case.
///
/// # Safety
///
/// `destination` must be valid for writes of `capacity * size_of::<T>()` bytes.
pub unsafe fn write_checked<T: Copy>(
    destination: *mut T,
    index: usize,
    value: T,
    capacity: usize,
) -> Result<(), RawBufError> {
    check_index(index, capacity)?;
    // SAFETY: index < capacity and the caller vouches for `capacity` elements.
    unsafe { write_unchecked(destination, index, value) };
    Ok(())
}

/// Reads the element at `index` without any bounds check.
///
/// # Safety
///
/// `source.add(index)` must be valid for reads of `size_of::<T>()` bytes
/// holding an initialized `T`.
#[inline]
#[must_use]
pub unsafe fn read_unchecked<T: Copy>(source: *const T, index: usize) -> T {
    unsafe { source.add(index).read_unaligned() }
}

/// Writes `value` at `index` without any bounds check.
///
/// # Safety
///
/// `destination.add(index)` must be valid for writes of `size_of::<T>()` bytes.
#[inline]
pub unsafe fn write_unchecked<T: Copy>(destination: *mut T, index: usize, value: T) {
    unsafe { destination.add(index).write_unaligned(value) }
}
