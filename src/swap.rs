use core::ptr;

use crate::error::RawBufError;

/// Size of the per-call scratch area used to exchange two regions.
pub const STAGING_SIZE: usize = 1024;

/// Returns `true` if the half-open intervals `[a, a + size)` and
/// `[b, b + size)` share at least one byte.
///
/// Addresses are compared as integers, so the pointers need not be valid.
/// A `size` of zero never overlaps.
#[must_use]
pub fn regions_overlap(a: *const u8, b: *const u8, size: usize) -> bool {
    (a as usize).abs_diff(b as usize) < size
}

fn validate_size(dst: *const u8, src: *const u8, size: usize) -> Result<(), RawBufError> {
    // isize::MAX is the largest span a single allocation may cover
    if isize::try_from(size).is_err() {
        return Err(RawBufError::InvalidSize { size });
    }
    let fits = |start: *const u8| (start as usize).checked_add(size).is_some();
    if !fits(dst) || !fits(src) {
        return Err(RawBufError::InvalidSize { size });
    }
    Ok(())
}

/// Exchanges the contents of two equally sized, non-overlapping memory regions.
///
/// The exchange is done in chunks of at most [`STAGING_SIZE`] bytes through a
/// stack-local staging area, so scratch usage does not grow with `size`.
/// A `size` of zero is a no-op.
///
/// # Errors
///
/// - `RawBufError::InvalidSize` if `size` exceeds `isize::MAX` or a region end
///   would overflow the address space
/// - `RawBufError::OverlappingRegions` if the two regions intersect
///
/// All checks run before any byte is moved; on error neither region changes.
///
/// # Safety
///
/// Both `destination` and `source` must be valid for reads and writes of
/// `size` bytes.
pub unsafe fn swap_regions(
    destination: *mut u8,
    source: *mut u8,
    size: usize,
) -> Result<(), RawBufError> {
    if size == 0 {
        return Ok(());
    }
    validate_size(destination, source, size)?;
    if regions_overlap(destination, source, size) {
        return Err(RawBufError::OverlappingRegions {
            dst: destination as usize,
            src: source as usize,
            size,
        });
    }

    let mut staging = [0u8; STAGING_SIZE];
    let mut dst = destination;
    let mut src = source;
    let mut remaining = size;

    while remaining > 0 {
        let chunk = remaining.min(STAGING_SIZE);
        // SAFETY: both regions are valid for `size` bytes and disjoint, and the
        // staging area is a distinct local of at least `chunk` bytes.
        unsafe {
            ptr::copy_nonoverlapping(dst, staging.as_mut_ptr(), chunk);
            ptr::copy_nonoverlapping(src, dst, chunk);
            ptr::copy_nonoverlapping(staging.as_ptr(), src, chunk);
            dst = dst.add(chunk);
            src = src.add(chunk);
        }
        remaining -= chunk;
    }

    Ok(())
}

/// Exchanges the contents of two equal-length byte slices.
///
/// # Errors
///
/// Returns `RawBufError::LengthMismatch` if the slices differ in length.
pub fn swap_slices(a: &mut [u8], b: &mut [u8]) -> Result<(), RawBufError> {
    if a.len() != b.len() {
        return Err(RawBufError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    // SAFETY: two live `&mut` slices are disjoint and valid for their length.
    unsafe { swap_regions(a.as_mut_ptr(), b.as_mut_ptr(), a.len()) }
}

pub(crate) fn check_region(
    offset: usize,
    size: usize,
    capacity: usize,
) -> Result<(), RawBufError> {
    match offset.checked_add(size) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(RawBufError::RegionOutOfBounds {
            offset,
            size,
            capacity,
        }),
    }
}

/// Exchanges the byte ranges `[first, first + size)` and `[second, second + size)`
/// of `buffer`.
///
/// A `size` of zero is a no-op.
///
/// # Errors
///
/// - `RawBufError::RegionOutOfBounds` if either range does not fit in `buffer`
/// - `RawBufError::OverlappingRegions` if the ranges intersect
pub fn swap_within(
    buffer: &mut [u8],
    first: usize,
    second: usize,
    size: usize,
) -> Result<(), RawBufError> {
    if size == 0 {
        return Ok(());
    }
    check_region(first, size, buffer.len())?;
    check_region(second, size, buffer.len())?;

    let base = buffer.as_mut_ptr();
    // SAFETY: both ranges were checked to lie inside `buffer`; swap_regions
    // rejects the call if they intersect.
    unsafe { swap_regions(base.add(first), base.add(second), size) }
}
