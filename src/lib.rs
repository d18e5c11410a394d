#![no_std]

//! `rawbuf`: bounds-checked element access and chunked region swapping for
//! externally owned buffers.
//!
//! The crate never allocates or frees memory. Callers describe a buffer at each
//! call by a start pointer and a declared capacity, and every operation either
//! completes or returns a [`RawBufError`] without touching memory.
//!
//! This crate is `no_std` compatible. Enable the optional `std` feature for
//! `std::error::Error` interop through `thiserror`:
//! ```toml
//! [dependencies]
//! rawbuf = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Element Access
//!
//! [`read_checked`] and [`write_checked`] are generic over any `Copy` element
//! type and refuse indices outside `[0, capacity)`:
//!
//! ```
//! # use rawbuf::{read_checked, write_checked, RawBufError};
//! let mut ints = [10i32, 20, 30, 40, 50];
//! let ptr = ints.as_mut_ptr();
//!
//! unsafe {
//!     write_checked(ptr, 2, 99, 5).unwrap();
//!     assert_eq!(read_checked(ptr.cast_const(), 2, 5), Ok(99));
//!     assert_eq!(
//!         read_checked(ptr.cast_const(), 5, 5),
//!         Err(RawBufError::OutOfRange { index: 5, capacity: 5 })
//!     );
//! }
//! assert_eq!(ints, [10, 20, 99, 40, 50]);
//! ```
//!
//! [`read_unchecked`] and [`write_unchecked`] are the fast path without the
//! bounds check.
//!
//! # Swapping Regions
//!
//! [`swap_regions`] exchanges two equally sized, disjoint byte regions in
//! chunks of at most [`STAGING_SIZE`] bytes through a stack-local staging area:
//!
//! ```
//! # use rawbuf::swap_regions;
//! let mut a = [0xAAu8; 2000];
//! let mut b = [0xBBu8; 2000];
//!
//! unsafe { swap_regions(a.as_mut_ptr(), b.as_mut_ptr(), 2000).unwrap() };
//!
//! assert!(a.iter().all(|&byte| byte == 0xBB));
//! assert!(b.iter().all(|&byte| byte == 0xAA));
//! ```
//!
//! Safe wrappers cover the common cases of two slices ([`swap_slices`]) and
//! two ranges of one buffer ([`swap_within`]):
//!
//! ```
//! # use rawbuf::{swap_within, RawBufError};
//! let mut data = *b"abcdef";
//! swap_within(&mut data, 0, 3, 3).unwrap();
//! assert_eq!(&data, b"defabc");
//!
//! assert!(matches!(
//!     swap_within(&mut data, 0, 1, 3),
//!     Err(RawBufError::OverlappingRegions { size: 3, .. })
//! ));
//! ```
//!
//! # Bounded Buffer
//!
//! [`BoundedBuffer`] wraps a buffer and its capacity once, so the capacity is
//! not repeated at every call:
//!
//! ```
//! # use rawbuf::BoundedBuffer;
//! let mut storage = [1u16, 2, 3, 4];
//! let mut buffer = BoundedBuffer::from_slice(&mut storage);
//!
//! buffer.set(0, 7);
//! buffer.swap(0, 3).unwrap();
//! assert!(buffer.try_get(4).is_err());
//!
//! let collected: Vec<_> = buffer.iter().collect();
//! assert_eq!(collected, [4, 2, 3, 7]);
//! ```

mod buffer;
mod element;
mod error;
mod iter;
mod swap;

// Re-export public types and functions
pub use buffer::BoundedBuffer;
pub use element::{check_index, read_checked, read_unchecked, write_checked, write_unchecked};
pub use error::RawBufError;
pub use iter::BoundedBufferIter;
pub use swap::{regions_overlap, swap_regions, swap_slices, swap_within, STAGING_SIZE};
