use thiserror::Error;

/// Error types for `rawbuf` operations
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawBufError {
    /// Element index outside `[0, capacity)`
    #[error("Index out of range: index {index} is beyond capacity {capacity}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Declared element capacity of the buffer
        capacity: usize,
    },
    /// The two regions of a swap share at least one byte
    #[error("Overlapping regions: {size} bytes at {dst:#x} and {src:#x} intersect")]
    OverlappingRegions {
        /// Start address of the destination region
        dst: usize,
        /// Start address of the source region
        src: usize,
        /// Size of each region in bytes
        size: usize,
    },
    /// Size cannot describe a valid memory region
    #[error("Invalid size: {size} bytes cannot describe a memory region")]
    InvalidSize {
        /// Size that was rejected
        size: usize,
    },
    /// A range does not fit inside the buffer it addresses
    #[error("Region out of bounds: {size} units at offset {offset} exceed capacity {capacity}")]
    RegionOutOfBounds {
        /// Start of the range
        offset: usize,
        /// Length of the range
        size: usize,
        /// Capacity of the buffer
        capacity: usize,
    },
    /// Slices to be exchanged have different lengths
    #[error("Length mismatch: cannot swap {left} bytes with {right} bytes")]
    LengthMismatch {
        /// Length of the first slice
        left: usize,
        /// Length of the second slice
        right: usize,
    },
}
