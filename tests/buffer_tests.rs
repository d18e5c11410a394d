use rawbuf::{BoundedBuffer, RawBufError};

#[test]
fn test_buffer_initialization() {
    let mut storage = [0u32; 8];
    let buffer = BoundedBuffer::from_slice(&mut storage);

    assert_eq!(buffer.capacity(), 8);
    assert_eq!(buffer.byte_len(), 32);
    assert!(!buffer.is_empty());
}

#[test]
fn test_empty_buffer() {
    let mut storage: [u32; 0] = [];
    let mut buffer = BoundedBuffer::from_slice(&mut storage);

    assert!(buffer.is_empty());
    assert_eq!(
        buffer.try_get(0),
        Err(RawBufError::OutOfRange {
            index: 0,
            capacity: 0
        })
    );
    assert!(buffer.try_set(0, 1).is_err());
    assert_eq!(buffer.iter().count(), 0);
}

#[test]
fn test_get_and_set() {
    let mut storage = [10i32, 20, 30, 40, 50];
    {
        let mut buffer = BoundedBuffer::from_slice(&mut storage);

        buffer.try_set(2, 99).unwrap();
        assert_eq!(buffer.try_get(2), Ok(99));
        assert_eq!(buffer.get(2), 99);

        buffer.set(4, -5);
        assert_eq!(buffer.get(4), -5);

        assert_eq!(
            buffer.try_get(5),
            Err(RawBufError::OutOfRange {
                index: 5,
                capacity: 5
            })
        );
    }
    assert_eq!(storage, [10, 20, 99, 40, -5]);
}

#[test]
#[should_panic(expected = "Index 3 out of range for buffer of capacity 3")]
fn test_get_out_of_range_panics() {
    let mut storage = [1u8, 2, 3];
    let buffer = BoundedBuffer::from_slice(&mut storage);
    let _ = buffer.get(3);
}

#[test]
#[should_panic(expected = "Index 7 out of range for buffer of capacity 3")]
fn test_set_out_of_range_panics() {
    let mut storage = [1u8, 2, 3];
    let mut buffer = BoundedBuffer::from_slice(&mut storage);
    buffer.set(7, 0);
}

#[test]
fn test_from_raw_parts() {
    let mut storage = vec![0u16; 100];
    let ptr = storage.as_mut_ptr();
    {
        let mut buffer = unsafe { BoundedBuffer::from_raw_parts(ptr, 10) };

        buffer.set(9, 900);
        assert!(buffer.try_set(10, 1000).is_err());
    }
    assert_eq!(storage[9], 900);
    assert_eq!(storage[10], 0);
}

#[test]
fn test_swap_elements() {
    let mut storage = [1u64, 2, 3, 4];
    {
        let mut buffer = BoundedBuffer::from_slice(&mut storage);

        buffer.swap(0, 3).unwrap();
        buffer.swap(1, 1).unwrap();
        assert_eq!(
            buffer.swap(1, 4),
            Err(RawBufError::OutOfRange {
                index: 4,
                capacity: 4
            })
        );
    }
    assert_eq!(storage, [4, 2, 3, 1]);
}

#[test]
fn test_swap_ranges() {
    let mut storage: Vec<u32> = (0..600).collect();
    {
        let mut buffer = BoundedBuffer::from_slice(&mut storage);

        // 300 u32 values span 1200 bytes, more than one staging chunk.
        buffer.swap_ranges(0, 300, 300).unwrap();
    }
    let expected: Vec<u32> = (300..600).chain(0..300).collect();
    assert_eq!(storage, expected);
}

#[test]
fn test_swap_ranges_errors() {
    let mut storage = [0u8, 1, 2, 3, 4, 5];
    {
        let mut buffer = BoundedBuffer::from_slice(&mut storage);

        assert_eq!(
            buffer.swap_ranges(0, 4, 3),
            Err(RawBufError::RegionOutOfBounds {
                offset: 4,
                size: 3,
                capacity: 6
            })
        );
        assert!(matches!(
            buffer.swap_ranges(0, 2, 3),
            Err(RawBufError::OverlappingRegions { size: 3, .. })
        ));
        assert_eq!(buffer.swap_ranges(1, 1, 0), Ok(()));
    }
    assert_eq!(storage, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_iterators() {
    let mut storage = [5u8, 6, 7, 8];
    let buffer = BoundedBuffer::from_slice(&mut storage);

    let iter = buffer.iter();
    assert_eq!(iter.len(), 4);

    let forward: Vec<u8> = buffer.iter().collect();
    assert_eq!(forward, [5, 6, 7, 8]);

    let reverse: Vec<u8> = buffer.iter().rev().collect();
    assert_eq!(reverse, [8, 7, 6, 5]);

    let mut sum = 0u32;
    for value in &buffer {
        sum += u32::from(value);
    }
    assert_eq!(sum, 26);

    let mut both_ends = buffer.iter();
    assert_eq!(both_ends.next(), Some(5));
    assert_eq!(both_ends.next_back(), Some(8));
    assert_eq!(both_ends.len(), 2);
    assert_eq!(both_ends.clone().count(), 2);
}
