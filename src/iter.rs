use core::marker::PhantomData;

use crate::buffer::BoundedBuffer;
use crate::element::read_unchecked;

/// Iterator over copies of the elements in a `BoundedBuffer`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct BoundedBufferIter<'a, T: Copy> {
    ptr: *const T,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a [T]>,
}

impl<T: Copy> Iterator for BoundedBufferIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        // SAFETY: front < back <= capacity of the borrowed buffer.
        let item = unsafe { read_unchecked(self.ptr, self.front) };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Copy> DoubleEndedIterator for BoundedBufferIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: back < capacity of the borrowed buffer.
        Some(unsafe { read_unchecked(self.ptr, self.back) })
    }
}

impl<T: Copy> ExactSizeIterator for BoundedBufferIter<'_, T> {}

impl<'s, T: Copy> IntoIterator for &'s BoundedBuffer<'_, T> {
    type Item = T;
    type IntoIter = BoundedBufferIter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        BoundedBufferIter {
            ptr: self.as_ptr(),
            front: 0,
            back: self.capacity(),
            _marker: PhantomData,
        }
    }
}
