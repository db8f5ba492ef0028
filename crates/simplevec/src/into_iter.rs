// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use simplevec_buffer::RawBuffer;

use crate::simple_vec::SimpleVec;

/// Owning iterator over the elements of a [`SimpleVec`].
///
/// Slots `[start, end)` of the taken buffer are still live. Elements not
/// yielded are dropped with the iterator.
pub struct IntoIter<T> {
    buffer: RawBuffer<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [start, end) are live.
        unsafe { slice::from_raw_parts(self.buffer.as_ptr().add(self.start), self.end - self.start) }
    }

    /// Remaining elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.end - self.start;
        // SAFETY: slots [start, end) are live and `&mut self` is exclusive.
        unsafe { slice::from_raw_parts_mut(self.buffer.as_mut_ptr().add(self.start), len) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        let index = self.start;
        self.start += 1;

        // SAFETY: slot `index` was live and is now outside [start, end), so it is read once.
        Some(unsafe { ptr::read(self.buffer.as_ptr().add(index)) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;

        // SAFETY: slot `end` was live and is now outside [start, end), so it is read once.
        Some(unsafe { ptr::read(self.buffer.as_ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): only [start, end) is still live
            ptr::drop_in_place(self.as_mut_slice() as *mut [T]);
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buffer, len) = self.into_raw_parts();

        IntoIter {
            buffer,
            start: 0,
            end: len,
        }
    }
}
