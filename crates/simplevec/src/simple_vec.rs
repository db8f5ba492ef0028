// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::borrow::{Borrow, BorrowMut};
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;
use core::slice::{self, SliceIndex};

use simplevec_buffer::{BufferError, RawBuffer};

use crate::error::SimpleVecError;

/// Test behaviour for injecting allocation failures in `SimpleVec` growth.
///
/// This is only available with the `test-utils` feature and allows users
/// to exercise the error paths of code built on the `try_*` methods.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test-utils feature required in dev-dependencies
/// use simplevec::{SimpleVec, SimpleVecBehaviour, SimpleVecError};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_allocation_failure() -> Result<(), SimpleVecError> {
///         let mut vec = SimpleVec::new();
///         vec.change_behaviour(SimpleVecBehaviour::FailAtGrow);
///
///         assert!(vec.try_push(1u8).is_err());
///
///         vec.change_behaviour(SimpleVecBehaviour::None);
///         vec.try_push(1u8)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SimpleVecBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `try_*` call that needs a new buffer fails with `AllocationFailure`.
    FailAtGrow,
}

/// A growable, contiguous sequence stored in a single [`RawBuffer`].
///
/// Slots `[0, len)` of the buffer hold live values; slots `[len, capacity)`
/// are uninitialized. Capacity never shrinks.
///
/// Growth policy:
/// - `push()` / `insert()` on a full vector reallocate to `max(1, 2 * capacity)`.
/// - `reserve()` / `resize()` reallocate to exactly the requested capacity.
///
/// # Example
///
/// ```rust
/// use simplevec::SimpleVec;
///
/// let mut vec = SimpleVec::new();
/// vec.push(1);
/// vec.push(2);
/// vec.push(3);
///
/// assert_eq!(vec, [1, 2, 3]);
/// assert_eq!(vec.capacity(), 4);
/// ```
pub struct SimpleVec<T> {
    buffer: RawBuffer<T>,
    len: usize,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: SimpleVecBehaviour,
}

impl<T> SimpleVec<T> {
    /// Creates an empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buffer: RawBuffer::new(),
            len: 0,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: SimpleVecBehaviour::None,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: RawBuffer::allocate(capacity),
            len: 0,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: SimpleVecBehaviour::None,
        }
    }

    /// Creates a vector of `len` default values. `len() == capacity() == len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut vec = Self::with_capacity(len);
        vec.fill_to(len, T::default);
        vec
    }

    /// Creates a vector of `len` copies of `value`. `len() == capacity() == len`.
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(len);

        if len > 0 {
            vec.fill_to(len - 1, || value.clone());
            // SAFETY: capacity is `len` and exactly `len - 1` slots are filled.
            unsafe { vec.write_next(value) };
        }

        vec
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Changes the failure injection behaviour.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: SimpleVecBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements the current buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized.
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.len) }
    }

    /// Returns a mutable slice of the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are initialized and `&mut self` is exclusive.
        unsafe { slice::from_raw_parts_mut(self.buffer.as_mut_ptr(), self.len) }
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::IndexOutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, SimpleVecError> {
        let len = self.len;

        self.as_slice()
            .get(index)
            .ok_or(SimpleVecError::IndexOutOfRange { index, len })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::IndexOutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SimpleVecError> {
        let len = self.len;

        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SimpleVecError::IndexOutOfRange { index, len })
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. Checked by `debug_assert!` in debug builds only.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index out of bounds");
        // SAFETY: caller guarantees index addresses a live slot.
        unsafe { &*self.buffer.as_ptr().add(index) }
    }

    /// Returns the element at `index` mutably without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. Checked by `debug_assert!` in debug builds only.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index out of bounds");
        // SAFETY: caller guarantees index addresses a live slot.
        unsafe { &mut *self.buffer.as_mut_ptr().add(index) }
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements in `[new_len, len)`. No-op if `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let tail_len = self.len - new_len;
        // Shrink first: a panicking destructor must not cause a double drop.
        self.len = new_len;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): [new_len, new_len + tail_len) were live and are now outside len
            let tail = ptr::slice_from_raw_parts_mut(self.buffer.as_mut_ptr().add(new_len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// Growing past capacity reallocates to exactly `new_len`.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes to `new_len`, filling new slots with values returned by `f`.
    ///
    /// Growing past capacity reallocates to exactly `new_len`.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        if new_len > self.capacity() {
            self.grow_exact(new_len);
        }

        if new_len > self.len {
            self.fill_to(new_len, f);
        } else {
            self.truncate(new_len);
        }
    }

    /// Appends `value`.
    ///
    /// A full vector grows to `max(1, 2 * capacity)` first.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow_amortized();
        }

        // SAFETY: len < capacity after the growth check.
        unsafe { self.write_next(value) };
    }

    /// Appends `value`, reporting allocation failure instead of aborting.
    ///
    /// On error the vector is unchanged and `value` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::Allocation`] if growing the buffer fails.
    pub fn try_push(&mut self, value: T) -> Result<(), SimpleVecError> {
        if self.len == self.capacity() {
            self.try_grow_amortized()?;
        }

        // SAFETY: len < capacity after the growth check.
        unsafe { self.write_next(value) };

        Ok(())
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        // SAFETY: slot `len` was live and is now outside len, so it is read exactly once.
        Some(unsafe { ptr::read(self.buffer.as_ptr().add(self.len)) })
    }

    /// Ensures `capacity() >= new_capacity`.
    ///
    /// `new_capacity` is the total, not an additional amount. Reallocates to
    /// exactly `new_capacity` when growing. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }

        self.grow_exact(new_capacity);
    }

    /// Fallible form of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::Allocation`] if the new buffer cannot be
    /// acquired. The vector is unchanged in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), SimpleVecError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        self.try_grow_exact(new_capacity)
    }

    /// Removes the element at `index`, dropping it.
    ///
    /// Returns `index`, which now addresses the element that followed the
    /// erased one (or equals `len()` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes and returns the element at `index`, shifting the tail toward the front.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;

        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): index < len, the shifted span [index + 1, len) is live
            let hole = self.buffer.as_mut_ptr().add(index);
            let value = ptr::read(hole);
            ptr::copy(hole.add(1), hole, len - index - 1);
            self.len = len - 1;

            value
        }
    }

    /// Inserts `value` before the element at `index` and returns `index`.
    ///
    /// `index == len()` appends. A full vector grows to `max(1, 2 * capacity)`,
    /// moving the prefix and suffix around the new element in one pass.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        let len = self.len;

        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }

        if len == self.capacity() {
            let mut buffer = RawBuffer::allocate(self.next_capacity().unwrap_or_else(|e| e.raise()));

            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): new buffer holds at least len + 1 slots, blocks are distinct
                let src = self.buffer.as_ptr();
                let dst = buffer.as_mut_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
            }

            // Old block only holds moved-out slots now.
            self.buffer.swap(&mut buffer);
        } else {
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): len < capacity, so slot len is free to receive the last element
                let hole = self.buffer.as_mut_ptr().add(index);
                ptr::copy(hole, hole.add(1), len - index);
                hole.write(value);
            }
        }

        self.len = len + 1;
        index
    }

    /// Exchanges contents and buffers with `other` in O(1).
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        mem::swap(&mut self.len, &mut other.len);
    }

    // -------------------------------------------------------------------------
    // Growth
    // -------------------------------------------------------------------------

    fn next_capacity(&self) -> Result<usize, BufferError> {
        match self.capacity() {
            0 => Ok(1),
            capacity => capacity.checked_mul(2).ok_or(BufferError::CapacityOverflow),
        }
    }

    #[cold]
    #[inline(never)]
    fn grow_amortized(&mut self) {
        let new_capacity = self.next_capacity().unwrap_or_else(|e| e.raise());
        self.grow_exact(new_capacity);
    }

    fn grow_exact(&mut self, new_capacity: usize) {
        self.relocate(RawBuffer::allocate(new_capacity));
    }

    #[cold]
    fn try_grow_amortized(&mut self) -> Result<(), SimpleVecError> {
        let new_capacity = self.next_capacity()?;
        self.try_grow_exact(new_capacity)
    }

    fn try_grow_exact(&mut self, new_capacity: usize) -> Result<(), SimpleVecError> {
        #[cfg(any(test, feature = "test-utils"))]
        if matches!(self.behaviour, SimpleVecBehaviour::FailAtGrow) {
            let layout = core::alloc::Layout::array::<T>(new_capacity)
                .map_err(|_| BufferError::CapacityOverflow)?;
            return Err(BufferError::AllocationFailure { layout }.into());
        }

        self.relocate(RawBuffer::try_allocate(new_capacity)?);

        Ok(())
    }

    /// Moves the live elements into `buffer` and makes it the backing storage.
    fn relocate(&mut self, mut buffer: RawBuffer<T>) {
        debug_assert!(buffer.capacity() >= self.len);

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): both blocks hold at least len slots and are distinct
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), buffer.as_mut_ptr(), self.len);
        }

        // The old block now only holds moved-out slots; dropping it frees memory only.
        self.buffer.swap(&mut buffer);
    }

    /// Writes `value` into slot `len` and bumps `len`.
    ///
    /// # Safety
    ///
    /// `self.len() < self.capacity()`.
    #[inline]
    unsafe fn write_next(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: caller guarantees slot `len` is within the block and free.
        unsafe { self.buffer.slot_mut(self.len).write(value) };
        self.len += 1;
    }

    /// Appends values from `f` until `len() == new_len`.
    ///
    /// Requires `new_len <= capacity()`. `len` is bumped per element so a
    /// panicking `f` leaves every written value owned by the vector.
    fn fill_to<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        assert!(new_len <= self.capacity());

        while self.len < new_len {
            // SAFETY: len < new_len <= capacity.
            unsafe { self.write_next(f()) };
        }
    }

    pub(crate) fn into_raw_parts(self) -> (RawBuffer<T>, usize) {
        let mut this = mem::ManuallyDrop::new(self);
        (mem::take(&mut this.buffer), this.len)
    }
}

impl<T> Drop for SimpleVec<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): slots [0, len) are live; RawBuffer frees the block afterwards
            ptr::drop_in_place(self.as_mut_slice() as *mut [T]);
        }
    }
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVec<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_capacity(self.len);

        for value in self.iter() {
            // SAFETY: capacity is self.len and at most self.len values are written.
            unsafe { vec.write_next(value.clone()) };
        }

        vec
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.reserve(source.len);

        for value in source.iter() {
            // SAFETY: capacity >= source.len after reserve.
            unsafe { self.write_next(value.clone()) };
        }
    }
}

impl<T> core::fmt::Debug for SimpleVec<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for SimpleVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state);
    }
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVec<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for SimpleVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> {
    fn from(array: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);

        for value in array {
            // SAFETY: capacity is N and the array yields exactly N values.
            unsafe { vec.write_next(value) };
        }

        vec
    }
}

impl<T: Clone> From<&[T]> for SimpleVec<T> {
    fn from(values: &[T]) -> Self {
        let mut vec = Self::with_capacity(values.len());

        for value in values {
            // SAFETY: capacity is values.len() and exactly that many values are written.
            unsafe { vec.write_next(value.clone()) };
        }

        vec
    }
}

impl<T> Extend<T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push(*value);
        }
    }
}

impl<T> FromIterator<T> for SimpleVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        <Self as Extend<T>>::extend(&mut vec, iter);
        vec
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
