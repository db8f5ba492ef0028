// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBuffer - Exclusive owner of one uninitialized heap block.
//!
//! Hands out slots, never interprets them. The owner decides which slots are
//! live and is responsible for dropping them.

use alloc::alloc::{alloc, dealloc};
use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::NonNull;

use crate::error::BufferError;

/// Move-only handle over storage for exactly `capacity` values of `T`.
///
/// A zero-capacity buffer owns no allocation. Zero-sized `T` never touches
/// the allocator, whatever the capacity.
///
/// Dropping a `RawBuffer` frees the block but never runs `T`'s destructor:
/// slots are `MaybeUninit<T>` as far as the buffer is concerned.
pub struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates an empty handle. Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates storage for exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if `capacity * size_of::<T>()` exceeds `isize::MAX`.
    /// - [`BufferError::AllocationFailure`] if the global allocator returns null.
    pub fn try_allocate(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| BufferError::CapacityOverflow)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            });
        }

        // SAFETY: layout.size() != 0 was checked above.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(BufferError::AllocationFailure { layout })?;

        Ok(Self {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    /// Allocates storage for exactly `capacity` slots, treating failure as fatal.
    ///
    /// See [`BufferError::raise`].
    pub fn allocate(capacity: usize) -> Self {
        match Self::try_allocate(capacity) {
            Ok(buffer) => buffer,
            Err(e) => e.raise(),
        }
    }

    /// Takes ownership of a block previously handed out by [`release`](Self::release).
    ///
    /// # Safety
    ///
    /// `ptr` and `capacity` must be exactly a pair returned by `release()` on a
    /// `RawBuffer<T>`, and no other handle may own that block.
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, capacity: usize) -> Self {
        Self {
            ptr,
            capacity,
            _owns: PhantomData,
        }
    }

    /// Gives up ownership of the block without freeing it.
    ///
    /// Returns `None` if the handle owns nothing. Afterwards the handle is empty.
    #[must_use = "the block leaks unless handed back to `RawBuffer::from_raw_parts`"]
    pub fn release(&mut self) -> Option<(NonNull<T>, usize)> {
        if !self.is_allocated() {
            return None;
        }

        let released = mem::replace(self, Self::new());
        let parts = (released.ptr, released.capacity);
        mem::forget(released);

        Some(parts)
    }

    /// Number of slots backed by this handle.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the handle currently owns storage for at least one slot.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.capacity != 0
    }

    /// Base pointer of the block. Dangling (but aligned) when nothing is owned.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable base pointer of the block. Dangling (but aligned) when nothing is owned.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.capacity()`.
    #[inline]
    pub unsafe fn slot(&self, index: usize) -> &MaybeUninit<T> {
        debug_assert!(index < self.capacity, "slot index out of bounds");
        // SAFETY: caller guarantees index is within the block.
        unsafe { &*self.ptr.as_ptr().add(index).cast::<MaybeUninit<T>>() }
    }

    /// Returns the slot at `index` mutably without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.capacity()`.
    #[inline]
    pub unsafe fn slot_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(index < self.capacity, "slot index out of bounds");
        // SAFETY: caller guarantees index is within the block.
        unsafe { &mut *self.ptr.as_ptr().add(index).cast::<MaybeUninit<T>>() }
    }

    /// All slots of the block.
    #[inline]
    pub fn slots(&self) -> &[MaybeUninit<T>] {
        // SAFETY: the block holds `capacity` slots, MaybeUninit has no validity requirement.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr().cast(), self.capacity) }
    }

    /// All slots of the block, mutably.
    #[inline]
    pub fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: see `slots()`, and `&mut self` guarantees exclusivity.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), self.capacity) }
    }

    /// Exchanges the owned blocks of two handles. O(1), no slot is touched.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    fn owned_layout(&self) -> Option<Layout> {
        if self.capacity == 0 || mem::size_of::<T>() == 0 {
            return None;
        }

        // Validated when the block was acquired.
        Layout::array::<T>(self.capacity).ok()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.owned_layout() {
            // SAFETY: the block was allocated by the global allocator with this exact layout.
            unsafe { dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Safety: RawBuffer uniquely owns its block, so it is as thread-safe as T itself.
unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> core::fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBuffer")
            .field("capacity", &self.capacity)
            .field("allocated", &self.is_allocated())
            .finish_non_exhaustive()
    }
}
