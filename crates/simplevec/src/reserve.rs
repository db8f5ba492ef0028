// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::simple_vec::SimpleVec;

/// Request for pre-allocated capacity with zero live elements.
///
/// Distinguishes "room for `n`" from "`n` default elements" at construction:
///
/// ```rust
/// use simplevec::{SimpleVec, reserve};
///
/// let reserved: SimpleVec<u32> = SimpleVec::from(reserve(5));
/// assert_eq!(reserved.len(), 0);
/// assert_eq!(reserved.capacity(), 5);
///
/// let filled: SimpleVec<u32> = SimpleVec::with_len(5);
/// assert_eq!(filled.len(), 5);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    /// Creates a request for `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Requested capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveRequest::new`].
pub const fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}

impl<T> From<ReserveRequest> for SimpleVec<T> {
    fn from(request: ReserveRequest) -> Self {
        Self::with_capacity(request.capacity)
    }
}
