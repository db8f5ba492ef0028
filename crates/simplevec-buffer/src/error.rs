// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for simplevec-buffer.
use core::alloc::Layout;

use thiserror::Error;

/// Errors that can occur while acquiring storage for a [`RawBuffer`](crate::RawBuffer).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The requested slot count does not fit in a valid `Layout`.
    ///
    /// The total size in bytes would exceed `isize::MAX`.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The global allocator could not satisfy the request.
    #[error("memory allocation of {} bytes failed", layout.size())]
    AllocationFailure {
        /// Layout that was requested from the allocator.
        layout: Layout,
    },
}

impl BufferError {
    /// Treats the error as unrecoverable.
    ///
    /// `CapacityOverflow` panics, `AllocationFailure` is forwarded to
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error), which aborts by default.
    #[cold]
    #[inline(never)]
    pub fn raise(self) -> ! {
        match self {
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::AllocationFailure { layout } => alloc::alloc::handle_alloc_error(layout),
        }
    }
}
