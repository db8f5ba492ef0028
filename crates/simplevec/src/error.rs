// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for simplevec.

use simplevec_buffer::BufferError;
use thiserror::Error;

/// Error type for `SimpleVec` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SimpleVecError {
    /// Checked access past the last live element.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the vector at the time of the call.
        len: usize,
    },

    /// Storage could not be acquired. Only returned by the `try_*` methods.
    #[error("allocation failed: {0}")]
    Allocation(#[from] BufferError),
}
