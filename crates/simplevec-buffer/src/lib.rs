// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusive ownership of a single uninitialized heap allocation.
//!
//! [`RawBuffer<T>`] is the storage layer underneath `simplevec`. It owns zero
//! or one block sized for exactly `capacity` values of `T` and frees it on drop.
//! It never tracks which slots are initialized and never runs element
//! destructors - that is the owner's job.
//!
//! # Ownership
//!
//! - No `Clone`: duplicating the handle would create two owners of one block.
//! - Ownership moves only through Rust moves, [`RawBuffer::swap`], or the
//!   [`RawBuffer::release`] / [`RawBuffer::from_raw_parts`] escape hatch.
//! - A zero-capacity buffer owns no allocation.
//!
//! # Failure
//!
//! [`RawBuffer::try_allocate`] reports [`BufferError`]. [`RawBuffer::allocate`]
//! treats the same errors as fatal via [`BufferError::raise`].
//!
//! # Example
//!
//! ```rust
//! use simplevec_buffer::{BufferError, RawBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buffer = RawBuffer::<u32>::try_allocate(4)?;
//!     assert!(buffer.is_allocated());
//!     assert_eq!(buffer.capacity(), 4);
//!
//!     for (i, slot) in buffer.slots_mut().iter_mut().enumerate() {
//!         slot.write(i as u32 * 10);
//!     }
//!
//!     // SAFETY: every slot was written above.
//!     assert_eq!(unsafe { buffer.slot(3).assume_init_read() }, 30);
//!
//!     // Block is freed on drop (u32 needs no per-slot destruction).
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod raw_buffer;

pub use error::BufferError;
pub use raw_buffer::RawBuffer;
