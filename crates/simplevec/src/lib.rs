// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous sequence built directly on a raw heap buffer.
//!
//! `SimpleVec<T>` owns exactly one [`RawBuffer<T>`] and tracks how many of its
//! slots are live. Everything else - growth, relocation, shifting on insert and
//! erase - is implemented here on top of raw slots.
//!
//! # Core Guarantees
//!
//! - **Amortized append**: `push()` on a full vector grows to `max(1, 2 * capacity)`
//!   (0 → 1 → 2 → 4 → 8 ...).
//! - **Tight reservation**: `reserve(n)`, `resize(n)` and `with_capacity(n)`
//!   allocate exactly `n` slots when they grow.
//! - **Monotonic capacity**: nothing shrinks the buffer; `clear()` keeps it.
//! - **Value semantics**: `clone()` is a deep copy into a fresh allocation;
//!   `take()` moves everything out and leaves an empty, reusable vector.
//! - **Checked by default**: `at()` reports [`SimpleVecError::IndexOutOfRange`],
//!   indexing panics, `pop()` returns `Option`. Unchecked access is `unsafe`.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use simplevec::{SimpleVec, SimpleVecError};
//!
//! fn example() -> Result<(), SimpleVecError> {
//!     let mut vec = SimpleVec::new();
//!
//!     vec.push(2);
//!     vec.push(3);
//!     vec.insert(0, 1);
//!     assert_eq!(vec, [1, 2, 3]);
//!
//!     vec.erase(0);
//!     assert_eq!(vec, [2, 3]);
//!
//!     assert_eq!(*vec.at(1)?, 3);
//!     assert!(matches!(
//!         vec.at(10),
//!         Err(SimpleVecError::IndexOutOfRange { index: 10, len: 2 })
//!     ));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Capacity Control
//!
//! ```rust
//! use simplevec::{SimpleVec, reserve};
//!
//! let mut vec: SimpleVec<u64> = SimpleVec::from(reserve(8));
//! assert_eq!(vec.len(), 0);
//! assert_eq!(vec.capacity(), 8);
//!
//! vec.resize(3);
//! assert_eq!(vec, [0, 0, 0]);
//!
//! vec.reserve(4); // already large enough
//! assert_eq!(vec.capacity(), 8);
//!
//! vec.resize(20); // tight growth
//! assert_eq!(vec.capacity(), 20);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject allocation failures into the
//! `try_*` methods:
//!
//! ```toml
//! [dev-dependencies]
//! simplevec = { version = "*", features = ["test-utils"] }
//! ```
//!
//! Then use `SimpleVecBehaviour` to exercise the failure paths.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod cmp;
mod error;
mod into_iter;
mod macros;
mod reserve;
mod simple_vec;

#[cfg(test)]
mod tests;

pub use error::SimpleVecError;
pub use into_iter::IntoIter;
pub use reserve::{ReserveRequest, reserve};
pub use simple_vec::SimpleVec;
pub use simplevec_buffer::{BufferError, RawBuffer};

#[cfg(any(test, feature = "test-utils"))]
pub use simple_vec::SimpleVecBehaviour;
