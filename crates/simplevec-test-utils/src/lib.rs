// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for simplevec crates.
//!
//! - [`for_each_permutation`] / [`arrange`]: drive a test through every
//!   ordering of a small input.
//! - [`DropTracker`] / [`Tracked`]: elements that count their own
//!   construction and destruction, for checking that a container drops
//!   every value exactly once.

mod drop_tracker;
mod permutations;

pub use drop_tracker::{DropTracker, Tracked};
pub use permutations::{arrange, for_each_permutation};
