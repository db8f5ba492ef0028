// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Construction / destruction accounting for container tests.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counters {
    created: Cell<usize>,
    dropped: Cell<usize>,
}

/// Hands out [`Tracked`] values and counts how many were created and dropped.
///
/// # Example
/// ```
/// use simplevec_test_utils::DropTracker;
///
/// let tracker = DropTracker::new();
/// let a = tracker.track(1);
/// let b = a.clone();
///
/// assert_eq!(tracker.alive(), 2);
/// drop(a);
/// drop(b);
/// assert_eq!(tracker.alive(), 0);
/// assert_eq!(tracker.dropped(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct DropTracker {
    counters: Rc<Counters>,
}

impl DropTracker {
    /// Creates a tracker with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracked value.
    pub fn track(&self, value: u32) -> Tracked {
        self.counters.created.set(self.counters.created.get() + 1);

        Tracked {
            value,
            counters: Rc::clone(&self.counters),
        }
    }

    /// Values created so far, clones included.
    pub fn created(&self) -> usize {
        self.counters.created.get()
    }

    /// Values dropped so far.
    pub fn dropped(&self) -> usize {
        self.counters.dropped.get()
    }

    /// Values created but not yet dropped.
    pub fn alive(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// A `u32` that reports its construction and destruction to a [`DropTracker`].
///
/// Dropping the same value twice trips an assertion.
#[derive(Debug)]
pub struct Tracked {
    value: u32,
    counters: Rc<Counters>,
}

impl Tracked {
    /// Wrapped value.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counters.created.set(self.counters.created.get() + 1);

        Self {
            value: self.value,
            counters: Rc::clone(&self.counters),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl Drop for Tracked {
    fn drop(&mut self) {
        let dropped = self.counters.dropped.get() + 1;
        assert!(
            dropped <= self.counters.created.get(),
            "more drops than constructions (double drop)"
        );
        self.counters.dropped.set(dropped);
    }
}
