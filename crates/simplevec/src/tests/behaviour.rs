// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SimpleVecError;
use crate::{BufferError, SimpleVec, SimpleVecBehaviour};

#[test]
fn test_behaviour_default_is_none() {
    assert_eq!(SimpleVecBehaviour::default(), SimpleVecBehaviour::None);
}

#[test]
fn test_fail_at_grow_try_push() {
    let mut vec = SimpleVec::from([1u32, 2]);
    vec.change_behaviour(SimpleVecBehaviour::FailAtGrow);

    let result = vec.try_push(3);

    assert!(matches!(
        result,
        Err(SimpleVecError::Allocation(BufferError::AllocationFailure { layout }))
            if layout.size() == 4 * core::mem::size_of::<u32>()
    ));
    // Vector is unchanged.
    assert_eq!(vec, [1, 2]);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_fail_at_grow_does_not_affect_push_within_capacity() {
    let mut vec: SimpleVec<u8> = SimpleVec::with_capacity(2);
    vec.change_behaviour(SimpleVecBehaviour::FailAtGrow);

    vec.try_push(1).expect("Failed to try_push(1)");
    vec.try_push(2).expect("Failed to try_push(2)");

    assert!(vec.try_push(3).is_err());
    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_fail_at_grow_try_reserve() {
    let mut vec: SimpleVec<u64> = SimpleVec::new();
    vec.change_behaviour(SimpleVecBehaviour::FailAtGrow);

    let result = vec.try_reserve(10);

    assert!(matches!(
        result,
        Err(SimpleVecError::Allocation(BufferError::AllocationFailure { .. }))
    ));
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_fail_at_grow_try_reserve_within_capacity_succeeds() {
    let mut vec: SimpleVec<u64> = SimpleVec::with_capacity(10);
    vec.change_behaviour(SimpleVecBehaviour::FailAtGrow);

    assert!(vec.try_reserve(5).is_ok());
}

#[test]
fn test_behaviour_is_sticky_until_reset() {
    let mut vec = SimpleVec::new();
    vec.change_behaviour(SimpleVecBehaviour::FailAtGrow);

    assert!(vec.try_push(1u8).is_err());
    assert!(vec.try_push(1u8).is_err());

    vec.change_behaviour(SimpleVecBehaviour::None);

    vec.try_push(1u8).expect("Failed to try_push(1)");
    assert_eq!(vec, [1]);
}

#[test]
fn test_error_display() {
    let error = SimpleVecError::IndexOutOfRange { index: 10, len: 3 };

    assert_eq!(error.to_string(), "index 10 out of range for length 3");
    assert_eq!(
        SimpleVecError::from(BufferError::CapacityOverflow).to_string(),
        "allocation failed: capacity overflow"
    );
}
