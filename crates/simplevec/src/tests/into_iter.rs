// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::SimpleVec;

#[test]
fn test_into_iter_yields_in_order() {
    let vec = SimpleVec::from([String::from("a"), String::from("b"), String::from("c")]);

    let collected: Vec<String> = vec.into_iter().collect();

    assert_eq!(collected, ["a", "b", "c"]);
}

#[test]
fn test_into_iter_double_ended() {
    let vec = SimpleVec::from([1, 2, 3, 4]);
    let mut iter = vec.into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), &[2, 3]);
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter_exact_size() {
    let vec = SimpleVec::from([1, 2, 3]);
    let mut iter = vec.into_iter();

    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.size_hint(), (2, Some(2)));
}

#[test]
fn test_into_iter_empty() {
    let vec: SimpleVec<u8> = SimpleVec::with_capacity(4);
    let mut iter = vec.into_iter();

    assert_eq!(iter.next(), None);
    assert_eq!(iter.len(), 0);
}

#[test]
fn test_into_iter_as_mut_slice() {
    let vec = SimpleVec::from([1, 2, 3]);
    let mut iter = vec.into_iter();

    iter.as_mut_slice()[0] = 10;

    assert_eq!(iter.collect::<Vec<_>>(), [10, 2, 3]);
}

#[test]
fn test_into_iter_rev() {
    let vec = SimpleVec::from([1, 2, 3]);

    let reversed: SimpleVec<i32> = vec.into_iter().rev().collect();

    assert_eq!(reversed, [3, 2, 1]);
}

#[test]
fn test_into_iter_debug() {
    let vec = SimpleVec::from([1, 2]);
    let iter = vec.into_iter();

    assert_eq!(format!("{:?}", iter), "IntoIter([1, 2])");
}

#[test]
fn test_for_loop_by_value() {
    let vec = SimpleVec::from([1u64, 2, 3]);
    let mut sum = 0;

    for value in vec {
        sum += value;
    }

    assert_eq!(sum, 6);
}
