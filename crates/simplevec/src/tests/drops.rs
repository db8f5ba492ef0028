// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Every constructed element must be dropped exactly once.

use simplevec_test_utils::{DropTracker, Tracked};

use crate::SimpleVec;

fn tracked_vec(tracker: &DropTracker, len: u32) -> SimpleVec<Tracked> {
    (0..len).map(|i| tracker.track(i)).collect()
}

fn values(vec: &SimpleVec<Tracked>) -> Vec<u32> {
    vec.iter().map(Tracked::value).collect()
}

#[test]
fn test_drop_releases_every_element() {
    let tracker = DropTracker::new();

    drop(tracked_vec(&tracker, 10));

    assert_eq!(tracker.created(), 10);
    assert_eq!(tracker.alive(), 0);
}

#[test]
fn test_growth_does_not_drop_moved_elements() {
    let tracker = DropTracker::new();
    let vec = tracked_vec(&tracker, 9);

    // 9 pushes went through 1 → 2 → 4 → 8 → 16
    assert_eq!(vec.capacity(), 16);
    assert_eq!(tracker.dropped(), 0);
    assert_eq!(values(&vec), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_clear_drops_elements() {
    let tracker = DropTracker::new();
    let mut vec = tracked_vec(&tracker, 5);

    vec.clear();

    assert_eq!(tracker.alive(), 0);
    assert_eq!(vec.capacity(), 8);
}

#[test]
fn test_truncate_drops_tail_only() {
    let tracker = DropTracker::new();
    let mut vec = tracked_vec(&tracker, 6);

    vec.truncate(2);

    assert_eq!(tracker.alive(), 2);
    assert_eq!(values(&vec), [0, 1]);
}

#[test]
fn test_resize_down_drops_tail() {
    let tracker = DropTracker::new();
    let mut vec = tracked_vec(&tracker, 4);

    vec.resize_with(1, || unreachable!("shrinking must not construct"));

    assert_eq!(tracker.alive(), 1);
}

#[test]
fn test_resize_up_beyond_capacity_keeps_elements() {
    let tracker = DropTracker::new();
    let mut vec = tracked_vec(&tracker, 3);
    let filler = tracker.clone();

    vec.resize_with(10, || filler.track(100));

    assert_eq!(vec.capacity(), 10);
    assert_eq!(tracker.alive(), 10);
    assert_eq!(tracker.dropped(), 0);
    assert_eq!(values(&vec)[..4], [0, 1, 2, 100]);
}

#[test]
fn test_erase_drops_exactly_one() {
    let tracker = DropTracker::new();
    let mut vec = tracked_vec(&tracker, 5);

    vec.erase(2);

    assert_eq!(tracker.dropped(), 1);
    assert_eq!(values(&vec), [0, 1, 3, 4]);
}

#[test]
fn test_pop_transfers_ownership() {
    let tracker = DropTracker::new();
    let mut vec = tracked_vec(&tracker, 3);

    let last = vec.pop().expect("Failed to pop()");

    assert_eq!(last.value(), 2);
    assert_eq!(tracker.dropped(), 0);

    drop(last);
    assert_eq!(tracker.dropped(), 1);
}

#[test]
fn test_insert_with_and_without_growth() {
    let tracker = DropTracker::new();
    let mut vec = tracked_vec(&tracker, 4);
    assert_eq!(vec.capacity(), 4);

    // Full: takes the reallocating path.
    vec.insert(1, tracker.track(10));
    // Room left: takes the shifting path.
    vec.insert(0, tracker.track(20));

    assert_eq!(values(&vec), [20, 0, 10, 1, 2, 3]);
    assert_eq!(tracker.dropped(), 0);

    drop(vec);
    assert_eq!(tracker.alive(), 0);
}

#[test]
fn test_clone_then_drop_both() {
    let tracker = DropTracker::new();
    let vec = tracked_vec(&tracker, 4);

    let copy = vec.clone();
    assert_eq!(tracker.created(), 8);

    drop(vec);
    assert_eq!(tracker.alive(), 4);

    drop(copy);
    assert_eq!(tracker.alive(), 0);
}

#[test]
fn test_clone_from_drops_previous_contents() {
    let tracker = DropTracker::new();
    let source = tracked_vec(&tracker, 2);
    let mut target = tracked_vec(&tracker, 5);

    target.clone_from(&source);

    assert_eq!(tracker.alive(), 4);
    assert_eq!(values(&target), [0, 1]);
}

#[test]
fn test_take_then_drop() {
    let tracker = DropTracker::new();
    let mut source = tracked_vec(&tracker, 3);

    let moved = source.take();
    drop(source);
    assert_eq!(tracker.alive(), 3);

    drop(moved);
    assert_eq!(tracker.alive(), 0);
}

#[test]
fn test_partially_consumed_into_iter_drops_rest() {
    let tracker = DropTracker::new();
    let vec = tracked_vec(&tracker, 6);

    let mut iter = vec.into_iter();
    let first = iter.next().expect("Failed to next()");
    let last = iter.next_back().expect("Failed to next_back()");

    drop(iter);
    assert_eq!(tracker.alive(), 2);
    assert_eq!((first.value(), last.value()), (0, 5));
}

#[test]
fn test_swap_with_then_drop() {
    let tracker = DropTracker::new();
    let mut a = tracked_vec(&tracker, 2);
    let mut b = tracked_vec(&tracker, 3);

    a.swap_with(&mut b);
    drop(a);

    assert_eq!(tracker.alive(), 2);
    assert_eq!(values(&b), [0, 1]);
}
