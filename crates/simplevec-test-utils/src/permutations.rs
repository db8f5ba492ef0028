// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation utilities for exhaustive testing.

/// Calls `visit` once with every ordering of `[0, 1, ..., len - 1]`.
///
/// Iterative Heap's algorithm: each ordering differs from the previous one
/// by a single swap. `len == 0` visits nothing.
///
/// # Example
/// ```
/// use simplevec_test_utils::for_each_permutation;
///
/// let mut count = 0;
/// for_each_permutation(3, |_order| count += 1);
/// assert_eq!(count, 6); // 3! = 6
/// ```
pub fn for_each_permutation<F>(len: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut order: Vec<usize> = (0..len).collect();
    let mut counters = vec![0usize; len];

    visit(&order);

    let mut i = 1;
    while i < len {
        if counters[i] < i {
            if i % 2 == 0 {
                order.swap(0, i);
            } else {
                order.swap(counters[i], i);
            }

            visit(&order);

            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

/// Returns `values` rearranged so that position `i` holds `values[order[i]]`.
///
/// # Example
/// ```
/// use simplevec_test_utils::arrange;
///
/// assert_eq!(arrange(&['a', 'b', 'c'], &[2, 0, 1]), ['c', 'a', 'b']);
/// ```
pub fn arrange<T: Clone>(values: &[T], order: &[usize]) -> Vec<T> {
    assert_eq!(values.len(), order.len(), "order must cover every value");

    order.iter().map(|&i| values[i].clone()).collect()
}
