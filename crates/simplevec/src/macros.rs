// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`SimpleVec`](crate::SimpleVec) from a literal sequence.
///
/// - `simple_vec![]` is empty.
/// - `simple_vec![a, b, c]` holds the listed elements, `capacity() == len()`.
/// - `simple_vec![value; n]` holds `n` clones of `value`.
///
/// ```rust
/// use simplevec::simple_vec;
///
/// let v = simple_vec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = simple_vec![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! simple_vec {
    () => {
        $crate::SimpleVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVec::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVec::from([$($x),+])
    };
}
