// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The algorithms as `const fn`, for results computed at build time.
//!
//! Stable Rust cannot call trait methods or closures inside a `const fn`, so
//! the generic cursor layer cannot be const. This module restates every
//! algorithm that needs only `==`, `+` and `*` for one concrete element type
//! at a time, with slice indices as position markers:
//!
//! - a range is a whole slice `s`, and `s.len()` is `last`
//! - "not found" is `s.len()`, exactly as the generic layer returns `last`
//! - each function is the same structural recursion as its generic twin
//!
//! ```
//! use cxalgo::konst::u32s;
//!
//! const PRIMES: [u32; 6] = [2, 3, 5, 7, 11, 13];
//! const SUM: u32 = u32s::accumulate(&PRIMES, 0);
//! const AT: usize = u32s::find(&PRIMES, 7);
//! const _: () = assert!(SUM == 41 && AT == 3);
//! ```
//!
//! [`const_algorithms!`](crate::const_algorithms) generates one of these
//! modules; the crate instantiates it for the primitive integers. Other
//! primitive integer types (`u128`, `i128`) can be instantiated the same way.
//!
//! Reading past the end of a slice (a too-short second range for `equal`,
//! `mismatch` or `inner_product`) is a compile error in const context and an
//! index panic at run time. Overflow in `accumulate`/`inner_product` is
//! likewise a compile error or a debug-build panic.

/// Generate a module of `const fn` algorithms over `&[$t]`.
///
/// ```
/// cxalgo::const_algorithms!(
///     /// Algorithms over `u128`.
///     pub mod wide: u128
/// );
///
/// const TOTAL: u128 = wide::inner_product(&[1, 2], &[3, 4], 0);
/// assert_eq!(TOTAL, 11);
/// ```
#[macro_export]
macro_rules! const_algorithms {
    ($(#[$meta:meta])* $vis:vis mod $name:ident : $t:ty) => {
        $(#[$meta])*
        $vis mod $name {
            /// Number of elements equal to `value`.
            pub const fn count(s: &[$t], value: $t) -> usize {
                count_from(s, value, 0, 0)
            }

            const fn count_from(s: &[$t], value: $t, first: usize, sofar: usize) -> usize {
                if first == s.len() {
                    sofar
                } else {
                    let hit = if s[first] == value { 1 } else { 0 };
                    count_from(s, value, first + 1, sofar + hit)
                }
            }

            /// Index of the first element equal to `value`, or `s.len()`.
            pub const fn find(s: &[$t], value: $t) -> usize {
                find_from(s, value, 0)
            }

            const fn find_from(s: &[$t], value: $t, first: usize) -> usize {
                if first == s.len() || s[first] == value {
                    first
                } else {
                    find_from(s, value, first + 1)
                }
            }

            /// Is `a` equal to the first `a.len()` elements of `b`?
            ///
            /// `b` must be at least as long as `a`.
            pub const fn equal(a: &[$t], b: &[$t]) -> bool {
                equal_from(a, b, 0, 0)
            }

            /// Are `a` and `b` the same length and element-wise equal?
            pub const fn equal_bounded(a: &[$t], b: &[$t]) -> bool {
                if a.len() != b.len() {
                    false
                } else {
                    equal_from(a, b, 0, 0)
                }
            }

            // Compares a[i..] against b[j..], bounded by a.
            const fn equal_from(a: &[$t], b: &[$t], i: usize, j: usize) -> bool {
                if i == a.len() {
                    true
                } else if a[i] != b[j] {
                    false
                } else {
                    equal_from(a, b, i + 1, j + 1)
                }
            }

            /// Indices of the first differing pair, or `(a.len(), a.len())`.
            ///
            /// `b` must be at least as long as `a`.
            pub const fn mismatch(a: &[$t], b: &[$t]) -> $crate::PositionPair<usize, usize> {
                mismatch_from(a, b, 0, a.len())
            }

            /// Indices of the first differing pair, stopping at the shorter slice.
            pub const fn mismatch_bounded(
                a: &[$t],
                b: &[$t],
            ) -> $crate::PositionPair<usize, usize> {
                let shorter = if a.len() < b.len() { a.len() } else { b.len() };
                mismatch_from(a, b, 0, shorter)
            }

            const fn mismatch_from(
                a: &[$t],
                b: &[$t],
                first: usize,
                last: usize,
            ) -> $crate::PositionPair<usize, usize> {
                if first == last || a[first] != b[first] {
                    $crate::PositionPair::new(first, first)
                } else {
                    mismatch_from(a, b, first + 1, last)
                }
            }

            /// Index of the first element of `s` that occurs in `set`, or `s.len()`.
            pub const fn find_first_of(s: &[$t], set: &[$t]) -> usize {
                find_first_of_from(s, set, 0)
            }

            const fn find_first_of_from(s: &[$t], set: &[$t], first: usize) -> usize {
                if first == s.len() || find(set, s[first]) != set.len() {
                    first
                } else {
                    find_first_of_from(s, set, first + 1)
                }
            }

            /// Index of the first element equal to its successor, or `s.len()`.
            pub const fn adjacent_find(s: &[$t]) -> usize {
                adjacent_find_from(s, 0)
            }

            const fn adjacent_find_from(s: &[$t], first: usize) -> usize {
                if s.len() - first <= 1 {
                    s.len()
                } else if s[first] == s[first + 1] {
                    first
                } else {
                    adjacent_find_from(s, first + 1)
                }
            }

            /// Start of the first occurrence of `needle` in `hay`, or `hay.len()`.
            pub const fn search(hay: &[$t], needle: &[$t]) -> usize {
                search_from(hay, needle, 0)
            }

            const fn search_from(hay: &[$t], needle: &[$t], first: usize) -> usize {
                if needle.len() > hay.len() - first {
                    hay.len()
                } else if equal_from(needle, hay, 0, first) {
                    first
                } else {
                    search_from(hay, needle, first + 1)
                }
            }

            /// Start of the first run of `count` elements equal to `value`, or `s.len()`.
            pub const fn search_n(s: &[$t], count: usize, value: $t) -> usize {
                search_n_from(s, count, value, 0, 0, 0)
            }

            const fn search_n_from(
                s: &[$t],
                count: usize,
                value: $t,
                first: usize,
                start: usize,
                sofar: usize,
            ) -> usize {
                if count - sofar > s.len() - first {
                    s.len()
                } else if sofar == count {
                    start
                } else if s[first] == value {
                    search_n_from(s, count, value, first + 1, start, sofar + 1)
                } else {
                    search_n_from(s, count, value, first + 1, first + 1, 0)
                }
            }

            /// `init + s[0] + s[1] + ...`.
            pub const fn accumulate(s: &[$t], init: $t) -> $t {
                accumulate_from(s, 0, init)
            }

            const fn accumulate_from(s: &[$t], first: usize, acc: $t) -> $t {
                if first == s.len() {
                    acc
                } else {
                    accumulate_from(s, first + 1, acc + s[first])
                }
            }

            /// `init + a[0]*b[0] + a[1]*b[1] + ...` over the length of `a`.
            ///
            /// `b` must be at least as long as `a`.
            pub const fn inner_product(a: &[$t], b: &[$t], init: $t) -> $t {
                inner_product_from(a, b, 0, init)
            }

            const fn inner_product_from(a: &[$t], b: &[$t], first: usize, acc: $t) -> $t {
                if first == a.len() {
                    acc
                } else {
                    inner_product_from(a, b, first + 1, acc + a[first] * b[first])
                }
            }
        }
    };
}

const_algorithms!(
    /// Const algorithms over `u8` (and byte strings).
    pub mod u8s: u8
);
const_algorithms!(
    /// Const algorithms over `u16`.
    pub mod u16s: u16
);
const_algorithms!(
    /// Const algorithms over `u32`.
    pub mod u32s: u32
);
const_algorithms!(
    /// Const algorithms over `u64`.
    pub mod u64s: u64
);
const_algorithms!(
    /// Const algorithms over `usize`.
    pub mod usizes: usize
);
const_algorithms!(
    /// Const algorithms over `i8`.
    pub mod i8s: i8
);
const_algorithms!(
    /// Const algorithms over `i16`.
    pub mod i16s: i16
);
const_algorithms!(
    /// Const algorithms over `i32`.
    pub mod i32s: i32
);
const_algorithms!(
    /// Const algorithms over `i64`.
    pub mod i64s: i64
);
const_algorithms!(
    /// Const algorithms over `isize`.
    pub mod isizes: isize
);
