// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference oracles shared by unit tests, property tests and fuzz targets.
//!
//! Each oracle is the obvious iterator/slice-method formulation of an
//! algorithm, returning a slice index with `s.len()` as "not found". If an
//! oracle and the recursive implementation disagree, the oracle is right.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

/// Index of the first element equal to `value`.
pub fn oracle_find<T: PartialEq>(s: &[T], value: &T) -> usize {
    s.iter().position(|x| x == value).unwrap_or(s.len())
}

/// Number of elements equal to `value`.
pub fn oracle_count<T: PartialEq>(s: &[T], value: &T) -> usize {
    s.iter().filter(|x| *x == value).count()
}

/// Index of the first element that occurs in `set`.
pub fn oracle_find_first_of<T: PartialEq>(s: &[T], set: &[T]) -> usize {
    s.iter().position(|x| set.contains(x)).unwrap_or(s.len())
}

/// Index where `a` and `b` first differ, or the shorter length.
pub fn oracle_mismatch<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .unwrap_or(a.len().min(b.len()))
}

/// Start of the first occurrence of `needle`.
pub fn oracle_search<T: PartialEq>(hay: &[T], needle: &[T]) -> usize {
    if needle.is_empty() {
        return 0;
    }
    hay.windows(needle.len())
        .position(|w| w == needle)
        .unwrap_or(hay.len())
}

/// Start of the first run of `count` elements equal to `value`.
pub fn oracle_search_n<T: PartialEq>(s: &[T], count: usize, value: &T) -> usize {
    if count == 0 {
        return 0;
    }
    s.windows(count)
        .position(|w| w.iter().all(|x| x == value))
        .unwrap_or(s.len())
}

/// Index of the first element equal to its successor.
pub fn oracle_adjacent_find<T: PartialEq>(s: &[T]) -> usize {
    s.windows(2)
        .position(|w| w[0] == w[1])
        .unwrap_or(s.len())
}

/// Wrapping sum, for comparing folds over arbitrary inputs without overflow.
pub fn oracle_wrapping_sum(s: &[i64], init: i64) -> i64 {
    s.iter().fold(init, |acc, x| acc.wrapping_add(*x))
}

/// Wrapping dot product over the length of `a`.
pub fn oracle_wrapping_dot(a: &[i64], b: &[i64], init: i64) -> i64 {
    a.iter()
        .zip(b)
        .fold(init, |acc, (x, y)| acc.wrapping_add(x.wrapping_mul(*y)))
}
