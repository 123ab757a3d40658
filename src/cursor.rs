// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Position markers: the only thing the algorithms know about a sequence.
//!
//! A sequence is never materialized. It is a half-open range `[first, last)`
//! of two markers, where `last` is reachable from `first` by zero or more
//! calls to [`Position::advance`]. Markers are plain values: advancing one
//! produces a new marker and leaves the old one untouched, so a recursive
//! call can hold on to any marker it was given.
//!
//! | Capability          | Trait method                | Needed by                         |
//! |---------------------|-----------------------------|-----------------------------------|
//! | equality            | `PartialEq`                 | everything                        |
//! | dereference         | [`Position::read`]          | everything                        |
//! | advance-by-one      | [`Position::advance`]       | everything                        |
//! | signed distance     | [`Distance::distance`]      | `equal_bounded`, `search`, `search_n` |
//!
//! [`SliceCursor`] is the one marker shipped here. Anything else (an index
//! into a ring buffer, a cursor over a generated sequence) only has to
//! implement the traits.

use core::fmt;
use core::ptr;

/// A marker into a sequence: comparable, readable, advanceable.
///
/// # Contract
///
/// - `read` is never called on a marker equal to the range's `last`.
/// - `advance` applied enough times to `first` reaches `last`.
///
/// Breaking either is the caller's problem. The algorithms do not check.
pub trait Position: Clone + PartialEq {
    /// What `read` yields. For slice cursors this is a shared reference.
    type Item;

    /// Dereference the marker.
    fn read(&self) -> Self::Item;

    /// The marker one step further along.
    #[must_use]
    fn advance(&self) -> Self;
}

/// Markers whose separation can be measured in O(1).
pub trait Distance: Position {
    /// Number of advances from `self` to `last` (`last - self`).
    ///
    /// Negative when `last` lies before `self`, which only happens for
    /// malformed ranges.
    fn distance(&self, last: &Self) -> isize;
}

/// A position in a borrowed slice.
///
/// Two cursors are equal when they point at the same index of the same
/// slice. Comparing cursors from different slices is allowed and always
/// yields `false`, but never forms a range.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// A cursor at `index`. `index == slice.len()` is the end marker.
    pub const fn new(slice: &'a [T], index: usize) -> Self {
        Self { slice, index }
    }

    /// The index this cursor points at.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The slice this cursor walks.
    pub const fn slice(&self) -> &'a [T] {
        self.slice
    }

    /// Is this the one-past-the-end marker?
    pub const fn is_end(&self) -> bool {
        self.index == self.slice.len()
    }
}

/// The `(first, last)` marker pair covering the whole slice.
///
/// ```
/// use cxalgo::{bounds, find};
///
/// let data = [4, 8, 15, 16, 23, 42];
/// let (first, last) = bounds(&data);
/// assert_eq!(find(first, last, &15).index(), 2);
/// ```
pub const fn bounds<T>(slice: &[T]) -> (SliceCursor<'_, T>, SliceCursor<'_, T>) {
    (SliceCursor::new(slice, 0), SliceCursor::new(slice, slice.len()))
}

// Manual impls: derives would require `T: Clone` / `T: PartialEq`.

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Position for SliceCursor<'a, T> {
    type Item = &'a T;

    /// # Panics
    /// Panics when called on the end marker.
    #[inline]
    fn read(&self) -> &'a T {
        &self.slice[self.index]
    }

    #[inline]
    fn advance(&self) -> Self {
        Self {
            slice: self.slice,
            index: self.index + 1,
        }
    }
}

impl<T> Distance for SliceCursor<'_, T> {
    #[inline]
    fn distance(&self, last: &Self) -> isize {
        last.index as isize - self.index as isize
    }
}
