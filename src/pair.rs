// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The joint result of the mismatch family.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two markers, one into each range, built once where a scan stops.
///
/// `first` points into range 1 and `second` into range 2, at the same
/// offset from their respective starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionPair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> PositionPair<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Split into a tuple, for destructuring at the call site.
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<PositionPair<A, B>> for (A, B) {
    fn from(pair: PositionPair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A, B> From<(A, B)> for PositionPair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}
