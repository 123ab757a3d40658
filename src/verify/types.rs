// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A range type that makes an inverted range unrepresentable.
//!
//! The algorithms take bare marker pairs and trust them. When the markers come
//! from somewhere you don't control, wrap them in [`ValidatedRange`] first: the
//! check is paid once at construction, and everything downstream can rely on
//! `last` being reachable from `first`.
//!
//! ```
//! use cxalgo::verify::{RangeError, ValidatedRange};
//! use cxalgo::{count, SliceCursor};
//!
//! let data = [3, 1, 3, 3];
//! let range = ValidatedRange::new(SliceCursor::new(&data, 1), SliceCursor::new(&data, 4))?;
//! let (first, last) = range.into_bounds();
//! assert_eq!(count(first, last, &3), 2);
//!
//! let inverted = ValidatedRange::new(SliceCursor::new(&data, 3), SliceCursor::new(&data, 1));
//! assert_eq!(inverted.unwrap_err(), RangeError::Inverted { distance: -2 });
//! # Ok::<(), RangeError>(())
//! ```

use crate::cursor::Distance;
use thiserror::Error;

/// Error type for range invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// `last` lies before `first`.
    #[error("range is inverted: last - first = {distance}")]
    Inverted { distance: isize },
}

/// A half-open range `[first, last)` with `last - first >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRange<C> {
    first: C,
    last: C,
}

impl<C: Distance> ValidatedRange<C> {
    /// Validate a marker pair.
    ///
    /// Returns `Err` if `last` lies before `first`.
    pub fn new(first: C, last: C) -> Result<Self, RangeError> {
        let distance = first.distance(&last);
        if distance < 0 {
            return Err(RangeError::Inverted { distance });
        }
        Ok(Self { first, last })
    }

    /// Number of elements in the range.
    pub fn len(&self) -> usize {
        // Non-negative by construction
        self.first.distance(&self.last).unsigned_abs()
    }

    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    pub fn first(&self) -> &C {
        &self.first
    }

    pub fn last(&self) -> &C {
        &self.last
    }

    /// Give the markers back, ready to pass to an algorithm.
    pub fn into_bounds(self) -> (C, C) {
        (self.first, self.last)
    }
}
