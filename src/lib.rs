// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

#![no_std]

//! Sequence and numeric algorithms written as pure structural recursion.
//!
//! Every algorithm here walks a half-open range `[first, last)` of position
//! markers the same way: return a base result when `first == last` (or when
//! the current element decides the answer), otherwise recurse with `first`
//! advanced by one. No loops, no mutable locals, no allocation. That shape is
//! what lets the same algorithms run as `const fn` (see [`konst`]) and at run
//! time over any marker type implementing [`Position`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  cursor.rs   │  Position / Distance traits, SliceCursor
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   scan.rs    │────▶│  compare.rs  │────▶│ composite.rs │
//! │ count, find, │     │ equal,       │     │ search,      │
//! │ all/any/none │     │ mismatch     │     │ search_n, .. │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  numeric.rs  │     │   konst.rs   │     │   verify/    │
//! │ accumulate,  │     │ const fn     │     │ contracts,   │
//! │ inner_product│     │ twins        │     │ ValidatedRange│
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # The sentinel convention
//!
//! "Not found" is `last`, never an `Option`. Higher-level algorithms decide
//! "found" by comparing against `last`: `all_of` is literally
//! `find_if_not(..) == last`. Keep that in mind when composing them.
//!
//! # Naming
//!
//! | Suffix      | Meaning                                             |
//! |-------------|-----------------------------------------------------|
//! | (none)      | compares with `==`, combines with `+` / `*`         |
//! | `_by`       | takes the comparison or combining closure           |
//! | `_bounded`  | range 2 has its own end marker                      |
//!
//! # Usage
//!
//! ```
//! use cxalgo::{all_of, bounds, find_if_not, search, search_n};
//!
//! let data = [1, 2, 3, 4, 5];
//! let (first, last) = bounds(&data);
//!
//! let needle = [3, 4];
//! let (n_first, n_last) = bounds(&needle);
//! assert_eq!(search(first, last, n_first, n_last).index(), 2);
//!
//! let positive = |x: &i32| *x > 0;
//! assert!(all_of(first, last, positive));
//! assert_eq!(find_if_not(first, last, positive), last);
//!
//! let runs = [7, 7, 1, 7, 7, 7, 2];
//! let (r_first, r_last) = bounds(&runs);
//! assert_eq!(search_n(r_first, r_last, 3, &7).index(), 3);
//! ```
//!
//! # Recursion depth
//!
//! Recursion depth is O(range length), plus the needle length for `search`.
//! Very long ranges can exhaust the call stack at run time or the const
//! evaluator's budget at build time. That is a property of the design.

#[cfg(test)]
extern crate std;

pub mod compare;
pub mod composite;
pub mod cursor;
pub mod konst;
pub mod numeric;
pub mod pair;
pub mod scan;
pub mod testing;
pub mod verify;

pub use compare::{
    equal, equal_bounded, equal_bounded_by, equal_by, mismatch, mismatch_bounded,
    mismatch_bounded_by, mismatch_by,
};
pub use composite::{
    adjacent_find, adjacent_find_by, find_first_of, find_first_of_by, search, search_by,
    search_n, search_n_by,
};
pub use cursor::{bounds, Distance, Position, SliceCursor};
pub use numeric::{accumulate, accumulate_by, inner_product, inner_product_by};
pub use pair::PositionPair;
pub use scan::{all_of, any_of, count, count_if, find, find_if, find_if_not, none_of};
pub use verify::{RangeError, ValidatedRange};
