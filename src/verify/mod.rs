// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: a validated range type and runtime contracts.
//!
//! Two complementary approaches to catching precondition bugs:
//!
//! 1. **Type-level wrapper** (`ValidatedRange`) that refuses to hold an
//!    inverted range. Check once at the boundary, then trust it.
//!
//! 2. **Runtime contracts** that panic in debug builds when a range handed
//!    to an algorithm is malformed. Zero-cost in release unless the
//!    `contracts` feature is on.
//!
//! Neither changes what an algorithm returns. Precondition violations are
//! never turned into an error result.

mod types;
pub mod contracts;

pub use types::*;
