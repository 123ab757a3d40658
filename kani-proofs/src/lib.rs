// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the cxalgo const layer.
//!
//! The const layer recurses over indices into a slice. These proofs check it
//! against plain loops for every input up to a small length bound.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no out-of-bounds index or usize underflow for any input
//! 2. **Agreement**: each const fn returns what the loop returns
//! 3. **Sentinel**: "not found" is exactly `len`, and a hit really matches

/// Largest slice length the proofs enumerate.
pub const MAX_LEN: usize = 4;

// ============================================================================
// REFERENCE LOOPS
// ============================================================================

/// First index holding `value`, or `s.len()`.
pub fn loop_find(s: &[u8], value: u8) -> usize {
    let mut i = 0;
    while i < s.len() {
        if s[i] == value {
            return i;
        }
        i += 1;
    }
    s.len()
}

/// Start of the first window equal to `needle`, or `hay.len()`.
pub fn loop_search(hay: &[u8], needle: &[u8]) -> usize {
    if needle.len() > hay.len() {
        return hay.len();
    }
    let mut start = 0;
    while start + needle.len() <= hay.len() {
        let mut k = 0;
        while k < needle.len() && hay[start + k] == needle[k] {
            k += 1;
        }
        if k == needle.len() {
            return start;
        }
        start += 1;
    }
    hay.len()
}

/// Start of the first run of `count` copies of `value`, or `s.len()`.
pub fn loop_search_n(s: &[u8], count: usize, value: u8) -> usize {
    if count == 0 {
        return 0;
    }
    let mut run = 0;
    let mut i = 0;
    while i < s.len() {
        run = if s[i] == value { run + 1 } else { 0 };
        if run == count {
            return i + 1 - count;
        }
        i += 1;
    }
    s.len()
}

/// Length of the common prefix of `a` and `b`.
pub fn loop_mismatch(a: &[u8], b: &[u8]) -> usize {
    let mut i = 0;
    while i < a.len() && i < b.len() && a[i] == b[i] {
        i += 1;
    }
    i
}

// ============================================================================
// KANI PROOFS (only compiled under `cargo kani`)
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;
    use cxalgo::konst::u8s;

    /// An arbitrary slice of length `0..=MAX_LEN`, backed by `buf`.
    fn any_slice(buf: &mut [u8; MAX_LEN]) -> &[u8] {
        for b in buf.iter_mut() {
            *b = kani::any();
        }
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        &buf[..len]
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_find_matches_loop() {
        let mut buf = [0u8; MAX_LEN];
        let s = any_slice(&mut buf);
        let value: u8 = kani::any();

        let found = u8s::find(s, value);
        kani::assert(found == loop_find(s, value), "find must agree with loop");
        kani::assert(found <= s.len(), "find stays within [0, len]");
        if found < s.len() {
            kani::assert(s[found] == value, "a hit must hold the value");
        }
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_count_bounded_by_len() {
        let mut buf = [0u8; MAX_LEN];
        let s = any_slice(&mut buf);
        let value: u8 = kani::any();

        let n = u8s::count(s, value);
        kani::assert(n <= s.len(), "count cannot exceed the length");
        kani::assert(
            (n == 0) == (u8s::find(s, value) == s.len()),
            "count is zero exactly when find misses"
        );
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_search_matches_loop() {
        let mut hay_buf = [0u8; MAX_LEN];
        let mut needle_buf = [0u8; MAX_LEN];
        let hay = any_slice(&mut hay_buf);
        let needle = any_slice(&mut needle_buf);

        let found = u8s::search(hay, needle);
        kani::assert(found == loop_search(hay, needle), "search must agree with loop");
        if needle.is_empty() {
            kani::assert(found == 0, "empty needle matches at the start");
        }
    }

    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_search_n_matches_loop() {
        let mut buf = [0u8; MAX_LEN];
        let s = any_slice(&mut buf);
        let count: usize = kani::any_where(|&n| n <= MAX_LEN + 1);
        let value: u8 = kani::any();

        kani::assert(
            u8s::search_n(s, count, value) == loop_search_n(s, count, value),
            "search_n must agree with loop"
        );
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_mismatch_bounded_never_overreads() {
        let mut a_buf = [0u8; MAX_LEN];
        let mut b_buf = [0u8; MAX_LEN];
        let a = any_slice(&mut a_buf);
        let b = any_slice(&mut b_buf);

        let pair = u8s::mismatch_bounded(a, b);
        kani::assert(pair.first == pair.second, "lock-step indices move together");
        kani::assert(pair.first == loop_mismatch(a, b), "mismatch must agree with loop");
        kani::assert(
            u8s::equal_bounded(a, b) == (a.len() == b.len() && pair.first == a.len()),
            "equal_bounded is mismatch reaching both ends"
        );
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_adjacent_find_points_at_pair() {
        let mut buf = [0u8; MAX_LEN];
        let s = any_slice(&mut buf);

        let at = u8s::adjacent_find(s);
        kani::assert(at <= s.len(), "adjacent_find stays within [0, len]");
        if at < s.len() {
            kani::assert(at + 1 < s.len(), "a hit always has a successor");
            kani::assert(s[at] == s[at + 1], "a hit is an equal pair");
        }
    }
}

// ============================================================================
// STANDARD TESTS (run with `cargo test`)
// ============================================================================
