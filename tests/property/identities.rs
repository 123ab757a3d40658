//! Identities the algorithms are defined by.
//!
//! These hold by construction (the quantifiers are written in terms of the
//! find family), so a failure here means someone replaced a composition with
//! an independent recursion that drifted.

use super::common::{small_vec, vec_and_split};
use cxalgo::{
    all_of, any_of, bounds, count, count_if, equal_bounded, find, find_if, find_if_not,
    mismatch_bounded, none_of, search, SliceCursor,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// count(R, v) == size(R) - count_if(R, x != v)
    #[test]
    fn count_complements_count_if(data in small_vec(), value in 0u8..5) {
        let (first, last) = bounds(&data);
        let others = count_if(first, last, |x| *x != value);
        prop_assert_eq!(count(first, last, &value), data.len() - others);
    }

    /// find(R, v) == last iff count(R, v) == 0, and nothing before the hit matches.
    #[test]
    fn find_is_first_occurrence(data in small_vec(), value in 0u8..5) {
        let (first, last) = bounds(&data);
        let found = find(first, last, &value);
        prop_assert_eq!(found == last, count(first, last, &value) == 0);
        prop_assert_eq!(count(first, found, &value), 0);
    }

    /// find_if_not(R, p) == last <=> all_of(R, p)
    #[test]
    fn all_of_is_find_if_not_at_last(data in small_vec(), threshold in 0u8..5) {
        let (first, last) = bounds(&data);
        let below = |x: &u8| *x < threshold;
        prop_assert_eq!(all_of(first, last, below), find_if_not(first, last, below) == last);
    }

    /// any_of / none_of are complements, both defined through find_if.
    #[test]
    fn any_of_and_none_of_complement(data in small_vec(), threshold in 0u8..5) {
        let (first, last) = bounds(&data);
        let below = |x: &u8| *x < threshold;
        prop_assert_eq!(any_of(first, last, below), find_if(first, last, below) != last);
        prop_assert_eq!(none_of(first, last, below), !any_of(first, last, below));
    }

    /// Quantifiers on a sub-range agree with slicing.
    #[test]
    fn subrange_quantifiers((data, split) in vec_and_split()) {
        let first = SliceCursor::new(&data, split);
        let last = SliceCursor::new(&data, data.len());
        let expected = data[split..].iter().all(|x| *x < 2);
        prop_assert_eq!(all_of(first, last, |x| *x < 2), expected);
    }

    /// equal_bounded(R1, R2) <=> mismatch_bounded reaches both ends.
    #[test]
    fn equal_is_mismatch_at_both_ends(a in small_vec(), b in small_vec()) {
        let (first1, last1) = bounds(&a);
        let (first2, last2) = bounds(&b);
        let pair = mismatch_bounded(first1, last1, first2, last2);
        prop_assert_eq!(
            equal_bounded(first1, last1, first2, last2),
            pair.first == last1 && pair.second == last2
        );
    }

    /// A suffix of the haystack is always found, no later than where it was cut.
    #[test]
    fn search_finds_own_slices((data, split) in vec_and_split()) {
        let (first, last) = bounds(&data);
        let needle = &data[split..];
        let (n_first, n_last) = bounds(needle);
        let found = search(first, last, n_first, n_last);
        prop_assert!(found.index() <= split);
        prop_assert_eq!(&data[found.index()..found.index() + needle.len()], needle);
    }
}
