// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode invariant checks.
//!
//! Zero-cost in release builds (`debug_assert!`), panicking early in debug
//! builds when a structural invariant is violated. Constructors call these
//! at the seam where the invariant is supposed to start holding.

use crate::term::Term;

/// Check that a slice of terms is sorted lexicographically by word.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_terms_sorted(terms: &[Term]) {
    debug_assert!(
        terms.windows(2).all(|w| w[0].word() <= w[1].word()),
        "terms not in lexicographic order"
    );
}

/// Check that a weight sequence is non-increasing, as every drained
/// top-k result must be.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_descending_weights(weights: &[f64]) {
    debug_assert!(
        weights.windows(2).all(|w| w[0] >= w[1]),
        "result weights not in descending order"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_terms_pass() {
        let terms = [
            Term::new("ape", 6.0).unwrap(),
            Term::new("app", 4.0).unwrap(),
            Term::new("bee", 5.0).unwrap(),
        ];
        check_terms_sorted(&terms);
    }

    #[test]
    #[should_panic(expected = "lexicographic")]
    #[cfg(debug_assertions)]
    fn unsorted_terms_panic_in_debug() {
        let terms = [Term::new("bee", 5.0).unwrap(), Term::new("ape", 6.0).unwrap()];
        check_terms_sorted(&terms);
    }

    #[test]
    fn descending_weights_pass() {
        check_descending_weights(&[7.0, 6.0, 6.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "descending")]
    #[cfg(debug_assertions)]
    fn ascending_weights_panic_in_debug() {
        check_descending_weights(&[1.0, 2.0]);
    }
}
