// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The dictionary entry type and its ordering strategies.
//!
//! A [`Term`] is a `(word, weight)` pair. The weight is validated once at
//! construction and never changes, so every comparison downstream can treat
//! it as a finite, non-negative `f64`.
//!
//! # Invariants
//!
//! - **Term**: `weight >= 0.0` and finite. `Term::new` is the only way to
//!   build one, so the invariant holds crate-wide.
//! - **PrefixOrder**: two words agreeing on their first `r` characters are
//!   equal under it, regardless of what follows. `r = 0` makes all terms
//!   equal.
//!
//! Orderings are strategy values implementing [`TermOrder`], passed by
//! reference into the binary searches in [`crate::sorted`].

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IndexError;

// =============================================================================
// TERM
// =============================================================================

/// An immutable dictionary entry: a word and its non-negative weight.
///
/// Natural ordering of terms is lexicographic by word; weight-based orders
/// are separate strategies ([`WeightOrder`], [`ReverseWeightOrder`]) so the
/// two never get conflated in a sort call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    word: String,
    weight: f64,
}

impl Term {
    /// Create a term, rejecting negative or non-finite weights.
    ///
    /// NaN fails the same check as a negative weight: `!(weight >= 0.0)`.
    pub fn new(word: impl Into<String>, weight: f64) -> Result<Self, IndexError> {
        let word = word.into();
        if !(weight >= 0.0) || weight.is_infinite() {
            return Err(IndexError::InvalidWeight { word, weight });
        }
        Ok(Term { word, weight })
    }

    /// Zero-weight probe used as a binary-search key. Infallible.
    pub(crate) fn probe(word: &str) -> Self {
        Term {
            word: word.to_string(),
            weight: 0.0,
        }
    }

    /// The word this term consists of.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The term's weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:14.1}\t{}", self.weight, self.word)
    }
}

// =============================================================================
// ORDERING STRATEGIES
// =============================================================================

/// A comparison strategy over two terms.
///
/// Strategies are plain values; the searches in [`crate::sorted`] are generic
/// over them, so a test can wrap one in a call-counting adapter without any
/// trait-object plumbing.
pub trait TermOrder {
    fn compare(&self, a: &Term, b: &Term) -> Ordering;
}

/// Full-word lexicographic comparison. The sort order of every
/// sorted-array index.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexicographic;

impl TermOrder for Lexicographic {
    fn compare(&self, a: &Term, b: &Term) -> Ordering {
        a.word.cmp(&b.word)
    }
}

/// Lexicographic comparison limited to the first `r` characters.
///
/// If either word has fewer than `r` characters, falls back to comparing the
/// full words. Runs in O(r) independent of word length: the character
/// iterators stop at the window edge, and the fallback path can only touch
/// characters before it. No substrings are materialized.
#[derive(Debug, Clone, Copy)]
pub struct PrefixOrder {
    r: usize,
}

impl PrefixOrder {
    /// Any window size is valid; `r = 0` considers all terms equal.
    pub fn new(r: usize) -> Self {
        PrefixOrder { r }
    }
}

impl TermOrder for PrefixOrder {
    fn compare(&self, a: &Term, b: &Term) -> Ordering {
        let mut ca = a.word.chars();
        let mut cb = b.word.chars();
        for _ in 0..self.r {
            match (ca.next(), cb.next()) {
                (Some(x), Some(y)) => match x.cmp(&y) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                },
                // A word ended inside the window: whole-word comparison.
                // Bounded by the shorter word, which is shorter than r.
                _ => return a.word.cmp(&b.word),
            }
        }
        Ordering::Equal
    }
}

/// Total order by weight only, ascending. Equal weights are unordered
/// relative to each other; there is no secondary key.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightOrder;

impl TermOrder for WeightOrder {
    fn compare(&self, a: &Term, b: &Term) -> Ordering {
        // Weights are validated finite, so the fallback never fires.
        a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal)
    }
}

/// Total order by weight only, descending.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseWeightOrder;

impl TermOrder for ReverseWeightOrder {
    fn compare(&self, a: &Term, b: &Term) -> Ordering {
        b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(word: &str, weight: f64) -> Term {
        Term::new(word, weight).expect("valid term")
    }

    #[test]
    fn new_rejects_negative_weight() {
        let err = Term::new("test", -1.0).unwrap_err();
        assert!(matches!(err, IndexError::InvalidWeight { .. }));
    }

    #[test]
    fn new_rejects_nan_and_infinite_weight() {
        assert!(Term::new("test", f64::NAN).is_err());
        assert!(Term::new("test", f64::INFINITY).is_err());
    }

    #[test]
    fn new_accepts_zero_weight() {
        let t = term("", 0.0);
        assert_eq!(t.word(), "");
        assert_eq!(t.weight(), 0.0);
    }

    #[test]
    fn lexicographic_orders_by_word_only() {
        let cmp = Lexicographic;
        assert_eq!(cmp.compare(&term("ape", 1.0), &term("app", 9.0)), Ordering::Less);
        assert_eq!(cmp.compare(&term("bee", 1.0), &term("bee", 9.0)), Ordering::Equal);
    }

    #[test]
    fn prefix_order_ignores_tail_beyond_window() {
        let cmp = PrefixOrder::new(2);
        // "apple" and "apricot" differ at position 1 within the window
        assert_eq!(
            cmp.compare(&term("apple", 0.0), &term("apricot", 0.0)),
            Ordering::Less
        );
        // equal on the first two characters, tails irrelevant
        assert_eq!(
            cmp.compare(&term("apple", 0.0), &term("apnea", 0.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn prefix_order_falls_back_when_word_is_short() {
        let cmp = PrefixOrder::new(4);
        // "app" has fewer than 4 characters: whole-word comparison applies,
        // and a proper prefix sorts before its extension
        assert_eq!(
            cmp.compare(&term("app", 0.0), &term("apple", 0.0)),
            Ordering::Less
        );
        assert_eq!(
            cmp.compare(&term("app", 0.0), &term("app", 0.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn prefix_order_zero_window_equates_everything() {
        let cmp = PrefixOrder::new(0);
        assert_eq!(
            cmp.compare(&term("ape", 6.0), &term("zebra", 1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn prefix_order_counts_characters_not_bytes() {
        let cmp = PrefixOrder::new(2);
        assert_eq!(
            cmp.compare(&term("héron", 0.0), &term("hé", 0.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn weight_orders_are_mirror_images() {
        let light = term("a", 1.0);
        let heavy = term("b", 2.0);
        assert_eq!(WeightOrder.compare(&light, &heavy), Ordering::Less);
        assert_eq!(ReverseWeightOrder.compare(&light, &heavy), Ordering::Greater);
        assert_eq!(
            WeightOrder.compare(&term("x", 3.0), &term("y", 3.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn display_pads_weight_before_word() {
        assert_eq!(format!("{}", term("cat", 1.0)), "           1.0\tcat");
    }
}
