//! Sorted-array engine: binary search bounds the prefix range, then a
//! bounded selector scans it.
//!
//! The dictionary is sorted lexicographically once at construction. A query
//! never inspects more than `1 + ceil(log2 n)` terms per boundary search
//! plus the matching range itself, and never mutates anything, so a built
//! index is safe for unsynchronized concurrent reads.
//!
//! The two boundary searches are generalized over a [`TermOrder`] strategy
//! and a probe key. They are exposed publicly: tests wrap the strategy in a
//! call-counting adapter to pin the comparison budget.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::contracts;
use crate::error::IndexError;
use crate::term::{Lexicographic, PrefixOrder, Term, TermOrder};
use crate::topk::TopKSelector;
use crate::Autocomplete;

// =============================================================================
// GENERALIZED BINARY SEARCH
// =============================================================================

/// Lowest index whose element the comparator considers equal to `key`,
/// or `None` if no element does.
///
/// Invokes the comparator at most `1 + ceil(log2 n)` times. The slice is
/// never reordered or mutated. Degenerate comparators are handled: one that
/// considers everything equal yields index 0.
pub fn first_index_of<C: TermOrder>(terms: &[Term], key: &Term, order: &C) -> Option<usize> {
    if terms.is_empty() {
        return None;
    }
    // Frame: positions at or before `low` compare Less (with a virtual
    // -infinity at index -1); `high` always holds the current candidate.
    let mut low: isize = -1;
    let mut high: isize = terms.len() as isize - 1;
    while low + 1 != high {
        let mid = (low + high) / 2;
        if order.compare(&terms[mid as usize], key) == Ordering::Less {
            low = mid;
        } else {
            high = mid;
        }
    }
    if order.compare(&terms[high as usize], key) == Ordering::Equal {
        Some(high as usize)
    } else {
        None
    }
}

/// Highest index whose element the comparator considers equal to `key`,
/// or `None` if no element does.
///
/// Same comparator budget and read-only guarantee as [`first_index_of`].
/// An always-equal comparator yields the last index.
pub fn last_index_of<C: TermOrder>(terms: &[Term], key: &Term, order: &C) -> Option<usize> {
    if terms.is_empty() {
        return None;
    }
    // Mirror frame: positions at or after `high` compare Greater (with a
    // virtual +infinity at index n); `low` holds the current candidate.
    let mut low: usize = 0;
    let mut high: usize = terms.len();
    while low + 1 != high {
        let mid = (low + high) / 2;
        if order.compare(&terms[mid], key) != Ordering::Greater {
            low = mid;
        } else {
            high = mid;
        }
    }
    if order.compare(&terms[low], key) == Ordering::Equal {
        Some(low)
    } else {
        None
    }
}

// =============================================================================
// ENGINE
// =============================================================================

/// Autocomplete over a lexicographically sorted array of terms.
///
/// Construction sorts once (in parallel under the `parallel` feature);
/// afterwards the array is immutable and every query is `&self`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinarySearchIndex {
    terms: Vec<Term>,
}

impl BinarySearchIndex {
    /// Build from parallel word/weight slices.
    ///
    /// Fails on length mismatch or any invalid weight; a failed build
    /// returns no index at all. Duplicate words are allowed and all kept.
    pub fn new<W: AsRef<str>>(words: &[W], weights: &[f64]) -> Result<Self, IndexError> {
        if words.len() != weights.len() {
            return Err(IndexError::MismatchedLengths {
                words: words.len(),
                weights: weights.len(),
            });
        }
        let mut terms = Vec::with_capacity(words.len());
        for (word, &weight) in words.iter().zip(weights) {
            terms.push(Term::new(word.as_ref(), weight)?);
        }
        #[cfg(feature = "parallel")]
        terms.par_sort_by(|a, b| Lexicographic.compare(a, b));
        #[cfg(not(feature = "parallel"))]
        terms.sort_by(|a, b| Lexicographic.compare(a, b));

        contracts::check_terms_sorted(&terms);
        Ok(BinarySearchIndex { terms })
    }

    /// Number of dictionary entries, duplicates included.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Inclusive index range of terms matching `prefix`, if any match.
    fn prefix_range(&self, prefix: &str) -> Option<(usize, usize)> {
        let probe = Term::probe(prefix);
        let order = PrefixOrder::new(prefix.chars().count());
        let low = first_index_of(&self.terms, &probe, &order)?;
        let high = last_index_of(&self.terms, &probe, &order)?;
        Some((low, high))
    }
}

impl Autocomplete for BinarySearchIndex {
    fn top_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        if k == 0 {
            return Vec::new();
        }
        let Some((low, high)) = self.prefix_range(prefix) else {
            return Vec::new();
        };
        let mut selector = TopKSelector::new(k);
        for term in &self.terms[low..=high] {
            selector.offer(term.clone());
        }
        selector
            .into_descending()
            .into_iter()
            .map(|t| t.word().to_string())
            .collect()
    }

    fn top_match(&self, prefix: &str) -> String {
        let Some((low, high)) = self.prefix_range(prefix) else {
            return String::new();
        };
        let mut best: Option<&Term> = None;
        for term in &self.terms[low..=high] {
            // Strictly greater only: the first of an equal-weight run wins,
            // and array order makes that the lexicographically smallest.
            if best.map_or(true, |b| term.weight() > b.weight()) {
                best = Some(term);
            }
        }
        best.map(|t| t.word().to_string()).unwrap_or_default()
    }

    fn weight_of(&self, term: &str) -> f64 {
        let probe = Term::probe(term);
        match first_index_of(&self.terms, &probe, &Lexicographic) {
            Some(index) => self.terms[index].weight(),
            None => 0.0,
        }
    }
}
