// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity selection of the k highest-weight terms from a stream.
//!
//! A min-heap of at most `k` candidates: the root is always the weakest
//! member, so a stream element either beats it and replaces it, or is
//! dropped in O(1). Memory stays O(k) no matter how many candidates flow
//! through.
//!
//! # Tie-break rule (defined, not incidental)
//!
//! Admission requires a weight **strictly greater** than the current
//! minimum. A candidate whose weight merely equals the weakest held member
//! is dropped, so among equal-weight candidates the one seen earlier wins.
//! Both query engines rely on this rule producing the same multiset.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::term::Term;

/// Wrapper giving `Term` a total order by weight, for use as a heap key.
#[derive(Debug, Clone)]
struct ByWeight(Term);

impl PartialEq for ByWeight {
    fn eq(&self, other: &Self) -> bool {
        self.0.weight().to_bits() == other.0.weight().to_bits()
    }
}

impl Eq for ByWeight {}

impl PartialOrd for ByWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        // Weights are validated finite at Term construction.
        self.0
            .weight()
            .partial_cmp(&other.0.weight())
            .unwrap_or(Ordering::Equal)
    }
}

/// A bounded min-heap retaining the `k` highest-weight terms seen so far.
///
/// Instantiated fresh for each query; never shared across calls.
#[derive(Debug)]
pub struct TopKSelector {
    heap: BinaryHeap<Reverse<ByWeight>>,
    capacity: usize,
}

impl TopKSelector {
    /// A selector holding at most `capacity` terms. `capacity == 0` stays
    /// empty forever.
    pub fn new(capacity: usize) -> Self {
        TopKSelector {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
        }
    }

    /// Offer a candidate. Admitted unconditionally while under capacity;
    /// afterwards only when strictly heavier than the current minimum,
    /// which it evicts.
    pub fn offer(&mut self, term: Term) {
        if self.capacity == 0 {
            return;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(ByWeight(term)));
        } else if let Some(weakest) = self.min_weight() {
            if term.weight() > weakest {
                self.heap.pop();
                self.heap.push(Reverse(ByWeight(term)));
            }
        }
    }

    /// The weight of the weakest held term, `None` while empty.
    pub fn min_weight(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(w)| w.0.weight())
    }

    /// Number of terms currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when nothing is held.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// True once `capacity` terms are held.
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.capacity
    }

    /// Drain into a vector ordered by descending weight. Equal weights are
    /// unordered relative to each other.
    pub fn into_descending(self) -> Vec<Term> {
        // Ascending order of Reverse<ByWeight> is descending weight.
        let terms: Vec<Term> = self
            .heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(w)| w.0)
            .collect();
        #[cfg(debug_assertions)]
        {
            let weights: Vec<f64> = terms.iter().map(Term::weight).collect();
            crate::contracts::check_descending_weights(&weights);
        }
        terms
    }
}
