//! Brute-force engine: a linear scan over the whole dictionary.
//!
//! Exists as the correctness oracle for differential tests - when an
//! optimized engine and this one disagree, this one is right. O(n) per
//! query, no index structure at all.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::IndexError;
use crate::term::Term;
use crate::topk::TopKSelector;
use crate::Autocomplete;

/// Reference autocomplete engine scanning every term on every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BruteForceIndex {
    terms: Vec<Term>,
}

impl BruteForceIndex {
    /// Build from parallel word/weight slices.
    ///
    /// Fails on length mismatch, invalid weights, or any duplicated word -
    /// uniqueness is required here so the oracle's answers are unambiguous.
    pub fn new<W: AsRef<str>>(words: &[W], weights: &[f64]) -> Result<Self, IndexError> {
        if words.len() != weights.len() {
            return Err(IndexError::MismatchedLengths {
                words: words.len(),
                weights: weights.len(),
            });
        }
        let mut seen = HashSet::with_capacity(words.len());
        let mut terms = Vec::with_capacity(words.len());
        for (word, &weight) in words.iter().zip(weights) {
            let word = word.as_ref();
            if !seen.insert(word.to_string()) {
                return Err(IndexError::DuplicateWord {
                    word: word.to_string(),
                });
            }
            terms.push(Term::new(word, weight)?);
        }
        Ok(BruteForceIndex { terms })
    }

    /// Number of dictionary entries.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Autocomplete for BruteForceIndex {
    fn top_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        let mut selector = TopKSelector::new(k);
        for term in &self.terms {
            if term.word().starts_with(prefix) {
                selector.offer(term.clone());
            }
        }
        selector
            .into_descending()
            .into_iter()
            .map(|t| t.word().to_string())
            .collect()
    }

    fn top_match(&self, prefix: &str) -> String {
        let mut best: Option<&Term> = None;
        for term in &self.terms {
            if !term.word().starts_with(prefix) {
                continue;
            }
            if best.map_or(true, |b| term.weight() > b.weight()) {
                best = Some(term);
            }
        }
        best.map(|t| t.word().to_string()).unwrap_or_default()
    }

    fn weight_of(&self, term: &str) -> f64 {
        self.terms
            .iter()
            .find(|t| t.word() == term)
            .map_or(0.0, Term::weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> BruteForceIndex {
        BruteForceIndex::new(
            &["ape", "app", "ban", "bat", "bee", "car", "cat"],
            &[6.0, 4.0, 2.0, 3.0, 5.0, 7.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_words() {
        let err = BruteForceIndex::new(&["bee", "ape", "bee"], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            IndexError::DuplicateWord {
                word: "bee".to_string()
            }
        );
    }

    #[test]
    fn scans_match_the_scenario() {
        let oracle = fixture();
        assert_eq!(oracle.top_match(""), "car");
        assert_eq!(oracle.top_match("b"), "bee");
        assert_eq!(oracle.top_matches("", 3), vec!["car", "ape", "bee"]);
        assert!(oracle.top_matches("d", 5).is_empty());
    }

    #[test]
    fn weight_of_is_case_sensitive_value_equality() {
        let oracle = fixture();
        assert_eq!(oracle.weight_of("bee"), 5.0);
        assert_eq!(oracle.weight_of("Bee"), 0.0);
        assert_eq!(oracle.weight_of("be"), 0.0);
    }

    #[test]
    fn zero_weight_word_can_still_win() {
        let oracle = BruteForceIndex::new(&["zzz"], &[0.0]).unwrap();
        assert_eq!(oracle.top_match("z"), "zzz");
        assert_eq!(oracle.top_matches("z", 1), vec!["zzz"]);
    }
}
