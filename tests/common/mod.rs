//! Shared test fixtures.

#![allow(dead_code)]

use wordrank::{Autocomplete, BinarySearchIndex, BruteForceIndex, TrieIndex};

/// The reference scenario dictionary.
pub const SCENARIO_WORDS: [&str; 7] = ["ape", "app", "ban", "bat", "bee", "car", "cat"];
pub const SCENARIO_WEIGHTS: [f64; 7] = [6.0, 4.0, 2.0, 3.0, 5.0, 7.0, 1.0];

/// A dictionary with multi-word entries, shared prefixes, and weights
/// spanning five orders of magnitude.
pub const PEPPER_WORDS: [&str; 7] = [
    "bhut jolokia",
    "capsaicin",
    "carolina reaper",
    "chipotle",
    "habanero",
    "jalapeno",
    "jalapeno membrane",
];
pub const PEPPER_WEIGHTS: [f64; 7] = [
    855_000.0,
    16_000_000.0,
    2_200_000.0,
    3_500.0,
    100_000.0,
    3_500.0,
    10_000.0,
];

/// All three engines built over the same dictionary, labelled for
/// assertion messages.
pub fn all_engines(words: &[&str], weights: &[f64]) -> Vec<(&'static str, Box<dyn Autocomplete>)> {
    vec![
        (
            "sorted",
            Box::new(BinarySearchIndex::new(words, weights).expect("sorted build")),
        ),
        (
            "trie",
            Box::new(TrieIndex::new(words, weights).expect("trie build")),
        ),
        (
            "brute",
            Box::new(BruteForceIndex::new(words, weights).expect("brute build")),
        ),
    ]
}

/// The two real engines only (dictionaries with duplicate words, which the
/// oracle rejects by design).
pub fn real_engines(words: &[&str], weights: &[f64]) -> Vec<(&'static str, Box<dyn Autocomplete>)> {
    vec![
        (
            "sorted",
            Box::new(BinarySearchIndex::new(words, weights).expect("sorted build")),
        ),
        (
            "trie",
            Box::new(TrieIndex::new(words, weights).expect("trie build")),
        ),
    ]
}
