// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trie engine: best-first search pruned by a cached subtree maximum.
//!
//! Nodes live in an index-addressed arena (`Vec<TrieNode>`, root at 0) with
//! no parent pointers; children are a `BTreeMap<char, usize>` so every
//! traversal enumerates them in one deterministic order regardless of how
//! the dictionary was permuted at construction.
//!
//! # The pruning bound
//!
//! Every node caches `subtree_max`: the greatest weight among all complete
//! words at or below it. That makes `subtree_max` an admissible upper bound
//! on anything a subtree can still produce, which is what lets the top-k
//! query walk nodes best-first and stop as soon as no frontier entry can
//! beat the weakest held candidate.
//!
//! # Invariant
//!
//! After every insertion, `subtree_max(n) >= subtree_max(c)` for each child
//! `c`, and `>= n`'s own weight when `n` terminates a word. Insertion
//! recomputes the cache bottom-up along the touched path instead of only
//! raising it, so re-inserting a word with a *lower* weight leaves the
//! cache exact as well.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use serde::{Deserialize, Serialize};

use crate::error::IndexError;
use crate::term::Term;
use crate::topk::TopKSelector;
use crate::Autocomplete;

const ROOT: usize = 0;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrieNode {
    children: BTreeMap<char, usize>,
    /// The complete word and weight, present iff this node terminates one.
    term: Option<Term>,
    /// Greatest weight among all complete words in this subtree, itself
    /// included. `NEG_INFINITY` only while no word runs through the node.
    subtree_max: f64,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode {
            children: BTreeMap::new(),
            term: None,
            subtree_max: f64::NEG_INFINITY,
        }
    }

    fn own_weight(&self) -> f64 {
        self.term.as_ref().map_or(f64::NEG_INFINITY, Term::weight)
    }
}

/// Frontier entry: a node tagged with the best weight its subtree can
/// still yield. Max-heap order by that bound.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    bound: f64,
    node: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.bound.to_bits() == other.bound.to_bits()
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound
            .partial_cmp(&other.bound)
            .unwrap_or(Ordering::Equal)
    }
}

/// Autocomplete over a character trie with cached subtree maxima.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieIndex {
    nodes: Vec<TrieNode>,
}

impl TrieIndex {
    /// Build from parallel word/weight slices.
    ///
    /// Fails on length mismatch or any invalid weight. A word appearing
    /// more than once keeps its last weight.
    pub fn new<W: AsRef<str>>(words: &[W], weights: &[f64]) -> Result<Self, IndexError> {
        if words.len() != weights.len() {
            return Err(IndexError::MismatchedLengths {
                words: words.len(),
                weights: weights.len(),
            });
        }
        let mut index = TrieIndex {
            nodes: vec![TrieNode::new()],
        };
        for (word, &weight) in words.iter().zip(weights) {
            index.insert(word.as_ref(), weight)?;
        }
        #[cfg(debug_assertions)]
        index.assert_subtree_max();
        Ok(index)
    }

    /// Number of complete words stored.
    pub fn word_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.term.is_some()).count()
    }

    /// Number of arena nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, word: &str, weight: f64) -> Result<(), IndexError> {
        let term = Term::new(word, weight)?;

        let mut path = Vec::with_capacity(word.len() + 1);
        let mut current = ROOT;
        path.push(current);
        for ch in word.chars() {
            let next = match self.nodes[current].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[current].children.insert(ch, child);
                    child
                }
            };
            path.push(next);
            current = next;
        }
        self.nodes[current].term = Some(term);

        // Refresh the cache bottom-up along the touched path. Children off
        // the path are untouched and already exact, so a single max over
        // them plus the node's own weight restores the invariant even when
        // the terminal weight just went down.
        for &id in path.iter().rev() {
            let over_children = self.nodes[id]
                .children
                .values()
                .map(|&child| self.nodes[child].subtree_max)
                .fold(f64::NEG_INFINITY, f64::max);
            self.nodes[id].subtree_max = self.nodes[id].own_weight().max(over_children);
        }
        Ok(())
    }

    /// Arena id of the node spelling `prefix`, if that path exists.
    fn node_at(&self, prefix: &str) -> Option<usize> {
        let mut current = ROOT;
        for ch in prefix.chars() {
            current = *self.nodes[current].children.get(&ch)?;
        }
        Some(current)
    }

    #[cfg(debug_assertions)]
    fn assert_subtree_max(&self) {
        for node in &self.nodes {
            let over_children = node
                .children
                .values()
                .map(|&child| self.nodes[child].subtree_max)
                .fold(f64::NEG_INFINITY, f64::max);
            debug_assert!(
                node.subtree_max == node.own_weight().max(over_children),
                "subtree max cache out of date"
            );
        }
    }
}

impl Autocomplete for TrieIndex {
    fn top_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        if k == 0 {
            return Vec::new();
        }
        let Some(start) = self.node_at(prefix) else {
            return Vec::new();
        };

        let mut frontier = BinaryHeap::new();
        frontier.push(Candidate {
            bound: self.nodes[start].subtree_max,
            node: start,
        });
        let mut selector = TopKSelector::new(k);

        while let Some(Candidate { node, .. }) = frontier.pop() {
            let current = &self.nodes[node];
            if let Some(term) = &current.term {
                selector.offer(term.clone());
            }
            for &child in current.children.values() {
                frontier.push(Candidate {
                    bound: self.nodes[child].subtree_max,
                    node: child,
                });
            }
            // Cutoff is tested after the children are on the frontier: a
            // just-pushed child may carry a bound above every older entry,
            // and testing first would prune it while it still promises a
            // word heavier than the weakest held one.
            if selector.is_full() {
                let can_improve = match (frontier.peek(), selector.min_weight()) {
                    (Some(best), Some(min)) => best.bound > min,
                    _ => false,
                };
                if !can_improve {
                    break;
                }
            }
        }

        selector
            .into_descending()
            .into_iter()
            .map(|t| t.word().to_string())
            .collect()
    }

    fn top_match(&self, prefix: &str) -> String {
        let Some(mut current) = self.node_at(prefix) else {
            return String::new();
        };
        loop {
            let node = &self.nodes[current];
            if let Some(term) = &node.term {
                if term.weight() == node.subtree_max {
                    return term.word().to_string();
                }
            }
            // Follow the child that carries the subtree maximum; first in
            // child order when several do.
            let target = node.subtree_max;
            match node
                .children
                .values()
                .find(|&&child| self.nodes[child].subtree_max == target)
            {
                Some(&child) => current = child,
                // Only reachable when the subtree holds no words at all
                // (an empty dictionary's root).
                None => return String::new(),
            }
        }
    }

    fn weight_of(&self, term: &str) -> f64 {
        match self.node_at(term) {
            // A node on a bare prefix path is not a word: the terminal
            // marker is what gets checked, not mere reachability.
            Some(node) => self.nodes[node].term.as_ref().map_or(0.0, Term::weight),
            None => 0.0,
        }
    }
}
