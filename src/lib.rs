//! Weighted prefix autocomplete over a static in-memory dictionary.
//!
//! Given `(word, weight)` pairs, answer "which words starting with this
//! prefix have the highest weights" - either the single best or the top k,
//! in descending weight order. The dictionary is supplied once at
//! construction; queries are read-only thereafter.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │  term.rs   │────▶│  topk.rs    │────▶│    sorted.rs     │
//! │ (Term,     │     │ (TopK-      │     │ (BinarySearch-   │
//! │  TermOrder)│     │  Selector)  │     │  Index)          │
//! └────────────┘     └─────────────┘     ├──────────────────┤
//!        │                  │            │    trie.rs       │
//!        ▼                  ▼            │ (TrieIndex)      │
//! ┌──────────────────────────────────┐   ├──────────────────┤
//! │           contracts.rs           │   │    brute.rs      │
//! │  (debug-mode invariant checks)   │   │ (BruteForceIndex)│
//! └──────────────────────────────────┘   └──────────────────┘
//! ```
//!
//! Three engines implement the same [`Autocomplete`] surface and stay
//! interchangeable for differential testing:
//!
//! - [`BinarySearchIndex`] - lexicographically sorted array; two
//!   generalized binary searches bound the contiguous prefix range, then a
//!   bounded selector scans it.
//! - [`TrieIndex`] - character trie with a cached subtree-maximum weight
//!   per node driving a best-first, branch-and-bound top-k search.
//! - [`BruteForceIndex`] - O(n) linear scan, the correctness oracle.
//!
//! # Usage
//!
//! ```
//! use wordrank::{Autocomplete, TrieIndex};
//!
//! let index = TrieIndex::new(
//!     &["ape", "app", "ban", "bat", "bee", "car", "cat"],
//!     &[6.0, 4.0, 2.0, 3.0, 5.0, 7.0, 1.0],
//! )?;
//!
//! assert_eq!(index.top_match("b"), "bee");
//! assert_eq!(index.top_matches("", 3), vec!["car", "ape", "bee"]);
//! assert_eq!(index.weight_of("cat"), 1.0);
//! # Ok::<(), wordrank::IndexError>(())
//! ```
//!
//! No I/O, persistence, or network surface: callers supply parallel
//! word/weight slices and consume ordered `Vec<String>` results. After a
//! successful build every engine is immutable and safe for unsynchronized
//! concurrent reads.

pub mod contracts;
mod brute;
mod error;
mod sorted;
mod term;
mod topk;
mod trie;

pub use brute::BruteForceIndex;
pub use error::IndexError;
pub use sorted::{first_index_of, last_index_of, BinarySearchIndex};
pub use term::{Lexicographic, PrefixOrder, ReverseWeightOrder, Term, TermOrder, WeightOrder};
pub use topk::TopKSelector;
pub use trie::TrieIndex;

/// The query surface shared by all engines.
///
/// Queries cannot fail: prefixes are `&str`, counts are `usize`, and all
/// dictionary validation already happened at construction.
pub trait Autocomplete {
    /// The up-to-`k` heaviest words starting with `prefix`, in descending
    /// weight order. Fewer than `k` matches returns all of them; no match
    /// or `k == 0` returns an empty vector.
    fn top_matches(&self, prefix: &str, k: usize) -> Vec<String>;

    /// The single heaviest word starting with `prefix`, or the empty
    /// string when nothing matches.
    fn top_match(&self, prefix: &str) -> String;

    /// The weight stored for `term`, or `0.0` when it is not in the
    /// dictionary. Indistinguishable from an explicit zero-weight entry;
    /// known limitation.
    fn weight_of(&self, term: &str) -> f64;
}
