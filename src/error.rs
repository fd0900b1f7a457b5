//! Construction failure taxonomy.
//!
//! Every failure is detected synchronously inside a constructor and returned
//! before any index exists, so a failed build leaves nothing observable.
//! Queries take `&str` and `usize` arguments and cannot fail; the whole
//! error surface lives here.

use std::fmt;

/// Error type for dictionary construction.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexError {
    /// The word and weight slices have different lengths.
    MismatchedLengths { words: usize, weights: usize },
    /// A weight is negative or not a finite number.
    InvalidWeight { word: String, weight: f64 },
    /// A word appears more than once where uniqueness is required
    /// (brute-force oracle only).
    DuplicateWord { word: String },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::MismatchedLengths { words, weights } => {
                write!(f, "words.len() {} != weights.len() {}", words, weights)
            }
            IndexError::InvalidWeight { word, weight } => {
                write!(f, "invalid weight {} for '{}'", weight, word)
            }
            IndexError::DuplicateWord { word } => {
                write!(f, "duplicate word '{}'", word)
            }
        }
    }
}

impl std::error::Error for IndexError {}
