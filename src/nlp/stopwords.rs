//! Stop-word sets.
//!
//! The English list is built once per process and shared read-only by every
//! summarizer that doesn't bring its own list.

use lazy_static::lazy_static;
use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

lazy_static! {
    /// Process-wide English stop words (NLTK list).
    pub static ref ENGLISH: StopWords = StopWords::language(LANGUAGE::English);
}

/// A set of lower-case stop words.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a set from a word list; entries are case-folded.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// The bundled list for `language`.
    pub fn language(language: LANGUAGE) -> Self {
        Self {
            words: get(language).iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check a token against the set. Tokens are expected to be lower-case already.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
