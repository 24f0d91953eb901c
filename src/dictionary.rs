//! The dictionary seam: a read-only membership test over a vocabulary.
//!
//! The word list itself is loaded by the host process (once, at start)
//! and injected into evaluation; the core never mutates it. Any set-like
//! container works, which keeps test vocabularies trivial to build.

use std::collections::{BTreeSet, HashSet};

/// Set-like membership test over a fixed vocabulary.
pub trait Dictionary {
    /// Returns true if the word belongs to the vocabulary.
    fn is_word(&self, word: &str) -> bool;
}

impl Dictionary for HashSet<String> {
    fn is_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Dictionary for HashSet<&str> {
    fn is_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Dictionary for BTreeSet<String> {
    fn is_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_word(&self, word: &str) -> bool {
        (**self).is_word(word)
    }
}
