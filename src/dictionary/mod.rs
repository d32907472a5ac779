//! Dictionary of candidate words
//!
//! Holds the ordered word list searched against each board, plus a trie used
//! to validate submitted words. The trie is never consulted by the tracer.

mod embedded;
pub mod loader;
mod trie;

pub use embedded::{WORDS, WORDS_COUNT};
pub use trie::Trie;

use rustc_hash::FxHashSet;
use std::fmt;

/// Ordered word list with fast membership and prefix lookup
#[derive(Clone)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: Trie,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are normalized with [`loader::normalize_word`]; invalid ones are
    /// skipped and duplicates keep their first position.
    ///
    /// # Examples
    /// ```
    /// use wordfind::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["Cat", "dog", "cat", "x-ray"]);
    /// assert_eq!(dictionary.words(), &["cat", "dog"]);
    /// assert!(dictionary.lookup("cat"));
    /// assert!(dictionary.has_prefix("do"));
    /// ```
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let words: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| loader::normalize_word(entry.as_ref()))
            .filter(|word| seen.insert(word.clone()))
            .collect();
        let lookup = words.iter().map(String::as_str).collect();

        Self { words, lookup }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(WORDS)
    }

    /// Check whether `word` is a dictionary word
    #[inline]
    #[must_use]
    pub fn lookup(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Check whether some dictionary word starts with `prefix`
    #[inline]
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.lookup.contains_prefix(prefix)
    }

    /// All words in their original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.words.len())
            .finish_non_exhaustive()
    }
}
