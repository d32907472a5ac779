//! Find-all command
//!
//! Lists every dictionary word on one board.

use crate::core::Board;
use crate::dictionary::Dictionary;
use crate::finder::find_all;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of searching one board
pub struct FindResult {
    pub board: Board,
    pub words: Vec<String>,
    pub dictionary_size: usize,
    pub duration: Duration,
}

impl FindResult {
    /// Found words grouped by length, longest group last
    #[must_use]
    pub fn by_length(&self) -> BTreeMap<usize, Vec<&str>> {
        let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for word in &self.words {
            groups.entry(word.len()).or_default().push(word);
        }
        groups
    }

    /// The longest word found, earliest in dictionary order on ties
    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words
            .iter()
            .rev()
            .max_by_key(|word| word.len())
            .map(String::as_str)
    }
}

/// Search `board` for every dictionary word
#[must_use]
pub fn find_words(board: Board, dictionary: &Dictionary) -> FindResult {
    let start = Instant::now();
    let words = find_all(&board, dictionary);

    FindResult {
        board,
        words,
        dictionary_size: dictionary.len(),
        duration: start.elapsed(),
    }
}
