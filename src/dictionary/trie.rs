//! Prefix tree for word validation
//!
//! Nodes live in a flat arena and refer to their children by index.

use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: FxHashMap<char, usize>,
    terminal: bool,
}

/// Membership and prefix lookup over a set of words
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word; returns `false` if it was already present
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = 0;
        for letter in word.chars() {
            node = match self.nodes[node].children.get(&letter) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(letter, child);
                    child
                }
            };
        }

        let inserted = !self.nodes[node].terminal;
        self.nodes[node].terminal = true;
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Check whether the exact word was inserted
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| self.nodes[node].terminal)
    }

    /// Check whether any inserted word starts with `prefix`
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find(&self, text: &str) -> Option<usize> {
        text.chars()
            .try_fold(0, |node, letter| self.nodes[node].children.get(&letter).copied())
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word);
        }
        trie
    }
}
