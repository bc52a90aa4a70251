//! `trie` — The prefix-indexed dictionary the grid searcher walks.
//!
//! Words are inserted once into a [`Trie`]; during search the current board
//! path is mirrored by a pointer into this tree, so "can any accepted word
//! extend this path?" is a single O(1) child lookup per letter. That lookup
//! is the pruning primitive the whole depth-first search relies on.
//!
//! Length filtering is part of this component's contract: words whose length
//! falls outside the configured `[min_len, max_len]` bound are dropped before
//! insertion and can never be found, even when spellable on the board. This
//! is a deliberate, configurable policy (puzzle dictionaries are huge and
//! very short or very long words are unwanted), not an error.
//!
//! The index is built once per solve call and read-only thereafter: no
//! deletion, no rebalancing, no concurrent mutation.

use crate::errors::BoardError;

pub(crate) const ALPHABET_SIZE: usize = 26;

/// Default accepted word-length bounds, inclusive.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;
/// See [`DEFAULT_MIN_WORD_LEN`].
pub const DEFAULT_MAX_WORD_LEN: usize = 8;

/// One node of the prefix tree.
///
/// Each node exclusively owns its children; "no child" is an explicit `None`
/// rather than any kind of shared or dangling reference. The root represents
/// the empty prefix, and `is_word` marks "a complete accepted word ends
/// here."
#[derive(Debug, Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    is_word: bool,
}

impl TrieNode {
    /// Child-lookup: the node extending the current prefix by `letter`, or
    /// `None` if no accepted word continues this way. O(1).
    ///
    /// `letter` must be an ASCII lowercase byte; the word-list and grid
    /// boundaries guarantee that before data reaches this component.
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&TrieNode> {
        debug_assert!(letter.is_ascii_lowercase(), "trie letters must be lowercase a-z");
        self.children[(letter - b'a') as usize].as_deref()
    }

    /// Whether a complete accepted word ends at this node.
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.is_word
    }
}

/// The dictionary index: a prefix tree plus the length-filter policy.
#[derive(Debug)]
pub struct Trie {
    root: TrieNode,
    min_len: usize,
    max_len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// An empty index with the default `[3, 8]` length bounds.
    #[must_use]
    pub fn new() -> Trie {
        Trie {
            root: TrieNode::default(),
            min_len: DEFAULT_MIN_WORD_LEN,
            max_len: DEFAULT_MAX_WORD_LEN,
        }
    }

    /// An empty index accepting only words whose length lies in
    /// `[min_len, max_len]` (inclusive).
    ///
    /// # Errors
    ///
    /// [`BoardError::ContradictoryBounds`] if `min_len > max_len`.
    pub fn with_bounds(min_len: usize, max_len: usize) -> Result<Trie, BoardError> {
        if min_len > max_len {
            return Err(BoardError::ContradictoryBounds { min: min_len, max: max_len });
        }
        Ok(Trie { root: TrieNode::default(), min_len, max_len })
    }

    /// Insert a word, filtering first by the length bounds.
    ///
    /// Returns `true` if the word was accepted (inserted or already
    /// present), `false` if the length filter dropped it. Re-inserting an
    /// accepted word is a no-op.
    ///
    /// `word` must consist of lowercase a-z only; normalization is the
    /// word-list boundary's job (see [`crate::word_list`]).
    pub fn insert(&mut self, word: &str) -> bool {
        let len = word.chars().count();
        if len < self.min_len || len > self.max_len {
            return false;
        }

        let mut node = &mut self.root;
        for letter in word.bytes() {
            debug_assert!(letter.is_ascii_lowercase(), "trie letters must be lowercase a-z");
            node = node.children[(letter - b'a') as usize].get_or_insert_with(Box::default);
        }
        node.is_word = true;
        true
    }

    /// The node for the empty prefix — where every grid search starts.
    #[must_use]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inclusive accepted word-length bounds.
    #[must_use]
    pub fn bounds(&self) -> (usize, usize) {
        (self.min_len, self.max_len)
    }

    /// Whether `word` was accepted into the index. Lookup helper for
    /// diagnostics and tests; the searcher walks nodes directly instead.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        word.bytes()
            .try_fold(&self.root, |node, letter| node.child(letter))
            .is_some_and(TrieNode::is_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut trie = Trie::new();
        assert!(trie.insert("cat"));
        assert!(trie.insert("cart"));
        assert!(trie.contains("cat"));
        assert!(trie.contains("cart"));
        assert!(!trie.contains("car")); // prefix of "cart", not a word itself
        assert!(!trie.contains("dog"));
    }

    #[test]
    fn test_prefix_nodes_are_not_words() {
        let mut trie = Trie::new();
        trie.insert("cart");

        let c = trie.root().child(b'c').unwrap();
        let a = c.child(b'a').unwrap();
        let r = a.child(b'r').unwrap();
        let t = r.child(b't').unwrap();

        assert!(!c.is_word());
        assert!(!a.is_word());
        assert!(!r.is_word());
        assert!(t.is_word());
    }

    #[test]
    fn test_child_lookup_absent() {
        let mut trie = Trie::new();
        trie.insert("cat");
        assert!(trie.root().child(b'x').is_none());
        assert!(trie.root().child(b'c').unwrap().child(b'c').is_none());
    }

    #[test]
    fn test_length_filter_drops_short_and_long() {
        let mut trie = Trie::new(); // default bounds [3, 8]
        assert!(!trie.insert("go"));
        assert!(!trie.insert("wordsearch")); // 10 letters
        assert!(trie.insert("abc")); // exactly min
        assert!(trie.insert("abcdefgh")); // exactly max
        assert!(!trie.contains("go"));
        assert!(!trie.contains("wordsearch"));
        assert!(trie.contains("abc"));
        assert!(trie.contains("abcdefgh"));
    }

    #[test]
    fn test_custom_bounds() {
        let mut trie = Trie::with_bounds(1, 2).unwrap();
        assert!(trie.insert("a"));
        assert!(trie.insert("ab"));
        assert!(!trie.insert("abc"));
        assert!(trie.contains("a"));
        assert!(!trie.contains("abc"));
    }

    #[test]
    fn test_contradictory_bounds_rejected() {
        let err = Trie::with_bounds(5, 3).unwrap_err();
        assert!(matches!(err, BoardError::ContradictoryBounds { min: 5, max: 3 }));
    }

    /// Re-insertion must not change lookup behavior: the word stays a word,
    /// shared prefixes stay intact, nothing else becomes a word.
    #[test]
    fn test_reinsertion_is_noop() {
        let mut trie = Trie::new();
        assert!(trie.insert("cat"));
        assert!(trie.insert("cat"));
        assert!(trie.contains("cat"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("catt"));
    }

    #[test]
    fn test_word_sharing_prefix_with_longer_word() {
        let mut trie = Trie::new();
        trie.insert("car");
        trie.insert("cart");
        assert!(trie.contains("car"));
        assert!(trie.contains("cart"));

        // "car" node is a word AND has a 't' child
        let r = trie
            .root()
            .child(b'c')
            .and_then(|n| n.child(b'a'))
            .and_then(|n| n.child(b'r'))
            .unwrap();
        assert!(r.is_word());
        assert!(r.child(b't').is_some_and(TrieNode::is_word));
    }

    #[test]
    fn test_empty_trie_has_no_words() {
        let trie = Trie::new();
        assert!(!trie.contains("cat"));
        assert!(!trie.root().is_word());
    }
}
