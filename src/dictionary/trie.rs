//! Prefix trie over lowercase ASCII words
//!
//! Every word and every query is normalized (lowercased, whitespace removed)
//! before it touches the trie, so lookups are case- and whitespace-insensitive.

use std::fmt;

/// Number of children per node, one per letter `a..=z`
pub const ALPHABET_SIZE: usize = 26;

/// Normalize a word for insertion or lookup
///
/// Lowercases and removes all whitespace. No other characters are touched;
/// non-alphabetic input is rejected later by the trie walk.
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::normalize;
///
/// assert_eq!(normalize(" C a T "), "cat");
/// assert_eq!(normalize("QUEST"), "quest");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[inline]
fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

/// One letter position in the trie
///
/// Children are owned exclusively by their parent; the structure is a strict tree.
#[derive(Default)]
pub struct TrieNode {
    letter: u8,
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    terminal: bool,
}

impl TrieNode {
    fn new(letter: u8) -> Self {
        Self {
            letter,
            ..Self::default()
        }
    }

    /// The letter this node represents (`0` for the root)
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    /// Whether the path from the root to this node spells a complete word
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.terminal
    }

    /// Whether any longer word extends this node
    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Child for a single lowercase letter
    #[inline]
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&Self> {
        letter_index(letter).and_then(|idx| self.children[idx].as_deref())
    }

    /// Descend through every letter of an already-normalized string
    ///
    /// Returns `None` as soon as a required child is absent.
    #[must_use]
    pub fn walk(&self, letters: &str) -> Option<&Self> {
        letters
            .bytes()
            .try_fold(self, |node, letter| node.child(letter))
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Option::as_deref)
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: String = self.children().map(|c| char::from(c.letter)).collect();
        f.debug_struct("TrieNode")
            .field("letter", &char::from(self.letter))
            .field("terminal", &self.terminal)
            .field("children", &children)
            .finish()
    }
}

/// Trie-backed dictionary with membership and pruning queries
///
/// Built once, then only read. Sharing a `&PrefixDictionary` across threads
/// needs no locking.
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::PrefixDictionary;
///
/// let mut dictionary = PrefixDictionary::new();
/// dictionary.insert("dog");
///
/// assert!(dictionary.contains("DOG"));
/// assert!(!dictionary.has_no_continuation("do"));
/// assert!(dictionary.has_no_continuation("dog"));
/// assert!(dictionary.has_no_continuation("dogs"));
/// ```
#[derive(Debug, Default)]
pub struct PrefixDictionary {
    root: TrieNode,
    words: usize,
    nodes: usize,
}

impl PrefixDictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word
    ///
    /// Returns `false` and leaves the trie untouched if the normalized word
    /// contains anything outside `a..=z`. Inserting a word twice is a no-op.
    /// The empty string marks the root itself as a word.
    pub fn insert(&mut self, word: &str) -> bool {
        let normalized = normalize(word);
        if !normalized.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }

        let mut created = 0;
        let mut current = &mut self.root;
        for letter in normalized.bytes() {
            let idx = usize::from(letter - b'a');
            current = current.children[idx].get_or_insert_with(|| {
                created += 1;
                Box::new(TrieNode::new(letter))
            });
        }

        if !current.terminal {
            current.terminal = true;
            self.words += 1;
        }
        self.nodes += created;
        true
    }

    /// Exact-membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.root
            .walk(&normalize(word))
            .is_some_and(TrieNode::is_word)
    }

    /// Whether exploring beyond `prefix` can never yield a longer word
    ///
    /// True when the prefix is absent from the trie, and also when it is
    /// present but no inserted word extends it. Both mean "stop exploring".
    #[must_use]
    pub fn has_no_continuation(&self, prefix: &str) -> bool {
        self.root
            .walk(&normalize(prefix))
            .is_none_or(|node| !node.has_children())
    }

    /// Node reached by a prefix, if the prefix exists
    #[must_use]
    pub fn find_prefix(&self, prefix: &str) -> Option<&TrieNode> {
        self.root.walk(&normalize(prefix))
    }

    /// The node for the empty prefix
    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Words extending `prefix` (including the prefix itself), alphabetical
    ///
    /// Stops after `limit` words.
    #[must_use]
    pub fn completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut word = normalize(prefix);
        let mut found = Vec::new();
        if let Some(node) = self.root.walk(&word) {
            collect_words(node, &mut word, &mut found, limit);
        }
        found
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes below the root
    #[inline]
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes
    }
}

fn collect_words(node: &TrieNode, word: &mut String, found: &mut Vec<String>, limit: usize) {
    if found.len() >= limit {
        return;
    }
    if node.terminal {
        found.push(word.clone());
    }
    for child in node.children() {
        word.push(char::from(child.letter));
        collect_words(child, word, found, limit);
        word.pop();
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixDictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> PrefixDictionary {
        words.iter().collect()
    }

    #[test]
    fn normalize_strips_whitespace_and_case() {
        assert_eq!(normalize("Cat"), "cat");
        assert_eq!(normalize(" c a t "), "cat");
        assert_eq!(normalize("\tQU\n"), "qu");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn inserted_words_are_found() {
        let dict = dictionary(&["cat", "cats", "dog", "do"]);
        for word in ["cat", "cats", "dog", "do"] {
            assert!(dict.contains(word), "missing {word}");
        }
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn contains_is_exact_not_prefix() {
        let dict = dictionary(&["cats"]);
        assert!(!dict.contains("cat"));
        assert!(!dict.contains("c"));
        assert!(!dict.contains("catsup"));
        assert!(dict.contains("cats"));
    }

    #[test]
    fn lookups_ignore_case_and_whitespace() {
        let dict = dictionary(&["cat"]);
        assert!(dict.contains("Cat"));
        assert!(dict.contains("cat"));
        assert!(dict.contains(" c a t "));
        assert!(dict.contains("CAT"));
    }

    #[test]
    fn insert_normalizes() {
        let mut dict = PrefixDictionary::new();
        assert!(dict.insert("  Hello World "));
        assert!(dict.contains("helloworld"));
        assert!(!dict.contains("hello"));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut dict = PrefixDictionary::new();
        dict.insert("tree");
        let nodes = dict.node_count();
        dict.insert("tree");
        dict.insert("TREE");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.node_count(), nodes);
    }

    #[test]
    fn insert_rejects_non_alphabetic() {
        let mut dict = PrefixDictionary::new();
        assert!(!dict.insert("can't"));
        assert!(!dict.insert("r2d2"));
        assert!(!dict.insert("café"));
        assert!(dict.is_empty());
        assert_eq!(dict.node_count(), 0);
        assert!(!dict.contains("can't"));
    }

    #[test]
    fn empty_string_marks_root() {
        let mut dict = PrefixDictionary::new();
        assert!(!dict.contains(""));
        assert!(dict.insert(""));
        assert!(dict.contains(""));
        assert!(dict.root().is_word());
        assert_eq!(dict.node_count(), 0);
    }

    #[test]
    fn no_continuation_for_dog() {
        let dict = dictionary(&["dog"]);
        assert!(!dict.has_no_continuation("d"));
        assert!(!dict.has_no_continuation("do"));
        assert!(dict.has_no_continuation("dog"));
        assert!(dict.has_no_continuation("dogs"));
        assert!(dict.has_no_continuation("x"));
    }

    #[test]
    fn word_with_longer_extension_continues() {
        let dict = dictionary(&["cat", "cats"]);
        assert!(!dict.has_no_continuation("cat"));
        assert!(dict.has_no_continuation("cats"));
    }

    #[test]
    fn no_continuation_on_non_alphabetic_prefix() {
        let dict = dictionary(&["dog"]);
        assert!(dict.has_no_continuation("d0"));
        assert!(!dict.contains("d-o-g"));
    }

    #[test]
    fn empty_prefix_continues_unless_empty() {
        assert!(PrefixDictionary::new().has_no_continuation(""));
        assert!(!dictionary(&["a"]).has_no_continuation(""));
    }

    #[test]
    fn find_prefix_walks_nodes() {
        let dict = dictionary(&["quit"]);
        let node = dict.find_prefix("QU").unwrap();
        assert_eq!(node.letter(), b'u');
        assert!(!node.is_word());
        assert!(node.has_children());
        assert_eq!(node.walk("it").map(TrieNode::is_word), Some(true));
        assert!(dict.find_prefix("qa").is_none());
    }

    #[test]
    fn completions_are_alphabetical_and_limited() {
        let dict = dictionary(&["tea", "team", "tear", "ten", "toe"]);
        assert_eq!(dict.completions("te", 10), vec!["tea", "team", "tear", "ten"]);
        assert_eq!(dict.completions("te", 2), vec!["tea", "team"]);
        assert!(dict.completions("x", 10).is_empty());
    }

    #[test]
    fn node_count_shares_prefixes() {
        let dict = dictionary(&["tea", "ten"]);
        // t, e, a, n
        assert_eq!(dict.node_count(), 4);
    }

    #[test]
    fn extend_adds_words() {
        let mut dict = PrefixDictionary::new();
        dict.extend(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(dict.len(), 2);
    }
}
