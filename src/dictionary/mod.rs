//! Dictionary: prefix trie and word list loading
//!
//! The trie answers the two questions the search asks at every step: is this
//! path a word, and can it still become one.

pub mod loader;
mod trie;

pub use loader::{
    LoadError, LoadReport, MalformedPolicy, dictionary_from_slice, load_from_file,
    load_from_reader,
};
pub use trie::{ALPHABET_SIZE, PrefixDictionary, TrieNode, normalize};
