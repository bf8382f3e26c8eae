//! Word lookup command
//!
//! Reports how the dictionary sees a single word or prefix.

use crate::dictionary::{PrefixDictionary, normalize};
use crate::solver::MIN_WORD_LEN;
use anyhow::{Result, bail};

/// Result of looking up a word
pub struct LookupResult {
    pub query: String,
    pub normalized: String,
    pub is_word: bool,
    /// A word long enough to score on a board
    pub playable: bool,
    /// Some longer word starts with this one
    pub has_continuation: bool,
    pub completions: Vec<String>,
}

/// Look up a word and up to `limit` of its completions
///
/// # Errors
///
/// Returns an error if the normalized word is empty or contains anything
/// other than the letters `a` to `z`.
pub fn lookup_word(word: &str, dictionary: &PrefixDictionary, limit: usize) -> Result<LookupResult> {
    let normalized = normalize(word);
    if normalized.is_empty() {
        bail!("Nothing to look up");
    }
    if !normalized.bytes().all(|b| b.is_ascii_lowercase()) {
        bail!("Word {word:?} must contain only the letters a-z");
    }

    let is_word = dictionary.contains(&normalized);
    Ok(LookupResult {
        query: word.to_string(),
        is_word,
        playable: is_word && normalized.len() >= MIN_WORD_LEN,
        has_continuation: !dictionary.has_no_continuation(&normalized),
        completions: dictionary.completions(&normalized, limit),
        normalized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> PrefixDictionary {
        ["dog", "dogs", "do", "dot"].into_iter().collect()
    }

    #[test]
    fn word_with_longer_words() {
        let result = lookup_word("DOG", &dictionary(), 10).unwrap();
        assert_eq!(result.normalized, "dog");
        assert!(result.is_word);
        assert!(result.playable);
        assert!(result.has_continuation);
        assert_eq!(result.completions, vec!["dog", "dogs"]);
    }

    #[test]
    fn short_word_is_not_playable() {
        let result = lookup_word("do", &dictionary(), 10).unwrap();
        assert!(result.is_word);
        assert!(!result.playable);
        assert!(result.has_continuation);
    }

    #[test]
    fn dead_end_prefix() {
        let result = lookup_word("dogs", &dictionary(), 10).unwrap();
        assert!(result.is_word);
        assert!(!result.has_continuation);

        let result = lookup_word("cat", &dictionary(), 10).unwrap();
        assert!(!result.is_word);
        assert!(!result.has_continuation);
        assert!(result.completions.is_empty());
    }

    #[test]
    fn completions_respect_limit() {
        let result = lookup_word("d o", &dictionary(), 2).unwrap();
        assert_eq!(result.completions.len(), 2);
    }

    #[test]
    fn invalid_input_is_error() {
        assert!(lookup_word("", &dictionary(), 10).is_err());
        assert!(lookup_word("   ", &dictionary(), 10).is_err());
        assert!(lookup_word("d0g", &dictionary(), 10).is_err());
    }
}
