//! Word lists for the solver
//!
//! Provides the embedded default word list and resolves a `--dictionary`
//! argument into a loaded [`PrefixDictionary`].

mod embedded;

pub use embedded::{BUILTIN_WORDS, BUILTIN_WORDS_COUNT};

use crate::dictionary::{
    LoadError, LoadReport, MalformedPolicy, PrefixDictionary, dictionary_from_slice,
    load_from_file,
};

/// Name that selects the embedded word list instead of a file
pub const BUILTIN_SOURCE: &str = "builtin";

/// Load the dictionary named by `source`
///
/// `"builtin"` selects [`BUILTIN_WORDS`]; anything else is a file path.
///
/// # Errors
///
/// Returns a [`LoadError`] if the source cannot be read or holds no usable word.
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::MalformedPolicy;
/// use boggle_solver::wordlists::load_dictionary;
///
/// let (dictionary, report) = load_dictionary("builtin", MalformedPolicy::Reject).unwrap();
/// assert!(dictionary.contains("quit"));
/// assert_eq!(report.skipped, 0);
/// ```
pub fn load_dictionary(
    source: &str,
    policy: MalformedPolicy,
) -> Result<(PrefixDictionary, LoadReport), LoadError> {
    if source == BUILTIN_SOURCE {
        dictionary_from_slice(BUILTIN_WORDS, policy)
    } else {
        load_from_file(source, policy)
    }
}
