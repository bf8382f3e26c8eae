//! Word list loading
//!
//! Builds a [`PrefixDictionary`] from a file, any buffered reader, or a string
//! slice. The word list is one word per line in arbitrary case and spacing.

use super::trie::PrefixDictionary;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// What to do with a line that is not a plain alphabetic word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Skip the line and count it in [`LoadReport::skipped`]
    #[default]
    Skip,
    /// Fail the whole load
    Reject,
}

/// Summary of a successful load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Non-blank lines read
    pub lines: usize,
    /// Distinct words in the dictionary
    pub words: usize,
    /// Lines skipped as malformed
    pub skipped: usize,
}

/// Error type for dictionary construction
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Malformed { line: usize, word: String },
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Malformed { line, word } => {
                write!(f, "Malformed word {word:?} on line {line}")
            }
            Self::Empty => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened or read,
/// [`LoadError::Malformed`] under [`MalformedPolicy::Reject`], and
/// [`LoadError::Empty`] if no word survives.
///
/// # Examples
/// ```no_run
/// use boggle_solver::dictionary::{MalformedPolicy, load_from_file};
///
/// let (dictionary, report) = load_from_file("words.txt", MalformedPolicy::Skip).unwrap();
/// println!("Loaded {} words ({} skipped)", report.words, report.skipped);
/// assert_eq!(dictionary.len(), report.words);
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    policy: MalformedPolicy,
) -> Result<(PrefixDictionary, LoadReport), LoadError> {
    let path = path.as_ref();
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    load_from_reader(BufReader::new(file), policy).map_err(|e| match e {
        // Readers have no path of their own
        LoadError::Io { source, .. } => io_error(source),
        other => other,
    })
}

/// Load a dictionary from any buffered reader
///
/// # Errors
///
/// See [`load_from_file`]. I/O errors are reported with an empty path.
pub fn load_from_reader<R: BufRead>(
    reader: R,
    policy: MalformedPolicy,
) -> Result<(PrefixDictionary, LoadReport), LoadError> {
    let mut dictionary = PrefixDictionary::new();
    let mut report = LoadReport::default();

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes.map_err(|source| LoadError::Io {
            path: PathBuf::new(),
            source,
        })?;
        match std::str::from_utf8(&bytes) {
            Ok(line) => add_line(&mut dictionary, &mut report, idx + 1, line, policy)?,
            // Not text at all: malformed, never an I/O failure
            Err(_) => {
                let lossy = String::from_utf8_lossy(&bytes);
                let word = lossy.trim();
                if !word.is_empty() {
                    report.lines += 1;
                    malformed(&mut report, idx + 1, word, policy)?;
                }
            }
        }
    }

    finish(dictionary, report)
}

/// Build a dictionary from an in-memory word slice
///
/// # Errors
///
/// See [`load_from_file`]; never returns [`LoadError::Io`].
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::{MalformedPolicy, dictionary_from_slice};
///
/// let (dictionary, report) =
///     dictionary_from_slice(&["Cat", "dog", "it's"], MalformedPolicy::Skip).unwrap();
/// assert!(dictionary.contains("cat"));
/// assert_eq!(report.skipped, 1);
/// ```
pub fn dictionary_from_slice(
    words: &[&str],
    policy: MalformedPolicy,
) -> Result<(PrefixDictionary, LoadReport), LoadError> {
    let mut dictionary = PrefixDictionary::new();
    let mut report = LoadReport::default();

    for (idx, word) in words.iter().enumerate() {
        add_line(&mut dictionary, &mut report, idx + 1, word, policy)?;
    }

    finish(dictionary, report)
}

fn add_line(
    dictionary: &mut PrefixDictionary,
    report: &mut LoadReport,
    line_no: usize,
    line: &str,
    policy: MalformedPolicy,
) -> Result<(), LoadError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    report.lines += 1;
    if dictionary.insert(trimmed) {
        return Ok(());
    }
    malformed(report, line_no, trimmed, policy)
}

fn malformed(
    report: &mut LoadReport,
    line_no: usize,
    word: &str,
    policy: MalformedPolicy,
) -> Result<(), LoadError> {
    match policy {
        MalformedPolicy::Skip => {
            report.skipped += 1;
            Ok(())
        }
        MalformedPolicy::Reject => Err(LoadError::Malformed {
            line: line_no,
            word: word.to_string(),
        }),
    }
}

fn finish(
    dictionary: PrefixDictionary,
    mut report: LoadReport,
) -> Result<(PrefixDictionary, LoadReport), LoadError> {
    if dictionary.is_empty() {
        return Err(LoadError::Empty);
    }
    report.words = dictionary.len();
    Ok((dictionary, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_skips_blank_lines() {
        let input = "cat\n\n  DOG  \n\ttree\n";
        let (dict, report) = load_from_reader(Cursor::new(input), MalformedPolicy::Skip).unwrap();

        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("tree"));
        assert_eq!(report.lines, 3);
        assert_eq!(report.words, 3);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn skip_policy_counts_malformed() {
        let input = "cat\ndon't\n42\nice cream\n";
        let (dict, report) = load_from_reader(Cursor::new(input), MalformedPolicy::Skip).unwrap();

        assert_eq!(report.skipped, 2);
        assert_eq!(report.words, 2);
        assert!(dict.contains("icecream"));
        assert!(!dict.contains("dont"));
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let input: &[u8] = b"cat\ncaf\xe9\r\ndog\n";
        let (dict, report) = load_from_reader(Cursor::new(input), MalformedPolicy::Skip).unwrap();

        assert_eq!(report.lines, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.words, 2);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
    }

    #[test]
    fn invalid_utf8_line_is_rejected() {
        let input: &[u8] = b"cat\ncaf\xe9\n";
        match load_from_reader(Cursor::new(input), MalformedPolicy::Reject) {
            Err(LoadError::Malformed { line, word }) => {
                assert_eq!(line, 2);
                assert!(word.starts_with("caf"));
            }
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn reject_policy_fails_on_first_malformed() {
        let input = "cat\ndog\nx-ray\n";
        let result = load_from_reader(Cursor::new(input), MalformedPolicy::Reject);

        match result {
            Err(LoadError::Malformed { line, word }) => {
                assert_eq!(line, 3);
                assert_eq!(word, "x-ray");
            }
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn duplicates_count_once() {
        let (_, report) =
            dictionary_from_slice(&["cat", "CAT", " cat "], MalformedPolicy::Skip).unwrap();
        assert_eq!(report.lines, 3);
        assert_eq!(report.words, 1);
    }

    #[test]
    fn empty_list_is_an_error() {
        assert!(matches!(
            load_from_reader(Cursor::new("\n\n"), MalformedPolicy::Skip),
            Err(LoadError::Empty)
        ));
        assert!(matches!(
            dictionary_from_slice(&["1234"], MalformedPolicy::Skip),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_from_file(
            "definitely/not/a/real/wordlist.txt",
            MalformedPolicy::Skip,
        );
        match result {
            Err(err @ LoadError::Io { .. }) => {
                assert!(err.to_string().contains("wordlist.txt"));
                assert!(std::error::Error::source(&err).is_some());
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("boggle_words_{}.txt", std::process::id()));
        std::fs::write(&path, "Quit\nquiet\n").unwrap();

        let (dict, report) = load_from_file(&path, MalformedPolicy::Reject).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(report.words, 2);
        assert!(dict.contains("quit"));
        assert!(dict.contains("QUIET"));
    }
}
