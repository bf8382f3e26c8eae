//! Depth-first path search from a single start cell
//!
//! Walks every path of adjacent, unvisited cells, descending the trie one
//! tile at a time. A branch stops as soon as the trie says no longer word can
//! start with the letters collected so far.

use crate::core::{Grid, Position};
use crate::dictionary::{PrefixDictionary, TrieNode};
use rustc_hash::FxHashSet;
use std::sync::{Mutex, PoisonError};

/// Shortest word that counts as found
pub const MIN_WORD_LEN: usize = 3;

/// Destination for words discovered by a search
///
/// Sinks must tolerate the same word arriving more than once.
pub trait WordSink {
    fn accept(&mut self, word: &str);
}

impl WordSink for Vec<String> {
    fn accept(&mut self, word: &str) {
        self.push(word.to_string());
    }
}

impl<S: std::hash::BuildHasher> WordSink for std::collections::HashSet<String, S> {
    fn accept(&mut self, word: &str) {
        if !self.contains(word) {
            self.insert(word.to_string());
        }
    }
}

/// Word set shared by concurrent searches
#[derive(Debug, Default)]
pub struct SharedWords {
    words: Mutex<FxHashSet<String>>,
}

impl SharedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words collected so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn into_inner(self) -> FxHashSet<String> {
        self.words.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WordSink for &SharedWords {
    fn accept(&mut self, word: &str) {
        let mut words = self.words.lock().unwrap_or_else(PoisonError::into_inner);
        if !words.contains(word) {
            words.insert(word.to_string());
        }
    }
}

/// Backtracking search with private path state
///
/// One value per task. The visited flags and accumulated word are restored
/// on every return, so after [`PathSearch::run`] the state is clear again and
/// the value can be reused for another start cell.
///
/// # Examples
/// ```
/// use boggle_solver::core::{Grid, Position};
/// use boggle_solver::dictionary::PrefixDictionary;
/// use boggle_solver::solver::PathSearch;
///
/// let dictionary: PrefixDictionary = ["cat", "act"].into_iter().collect();
/// let grid = Grid::from_letters("cat", 1, 3).unwrap();
///
/// let mut found: Vec<String> = Vec::new();
/// let mut search = PathSearch::new(&dictionary, &grid);
/// search.run(Position::new(0, 0), &mut found);
///
/// assert_eq!(found, vec!["cat"]);
/// assert!(search.is_clear());
/// ```
pub struct PathSearch<'a> {
    dictionary: &'a PrefixDictionary,
    grid: &'a Grid,
    visited: Vec<bool>,
    word: String,
}

impl<'a> PathSearch<'a> {
    #[must_use]
    pub fn new(dictionary: &'a PrefixDictionary, grid: &'a Grid) -> Self {
        Self {
            dictionary,
            grid,
            visited: vec![false; grid.len()],
            word: String::with_capacity(grid.len() * 2),
        }
    }

    /// Explore every path starting at `start`, emitting words into `sink`
    ///
    /// # Panics
    /// Panics if `start` lies outside the grid.
    pub fn run<W: WordSink + ?Sized>(&mut self, start: Position, sink: &mut W) {
        assert!(self.grid.contains(start), "start {start} outside grid");
        self.explore(start, self.dictionary.root(), sink);
    }

    /// No cell marked visited and no letters accumulated
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.word.is_empty() && !self.visited.contains(&true)
    }

    /// `parent` is the trie node for the word before this cell's tile
    fn explore<W: WordSink + ?Sized>(&mut self, pos: Position, parent: &'a TrieNode, sink: &mut W) {
        let grid = self.grid;
        let idx = grid.index(pos);
        let tile = grid.tile(pos);
        let mark = self.word.len();

        self.visited[idx] = true;
        self.word.push_str(tile);

        // Absent node: the prefix is a dead end
        if let Some(node) = parent.walk(tile) {
            if self.word.len() >= MIN_WORD_LEN && node.is_word() {
                sink.accept(&self.word);
            }

            if node.has_children() {
                for next in grid.neighbors(pos) {
                    if !self.visited[grid.index(next)] {
                        self.explore(next, node, sink);
                    }
                }
            }
        }

        self.word.truncate(mark);
        self.visited[idx] = false;
    }
}

/// Collect every word reachable from one start cell
///
/// The result may contain the same word more than once if several paths
/// spell it.
#[must_use]
pub fn search_from(dictionary: &PrefixDictionary, grid: &Grid, start: Position) -> Vec<String> {
    let mut found = Vec::new();
    PathSearch::new(dictionary, grid).run(start, &mut found);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{MalformedPolicy, dictionary_from_slice};
    use crate::wordlists::BUILTIN_WORDS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary(words: &[&str]) -> PrefixDictionary {
        words.iter().collect()
    }

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words.dedup();
        words
    }

    /// Straightforward string-query walk used as a reference
    fn reference_walk(
        dictionary: &PrefixDictionary,
        grid: &Grid,
        visited: &mut Vec<Position>,
        pos: Position,
        word: &str,
        found: &mut Vec<String>,
    ) {
        visited.push(pos);
        if word.len() > 2 && dictionary.contains(word) {
            found.push(word.to_string());
        }
        if !dictionary.has_no_continuation(word) {
            for next in grid.neighbors(pos) {
                if !visited.contains(&next) {
                    let extended = format!("{word}{}", grid.tile(next));
                    reference_walk(dictionary, grid, visited, next, &extended, found);
                }
            }
        }
        visited.pop();
    }

    #[test]
    fn finds_straight_line_word() {
        let dict = dictionary(&["cat"]);
        let grid = Grid::from_letters("cat", 1, 3).unwrap();
        assert_eq!(search_from(&dict, &grid, Position::new(0, 0)), vec!["cat"]);
        assert!(search_from(&dict, &grid, Position::new(0, 2)).is_empty());
    }

    #[test]
    fn short_words_are_not_emitted() {
        let dict = dictionary(&["at", "ta", "a"]);
        let grid = Grid::from_letters("at", 1, 2).unwrap();
        assert!(search_from(&dict, &grid, Position::new(0, 0)).is_empty());
        assert!(search_from(&dict, &grid, Position::new(0, 1)).is_empty());
    }

    #[test]
    fn short_prefixes_keep_extending() {
        // "at" is too short to count but still leads to "ate"
        let dict = dictionary(&["at", "ate"]);
        let grid = Grid::from_letters("ate", 1, 3).unwrap();
        assert_eq!(search_from(&dict, &grid, Position::new(0, 0)), vec!["ate"]);
    }

    #[test]
    fn cells_are_not_reused_on_a_path() {
        // "aba" would need the single "a" twice
        let dict = dictionary(&["aba", "abb"]);
        let grid = Grid::from_letters("ab", 1, 2).unwrap();
        assert!(search_from(&dict, &grid, Position::new(0, 0)).is_empty());
    }

    #[test]
    fn diagonal_steps_are_allowed() {
        let dict = dictionary(&["adb"]);
        // a b
        // c d
        let grid = Grid::from_letters("abcd", 2, 2).unwrap();
        assert_eq!(search_from(&dict, &grid, Position::new(0, 0)), vec!["adb"]);
    }

    #[test]
    fn qu_tile_contributes_two_letters() {
        let dict = dictionary(&["quit", "qit"]);
        let grid = Grid::from_letters("qit", 1, 3).unwrap();
        assert_eq!(search_from(&dict, &grid, Position::new(0, 0)), vec!["quit"]);
    }

    #[test]
    fn state_is_clear_after_each_run() {
        let dict = dictionary(&["cat", "cats", "scat", "acts", "tacs"]);
        let grid = Grid::from_letters("cats", 2, 2).unwrap();
        let mut search = PathSearch::new(&dict, &grid);
        let mut found: Vec<String> = Vec::new();
        for start in grid.positions() {
            search.run(start, &mut found);
            assert!(search.is_clear(), "state left dirty after {start}");
        }
        assert!(!found.is_empty());
    }

    #[test]
    fn same_word_on_two_paths_is_emitted_twice() {
        let dict = dictionary(&["ata"]);
        let grid = Grid::from_letters("aata", 2, 2).unwrap();
        // a a
        // t a
        let found = search_from(&dict, &grid, Position::new(0, 0));
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|w| w == "ata"));
    }

    #[test]
    fn hash_set_sink_deduplicates() {
        let dict = dictionary(&["ata"]);
        let grid = Grid::from_letters("aata", 2, 2).unwrap();
        let mut found = FxHashSet::default();
        PathSearch::new(&dict, &grid).run(Position::new(0, 0), &mut found);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn shared_sink_deduplicates() {
        let shared = SharedWords::new();
        assert!(shared.is_empty());
        let mut sink = &shared;
        sink.accept("cat");
        sink.accept("cat");
        sink.accept("dog");
        assert_eq!(shared.len(), 2);
        assert!(!shared.is_empty());
        assert!(shared.into_inner().contains("dog"));
    }

    #[test]
    fn matches_string_query_reference() {
        let (dict, _) = dictionary_from_slice(BUILTIN_WORDS, MalformedPolicy::Skip).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);

        for size in [3, 4, 5] {
            let grid = crate::core::random_board(&mut rng, size).unwrap();
            for start in grid.positions() {
                let mut expected = Vec::new();
                reference_walk(
                    &dict,
                    &grid,
                    &mut Vec::new(),
                    start,
                    grid.tile(start),
                    &mut expected,
                );
                assert_eq!(
                    sorted(search_from(&dict, &grid, start)),
                    sorted(expected),
                    "mismatch from {start} on\n{grid}"
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn start_outside_grid_panics() {
        let dict = dictionary(&["cat"]);
        let grid = Grid::from_letters("cat", 1, 3).unwrap();
        let mut found: Vec<String> = Vec::new();
        PathSearch::new(&dict, &grid).run(Position::new(1, 0), &mut found);
    }
}
