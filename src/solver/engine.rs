//! Board solver
//!
//! Runs one [`PathSearch`] per grid cell on the rayon pool and joins the
//! results into a single deduplicated [`Solution`].

use super::search::{PathSearch, SharedWords};
use crate::core::{Grid, Position};
use crate::dictionary::PrefixDictionary;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How concurrent cell searches hand their words back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Collection {
    /// Each task fills its own set; sets are merged after the join
    #[default]
    Merge,
    /// All tasks insert into one mutex-protected set
    Shared,
}

/// Words found on a board
///
/// Sorted longest first, then alphabetically.
#[derive(Debug, Clone)]
pub struct Solution {
    words: Vec<String>,
    elapsed: Duration,
    cells: usize,
}

impl Solution {
    fn new(found: FxHashSet<String>, elapsed: Duration, cells: usize) -> Self {
        let mut words: Vec<String> = found.into_iter().collect();
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Self {
            words,
            elapsed,
            cells,
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
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

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Wall-clock time spent searching
    #[inline]
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of start cells explored
    #[inline]
    #[must_use]
    pub const fn cells_searched(&self) -> usize {
        self.cells
    }

    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Words grouped by length, shortest group first
    #[must_use]
    pub fn by_length(&self) -> BTreeMap<usize, Vec<&str>> {
        let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for word in &self.words {
            groups.entry(word.len()).or_default().push(word);
        }
        groups
    }
}

/// Finds every dictionary word on a grid
///
/// The dictionary is borrowed for the solver's lifetime and never mutated,
/// so every cell task reads it without locking.
///
/// # Examples
/// ```
/// use boggle_solver::core::Grid;
/// use boggle_solver::dictionary::PrefixDictionary;
/// use boggle_solver::solver::Solver;
///
/// let dictionary: PrefixDictionary = ["cat", "cats", "at", "ca"].into_iter().collect();
/// let grid = Grid::new(&[vec!["C", "A"], vec!["T", "S"]]).unwrap();
///
/// let solution = Solver::new(&dictionary).solve(&grid);
/// assert_eq!(solution.words(), ["cats", "cat"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    dictionary: &'a PrefixDictionary,
    collection: Collection,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a PrefixDictionary) -> Self {
        Self {
            dictionary,
            collection: Collection::Merge,
        }
    }

    #[must_use]
    pub const fn with_collection(mut self, collection: Collection) -> Self {
        self.collection = collection;
        self
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a PrefixDictionary {
        self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn collection(&self) -> Collection {
        self.collection
    }

    /// Search every cell in parallel and wait for all of them
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> Solution {
        self.solve_with_progress(grid, |_| {})
    }

    /// Like [`Solver::solve`], calling `on_cell` as each cell's search finishes
    ///
    /// `on_cell` runs on pool threads, in no particular order.
    pub fn solve_with_progress<F>(&self, grid: &Grid, on_cell: F) -> Solution
    where
        F: Fn(Position) + Sync,
    {
        let start = Instant::now();
        let positions: Vec<Position> = grid.positions().collect();

        let found = match self.collection {
            Collection::Merge => positions
                .par_iter()
                .fold(FxHashSet::default, |mut found, &cell| {
                    PathSearch::new(self.dictionary, grid).run(cell, &mut found);
                    on_cell(cell);
                    found
                })
                .reduce(FxHashSet::default, merge_sets),
            Collection::Shared => {
                let shared = SharedWords::new();
                positions.par_iter().for_each(|&cell| {
                    let mut sink = &shared;
                    PathSearch::new(self.dictionary, grid).run(cell, &mut sink);
                    on_cell(cell);
                });
                shared.into_inner()
            }
        };

        Solution::new(found, start.elapsed(), positions.len())
    }

    /// Search every cell on the calling thread, in row-major order
    #[must_use]
    pub fn solve_sequential(&self, grid: &Grid) -> Solution {
        let start = Instant::now();
        let mut found = FxHashSet::default();
        let mut search = PathSearch::new(self.dictionary, grid);

        for cell in grid.positions() {
            search.run(cell, &mut found);
        }

        Solution::new(found, start.elapsed(), grid.len())
    }
}

fn merge_sets(mut a: FxHashSet<String>, mut b: FxHashSet<String>) -> FxHashSet<String> {
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }
    a.extend(b);
    a
}
