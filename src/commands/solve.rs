//! Board solving command
//!
//! Reads a grid, runs the solver with the requested mode and thread count,
//! and returns the solution.

use crate::core::Grid;
use crate::dictionary::{PrefixDictionary, normalize};
use crate::output::progress_bar;
use crate::solver::{Collection, Solution, Solver};
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

/// How the board is searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMode {
    Parallel(Collection),
    Sequential,
}

impl Default for SolveMode {
    fn default() -> Self {
        Self::Parallel(Collection::Merge)
    }
}

/// Configuration for solving a board
#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    pub mode: SolveMode,
    /// Worker threads; `None` uses the global rayon pool
    pub threads: Option<usize>,
    /// Show a progress bar while cells are searched
    pub progress: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(mode: SolveMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub grid: Grid,
    pub solution: Solution,
    pub mode: SolveMode,
    pub threads: usize,
}

/// Read a grid from a file, stdin (`-`), or a flat letter string
///
/// Letters without a size must form a square board.
///
/// # Errors
///
/// Returns an error if no input is given, the input cannot be read, or it
/// does not describe a valid grid.
pub fn read_grid(input: Option<&str>, letters: Option<&str>, size: Option<usize>) -> Result<Grid> {
    if let Some(letters) = letters {
        let count = normalize(letters).chars().count();
        if count == 0 {
            bail!("No letters given");
        }
        let size = size.unwrap_or_else(|| count.isqrt());
        if size == 0 {
            bail!("Board width must be at least 1");
        }
        let rows = count.div_ceil(size).max(1);
        return Grid::from_letters(letters, rows, size)
            .with_context(|| format!("Invalid letters for a board {size} wide"));
    }

    let text = match input {
        Some("-") => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read grid from stdin")?;
            text
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid file {path}"))?,
        None => bail!("Provide a grid file, '-' for stdin, or --letters"),
    };

    Grid::parse(&text).context("Invalid grid")
}

/// Solve a grid with the given configuration
///
/// # Errors
///
/// Returns an error if a dedicated thread pool cannot be built.
pub fn solve_grid(
    config: &SolveConfig,
    grid: Grid,
    dictionary: &PrefixDictionary,
) -> Result<SolveResult> {
    let solver = match config.mode {
        SolveMode::Parallel(collection) => Solver::new(dictionary).with_collection(collection),
        SolveMode::Sequential => Solver::new(dictionary),
    };

    let run = || {
        let threads = match config.mode {
            SolveMode::Sequential => 1,
            SolveMode::Parallel(_) => rayon::current_num_threads(),
        };
        let solution = match config.mode {
            SolveMode::Sequential => solver.solve_sequential(&grid),
            SolveMode::Parallel(_) if config.progress => {
                let pb = progress_bar(grid.len() as u64, "cells");
                let solution = solver.solve_with_progress(&grid, |_| pb.inc(1));
                pb.finish_and_clear();
                solution
            }
            SolveMode::Parallel(_) => solver.solve(&grid),
        };
        (solution, threads)
    };

    let (solution, threads) = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?
            .install(run),
        None => run(),
    };

    Ok(SolveResult {
        grid,
        solution,
        mode: config.mode,
        threads,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{MalformedPolicy, dictionary_from_slice};

    fn dictionary() -> PrefixDictionary {
        dictionary_from_slice(&["cat", "cats", "act", "scat"], MalformedPolicy::Skip)
            .unwrap()
            .0
    }

    #[test]
    fn letters_infer_square_size() {
        let grid = read_grid(None, Some("cats"), None).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
    }

    #[test]
    fn letters_with_explicit_width() {
        let grid = read_grid(None, Some("catsat"), Some(3)).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
    }

    #[test]
    fn letters_not_square_is_error() {
        assert!(read_grid(None, Some("abcde"), None).is_err());
        assert!(read_grid(None, Some(""), None).is_err());
    }

    #[test]
    fn missing_input_is_error() {
        assert!(read_grid(None, None, None).is_err());
        assert!(read_grid(Some("no/such/grid.txt"), None, None).is_err());
    }

    #[test]
    fn grid_file_is_parsed() {
        let path = std::env::temp_dir().join(format!("boggle_grid_{}.txt", std::process::id()));
        std::fs::write(&path, "2\nc a\nt s\n").unwrap();

        let grid = read_grid(path.to_str(), None, None).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn modes_agree() {
        let dict = dictionary();
        let grid = Grid::from_letters("cats", 2, 2).unwrap();

        let merged = solve_grid(&SolveConfig::default(), grid.clone(), &dict).unwrap();
        let shared = solve_grid(
            &SolveConfig::new(SolveMode::Parallel(Collection::Shared)),
            grid.clone(),
            &dict,
        )
        .unwrap();
        let sequential =
            solve_grid(&SolveConfig::new(SolveMode::Sequential), grid, &dict).unwrap();

        assert_eq!(merged.solution.words(), shared.solution.words());
        assert_eq!(merged.solution.words(), sequential.solution.words());
        assert_eq!(sequential.threads, 1);
        assert!(merged.solution.contains("scat"));
    }

    #[test]
    fn fixed_thread_count_is_reported() {
        let dict = dictionary();
        let grid = Grid::from_letters("cats", 2, 2).unwrap();
        let config = SolveConfig {
            threads: Some(2),
            ..SolveConfig::default()
        };

        let result = solve_grid(&config, grid, &dict).unwrap();
        assert_eq!(result.threads, 2);
        assert_eq!(result.solution.len(), 4);
    }
}
