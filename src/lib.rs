//! Boggle Solver
//!
//! Finds every dictionary word on a Boggle board by walking a prefix trie
//! alongside a backtracking search, one parallel task per start cell.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::core::Grid;
//! use boggle_solver::dictionary::PrefixDictionary;
//! use boggle_solver::solver::Solver;
//!
//! let dictionary: PrefixDictionary = ["tea", "eat", "neat"].into_iter().collect();
//! let grid = Grid::from_letters("neat", 2, 2).unwrap();
//!
//! let solution = Solver::new(&dictionary).solve(&grid);
//! assert_eq!(solution.words(), ["neat", "eat", "tea"]);
//! ```

// Board grid and random boards
pub mod core;

// Prefix trie and word list loading
pub mod dictionary;

// Path search and the parallel solver
pub mod solver;

// Embedded word list
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
