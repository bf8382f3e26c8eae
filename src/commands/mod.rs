//! Command implementations

pub mod benchmark;
pub mod lookup;
pub mod solve;

pub use benchmark::{BenchmarkResult, generate_boards, run_benchmark};
pub use lookup::{LookupResult, lookup_word};
pub use solve::{SolveConfig, SolveMode, SolveResult, read_grid, solve_grid};
