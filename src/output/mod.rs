//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
mod progress;

pub use display::{
    print_benchmark_result, print_board, print_load_report, print_lookup_result,
    print_solve_result,
};
pub use progress::progress_bar;
