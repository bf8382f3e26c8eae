//! Board solving
//!
//! [`PathSearch`] explores one start cell; [`Solver`] fans the search out over
//! every cell and collects the words.

mod engine;
pub mod search;

pub use engine::{Collection, Solution, Solver};
pub use search::{MIN_WORD_LEN, PathSearch, SharedWords, WordSink, search_from};
