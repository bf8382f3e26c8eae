//! Core board types
//!
//! The grid the search walks and the generator for random boards.

mod generator;
mod grid;

pub use generator::{BoardStyle, CLASSIC_DICE, generate, random_board};
pub use grid::{DIRECTIONS, Grid, GridError, MAX_CELLS, Position, capitalize, cell_count};
