//! Random board generation
//!
//! Classic boards roll the sixteen 1987 Boggle dice; other sizes draw letters
//! by English letter frequency.

use super::grid::{Grid, GridError, cell_count};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// The sixteen dice of the 1987 redesign
pub const CLASSIC_DICE: [&str; 16] = [
    "aaeegn", "abbjoo", "achops", "affkps", "aoottw", "cimotu", "deilrx", "delrvy", "distty",
    "eeghnw", "eeinsu", "ehrtvw", "eiosst", "elrtty", "himnqu", "hlnnrz",
];

/// Relative letter weights for frequency-based boards
const LETTER_WEIGHTS: [(char, u32); 26] = [
    ('a', 12),
    ('b', 1),
    ('c', 5),
    ('d', 6),
    ('e', 19),
    ('f', 4),
    ('g', 3),
    ('h', 5),
    ('i', 11),
    ('j', 1),
    ('k', 1),
    ('l', 5),
    ('m', 4),
    ('n', 11),
    ('o', 11),
    ('p', 4),
    ('q', 1),
    ('r', 12),
    ('s', 9),
    ('t', 13),
    ('u', 4),
    ('v', 1),
    ('w', 2),
    ('x', 1),
    ('y', 3),
    ('z', 1),
];

/// How letters are chosen for a generated board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStyle {
    /// Roll the classic dice (4x4 only)
    Classic,
    /// Draw each cell independently by letter frequency
    Frequency,
}

impl BoardStyle {
    /// Classic dice when they fit the board, frequencies otherwise
    #[must_use]
    pub const fn for_size(rows: usize, cols: usize) -> Self {
        if rows == cols && matches!(rows.checked_mul(cols), Some(n) if n == CLASSIC_DICE.len()) {
            Self::Classic
        } else {
            Self::Frequency
        }
    }
}

/// Generate a random board
///
/// A `q` face always becomes a `qu` tile.
///
/// # Errors
/// Returns `GridError::Empty` for a zero-sized board, `GridError::TooLarge`
/// past [`MAX_CELLS`](super::MAX_CELLS) cells, and `GridError::DiceCount` if
/// `Classic` is asked for a board that is not 4x4.
///
/// # Panics
/// Will not panic - the letter weights are constant and positive.
///
/// # Examples
/// ```
/// use boggle_solver::core::{BoardStyle, generate};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let grid = generate(&mut rng, 5, 5, BoardStyle::Frequency).unwrap();
/// assert_eq!(grid.len(), 25);
/// ```
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    style: BoardStyle,
) -> Result<Grid, GridError> {
    let cells = cell_count(rows, cols)?;

    let letters: String = match style {
        BoardStyle::Classic => {
            if cells != CLASSIC_DICE.len() || rows != cols {
                return Err(GridError::DiceCount {
                    dice: CLASSIC_DICE.len(),
                    cells,
                });
            }
            let mut faces: Vec<u8> = CLASSIC_DICE
                .iter()
                .filter_map(|die| die.as_bytes().choose(rng).copied())
                .collect();
            faces.shuffle(rng);
            faces.into_iter().map(char::from).collect()
        }
        BoardStyle::Frequency => (0..cells)
            .map(|_| {
                LETTER_WEIGHTS
                    .choose_weighted(rng, |&(_, weight)| weight)
                    .map(|&(letter, _)| letter)
                    .expect("letter weights are positive")
            })
            .collect(),
    };

    Grid::from_letters(&letters, rows, cols)
}

/// Generate a square board in the style that suits its size
///
/// # Errors
/// Returns `GridError::Empty` if `size` is zero and `GridError::TooLarge` if
/// the board would be too big to build.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Grid, GridError> {
    generate(rng, size, size, BoardStyle::for_size(size, size))
}
