//! Letter grid representation
//!
//! A rectangular board of tiles stored row-major. A tile is one or more
//! lowercase letters, so Boggle's `Qu` face is a single two-letter tile.

use crate::dictionary::normalize;
use std::fmt;

/// Offsets to the eight neighbours of a cell: N, NE, E, SE, S, SW, W, NW
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// A cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error type for invalid grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    InvalidTile {
        row: usize,
        col: usize,
        tile: String,
    },
    LetterCount {
        expected: usize,
        found: usize,
    },
    DiceCount {
        dice: usize,
        cells: usize,
    },
    TooLarge {
        rows: usize,
        cols: usize,
    },
    SizeHeader {
        header: String,
        rows: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid must have at least one row and one column"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {found} tiles, expected {expected}",
                row + 1
            ),
            Self::InvalidTile { row, col, tile } => write!(
                f,
                "Tile {tile:?} at row {}, column {} must contain only letters",
                row + 1,
                col + 1
            ),
            Self::LetterCount { expected, found } => {
                write!(f, "Expected {expected} letters, got {found}")
            }
            Self::DiceCount { dice, cells } => {
                write!(f, "Classic dice cover {dice} cells, board has {cells}")
            }
            Self::TooLarge { rows, cols } => write!(
                f,
                "A {rows}x{cols} board exceeds the limit of {MAX_CELLS} cells"
            ),
            Self::SizeHeader { header, rows } => {
                write!(f, "Size header {header} does not match the {rows} rows below it")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Largest number of cells a built or generated board may have
pub const MAX_CELLS: usize = 1 << 16;

/// Cell count of a `rows` x `cols` board
///
/// # Errors
/// Returns `GridError::Empty` for a zero dimension and `GridError::TooLarge`
/// when the product overflows or exceeds [`MAX_CELLS`].
pub fn cell_count(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::Empty);
    }
    rows.checked_mul(cols)
        .filter(|&cells| cells <= MAX_CELLS)
        .ok_or(GridError::TooLarge { rows, cols })
}

/// Immutable rectangular board of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<String>,
}

impl Grid {
    /// Build a grid from rows of tiles
    ///
    /// Tiles are normalized (lowercased, whitespace removed) and must then be
    /// non-empty and purely alphabetic.
    ///
    /// # Errors
    /// Returns `GridError` if the grid is empty, rows differ in length, or a
    /// tile is not alphabetic.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Grid, Position};
    ///
    /// let grid = Grid::new(&[vec!["C", "A"], vec!["T", "S"]]).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.tile(Position::new(1, 0)), "t");
    ///
    /// assert!(Grid::new(&[vec!["a", "b"], vec!["c"]]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(rows.len() * cols);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            for (col, cell) in cells.iter().enumerate() {
                tiles.push(normalize_tile(cell.as_ref(), row, col)?);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            tiles,
        })
    }

    /// Build a grid from a flat string with one letter per cell
    ///
    /// Whitespace is ignored and every `q` becomes the tile `qu`.
    ///
    /// # Errors
    /// Returns `GridError::LetterCount` if the number of letters is not
    /// `rows * cols`, `GridError::TooLarge` if that product is out of range,
    /// or `GridError::InvalidTile` for a non-letter.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Grid, Position};
    ///
    /// let grid = Grid::from_letters("qite", 2, 2).unwrap();
    /// assert_eq!(grid.tile(Position::new(0, 0)), "qu");
    /// ```
    pub fn from_letters(letters: &str, rows: usize, cols: usize) -> Result<Self, GridError> {
        let cells = cell_count(rows, cols)?;

        let letters: Vec<char> = normalize(letters).chars().collect();
        if letters.len() != cells {
            return Err(GridError::LetterCount {
                expected: cells,
                found: letters.len(),
            });
        }

        let grid: Vec<Vec<String>> = letters
            .chunks(cols)
            .map(|chunk| chunk.iter().map(|&c| letter_tile(c)).collect())
            .collect();
        Self::new(&grid)
    }

    /// Parse a grid from text, one row per line
    ///
    /// A line with whitespace is split into tiles (`"qu i t"`); a line without
    /// is one letter per tile with `q` expanded to `qu`. Blank lines are
    /// ignored. A leading line holding only a number is the board size and
    /// must match the number of rows.
    ///
    /// # Errors
    /// Returns `GridError` if the parsed rows do not form a valid grid, or
    /// `GridError::SizeHeader` if the size line disagrees with them.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Grid;
    ///
    /// let grid = Grid::parse("2\nc a\nt s\n").unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 2));
    ///
    /// let grid = Grid::parse("cat\ndog\n").unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 3));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();

        let header = lines
            .next_if(|first| first.bytes().all(|b| b.is_ascii_digit()))
            .map(str::to_string);

        let rows: Vec<Vec<String>> = lines
            .map(|line| {
                if line.contains(char::is_whitespace) {
                    line.split_whitespace().map(str::to_string).collect()
                } else {
                    line.chars().map(letter_tile).collect()
                }
            })
            .collect();

        let grid = Self::new(&rows)?;
        if let Some(header) = header
            && header.parse::<usize>().ok() != Some(grid.rows)
        {
            return Err(GridError::SizeHeader {
                header,
                rows: grid.rows,
            });
        }
        Ok(grid)
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed grid
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Row-major index of a position
    ///
    /// # Panics
    /// Panics in debug builds if the position is out of bounds.
    #[inline]
    #[must_use]
    pub fn index(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "{pos} outside {}x{}", self.rows, self.cols);
        pos.row * self.cols + pos.col
    }

    /// Whether a position lies inside the grid
    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Tile at a position
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    #[inline]
    #[must_use]
    pub fn tile(&self, pos: Position) -> &str {
        &self.tiles[self.index(pos)]
    }

    /// Tile at a position, or `None` when out of bounds
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&str> {
        self.contains(pos).then(|| self.tile(pos))
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// In-bounds neighbours of a position (up to eight)
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let next = Position::new(pos.row.checked_add_signed(dr)?, pos.col.checked_add_signed(dc)?);
            self.contains(next).then_some(next)
        })
    }

    /// Tiles row by row
    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.tiles.chunks(self.cols)
    }
}

/// Display tiles capitalized, e.g. `Qu`, padded to line up in columns
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.tiles.iter().map(String::len).max().unwrap_or(1);
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|tile| format!("{:<width$}", capitalize(tile)))
                .collect();
            write!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}

/// Uppercase the first letter of a tile
#[must_use]
pub fn capitalize(tile: &str) -> String {
    let mut chars = tile.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn letter_tile(letter: char) -> String {
    match letter.to_ascii_lowercase() {
        'q' => "qu".to_string(),
        other => other.to_string(),
    }
}

fn normalize_tile(tile: &str, row: usize, col: usize) -> Result<String, GridError> {
    let normalized = normalize(tile);
    if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(GridError::InvalidTile {
            row,
            col,
            tile: tile.to_string(),
        });
    }
    Ok(normalized)
}
