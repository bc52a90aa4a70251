//! `grid` — Board model and input decoding for the word-search solver.
//!
//! A board arrives as a flat string of `rows * cols` lowercase letters in
//! row-major order with no separators (the classic puzzle feed is 16 letters
//! for a 4x4 board). This module validates that string once, up front, and
//! produces an immutable [`Grid`] the searcher can index without further
//! checks.
//!
//! The grid is never mutated during a search; per-path bookkeeping (the
//! visited mask) lives in the searcher's own state.

use crate::errors::BoardError;

/// Default board dimensions for the classic 4x4 puzzle.
pub const DEFAULT_ROWS: usize = 4;
/// See [`DEFAULT_ROWS`].
pub const DEFAULT_COLS: usize = 4;

/// A zero-based `(row, col)` board coordinate.
pub type Cell = (usize, usize);

/// An immutable rows x cols matrix of lowercase letters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cell letters as ASCII bytes (`b'a'..=b'z'`).
    cells: Vec<u8>,
}

impl Grid {
    /// Decode a flat board string into a `Grid`.
    ///
    /// `input` must contain exactly `rows * cols` lowercase ASCII letters in
    /// row-major order. This is the single validation point for board data:
    /// everything downstream assumes a well-formed grid.
    ///
    /// # Errors
    ///
    /// - [`BoardError::EmptyDimension`] if `rows` or `cols` is zero.
    /// - [`BoardError::WrongCellCount`] if the character count is off.
    /// - [`BoardError::InvalidCell`] on the first non-`a-z` character.
    pub fn parse(input: &str, rows: usize, cols: usize) -> Result<Grid, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyDimension { rows, cols });
        }

        let expected = rows * cols;
        let mut cells = Vec::with_capacity(expected);
        for (position, ch) in input.chars().enumerate() {
            if !ch.is_ascii_lowercase() {
                return Err(BoardError::InvalidCell { position, found: ch });
            }
            cells.push(ch as u8);
        }

        if cells.len() != expected {
            return Err(BoardError::WrongCellCount { expected, actual: cells.len() });
        }

        Ok(Grid { rows, cols, cells })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The letter at `(row, col)` as an ASCII byte.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds; callers bounds-check first
    /// (the searcher's entry guard does exactly that).
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.rows && col < self.cols, "cell ({row},{col}) out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Flat row-major index of `(row, col)`, used for the visited mask.
    #[must_use]
    pub(crate) fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_4x4() {
        let grid = Grid::parse("abcdefghijklmnop", 4, 4).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.letter(0, 0), b'a');
        assert_eq!(grid.letter(0, 3), b'd');
        assert_eq!(grid.letter(3, 0), b'm');
        assert_eq!(grid.letter(3, 3), b'p');
    }

    #[test]
    fn test_parse_rectangular() {
        // 2 rows x 3 cols, row-major: "abc" / "def"
        let grid = Grid::parse("abcdef", 2, 3).unwrap();
        assert_eq!(grid.letter(0, 2), b'c');
        assert_eq!(grid.letter(1, 0), b'd');
    }

    #[test]
    fn test_parse_1x1() {
        let grid = Grid::parse("z", 1, 1).unwrap();
        assert_eq!(grid.letter(0, 0), b'z');
    }

    #[test]
    fn test_parse_wrong_cell_count() {
        let err = Grid::parse("abc", 2, 2).unwrap_err();
        assert!(matches!(err, BoardError::WrongCellCount { expected: 4, actual: 3 }));
    }

    #[test]
    fn test_parse_too_many_cells() {
        let err = Grid::parse("abcde", 2, 2).unwrap_err();
        assert!(matches!(err, BoardError::WrongCellCount { expected: 4, actual: 5 }));
    }

    #[test]
    fn test_parse_rejects_uppercase() {
        let err = Grid::parse("abCd", 2, 2).unwrap_err();
        assert!(matches!(err, BoardError::InvalidCell { position: 2, found: 'C' }));
    }

    #[test]
    fn test_parse_rejects_digit_and_whitespace() {
        assert!(matches!(
            Grid::parse("a1cd", 2, 2).unwrap_err(),
            BoardError::InvalidCell { position: 1, found: '1' }
        ));
        assert!(matches!(
            Grid::parse("ab d", 2, 2).unwrap_err(),
            BoardError::InvalidCell { position: 2, found: ' ' }
        ));
    }

    #[test]
    fn test_parse_zero_dimension() {
        assert!(matches!(
            Grid::parse("", 0, 4).unwrap_err(),
            BoardError::EmptyDimension { rows: 0, cols: 4 }
        ));
        assert!(matches!(
            Grid::parse("", 4, 0).unwrap_err(),
            BoardError::EmptyDimension { rows: 4, cols: 0 }
        ));
    }

    #[test]
    fn test_flat_index_row_major() {
        let grid = Grid::parse("abcdef", 2, 3).unwrap();
        assert_eq!(grid.flat_index(0, 0), 0);
        assert_eq!(grid.flat_index(0, 2), 2);
        assert_eq!(grid.flat_index(1, 0), 3);
        assert_eq!(grid.flat_index(1, 2), 5);
    }
}
