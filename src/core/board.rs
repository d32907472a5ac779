//! Letter grid representation
//!
//! A Board is a rectangular, row-major grid of letter cells. Cells also carry a
//! `selected` flag that only the view layer reads; searches never touch it.

use super::{Path, Position};
use std::fmt;

/// A single letter tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: char,
    pub selected: bool,
}

impl Cell {
    #[must_use]
    pub const fn new(letter: char) -> Self {
        Self {
            letter,
            selected: false,
        }
    }
}

/// Error type for malformed boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Empty,
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    InvalidLetter(char),
    CellCount {
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Board must have at least one row and one column"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {row} has {found} letters, expected {expected} like the first row"
            ),
            Self::InvalidLetter(c) => write!(f, "Board letter '{c}' is not an ASCII letter"),
            Self::CellCount { expected, found } => {
                write!(f, "Board needs {expected} cells, got {found}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A rectangular grid of letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board from row-major letters
    ///
    /// # Errors
    /// Returns `BoardError` if either dimension is zero or the letter count
    /// does not equal `width * height`.
    pub fn new(width: usize, height: usize, letters: Vec<char>) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::Empty);
        }
        let expected = width.checked_mul(height).unwrap_or(usize::MAX);
        if letters.len() != expected {
            return Err(BoardError::CellCount {
                expected,
                found: letters.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells: letters.into_iter().map(Cell::new).collect(),
        })
    }

    /// Build a board from one string per row
    ///
    /// Letters are lower-cased; whitespace inside a row is ignored.
    ///
    /// # Errors
    /// Returns `BoardError` for empty input, rows of different lengths, or
    /// characters that are not ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordfind::core::{Board, Position};
    ///
    /// let board = Board::from_rows(&["ca", "ts"]).unwrap();
    /// assert_eq!(board.width(), 2);
    /// assert_eq!(board.letter_at(Position::new(1, 0)), Some('t'));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let mut letters = Vec::new();
        let mut width = None;

        for (row, text) in rows.iter().enumerate() {
            let row_letters: Vec<char> = text
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_ascii_lowercase())
                .collect();

            if let Some(&bad) = row_letters.iter().find(|c| !c.is_ascii_lowercase()) {
                return Err(BoardError::InvalidLetter(bad));
            }

            let expected = *width.get_or_insert(row_letters.len());
            if row_letters.len() != expected {
                return Err(BoardError::RaggedRows {
                    row,
                    expected,
                    found: row_letters.len(),
                });
            }
            letters.extend(row_letters);
        }

        Self::new(width.unwrap_or(0), rows.len(), letters)
    }

    /// Parse the compact text form: rows separated by `/` or `,`
    ///
    /// # Errors
    /// Same as [`Board::from_rows`].
    ///
    /// # Examples
    /// ```
    /// use wordfind::core::Board;
    ///
    /// let board = Board::parse("ca/ts").unwrap();
    /// assert_eq!(board.to_string(), "ca/ts");
    /// assert!(Board::parse("cat/s").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = text
            .split(['/', ','])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_rows(&rows)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.column < self.width
    }

    /// Get the cell at a position, or `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        if self.contains(position) {
            self.cells.get(position.row * self.width + position.column)
        } else {
            None
        }
    }

    /// Get the letter at a position, or `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: Position) -> Option<char> {
        self.cell(position).map(|cell| cell.letter)
    }

    /// Check whether any cell holds this letter
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.cells.iter().any(|cell| cell.letter == letter)
    }

    /// All positions in row-major order (row ascending, then column)
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |row| (0..width).map(move |column| Position::new(row, column)))
    }

    /// In-bounds neighbours of a position in search order
    ///
    /// Row offset -1, 0, 1 outermost, then column offset -1, 0, 1, skipping the
    /// position itself.
    ///
    /// # Examples
    /// ```
    /// use wordfind::core::{Board, Position};
    ///
    /// let board = Board::parse("abc/def/ghi").unwrap();
    /// let corner: Vec<Position> = board.neighbors(Position::new(0, 0)).collect();
    /// assert_eq!(
    ///     corner,
    ///     vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
    /// );
    /// ```
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + use<> {
        const OFFSETS: [isize; 3] = [-1, 0, 1];
        let (width, height) = (self.width, self.height);

        OFFSETS
            .into_iter()
            .flat_map(|row_offset| {
                OFFSETS
                    .into_iter()
                    .map(move |column_offset| (row_offset, column_offset))
            })
            .filter(|&offset| offset != (0, 0))
            .filter_map(move |(row_offset, column_offset)| {
                let row = position.row.checked_add_signed(row_offset)?;
                let column = position.column.checked_add_signed(column_offset)?;
                (row < height && column < width).then_some(Position::new(row, column))
            })
    }

    /// Letters of each row as strings
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.letter).collect())
            .collect()
    }

    /// Check the view-layer highlight flag of a cell
    #[must_use]
    pub fn is_selected(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|cell| cell.selected)
    }

    /// Clear every highlight flag
    pub fn clear_selection(&mut self) {
        for cell in &mut self.cells {
            cell.selected = false;
        }
    }

    /// Highlight exactly the cells of a path
    pub fn select_path(&mut self, path: &Path) {
        self.clear_selection();
        for &position in path {
            if self.contains(position) {
                let index = position.row * self.width + position.column;
                self.cells[index].selected = true;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> Board {
        Board::parse("abc/def/ghi").unwrap()
    }

    #[test]
    fn board_from_rows_valid() {
        let board = Board::from_rows(&["CA", "ts"]).unwrap();
        assert_eq!(board.width(), 2);
        assert_eq!(board.height(), 2);
        assert_eq!(board.rows(), vec!["ca".to_string(), "ts".to_string()]);
    }

    #[test]
    fn board_rejects_ragged_rows() {
        assert_eq!(
            Board::from_rows(&["abc", "de"]),
            Err(BoardError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn board_rejects_empty() {
        assert_eq!(Board::parse(""), Err(BoardError::Empty));
        assert_eq!(Board::new(0, 3, vec![]), Err(BoardError::Empty));
    }

    #[test]
    fn board_rejects_non_letters() {
        assert_eq!(Board::parse("a1/bc"), Err(BoardError::InvalidLetter('1')));
    }

    #[test]
    fn board_new_checks_cell_count() {
        assert_eq!(
            Board::new(2, 2, vec!['a', 'b', 'c']),
            Err(BoardError::CellCount {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn board_new_overflowing_size_is_error() {
        assert!(matches!(
            Board::new(usize::MAX, 2, vec!['a']),
            Err(BoardError::CellCount { found: 1, .. })
        ));
    }

    #[test]
    fn board_parse_accepts_commas() {
        let board = Board::parse("ab, cd").unwrap();
        assert_eq!(board.to_string(), "ab/cd");
    }

    #[test]
    fn positions_are_row_major() {
        let board = Board::parse("abc/def").unwrap();
        let positions: Vec<Position> = board.positions().collect();
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(0, 1));
        assert_eq!(positions[3], Position::new(1, 0));
        assert_eq!(positions[5], Position::new(1, 2));
    }

    #[test]
    fn neighbors_of_center_in_search_order() {
        let board = grid_3x3();
        let neighbors: Vec<Position> = board.neighbors(Position::new(1, 1)).collect();
        assert_eq!(
            neighbors,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn neighbors_clip_at_edges() {
        let board = grid_3x3();
        assert_eq!(board.neighbors(Position::new(2, 2)).count(), 3);
        assert_eq!(board.neighbors(Position::new(0, 1)).count(), 5);

        let single = Board::parse("a").unwrap();
        assert_eq!(single.neighbors(Position::new(0, 0)).count(), 0);
    }

    #[test]
    fn neighbors_are_symmetric() {
        let board = Board::parse("abcd/efgh/ijkl").unwrap();
        for from in board.positions() {
            for to in board.neighbors(from) {
                assert!(
                    board.neighbors(to).any(|back| back == from),
                    "{from} -> {to} is not symmetric"
                );
            }
        }
    }

    #[test]
    fn letter_at_out_of_bounds() {
        let board = grid_3x3();
        assert_eq!(board.letter_at(Position::new(2, 1)), Some('h'));
        assert_eq!(board.letter_at(Position::new(3, 0)), None);
        assert_eq!(board.letter_at(Position::new(0, 3)), None);
    }

    #[test]
    fn select_path_highlights_only_path() {
        let mut board = grid_3x3();
        let path = Path::from(vec![Position::new(0, 0), Position::new(1, 1)]);

        board.select_path(&path);
        assert!(board.is_selected(Position::new(0, 0)));
        assert!(board.is_selected(Position::new(1, 1)));
        assert!(!board.is_selected(Position::new(0, 1)));

        board.select_path(&Path::from(vec![Position::new(2, 2)]));
        assert!(!board.is_selected(Position::new(0, 0)));
        assert!(board.is_selected(Position::new(2, 2)));

        board.clear_selection();
        assert!(board.positions().all(|p| !board.is_selected(p)));
    }
}
