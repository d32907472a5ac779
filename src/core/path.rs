//! Grid positions and traced paths

use super::Board;
use std::fmt;

/// A (row, column) coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Check whether two positions touch, diagonals included
    ///
    /// A position is not adjacent to itself.
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let rows = self.row.abs_diff(other.row);
        let columns = self.column.abs_diff(other.column);
        rows <= 1 && columns <= 1 && (rows | columns) != 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Ordered sequence of board positions spelling a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Position>);

impl Path {
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    /// Check that this path is a valid trace of `word` on `board`
    ///
    /// Valid means: one position per letter, every position in bounds and
    /// distinct, consecutive positions adjacent, and the letters read along the
    /// path equal the word.
    #[must_use]
    pub fn spells(&self, board: &Board, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        if letters.len() != self.0.len() {
            return false;
        }

        let letters_match = self
            .0
            .iter()
            .zip(&letters)
            .all(|(&position, &letter)| board.letter_at(position) == Some(letter));
        let adjacent = self.0.windows(2).all(|pair| pair[0].is_adjacent(pair[1]));
        let distinct = self
            .0
            .iter()
            .enumerate()
            .all(|(i, position)| !self.0[..i].contains(position));

        letters_match && adjacent && distinct
    }
}

impl From<Vec<Position>> for Path {
    fn from(positions: Vec<Position>) -> Self {
        Self(positions)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", steps.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_includes_diagonals() {
        let center = Position::new(1, 1);
        assert!(center.is_adjacent(Position::new(0, 0)));
        assert!(center.is_adjacent(Position::new(2, 2)));
        assert!(center.is_adjacent(Position::new(1, 2)));
        assert!(!center.is_adjacent(Position::new(1, 3)));
        assert!(!center.is_adjacent(Position::new(3, 3)));
    }

    #[test]
    fn position_not_adjacent_to_itself() {
        let p = Position::new(2, 2);
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn adjacency_symmetric() {
        let a = Position::new(0, 1);
        let b = Position::new(1, 0);
        assert_eq!(a.is_adjacent(b), b.is_adjacent(a));
    }

    #[test]
    fn spells_accepts_valid_path() {
        let board = Board::parse("ca/ts").unwrap();
        let path = Path::from(vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
        ]);
        assert!(path.spells(&board, "cat"));
        assert!(!path.spells(&board, "cab"));
        assert!(!path.spells(&board, "cats"));
    }

    #[test]
    fn spells_rejects_repeated_position() {
        let board = Board::parse("aa/bb").unwrap();
        let path = Path::from(vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 0),
        ]);
        assert!(!path.spells(&board, "aaa"));
    }

    #[test]
    fn spells_rejects_gap() {
        let board = Board::parse("abc").unwrap();
        let path = Path::from(vec![Position::new(0, 0), Position::new(0, 2)]);
        assert!(!path.spells(&board, "ac"));
    }

    #[test]
    fn empty_path_spells_empty_word() {
        let board = Board::parse("ab").unwrap();
        assert!(Path::default().spells(&board, ""));
    }

    #[test]
    fn path_display() {
        let path = Path::from(vec![Position::new(0, 0), Position::new(1, 1)]);
        assert_eq!(path.to_string(), "(0, 0) -> (1, 1)");
    }
}
