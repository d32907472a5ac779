//! Path tracing on a letter grid
//!
//! Finds a sequence of distinct, adjacent cells whose letters spell a word.
//!
//! The search is depth-first with backtracking. Starting cells are tried in
//! row-major order and neighbours in [`Board::neighbors`] order, so the same
//! board and word always produce the same path (the first one found, not the
//! shortest or smallest).

use crate::core::{Board, Path, Position};

/// Trace `word` on `board`
///
/// Returns the first path found, or `None` if no path spells the word. The
/// empty word is traced by the empty path.
///
/// Letters are compared exactly, so `word` must use the board's casing
/// (lowercase for boards built by this crate).
///
/// # Examples
/// ```
/// use wordfind::core::{Board, Position};
/// use wordfind::tracer::trace;
///
/// let board = Board::parse("ca/ts").unwrap();
/// let path = trace(&board, "cat").unwrap();
/// assert_eq!(
///     path.positions(),
///     &[Position::new(0, 0), Position::new(0, 1), Position::new(1, 0)]
/// );
/// assert!(trace(&board, "dog").is_none());
/// ```
#[must_use]
pub fn trace(board: &Board, word: &str) -> Option<Path> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return Some(Path::default());
    }

    // Cheap rejection before any backtracking
    if !letters.iter().all(|&letter| board.contains_letter(letter)) {
        return None;
    }

    // One frame of untried candidates per depth; `path` holds one position per
    // frame below the top, so depth == path.len() when taking the next candidate.
    let mut path: Vec<Position> = Vec::with_capacity(letters.len());
    let mut frames: Vec<std::vec::IntoIter<Position>> =
        vec![board.positions().collect::<Vec<_>>().into_iter()];

    while let Some(frame) = frames.last_mut() {
        let Some(position) = frame.next() else {
            frames.pop();
            path.pop();
            continue;
        };

        let depth = path.len();
        if board.letter_at(position) != Some(letters[depth]) || path.contains(&position) {
            continue;
        }

        path.push(position);
        if path.len() == letters.len() {
            return Some(Path::from(path));
        }
        frames.push(board.neighbors(position).collect::<Vec<_>>().into_iter());
    }

    None
}

/// Check whether `word` can be traced on `board`
#[inline]
#[must_use]
pub fn is_traceable(board: &Board, word: &str) -> bool {
    trace(board, word).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cats_board() -> Board {
        Board::parse("ca/ts").unwrap()
    }

    /// Exhaustive reference: try every assignment of matching cells to letters
    fn brute_force_exists(board: &Board, word: &str) -> bool {
        fn extend(board: &Board, letters: &[char], chosen: &mut Vec<Position>) -> bool {
            if chosen.len() == letters.len() {
                return true;
            }
            let wanted = letters[chosen.len()];
            for position in board.positions() {
                if board.letter_at(position) != Some(wanted) || chosen.contains(&position) {
                    continue;
                }
                if chosen.last().is_some_and(|last| !last.is_adjacent(position)) {
                    continue;
                }
                chosen.push(position);
                if extend(board, letters, chosen) {
                    return true;
                }
                chosen.pop();
            }
            false
        }

        let letters: Vec<char> = word.chars().collect();
        extend(board, &letters, &mut Vec::new())
    }

    fn random_board(rng: &mut StdRng, width: usize, height: usize, alphabet: &[char]) -> Board {
        let letters = (0..width * height)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();
        Board::new(width, height, letters).unwrap()
    }

    fn random_word(rng: &mut StdRng, alphabet: &[char]) -> String {
        let len = rng.random_range(1..=6);
        (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect()
    }

    #[test]
    fn trace_cat_scenario() {
        let board = cats_board();
        let path = trace(&board, "cat").unwrap();

        assert_eq!(
            path.positions(),
            &[
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0)
            ]
        );
        assert!(path.spells(&board, "cat"));
    }

    #[test]
    fn trace_cats_scenario() {
        let board = cats_board();
        let path = trace(&board, "cats").unwrap();

        assert_eq!(path.len(), 4);
        assert_eq!(
            path.positions(),
            &[
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
        assert!(path.spells(&board, "cats"));
    }

    #[test]
    fn trace_missing_letter_returns_none() {
        assert!(trace(&cats_board(), "dog").is_none());
    }

    #[test]
    fn trace_empty_word_is_empty_path() {
        let path = trace(&cats_board(), "").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn trace_does_not_reuse_cells() {
        // Only one 'a' on the board
        let board = Board::parse("ab/cd").unwrap();
        assert!(trace(&board, "aba").is_none());
        assert!(trace(&board, "abd").is_some());
    }

    #[test]
    fn trace_reuses_letter_from_distinct_cells() {
        let board = Board::parse("aa/bb").unwrap();
        let path = trace(&board, "aab").unwrap();
        assert!(path.spells(&board, "aab"));
    }

    #[test]
    fn trace_rejects_non_adjacent_letters() {
        let board = Board::parse("axb/xxx/xxx").unwrap();
        assert!(trace(&board, "ab").is_none());
    }

    #[test]
    fn trace_backtracks_from_dead_end() {
        // First 'b' found from 'a' (row-major) is (0, 1), which has no 'c'
        // neighbour; the search must back up and use (1, 0).
        let board = Board::parse("abx/bxx/cxx").unwrap();
        let path = trace(&board, "abc").unwrap();
        assert_eq!(
            path.positions(),
            &[
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0)
            ]
        );
    }

    #[test]
    fn trace_first_found_follows_row_major_start() {
        let board = Board::parse("ab/ba").unwrap();
        let path = trace(&board, "ab").unwrap();
        assert_eq!(
            path.positions(),
            &[Position::new(0, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn trace_is_case_sensitive() {
        assert!(trace(&cats_board(), "CAT").is_none());
    }

    #[test]
    fn trace_full_board_snake() {
        let board = Board::parse("abcd/hgfe/ijkl/ponm").unwrap();
        let word = "abcdefghijklmnop";
        let path = trace(&board, word).unwrap();
        assert_eq!(path.len(), 16);
        assert!(path.spells(&board, word));
    }

    #[test]
    fn trace_word_longer_than_board() {
        let board = Board::parse("aa/aa").unwrap();
        assert!(trace(&board, "aaaa").is_some());
        assert!(trace(&board, "aaaaa").is_none());
    }

    #[test]
    fn trace_is_idempotent() {
        let board = Board::parse("sere/tats/eser/stat").unwrap();
        for word in ["test", "seat", "stares", "tasters"] {
            assert_eq!(trace(&board, word), trace(&board, word));
        }
    }

    #[test]
    fn is_traceable_matches_trace() {
        let board = cats_board();
        assert!(is_traceable(&board, "sat"));
        assert!(!is_traceable(&board, "tact"));
    }

    #[test]
    fn trace_agrees_with_brute_force_on_small_boards() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let alphabet = ['a', 'b', 'c'];

        for _ in 0..200 {
            let width = rng.random_range(1..=3);
            let height = rng.random_range(1..=3);
            let board = random_board(&mut rng, width, height, &alphabet);

            for _ in 0..10 {
                let word = random_word(&mut rng, &alphabet);
                let traced = trace(&board, &word);

                assert_eq!(
                    traced.is_some(),
                    brute_force_exists(&board, &word),
                    "board {board}, word {word}"
                );
                if let Some(path) = traced {
                    assert!(path.spells(&board, &word), "board {board}, word {word}");
                }
            }
        }
    }
}
