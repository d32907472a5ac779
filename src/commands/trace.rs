//! Word tracing command
//!
//! Traces a single word on a board and reports the path.

use crate::core::{Board, Path};
use crate::dictionary::{Dictionary, loader::normalize_word};
use crate::tracer::trace;

/// Result of tracing one word
pub struct TraceResult {
    pub word: String,
    /// The board with the path cells selected
    pub board: Board,
    pub path: Option<Path>,
    pub in_dictionary: bool,
}

/// Trace `word` on `board`
///
/// # Errors
///
/// Returns an error if the word is empty or contains non-letters.
pub fn trace_word(board: &Board, word: &str, dictionary: &Dictionary) -> Result<TraceResult, String> {
    let word = normalize_word(word).ok_or_else(|| format!("Invalid word: '{}'", word.trim()))?;

    let mut board = board.clone();
    let path = trace(&board, &word);
    if let Some(path) = &path {
        board.select_path(path);
    }

    Ok(TraceResult {
        in_dictionary: dictionary.lookup(&word),
        word,
        board,
        path,
    })
}
