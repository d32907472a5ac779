//! Batch word finding
//!
//! Runs the tracer over every dictionary word for one board. The work is
//! exponential per word in the worst case, so it is spread across rayon's
//! pool and, for interactive callers, moved off the caller's thread by
//! [`FinderWorker`].

mod worker;

pub use worker::{FinderWorker, PendingSearch, SearchFn, SearchId, SearchOutcome};

use crate::core::Board;
use crate::dictionary::Dictionary;
use crate::tracer::is_traceable;
use rayon::prelude::*;

/// Every dictionary word that can be traced on `board`, in dictionary order
///
/// # Examples
/// ```
/// use wordfind::core::Board;
/// use wordfind::dictionary::Dictionary;
/// use wordfind::finder::find_all;
///
/// let board = Board::parse("ca/ts").unwrap();
/// let dictionary = Dictionary::new(["cat", "dog", "sat", "cats"]);
/// assert_eq!(find_all(&board, &dictionary), vec!["cat", "sat", "cats"]);
/// ```
#[must_use]
pub fn find_all(board: &Board, dictionary: &Dictionary) -> Vec<String> {
    dictionary
        .words()
        .par_iter()
        .filter(|word| is_traceable(board, word))
        .cloned()
        .collect()
}
