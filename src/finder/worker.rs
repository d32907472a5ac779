//! Background board searches
//!
//! Each request gets its own thread. The board is moved in by value and the
//! word list comes back over a channel, so the caller shares no mutable state
//! with the search. A request whose thread dies before replying is reported as
//! [`SearchOutcome::Failed`], never as an empty result.

use super::find_all;
use crate::core::Board;
use crate::dictionary::Dictionary;
use std::fmt;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};

/// Search function run on the background thread
pub type SearchFn = fn(&Board, &Dictionary) -> Vec<String>;

/// Identifies one search request; later requests have larger ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchId(u64);

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Final result of a background search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Words findable on the board (possibly none)
    Found(Vec<String>),
    /// The worker stopped without producing a result
    Failed(String),
}

/// Spawns background searches against a shared dictionary
pub struct FinderWorker {
    dictionary: Arc<Dictionary>,
    search: SearchFn,
    next_id: u64,
}

impl FinderWorker {
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self::with_search(dictionary, find_all)
    }

    /// Use a custom search function instead of [`find_all`]
    #[must_use]
    pub fn with_search(dictionary: Arc<Dictionary>, search: SearchFn) -> Self {
        Self {
            dictionary,
            search,
            next_id: 0,
        }
    }

    /// Start searching `board` on a new thread
    ///
    /// Dropping the returned handle abandons interest in the result; the
    /// thread finishes on its own and its reply is discarded.
    ///
    /// # Errors
    /// Returns an I/O error if the OS refuses to create the thread.
    pub fn spawn(&mut self, board: Board) -> io::Result<PendingSearch> {
        self.next_id += 1;
        let id = SearchId(self.next_id);
        let dictionary = Arc::clone(&self.dictionary);
        let search = self.search;
        let (sender, receiver) = mpsc::channel();

        let handle = thread::Builder::new()
            .name(format!("finder-{}", id.0))
            .spawn(move || {
                debug!(%id, %board, "search started");
                let words = search(&board, &dictionary);
                debug!(%id, found = words.len(), "search finished");
                // The receiver is gone when the request was superseded
                let _ = sender.send(words);
            })?;

        Ok(PendingSearch {
            id,
            receiver,
            handle: Some(handle),
            delivered: false,
        })
    }
}

/// Handle to one in-flight search
///
/// Yields its outcome exactly once, through whichever of
/// [`try_outcome`](Self::try_outcome), [`wait_timeout`](Self::wait_timeout) or
/// [`wait`](Self::wait) observes it first.
pub struct PendingSearch {
    id: SearchId,
    receiver: Receiver<Vec<String>>,
    handle: Option<JoinHandle<()>>,
    delivered: bool,
}

impl PendingSearch {
    #[inline]
    #[must_use]
    pub const fn id(&self) -> SearchId {
        self.id
    }

    /// Poll without blocking
    pub fn try_outcome(&mut self) -> Option<SearchOutcome> {
        if self.delivered {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(words) => Some(self.deliver(SearchOutcome::Found(words))),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                let outcome = SearchOutcome::Failed(self.failure_reason());
                Some(self.deliver(outcome))
            }
        }
    }

    /// Block for at most `timeout`
    pub fn wait_timeout(&mut self, timeout: Duration) -> Option<SearchOutcome> {
        if self.delivered {
            return None;
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(words) => Some(self.deliver(SearchOutcome::Found(words))),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                let outcome = SearchOutcome::Failed(self.failure_reason());
                Some(self.deliver(outcome))
            }
        }
    }

    /// Block until the search finishes
    ///
    /// Returns `None` if the outcome was already taken.
    pub fn wait(mut self) -> Option<SearchOutcome> {
        if self.delivered {
            return None;
        }
        let outcome = match self.receiver.recv() {
            Ok(words) => SearchOutcome::Found(words),
            Err(mpsc::RecvError) => SearchOutcome::Failed(self.failure_reason()),
        };
        Some(self.deliver(outcome))
    }

    fn deliver(&mut self, outcome: SearchOutcome) -> SearchOutcome {
        self.delivered = true;
        if let SearchOutcome::Failed(reason) = &outcome {
            warn!(id = %self.id, %reason, "search failed");
        }
        outcome
    }

    fn failure_reason(&mut self) -> String {
        let Some(handle) = self.handle.take() else {
            return "search worker already joined".to_string();
        };
        match handle.join() {
            Ok(()) => "search worker exited without a result".to_string(),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(ToString::to_string)
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                format!("search worker panicked: {message}")
            }
        }
    }
}

impl fmt::Debug for PendingSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSearch")
            .field("id", &self.id)
            .field("delivered", &self.delivered)
            .finish_non_exhaustive()
    }
}
