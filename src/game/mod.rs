//! Game state: board, background search, and the timed round
//!
//! A [`Game`] is owned by the top-level loop and driven by calling
//! [`Game::poll`] regularly. Starting a round generates a board and hands a
//! copy to a background search; the round clock starts only once the list of
//! findable words comes back.

mod hooks;
mod round;

pub use hooks::RoundHooks;
pub use round::{Countdown, Round, RoundState};

use crate::config::{ConfigError, GameConfig};
use crate::core::{Board, Path};
use crate::dictionary::Dictionary;
use crate::finder::{FinderWorker, PendingSearch, SearchId, SearchOutcome};
use crate::sampler::LetterSampler;
use crate::tracer::trace;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Consecutive failed searches tolerated before giving up on a round
pub const MAX_SEARCH_ATTEMPTS: usize = 3;

/// Coarse phase for the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No round requested yet, or the last search gave up
    Idle,
    /// Waiting for the background search
    Loading,
    Playing,
    Over,
}

/// Notable transitions reported by [`Game::poll`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted { findable: usize },
    RoundEnded { found: usize, findable: usize },
    SearchFailed { reason: String, retrying: bool },
}

/// Why a submitted word was not credited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    RoundNotRunning,
    AlreadyFound(String),
    NotOnBoard(String),
    NotInDictionary(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Type a word first"),
            Self::RoundNotRunning => write!(f, "No round in progress"),
            Self::AlreadyFound(word) => write!(f, "'{word}' was already found"),
            Self::NotOnBoard(word) => write!(f, "'{word}' cannot be traced on this board"),
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the dictionary"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Owned application state for one player
pub struct Game {
    config: GameConfig,
    sampler: LetterSampler,
    rng: StdRng,
    worker: FinderWorker,
    hooks: RoundHooks,
    board: Option<Board>,
    findable: Vec<String>,
    pending: Option<PendingSearch>,
    round: Option<Round>,
    failed_searches: usize,
}

impl Game {
    /// Create a game after validating `config`
    ///
    /// # Errors
    /// Returns `ConfigError` if any setting is invalid.
    pub fn new(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let sampler = config.sampler()?;
        let worker = FinderWorker::new(Arc::clone(&config.dictionary));

        Ok(Self {
            config,
            sampler,
            rng,
            worker,
            hooks: RoundHooks::default(),
            board: None,
            findable: Vec::new(),
            pending: None,
            round: None,
            failed_searches: 0,
        })
    }

    /// Create a game seeded from `seed`, or from OS entropy when `None`
    ///
    /// # Errors
    /// Returns `ConfigError` if any setting is invalid.
    pub fn with_seed(config: GameConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(config, rng)
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: RoundHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Replace the background search worker
    #[must_use]
    pub fn with_worker(mut self, worker: FinderWorker) -> Self {
        self.worker = worker;
        self
    }

    /// Generate a fresh board and start searching it
    ///
    /// Any round in progress is discarded, and an unfinished search for the
    /// previous board is abandoned.
    ///
    /// # Errors
    /// Returns an I/O error if the search thread cannot be spawned.
    pub fn new_round(&mut self) -> io::Result<SearchId> {
        self.failed_searches = 0;
        self.regenerate()
    }

    /// Start a round on a given board instead of a random one
    ///
    /// # Errors
    /// Returns an I/O error if the search thread cannot be spawned.
    pub fn load_board(&mut self, board: Board) -> io::Result<SearchId> {
        self.round = None;
        self.findable.clear();
        // Dropping the old handle unsubscribes from its result
        self.pending = None;

        let pending = self.worker.spawn(board.clone())?;
        let id = pending.id();
        info!(%id, %board, "new board submitted for search");
        self.board = Some(board);
        self.pending = Some(pending);
        Ok(id)
    }

    fn regenerate(&mut self) -> io::Result<SearchId> {
        let board = self.sampler.generate_board(
            self.config.board_width,
            self.config.board_height,
            &mut self.rng,
        );
        self.load_board(board)
    }

    /// Apply a finished search or advance the clock
    ///
    /// Non-blocking; call it on every loop iteration.
    pub fn poll(&mut self, now: Instant) -> Option<GameEvent> {
        if let Some(outcome) = self.pending.as_mut().and_then(PendingSearch::try_outcome) {
            return Some(self.apply_outcome(outcome, now));
        }
        self.tick(now)
    }

    /// Block up to `timeout` for the pending search, then apply it
    pub fn wait_for_search(&mut self, timeout: Duration) -> Option<GameEvent> {
        let outcome = self
            .pending
            .as_mut()
            .and_then(|pending| pending.wait_timeout(timeout))?;
        Some(self.apply_outcome(outcome, Instant::now()))
    }

    /// Advance the round clock
    pub fn tick(&mut self, now: Instant) -> Option<GameEvent> {
        let round = self.round.as_mut()?;
        if !round.tick(now) {
            return None;
        }

        let found = round.words_found().len();
        info!(found, findable = self.findable.len(), "round ended");
        self.hooks.round_ended();
        Some(GameEvent::RoundEnded {
            found,
            findable: self.findable.len(),
        })
    }

    fn apply_outcome(&mut self, outcome: SearchOutcome, now: Instant) -> GameEvent {
        self.pending = None;

        match outcome {
            SearchOutcome::Found(words) => {
                self.failed_searches = 0;
                self.findable = words;

                let mut round = Round::new(self.config.round_duration);
                round.start(now);
                self.round = Some(round);

                info!(findable = self.findable.len(), "round started");
                self.hooks.round_started();
                GameEvent::RoundStarted {
                    findable: self.findable.len(),
                }
            }
            SearchOutcome::Failed(reason) => {
                self.failed_searches += 1;
                let mut retrying = self.failed_searches < MAX_SEARCH_ATTEMPTS;
                if retrying && let Err(err) = self.regenerate() {
                    warn!(%err, "could not restart search");
                    retrying = false;
                }
                GameEvent::SearchFailed { reason, retrying }
            }
        }
    }

    /// Submit a word for credit at the current time
    pub fn submit(&mut self, word: &str) -> bool {
        self.submit_at(word, Instant::now())
    }

    /// Submit a word for credit at `now`
    ///
    /// Accepted only while the round is running with time left, when the word
    /// was not already credited, traces on the board, and is in the
    /// dictionary. Accepted words join the round's found set.
    pub fn submit_at(&mut self, word: &str, now: Instant) -> bool {
        self.try_submit_at(word, now).is_ok()
    }

    /// Like [`submit`](Self::submit), but says why a word was refused
    ///
    /// # Errors
    /// Returns the `Rejection` for a word that is not credited.
    pub fn try_submit(&mut self, word: &str) -> Result<String, Rejection> {
        self.try_submit_at(word, Instant::now())
    }

    /// Like [`submit_at`](Self::submit_at), but says why a word was refused
    ///
    /// # Errors
    /// Returns the `Rejection` for a word that is not credited.
    pub fn try_submit_at(&mut self, word: &str, now: Instant) -> Result<String, Rejection> {
        let word = self.check_at(word, now)?;
        let round = self.round.as_mut().ok_or(Rejection::RoundNotRunning)?;
        if !round.record(&word) {
            return Err(Rejection::RoundNotRunning);
        }
        debug!(%word, "submission accepted");
        Ok(word)
    }

    /// Validate a submission without crediting it
    ///
    /// Returns the normalized (trimmed, lower-cased) word.
    ///
    /// # Errors
    /// Returns the first `Rejection` that applies.
    pub fn check_at(&self, word: &str, now: Instant) -> Result<String, Rejection> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(Rejection::Empty);
        }
        let (Some(round), Some(board)) = (self.round.as_ref(), self.board.as_ref()) else {
            return Err(Rejection::RoundNotRunning);
        };
        if !round.is_running() || round.is_expired(now) {
            return Err(Rejection::RoundNotRunning);
        }
        if round.has_found(&word) {
            return Err(Rejection::AlreadyFound(word));
        }
        if trace(board, &word).is_none() {
            debug!(%word, "submission not on board");
            return Err(Rejection::NotOnBoard(word));
        }
        if !self.config.dictionary.lookup(&word) {
            debug!(%word, "submission not in dictionary");
            return Err(Rejection::NotInDictionary(word));
        }
        Ok(word)
    }

    /// Trace a typed word for highlighting
    ///
    /// Updates only the board's view-layer selection flags. Returns `None`
    /// (and clears the highlight) for empty input or no path.
    pub fn preview(&mut self, word: &str) -> Option<Path> {
        let board = self.board.as_mut()?;
        let word = word.trim().to_lowercase();

        let path = if word.is_empty() {
            None
        } else {
            trace(board, &word)
        };
        match &path {
            Some(path) => board.select_path(path),
            None => board.clear_selection(),
        }
        path
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match (&self.pending, &self.round) {
            (Some(_), _) => GamePhase::Loading,
            (None, Some(round)) if round.is_over() => GamePhase::Over,
            (None, Some(_)) => GamePhase::Playing,
            (None, None) => GamePhase::Idle,
        }
    }

    #[must_use]
    pub const fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Words findable on the current board, in dictionary order
    #[must_use]
    pub fn findable_words(&self) -> &[String] {
        &self.findable
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.config.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const WAIT: Duration = Duration::from_secs(10);

    fn test_config() -> GameConfig {
        GameConfig::default()
            .with_dictionary(Arc::new(Dictionary::new([
                "cat", "cats", "sat", "act", "dog", "tact",
            ])))
            .with_round_duration(Duration::from_secs(60))
    }

    fn game_on_cats_board() -> Game {
        let mut game = Game::new(test_config(), StdRng::seed_from_u64(3)).unwrap();
        game.load_board(Board::parse("ca/ts").unwrap()).unwrap();
        let event = game.wait_for_search(WAIT);
        assert_eq!(event, Some(GameEvent::RoundStarted { findable: 4 }));
        game
    }

    fn failing_search(_: &Board, _: &Dictionary) -> Vec<String> {
        panic!("search crashed");
    }

    #[test]
    fn invalid_config_fails_fast() {
        let config = test_config().with_board_size(0, 0);
        assert!(Game::new(config, StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn new_game_is_idle() {
        let game = Game::new(test_config(), StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(game.phase(), GamePhase::Idle);
        assert!(game.board().is_none());
        assert!(game.round().is_none());
    }

    #[test]
    fn new_round_generates_configured_board() {
        let config = test_config().with_board_size(5, 3);
        let mut game = Game::new(config, StdRng::seed_from_u64(1)).unwrap();
        game.new_round().unwrap();

        assert_eq!(game.phase(), GamePhase::Loading);
        let board = game.board().unwrap();
        assert_eq!((board.width(), board.height()), (5, 3));

        assert!(matches!(
            game.wait_for_search(WAIT),
            Some(GameEvent::RoundStarted { .. })
        ));
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn findable_words_come_from_search() {
        let game = game_on_cats_board();
        assert_eq!(game.findable_words(), &["cat", "cats", "sat", "act"]);
        assert_eq!(game.round().unwrap().state(), RoundState::Running);
    }

    #[test]
    fn submit_accepts_valid_word_once() {
        let mut game = game_on_cats_board();

        assert!(game.submit("cat"));
        assert!(!game.submit("cat"));
        assert!(game.submit("CATS"));
        assert_eq!(game.round().unwrap().words_found(), &["cat", "cats"]);
    }

    #[test]
    fn submit_rejects_untraceable_or_unknown() {
        let mut game = game_on_cats_board();

        assert!(!game.submit("dog")); // in dictionary, not on board
        assert!(!game.submit("tact")); // needs two t cells
        assert!(!game.submit("tas")); // traceable, not a word
        assert!(!game.submit(""));
        assert!(game.round().unwrap().words_found().is_empty());
    }

    #[test]
    fn submit_before_round_is_rejected() {
        let mut game = Game::new(test_config(), StdRng::seed_from_u64(1)).unwrap();
        assert!(!game.submit("cat"));
        assert_eq!(game.try_submit("cat"), Err(Rejection::RoundNotRunning));
    }

    #[test]
    fn rejection_reasons() {
        let mut game = game_on_cats_board();

        assert_eq!(game.try_submit("  Sat "), Ok("sat".to_string()));
        assert_eq!(
            game.try_submit("sat"),
            Err(Rejection::AlreadyFound("sat".to_string()))
        );
        assert_eq!(
            game.try_submit("dog"),
            Err(Rejection::NotOnBoard("dog".to_string()))
        );
        assert_eq!(
            game.try_submit("tas"),
            Err(Rejection::NotInDictionary("tas".to_string()))
        );
        assert_eq!(game.try_submit(" "), Err(Rejection::Empty));
    }

    #[test]
    fn round_ends_once_and_rejects_late_words() {
        let ends = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ends);
        let mut game = Game::new(test_config(), StdRng::seed_from_u64(3))
            .unwrap()
            .with_hooks(RoundHooks::new().on_round_end(move || counter.set(counter.get() + 1)));
        game.load_board(Board::parse("ca/ts").unwrap()).unwrap();
        game.wait_for_search(WAIT).unwrap();

        let later = Instant::now() + Duration::from_secs(61);
        assert!(!game.submit_at("cat", later));

        assert_eq!(
            game.poll(later),
            Some(GameEvent::RoundEnded {
                found: 0,
                findable: 4
            })
        );
        assert_eq!(game.poll(later + Duration::from_secs(1)), None);
        assert_eq!(ends.get(), 1);
        assert_eq!(game.phase(), GamePhase::Over);
        assert!(!game.submit("cat"));
    }

    #[test]
    fn start_hook_fires_when_search_completes() {
        let starts = Rc::new(Cell::new(0));
        let counter = Rc::clone(&starts);
        let mut game = Game::new(test_config(), StdRng::seed_from_u64(3))
            .unwrap()
            .with_hooks(RoundHooks::new().on_round_start(move || counter.set(counter.get() + 1)));

        game.load_board(Board::parse("ca/ts").unwrap()).unwrap();
        assert_eq!(starts.get(), 0);
        game.wait_for_search(WAIT).unwrap();
        assert_eq!(starts.get(), 1);
    }

    #[test]
    fn preview_highlights_path_without_crediting() {
        let mut game = game_on_cats_board();

        let path = game.preview("Cat").unwrap();
        assert_eq!(path.len(), 3);
        let board = game.board().unwrap();
        assert!(path.positions().iter().all(|&p| board.is_selected(p)));
        assert_eq!(board.positions().filter(|&p| board.is_selected(p)).count(), 3);

        assert!(game.preview("dog").is_none());
        let board = game.board().unwrap();
        assert!(board.positions().all(|p| !board.is_selected(p)));

        assert!(game.preview("").is_none());
        assert!(game.round().unwrap().words_found().is_empty());
    }

    #[test]
    fn superseded_board_result_is_ignored() {
        let mut game = Game::new(test_config(), StdRng::seed_from_u64(3)).unwrap();
        let first = game.load_board(Board::parse("ca/ts").unwrap()).unwrap();
        let second = game.load_board(Board::parse("do/gx").unwrap()).unwrap();
        assert!(second > first);

        assert_eq!(
            game.wait_for_search(WAIT),
            Some(GameEvent::RoundStarted { findable: 1 })
        );
        assert_eq!(game.findable_words(), &["dog"]);
        assert_eq!(game.board().unwrap().to_string(), "do/gx");
    }

    #[test]
    fn failed_search_retries_then_gives_up() {
        let dictionary = Arc::new(Dictionary::new(["cat"]));
        let mut game = Game::new(test_config(), StdRng::seed_from_u64(3))
            .unwrap()
            .with_worker(FinderWorker::with_search(dictionary, failing_search));
        game.new_round().unwrap();

        for attempt in 1..=MAX_SEARCH_ATTEMPTS {
            match game.wait_for_search(WAIT) {
                Some(GameEvent::SearchFailed { reason, retrying }) => {
                    assert!(reason.contains("search crashed"));
                    assert_eq!(retrying, attempt < MAX_SEARCH_ATTEMPTS);
                }
                other => panic!("expected failure, got {other:?}"),
            }
        }
        assert_eq!(game.phase(), GamePhase::Idle);
        assert!(game.wait_for_search(Duration::from_millis(10)).is_none());
    }
}
