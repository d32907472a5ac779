//! Timed round state machine
//!
//! `NotStarted -> Running -> Ended`, with no way back out of `Ended`. Time is
//! passed in explicitly so the clock stays under the caller's control.

use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    NotStarted,
    Running,
    Ended,
}

/// Remaining time split for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    /// Whole seconds left, rounded down
    #[must_use]
    pub const fn from_remaining(remaining: Duration) -> Self {
        let total = remaining.as_secs();
        Self {
            minutes: total / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// One timed play session and the words credited during it
#[derive(Debug, Clone)]
pub struct Round {
    duration: Duration,
    state: RoundState,
    started_at: Option<Instant>,
    remaining: Duration,
    found: Vec<String>,
    found_set: FxHashSet<String>,
}

impl Round {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            state: RoundState::NotStarted,
            started_at: None,
            remaining: duration,
            found: Vec::new(),
            found_set: FxHashSet::default(),
        }
    }

    /// Start the clock; returns `false` if the round already started
    pub fn start(&mut self, now: Instant) -> bool {
        if self.state != RoundState::NotStarted {
            return false;
        }
        self.state = RoundState::Running;
        self.started_at = Some(now);
        self.remaining = self.duration;
        true
    }

    /// Recompute remaining time
    ///
    /// Returns `true` exactly once: on the tick that ends the round.
    pub fn tick(&mut self, now: Instant) -> bool {
        let (RoundState::Running, Some(started_at)) = (self.state, self.started_at) else {
            return false;
        };

        let elapsed = now.saturating_duration_since(started_at);
        self.remaining = self.duration.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.state = RoundState::Ended;
            return true;
        }
        false
    }

    /// Check whether time has run out at `now`, even before the next tick
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match (self.state, self.started_at) {
            (RoundState::Ended, _) => true,
            (RoundState::Running, Some(started_at)) => {
                now.saturating_duration_since(started_at) >= self.duration
            }
            _ => false,
        }
    }

    /// Credit a word; rejected unless running and not already found
    pub fn record(&mut self, word: &str) -> bool {
        if self.state != RoundState::Running || self.found_set.contains(word) {
            return false;
        }
        self.found_set.insert(word.to_string());
        self.found.push(word.to_string());
        true
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RoundState::Running
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == RoundState::Ended
    }

    #[inline]
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Remaining time as of the last tick
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub const fn countdown(&self) -> Countdown {
        Countdown::from_remaining(self.remaining)
    }

    #[must_use]
    pub fn has_found(&self, word: &str) -> bool {
        self.found_set.contains(word)
    }

    /// Credited words in the order they were found
    #[must_use]
    pub fn words_found(&self) -> &[String] {
        &self.found
    }
}
