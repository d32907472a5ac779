//! Game configuration
//!
//! Board dimensions, letter distribution, round length and dictionary, with
//! validation that runs before any board is generated.

use crate::dictionary::Dictionary;
use crate::sampler::LetterSampler;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default board letters
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// English letter frequencies aligned with [`DEFAULT_ALPHABET`]
///
/// Source: <http://pi.math.cornell.edu/~mec/2003-2004/cryptography/subs/frequencies.html>
pub const DEFAULT_LETTER_FREQUENCIES: [f64; 26] = [
    0.0812, 0.0149, 0.0271, 0.0432, 0.1202, 0.023, 0.0203, 0.0592, 0.0731, 0.001, 0.0069, 0.0398,
    0.0261, 0.0695, 0.0768, 0.0182, 0.0011, 0.0602, 0.0628, 0.091, 0.0288, 0.0111, 0.0209, 0.0017,
    0.0211, 0.0007,
];

pub const DEFAULT_BOARD_WIDTH: usize = 4;
pub const DEFAULT_BOARD_HEIGHT: usize = 4;
pub const DEFAULT_ROUND_DURATION: Duration = Duration::from_millis(120_000);

/// Largest board accepted by [`GameConfig::validate`]
pub const MAX_BOARD_CELLS: usize = 4096;

/// How far the frequency sum may drift from 1.0
pub const FREQUENCY_SUM_TOLERANCE: f64 = 1e-3;

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyAlphabet,
    InvalidLetter(char),
    FrequencyCount { letters: usize, frequencies: usize },
    InvalidFrequency { letter: char, weight: f64 },
    FrequencySum(f64),
    InvalidDimensions { width: usize, height: usize },
    ZeroDuration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAlphabet => write!(f, "Alphabet must contain at least one letter"),
            Self::InvalidLetter(c) => {
                write!(f, "Alphabet letter '{c}' must be a lowercase ASCII letter")
            }
            Self::FrequencyCount {
                letters,
                frequencies,
            } => write!(
                f,
                "Alphabet has {letters} letters but {frequencies} frequencies were given"
            ),
            Self::InvalidFrequency { letter, weight } => write!(
                f,
                "Frequency {weight} for letter '{letter}' must be finite and non-negative"
            ),
            Self::FrequencySum(sum) => {
                write!(f, "Letter frequencies must sum to 1, got {sum:.4}")
            }
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Board dimensions must be positive with at most {MAX_BOARD_CELLS} cells, got {width}x{height}"
            ),
            Self::ZeroDuration => write!(f, "Round duration must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for generating boards and running rounds
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub alphabet: Vec<char>,
    pub letter_frequencies: Vec<f64>,
    pub board_width: usize,
    pub board_height: usize,
    pub round_duration: Duration,
    pub dictionary: Arc<Dictionary>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            letter_frequencies: DEFAULT_LETTER_FREQUENCIES.to_vec(),
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            round_duration: DEFAULT_ROUND_DURATION,
            dictionary: Arc::new(Dictionary::embedded()),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_board_size(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    #[must_use]
    pub const fn with_round_duration(mut self, duration: Duration) -> Self {
        self.round_duration = duration;
        self
    }

    #[must_use]
    pub fn with_dictionary(mut self, dictionary: Arc<Dictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    #[must_use]
    pub fn with_letters(mut self, alphabet: &str, frequencies: &[f64]) -> Self {
        self.alphabet = alphabet.chars().collect();
        self.letter_frequencies = frequencies.to_vec();
        self
    }

    /// Check every setting
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    ///
    /// # Examples
    /// ```
    /// use wordfind::config::{ConfigError, GameConfig};
    ///
    /// assert!(GameConfig::default().validate().is_ok());
    ///
    /// let flat = GameConfig::default().with_board_size(0, 4);
    /// assert!(matches!(flat.validate(), Err(ConfigError::InvalidDimensions { .. })));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells = self.board_width.checked_mul(self.board_height);
        if self.board_width == 0
            || self.board_height == 0
            || cells.is_none_or(|cells| cells > MAX_BOARD_CELLS)
        {
            return Err(ConfigError::InvalidDimensions {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.round_duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        self.sampler().map(|_| ())
    }

    /// Build the letter sampler for this configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if the alphabet or frequencies are invalid.
    pub fn sampler(&self) -> Result<LetterSampler, ConfigError> {
        LetterSampler::new(&self.alphabet, &self.letter_frequencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn default_frequencies_sum_to_one() {
        let sum: f64 = DEFAULT_LETTER_FREQUENCIES.iter().sum();
        assert!((sum - 1.0).abs() < FREQUENCY_SUM_TOLERANCE);
        assert_eq!(DEFAULT_ALPHABET.len(), DEFAULT_LETTER_FREQUENCIES.len());
    }

    #[test]
    fn zero_dimensions_rejected() {
        for (width, height) in [(0, 4), (4, 0), (0, 0)] {
            let config = GameConfig::default().with_board_size(width, height);
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidDimensions { width, height })
            );
        }
    }

    #[test]
    fn oversized_dimensions_rejected() {
        let too_many = MAX_BOARD_CELLS + 1;
        for (width, height) in [(usize::MAX, 2), (too_many, 1), (1 << 40, 1 << 40)] {
            let config = GameConfig::default().with_board_size(width, height);
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidDimensions { width, height })
            );
        }

        let widest = GameConfig::default().with_board_size(MAX_BOARD_CELLS, 1);
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn zero_duration_rejected() {
        let config = GameConfig::default().with_round_duration(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDuration));
    }

    #[test]
    fn bad_letters_rejected() {
        let config = GameConfig::default().with_letters("", &[]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyAlphabet));

        let config = GameConfig::default().with_letters("ab", &[0.5, 0.3]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FrequencySum(_))
        ));
    }

    #[test]
    fn custom_letters_accepted() {
        let config = GameConfig::default()
            .with_letters("ab", &[0.25, 0.75])
            .with_board_size(2, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn errors_are_descriptive() {
        let message = ConfigError::FrequencyCount {
            letters: 3,
            frequencies: 2,
        }
        .to_string();
        assert!(message.contains('3') && message.contains('2'));
    }
}
