//! Weighted letter sampling and board generation

use crate::config::{ConfigError, FREQUENCY_SUM_TOLERANCE};
use crate::core::Board;
use rand::Rng;

/// Pick the item whose cumulative-frequency interval contains `x`
///
/// Items are scanned in order; item `i` owns `[cum[i-1], cum[i])`. When
/// floating-point drift leaves `x` at or beyond the final cumulative sum, the
/// last item with positive weight is returned. Returns `None` only if `items`
/// is empty or no weight is positive.
///
/// # Examples
/// ```
/// use wordfind::sampler::weighted_choice;
///
/// let items = ['a', 'b', 'c'];
/// let weights = [0.5, 0.3, 0.2];
/// assert_eq!(weighted_choice(&items, &weights, 0.0), Some(&'a'));
/// assert_eq!(weighted_choice(&items, &weights, 0.5), Some(&'b'));
/// assert_eq!(weighted_choice(&items, &weights, 0.99), Some(&'c'));
/// ```
#[must_use]
pub fn weighted_choice<'a, T>(items: &'a [T], frequencies: &[f64], x: f64) -> Option<&'a T> {
    let mut cumulative = 0.0;
    for (item, &weight) in items.iter().zip(frequencies) {
        let previous = cumulative;
        cumulative += weight;
        if previous <= x && x < cumulative {
            return Some(item);
        }
    }

    items
        .iter()
        .zip(frequencies)
        .rev()
        .find(|&(_, &weight)| weight > 0.0)
        .map(|(item, _)| item)
}

/// Draws letters according to a validated frequency table
#[derive(Debug, Clone)]
pub struct LetterSampler {
    alphabet: Vec<char>,
    frequencies: Vec<f64>,
}

impl LetterSampler {
    /// Create a sampler after validating the distribution
    ///
    /// # Errors
    /// Returns `ConfigError` if the alphabet is empty or contains anything
    /// other than lowercase ASCII letters, the lengths differ, a weight is
    /// negative or not finite, or the weights do not sum to 1.
    pub fn new(alphabet: &[char], frequencies: &[f64]) -> Result<Self, ConfigError> {
        if alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if let Some(&letter) = alphabet.iter().find(|c| !c.is_ascii_lowercase()) {
            return Err(ConfigError::InvalidLetter(letter));
        }
        if alphabet.len() != frequencies.len() {
            return Err(ConfigError::FrequencyCount {
                letters: alphabet.len(),
                frequencies: frequencies.len(),
            });
        }
        if let Some((&letter, &weight)) = alphabet
            .iter()
            .zip(frequencies)
            .find(|&(_, &weight)| !weight.is_finite() || weight < 0.0)
        {
            return Err(ConfigError::InvalidFrequency { letter, weight });
        }

        let sum: f64 = frequencies.iter().sum();
        if (sum - 1.0).abs() > FREQUENCY_SUM_TOLERANCE {
            return Err(ConfigError::FrequencySum(sum));
        }

        Ok(Self {
            alphabet: alphabet.to_vec(),
            frequencies: frequencies.to_vec(),
        })
    }

    /// Draw one letter
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        let x: f64 = rng.random();
        // Validation guarantees a positive weight, so a letter always exists
        weighted_choice(&self.alphabet, &self.frequencies, x)
            .copied()
            .unwrap_or(self.alphabet[0])
    }

    /// Fill a `width` x `height` board with sampled letters
    ///
    /// Callers validate dimensions first; a zero dimension is raised to 1.
    ///
    /// # Panics
    /// Panics if `width * height` overflows. [`GameConfig::validate`] bounds
    /// the cell count well below that.
    ///
    /// [`GameConfig::validate`]: crate::config::GameConfig::validate
    pub fn generate_board<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Board {
        let (width, height) = (width.max(1), height.max(1));
        let letters = (0..width * height).map(|_| self.sample(rng)).collect();
        Board::new(width, height, letters).expect("dimensions clamped to at least 1")
    }
}
