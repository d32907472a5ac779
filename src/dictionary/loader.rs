//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize a raw dictionary entry
///
/// Trims and lower-cases the entry. Returns `None` for blank lines, comment
/// lines starting with `#`, and entries with anything other than ASCII letters.
///
/// # Examples
/// ```
/// use wordfind::dictionary::loader::normalize_word;
///
/// assert_eq!(normalize_word("  Cat "), Some("cat".to_string()));
/// assert_eq!(normalize_word("can't"), None);
/// assert_eq!(normalize_word(""), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

/// Load words from a file
///
/// Returns one normalized word per valid line, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordfind::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert an embedded string slice to normalized words
///
/// # Examples
/// ```
/// use wordfind::dictionary::loader::words_from_slice;
/// use wordfind::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines.filter_map(normalize_word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["cat", "Dog", "  bird  "];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["cat", "ice-cream", "", "x2", "# comment", "dog"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert!(words.is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("wordfind-loader-{}.txt", std::process::id()));
        fs::write(&path, "# header\nCat\n\nsat\nnot a word\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["cat", "sat"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::dictionary::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
