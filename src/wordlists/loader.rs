//! Corpus loading utilities
//!
//! Converts the embedded list or an external file into validated words.
//! Invalid lines are skipped with a warning rather than failing startup;
//! the corpus source is assumed mostly clean.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::core::Word;

/// Load a corpus from a file, one word per line
///
/// Blank lines and invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(_) => {
                    skipped += 1;
                    None
                }
            }
        })
        .collect();

    if skipped > 0 {
        warn!(skipped, "skipped invalid corpus lines");
    }

    Ok(words)
}

/// Convert the embedded string slice into validated words
///
/// # Examples
/// ```
/// use wordle_guess_api::wordlists::{GUESSES, loader::words_from_slice};
///
/// let words = words_from_slice(GUESSES);
/// assert_eq!(words.len(), GUESSES.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
