//! Guess corpus for the query endpoints
//!
//! An embedded word list compiled into the binary, plus loading utilities
//! for swapping in a custom corpus at startup.

mod embedded;
pub mod loader;

pub use embedded::{GUESSES, GUESSES_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_count_matches_const() {
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn guesses_are_valid_words() {
        // All corpus entries should be 5 letters, lowercase
        for &word in GUESSES {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn guesses_contain_common_words() {
        for expected in ["crane", "slate", "could", "stare"] {
            assert!(
                GUESSES.contains(&expected),
                "Expected '{expected}' in the corpus"
            );
        }
    }

    #[test]
    fn guesses_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = GUESSES.iter().collect();
        assert_eq!(unique.len(), GUESSES.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(GUESSES_COUNT, 2111, "Expected 2,111 guess words");
    }
}
