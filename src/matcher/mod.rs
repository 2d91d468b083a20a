//! Constraint matching over the guess corpus
//!
//! Pure functions: filter the word list against a constraint spec (or a
//! compiled regex), exclude past answers, then sample and sort the result.

mod engine;
mod pattern;

pub use engine::{find_matches, find_regex_matches};
pub use pattern::{MAX_REGEX_LEN, WILDCARD, compile_word_regex, pattern_spec};
