//! Past Wordle answers
//!
//! The immutable answer set, the remote page it is scraped from, and the
//! daily single-flight cache that every request consults.

mod cache;
mod set;
mod source;

pub use cache::{AnswerCache, KNOWN_PAST_ANSWERS, MIN_ANSWER_COUNT};
pub use set::AnswerSet;
pub use source::{AnswerSource, DEFAULT_ANSWERS_URL, ScrapedAnswerSource};

/// Error type for answer fetching, parsing, and validation
///
/// Cloneable so one failed refresh can be surfaced to every caller waiting
/// on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswersError {
    #[error("failed to fetch past answers: {0}")]
    Http(String),
    #[error("failed to parse past answers page: {0}")]
    Parse(String),
    #[error("fetched answers failed integrity check: {0}")]
    Integrity(String),
}
