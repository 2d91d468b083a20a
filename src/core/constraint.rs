//! Match constraint specification
//!
//! A [`ConstraintSpec`] is a validated, normalized description of which
//! candidate words a query accepts: required positional letters, letters
//! banned everywhere, and present-letter clauses with forbidden positions
//! and occurrence caps. Construction validates positions and letters so the
//! matching engine never sees malformed input.

use rustc_hash::FxHashSet;

use crate::core::{WORD_LEN, Word};

/// Error type for malformed constraint input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    #[error("position must be between 0 and 4, got {0}")]
    InvalidPosition(usize),
    #[error("letter must be a single ASCII letter, got {0:?}")]
    InvalidLetter(char),
    #[error("max occurrences must be a positive number")]
    ZeroMaxOccurrences,
    #[error("limit must be a positive number")]
    ZeroLimit,
    #[error("pattern must be exactly 5 characters of letters or asterisks")]
    InvalidPattern,
    #[error("regex must be at most {0} characters")]
    RegexTooLong(usize),
    #[error("invalid regex: {0}")]
    InvalidRegex(String),
}

/// A letter that must appear somewhere, but not at the forbidden positions
/// and not more than `max` times when a cap is given
#[derive(Debug, Clone, PartialEq, Eq)]
struct PresentClause {
    letter: u8,
    forbidden: [bool; WORD_LEN],
    max: Option<usize>,
}

/// Validated match criteria plus the result size cap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSpec {
    correct: [Option<u8>; WORD_LEN],
    eliminated: FxHashSet<u8>,
    present: Vec<PresentClause>,
    limit: usize,
}

impl ConstraintSpec {
    /// Create an empty spec with the given result limit
    ///
    /// An empty spec admits every word; useful for "give me random guesses"
    /// queries.
    ///
    /// # Errors
    /// Returns [`ConstraintError::ZeroLimit`] if `limit` is zero.
    pub fn new(limit: usize) -> Result<Self, ConstraintError> {
        if limit == 0 {
            return Err(ConstraintError::ZeroLimit);
        }
        Ok(Self {
            correct: [None; WORD_LEN],
            eliminated: FxHashSet::default(),
            present: Vec::new(),
            limit,
        })
    }

    /// Require `letter` at `position` (0-4)
    ///
    /// # Errors
    /// Returns `ConstraintError` on an out-of-range position or a
    /// non-alphabetic letter.
    pub fn require_at(&mut self, position: usize, letter: char) -> Result<(), ConstraintError> {
        if position >= WORD_LEN {
            return Err(ConstraintError::InvalidPosition(position));
        }
        self.correct[position] = Some(normalize_letter(letter)?);
        Ok(())
    }

    /// Ban `letter` from appearing anywhere in a candidate
    ///
    /// # Errors
    /// Returns `ConstraintError` on a non-alphabetic letter.
    pub fn eliminate(&mut self, letter: char) -> Result<(), ConstraintError> {
        self.eliminated.insert(normalize_letter(letter)?);
        Ok(())
    }

    /// Require `letter` to appear, outside `forbidden_positions`, at most
    /// `max` times when a cap is given
    ///
    /// # Errors
    /// Returns `ConstraintError` on an out-of-range position, a
    /// non-alphabetic letter, or a zero cap.
    pub fn require_present(
        &mut self,
        letter: char,
        forbidden_positions: &[usize],
        max: Option<usize>,
    ) -> Result<(), ConstraintError> {
        if max == Some(0) {
            return Err(ConstraintError::ZeroMaxOccurrences);
        }
        let mut forbidden = [false; WORD_LEN];
        for &position in forbidden_positions {
            if position >= WORD_LEN {
                return Err(ConstraintError::InvalidPosition(position));
            }
            forbidden[position] = true;
        }
        self.present.push(PresentClause {
            letter: normalize_letter(letter)?,
            forbidden,
            max,
        });
        Ok(())
    }

    /// The maximum number of matches a query returns
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Check whether a candidate word satisfies every clause
    ///
    /// Mutually exclusive clauses (a letter both required and eliminated)
    /// simply admit nothing; that is not an error.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        for (position, required) in self.correct.iter().enumerate() {
            if let Some(letter) = required
                && word.char_at(position) != *letter
            {
                return false;
            }
        }

        if word.chars().iter().any(|c| self.eliminated.contains(c)) {
            return false;
        }

        for clause in &self.present {
            let count = word.count_of(clause.letter);
            if count == 0 {
                return false;
            }
            if clause.max.is_some_and(|max| count > max) {
                return false;
            }
            let at_forbidden = clause
                .forbidden
                .iter()
                .enumerate()
                .any(|(position, &banned)| banned && word.char_at(position) == clause.letter);
            if at_forbidden {
                return false;
            }
        }

        true
    }
}

fn normalize_letter(letter: char) -> Result<u8, ConstraintError> {
    if !letter.is_ascii_alphabetic() {
        return Err(ConstraintError::InvalidLetter(letter));
    }
    Ok(letter.to_ascii_lowercase() as u8)
}
