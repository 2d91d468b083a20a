//! Restricted match variants
//!
//! Two simpler front doors to the engine: a 5-character wildcard pattern
//! (letters fix positions, `*` matches anything) that compiles into a
//! [`ConstraintSpec`], and a free-form regular expression compiled with
//! hard length and size bounds.

use regex::{Regex, RegexBuilder};

use crate::core::{ConstraintError, ConstraintSpec, WORD_LEN};

/// Wildcard character in positional patterns
pub const WILDCARD: char = '*';

/// Maximum accepted length of a caller-supplied regex
pub const MAX_REGEX_LEN: usize = 64;

// Compiled-automaton size cap for caller-supplied regexes
const REGEX_SIZE_LIMIT: usize = 1 << 16;

/// Compile a wildcard pattern plus excluded letters into a constraint spec
///
/// Non-wildcard pattern characters become required positional letters;
/// every excluded letter is banned everywhere.
///
/// # Errors
/// Returns `ConstraintError` if the pattern is not exactly 5 characters of
/// letters and asterisks, if an excluded character is not a letter, or if
/// `limit` is zero.
///
/// # Examples
/// ```
/// use wordle_guess_api::core::Word;
/// use wordle_guess_api::matcher::pattern_spec;
///
/// let spec = pattern_spec("cr*ne", "a", 25).unwrap();
/// assert!(spec.admits(&Word::new("crone").unwrap()));
/// assert!(!spec.admits(&Word::new("crane").unwrap())); // contains excluded 'a'
/// ```
pub fn pattern_spec(
    pattern: &str,
    exclude_letters: &str,
    limit: usize,
) -> Result<ConstraintSpec, ConstraintError> {
    if pattern.chars().count() != WORD_LEN {
        return Err(ConstraintError::InvalidPattern);
    }

    let mut spec = ConstraintSpec::new(limit)?;
    for (position, ch) in pattern.chars().enumerate() {
        if ch == WILDCARD {
            continue;
        }
        spec.require_at(position, ch)?;
    }
    for ch in exclude_letters.chars() {
        spec.eliminate(ch)?;
    }
    Ok(spec)
}

/// Compile a caller-supplied regex for whole-word, case-insensitive matching
///
/// The expression is anchored to the full candidate word and compiled with
/// a bounded automaton size so hostile input cannot blow up evaluation.
///
/// # Errors
/// Returns `ConstraintError` if the input exceeds [`MAX_REGEX_LEN`] or does
/// not compile within the size bound.
pub fn compile_word_regex(input: &str) -> Result<Regex, ConstraintError> {
    if input.len() > MAX_REGEX_LEN {
        return Err(ConstraintError::RegexTooLong(MAX_REGEX_LEN));
    }

    RegexBuilder::new(&format!(r"\A(?:{input})\z"))
        .case_insensitive(true)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| ConstraintError::InvalidRegex(e.to_string()))
}
