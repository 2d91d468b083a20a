//! Matching engine
//!
//! Filters the corpus against the constraints, excludes past answers, then
//! applies the selection policy: uniform shuffle, truncate to the limit,
//! sort lexicographically. Shuffling before truncation makes the returned
//! subset a uniform random sample; the final sort is presentation only and
//! does not bias selection.

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

use crate::answers::AnswerSet;
use crate::core::{ConstraintSpec, Word};

/// Find corpus words that satisfy the spec and are not past answers
///
/// Returns at most `spec.limit()` words, sorted ascending. Every returned
/// word is a corpus member, absent from `answers`, and satisfies every
/// clause of `spec`.
#[must_use]
pub fn find_matches<R: Rng + ?Sized>(
    words: &[Word],
    answers: &AnswerSet,
    spec: &ConstraintSpec,
    rng: &mut R,
) -> Vec<String> {
    let accepted: Vec<&Word> = words
        .iter()
        .filter(|word| !answers.contains(word.text()) && spec.admits(word))
        .collect();

    sample_sorted(accepted, spec.limit(), rng)
}

/// Find corpus words matching a compiled regex, excluding past answers
///
/// Same selection policy as [`find_matches`].
#[must_use]
pub fn find_regex_matches<R: Rng + ?Sized>(
    words: &[Word],
    answers: &AnswerSet,
    pattern: &Regex,
    limit: usize,
    rng: &mut R,
) -> Vec<String> {
    let accepted: Vec<&Word> = words
        .iter()
        .filter(|word| !answers.contains(word.text()) && pattern.is_match(word.text()))
        .collect();

    sample_sorted(accepted, limit, rng)
}

/// Uniform sample of `limit` words, sorted ascending
fn sample_sorted<R: Rng + ?Sized>(
    mut accepted: Vec<&Word>,
    limit: usize,
    rng: &mut R,
) -> Vec<String> {
    accepted.shuffle(rng);
    accepted.truncate(limit);

    let mut result: Vec<String> = accepted
        .into_iter()
        .map(|word| word.text().to_string())
        .collect();
    result.sort_unstable();
    result
}
