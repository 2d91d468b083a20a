//! Wordle Guess API
//!
//! A small query service over the Wordle guess corpus. Every endpoint
//! consults a shared set of past answers, scraped from a remote page and
//! refreshed once per day, so that suggested guesses are always words that
//! could still win.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guess_api::core::{ConstraintSpec, Word};
//! use wordle_guess_api::matcher::find_matches;
//! use wordle_guess_api::answers::AnswerSet;
//!
//! let words = vec![Word::new("crane").unwrap(), Word::new("crate").unwrap()];
//! let answers = AnswerSet::new(["crate".to_string()]);
//!
//! let mut spec = ConstraintSpec::new(10).unwrap();
//! spec.require_at(0, 'c').unwrap();
//!
//! let matches = find_matches(&words, &answers, &spec, &mut rand::rng());
//! assert_eq!(matches, ["crane"]);
//! ```

// Core domain types
pub mod core;

// Constraint matching engine
pub mod matcher;

// Past answers: set, remote source, daily cache
pub mod answers;

// Guess corpus
pub mod wordlists;

// HTTP endpoints
pub mod api;
