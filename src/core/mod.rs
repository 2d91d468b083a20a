//! Core domain types for word matching
//!
//! Provides the validated [`Word`] type and the [`ConstraintSpec`] that
//! describes which candidates a query accepts.

mod constraint;
mod word;

pub use constraint::{ConstraintError, ConstraintSpec};
pub use word::{Word, WordError};

/// Fixed word length for the whole service
pub const WORD_LEN: usize = 5;
