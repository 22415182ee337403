//! # Error Types
//!
//! Defines error types produced when constructing shared identifiers.

use thiserror::Error;

/// Errors raised when text cannot be turned into a `ModuleKey`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleKeyError {
    /// Key is shorter or longer than the accepted range.
    #[error("Invalid module key length: {len} (expected {min}..={max})")]
    InvalidLength { len: usize, min: usize, max: usize },

    /// Key contains a character outside `A-Z` and `_`.
    #[error("Invalid character {ch:?} in module key {key:?}")]
    InvalidCharacter { key: String, ch: char },
}
