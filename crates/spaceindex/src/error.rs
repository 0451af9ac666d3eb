//! Error types used across the crate.

use thiserror::Error;

/// Errors produced by index construction and level-parameterized operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Construction parameters are out of range.
    #[error("invalid argument: {0}")]
    Argument(String),
    /// A level argument lies outside `[1, max_level]`.
    #[error("invalid level: {0}")]
    Level(String),
    /// A curve rule table failed validation.
    #[error("malformed rule table: {0}")]
    Rule(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
