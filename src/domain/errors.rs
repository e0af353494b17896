//! Domain error types
//!
//! These errors are framework-agnostic and represent checksum-level failures.

use std::fmt;

/// Failure raised while computing a check digit or assembling an ISBN.
///
/// Length is always checked before characters, so a short string with
/// bad characters reports `WrongLength`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnError {
    /// Input length does not match the operation's fixed requirement
    WrongLength,
    /// A character outside the permitted digit alphabet for its position
    InvalidCharacter,
}

impl fmt::Display for IsbnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnError::WrongLength => write!(f, "wrong length"),
            IsbnError::InvalidCharacter => write!(f, "unexpected character"),
        }
    }
}

impl std::error::Error for IsbnError {}
