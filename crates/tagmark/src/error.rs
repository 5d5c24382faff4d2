//! Error types for guarded markup parsing.
//!
//! Plain [`parse`](crate::parse) never fails. These errors only come out of
//! [`try_parse`](crate::try_parse) when a [`Limits`](crate::Limits) bound is hit.

use thiserror::Error;

/// Errors that can occur when parsing markup under [`Limits`](crate::Limits).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The input is longer than the configured maximum.
    #[error("input is {len} bytes, limit is {max}")]
    InputTooLarge { len: usize, max: usize },

    /// The scans produced more tag candidates than allowed.
    #[error("found {found} tag candidates, limit is {max}")]
    TooManyMatches { found: usize, max: usize },
}
