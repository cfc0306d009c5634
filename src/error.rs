//! Errors surfaced to API callers.

use std::fmt::Display;

use thiserror::Error;
use tracing::error;

/// What can go wrong in an admin operation.
///
/// Missing translations are not errors; the resolver returns a placeholder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CmsError {
    /// Missing session cookies or a session the backend rejected.
    #[error("Unauthorized")]
    Unauthorized,

    /// Input that breaks a rule, checked before any backend write.
    #[error("{0}")]
    Validation(String),

    /// The database or object store call failed.
    #[error("{0}")]
    Backend(String),
}

impl CmsError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Log a backend failure and keep only its message for the caller.
    pub fn backend(context: &str, err: impl Display) -> Self {
        error!("{}: {}", context, err);
        Self::Backend(err.to_string())
    }
}
