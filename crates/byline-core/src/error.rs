//! Unified error handling for Byline Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Byline Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// byline-core, providing a unified interface for error handling. Errors
/// are terminal for the single write attempt but not fatal to the process;
/// the caller may retry with corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BylineError {
    /// Errors from the domain layer (validation rule violations).
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl BylineError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in byline".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    ///
    /// Validation failures are not: resubmitting the same input fails the
    /// same way. A busy store is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::StoreLockError))
    }
}

// Both layers share one category enum; re-exported here so adapters and
// callers only need this module.
pub use crate::domain::ErrorCategory;

/// Convenient result type alias.
pub type BylineResult<T> = Result<T, BylineError>;
