//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::{AuthorId, PostId};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No author record with this identity.
    #[error("no author with id {id}")]
    AuthorNotFound { id: AuthorId },

    /// No post record with this identity.
    #[error("no post with id {id}")]
    PostNotFound { id: PostId },

    /// Store access failed (lock poisoned, etc.).
    #[error("record store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AuthorNotFound { id } => vec![
                format!("No author record has id {}", id),
                "The record may have been deleted".into(),
            ],
            Self::PostNotFound { id } => vec![
                format!("No post record has id {}", id),
                "The record may have been deleted".into(),
            ],
            Self::StoreLockError => vec![
                "The record store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AuthorNotFound { .. } | Self::PostNotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
