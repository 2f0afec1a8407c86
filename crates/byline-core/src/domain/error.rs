// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::CLICKBAIT_MARKERS;

/// Root domain error type.
///
/// Every variant is one field-level validation rule rejecting a write.
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for caller display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Author rules
    // ========================================================================
    #[error("author must have a name")]
    EmptyName,

    #[error("an author named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("phone number must be exactly ten digits, got '{value}'")]
    PhoneFormat { value: String },

    // ========================================================================
    // Post rules
    // ========================================================================
    #[error("title '{title}' is not sufficiently clickbait")]
    NotClickbait { title: String },

    #[error("post content must be at least 250 characters long, got {length}")]
    ContentTooShort { length: usize },

    #[error("post summary must be a maximum of 250 characters, got {length}")]
    SummaryTooLong { length: usize },

    #[error("post category must be either Fiction or Non-Fiction, got '{value}'")]
    InvalidCategory { value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec!["Provide a non-empty author name".into()],
            Self::DuplicateName { name } => vec![
                format!("'{}' is already taken", name),
                "Author names are unique; choose a different one".into(),
            ],
            Self::PhoneFormat { .. } => vec![
                "Phone numbers are exactly ten digits, no separators".into(),
                "Example: 5551234567".into(),
            ],
            Self::NotClickbait { .. } => vec![
                "Titles must contain at least one of:".into(),
                format!("  • {}", CLICKBAIT_MARKERS.join(", ")),
            ],
            Self::ContentTooShort { length } => vec![format!(
                "Content is {} characters; the minimum is 250",
                length
            )],
            Self::SummaryTooLong { length } => vec![
                format!("Summary is {} characters; the maximum is 250", length),
                "Summaries are optional - omitting one is valid".into(),
            ],
            Self::InvalidCategory { .. } => vec![
                "Valid categories: Fiction, Non-Fiction (exact spelling)".into(),
            ],
        }
    }

    /// Error category for caller display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateName { .. } => ErrorCategory::Conflict,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}
