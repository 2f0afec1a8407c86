// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for byline.
//!
//! This module contains the entity shapes and every field-level validation
//! rule. All persistence, querying, and transport concerns are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: validators are synchronous and complete immediately
//! - **No I/O**: the only outside contact is the injected `NameLookup`,
//!   and that dependency is explicit in the signature
//! - **Immutable entities**: all domain objects are Clone + PartialEq
//! - **Rich domain model**: the rules live on the entities, not in services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Centralized validation facade
mod validation;

// Re-exports for convenience
pub use entities::{
    author::{Author, AuthorId, NameLookup, NewAuthor},
    post::{NewPost, Post, PostId},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    CLICKBAIT_MARKERS, CONTENT_MIN_CHARS, Category, PHONE_NUMBER_LEN, SUMMARY_MAX_CHARS,
};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    fn nobody(_: &str, _: Option<AuthorId>) -> bool {
        false
    }

    fn content_of(len: usize) -> String {
        "a".repeat(len)
    }

    // ========================================================================
    // Author scenarios
    // ========================================================================

    #[test]
    fn author_with_name_and_ten_digit_phone_is_accepted() {
        let candidate = NewAuthor::new("Jane Doe").with_phone_number("5551234567");
        assert!(DomainValidator::validate_new_author(&candidate, &nobody).is_ok());
    }

    #[test]
    fn author_with_formatted_phone_is_rejected_as_malformed() {
        let candidate = NewAuthor::new("Jane Doe").with_phone_number("555-123-4567");
        assert!(matches!(
            DomainValidator::validate_new_author(&candidate, &nobody),
            Err(DomainError::PhoneFormat { .. })
        ));
    }

    #[test]
    fn nameless_author_is_rejected() {
        let candidate = NewAuthor::new("");
        assert_eq!(
            DomainValidator::validate_new_author(&candidate, &nobody),
            Err(DomainError::EmptyName)
        );
    }

    #[test]
    fn second_author_with_the_same_name_is_rejected() {
        let jane_exists =
            |name: &str, _: Option<AuthorId>| name == "Jane Doe";
        let candidate = NewAuthor::new("Jane Doe");
        assert!(matches!(
            DomainValidator::validate_new_author(&candidate, &jane_exists),
            Err(DomainError::DuplicateName { .. })
        ));
    }

    // ========================================================================
    // Post scenarios
    // ========================================================================

    #[test]
    fn clickbait_fiction_post_is_accepted() {
        let candidate = NewPost::new("Top 10 Secrets", content_of(260), "Fiction");
        assert_eq!(
            DomainValidator::validate_new_post(&candidate),
            Ok(Category::Fiction)
        );
    }

    #[test]
    fn unassuming_title_is_rejected() {
        let candidate = NewPost::new("A Normal Day", content_of(260), "Fiction");
        assert!(matches!(
            DomainValidator::validate_new_post(&candidate),
            Err(DomainError::NotClickbait { .. })
        ));
    }

    #[test]
    fn thin_content_is_rejected() {
        let candidate = NewPost::new("Secret Life", content_of(100), "Fiction");
        assert_eq!(
            DomainValidator::validate_new_post(&candidate),
            Err(DomainError::ContentTooShort { length: 100 })
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let candidate = NewPost::new("Top Secret", content_of(260), "Mystery");
        assert!(matches!(
            DomainValidator::validate_new_post(&candidate),
            Err(DomainError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn oversized_summary_is_rejected() {
        let candidate = NewPost::new("Top Secret", content_of(260), "Fiction")
            .with_summary(content_of(251));
        assert_eq!(
            DomainValidator::validate_new_post(&candidate),
            Err(DomainError::SummaryTooLong { length: 251 })
        );
    }

    // ========================================================================
    // Idempotence
    // ========================================================================

    #[test]
    fn revalidating_valid_records_never_raises() {
        let author = Author {
            id: AuthorId::new(7),
            name: "Jane Doe".into(),
            phone_number: Some("5551234567".into()),
            created_at: chrono::Utc::now(),
            updated_at: None,
        };
        let directory =
            |name: &str, exclude: Option<AuthorId>| name == "Jane Doe" && exclude != Some(author.id);
        assert!(DomainValidator::validate_author(&author, &directory).is_ok());

        let post = Post {
            id: PostId::new(7),
            title: "Guess Who".into(),
            content: content_of(300),
            summary: Some(String::new()),
            category: Category::NonFiction,
            created_at: chrono::Utc::now(),
            updated_at: None,
        };
        assert!(post.validate().is_ok());
    }
}
