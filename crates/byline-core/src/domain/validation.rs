use crate::domain::{
    entities::{Author, AuthorId, NameLookup, NewAuthor, NewPost},
    error::DomainError,
    value_objects::Category,
};

/// Centralized domain validation.
///
/// All validation entry points live here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a brand-new author candidate against the given directory.
    pub fn validate_new_author(
        candidate: &NewAuthor,
        lookup: &dyn NameLookup,
    ) -> Result<(), DomainError> {
        candidate.validate(lookup)
    }

    /// Validate an author candidate replacing the record identified by `id`.
    pub fn validate_author_update(
        candidate: &NewAuthor,
        id: AuthorId,
        lookup: &dyn NameLookup,
    ) -> Result<(), DomainError> {
        candidate.validate_update(id, lookup)
    }

    /// Re-validate a persisted author record.
    pub fn validate_author(author: &Author, lookup: &dyn NameLookup) -> Result<(), DomainError> {
        author.validate(lookup)
    }

    /// Validate a post candidate, yielding the typed category on success.
    pub fn validate_new_post(candidate: &NewPost) -> Result<Category, DomainError> {
        candidate.validate()
    }
}
