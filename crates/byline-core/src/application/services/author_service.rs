//! Author Service - author write/read orchestration.
//!
//! This service coordinates the author validation contract:
//! 1. Bridge the store's name directory into the domain `NameLookup`
//! 2. Run the validators (first failing rule aborts the write)
//! 3. Commit through the store port
//!
//! Every validation failure is a rejection of the entire write; nothing is
//! partially applied and nothing is retried here. The error is raised to
//! the caller, who may resubmit with corrected input.

use tracing::{info, instrument, warn};

use crate::{
    application::ports::AuthorStore,
    domain::{Author, AuthorId, DomainValidator as validator, NewAuthor},
    error::{BylineError, BylineResult},
};

/// Main author write path.
pub struct AuthorService {
    store: Box<dyn AuthorStore>,
}

impl AuthorService {
    /// Create a new author service with the given store adapter.
    pub fn new(store: Box<dyn AuthorStore>) -> Self {
        Self { store }
    }

    /// Create an author record from a candidate.
    ///
    /// Validation order: name emptiness, name uniqueness (one lookup),
    /// phone format. The store re-checks uniqueness at commit; the lookup
    /// here is the best-effort pre-check.
    #[instrument(skip_all, fields(name = %candidate.name()))]
    pub fn create(&self, candidate: NewAuthor) -> BylineResult<Author> {
        let lookup =
            |name: &str, exclude: Option<AuthorId>| self.store.name_taken(name, exclude);
        validator::validate_new_author(&candidate, &lookup).map_err(|e| {
            warn!(error = %e, "Rejected author create");
            BylineError::Domain(e)
        })?;

        let author = self.store.insert(candidate)?;
        info!(id = %author.id, "Author created");
        Ok(author)
    }

    /// Replace the caller-supplied fields of an existing record.
    ///
    /// The record's own identity is excluded from the uniqueness check, so
    /// an update that keeps the current name never self-conflicts. The
    /// store refreshes `updated_at`.
    #[instrument(skip_all, fields(id = %id, name = %candidate.name()))]
    pub fn update(&self, id: AuthorId, candidate: NewAuthor) -> BylineResult<Author> {
        let lookup =
            |name: &str, exclude: Option<AuthorId>| self.store.name_taken(name, exclude);
        validator::validate_author_update(&candidate, id, &lookup).map_err(|e| {
            warn!(error = %e, "Rejected author update");
            BylineError::Domain(e)
        })?;

        let author = self.store.update(id, candidate)?;
        info!(id = %author.id, "Author updated");
        Ok(author)
    }

    /// Fetch a record by id.
    pub fn get(&self, id: AuthorId) -> BylineResult<Author> {
        self.store.get(id)
    }

    /// List all records.
    pub fn list(&self) -> BylineResult<Vec<Author>> {
        self.store.list()
    }

    /// Delete a record. Destruction involves no validation.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete(&self, id: AuthorId) -> BylineResult<()> {
        self.store.remove(id)?;
        info!("Author deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockAuthorStore;
    use crate::domain::DomainError;
    use chrono::Utc;

    fn jane(id: i64) -> Author {
        Author {
            id: AuthorId::new(id),
            name: "Jane Doe".into(),
            phone_number: Some("5551234567".into()),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn create_validates_then_commits() {
        let mut store = MockAuthorStore::new();
        store
            .expect_name_taken()
            .times(1)
            .returning(|_, _| false);
        store
            .expect_insert()
            .times(1)
            .returning(|_| Ok(jane(1)));

        let service = AuthorService::new(Box::new(store));
        let author = service
            .create(NewAuthor::new("Jane Doe").with_phone_number("5551234567"))
            .unwrap();
        assert_eq!(author.id, AuthorId::new(1));
    }

    #[test]
    fn create_with_taken_name_never_reaches_the_store() {
        let mut store = MockAuthorStore::new();
        store.expect_name_taken().times(1).returning(|_, _| true);
        store.expect_insert().never();

        let service = AuthorService::new(Box::new(store));
        let err = service.create(NewAuthor::new("Jane Doe")).unwrap_err();
        assert!(matches!(
            err,
            BylineError::Domain(DomainError::DuplicateName { .. })
        ));
    }

    #[test]
    fn create_with_empty_name_never_queries_the_directory() {
        let mut store = MockAuthorStore::new();
        store.expect_name_taken().never();
        store.expect_insert().never();

        let service = AuthorService::new(Box::new(store));
        let err = service.create(NewAuthor::new("")).unwrap_err();
        assert!(matches!(err, BylineError::Domain(DomainError::EmptyName)));
    }

    #[test]
    fn create_with_bad_phone_never_reaches_the_store() {
        let mut store = MockAuthorStore::new();
        store.expect_name_taken().times(1).returning(|_, _| false);
        store.expect_insert().never();

        let service = AuthorService::new(Box::new(store));
        let err = service
            .create(NewAuthor::new("Jane Doe").with_phone_number("555-123-4567"))
            .unwrap_err();
        assert!(matches!(
            err,
            BylineError::Domain(DomainError::PhoneFormat { .. })
        ));
    }

    #[test]
    fn update_excludes_the_records_own_identity() {
        let mut store = MockAuthorStore::new();
        store
            .expect_name_taken()
            .withf(|name, exclude| name == "Jane Doe" && *exclude == Some(AuthorId::new(1)))
            .times(1)
            .returning(|_, _| false);
        store.expect_update().times(1).returning(|id, _| {
            let mut author = jane(id.value());
            author.updated_at = Some(Utc::now());
            Ok(author)
        });

        let service = AuthorService::new(Box::new(store));
        let author = service
            .update(AuthorId::new(1), NewAuthor::new("Jane Doe"))
            .unwrap();
        assert!(author.updated_at.is_some());
    }

    #[test]
    fn store_errors_propagate_unchanged() {
        use crate::application::ApplicationError;

        let mut store = MockAuthorStore::new();
        store.expect_get().returning(|id| {
            Err(ApplicationError::AuthorNotFound { id }.into())
        });

        let service = AuthorService::new(Box::new(store));
        let err = service.get(AuthorId::new(42)).unwrap_err();
        assert!(matches!(
            err,
            BylineError::Application(ApplicationError::AuthorNotFound { .. })
        ));
    }
}
