//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the record store.
//! The `byline-adapters` crate provides implementations.
//!
//! The contract both stores must honour on commit:
//! - assign the integer id; never reuse one
//! - stamp `created_at` once at insert; leave `updated_at` empty
//! - refresh `updated_at` on every update
//! - treat any validation failure as "do not commit"; no partial writes

use crate::domain::{Author, AuthorId, NewAuthor, NewPost, Post, PostId};
use crate::error::BylineResult;

#[cfg(test)]
use mockall::automock;

/// Port for author record persistence.
///
/// Implemented by:
/// - `byline_adapters::record_store::InMemoryAuthors` (reference/testing)
///
/// `name_taken` doubles as the Record Lookup capability consumed by name
/// validation; the service bridges it into `domain::NameLookup` with a
/// closure. Implementations must also re-check uniqueness under their own
/// write discipline at commit time; the pre-commit lookup alone cannot
/// exclude a check-then-commit race.
#[cfg_attr(test, automock)]
pub trait AuthorStore: Send + Sync {
    /// Commit a validated candidate as a new record.
    fn insert(&self, candidate: NewAuthor) -> BylineResult<Author>;

    /// Replace the caller-supplied fields of an existing record.
    fn update(&self, id: AuthorId, candidate: NewAuthor) -> BylineResult<Author>;

    /// Fetch a record by id.
    fn get(&self, id: AuthorId) -> BylineResult<Author>;

    /// List all records.
    fn list(&self) -> BylineResult<Vec<Author>>;

    /// Delete a record. No validation is involved in destruction.
    fn remove(&self, id: AuthorId) -> BylineResult<()>;

    /// Whether an author other than `exclude` already uses `name`.
    fn name_taken(&self, name: &str, exclude: Option<AuthorId>) -> bool;
}

/// Port for post record persistence.
///
/// Implemented by:
/// - `byline_adapters::record_store::InMemoryPosts` (reference/testing)
#[cfg_attr(test, automock)]
pub trait PostStore: Send + Sync {
    /// Commit a validated candidate as a new record.
    fn insert(&self, candidate: NewPost) -> BylineResult<Post>;

    /// Replace the caller-supplied fields of an existing record.
    fn update(&self, id: PostId, candidate: NewPost) -> BylineResult<Post>;

    /// Fetch a record by id.
    fn get(&self, id: PostId) -> BylineResult<Post>;

    /// List all records.
    fn list(&self) -> BylineResult<Vec<Post>>;

    /// Delete a record. No validation is involved in destruction.
    fn remove(&self, id: PostId) -> BylineResult<()>;
}
