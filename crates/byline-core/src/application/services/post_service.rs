//! Post Service - post write/read orchestration.
//!
//! Same shape as the author path, minus the directory: none of the four
//! post rules consults external state, so validation here is a pure
//! function of the candidate.

use tracing::{info, instrument, warn};

use crate::{
    application::ports::PostStore,
    domain::{DomainValidator as validator, NewPost, Post, PostId},
    error::{BylineError, BylineResult},
};

/// Main post write path.
pub struct PostService {
    store: Box<dyn PostStore>,
}

impl PostService {
    /// Create a new post service with the given store adapter.
    pub fn new(store: Box<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Create a post record from a candidate.
    ///
    /// Validation order: title, content, summary, category. The first
    /// failing rule rejects the whole write.
    #[instrument(skip_all, fields(title = %candidate.title()))]
    pub fn create(&self, candidate: NewPost) -> BylineResult<Post> {
        validator::validate_new_post(&candidate).map_err(|e| {
            warn!(error = %e, "Rejected post create");
            BylineError::Domain(e)
        })?;

        let post = self.store.insert(candidate)?;
        info!(id = %post.id, category = %post.category, "Post created");
        Ok(post)
    }

    /// Replace the caller-supplied fields of an existing record. Each
    /// update is re-validated in full; the store refreshes `updated_at`.
    #[instrument(skip_all, fields(id = %id, title = %candidate.title()))]
    pub fn update(&self, id: PostId, candidate: NewPost) -> BylineResult<Post> {
        validator::validate_new_post(&candidate).map_err(|e| {
            warn!(error = %e, "Rejected post update");
            BylineError::Domain(e)
        })?;

        let post = self.store.update(id, candidate)?;
        info!(id = %post.id, "Post updated");
        Ok(post)
    }

    /// Fetch a record by id.
    pub fn get(&self, id: PostId) -> BylineResult<Post> {
        self.store.get(id)
    }

    /// List all records.
    pub fn list(&self) -> BylineResult<Vec<Post>> {
        self.store.list()
    }

    /// Delete a record. Destruction involves no validation.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete(&self, id: PostId) -> BylineResult<()> {
        self.store.remove(id)?;
        info!("Post deleted");
        Ok(())
    }
}
