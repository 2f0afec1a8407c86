//! Thread-safe in-memory record stores.
//!
//! These adapters are the reference implementation of the persistence
//! collaborator the core assumes: they assign ids, stamp timestamps, and
//! invoke the domain validators before every commit. For authors, the
//! uniqueness invariant is enforced here, under the write lock: the
//! validator's pre-commit lookup can race between check and commit, so the
//! check that counts is the one made while holding the lock.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use chrono::Utc;
use tracing::debug;

use byline_core::{
    application::{
        ApplicationError,
        ports::{AuthorStore, PostStore},
    },
    domain::{
        Author, AuthorId, DomainValidator as validator, NameLookup, NewAuthor, NewPost, Post,
        PostId,
    },
    error::{BylineError, BylineResult},
};

// ── Authors ──────────────────────────────────────────────────────────────────

struct AuthorTable {
    next_id: i64,
    rows: HashMap<AuthorId, Author>,
}

impl AuthorTable {
    fn name_taken(&self, name: &str, exclude: Option<AuthorId>) -> bool {
        self.rows
            .values()
            .any(|a| a.name == name && exclude != Some(a.id))
    }
}

/// Thread-safe in-memory author store.
#[derive(Clone)]
pub struct InMemoryAuthors {
    inner: Arc<RwLock<AuthorTable>>,
}

impl InMemoryAuthors {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(AuthorTable {
                next_id: 0,
                rows: HashMap::new(),
            })),
        }
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().rows.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryAuthors {
    fn default() -> Self {
        Self::new()
    }
}

impl NameLookup for InMemoryAuthors {
    fn name_taken(&self, name: &str, exclude: Option<AuthorId>) -> bool {
        self.inner.read().unwrap().name_taken(name, exclude)
    }
}

impl AuthorStore for InMemoryAuthors {
    fn insert(&self, candidate: NewAuthor) -> BylineResult<Author> {
        let mut table = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Validate under the held write lock: the uniqueness decision made
        // here cannot be invalidated by a concurrent commit.
        let lookup =
            |name: &str, exclude: Option<AuthorId>| table.name_taken(name, exclude);
        validator::validate_new_author(&candidate, &lookup).map_err(BylineError::Domain)?;

        table.next_id += 1;
        let id = AuthorId::new(table.next_id);
        let author = Author {
            id,
            name: candidate.name().to_string(),
            phone_number: candidate.phone_number().map(str::to_string),
            created_at: Utc::now(),
            updated_at: None,
        };
        table.rows.insert(id, author.clone());
        debug!(%id, "author row inserted");
        Ok(author)
    }

    fn update(&self, id: AuthorId, candidate: NewAuthor) -> BylineResult<Author> {
        let mut table = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !table.rows.contains_key(&id) {
            return Err(ApplicationError::AuthorNotFound { id }.into());
        }

        let lookup =
            |name: &str, exclude: Option<AuthorId>| table.name_taken(name, exclude);
        validator::validate_author_update(&candidate, id, &lookup).map_err(BylineError::Domain)?;

        let row = table.rows.get_mut(&id).expect("checked above");
        row.name = candidate.name().to_string();
        row.phone_number = candidate.phone_number().map(str::to_string);
        row.updated_at = Some(Utc::now());
        let author = row.clone();
        debug!(%id, "author row updated");
        Ok(author)
    }

    fn get(&self, id: AuthorId) -> BylineResult<Author> {
        let table = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        table
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| ApplicationError::AuthorNotFound { id }.into())
    }

    fn list(&self) -> BylineResult<Vec<Author>> {
        let table = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut authors: Vec<_> = table.rows.values().cloned().collect();
        authors.sort_by_key(|a| a.id.value());
        Ok(authors)
    }

    fn remove(&self, id: AuthorId) -> BylineResult<()> {
        let mut table = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        table
            .rows
            .remove(&id)
            .ok_or(ApplicationError::AuthorNotFound { id })?;
        debug!(%id, "author row removed");
        Ok(())
    }

    fn name_taken(&self, name: &str, exclude: Option<AuthorId>) -> bool {
        NameLookup::name_taken(self, name, exclude)
    }
}

// ── Posts ────────────────────────────────────────────────────────────────────

struct PostTable {
    next_id: i64,
    rows: HashMap<PostId, Post>,
}

/// Thread-safe in-memory post store.
#[derive(Clone)]
pub struct InMemoryPosts {
    inner: Arc<RwLock<PostTable>>,
}

impl InMemoryPosts {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(PostTable {
                next_id: 0,
                rows: HashMap::new(),
            })),
        }
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().rows.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryPosts {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore for InMemoryPosts {
    fn insert(&self, candidate: NewPost) -> BylineResult<Post> {
        // None of the post rules reads store state; validate before taking
        // the lock.
        let category = validator::validate_new_post(&candidate).map_err(BylineError::Domain)?;

        let mut table = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        table.next_id += 1;
        let id = PostId::new(table.next_id);
        let post = Post {
            id,
            title: candidate.title().to_string(),
            content: candidate.content().to_string(),
            summary: candidate.summary().map(str::to_string),
            category,
            created_at: Utc::now(),
            updated_at: None,
        };
        table.rows.insert(id, post.clone());
        debug!(%id, "post row inserted");
        Ok(post)
    }

    fn update(&self, id: PostId, candidate: NewPost) -> BylineResult<Post> {
        let category = validator::validate_new_post(&candidate).map_err(BylineError::Domain)?;

        let mut table = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let row = table
            .rows
            .get_mut(&id)
            .ok_or(ApplicationError::PostNotFound { id })?;
        row.title = candidate.title().to_string();
        row.content = candidate.content().to_string();
        row.summary = candidate.summary().map(str::to_string);
        row.category = category;
        row.updated_at = Some(Utc::now());
        let post = row.clone();
        debug!(%id, "post row updated");
        Ok(post)
    }

    fn get(&self, id: PostId) -> BylineResult<Post> {
        let table = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        table
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| ApplicationError::PostNotFound { id }.into())
    }

    fn list(&self) -> BylineResult<Vec<Post>> {
        let table = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut posts: Vec<_> = table.rows.values().cloned().collect();
        posts.sort_by_key(|p| p.id.value());
        Ok(posts)
    }

    fn remove(&self, id: PostId) -> BylineResult<()> {
        let mut table = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        table
            .rows
            .remove(&id)
            .ok_or(ApplicationError::PostNotFound { id })?;
        debug!(%id, "post row removed");
        Ok(())
    }
}
