//! Byline Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the byline
//! blogging platform's validation core, following hexagonal (ports and
//! adapters) architecture. Its entire responsibility is the shape of the
//! `Author` and `Post` entities and the field-level rules a record must
//! pass before the store may commit it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        caller (data-access layer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (AuthorService, PostService)        │
//! │      validate, then commit              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │     (Driven: AuthorStore, PostStore)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     byline-adapters (Infrastructure)    │
//! │      (InMemoryAuthors, InMemoryPosts)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (NewAuthor, NewPost, the rule set)    │
//! │       No I/O, no suspension points      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use byline_core::{
//!     application::AuthorService,
//!     domain::NewAuthor,
//! };
//! # fn store() -> Box<dyn byline_core::application::AuthorStore> { unimplemented!() }
//!
//! // 1. Build a candidate (construction never validates)
//! let candidate = NewAuthor::new("Jane Doe").with_phone_number("5551234567");
//!
//! // 2. Use the application service (with an injected store adapter)
//! let service = AuthorService::new(store());
//! let author = service.create(candidate).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AuthorService, PostService,
        ports::{AuthorStore, PostStore},
    };
    pub use crate::domain::{
        Author, AuthorId, Category, DomainValidator, NameLookup, NewAuthor, NewPost, Post, PostId,
    };
    pub use crate::error::{BylineError, BylineResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
