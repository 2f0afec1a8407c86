//! Application layer for byline.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AuthorService, PostService)
//! - **Ports**: Interface definitions (traits) for the record store
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All validation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{AuthorService, PostService};

// Re-export port traits (for adapter implementation)
pub use ports::{AuthorStore, PostStore};

pub use error::ApplicationError;
