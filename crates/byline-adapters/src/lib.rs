//! Infrastructure adapters for byline.
//!
//! This crate implements the ports defined in
//! `byline_core::application::ports`. It plays the role of the "external
//! Persistence" and "Record Lookup" collaborators: it owns identity
//! assignment and timestamps, invokes validation before every commit, and
//! enforces the author-name uniqueness invariant under its own lock.

pub mod record_store;

// Re-export commonly used adapters
pub use record_store::{InMemoryAuthors, InMemoryPosts};
