//! Record store adapters.

pub mod memory;

pub use memory::{InMemoryAuthors, InMemoryPosts};
