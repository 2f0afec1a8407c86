//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `byline-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `AuthorStore`: author record persistence + the name directory
//!   - `PostStore`: post record persistence

pub mod output;

pub use output::{AuthorStore, PostStore};
