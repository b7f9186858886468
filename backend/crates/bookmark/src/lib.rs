//! Bookmark Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Bookmark list, campaign reference, repository traits
//! - `application/` - Add / remove / list use cases
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Consistency Model
//! - A user's bookmarks are one ordered, duplicate-free list
//! - Updates are compare-and-swap on a version counter, retried on a lost
//!   race, so concurrent adds are never dropped
//! - Campaign existence is checked when adding, not afterwards

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BookmarkConfig;
pub use error::{BookmarkError, BookmarkResult};
pub use infra::{
    memory::{InMemoryBookmarkRepository, InMemoryCampaignRepository},
    postgres::PgBookmarkRepository,
};
pub use presentation::router::bookmark_router_generic;
