//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryBookmarkRepository, InMemoryCampaignRepository};
pub use postgres::PgBookmarkRepository;
