//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{BookmarkList, Campaign};
pub use repository::{BookmarkRepository, CampaignRepository};
pub use value_objects::CampaignId;
