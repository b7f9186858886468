//! Repository Traits

use auth::UserId;

use crate::domain::entities::{BookmarkList, Campaign};
use crate::domain::value_objects::CampaignId;
use crate::error::BookmarkResult;

/// Bookmark list storage (lives on the user record)
#[trait_variant::make(BookmarkRepository: Send)]
pub trait LocalBookmarkRepository {
    /// Load a user's list; `None` if the user does not exist
    async fn find_list(&self, user_id: &UserId) -> BookmarkResult<Option<BookmarkList>>;

    /// Compare-and-swap save
    ///
    /// Writes `list.campaign_ids` and bumps the version only if the stored
    /// version still equals `list.version`. Returns `false` when another
    /// writer got there first.
    async fn save_list(&self, list: &BookmarkList) -> BookmarkResult<bool>;
}

/// Read-only campaign lookups
#[trait_variant::make(CampaignRepository: Send)]
pub trait LocalCampaignRepository {
    /// Check whether a campaign exists
    async fn exists(&self, campaign_id: CampaignId) -> BookmarkResult<bool>;

    /// Load every existing campaign among `ids` (order unspecified)
    async fn find_by_ids(&self, ids: &[CampaignId]) -> BookmarkResult<Vec<Campaign>>;
}
