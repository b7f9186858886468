//! List Bookmarks Use Case

use std::collections::HashMap;
use std::sync::Arc;

use auth::UserId;

use crate::domain::entities::Campaign;
use crate::domain::repository::{BookmarkRepository, CampaignRepository};
use crate::error::BookmarkResult;

/// List Bookmarks Use Case
pub struct ListBookmarksUseCase<B, C>
where
    B: BookmarkRepository,
    C: CampaignRepository,
{
    bookmark_repo: Arc<B>,
    campaign_repo: Arc<C>,
}

impl<B, C> ListBookmarksUseCase<B, C>
where
    B: BookmarkRepository,
    C: CampaignRepository,
{
    pub fn new(bookmark_repo: Arc<B>, campaign_repo: Arc<C>) -> Self {
        Self {
            bookmark_repo,
            campaign_repo,
        }
    }

    /// Bookmarked campaigns in insertion order
    ///
    /// Unknown users get an empty list. Entries whose campaign no longer
    /// exists are skipped.
    pub async fn execute(&self, user_id: &UserId) -> BookmarkResult<Vec<Campaign>> {
        let Some(list) = self.bookmark_repo.find_list(user_id).await? else {
            return Ok(Vec::new());
        };

        if list.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<_, _> = self
            .campaign_repo
            .find_by_ids(&list.campaign_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let campaigns: Vec<Campaign> = list
            .campaign_ids
            .iter()
            .filter_map(|id| by_id.remove(id))
            .collect();

        if campaigns.len() < list.len() {
            tracing::debug!(
                user_id = %user_id,
                dangling = list.len() - campaigns.len(),
                "Skipped bookmarks to missing campaigns"
            );
        }

        Ok(campaigns)
    }
}
